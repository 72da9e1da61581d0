use crate::models::NewQuestion;
use crate::storage::{CategoryOrder, StorageError, TriviaStorage};
use tracing::info;

pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, category type, difficulty)
const STARTER_QUESTIONS: &[(&str, &str, &str, i64)] = &[
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", "History", 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", "History", 1),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", "Entertainment", 4),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", "Sports", 3),
    ("What is the largest lake in Africa?", "Lake Victoria", "Geography", 2),
    ("The Taj Mahal is located in which Indian city?", "Agra", "Geography", 2),
    ("La Giaconda is better known as what?", "Mona Lisa", "Art", 3),
    ("What is the heaviest organ in the human body?", "The Liver", "Science", 4),
    ("Who discovered penicillin?", "Alexander Fleming", "Science", 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", "Science", 4),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub categories_created: usize,
    pub questions_created: usize,
}

/// Populate an empty database. Tables that already hold rows are left alone,
/// so running this twice is harmless.
pub async fn seed(
    storage: &dyn TriviaStorage,
    with_questions: bool,
) -> Result<SeedReport, StorageError> {
    let mut report = SeedReport::default();

    if storage.list_categories(CategoryOrder::ById).await?.is_empty() {
        for kind in DEFAULT_CATEGORIES {
            storage.create_category(kind).await?;
            report.categories_created += 1;
        }
        info!(count = report.categories_created, "Seeded categories");
    }

    if with_questions && storage.list_questions().await?.is_empty() {
        let categories = storage.list_categories(CategoryOrder::ById).await?;

        for (question, answer, kind, difficulty) in STARTER_QUESTIONS {
            let Some(category) = categories.iter().find(|c| c.kind == *kind) else {
                continue;
            };
            storage
                .create_question(NewQuestion {
                    question: question.to_string(),
                    answer: answer.to_string(),
                    category: category.id.to_string(),
                    difficulty: *difficulty,
                })
                .await?;
            report.questions_created += 1;
        }
        info!(count = report.questions_created, "Seeded questions");
    }

    Ok(report)
}
