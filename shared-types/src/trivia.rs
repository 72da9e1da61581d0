use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A trivia question with all five fields populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    #[ts(type = "number")]
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Category identifier, stored as text.
    pub category: String,
    #[ts(type = "number")]
    pub difficulty: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    #[ts(type = "number")]
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Categories rendered as a JSON object of `id -> type`, keeping the order
/// they were fetched in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMap(pub Vec<Category>);

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.id, &category.kind)?;
        }
        map.end()
    }
}

impl From<Vec<Category>> for CategoryMap {
    fn from(categories: Vec<Category>) -> Self {
        Self(categories)
    }
}

/// A loosely typed JSON scalar as accepted by the write endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Scalar {
    /// Zero, empty text and `false` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Integer(i) => *i != 0,
            Scalar::Float(f) => *f != 0.0,
            Scalar::Text(s) => !s.is_empty(),
            Scalar::Bool(b) => *b,
        }
    }

    /// Text form used for storage and comparison.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Integer(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Text(s) => s.clone(),
            Scalar::Bool(true) => "True".to_string(),
            Scalar::Bool(false) => "False".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateQuestionRequest {
    pub question: Option<Scalar>,
    pub answer: Option<Scalar>,
    pub category: Option<Scalar>,
    pub difficulty: Option<Scalar>,
}

impl CreateQuestionRequest {
    pub const REQUIRED_KEYS: [&'static str; 4] = ["question", "answer", "category", "difficulty"];
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<Scalar>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuizCategory {
    pub id: Scalar,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl QuizCategory {
    /// Category id `0` means "draw from every category".
    ///
    /// The check is on the id's text form, so the string `"0"` is the
    /// sentinel too rather than a filter on a category stored as `"0"`.
    pub fn is_all(&self) -> bool {
        self.id.to_text() == "0"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    #[ts(type = "Array<number>")]
    pub previous_questions: Vec<i64>,
}

impl QuizRequest {
    pub const REQUIRED_KEYS: [&'static str; 2] = ["quiz_category", "previous_questions"];
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CategoriesResponse {
    pub success: bool,
    #[ts(type = "Record<string, string>")]
    pub categories: CategoryMap,
}

/// `GET /questions`: one page plus the category lookup table.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[ts(type = "Record<string, string>")]
    pub categories: CategoryMap,
    #[ts(type = "number | null")]
    pub current_category: Option<i64>,
}

/// Shared by create, search and per-category listing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[ts(type = "number | null")]
    pub current_category: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    #[ts(type = "number")]
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

/// `GET /health`: whether the question store can be read. Counts are
/// `null` when it cannot.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub total_categories: Option<usize>,
    pub total_questions: Option<usize>,
    pub timestamp: String,
}
