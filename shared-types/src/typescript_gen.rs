/// Every exported API type, in the order they are written to `types.ts`.
pub const API_TYPE_NAMES: &[&str] = &[
    "Question",
    "Category",
    "Scalar",
    "CreateQuestionRequest",
    "SearchQuestionsRequest",
    "QuizCategory",
    "QuizRequest",
    "CategoriesResponse",
    "QuestionPageResponse",
    "QuestionListResponse",
    "DeleteQuestionResponse",
    "QuizResponse",
    "ErrorResponse",
    "HealthResponse",
];

pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;
    use ts_rs::TS;

    let result = match name {
        "Question" => Question::export_to_string()?,
        "Category" => Category::export_to_string()?,
        "Scalar" => Scalar::export_to_string()?,

        "CreateQuestionRequest" => CreateQuestionRequest::export_to_string()?,
        "SearchQuestionsRequest" => SearchQuestionsRequest::export_to_string()?,
        "QuizCategory" => QuizCategory::export_to_string()?,
        "QuizRequest" => QuizRequest::export_to_string()?,

        "CategoriesResponse" => CategoriesResponse::export_to_string()?,
        "QuestionPageResponse" => QuestionPageResponse::export_to_string()?,
        "QuestionListResponse" => QuestionListResponse::export_to_string()?,
        "DeleteQuestionResponse" => DeleteQuestionResponse::export_to_string()?,
        "QuizResponse" => QuizResponse::export_to_string()?,
        "ErrorResponse" => ErrorResponse::export_to_string()?,

        "HealthResponse" => HealthResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in shared-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .cloned()
        .collect();

    filtered.join("\n").trim().to_string()
}
