use shared_types::{CreateQuestionRequest, Scalar};

/// A question ready to be inserted; the id is assigned by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i64,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InvalidQuestion {
    #[error("difficulty must be an integer, got {0:?}")]
    Difficulty(Scalar),
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = InvalidQuestion;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            question: text_or_empty(req.question),
            answer: text_or_empty(req.answer),
            category: text_or_empty(req.category),
            difficulty: difficulty(req.difficulty)?,
        })
    }
}

fn text_or_empty(value: Option<Scalar>) -> String {
    value.map(|v| v.to_text()).unwrap_or_default()
}

/// Blank difficulty is stored as 0 (unrated).
fn difficulty(value: Option<Scalar>) -> Result<i64, InvalidQuestion> {
    match value {
        None => Ok(0),
        Some(Scalar::Integer(i)) => Ok(i),
        Some(Scalar::Float(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        Some(Scalar::Text(ref s)) if s.trim().is_empty() => Ok(0),
        Some(Scalar::Text(ref s)) => s
            .trim()
            .parse()
            .map_err(|_| InvalidQuestion::Difficulty(Scalar::Text(s.clone()))),
        Some(other) => Err(InvalidQuestion::Difficulty(other)),
    }
}
