// Wire types shared by the trivia API and its front end

pub mod trivia;
pub mod typescript_gen;

pub use typescript_gen::{generate_typescript_definitions, API_TYPE_NAMES};

pub use trivia::{
    CategoriesResponse, Category, CategoryMap, CreateQuestionRequest, DeleteQuestionResponse,
    ErrorResponse, HealthResponse, Question, QuestionListResponse, QuestionPageResponse,
    QuizCategory, QuizRequest, QuizResponse, Scalar, SearchQuestionsRequest,
};
