use crate::config::{ApiConfig, CorsConfig};
use crate::handlers::{self, categories, health, questions, quizzes};
use crate::middleware::AccessControlHeaders;
use crate::pagination::Pagination;
use crate::storage::SharedStorage;
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;

/// Register every route. Shared by the server and the integration tests.
///
/// Path ids arrive as digit strings; each handler decides how an id that
/// does not fit an `i64` fails.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/categories")
            .route(web::get().to(categories::list_categories))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource(r"/categories/{category_id:\d+}/questions")
            .route(web::get().to(categories::questions_by_category))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/questions")
            .route(web::get().to(questions::list_questions))
            .route(web::post().to(questions::create_question))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/questions/search")
            .route(web::post().to(questions::search_questions))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource(r"/questions/{id:\d+}")
            .route(web::delete().to(questions::delete_question))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/quizzes")
            .route(web::post().to(quizzes::next_question))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .route("/health", web::get().to(health::health_check))
    .default_service(web::to(handlers::not_found));
}

pub fn build_cors(config: &CorsConfig) -> Cors {
    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
    }

    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
}

/// Run the HTTP server until it is shut down.
pub async fn serve(config: &ApiConfig, storage: SharedStorage) -> std::io::Result<()> {
    let pagination = Pagination::new(config.pagination.page_size);
    let cors_config = config.cors.clone();
    let bind_addr = config.bind_addr();

    info!("Starting trivia-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(pagination))
            .wrap(build_cors(&cors_config))
            .wrap(AccessControlHeaders)
            .configure(configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
