use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use mentor_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }
    let state = AppState::new(config.clone())
        .await
        .expect("failed to initialise application state");

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        // The frontend is a browser userscript running on the LMS origin, so
        // requests always arrive cross-origin.
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::new_conversation)
            .service(handlers::prewarm)
            .service(handlers::send_message)
            .service(handlers::generate_quiz)
            .service(handlers::get_quiz)
            .service(handlers::quiz_questions)
            .service(handlers::record_attempt)
            .service(handlers::progress)
            .service(handlers::upload_material)
            .service(handlers::list_materials)
            .service(handlers::set_material_file_url)
            .service(handlers::create_session)
            .service(handlers::invalidate_session)
    })
    .bind((host, port))?
    .run()
    .await
}
