// src/main.rs

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenvy::dotenv;
use env_logger::Env;
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use luxurystay_api::{api, config, docs, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let database_url = config::database_url()
        .expect("DATABASE_URL must be set (or the discrete PG* variables)");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to DB");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let port = config::port();
    let cors_origin = config::cors_origin();
    log::info!("API listening on http://localhost:{port}");

    let state = web::Data::new(AppState { pool });

    HttpServer::new(move || {
        let cors = if cors_origin == "*" {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            Cors::default()
                .allowed_origin(&cors_origin)
                .allow_any_method()
                .allow_any_header()
        };

        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
            )
            .service(api::health)
            .service(api::contact::submit_contact)
            .service(api::chat::chat_reply)
            .service(api::profile::get_profile)
            .service(api::bookings::list_bookings)
            .service(api::bookings::create_booking)
            .service(api::bookings::booking_summary)
            .service(api::bookings::confirm_payment)
            .service(api::payments::charge_card)
            .service(api::payments::generate_qr)
            .service(api::payments::payment_status)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
