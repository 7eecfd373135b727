pub mod api;
pub mod config;
pub mod db;
pub mod docs;
pub mod ids;
pub mod models;
pub mod pricing;
pub mod validate;
pub mod wizard;

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
