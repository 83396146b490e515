use crate::config::Config;
use sea_orm::DatabaseConnection;

// Shared via `web::Data` (an Arc); the connection itself is never cloned.
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}
