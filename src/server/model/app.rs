use sea_orm::DatabaseConnection;

use crate::server::service::auth::AuthService;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: AuthService,
}
