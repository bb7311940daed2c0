//! In-memory user models for tests that don't need the database.

use chrono::Utc;
use uuid::Uuid;

/// Create a user model with standard test values.
pub fn mock_user_model(email: &str) -> entity::user::Model {
    let now = Utc::now().naive_utc();

    entity::user::Model {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: email.to_string(),
        email_verified: true,
        image: None,
        created_at: now,
        updated_at: now,
    }
}
