pub mod factory;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the given email.
    pub async fn insert_user(&mut self, email: &str) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set("Test User".to_string()),
            email: ActiveValue::Set(email.to_string()),
            email_verified: ActiveValue::Set(true),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        Ok(user.insert(&self.setup.db).await?)
    }

    /// Insert an account linking `user_id` to a provider account.
    pub async fn insert_account(
        &mut self,
        user_id: Uuid,
        provider_id: &str,
        account_id: &str,
    ) -> Result<entity::account::Model, TestError> {
        let now = Utc::now().naive_utc();

        let account = entity::account::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            provider_id: ActiveValue::Set(provider_id.to_string()),
            account_id: ActiveValue::Set(account_id.to_string()),
            access_token: ActiveValue::Set(None),
            scope: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        Ok(account.insert(&self.setup.db).await?)
    }

    /// Insert a user together with a linked GitHub account.
    pub async fn insert_user_with_github_account(
        &mut self,
        email: &str,
        github_id: i64,
    ) -> Result<(entity::user::Model, entity::account::Model), TestError> {
        let user = self.insert_user(email).await?;
        let account = self
            .insert_account(user.id, "github", &github_id.to_string())
            .await?;

        Ok((user, account))
    }
}
