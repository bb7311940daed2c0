use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

/// Fields of a new provider account record.
pub struct NewAccount<'s> {
    pub user_id: Uuid,
    pub provider_id: &'s str,
    pub account_id: &'s str,
    pub access_token: Option<String>,
    pub scope: Option<String>,
}

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a provider account to a user
    pub async fn create(&self, account: NewAccount<'_>) -> Result<entity::account::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let account = entity::account::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(account.user_id),
            provider_id: ActiveValue::Set(account.provider_id.to_string()),
            account_id: ActiveValue::Set(account.account_id.to_string()),
            access_token: ActiveValue::Set(account.access_token),
            scope: ActiveValue::Set(account.scope),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        account.insert(self.db).await
    }

    /// Finds the account for a provider's user ID along with the user it is linked to
    pub async fn find_by_provider_account(
        &self,
        provider_id: &str,
        account_id: &str,
    ) -> Result<Option<(entity::account::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::ProviderId.eq(provider_id))
            .filter(entity::account::Column::AccountId.eq(account_id))
            .find_also_related(entity::user::Entity)
            .one(self.db)
            .await
    }

    /// Replaces the stored access token and granted scope after a new sign-in
    pub async fn update_access_token(
        &self,
        account: entity::account::Model,
        access_token: Option<String>,
        scope: Option<String>,
    ) -> Result<entity::account::Model, DbErr> {
        let mut account_am = account.into_active_model();
        account_am.access_token = ActiveValue::Set(access_token);
        account_am.scope = ActiveValue::Set(scope);
        account_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        account_am.update(self.db).await
    }
}
