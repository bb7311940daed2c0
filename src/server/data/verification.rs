use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, ModelTrait, QueryFilter,
};
use uuid::Uuid;

pub struct VerificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VerificationRepository<'a, C> {
    /// Creates a new instance of [`VerificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores `value` under `identifier` until `expires_at`
    pub async fn create(
        &self,
        identifier: &str,
        value: String,
        expires_at: NaiveDateTime,
    ) -> Result<entity::verification::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let verification = entity::verification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            identifier: ActiveValue::Set(identifier.to_string()),
            value: ActiveValue::Set(value),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        verification.insert(self.db).await
    }

    /// Removes the value stored under `identifier` and returns it
    ///
    /// The record is deleted whether or not it has expired so an identifier can only be
    /// consumed once. Returns `Ok(None)` for unknown or expired identifiers.
    pub async fn consume(
        &self,
        identifier: &str,
    ) -> Result<Option<entity::verification::Model>, DbErr> {
        let Some(verification) = entity::prelude::Verification::find()
            .filter(entity::verification::Column::Identifier.eq(identifier))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        verification.clone().delete(self.db).await?;

        if verification.expires_at <= Utc::now().naive_utc() {
            return Ok(None);
        }

        Ok(Some(verification))
    }

    /// Deletes every expired record
    pub async fn delete_expired(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Verification::delete_many()
            .filter(entity::verification::Column::ExpiresAt.lte(Utc::now().naive_utc()))
            .exec(self.db)
            .await
    }
}
