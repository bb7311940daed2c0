use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

/// Session record as written by the session store.
pub struct SessionRecord {
    pub id: String,
    pub user_id: Option<Uuid>,
    pub data: String,
    pub expires_at: NaiveDateTime,
}

pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    /// Creates a new instance of [`SessionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether a session with `id` exists, expired or not
    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Session::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts the session or replaces the stored data of an existing one
    pub async fn upsert(&self, record: SessionRecord) -> Result<entity::session::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let session = entity::session::ActiveModel {
            id: ActiveValue::Set(record.id),
            user_id: ActiveValue::Set(record.user_id),
            data: ActiveValue::Set(record.data),
            expires_at: ActiveValue::Set(record.expires_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        entity::prelude::Session::insert(session)
            .on_conflict(
                OnConflict::column(entity::session::Column::Id)
                    .update_columns([
                        entity::session::Column::UserId,
                        entity::session::Column::Data,
                        entity::session::Column::ExpiresAt,
                        entity::session::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Finds a session that has not yet expired
    pub async fn find_unexpired(&self, id: &str) -> Result<Option<entity::session::Model>, DbErr> {
        entity::prelude::Session::find_by_id(id.to_string())
            .filter(entity::session::Column::ExpiresAt.gt(Utc::now().naive_utc()))
            .one(self.db)
            .await
    }

    /// Deletes a session
    ///
    /// Returns OK regardless of the session existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Session::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }

    /// Deletes every expired session
    pub async fn delete_expired(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Session::delete_many()
            .filter(entity::session::Column::ExpiresAt.lte(Utc::now().naive_utc()))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use devpad_test_utils::prelude::*;

    use super::{SessionRecord, SessionRepository};

    fn record(id: &str, data: &str, expires_in: Duration) -> SessionRecord {
        SessionRecord {
            id: id.to_string(),
            user_id: None,
            data: data.to_string(),
            expires_at: Utc::now().naive_utc() + expires_in,
        }
    }

    mod upsert {
        use super::*;

        /// Expect a new session to be inserted
        #[tokio::test]
        async fn inserts_session() -> Result<(), TestError> {
            let test = TestBuilder::new().with_auth_tables().build().await?;
            let session_repo = SessionRepository::new(&test.db);

            session_repo
                .upsert(record("session", "{}", Duration::days(7)))
                .await?;

            assert!(session_repo.exists("session").await?);

            Ok(())
        }

        /// Expect the data of an existing session to be replaced
        #[tokio::test]
        async fn replaces_existing_session() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_auth_tables().build().await?;
            let user_model = test.user().insert_user(TEST_GITHUB_EMAIL).await?;
            let session_repo = SessionRepository::new(&test.db);

            session_repo
                .upsert(record("session", "{}", Duration::days(7)))
                .await?;
            session_repo
                .upsert(SessionRecord {
                    user_id: Some(user_model.id),
                    ..record("session", "{\"a\":1}", Duration::days(7))
                })
                .await?;

            let session = session_repo.find_unexpired("session").await?.unwrap();

            assert_eq!(session.data, "{\"a\":1}");
            assert_eq!(session.user_id, Some(user_model.id));

            Ok(())
        }
    }

    mod find_unexpired {
        use super::*;

        /// Expect None for an expired session
        #[tokio::test]
        async fn ignores_expired_session() -> Result<(), TestError> {
            let test = TestBuilder::new().with_auth_tables().build().await?;
            let session_repo = SessionRepository::new(&test.db);

            session_repo
                .upsert(record("session", "{}", -Duration::minutes(1)))
                .await?;

            assert!(session_repo.find_unexpired("session").await?.is_none());
            assert!(session_repo.exists("session").await?);

            Ok(())
        }
    }

    mod delete {
        use super::*;

        /// Expect the session to be removed
        #[tokio::test]
        async fn deletes_session() -> Result<(), TestError> {
            let test = TestBuilder::new().with_auth_tables().build().await?;
            let session_repo = SessionRepository::new(&test.db);

            session_repo
                .upsert(record("session", "{}", Duration::days(7)))
                .await?;
            let result = session_repo.delete("session").await?;

            assert_eq!(result.rows_affected, 1);
            assert!(!session_repo.exists("session").await?);

            Ok(())
        }

        /// Expect only expired sessions to be removed
        #[tokio::test]
        async fn deletes_expired_sessions() -> Result<(), TestError> {
            let test = TestBuilder::new().with_auth_tables().build().await?;
            let session_repo = SessionRepository::new(&test.db);

            session_repo
                .upsert(record("expired", "{}", -Duration::minutes(1)))
                .await?;
            session_repo
                .upsert(record("active", "{}", Duration::days(7)))
                .await?;

            let result = session_repo.delete_expired().await?;

            assert_eq!(result.rows_affected, 1);
            assert!(session_repo.exists("active").await?);
            assert!(!session_repo.exists("expired").await?);

            Ok(())
        }
    }
}
