//! Database-backed session store.
//!
//! [`DbSessionStore`] persists tower-sessions records in the `session` table. The record data
//! is stored as JSON; the signed-in user ID is copied into its own column so sessions can be
//! related to their user.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime};
use sea_orm::DatabaseConnection;
use time::OffsetDateTime;
use tower_sessions::{
    session::{Id, Record},
    session_store, ExpiredDeletion, SessionStore,
};
use uuid::Uuid;

use crate::server::{
    data::session::{SessionRecord, SessionRepository},
    model::session::user::SESSION_USER_ID_KEY,
};

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "devpad.session_token";

/// Session store persisting records through [`SessionRepository`].
#[derive(Clone, Debug)]
pub struct DbSessionStore {
    db: DatabaseConnection,
}

impl DbSessionStore {
    /// Creates a new instance of [`DbSessionStore`]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_session_record(record: &Record) -> session_store::Result<SessionRecord> {
        let data = serde_json::to_string(&record.data)
            .map_err(|e| session_store::Error::Encode(e.to_string()))?;

        Ok(SessionRecord {
            id: record.id.to_string(),
            user_id: user_id_of(record),
            data,
            expires_at: to_naive(record.expiry_date)?,
        })
    }
}

#[async_trait]
impl SessionStore for DbSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        let session_repo = SessionRepository::new(&self.db);

        // Regenerate on the unlikely collision with an existing ID
        while session_repo
            .exists(&record.id.to_string())
            .await
            .map_err(backend)?
        {
            record.id = Id::default();
        }

        session_repo
            .upsert(Self::to_session_record(record)?)
            .await
            .map_err(backend)?;

        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        SessionRepository::new(&self.db)
            .upsert(Self::to_session_record(record)?)
            .await
            .map_err(backend)?;

        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let Some(session) = SessionRepository::new(&self.db)
            .find_unexpired(&session_id.to_string())
            .await
            .map_err(backend)?
        else {
            return Ok(None);
        };

        let data = serde_json::from_str(&session.data)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;

        Ok(Some(Record {
            id: *session_id,
            data,
            expiry_date: from_naive(session.expires_at)?,
        }))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        SessionRepository::new(&self.db)
            .delete(&session_id.to_string())
            .await
            .map_err(backend)?;

        Ok(())
    }
}

#[async_trait]
impl ExpiredDeletion for DbSessionStore {
    async fn delete_expired(&self) -> session_store::Result<()> {
        SessionRepository::new(&self.db)
            .delete_expired()
            .await
            .map_err(backend)?;

        Ok(())
    }
}

fn backend(err: sea_orm::DbErr) -> session_store::Error {
    session_store::Error::Backend(err.to_string())
}

/// Signed-in user stored in the record, if any.
fn user_id_of(record: &Record) -> Option<Uuid> {
    record
        .data
        .get(SESSION_USER_ID_KEY)
        .and_then(|value| value.as_str())
        .and_then(|id| Uuid::parse_str(id).ok())
}

fn to_naive(date: OffsetDateTime) -> session_store::Result<NaiveDateTime> {
    DateTime::from_timestamp(date.unix_timestamp(), date.nanosecond())
        .map(|date| date.naive_utc())
        .ok_or_else(|| session_store::Error::Encode(format!("Expiry {} out of range", date)))
}

fn from_naive(date: NaiveDateTime) -> session_store::Result<OffsetDateTime> {
    let date = date.and_utc();

    OffsetDateTime::from_unix_timestamp(date.timestamp())
        .and_then(|d| d.replace_nanosecond(date.timestamp_subsec_nanos()))
        .map_err(|e| session_store::Error::Decode(e.to_string()))
}
