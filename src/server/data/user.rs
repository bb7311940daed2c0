use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

/// Fields of a new user record.
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub image: Option<String>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with a random ID
    pub async fn create(&self, user: NewUser) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(user.name),
            email: ActiveValue::Set(user.email),
            email_verified: ActiveValue::Set(user.email_verified),
            image: ActiveValue::Set(user.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        user.insert(self.db).await
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
