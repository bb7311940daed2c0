pub use sea_orm_migration::prelude::*;

mod m20251018_000001_user;
mod m20251018_000002_account;
mod m20251018_000003_session;
mod m20251018_000004_verification;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_user::Migration),
            Box::new(m20251018_000002_account::Migration),
            Box::new(m20251018_000003_session::Migration),
            Box::new(m20251018_000004_verification::Migration),
        ]
    }
}
