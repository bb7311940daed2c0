use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000001_user::User;

static IDX_SESSION_EXPIRES_AT: &str = "idx-session-expires_at";
static FK_SESSION_USER_ID: &str = "fk-session-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(string(Session::Id).primary_key())
                    .col(uuid_null(Session::UserId))
                    .col(text(Session::Data))
                    .col(timestamp(Session::ExpiresAt))
                    .col(timestamp(Session::CreatedAt))
                    .col(timestamp(Session::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Expired session cleanup scans by expiry
        manager
            .create_index(
                Index::create()
                    .name(IDX_SESSION_EXPIRES_AT)
                    .table(Session::Table)
                    .col(Session::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SESSION_USER_ID)
                    .from_tbl(Session::Table)
                    .from_col(Session::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SESSION_USER_ID)
                    .table(Session::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SESSION_EXPIRES_AT)
                    .table(Session::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Session {
    Table,
    Id,
    UserId,
    Data,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}
