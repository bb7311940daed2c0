use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000001_user::User;

static IDX_ACCOUNT_PROVIDER_ACCOUNT: &str = "idx-account-provider_id-account_id";
static FK_ACCOUNT_USER_ID: &str = "fk-account-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_uuid(Account::Id))
                    .col(uuid(Account::UserId))
                    .col(string(Account::ProviderId))
                    .col(string(Account::AccountId))
                    .col(text_null(Account::AccessToken))
                    .col(string_null(Account::Scope))
                    .col(timestamp(Account::CreatedAt))
                    .col(timestamp(Account::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNT_PROVIDER_ACCOUNT)
                    .table(Account::Table)
                    .col(Account::ProviderId)
                    .col(Account::AccountId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACCOUNT_USER_ID)
                    .from_tbl(Account::Table)
                    .from_col(Account::UserId)
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
                    .name(FK_ACCOUNT_USER_ID)
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOUNT_PROVIDER_ACCOUNT)
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    UserId,
    ProviderId,
    AccountId,
    AccessToken,
    Scope,
    CreatedAt,
    UpdatedAt,
}
