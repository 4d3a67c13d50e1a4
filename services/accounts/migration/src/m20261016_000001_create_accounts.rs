use sea_orm_migration::prelude::*;

use tessera_accounts_schema::accounts::{EMAIL_UNIQUE_INDEX, VERIFICATION_TOKEN_UNIQUE_INDEX};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Accounts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Accounts::Email).string().not_null())
                    .col(ColumnDef::new(Accounts::PasswordHash).string())
                    .col(ColumnDef::new(Accounts::FirstName).string())
                    .col(ColumnDef::new(Accounts::LastName).string())
                    .col(
                        ColumnDef::new(Accounts::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Accounts::VerificationToken).string())
                    .col(
                        ColumnDef::new(Accounts::Provider)
                            .string()
                            .not_null()
                            .default("local"),
                    )
                    .col(ColumnDef::new(Accounts::ProviderId).string())
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Accounts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index names are matched when mapping unique violations to domain errors.
        manager
            .create_index(
                Index::create()
                    .table(Accounts::Table)
                    .col(Accounts::Email)
                    .name(EMAIL_UNIQUE_INDEX)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Accounts::Table)
                    .col(Accounts::VerificationToken)
                    .name(VERIFICATION_TOKEN_UNIQUE_INDEX)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    Status,
    VerificationToken,
    Provider,
    ProviderId,
    CreatedAt,
    UpdatedAt,
}
