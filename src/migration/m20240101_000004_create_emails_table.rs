use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Emails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Emails::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Emails::ToEmail).string_len(255).not_null())
                    .col(ColumnDef::new(Emails::Subject).string_len(500).not_null())
                    .col(ColumnDef::new(Emails::Body).text().not_null())
                    .col(
                        ColumnDef::new(Emails::SentAt)
                            .timestamp()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Emails::UserId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_emails_user_id")
                            .from(Emails::Table, Emails::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Emails::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Emails {
    Table,
    Id,
    ToEmail,
    Subject,
    Body,
    SentAt,
    UserId,
}
