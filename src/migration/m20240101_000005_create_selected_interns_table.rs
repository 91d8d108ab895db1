use sea_orm_migration::prelude::*;

use super::m20240101_000003_create_applications_table::Applications;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SelectedInterns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SelectedInterns::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SelectedInterns::ApplicationId).integer().null())
                    .col(ColumnDef::new(SelectedInterns::FullName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(SelectedInterns::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(SelectedInterns::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SelectedInterns::Position).string_len(255).not_null())
                    .col(ColumnDef::new(SelectedInterns::College).string_len(255).not_null())
                    .col(
                        ColumnDef::new(SelectedInterns::StartDate)
                            .date()
                            .default(Expr::current_date()),
                    )
                    .col(
                        ColumnDef::new(SelectedInterns::Status)
                            .string_len(50)
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(SelectedInterns::CreatedAt)
                            .timestamp()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_selected_interns_application_id")
                            .from(SelectedInterns::Table, SelectedInterns::ApplicationId)
                            .to(Applications::Table, Applications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(SelectedInterns::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum SelectedInterns {
    Table,
    Id,
    ApplicationId,
    FullName,
    Email,
    PasswordHash,
    Position,
    College,
    StartDate,
    Status,
    CreatedAt,
}
