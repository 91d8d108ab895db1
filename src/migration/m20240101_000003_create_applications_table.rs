use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::Position).string_len(255).not_null())
                    .col(ColumnDef::new(Applications::FullName).string_len(255).not_null())
                    .col(ColumnDef::new(Applications::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Applications::Phone).string_len(50).not_null())
                    .col(ColumnDef::new(Applications::Address).text().not_null())
                    .col(ColumnDef::new(Applications::College).string_len(255).not_null())
                    .col(ColumnDef::new(Applications::Degree).string_len(255).not_null())
                    .col(ColumnDef::new(Applications::Semester).string_len(50).not_null())
                    .col(ColumnDef::new(Applications::Year).string_len(50).not_null())
                    .col(ColumnDef::new(Applications::About).text().not_null())
                    .col(ColumnDef::new(Applications::ResumeName).string_len(255).null())
                    .col(ColumnDef::new(Applications::ResumeData).blob().null())
                    .col(ColumnDef::new(Applications::Linkedin).string_len(500).null())
                    .col(ColumnDef::new(Applications::Github).string_len(500).null())
                    // Vocabulary is enforced by the store, not by a constraint
                    .col(
                        ColumnDef::new(Applications::Status)
                            .string_len(50)
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Applications::AppliedAt)
                            .timestamp()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Applications {
    Table,
    Id,
    Position,
    FullName,
    Email,
    Phone,
    Address,
    College,
    Degree,
    Semester,
    Year,
    About,
    ResumeName,
    ResumeData,
    Linkedin,
    Github,
    Status,
    AppliedAt,
}
