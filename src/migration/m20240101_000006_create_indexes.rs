use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;
use super::m20240101_000002_create_sessions_table::Sessions;
use super::m20240101_000003_create_applications_table::Applications;
use super::m20240101_000004_create_emails_table::Emails;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Index names, in creation order.
pub const INDEXES: [&str; 5] = [
    "idx_users_email",
    "idx_sessions_token",
    "idx_applications_status",
    "idx_applications_applied_at",
    "idx_emails_sent_at",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let statements = [
            Index::create()
                .name(INDEXES[0])
                .table(Users::Table)
                .col(Users::Email)
                .if_not_exists()
                .to_owned(),
            Index::create()
                .name(INDEXES[1])
                .table(Sessions::Table)
                .col(Sessions::Token)
                .if_not_exists()
                .to_owned(),
            Index::create()
                .name(INDEXES[2])
                .table(Applications::Table)
                .col(Applications::Status)
                .if_not_exists()
                .to_owned(),
            Index::create()
                .name(INDEXES[3])
                .table(Applications::Table)
                .col((Applications::AppliedAt, IndexOrder::Desc))
                .if_not_exists()
                .to_owned(),
            Index::create()
                .name(INDEXES[4])
                .table(Emails::Table)
                .col((Emails::SentAt, IndexOrder::Desc))
                .if_not_exists()
                .to_owned(),
        ];

        for statement in statements {
            manager.create_index(statement).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in INDEXES.into_iter().rev() {
            manager
                .drop_index(Index::drop().name(name).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}
