//! Ordered, idempotent schema steps.
//!
//! Each step only creates what is missing, so the set can be replayed against
//! a database that was initialised by hand or by an older build.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_sessions_table;
mod m20240101_000003_create_applications_table;
mod m20240101_000004_create_emails_table;
mod m20240101_000005_create_selected_interns_table;
mod m20240101_000006_create_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Keep bookkeeping apart from any other migrator sharing the database
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("zgenai_portal_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_sessions_table::Migration),
            Box::new(m20240101_000003_create_applications_table::Migration),
            Box::new(m20240101_000004_create_emails_table::Migration),
            Box::new(m20240101_000005_create_selected_interns_table::Migration),
            Box::new(m20240101_000006_create_indexes::Migration),
        ]
    }
}
