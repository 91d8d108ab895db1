//! Login sessions.
//!
//! A session is an opaque bearer token bound to a user. The table has no
//! expiry column; validity is derived from `created_at` and the configured
//! TTL (see [`PortalStore::authenticate`](crate::PortalStore::authenticate)).

use sea_orm::entity::prelude::*;

/// A row of the `sessions` table.
///
/// | Column     | Type                 | Description                          |
/// |------------|----------------------|--------------------------------------|
/// | id         | SERIAL (Primary Key) | Session row id                       |
/// | user_id    | INTEGER              | Owner, `users(id)` ON DELETE CASCADE |
/// | token      | VARCHAR(255) UNIQUE  | Opaque bearer token (UUID v4)        |
/// | created_at | TIMESTAMP            | Issue time, UTC                      |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub token: String,
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
