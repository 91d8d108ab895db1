//! Registered portal users.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A row of the `users` table.
///
/// Serializes without `password_hash`, so a model can be returned to clients
/// as-is.
///
/// | Column        | Type                 | Description                    |
/// |---------------|----------------------|--------------------------------|
/// | id            | SERIAL (Primary Key) | User id                        |
/// | name          | VARCHAR(255)         | Display name                   |
/// | email         | VARCHAR(255) UNIQUE  | Login identifier               |
/// | phone         | VARCHAR(50)          | Contact number                 |
/// | address       | TEXT                 | Postal address                 |
/// | password_hash | VARCHAR(255)         | Argon2 PHC string              |
/// | created_at    | TIMESTAMP            | Signup time, UTC               |
/// | last_login    | TIMESTAMP NULL       | Last successful login, UTC     |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    /// Argon2 PHC string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session::Entity")]
    Session,
    #[sea_orm(has_many = "super::email::Entity")]
    Email,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::email::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Email.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
