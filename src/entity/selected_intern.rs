//! Interns chosen from accepted applications.

use sea_orm::entity::prelude::*;

/// A row of the `selected_interns` table.
///
/// Copies name, email, position and college from the source application so the
/// intern record survives edits there, and carries its own login credential.
///
/// | Column         | Type                 | Description                                   |
/// |----------------|----------------------|-----------------------------------------------|
/// | id             | SERIAL (Primary Key) | Intern id                                     |
/// | application_id | INTEGER NULL         | Source, `applications(id)` ON DELETE CASCADE  |
/// | full_name      | VARCHAR(255)         | Copied from the application                   |
/// | email          | VARCHAR(255) UNIQUE  | Intern login identifier                       |
/// | password_hash  | VARCHAR(255)         | Argon2 PHC string                             |
/// | position       | VARCHAR(255)         | Copied from the application                   |
/// | college        | VARCHAR(255)         | Copied from the application                   |
/// | start_date     | DATE                 | Defaults to the current date                  |
/// | status         | VARCHAR(50)          | Defaults to `active`                          |
/// | created_at     | TIMESTAMP            | Selection time, UTC                           |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "selected_interns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub application_id: Option<i32>,
    pub full_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub position: String,
    pub college: String,
    pub start_date: Option<Date>,
    pub status: Option<String>,
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application::Entity",
        from = "Column::ApplicationId",
        to = "super::application::Column::Id",
        on_delete = "Cascade"
    )]
    Application,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
