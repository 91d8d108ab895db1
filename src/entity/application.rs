//! Submitted candidacies.

use sea_orm::entity::prelude::*;

use crate::error::Result;
use crate::status::ApplicationStatus;

/// A row of the `applications` table.
///
/// | Column      | Type                 | Description                              |
/// |-------------|----------------------|------------------------------------------|
/// | id          | SERIAL (Primary Key) | Application id                           |
/// | position    | VARCHAR(255)         | Role applied for                         |
/// | full_name   | VARCHAR(255)         | Candidate name                           |
/// | email       | VARCHAR(255)         | Candidate email, not unique              |
/// | phone       | VARCHAR(50)          | Contact number                           |
/// | address     | TEXT                 | Postal address                           |
/// | college     | VARCHAR(255)         | Institution                              |
/// | degree      | VARCHAR(255)         | Degree programme                         |
/// | semester    | VARCHAR(50)          | Current semester                         |
/// | year        | VARCHAR(50)          | Current year                             |
/// | about       | TEXT                 | Free-form statement                      |
/// | resume_name | VARCHAR(255) NULL    | Uploaded file name                       |
/// | resume_data | BYTEA NULL           | Uploaded file bytes, never sent outward  |
/// | linkedin    | VARCHAR(500) NULL    | Profile URL                              |
/// | github      | VARCHAR(500) NULL    | Profile URL                              |
/// | status      | VARCHAR(50)          | Review status, default `pending`         |
/// | applied_at  | TIMESTAMP            | Submission time, UTC                     |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub position: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub college: String,
    pub degree: String,
    pub semester: String,
    pub year: String,
    #[sea_orm(column_type = "Text")]
    pub about: String,
    pub resume_name: Option<String>,
    pub resume_data: Option<Vec<u8>>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    /// Raw column value; use [`Model::review_status`] for the typed form.
    pub status: Option<String>,
    pub applied_at: Option<DateTime>,
}

impl Model {
    /// Typed status. A NULL column reads as the column default, `pending`.
    pub fn review_status(&self) -> Result<ApplicationStatus> {
        match &self.status {
            Some(raw) => raw.parse(),
            None => Ok(ApplicationStatus::Pending),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::selected_intern::Entity")]
    SelectedIntern,
}

impl Related<super::selected_intern::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SelectedIntern.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
