//! Append-only log of outbound messages.

use sea_orm::entity::prelude::*;

/// A row of the `emails` table. `user_id` becomes NULL when the user is
/// deleted; the row itself is kept.
///
/// | Column   | Type                 | Description                              |
/// |----------|----------------------|------------------------------------------|
/// | id       | SERIAL (Primary Key) | Log entry id                             |
/// | to_email | VARCHAR(255)         | Recipient address                        |
/// | subject  | VARCHAR(500)         | Subject line                             |
/// | body     | TEXT                 | Message body                             |
/// | sent_at  | TIMESTAMP            | Send time, UTC                           |
/// | user_id  | INTEGER NULL         | Recipient, `users(id)` ON DELETE SET NULL |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "emails")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub to_email: String,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub sent_at: Option<DateTime>,
    pub user_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
