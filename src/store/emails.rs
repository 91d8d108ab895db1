use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::debug;

use super::{now, PortalStore};
use crate::dto::EmailView;
use crate::entity::email::{self, Entity as EmailEntity};
use crate::entity::user::Entity as UserEntity;
use crate::error::Result;

impl PortalStore {
    /// Appends an outbound message to the log.
    pub async fn record_email(
        &self,
        to_email: &str,
        subject: &str,
        body: &str,
        user_id: Option<i32>,
    ) -> Result<email::Model> {
        let email = email::ActiveModel {
            to_email: Set(to_email.to_string()),
            subject: Set(subject.to_string()),
            body: Set(body.to_string()),
            sent_at: Set(Some(now())),
            user_id: Set(user_id),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        debug!(email_id = email.id, ?user_id, "email logged");
        Ok(email)
    }

    /// The log, newest first, with recipient names where a user is linked.
    pub async fn list_emails(&self) -> Result<Vec<EmailView>> {
        let rows = EmailEntity::find()
            .find_also_related(UserEntity)
            .order_by_desc(email::Column::SentAt)
            .order_by_desc(email::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(EmailView::from).collect())
    }
}
