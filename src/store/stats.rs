use chrono::{NaiveTime, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::PortalStore;
use crate::dto::AdminStats;
use crate::entity::{application, email, selected_intern, user};
use crate::error::Result;
use crate::status::INTERN_STATUS_ACTIVE;

impl PortalStore {
    /// Counters for the admin dashboard. "Today" starts at UTC midnight.
    pub async fn admin_stats(&self) -> Result<AdminStats> {
        let midnight = Utc::now().date_naive().and_time(NaiveTime::MIN);

        Ok(AdminStats {
            total_users: user::Entity::find().count(&self.conn).await?,
            total_applications: application::Entity::find().count(&self.conn).await?,
            total_emails: email::Entity::find().count(&self.conn).await?,
            today_users: user::Entity::find()
                .filter(user::Column::CreatedAt.gte(midnight))
                .count(&self.conn)
                .await?,
            active_interns: selected_intern::Entity::find()
                .filter(selected_intern::Column::Status.eq(INTERN_STATUS_ACTIVE))
                .count(&self.conn)
                .await?,
        })
    }
}
