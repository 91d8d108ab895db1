use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::debug;
use uuid::Uuid;

use super::{now, PortalStore};
use crate::entity::session::{self, Entity as SessionEntity};
use crate::entity::user::{self, Entity as UserEntity};
use crate::error::Result;

impl PortalStore {
    /// Issues a new opaque token for `user_id`.
    pub async fn create_session(&self, user_id: i32) -> Result<String> {
        let token = Uuid::new_v4().simple().to_string();

        session::ActiveModel {
            user_id: Set(user_id),
            token: Set(token.clone()),
            created_at: Set(Some(now())),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        debug!(user_id, "session created");
        Ok(token)
    }

    /// Resolves a token to its user. Unknown tokens and sessions older than
    /// the TTL yield `None`.
    pub async fn authenticate(&self, token: &str) -> Result<Option<user::Model>> {
        let mut query = SessionEntity::find().filter(session::Column::Token.eq(token));
        if let Some(cutoff) = self.session_cutoff() {
            query = query.filter(session::Column::CreatedAt.gt(cutoff));
        }

        let found = query
            .find_also_related(UserEntity)
            .one(&self.conn)
            .await?;
        Ok(found.and_then(|(_, user)| user))
    }

    /// Deletes one session. Returns whether the token existed.
    pub async fn revoke_session(&self, token: &str) -> Result<bool> {
        let result = SessionEntity::delete_many()
            .filter(session::Column::Token.eq(token))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Deletes every session past the TTL and returns how many went.
    pub async fn delete_expired_sessions(&self) -> Result<u64> {
        let Some(cutoff) = self.session_cutoff() else {
            return Ok(0);
        };

        let result = SessionEntity::delete_many()
            .filter(session::Column::CreatedAt.lt(cutoff))
            .exec(&self.conn)
            .await?;

        debug!(removed = result.rows_affected, "expired sessions deleted");
        Ok(result.rows_affected)
    }
}
