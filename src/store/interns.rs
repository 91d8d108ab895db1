use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::{info, warn};

use super::{required, PortalStore};
use crate::dto::LoginRequest;
use crate::entity::selected_intern::{self, Entity as SelectedInternEntity};
use crate::error::{Error, Result};
use crate::password::verify_password;

impl PortalStore {
    /// All selected interns, newest first.
    pub async fn list_interns(&self) -> Result<Vec<selected_intern::Model>> {
        Ok(SelectedInternEntity::find()
            .order_by_desc(selected_intern::Column::CreatedAt)
            .order_by_desc(selected_intern::Column::Id)
            .all(&self.conn)
            .await?)
    }

    /// Looks up an intern by the email copied from their application.
    pub async fn find_intern_by_email(&self, email: &str) -> Result<Option<selected_intern::Model>> {
        Ok(SelectedInternEntity::find()
            .filter(selected_intern::Column::Email.eq(email))
            .one(&self.conn)
            .await?)
    }

    /// Checks an intern's own credential, the one set by
    /// [`select_application`](Self::select_application).
    ///
    /// Unknown emails and wrong passwords both return
    /// [`Error::InvalidCredentials`].
    pub async fn verify_intern(&self, request: LoginRequest) -> Result<selected_intern::Model> {
        required("email", &request.email)?;
        required("password", &request.password)?;

        let Some(intern) = self.find_intern_by_email(&request.email).await? else {
            return Err(Error::InvalidCredentials);
        };
        if !verify_password(&request.password, &intern.password_hash)? {
            warn!(intern_id = intern.id, "rejected intern login with wrong password");
            return Err(Error::InvalidCredentials);
        }

        info!(intern_id = intern.id, "intern logged in");
        Ok(intern)
    }
}
