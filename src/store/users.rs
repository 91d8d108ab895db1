use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use tracing::{info, warn};

use super::{now, required, unique_or, PortalStore};
use crate::dto::{LoginRequest, LoginResponse, SignupRequest};
use crate::entity::user::{self, Entity as UserEntity};
use crate::error::{Error, Result};
use crate::password::{hash_password, verify_password};

impl PortalStore {
    /// Registers a user. Every field is required; the email must be unused.
    pub async fn signup(&self, request: SignupRequest) -> Result<user::Model> {
        required("name", &request.name)?;
        required("email", &request.email)?;
        required("phone", &request.phone)?;
        required("address", &request.address)?;
        required("password", &request.password)?;

        let password_hash = hash_password(&request.password)?;

        let user = user::ActiveModel {
            name: Set(request.name),
            email: Set(request.email),
            phone: Set(request.phone),
            address: Set(request.address),
            password_hash: Set(password_hash),
            created_at: Set(Some(now())),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
        .map_err(unique_or(Error::EmailTaken))?;

        info!(user_id = user.id, "user signed up");
        Ok(user)
    }

    /// Checks credentials, stamps `last_login` and issues a session token.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        required("email", &request.email)?;
        required("password", &request.password)?;

        let Some(user) = self.find_user_by_email(&request.email).await? else {
            return Err(Error::InvalidCredentials);
        };
        if !verify_password(&request.password, &user.password_hash)? {
            warn!(user_id = user.id, "rejected login with wrong password");
            return Err(Error::InvalidCredentials);
        }

        let user_id = user.id;
        let mut active = user.into_active_model();
        active.last_login = Set(Some(now()));
        active.update(&self.conn).await?;

        let token = self.create_session(user_id).await?;
        info!(user_id, "user logged in");

        Ok(LoginResponse {
            token,
            message: Some("Login successful".to_string()),
        })
    }

    /// Looks up a user by their unique email.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        Ok(UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.conn)
            .await?)
    }

    /// All users, newest first.
    pub async fn list_users(&self) -> Result<Vec<user::Model>> {
        Ok(UserEntity::find()
            .order_by_desc(user::Column::CreatedAt)
            .order_by_desc(user::Column::Id)
            .all(&self.conn)
            .await?)
    }

    /// Removes a user. Their sessions go with them; their logged emails stay
    /// with the user reference cleared.
    pub async fn delete_user(&self, user_id: i32) -> Result<()> {
        let result = UserEntity::delete_by_id(user_id).exec(&self.conn).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("user"));
        }
        info!(user_id, "user deleted");
        Ok(())
    }
}
