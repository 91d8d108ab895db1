use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use super::{non_empty, now, required, unique_or, PortalStore};
use crate::dto::{ApplicationRequest, Resume, UpdateStatusRequest};
use crate::entity::application::{self, Entity as ApplicationEntity};
use crate::entity::selected_intern;
use crate::error::{Error, Result};
use crate::password::hash_password;
use crate::status::{ApplicationStatus, INTERN_STATUS_ACTIVE};

impl PortalStore {
    /// Stores a new application in `pending` state.
    pub async fn submit_application(
        &self,
        request: ApplicationRequest,
        resume: Option<Resume>,
    ) -> Result<application::Model> {
        let fields = [
            ("position", &request.position),
            ("fullName", &request.full_name),
            ("email", &request.email),
            ("phone", &request.phone),
            ("address", &request.address),
            ("college", &request.college),
            ("degree", &request.degree),
            ("semester", &request.semester),
            ("year", &request.year),
            ("about", &request.about),
        ];
        for (field, value) in fields {
            required(field, value)?;
        }

        let (resume_name, resume_data) = match resume {
            Some(resume) => (Some(resume.name), Some(resume.data)),
            None => (None, None),
        };

        let application = application::ActiveModel {
            position: Set(request.position),
            full_name: Set(request.full_name),
            email: Set(request.email),
            phone: Set(request.phone),
            address: Set(request.address),
            college: Set(request.college),
            degree: Set(request.degree),
            semester: Set(request.semester),
            year: Set(request.year),
            about: Set(request.about),
            resume_name: Set(resume_name),
            resume_data: Set(resume_data),
            linkedin: Set(non_empty(request.linkedin)),
            github: Set(non_empty(request.github)),
            status: Set(Some(ApplicationStatus::Pending.as_str().to_string())),
            applied_at: Set(Some(now())),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        info!(
            application_id = application.id,
            position = %application.position,
            "application submitted"
        );
        Ok(application)
    }

    /// Loads one application, or [`Error::NotFound`].
    pub async fn get_application(&self, id: i32) -> Result<application::Model> {
        ApplicationEntity::find_by_id(id)
            .one(&self.conn)
            .await?
            .ok_or(Error::NotFound("application"))
    }

    /// All applications, most recent first.
    pub async fn list_applications(&self) -> Result<Vec<application::Model>> {
        Ok(ApplicationEntity::find()
            .order_by_desc(application::Column::AppliedAt)
            .order_by_desc(application::Column::Id)
            .all(&self.conn)
            .await?)
    }

    pub async fn list_applications_by_status(
        &self,
        status: ApplicationStatus,
    ) -> Result<Vec<application::Model>> {
        Ok(ApplicationEntity::find()
            .filter(application::Column::Status.eq(status.as_str()))
            .order_by_desc(application::Column::AppliedAt)
            .order_by_desc(application::Column::Id)
            .all(&self.conn)
            .await?)
    }

    /// Moves an application along the review.
    ///
    /// `selected` is refused here: it needs the intern credential that
    /// [`select_application`](Self::select_application) takes.
    pub async fn update_application_status(
        &self,
        id: i32,
        request: UpdateStatusRequest,
    ) -> Result<application::Model> {
        let next: ApplicationStatus = request.status.parse()?;
        let application = self.get_application(id).await?;
        self.transition_application(&application, next).await
    }

    /// Applies `next` to an application previously read as `application`.
    ///
    /// The write only lands if the stored status still equals the one in
    /// `application`; a row changed in between yields
    /// [`Error::InvalidTransition`] from its current status. `selected` is
    /// refused as in [`update_application_status`](Self::update_application_status).
    pub async fn transition_application(
        &self,
        application: &application::Model,
        next: ApplicationStatus,
    ) -> Result<application::Model> {
        if next == ApplicationStatus::Selected {
            return Err(Error::SelectionNeedsCredential);
        }
        let current = application.review_status()?;
        write_status(&self.conn, application, next).await?;

        info!(application_id = application.id, from = %current, to = %next, "application status updated");
        self.get_application(application.id).await
    }

    /// Accepts an application and creates the intern record for it.
    ///
    /// The status change and the insert commit together. The intern logs in
    /// with `initial_password`.
    pub async fn select_application(
        &self,
        id: i32,
        initial_password: &str,
    ) -> Result<selected_intern::Model> {
        required("password", initial_password)?;
        let password_hash = hash_password(initial_password)?;

        let txn = self.conn.begin().await?;

        let application = ApplicationEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(Error::NotFound("application"))?;
        write_status(&txn, &application, ApplicationStatus::Selected).await?;

        let created_at = now();
        let intern = selected_intern::ActiveModel {
            application_id: Set(Some(application.id)),
            full_name: Set(application.full_name),
            email: Set(application.email),
            password_hash: Set(password_hash),
            position: Set(application.position),
            college: Set(application.college),
            start_date: Set(Some(created_at.date())),
            status: Set(Some(INTERN_STATUS_ACTIVE.to_string())),
            created_at: Set(Some(created_at)),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(unique_or(Error::InternExists))?;

        txn.commit().await?;

        info!(application_id = id, intern_id = intern.id, "application selected");
        Ok(intern)
    }
}

/// Checks the move from the status read in `application` and writes `next`
/// only where the row still holds that status.
async fn write_status<C>(
    conn: &C,
    application: &application::Model,
    next: ApplicationStatus,
) -> Result<()>
where
    C: ConnectionTrait,
{
    let current = application.review_status()?;
    current.transition_to(next)?;

    let read_status = match &application.status {
        Some(raw) => application::Column::Status.eq(raw.as_str()),
        None => application::Column::Status.is_null(),
    };
    let result = ApplicationEntity::update_many()
        .col_expr(application::Column::Status, Expr::value(next.as_str()))
        .filter(application::Column::Id.eq(application.id))
        .filter(read_status)
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        let stored = ApplicationEntity::find_by_id(application.id)
            .one(conn)
            .await?
            .ok_or(Error::NotFound("application"))?;
        return Err(Error::InvalidTransition {
            from: stored.review_status()?,
            to: next,
        });
    }
    Ok(())
}
