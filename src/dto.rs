//! JSON request and response shapes exchanged with the HTTP layer.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entity::{application, email, user};
use crate::error::Error;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Application form fields. Optional links may be omitted or empty.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub position: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub college: String,
    pub degree: String,
    pub semester: String,
    pub year: String,
    pub about: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

/// Uploaded resume attached to an application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resume {
    pub name: String,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        let error = match err {
            // Never leak driver detail to clients
            Error::Database(_) | Error::PasswordHash(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        Self { error }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessResponse {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

/// Dashboard counters for the admin view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub total_applications: u64,
    pub total_emails: u64,
    pub today_users: u64,
    pub active_interns: u64,
}

/// An application as shown to reviewers; the resume bytes stay in the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationView {
    pub id: i32,
    pub position: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub college: String,
    pub degree: String,
    pub semester: String,
    pub year: String,
    pub about: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    pub status: String,
    pub applied_at: Option<NaiveDateTime>,
}

impl From<application::Model> for ApplicationView {
    fn from(model: application::Model) -> Self {
        Self {
            id: model.id,
            position: model.position,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            college: model.college,
            degree: model.degree,
            semester: model.semester,
            year: model.year,
            about: model.about,
            resume_name: model.resume_name,
            linkedin: model.linkedin,
            github: model.github,
            status: model.status.unwrap_or_else(|| "pending".to_string()),
            applied_at: model.applied_at,
        }
    }
}

/// A logged email, with the recipient's name when it belongs to a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailView {
    pub id: i32,
    pub to_email: String,
    pub subject: String,
    pub body: String,
    pub sent_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl From<(email::Model, Option<user::Model>)> for EmailView {
    fn from((email, user): (email::Model, Option<user::Model>)) -> Self {
        Self {
            id: email.id,
            to_email: email.to_email,
            subject: email.subject,
            body: email.body,
            sent_at: email.sent_at,
            user_id: email.user_id,
            user_name: user.map(|u| u.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn application_request_uses_camel_case() {
        let request: ApplicationRequest = serde_json::from_value(json!({
            "position": "Backend Intern",
            "fullName": "Ada Lovelace",
            "email": "ada@example.org",
            "phone": "555-0100",
            "address": "12 Analytical Row",
            "college": "Engine College",
            "degree": "B.Sc",
            "semester": "6",
            "year": "3",
            "about": "Likes numbers",
            "linkedin": "https://linkedin.com/in/ada"
        }))
        .unwrap();
        assert_eq!(request.full_name, "Ada Lovelace");
        assert_eq!(request.github, "");
    }

    #[test]
    fn stats_field_names() {
        let stats = AdminStats {
            total_users: 3,
            total_applications: 2,
            total_emails: 5,
            today_users: 1,
            active_interns: 1,
        };
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            json!({
                "totalUsers": 3,
                "totalApplications": 2,
                "totalEmails": 5,
                "todayUsers": 1,
                "activeInterns": 1
            })
        );
    }

    #[test]
    fn envelopes() {
        assert_eq!(
            serde_json::to_value(LoginResponse {
                token: "abc".into(),
                message: None
            })
            .unwrap(),
            json!({ "token": "abc" })
        );
        assert_eq!(
            serde_json::to_value(SuccessResponse::with_message("Status updated")).unwrap(),
            json!({ "success": true, "message": "Status updated" })
        );
        assert_eq!(
            serde_json::to_value(ErrorResponse::from(&Error::EmailTaken)).unwrap(),
            json!({ "error": "user with this email already exists" })
        );
    }

    #[test]
    fn database_errors_are_masked() {
        let err = Error::Database(sea_orm::DbErr::Custom("relation does not exist".into()));
        assert_eq!(ErrorResponse::from(&err).error, "Internal server error");
    }

    #[test]
    fn application_view_hides_resume_bytes() {
        let applied_at = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let model = application::Model {
            id: 7,
            position: "Backend Intern".into(),
            full_name: "Ada Lovelace".into(),
            email: "ada@example.org".into(),
            phone: "555-0100".into(),
            address: "12 Analytical Row".into(),
            college: "Engine College".into(),
            degree: "B.Sc".into(),
            semester: "6".into(),
            year: "3".into(),
            about: "Likes numbers".into(),
            resume_name: Some("ada.pdf".into()),
            resume_data: Some(b"%PDF-1.7".to_vec()),
            linkedin: None,
            github: None,
            status: None,
            applied_at: Some(applied_at),
        };
        let value = serde_json::to_value(ApplicationView::from(model)).unwrap();
        assert!(value.get("resumeData").is_none());
        assert!(value.get("resume_data").is_none());
        assert!(value.get("full_name").is_none());
        assert_eq!(value["fullName"], "Ada Lovelace");
        assert_eq!(value["resumeName"], "ada.pdf");
        assert_eq!(value["appliedAt"], "2024-03-01T09:30:00");
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn user_json_never_contains_password_hash() {
        let user = user::Model {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.org".into(),
            phone: "555-0100".into(),
            address: "12 Analytical Row".into(),
            password_hash: "$argon2id$secret".into(),
            created_at: None,
            last_login: None,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password_hash").is_none());
        assert!(value.get("last_login").is_none());
        assert_eq!(value["email"], "ada@example.org");
    }
}
