#![allow(dead_code)]

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use zgenai_portal::db;
use zgenai_portal::dto::{ApplicationRequest, SignupRequest};

/// Fresh in-memory SQLite database with the portal schema applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn setup() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(opt).await.expect("sqlite connects");
    db::ensure_schema(&conn).await.expect("schema applies");
    conn
}

pub fn signup_request(email: &str) -> SignupRequest {
    SignupRequest {
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        address: "12 Analytical Row".to_string(),
        password: "correct horse".to_string(),
    }
}

pub fn application_request(email: &str) -> ApplicationRequest {
    ApplicationRequest {
        position: "Backend Intern".to_string(),
        full_name: "Grace Hopper".to_string(),
        email: email.to_string(),
        phone: "555-0199".to_string(),
        address: "1 Compiler Way".to_string(),
        college: "Navy College".to_string(),
        degree: "B.Sc Mathematics".to_string(),
        semester: "6".to_string(),
        year: "3".to_string(),
        about: "Writes compilers".to_string(),
        linkedin: String::new(),
        github: "https://github.com/grace".to_string(),
    }
}
