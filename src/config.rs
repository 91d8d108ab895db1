//! Environment-sourced configuration.
//!
//! A [`Config`] is built once at startup and handed to whatever needs it.
//! Every variable that is unset or empty falls back to its documented default;
//! nothing is validated here, so an empty `DATABASE_URL` only fails once
//! [`db::connect`](crate::db::connect) is called.

use std::time::Duration;

use subtle::ConstantTimeEq;
use tracing::warn;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_ENV: &str = "development";
pub const DEFAULT_JWT_SECRET: &str = "default-secret-change-me";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@zgenai.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "Admin@123";
pub const DEFAULT_GCP_BUCKET_NAME: &str = "zgenai-uploads";
pub const DEFAULT_GCP_REGION: &str = "us-central1";
pub const DEFAULT_FROM_EMAIL: &str = "noreply@zgenai.org";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "*";

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub const MAX_CONNECTIONS: u32 = 25;
pub const MIN_CONNECTIONS: u32 = 5;

/// Environment tag that allows placeholder secrets.
const DEVELOPMENT: &str = "development";

/// Process configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub port: String,
    /// Deployment tag, kept verbatim (`development`, `staging`, `production`, ...).
    pub env: String,
    pub database_url: String,
    /// Secret used to sign authentication tokens.
    pub jwt_secret: String,
    pub admin: AdminCredentials,
    pub gcp: GcpConfig,
    pub email: EmailConfig,
    pub allowed_origins: AllowedOrigins,
    pub rate_limit: RateLimit,
    pub pool: PoolOptions,
    /// How long an issued session token stays valid.
    pub session_ttl: Duration,
}

/// Credentials of the built-in admin account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    /// Checks admin login input in constant time; both fields are always
    /// compared.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        let email_ok = self.email.as_bytes().ct_eq(email.as_bytes());
        let password_ok = self.password.as_bytes().ct_eq(password.as_bytes());
        (email_ok & password_ok).into()
    }
}

/// Cloud storage location for uploaded resumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GcpConfig {
    pub project_id: String,
    pub bucket_name: String,
    pub region: String,
}

/// Outbound email provider settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    pub sendgrid_api_key: String,
    pub from_email: String,
}

/// Cross-origin policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// `*`: any origin.
    Any,
    /// Literal origins, as written between the commas.
    List(Vec<String>),
}

impl AllowedOrigins {
    /// `*` means any origin; anything else is split on `,` with no trimming.
    pub fn parse(raw: &str) -> Self {
        if raw == "*" {
            Self::Any
        } else {
            Self::List(raw.split(',').map(str::to_string).collect())
        }
    }

    /// The origins as a flat list, `["*"]` for [`AllowedOrigins::Any`].
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::Any => vec!["*".to_string()],
            Self::List(origins) => origins.clone(),
        }
    }

    /// Whether a request from `origin` may be served.
    pub fn allows(&self, origin: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(origins) => origins.iter().any(|o| o == origin),
        }
    }
}

/// Request budget per client. Fixed, not read from the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    pub requests: u32,
    pub window: Duration,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            requests: 100,
            window: Duration::from_secs(60),
        }
    }
}

/// Bounds and timeouts for the database pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolOptions {
    pub max_connections: u32,
    pub min_connections: u32,
    /// Applies to opening connections, checking them out, and the liveness ping.
    pub connect_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: MAX_CONNECTIONS,
            min_connections: MIN_CONNECTIONS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl Config {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; `None` and `""` both mean unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let seconds = |key: &str, default: Duration, unit: u64| -> Duration {
            match lookup(key).filter(|value| !value.is_empty()) {
                None => default,
                Some(raw) => match raw.parse::<u64>() {
                    Ok(n) => Duration::from_secs(n.saturating_mul(unit)),
                    Err(_) => {
                        warn!(%key, value = %raw, "ignoring unparseable value, using default");
                        default
                    }
                },
            }
        };

        Self {
            port: get("PORT", DEFAULT_PORT),
            env: get("ENV", DEFAULT_ENV),
            database_url: get("DATABASE_URL", ""),
            jwt_secret: get("JWT_SECRET", DEFAULT_JWT_SECRET),
            admin: AdminCredentials {
                email: get("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
                password: get("ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
            },
            gcp: GcpConfig {
                project_id: get("GCP_PROJECT_ID", ""),
                bucket_name: get("GCP_BUCKET_NAME", DEFAULT_GCP_BUCKET_NAME),
                region: get("GCP_REGION", DEFAULT_GCP_REGION),
            },
            email: EmailConfig {
                sendgrid_api_key: get("SENDGRID_API_KEY", ""),
                from_email: get("FROM_EMAIL", DEFAULT_FROM_EMAIL),
            },
            allowed_origins: AllowedOrigins::parse(&get(
                "ALLOWED_ORIGINS",
                DEFAULT_ALLOWED_ORIGINS,
            )),
            rate_limit: RateLimit::default(),
            pool: PoolOptions {
                connect_timeout: seconds(
                    "DATABASE_CONNECT_TIMEOUT_SECS",
                    DEFAULT_CONNECT_TIMEOUT,
                    1,
                ),
                ..PoolOptions::default()
            },
            session_ttl: seconds("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL, 60 * 60),
        }
    }

    /// True only for the literal tag `development`.
    pub fn is_development(&self) -> bool {
        self.env == DEVELOPMENT
    }

    /// Variables still holding their placeholder default.
    pub fn placeholder_secrets(&self) -> Vec<&'static str> {
        let mut variables = Vec::new();
        if self.jwt_secret == DEFAULT_JWT_SECRET {
            variables.push("JWT_SECRET");
        }
        if self.admin.email == DEFAULT_ADMIN_EMAIL {
            variables.push("ADMIN_EMAIL");
        }
        if self.admin.password == DEFAULT_ADMIN_PASSWORD {
            variables.push("ADMIN_PASSWORD");
        }
        variables
    }

    /// Refuses placeholder secrets outside development.
    pub fn ensure_secure(&self) -> Result<()> {
        let variables = self.placeholder_secrets();
        if variables.is_empty() {
            return Ok(());
        }
        if self.is_development() {
            warn!(
                variables = %variables.join(", "),
                "using placeholder secrets; acceptable only in development"
            );
            return Ok(());
        }
        Err(Error::InsecureConfig {
            env: self.env.clone(),
            variables,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]);
        assert_eq!(config.port, "8080");
        assert_eq!(config.env, "development");
        assert_eq!(config.database_url, "");
        assert_eq!(config.jwt_secret, "default-secret-change-me");
        assert_eq!(config.admin.email, "admin@zgenai.com");
        assert_eq!(config.admin.password, "Admin@123");
        assert_eq!(config.gcp.project_id, "");
        assert_eq!(config.gcp.bucket_name, "zgenai-uploads");
        assert_eq!(config.gcp.region, "us-central1");
        assert_eq!(config.email.sendgrid_api_key, "");
        assert_eq!(config.email.from_email, "noreply@zgenai.org");
        assert_eq!(config.allowed_origins, AllowedOrigins::Any);
        assert_eq!(config.rate_limit.requests, 100);
        assert_eq!(config.rate_limit.window, Duration::from_secs(60));
        assert_eq!(config.pool.max_connections, 25);
        assert_eq!(config.pool.min_connections, 5);
        assert_eq!(config.pool.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.session_ttl, Duration::from_secs(604_800));
    }

    #[rstest]
    #[case("PORT")]
    #[case("ENV")]
    #[case("DATABASE_URL")]
    #[case("JWT_SECRET")]
    #[case("ADMIN_EMAIL")]
    #[case("ADMIN_PASSWORD")]
    #[case("GCP_PROJECT_ID")]
    #[case("GCP_BUCKET_NAME")]
    #[case("GCP_REGION")]
    #[case("SENDGRID_API_KEY")]
    #[case("FROM_EMAIL")]
    #[case("ALLOWED_ORIGINS")]
    fn empty_value_falls_back_to_default(#[case] key: &str) {
        assert_eq!(load(&[(key, "")]), load(&[]));
    }

    #[rstest]
    #[case("PORT", "3000")]
    #[case("ENV", "production")]
    #[case("DATABASE_URL", "postgres://portal:secret@db:5432/portal")]
    #[case("JWT_SECRET", "s3cr3t")]
    #[case("ADMIN_EMAIL", "ops@example.org")]
    #[case("ADMIN_PASSWORD", "hunter2")]
    #[case("GCP_PROJECT_ID", "zgenai-prod")]
    #[case("GCP_BUCKET_NAME", "resumes")]
    #[case("GCP_REGION", "europe-west1")]
    #[case("SENDGRID_API_KEY", "SG.key")]
    #[case("FROM_EMAIL", "jobs@example.org")]
    fn literal_values_are_kept(#[case] key: &str, #[case] value: &str) {
        let config = load(&[(key, value)]);
        let actual = match key {
            "PORT" => &config.port,
            "ENV" => &config.env,
            "DATABASE_URL" => &config.database_url,
            "JWT_SECRET" => &config.jwt_secret,
            "ADMIN_EMAIL" => &config.admin.email,
            "ADMIN_PASSWORD" => &config.admin.password,
            "GCP_PROJECT_ID" => &config.gcp.project_id,
            "GCP_BUCKET_NAME" => &config.gcp.bucket_name,
            "GCP_REGION" => &config.gcp.region,
            "SENDGRID_API_KEY" => &config.email.sendgrid_api_key,
            "FROM_EMAIL" => &config.email.from_email,
            other => panic!("unexpected key {other}"),
        };
        assert_eq!(actual, value);
    }

    #[rstest]
    #[case("*", AllowedOrigins::Any)]
    #[case("a.com", AllowedOrigins::List(vec!["a.com".into()]))]
    #[case("a.com,b.com", AllowedOrigins::List(vec!["a.com".into(), "b.com".into()]))]
    #[case("a.com, b.com", AllowedOrigins::List(vec!["a.com".into(), " b.com".into()]))]
    #[case("*,a.com", AllowedOrigins::List(vec!["*".into(), "a.com".into()]))]
    fn allowed_origins(#[case] raw: &str, #[case] expected: AllowedOrigins) {
        assert_eq!(load(&[("ALLOWED_ORIGINS", raw)]).allowed_origins, expected);
    }

    #[test]
    fn wildcard_flattens_to_single_entry() {
        assert_eq!(AllowedOrigins::Any.to_vec(), vec!["*".to_string()]);
        assert!(AllowedOrigins::Any.allows("https://anything.example"));
        let list = AllowedOrigins::parse("https://a.com,https://b.com");
        assert!(list.allows("https://b.com"));
        assert!(!list.allows("https://c.com"));
    }

    #[test]
    fn numeric_overrides() {
        let config = load(&[
            ("DATABASE_CONNECT_TIMEOUT_SECS", "3"),
            ("SESSION_TTL_HOURS", "2"),
        ]);
        assert_eq!(config.pool.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.session_ttl, Duration::from_secs(7200));

        let config = load(&[("DATABASE_CONNECT_TIMEOUT_SECS", "soon")]);
        assert_eq!(config.pool.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
    }

    #[test]
    fn placeholders_allowed_in_development() {
        let config = load(&[]);
        assert_eq!(
            config.placeholder_secrets(),
            vec!["JWT_SECRET", "ADMIN_EMAIL", "ADMIN_PASSWORD"]
        );
        assert!(config.ensure_secure().is_ok());
    }

    #[test]
    fn placeholders_rejected_outside_development() {
        let config = load(&[("ENV", "production"), ("JWT_SECRET", "s3cr3t")]);
        match config.ensure_secure() {
            Err(Error::InsecureConfig { env, variables }) => {
                assert_eq!(env, "production");
                assert_eq!(variables, vec!["ADMIN_EMAIL", "ADMIN_PASSWORD"]);
            }
            other => panic!("expected InsecureConfig, got {other:?}"),
        }
    }

    #[test]
    fn explicit_secrets_pass_in_production() {
        let config = load(&[
            ("ENV", "production"),
            ("JWT_SECRET", "s3cr3t"),
            ("ADMIN_EMAIL", "ops@example.org"),
            ("ADMIN_PASSWORD", "long-random-password"),
        ]);
        assert!(config.ensure_secure().is_ok());
        assert!(config.admin.matches("ops@example.org", "long-random-password"));
        assert!(!config.admin.matches("ops@example.org", "Admin@123"));
    }

    #[rstest]
    #[case("admin@zgenai.com", "Admin@123", true)]
    #[case("admin@zgenai.com", "Admin@12", false)]
    #[case("admin@zgenai.com", "Admin@1234", false)]
    #[case("admin@zgenai.co", "Admin@123", false)]
    #[case("", "", false)]
    fn admin_credentials_match_exactly(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(load(&[]).admin.matches(email, password), expected);
    }
}
