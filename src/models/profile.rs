use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The identity handed over by the authentication service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}

/// The request context of a profile action. `user` is `None` when nobody is
/// signed in.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
}

impl Session {
    pub fn new(user_id: Option<&str>) -> Self {
        let user = user_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| User { id: id.to_string() });
        Self { user }
    }

    /// Resolve from the explicit flag, falling back to `BODYMETRICS_USER`.
    pub fn resolve(flag: Option<&str>) -> Self {
        match flag {
            Some(id) => Self::new(Some(id)),
            None => Self::new(std::env::var("BODYMETRICS_USER").ok().as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
}
