use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Served verbatim; only the `id` field is ever looked at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Brand {
    pub fn id(&self) -> Option<&Value> {
        self.fields.get("id")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub category_id: Value,
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Strict equality: only a string `categoryId` can equal a path segment.
    pub fn belongs_to(&self, brand_id: &str) -> bool {
        self.category_id.as_str() == Some(brand_id)
    }

    /// Case-sensitive substring match against name or description.
    pub fn matches_query(&self, query: &str) -> bool {
        self.name.contains(query) || self.description.contains(query)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub login: LoginCredentials,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl User {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.login.username == username && self.login.password == password
    }

    pub fn username(&self) -> &str {
        &self.login.username
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub username: String,
    pub token: String,
    pub last_updated: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(username: String, token: String) -> Self {
        Self {
            username,
            token,
            last_updated: Utc::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }

    pub fn is_fresh_at(&self, now: DateTime<Utc>, validity: Duration) -> bool {
        now - self.last_updated < validity
    }
}
