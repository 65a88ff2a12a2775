//! User Records
//!
//! Profile data collected at sign-up. Stored records carry the plain password
//! next to the profile; the logged-in copy never does.

use serde::{Deserialize, Serialize};

/// Unique user identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Generate a new user ID
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who the account is for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Consumer,
    Lawyer,
}

impl UserType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Consumer => "consumer",
            Self::Lawyer => "lawyer",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lawyer" => Self::Lawyer,
            _ => Self::Consumer,
        }
    }
}

/// A user profile (never includes the password)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub user_type: UserType,
}

impl User {
    /// First letter of the name, upper-cased, for the avatar badge
    pub fn initial(&self) -> Option<char> {
        self.full_name.chars().next().map(|c| c.to_ascii_uppercase())
    }
}

/// Sign-up form contents
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub user_type: UserType,
}

/// A user as kept in the registered-users list
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct StoredUser {
    #[serde(flatten)]
    pub user: User,
    pub password: String,
}

impl StoredUser {
    pub(crate) fn from_registration(registration: Registration) -> Self {
        let Registration {
            full_name,
            email,
            password,
            phone,
            city,
            state,
            country,
            user_type,
        } = registration;

        Self {
            user: User {
                id: UserId::generate(),
                full_name,
                email,
                phone,
                city,
                state,
                country,
                user_type,
            },
            password,
        }
    }

    pub(crate) fn matches(&self, email: &str, password: &str) -> bool {
        self.user.email == email && self.password == password
    }
}
