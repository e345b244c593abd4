//! Session and navigation collaborators.
//!
//! # Responsibility
//! - Describe the authenticated user the dashboard is mounted for.
//! - Define the seams to the external auth provider and router.
//!
//! # Invariants
//! - A task store only exists for an authenticated [`Session`]; the session is
//!   passed in explicitly, never looked up from ambient state.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FALLBACK_FIRST_NAME: &str = "User";
const MAX_INITIALS: usize = 2;

/// Signed-in user profile as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl User {
    /// Text before the first space of the display name.
    ///
    /// Falls back to `"User"` when unnamed or when that text is empty, so a
    /// name with a leading space greets as `"User"`.
    pub fn first_name(&self) -> &str {
        self.name
            .as_deref()
            .and_then(|name| name.split(' ').next())
            .filter(|word| !word.is_empty())
            .unwrap_or(FALLBACK_FIRST_NAME)
    }

    /// Avatar fallback initials derived from the display name.
    pub fn initials(&self) -> String {
        self.name.as_deref().map(user_initials).unwrap_or_default()
    }
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
}

/// What the auth provider currently knows about the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Lookup still in flight.
    Pending,
    Anonymous,
    Authenticated(Session),
}

/// Failure reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "auth provider error: {}", self.message)
    }
}

impl Error for AuthError {}

/// External authentication collaborator.
pub trait SessionProvider {
    fn current_session(&self) -> SessionState;
    fn sign_out(&mut self) -> Result<(), AuthError>;
}

/// Destinations the dashboard may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// External router collaborator.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Uppercased first letters of the first two words of `name`.
pub fn user_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(MAX_INITIALS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{user_initials, User};

    fn user(name: Option<&str>) -> User {
        User {
            id: "u1".to_string(),
            name: name.map(str::to_string),
            email: "ada@example.com".to_string(),
            image: None,
        }
    }

    #[test]
    fn initials_take_two_words() {
        assert_eq!(user_initials("ada king lovelace"), "AK");
        assert_eq!(user_initials("  grace   hopper "), "GH");
        assert_eq!(user_initials("plato"), "P");
        assert_eq!(user_initials(""), "");
    }

    #[test]
    fn first_name_falls_back() {
        assert_eq!(user(Some("Ada Lovelace")).first_name(), "Ada");
        assert_eq!(user(Some("   ")).first_name(), "User");
        assert_eq!(user(Some(" Ada")).first_name(), "User");
        assert_eq!(user(Some("")).first_name(), "User");
        assert_eq!(user(None).first_name(), "User");
        assert_eq!(user(None).initials(), "");
    }
}
