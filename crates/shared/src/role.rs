//! Simulated user roles

use crate::error::UnknownRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key of the persisted slot holding the current role
pub const ROLE_STORAGE_KEY: &str = "aifa-role";

/// Simulated permission tag controlling link visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// Universal tag, carried by every link
    #[default]
    Guest,
    Architect,
    Admin,
    Editor,
    AuthUser,
    Subscriber,
    Customer,
    ApiUser,
}

impl Role {
    /// All roles, in selector order
    pub const ALL: [Role; 8] = [
        Role::Guest,
        Role::Architect,
        Role::Admin,
        Role::Editor,
        Role::AuthUser,
        Role::Subscriber,
        Role::Customer,
        Role::ApiUser,
    ];

    /// Every role except guest
    pub const ELEVATED: [Role; 7] = [
        Role::Architect,
        Role::Admin,
        Role::Editor,
        Role::AuthUser,
        Role::Subscriber,
        Role::Customer,
        Role::ApiUser,
    ];

    /// Wire tag, as persisted and serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Architect => "architect",
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::AuthUser => "authUser",
            Role::Subscriber => "subscriber",
            Role::Customer => "customer",
            Role::ApiUser => "apiUser",
        }
    }

    /// Human-readable label for selectors and notices
    pub fn label(&self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Architect => "Architect",
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::AuthUser => "Authorized User",
            Role::Subscriber => "Subscriber",
            Role::Customer => "Customer",
            Role::ApiUser => "API User",
        }
    }

    /// Exact tag match; tags are case-sensitive
    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == value)
    }

    /// Resolve a persisted value, falling back to guest when absent or unknown
    pub fn from_stored(value: Option<&str>) -> Role {
        value.and_then(Role::parse).unwrap_or_default()
    }

    /// All wire tags, in selector order
    pub fn tags() -> Vec<String> {
        Role::ALL.iter().map(|r| r.as_str().to_string()).collect()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| UnknownRoleError {
            value: s.to_string(),
            available: Role::tags(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== Parsing Tests ==============

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(Role::parse("guest"), Some(Role::Guest));
        assert_eq!(Role::parse("authUser"), Some(Role::AuthUser));
        assert_eq!(Role::parse("apiUser"), Some(Role::ApiUser));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("authuser"), None);
    }

    #[test]
    fn test_from_str_error_lists_roles() {
        let err = "superadmin".parse::<Role>().unwrap_err();
        assert_eq!(err.value, "superadmin");
        assert_eq!(err.available.len(), 8);
        assert!(err.to_string().contains("apiUser"));
    }

    #[test]
    fn test_tags_round_trip_through_parse() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    // ============== Stored Value Tests ==============

    #[test]
    fn test_from_stored_missing_is_guest() {
        assert_eq!(Role::from_stored(None), Role::Guest);
    }

    #[test]
    fn test_from_stored_invalid_is_guest() {
        assert_eq!(Role::from_stored(Some("superadmin")), Role::Guest);
        assert_eq!(Role::from_stored(Some("")), Role::Guest);
    }

    #[test]
    fn test_from_stored_valid() {
        assert_eq!(Role::from_stored(Some("editor")), Role::Editor);
    }

    // ============== Metadata Tests ==============

    #[test]
    fn test_elevated_excludes_guest() {
        assert!(!Role::ELEVATED.contains(&Role::Guest));
        assert_eq!(Role::ELEVATED.len() + 1, Role::ALL.len());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Role::AuthUser.label(), "Authorized User");
        assert_eq!(Role::ApiUser.label(), "API User");
        assert_eq!(Role::Guest.to_string(), "guest");
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let json = serde_json::to_string(&Role::AuthUser).unwrap();
        assert_eq!(json, "\"authUser\"");

        let role: Role = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(role, Role::Customer);
    }
}
