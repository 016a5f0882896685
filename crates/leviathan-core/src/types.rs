//! Core types for Leviathan

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role a user picks at sign-up
///
/// Roles only steer presentation: the admin page and its nav entry are
/// shown to [`Role::Admin`], everything else is open to every role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Researcher,
    Student,
    Policymaker,
    Public,
    Admin,
}

impl Role {
    /// All roles in sign-up display order
    pub const ALL: [Role; 5] = [
        Role::Researcher,
        Role::Student,
        Role::Policymaker,
        Role::Public,
        Role::Admin,
    ];

    /// Wire/storage name, also the translation key for the role label
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Researcher => "researcher",
            Role::Student => "student",
            Role::Policymaker => "policymaker",
            Role::Public => "public",
            Role::Admin => "admin",
        }
    }

    /// One-line description shown on the role picker
    pub fn description(&self) -> &'static str {
        match self {
            Role::Researcher => "Conduct biodiversity research and analysis",
            Role::Student => "Learn about eDNA and biodiversity",
            Role::Policymaker => "Access policy insights and reports",
            Role::Public => "Explore biodiversity discoveries",
            Role::Admin => "Manage platform and users",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

/// The user record held in the session marker.
///
/// Serialized as `{ id, email, role, full_name, organization }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
}

impl User {
    /// Name to greet the user with, falling back to the email address
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Severity attached to conservation alerts and policy priorities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Translation key for the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_user_json_shape() {
        let user = User {
            id: "demo-user-1".to_string(),
            email: "a@b.com".to_string(),
            role: Role::Student,
            full_name: Some("A B".to_string()),
            organization: None,
        };
        let json: serde_json::Value = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "student");
        assert_eq!(json["full_name"], "A B");
        assert!(json["organization"].is_null());
    }

    #[test]
    fn test_user_missing_optional_fields() {
        let user: User =
            serde_json::from_str(r#"{"id":"x","email":"e@x.org","role":"admin"}"#).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.full_name, None);
        assert_eq!(user.display_name(), "e@x.org");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Low < Severity::Medium);
    }
}
