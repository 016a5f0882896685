//! Admin panel users and platform stats.

use crate::types::Role;

use super::contains_ci;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminUser {
    pub id: &'static str,
    pub email: &'static str,
    pub full_name: Option<&'static str>,
    pub role: Role,
    pub organization: Option<&'static str>,
    pub created_at: &'static str,
    pub last_login: Option<&'static str>,
    pub datasets_count: u32,
    pub status: UserStatus,
}

pub const USERS: &[AdminUser] = &[
    AdminUser {
        id: "1",
        email: "dr.priya@marinebio.edu",
        full_name: Some("Dr. Priya Sharma"),
        role: Role::Researcher,
        organization: Some("Marine Biology Institute"),
        created_at: "2024-01-15T10:30:00Z",
        last_login: Some("2025-01-15T08:45:00Z"),
        datasets_count: 12,
        status: UserStatus::Active,
    },
    AdminUser {
        id: "2",
        email: "rajesh.kumar@oceanresearch.org",
        full_name: Some("Dr. Rajesh Kumar"),
        role: Role::Researcher,
        organization: Some("Deep Ocean Research Center"),
        created_at: "2024-02-20T14:20:00Z",
        last_login: Some("2025-01-14T16:30:00Z"),
        datasets_count: 8,
        status: UserStatus::Active,
    },
    AdminUser {
        id: "3",
        email: "student@university.edu",
        full_name: Some("Ananya Patel"),
        role: Role::Student,
        organization: Some("University of Mumbai"),
        created_at: "2024-03-10T09:15:00Z",
        last_login: Some("2025-01-13T20:15:00Z"),
        datasets_count: 3,
        status: UserStatus::Active,
    },
    AdminUser {
        id: "4",
        email: "policy@environment.gov",
        full_name: Some("Ministry of Environment"),
        role: Role::Policymaker,
        organization: Some("Government of India"),
        created_at: "2024-01-05T11:00:00Z",
        last_login: Some("2025-01-12T10:30:00Z"),
        datasets_count: 0,
        status: UserStatus::Active,
    },
];

/// Role dropdown on the user table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    /// "all" or a role name; unknown values fall back to `All`
    pub fn parse(value: &str) -> Self {
        value.parse().map(RoleFilter::Only).unwrap_or(RoleFilter::All)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleFilter::All => "all",
            RoleFilter::Only(role) => role.as_str(),
        }
    }

    fn admits(&self, role: Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(wanted) => *wanted == role,
        }
    }
}

impl AdminUser {
    fn matches_search(&self, search: &str) -> bool {
        contains_ci(self.email, search)
            || self.full_name.is_some_and(|n| contains_ci(n, search))
            || self.organization.is_some_and(|o| contains_ci(o, search))
    }
}

pub fn filter_users(search: &str, role: RoleFilter) -> Vec<&'static AdminUser> {
    USERS
        .iter()
        .filter(|u| u.matches_search(search) && role.admits(u.role))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdminStats {
    pub total_users: u32,
    pub active_users: u32,
    pub total_datasets: u32,
    pub processed_datasets: u32,
    pub system_health: &'static str,
    /// Terabytes
    pub storage_used: f64,
    pub api_calls: u32,
}

pub const STATS: AdminStats = AdminStats {
    total_users: 1247,
    active_users: 892,
    total_datasets: 3456,
    processed_datasets: 2890,
    system_health: "excellent",
    storage_used: 2.4,
    api_calls: 45678,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_everything() {
        assert_eq!(filter_users("", RoleFilter::All).len(), 4);
    }

    #[test]
    fn test_search_covers_email_name_and_org() {
        assert_eq!(filter_users("OCEANRESEARCH", RoleFilter::All)[0].id, "2");
        assert_eq!(filter_users("ananya", RoleFilter::All)[0].id, "3");
        assert_eq!(filter_users("government", RoleFilter::All)[0].id, "4");
        assert!(filter_users("nobody", RoleFilter::All).is_empty());
    }

    #[test]
    fn test_role_filter() {
        assert_eq!(filter_users("", RoleFilter::Only(Role::Researcher)).len(), 2);
        assert!(filter_users("", RoleFilter::Only(Role::Admin)).is_empty());
        assert_eq!(filter_users("priya", RoleFilter::Only(Role::Student)).len(), 0);
    }

    #[test]
    fn test_role_filter_parse() {
        assert_eq!(RoleFilter::parse("all"), RoleFilter::All);
        assert_eq!(RoleFilter::parse("student"), RoleFilter::Only(Role::Student));
        assert_eq!(RoleFilter::parse("bogus"), RoleFilter::All);
        assert_eq!(RoleFilter::Only(Role::Policymaker).as_str(), "policymaker");
    }
}
