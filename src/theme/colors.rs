//! Color constants shared by inline SVG charts and badges.
//!
//! Tricolor palette: navy, saffron and green on crisp white.

#![allow(dead_code)]

// === BRAND ===
pub const NAVY: &str = "#06038D";
pub const SAFFRON: &str = "#FF671F";
pub const GREEN: &str = "#046A38";
pub const SKY: &str = "#4A90E2";

// === NEUTRALS ===
pub const CRISP_WHITE: &str = "#FAFAFA";
pub const CHARCOAL: &str = "#36454F";
pub const GRAY: &str = "#6B7280";
pub const GRID: &str = "#E5E7EB";

// === SEMANTIC ===
pub const DANGER: &str = "#DC2626";
pub const WARNING: &str = "#EA580C";
pub const CAUTION: &str = "#CA8A04";
pub const SUCCESS: &str = "#16A34A";
pub const ROYAL: &str = "#9333EA";

use leviathan_core::{Role, Severity};

pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => DANGER,
        Severity::High => WARNING,
        Severity::Medium => CAUTION,
        Severity::Low => SUCCESS,
    }
}

pub fn role_color(role: Role) -> &'static str {
    match role {
        Role::Admin => ROYAL,
        Role::Researcher => SKY,
        Role::Student => SUCCESS,
        Role::Policymaker => WARNING,
        Role::Public => GRAY,
    }
}
