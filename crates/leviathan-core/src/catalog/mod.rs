//! Hardcoded demo data shown by the pages.
//!
//! Every record is a `'static` constant. The only logic here is the handful
//! of filters, projections and exports the pages apply to it.

pub mod admin;
pub mod conservation;
pub mod dashboard;
pub mod learning;
pub mod policy;

use chrono::{DateTime, NaiveDate};

pub use admin::{AdminStats, AdminUser, RoleFilter, UserStatus};
pub use conservation::{ConservationStatus, Discovery, DiscoveryCategory, EcologicalRole, SuccessStory};
pub use dashboard::{AbundancePoint, ConservationAlert, DashboardStats, Hotspot, SpeciesSlice, TaxonAbundance};
pub use learning::{CaseStudy, LearningCategory, LearningModule, ModuleLevel};
pub use policy::{PolicyReport, ReportCategory, ReportData, ReportStatus};

/// A question/answer pair on the contact page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How accurate is the species identification using eDNA?",
        answer: "Our AI models achieve 95%+ accuracy in species identification from eDNA data. This accuracy is validated through extensive testing with known samples and continuous model improvements.",
    },
    Faq {
        question: "What file formats are supported for dataset uploads?",
        answer: "We support CSV, FASTA, and FASTQ file formats. CSV files should contain species data with proper headers, while FASTA and FASTQ files should contain DNA sequences in standard formats.",
    },
    Faq {
        question: "Is my data secure and private?",
        answer: "Yes, we take data security seriously. All data is encrypted in transit and at rest, and we comply with international data protection standards. User data is never shared without explicit consent.",
    },
    Faq {
        question: "How long does it take to process a dataset?",
        answer: "Processing time depends on the size and complexity of your dataset. Small datasets (under 1000 sequences) typically process within 15-30 minutes, while larger datasets may take several hours.",
    },
    Faq {
        question: "Can I integrate Leviathan with my existing research workflow?",
        answer: "Yes, we provide APIs and export options to integrate with your existing tools. Our platform supports various data formats and can be customized for specific research needs.",
    },
    Faq {
        question: "What support is available for new users?",
        answer: "We provide comprehensive documentation, video tutorials, and email support. For researchers and institutions, we also offer personalized training sessions and consultation.",
    },
];

/// A contact card: title plus its detail lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub title: &'static str,
    pub details: &'static [&'static str],
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        title: "Email Us",
        details: &["contact@leviathan.ai", "support@leviathan.ai", "research@leviathan.ai"],
    },
    ContactInfo {
        title: "Call Us",
        details: &["+91 98765 43210", "+91 87654 32109"],
    },
    ContactInfo {
        title: "Visit Us",
        details: &["Marine Biology Institute", "Kochi, Kerala 682016", "India"],
    },
    ContactInfo {
        title: "Business Hours",
        details: &[
            "Monday - Friday: 9:00 AM - 6:00 PM",
            "Saturday: 10:00 AM - 4:00 PM",
            "Sunday: Closed",
        ],
    },
];

/// Case-insensitive substring match; an empty needle matches everything
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// "Jan 15, 2025, 10:30" for RFC 3339 timestamps, "Jan 15, 2025" for plain
/// dates. Unparseable input comes back unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%b %-d, %Y, %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2025-01-15T10:30:00Z"), "Jan 15, 2025, 10:30");
        assert_eq!(format_timestamp("2025-01-05"), "Jan 5, 2025");
        assert_eq!(format_timestamp("soon"), "soon");
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Kerala Coast", "kerala"));
        assert!(contains_ci("anything", ""));
        assert!(!contains_ci("Goa", "kochi"));
    }
}
