//! Policy reports, the biodiversity summary and CSV export.
//!
//! CSV output goes through the `csv` crate writer into an in-memory buffer.

use std::io;

use crate::error::{LeviathanError, LeviathanResult};
use crate::types::Severity;

pub const CSV_FILE_NAME: &str = "biodiversity_reports.csv";
pub const CSV_HEADER: &str = "Report Title,Category,Priority,Species Count,Diversity Index,Status";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCategory {
    Biodiversity,
    Conservation,
    Climate,
    Research,
}

impl ReportCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportCategory::Biodiversity => "biodiversity",
            ReportCategory::Conservation => "conservation",
            ReportCategory::Climate => "climate",
            ReportCategory::Research => "research",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ReportCategory::Biodiversity => "📊",
            ReportCategory::Conservation => "🛡",
            ReportCategory::Climate => "📈",
            ReportCategory::Research => "📄",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Draft,
    Review,
    Published,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Review => "review",
            ReportStatus::Published => "published",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportData {
    pub species_count: u32,
    pub diversity_index: u32,
    pub threats: u32,
    pub recommendations: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyReport {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ReportCategory,
    pub priority: Severity,
    pub status: ReportStatus,
    pub created_at: &'static str,
    pub updated_at: &'static str,
    pub data: ReportData,
}

pub const REPORTS: &[PolicyReport] = &[
    PolicyReport {
        id: "1",
        title: "Marine Biodiversity Assessment 2025",
        description: "Comprehensive analysis of marine biodiversity trends and conservation priorities",
        category: ReportCategory::Biodiversity,
        priority: Severity::High,
        status: ReportStatus::Published,
        created_at: "2025-01-15",
        updated_at: "2025-01-15",
        data: ReportData { species_count: 1247, diversity_index: 94, threats: 4, recommendations: 8 },
    },
    PolicyReport {
        id: "2",
        title: "Climate Change Impact on Coral Reefs",
        description: "Assessment of coral bleaching events and mitigation strategies",
        category: ReportCategory::Climate,
        priority: Severity::Critical,
        status: ReportStatus::Review,
        created_at: "2025-01-10",
        updated_at: "2025-01-12",
        data: ReportData { species_count: 456, diversity_index: 78, threats: 6, recommendations: 12 },
    },
    PolicyReport {
        id: "3",
        title: "Sustainable Fisheries Management",
        description: "Policy recommendations for sustainable fishing practices",
        category: ReportCategory::Conservation,
        priority: Severity::High,
        status: ReportStatus::Published,
        created_at: "2025-01-08",
        updated_at: "2025-01-08",
        data: ReportData { species_count: 234, diversity_index: 82, threats: 3, recommendations: 6 },
    },
];

/// Region-wide summary shown above the report list
pub struct BiodiversitySummary {
    pub total_species: u32,
    pub endangered_species: u32,
    pub new_discoveries: u32,
    pub conservation_status: &'static str,
    pub threats: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

pub const SUMMARY: BiodiversitySummary = BiodiversitySummary {
    total_species: 1247,
    endangered_species: 23,
    new_discoveries: 8,
    conservation_status: "Moderate Concern",
    threats: &[
        "Coral bleaching due to rising sea temperatures",
        "Overfishing in critical habitats",
        "Pollution from coastal development",
        "Invasive species introduction",
    ],
    recommendations: &[
        "Implement marine protected areas in critical habitats",
        "Strengthen fishing regulations and monitoring",
        "Reduce coastal pollution through better waste management",
        "Establish early warning systems for coral bleaching",
    ],
};

/// `(action, item, when)` rows of the activity feed
pub const RECENT_ACTIVITY: &[(&str, &str, &str)] = &[
    ("Report published", "Marine Biodiversity Assessment 2025", "2 hours ago"),
    ("Data updated", "Climate Change Impact Report", "1 day ago"),
    ("New analysis", "Fisheries Management Policy", "3 days ago"),
];

pub fn published_count(reports: &[PolicyReport]) -> usize {
    reports.iter().filter(|r| r.status == ReportStatus::Published).count()
}

pub fn critical_count(reports: &[PolicyReport]) -> usize {
    reports.iter().filter(|r| r.priority == Severity::Critical).count()
}

pub fn species_analyzed(reports: &[PolicyReport]) -> u32 {
    reports.iter().map(|r| r.data.species_count).sum()
}

fn into_string(writer: csv::Writer<Vec<u8>>) -> LeviathanResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| io::Error::new(e.error().kind(), e.error().to_string()))?;
    String::from_utf8(bytes).map_err(|e| LeviathanError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// One header record plus one record per report, each line terminated
/// by `\n`.
pub fn export_csv(reports: &[PolicyReport]) -> LeviathanResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER.split(','))?;
    for r in reports {
        writer.write_record([
            r.title.to_string(),
            r.category.as_str().to_string(),
            r.priority.as_str().to_string(),
            r.data.species_count.to_string(),
            r.data.diversity_index.to_string(),
            r.status.as_str().to_string(),
        ])?;
    }
    into_string(writer)
}

/// Suggested file name for a single report: whitespace runs become `_`
pub fn report_file_name(report: &PolicyReport) -> String {
    let stem = report.title.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}.csv", stem)
}

/// Field/value sheet for one report, covering its description and data
pub fn export_report_csv(report: &PolicyReport) -> LeviathanResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let diversity = format!("{}%", report.data.diversity_index);
    let species = report.data.species_count.to_string();
    let threats = report.data.threats.to_string();
    let recommendations = report.data.recommendations.to_string();

    writer.write_record(["Field", "Value"])?;
    for (field, value) in [
        ("Title", report.title),
        ("Description", report.description),
        ("Category", report.category.as_str()),
        ("Priority", report.priority.as_str()),
        ("Status", report.status.as_str()),
        ("Created", report.created_at),
        ("Updated", report.updated_at),
        ("Total Species", species.as_str()),
        ("Diversity Index", diversity.as_str()),
        ("Threats Identified", threats.as_str()),
        ("Recommendations", recommendations.as_str()),
    ] {
        writer.write_record([field, value])?;
    }
    into_string(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(published_count(REPORTS), 2);
        assert_eq!(critical_count(REPORTS), 1);
        assert_eq!(species_analyzed(REPORTS), 1247 + 456 + 234);
    }

    #[test]
    fn test_export_csv() {
        let csv = export_csv(REPORTS).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "Marine Biodiversity Assessment 2025,biodiversity,high,1247,94,published");
        assert_eq!(lines[2], "Climate Change Impact on Coral Reefs,climate,critical,456,78,review");
        assert!(csv.ends_with("published\n"));
    }

    #[test]
    fn test_export_empty_is_header_only() {
        assert_eq!(export_csv(&[]).unwrap(), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_csv_field_quoting() {
        let mut report = REPORTS[0];
        report.title = "Reefs, \"hot\" spots";
        let csv = export_csv(&[report]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"Reefs, \"\"hot\"\" spots\",biodiversity,"));

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "Reefs, \"hot\" spots");
        assert_eq!(record.len(), 6);
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name(&REPORTS[1]), "Climate_Change_Impact_on_Coral_Reefs.csv");
    }

    #[test]
    fn test_export_single_report() {
        let csv = export_report_csv(&REPORTS[0]).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        assert_eq!(reader.headers().unwrap().iter().collect::<Vec<_>>(), vec!["Field", "Value"]);

        let rows: Vec<(String, String)> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].to_string())
            })
            .collect();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0], ("Title".to_string(), "Marine Biodiversity Assessment 2025".to_string()));
        assert!(rows.contains(&("Diversity Index".to_string(), "94%".to_string())));
        assert!(rows.contains(&("Threats Identified".to_string(), "4".to_string())));
    }
}
