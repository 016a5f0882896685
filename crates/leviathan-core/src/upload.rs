//! Simulated dataset uploads.
//!
//! Files are filtered by extension and size, then walked through fixed
//! progress steps on a timer. Nothing is transmitted anywhere.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use rand::distr::Alphanumeric;
use rand::Rng;
use thiserror::Error;
use tracing::info;

use crate::error::{LeviathanError, LeviathanResult};
use crate::types::User;

/// Per-file size cap (100 MiB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Delay between simulated progress steps
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_secs(1);

/// Dataset formats accepted by the upload page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetFormat {
    Csv,
    Fasta,
    Fastq,
}

impl DatasetFormat {
    pub const ALL: [DatasetFormat; 3] = [DatasetFormat::Csv, DatasetFormat::Fasta, DatasetFormat::Fastq];

    /// Recognize a format from a file name's extension (case-insensitive)
    pub fn from_file_name(name: &str) -> Option<DatasetFormat> {
        let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(DatasetFormat::Csv),
            "fasta" | "fa" => Some(DatasetFormat::Fasta),
            "fastq" | "fq" => Some(DatasetFormat::Fastq),
            _ => None,
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            DatasetFormat::Csv => &["csv"],
            DatasetFormat::Fasta => &["fasta", "fa"],
            DatasetFormat::Fastq => &["fastq", "fq"],
        }
    }

    /// Every accepted extension, for file dialog filters
    pub fn all_extensions() -> Vec<&'static str> {
        Self::ALL.iter().flat_map(|f| f.extensions().iter().copied()).collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatasetFormat::Csv => "CSV",
            DatasetFormat::Fasta => "FASTA",
            DatasetFormat::Fastq => "FASTQ",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DatasetFormat::Csv => "\u{1F4CA}",
            DatasetFormat::Fasta => "\u{1F9EC}",
            DatasetFormat::Fastq => "\u{1F52C}",
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a file was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("{0} is not a CSV, FASTA or FASTQ file")]
    UnsupportedFormat(String),

    #[error("{name} is larger than {}", format_file_size(MAX_FILE_SIZE))]
    TooLarge { name: String, size: u64 },
}

/// Check a file against the format and size filters.
pub fn accept(name: &str, size: u64) -> Result<DatasetFormat, UploadRejection> {
    let format = DatasetFormat::from_file_name(name)
        .ok_or_else(|| UploadRejection::UnsupportedFormat(name.to_string()))?;
    if size > MAX_FILE_SIZE {
        return Err(UploadRejection::TooLarge {
            name: name.to_string(),
            size,
        });
    }
    Ok(format)
}

/// Human-readable size: "0 Bytes", "1.5 KB", "2 MB"
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut exp = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && exp < UNITS.len() - 1 {
        value /= 1024.0;
        exp += 1;
    }
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[exp])
}

/// Progress state of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    Uploading,
    Completed,
    Error(String),
}

/// A file moving through the simulated upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub format: DatasetFormat,
    /// Percent complete, 0 to 100
    pub progress: u8,
    pub status: UploadStatus,
}

impl UploadedFile {
    /// Validate and wrap a picked file; progress starts at zero.
    pub fn new(name: impl Into<String>, size: u64) -> Result<Self, UploadRejection> {
        let name = name.into();
        let format = accept(&name, size)?;
        Ok(Self {
            id: random_file_id(),
            name,
            size,
            format,
            progress: 0,
            status: UploadStatus::Uploading,
        })
    }
}

/// Nine lowercase alphanumeric characters
fn random_file_id() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(9)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}

/// Drives files through the fixed progress steps.
#[derive(Debug, Clone, Copy)]
pub struct UploadSimulator {
    step_delay: Duration,
}

impl Default for UploadSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELAY)
    }
}

impl UploadSimulator {
    pub fn new(step_delay: Duration) -> Self {
        Self { step_delay }
    }

    /// Run one file: 30% → wait → 70% → wait → 100% completed.
    ///
    /// `on_update` sees every intermediate state.
    pub async fn run(&self, mut file: UploadedFile, mut on_update: impl FnMut(&UploadedFile)) -> UploadedFile {
        file.progress = 30;
        on_update(&file);

        tokio::time::sleep(self.step_delay).await;
        file.progress = 70;
        on_update(&file);

        tokio::time::sleep(self.step_delay).await;
        file.progress = 100;
        file.status = UploadStatus::Completed;
        on_update(&file);

        info!(name = %file.name, size = file.size, "Upload completed (demo mode)");
        file
    }

    /// Upload files one after another on behalf of a signed-in user.
    pub async fn run_all(
        &self,
        user: Option<&User>,
        files: Vec<UploadedFile>,
        mut on_update: impl FnMut(&UploadedFile),
    ) -> LeviathanResult<Vec<UploadedFile>> {
        if user.is_none() {
            return Err(LeviathanError::NotSignedIn("upload files".to_string()));
        }

        let mut done = Vec::with_capacity(files.len());
        for file in files {
            on_update(&file);
            done.push(self.run(file, &mut on_update).await);
        }
        Ok(done)
    }
}

/// Counts for the upload page sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadStats {
    pub total: usize,
    pub processed: usize,
    pub processing: usize,
}

impl UploadStats {
    pub fn from_files(files: &[UploadedFile]) -> Self {
        Self {
            total: files.len(),
            processed: files.iter().filter(|f| f.status == UploadStatus::Completed).count(),
            processing: files.iter().filter(|f| f.status == UploadStatus::Uploading).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use tokio::time::Instant;

    fn user() -> User {
        User {
            id: "u".to_string(),
            email: "u@x.org".to_string(),
            role: Role::Researcher,
            full_name: None,
            organization: None,
        }
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(DatasetFormat::from_file_name("a.csv"), Some(DatasetFormat::Csv));
        assert_eq!(DatasetFormat::from_file_name("reads.FQ"), Some(DatasetFormat::Fastq));
        assert_eq!(DatasetFormat::from_file_name("seq.fa"), Some(DatasetFormat::Fasta));
        assert_eq!(DatasetFormat::from_file_name("notes.txt"), None);
        assert_eq!(DatasetFormat::from_file_name("csv"), None);
    }

    #[test]
    fn test_size_cap() {
        assert!(accept("a.csv", MAX_FILE_SIZE).is_ok());
        assert!(matches!(
            accept("a.csv", MAX_FILE_SIZE + 1),
            Err(UploadRejection::TooLarge { .. })
        ));
        assert!(matches!(
            accept("a.pdf", 10),
            Err(UploadRejection::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(100 * 1024 * 1024), "100 MB");
        assert_eq!(format_file_size(1_288_490_189), "1.2 GB");
    }

    #[test]
    fn test_file_ids() {
        let file = UploadedFile::new("x.fastq", 10).unwrap();
        assert_eq!(file.id.len(), 9);
        assert!(file.id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(file.progress, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_steps() {
        let sim = UploadSimulator::default();
        let file = UploadedFile::new("sample.csv", 2048).unwrap();
        let mut seen = Vec::new();

        let start = Instant::now();
        let done = sim.run(file, |f| seen.push((f.progress, f.status.clone()))).await;

        assert_eq!(start.elapsed(), Duration::from_secs(2));
        assert_eq!(
            seen,
            vec![
                (30, UploadStatus::Uploading),
                (70, UploadStatus::Uploading),
                (100, UploadStatus::Completed),
            ]
        );
        assert_eq!(done.status, UploadStatus::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_all_requires_user() {
        let sim = UploadSimulator::default();
        let files = vec![UploadedFile::new("a.csv", 1).unwrap()];
        let err = sim.run_all(None, files, |_| {}).await.unwrap_err();
        assert!(matches!(err, LeviathanError::NotSignedIn(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_all_is_sequential() {
        let sim = UploadSimulator::new(Duration::from_millis(10));
        let files = vec![
            UploadedFile::new("a.csv", 1).unwrap(),
            UploadedFile::new("b.fasta", 1).unwrap(),
        ];
        let start = Instant::now();
        let done = sim.run_all(Some(&user()), files, |_| {}).await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(40));
        let stats = UploadStats::from_files(&done);
        assert_eq!(stats, UploadStats { total: 2, processed: 2, processing: 0 });
    }
}
