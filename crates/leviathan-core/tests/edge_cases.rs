//! Edge case and boundary condition tests
//!
//! Unusual inputs, empty surfaces and limits across the core modules.

use std::time::Duration;

use leviathan_core::catalog::{self, admin::RoleFilter, conservation};
use leviathan_core::upload::{format_file_size, MAX_FILE_SIZE};
use leviathan_core::{
    translate, ContactCategory, ContactForm, FormError, Language, LeviathanError, LocalStorage,
    SignUpForm, Surface, SurfaceSize, SvgSurface, UploadRejection, UploadSimulator, UploadedFile,
    WaveBand, WaveRenderer,
};

// ============================================================================
// Wave renderer
// ============================================================================

/// Surface that reports a fixed size and counts what is drawn
struct CountingSurface {
    size: Option<(f64, f64)>,
    clears: usize,
    bands: usize,
}

impl CountingSurface {
    fn new(size: Option<(f64, f64)>) -> Self {
        Self { size, clears: 0, bands: 0 }
    }
}

impl Surface for CountingSurface {
    fn size(&self) -> Option<(f64, f64)> {
        self.size
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn fill_band(&mut self, _band: &WaveBand) {
        self.bands += 1;
    }
}

#[test]
fn test_tick_without_surface_draws_nothing() {
    let mut renderer = WaveRenderer::default();
    let mut surface = CountingSurface::new(None);

    assert!(!renderer.tick(&mut surface));
    assert_eq!(surface.clears, 0);
    assert_eq!(surface.bands, 0);
    assert_eq!(renderer.time(), 0);
}

#[test]
fn test_tick_on_zero_and_negative_area() {
    let mut renderer = WaveRenderer::default();
    for size in [(0.0, 100.0), (100.0, 0.0), (-5.0, 20.0)] {
        let mut surface = CountingSurface::new(Some(size));
        assert!(!renderer.tick(&mut surface));
        assert_eq!(surface.bands, 0);
    }
    assert_eq!(renderer.time(), 0);
}

#[test]
fn test_tick_draws_every_layer_once() {
    let mut renderer = WaveRenderer::default();
    let mut surface = CountingSurface::new(Some((300.0, 200.0)));

    assert!(renderer.tick(&mut surface));
    assert!(renderer.tick(&mut surface));
    assert_eq!(surface.clears, 2);
    assert_eq!(surface.bands, 2 * renderer.layers().len());
    assert_eq!(renderer.time(), 2);
}

#[test]
fn test_one_pixel_wide_frame() {
    let bands = WaveRenderer::default().frame(1.0, 10.0);
    assert!(bands.iter().all(|b| b.points.len() == 1 && b.points[0].0 == 0.0));
}

#[test]
fn test_svg_surface_undrawable_until_resized() {
    let mut renderer = WaveRenderer::default();
    let mut surface = SvgSurface::new(SurfaceSize::new(0.0, 0.0, 1.0));
    assert!(!renderer.tick(&mut surface));
    assert!(surface.frame().bands.is_empty());

    surface.resize(SurfaceSize::new(200.0, 100.0, 2.0));
    assert!(renderer.tick(&mut surface));
    assert_eq!(surface.frame().bands.len(), 3);
}

#[test]
fn test_fractional_scale_factor_rounds_backing_size() {
    let size = SurfaceSize::new(333.0, 101.0, 1.5);
    assert_eq!(size.backing(), (500, 152));
}

// ============================================================================
// Upload
// ============================================================================

#[test]
fn test_upload_size_boundary() {
    assert!(UploadedFile::new("edge.csv", MAX_FILE_SIZE).is_ok());
    assert!(matches!(
        UploadedFile::new("edge.csv", MAX_FILE_SIZE + 1),
        Err(UploadRejection::TooLarge { .. })
    ));
}

#[test]
fn test_upload_odd_names() {
    assert!(UploadedFile::new("READS.FQ", 10).is_ok());
    assert!(UploadedFile::new("archive.fasta.gz", 10).is_err());
    assert!(UploadedFile::new("csv", 10).is_err());
    assert!(UploadedFile::new("", 10).is_err());
}

#[test]
fn test_format_file_size_boundaries() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(1023), "1023 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1024 * 1024), "1 MB");
    assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
}

#[tokio::test(start_paused = true)]
async fn test_upload_requires_user() {
    let file = UploadedFile::new("a.csv", 1).unwrap();
    let result = UploadSimulator::new(Duration::from_secs(1))
        .run_all(None, vec![file], |_| {})
        .await;
    assert!(matches!(result, Err(LeviathanError::NotSignedIn(_))));
}

#[tokio::test(start_paused = true)]
async fn test_upload_with_no_files() {
    let user = leviathan_core::User {
        id: "u".into(),
        email: "u@x.org".into(),
        role: leviathan_core::Role::Researcher,
        full_name: None,
        organization: None,
    };
    let done = UploadSimulator::default()
        .run_all(Some(&user), Vec::new(), |_| {})
        .await
        .unwrap();
    assert!(done.is_empty());
}

// ============================================================================
// Forms
// ============================================================================

#[test]
fn test_sign_up_mismatch_checked_before_role() {
    let form = SignUpForm {
        email: "a@b.com".into(),
        password: "one".into(),
        confirm_password: "two".into(),
        role: None,
        ..Default::default()
    };
    assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
}

#[test]
fn test_contact_form_whitespace_only_fields() {
    let form = ContactForm {
        name: "   ".into(),
        email: "a@b.com".into(),
        organization: String::new(),
        subject: String::new(),
        message: "hi".into(),
        category: ContactCategory::General,
    };
    assert!(form.validate().is_err());
}

// ============================================================================
// i18n and storage
// ============================================================================

#[test]
fn test_translate_unknown_key_in_every_language() {
    for lang in Language::ALL {
        assert_eq!(translate(lang, "no.such.key"), "no.such.key");
        assert_eq!(translate(lang, ""), "");
    }
}

#[test]
fn test_unknown_stored_language_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::open(dir.path().join("s.redb")).unwrap();
    let area = storage.area();
    area.set_item(leviathan_core::storage::LANGUAGE_KEY, "fr").unwrap();

    let pref = leviathan_core::LanguagePreference::new(area);
    assert_eq!(pref.stored().unwrap(), None);
    assert_eq!(pref.load().unwrap(), Language::En);
}

#[test]
fn test_empty_and_unicode_values() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::open(dir.path().join("s.redb")).unwrap();
    let area = storage.area();

    area.set_item("empty", "").unwrap();
    assert_eq!(area.get_item("empty").unwrap().as_deref(), Some(""));

    area.set_item("മലയാളം", "हिन्दी").unwrap();
    assert_eq!(area.get_item("മലയാളം").unwrap().as_deref(), Some("हिन्दी"));
}

// ============================================================================
// Catalog filters
// ============================================================================

#[test]
fn test_catalog_filters_with_whitespace_search() {
    assert!(conservation::filter_discoveries(None, " ").len() <= conservation::DISCOVERIES.len());
    assert!(catalog::admin::filter_users("zzz", RoleFilter::All).is_empty());
}
