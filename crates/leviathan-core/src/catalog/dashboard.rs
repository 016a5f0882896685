//! Dashboard charts, stats, alerts and the hotspot map.

use std::time::Duration;

use tracing::debug;

use crate::types::Severity;

/// Simulated latency of a dashboard refresh
pub const DASHBOARD_REFRESH_DELAY: Duration = Duration::from_millis(800);

/// One slice of the species distribution donut
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesSlice {
    pub name: &'static str,
    /// Percent of detected species
    pub value: u32,
    pub color: &'static str,
}

pub const SPECIES_DISTRIBUTION: &[SpeciesSlice] = &[
    SpeciesSlice { name: "Fish", value: 35, color: "#06038D" },
    SpeciesSlice { name: "Corals", value: 25, color: "#FF671F" },
    SpeciesSlice { name: "Mollusks", value: 20, color: "#046A38" },
    SpeciesSlice { name: "Crustaceans", value: 12, color: "#4A90E2" },
    SpeciesSlice { name: "Others", value: 8, color: "#9C27B0" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxonAbundance {
    pub name: &'static str,
    pub abundance: u32,
    pub color: &'static str,
}

pub const TOP_TAXA: &[TaxonAbundance] = &[
    TaxonAbundance { name: "Parrotfish", abundance: 145, color: "#06038D" },
    TaxonAbundance { name: "Grouper", abundance: 132, color: "#FF671F" },
    TaxonAbundance { name: "Snapper", abundance: 128, color: "#046A38" },
    TaxonAbundance { name: "Tuna", abundance: 115, color: "#4A90E2" },
    TaxonAbundance { name: "Mackerel", abundance: 98, color: "#9C27B0" },
    TaxonAbundance { name: "Shark", abundance: 87, color: "#E91E63" },
    TaxonAbundance { name: "Ray", abundance: 76, color: "#FF9800" },
    TaxonAbundance { name: "Eel", abundance: 65, color: "#4CAF50" },
    TaxonAbundance { name: "Seahorse", abundance: 54, color: "#2196F3" },
    TaxonAbundance { name: "Octopus", abundance: 43, color: "#9C27B0" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbundancePoint {
    pub month: &'static str,
    pub abundance: u32,
    pub diversity: u32,
}

pub const ABUNDANCE_TRENDS: &[AbundancePoint] = &[
    AbundancePoint { month: "Jan", abundance: 1200, diversity: 85 },
    AbundancePoint { month: "Feb", abundance: 1350, diversity: 88 },
    AbundancePoint { month: "Mar", abundance: 1420, diversity: 92 },
    AbundancePoint { month: "Apr", abundance: 1580, diversity: 89 },
    AbundancePoint { month: "May", abundance: 1650, diversity: 94 },
    AbundancePoint { month: "Jun", abundance: 1720, diversity: 96 },
    AbundancePoint { month: "Jul", abundance: 1680, diversity: 93 },
    AbundancePoint { month: "Aug", abundance: 1750, diversity: 95 },
    AbundancePoint { month: "Sep", abundance: 1820, diversity: 97 },
    AbundancePoint { month: "Oct", abundance: 1780, diversity: 94 },
    AbundancePoint { month: "Nov", abundance: 1850, diversity: 96 },
    AbundancePoint { month: "Dec", abundance: 1920, diversity: 98 },
];

/// Headline numbers on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_species: u32,
    pub diversity_index: u32,
    pub datasets_processed: u32,
    pub alerts_count: u32,
}

impl DashboardStats {
    /// Demo numbers; `datasets` overrides the processed count when the user
    /// has uploaded something this session.
    pub fn demo(datasets: usize) -> Self {
        Self {
            total_species: 1247,
            diversity_index: 94,
            datasets_processed: if datasets == 0 { 3 } else { datasets as u32 },
            alerts_count: ALERTS.len() as u32,
        }
    }
}

/// Pretend to reload the dashboard, waiting `delay` first.
pub async fn refresh_dashboard(datasets: usize, delay: Duration) -> DashboardStats {
    tokio::time::sleep(delay).await;
    let stats = DashboardStats::demo(datasets);
    debug!(datasets = stats.datasets_processed, alerts = stats.alerts_count, "Dashboard data reloaded");
    stats
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConservationAlert {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub location: &'static str,
    pub timestamp: &'static str,
}

pub const ALERTS: &[ConservationAlert] = &[
    ConservationAlert {
        id: "1",
        title: "Declining Coral Reef Health",
        description: "Coral bleaching detected in 3 sampling locations. Immediate conservation action recommended.",
        severity: Severity::Critical,
        location: "Goa Marine Sanctuary",
        timestamp: "2025-01-15T10:30:00Z",
    },
    ConservationAlert {
        id: "2",
        title: "New Species Discovery",
        description: "Previously unknown species of marine fish identified in Kerala coastal waters.",
        severity: Severity::Low,
        location: "Kerala Coast",
        timestamp: "2025-01-14T15:45:00Z",
    },
];

/// A sampling site on the pseudo-map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    pub lat: f64,
    pub lng: f64,
    pub name: &'static str,
    pub species: u32,
    pub diversity: u32,
}

pub const HOTSPOTS: &[Hotspot] = &[
    Hotspot { lat: 12.9716, lng: 77.5946, name: "Bengaluru Marine Research", species: 245, diversity: 94 },
    Hotspot { lat: 19.0760, lng: 72.8777, name: "Mumbai Coastal Area", species: 312, diversity: 96 },
    Hotspot { lat: 22.5726, lng: 88.3639, name: "Kolkata Estuary", species: 198, diversity: 89 },
    Hotspot { lat: 13.0827, lng: 80.2707, name: "Chennai Coast", species: 267, diversity: 92 },
    Hotspot { lat: 8.5241, lng: 76.9366, name: "Kochi Backwaters", species: 289, diversity: 95 },
    Hotspot { lat: 15.2993, lng: 74.1240, name: "Goa Marine Sanctuary", species: 334, diversity: 97 },
    Hotspot { lat: 9.9312, lng: 76.2673, name: "Kerala Coast", species: 276, diversity: 93 },
    Hotspot { lat: 11.2588, lng: 75.7804, name: "Kozhikode Research", species: 223, diversity: 91 },
    Hotspot { lat: 12.3051, lng: 76.6551, name: "Mysuru Freshwater", species: 156, diversity: 87 },
    Hotspot { lat: 17.3850, lng: 78.4867, name: "Hyderabad Research", species: 189, diversity: 88 },
];

impl Hotspot {
    /// Equirectangular position as `(left%, top%)` of the map area
    pub fn position(&self) -> (f64, f64) {
        ((self.lng + 180.0) / 360.0 * 100.0, (90.0 - self.lat) / 180.0 * 100.0)
    }

    /// Marker color by diversity score
    pub fn marker_color(&self) -> &'static str {
        match self.diversity {
            95.. => "#046A38",
            90..=94 => "#FF671F",
            85..=89 => "#06038D",
            _ => "#6B7280",
        }
    }

    /// Marker diameter in pixels by species count
    pub fn marker_size(&self) -> u32 {
        match self.species {
            300.. => 32,
            250..=299 => 24,
            200..=249 => 20,
            _ => 16,
        }
    }
}

/// Hotspots projected into a zoomed viewport.
///
/// The viewport is centered on the hotspots' bounding box so the markers
/// spread across the map instead of clustering in one corner.
pub fn project_hotspots(zoom: f64) -> Vec<(Hotspot, f64, f64)> {
    let positions: Vec<(f64, f64)> = HOTSPOTS.iter().map(Hotspot::position).collect();
    let (min_x, max_x) = min_max(positions.iter().map(|p| p.0));
    let (min_y, max_y) = min_max(positions.iter().map(|p| p.1));
    let (cx, cy) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);

    HOTSPOTS
        .iter()
        .zip(positions)
        .map(|(h, (x, y))| (*h, 50.0 + (x - cx) * zoom, 50.0 + (y - cy) * zoom))
        .collect()
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_sums_to_100() {
        assert_eq!(SPECIES_DISTRIBUTION.iter().map(|s| s.value).sum::<u32>(), 100);
    }

    #[test]
    fn test_hotspot_projection() {
        let h = Hotspot { lat: 0.0, lng: 0.0, name: "origin", species: 1, diversity: 1 };
        assert_eq!(h.position(), (50.0, 50.0));
        let h = Hotspot { lat: 90.0, lng: -180.0, ..h };
        assert_eq!(h.position(), (0.0, 0.0));
    }

    #[test]
    fn test_marker_buckets() {
        let base = HOTSPOTS[0];
        let with = |species, diversity| Hotspot { species, diversity, ..base };
        assert_eq!(with(100, 95).marker_color(), "#046A38");
        assert_eq!(with(100, 90).marker_color(), "#FF671F");
        assert_eq!(with(100, 85).marker_color(), "#06038D");
        assert_eq!(with(100, 84).marker_color(), "#6B7280");
        assert_eq!(with(300, 0).marker_size(), 32);
        assert_eq!(with(250, 0).marker_size(), 24);
        assert_eq!(with(200, 0).marker_size(), 20);
        assert_eq!(with(199, 0).marker_size(), 16);
    }

    #[test]
    fn test_zoomed_projection_is_centered() {
        let projected = project_hotspots(10.0);
        assert_eq!(projected.len(), HOTSPOTS.len());
        let xs: Vec<f64> = projected.iter().map(|p| p.1).collect();
        let (lo, hi) = min_max(xs.into_iter());
        assert!(((lo + hi) / 2.0 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_use_upload_count() {
        assert_eq!(DashboardStats::demo(0).datasets_processed, 3);
        assert_eq!(DashboardStats::demo(5).datasets_processed, 5);
        assert_eq!(DashboardStats::demo(0).alerts_count, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_waits_then_reloads() {
        let start = tokio::time::Instant::now();
        let stats = refresh_dashboard(4, DASHBOARD_REFRESH_DELAY).await;
        assert_eq!(start.elapsed(), DASHBOARD_REFRESH_DELAY);
        assert_eq!(stats, DashboardStats::demo(4));
    }
}
