//! Species discoveries, success stories and ecological roles.

use std::fmt;

use super::contains_ci;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscoveryCategory {
    Fish,
    Coral,
    Mollusk,
    Crustacean,
    Other,
}

impl DiscoveryCategory {
    pub const ALL: [DiscoveryCategory; 5] = [
        DiscoveryCategory::Fish,
        DiscoveryCategory::Coral,
        DiscoveryCategory::Mollusk,
        DiscoveryCategory::Crustacean,
        DiscoveryCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoveryCategory::Fish => "fish",
            DiscoveryCategory::Coral => "coral",
            DiscoveryCategory::Mollusk => "mollusk",
            DiscoveryCategory::Crustacean => "crustacean",
            DiscoveryCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiscoveryCategory::Fish => "Fish",
            DiscoveryCategory::Coral => "Corals",
            DiscoveryCategory::Mollusk => "Mollusks",
            DiscoveryCategory::Crustacean => "Crustaceans",
            DiscoveryCategory::Other => "Other",
        }
    }

    /// `None` for "all" and anything unknown
    pub fn from_filter(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// IUCN-style conservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConservationStatus {
    LeastConcern,
    NearThreatened,
    Vulnerable,
    Endangered,
    CriticallyEndangered,
}

impl ConservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConservationStatus::LeastConcern => "least_concern",
            ConservationStatus::NearThreatened => "near_threatened",
            ConservationStatus::Vulnerable => "vulnerable",
            ConservationStatus::Endangered => "endangered",
            ConservationStatus::CriticallyEndangered => "critically_endangered",
        }
    }

    /// Badge color used by the discovery cards
    pub fn color(&self) -> &'static str {
        match self {
            ConservationStatus::LeastConcern => "#16A34A",
            ConservationStatus::NearThreatened => "#CA8A04",
            ConservationStatus::Vulnerable => "#EA580C",
            ConservationStatus::Endangered => "#DC2626",
            ConservationStatus::CriticallyEndangered => "#991B1B",
        }
    }
}

impl fmt::Display for ConservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().replace('_', " "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discovery {
    pub id: &'static str,
    pub name: &'static str,
    pub scientific_name: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub discovery_date: &'static str,
    pub discoverer: &'static str,
    pub category: DiscoveryCategory,
    pub status: ConservationStatus,
    pub ecological_roles: &'static [&'static str],
    pub significance: &'static str,
}

pub const DISCOVERIES: &[Discovery] = &[
    Discovery {
        id: "1",
        name: "Kerala Rainbow Goby",
        scientific_name: "Stiphodon keralensis",
        description: "A newly discovered species of freshwater goby with unique rainbow coloration patterns",
        location: "Kerala Backwaters, India",
        discovery_date: "2025-01-10",
        discoverer: "Dr. Priya Sharma, Marine Biology Institute",
        category: DiscoveryCategory::Fish,
        status: ConservationStatus::Vulnerable,
        ecological_roles: &["Prey species", "Nutrient cycling", "Habitat maintenance"],
        significance: "This species plays a crucial role in the food web of Kerala backwaters and indicates healthy ecosystem functioning",
    },
    Discovery {
        id: "2",
        name: "Goa Deep-Sea Coral",
        scientific_name: "Madrepora goensis",
        description: "A deep-sea coral species found at 200m depth with unique bioluminescent properties",
        location: "Goa Continental Shelf, India",
        discovery_date: "2025-01-05",
        discoverer: "Dr. Rajesh Kumar, Deep Ocean Research Center",
        category: DiscoveryCategory::Coral,
        status: ConservationStatus::Endangered,
        ecological_roles: &["Habitat provider", "Carbon sequestration", "Biodiversity hotspot"],
        significance: "This coral species provides critical habitat for numerous deep-sea organisms and contributes to carbon storage",
    },
    Discovery {
        id: "3",
        name: "Mumbai Mangrove Snail",
        scientific_name: "Littorina mumbaiensis",
        description: "A small mangrove snail with unique shell patterns adapted to high salinity environments",
        location: "Mumbai Mangrove Forest, India",
        discovery_date: "2024-12-28",
        discoverer: "Dr. Ananya Patel, Coastal Ecology Lab",
        category: DiscoveryCategory::Mollusk,
        status: ConservationStatus::NearThreatened,
        ecological_roles: &["Decomposer", "Nutrient cycling", "Food source"],
        significance: "This species is an indicator of mangrove health and plays a vital role in nutrient cycling",
    },
];

impl Discovery {
    fn matches(&self, category: Option<DiscoveryCategory>, search: &str) -> bool {
        let in_category = category.map_or(true, |c| self.category == c);
        let in_search = contains_ci(self.name, search)
            || contains_ci(self.scientific_name, search)
            || contains_ci(self.location, search);
        in_category && in_search
    }
}

/// Discoveries in `category` (`None` means all) whose name, scientific name
/// or location contains `search`, ignoring case.
pub fn filter_discoveries(category: Option<DiscoveryCategory>, search: &str) -> Vec<&'static Discovery> {
    DISCOVERIES.iter().filter(|d| d.matches(category, search)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessStory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub year: u16,
    pub impact: &'static str,
    pub species_recovered: u32,
    /// Hectares
    pub habitat_restored: u32,
    pub community_involved: u32,
    pub challenges: &'static [&'static str],
    pub solutions: &'static [&'static str],
}

pub const SUCCESS_STORIES: &[SuccessStory] = &[
    SuccessStory {
        id: "1",
        title: "Coral Reef Restoration in Lakshadweep",
        description: "Successful restoration of degraded coral reefs through innovative transplantation techniques",
        location: "Lakshadweep Islands, India",
        year: 2024,
        impact: "Significantly improved coral cover and marine biodiversity",
        species_recovered: 45,
        habitat_restored: 1200,
        community_involved: 500,
        challenges: &[
            "Coral bleaching due to rising temperatures",
            "Limited funding for restoration efforts",
            "Community engagement challenges",
        ],
        solutions: &[
            "Developed heat-resistant coral varieties",
            "Established community-based conservation programs",
            "Implemented sustainable fishing practices",
        ],
    },
    SuccessStory {
        id: "2",
        title: "Mangrove Conservation in Sundarbans",
        description: "Community-driven mangrove restoration project protecting coastal areas from climate change",
        location: "Sundarbans, West Bengal",
        year: 2023,
        impact: "Protected coastal communities and enhanced marine biodiversity",
        species_recovered: 78,
        habitat_restored: 5000,
        community_involved: 1200,
        challenges: &[
            "Rising sea levels threatening mangrove habitats",
            "Deforestation for agriculture and development",
            "Human-wildlife conflicts",
        ],
        solutions: &[
            "Implemented adaptive management strategies",
            "Created alternative livelihood programs",
            "Established protected areas and buffer zones",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcologicalRole {
    pub id: &'static str,
    pub species: &'static str,
    pub role: &'static str,
    pub interactions: &'static [&'static str],
    pub importance: crate::types::Severity,
    pub threats: &'static [&'static str],
    pub actions: &'static [&'static str],
}

pub const ECOLOGICAL_ROLES: &[EcologicalRole] = &[
    EcologicalRole {
        id: "1",
        species: "Mangrove Snapper",
        role: "Top Predator",
        interactions: &["Preys on smaller fish", "Competes with groupers", "Provides food for sharks"],
        importance: crate::types::Severity::Critical,
        threats: &["Overfishing", "Habitat loss", "Pollution"],
        actions: &["Fishing quotas", "Marine protected areas", "Habitat restoration"],
    },
    EcologicalRole {
        id: "2",
        species: "Coral Polyps",
        role: "Foundation Species",
        interactions: &[
            "Provides habitat for fish",
            "Forms symbiotic relationships with algae",
            "Supports entire reef ecosystem",
        ],
        importance: crate::types::Severity::Critical,
        threats: &["Ocean acidification", "Coral bleaching", "Physical damage"],
        actions: &["Water quality monitoring", "Coral restoration", "Climate action"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_all_with_empty_search() {
        assert_eq!(filter_discoveries(None, "").len(), DISCOVERIES.len());
    }

    #[test]
    fn test_filter_by_category() {
        let corals = filter_discoveries(Some(DiscoveryCategory::Coral), "");
        assert_eq!(corals.len(), 1);
        assert_eq!(corals[0].name, "Goa Deep-Sea Coral");
        assert!(filter_discoveries(Some(DiscoveryCategory::Crustacean), "").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        assert_eq!(filter_discoveries(None, "KERALA")[0].id, "1");
        assert_eq!(filter_discoveries(None, "littorina")[0].id, "3");
        assert_eq!(filter_discoveries(None, "continental")[0].id, "2");
    }

    #[test]
    fn test_category_and_search_combine() {
        assert!(filter_discoveries(Some(DiscoveryCategory::Fish), "goa").is_empty());
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!(DiscoveryCategory::from_filter("all"), None);
        assert_eq!(DiscoveryCategory::from_filter("mollusk"), Some(DiscoveryCategory::Mollusk));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ConservationStatus::NearThreatened.to_string(), "near threatened");
    }
}
