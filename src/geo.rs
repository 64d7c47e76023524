//! Geography Module
//! Continent membership tables and country-name reconciliation with the
//! external world-boundaries dataset.

use serde::Serialize;
use std::collections::HashMap;

const EUROPE: &[&str] = &[
    "Finland",
    "Denmark",
    "Iceland",
    "Sweden",
    "Netherlands",
    "Norway",
    "Luxembourg",
    "Switzerland",
    "Austria",
    "Belgium",
    "Ireland",
    "Czechia",
    "Lithuania",
    "United Kingdom",
    "Slovenia",
    "Germany",
    "France",
    "Romania",
    "Estonia",
    "Poland",
    "Spain",
    "Serbia",
    "Malta",
    "Italy",
    "Slovakia",
    "Latvia",
    "Cyprus",
    "Portugal",
    "Hungary",
    "Croatia",
    "Greece",
    "Bosnia and Herzegovina",
    "Moldova",
    "Russia",
    "Montenegro",
    "Bulgaria",
    "North Macedonia",
    "Albania",
    "Ukraine",
];

const ASIA: &[&str] = &[
    "Israel",
    "Kuwait",
    "United Arab Emirates",
    "Saudi Arabia",
    "Singapore",
    "Taiwan Province of China",
    "Japan",
    "South Korea",
    "Philippines",
    "Vietnam",
    "Thailand",
    "Malaysia",
    "China",
    "Bahrain",
    "Uzbekistan",
    "Kazakhstan",
    "Kyrgyzstan",
    "Mongolia",
    "Indonesia",
    "Armenia",
    "Tajikistan",
    "Georgia",
    "Iraq",
    "Nepal",
    "Laos",
    "Turkiye",
    "Iran",
    "Azerbaijan",
    "State of Palestine",
    "Pakistan",
    "Myanmar",
    "Cambodia",
    "Jordan",
    "India",
    "Sri Lanka",
    "Bangladesh",
    "Yemen",
    "Lebanon",
    "Afghanistan",
];

const AFRICA: &[&str] = &[
    "Mauritius",
    "Libya",
    "South Africa",
    "Algeria",
    "Congo (Brazzaville)",
    "Mozambique",
    "Gabon",
    "Ivory Coast",
    "Guinea",
    "Senegal",
    "Nigeria",
    "Cameroon",
    "Namibia",
    "Morocco",
    "Niger",
    "Burkina Faso",
    "Mauritania",
    "Gambia",
    "Chad",
    "Kenya",
    "Tunisia",
    "Benin",
    "Uganda",
    "Ghana",
    "Liberia",
    "Mali",
    "Madagascar",
    "Togo",
    "Egypt",
    "Ethiopia",
    "Tanzania",
    "Comoros",
    "Zambia",
    "Eswatini",
    "Malawi",
    "Botswana",
    "Zimbabwe",
    "Congo (Kinshasa)",
    "Sierra Leone",
    "Lesotho",
];

const NORTH_AMERICA: &[&str] = &["Canada", "United States", "Mexico"];

const SOUTH_AMERICA: &[&str] = &[
    "Costa Rica",
    "Uruguay",
    "Chile",
    "Panama",
    "Brazil",
    "Argentina",
    "Guatemala",
    "Nicaragua",
    "El Salvador",
    "Paraguay",
    "Peru",
    "Dominican Republic",
    "Bolivia",
    "Ecuador",
    "Venezuela",
    "Colombia",
    "Honduras",
];

const OCEANIA: &[&str] = &["Australia", "New Zealand"];

/// Name overrides for the world-boundaries geometry dataset, whose
/// conventions differ from the happiness tables. Countries absent here
/// share the same name in both datasets.
pub const BOUNDARY_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("United States of America", "United States"),
    ("Bosnia and Herz.", "Bosnia and Herzegovina"),
    ("Turkey", "Turkiye"),
    ("Congo", "Congo (Brazzaville)"),
    ("Dem. Rep. Congo", "Congo (Kinshasa)"),
    ("Czech Republic", "Czechia"),
    ("Côte d'Ivoire", "Ivory Coast"),
    ("eSwatini", "Eswatini"),
    ("Taiwan", "Taiwan Province of China"),
    ("Dominican Rep.", "Dominican Republic"),
    ("S. Sudan", "South Sudan"),
    ("Central African Rep.", "Central African Republic"),
];

/// Resolve an external dataset's country name to the happiness dataset's
/// convention, falling back to the raw name when no override exists.
pub fn map_external_country_name<'a>(
    raw_name: &'a str,
    mapping: &'a HashMap<String, String>,
) -> &'a str {
    mapping.get(raw_name).map(String::as_str).unwrap_or(raw_name)
}

/// The boundary override table as a lookup map.
pub fn boundary_name_mapping() -> HashMap<String, String> {
    BOUNDARY_NAME_OVERRIDES
        .iter()
        .map(|(external, canonical)| (external.to_string(), canonical.to_string()))
        .collect()
}

/// World region grouping used by the dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Continent {
    Europe,
    Asia,
    Africa,
    NorthAmerica,
    SouthAmerica,
    Oceania,
}

impl Continent {
    pub const ALL: [Continent; 6] = [
        Continent::Europe,
        Continent::Asia,
        Continent::Africa,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Continent::Europe => "Europe",
            Continent::Asia => "Asia",
            Continent::Africa => "Africa",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
        }
    }

    /// Member countries, in the dashboard's canonical naming.
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            Continent::Europe => EUROPE,
            Continent::Asia => ASIA,
            Continent::Africa => AFRICA,
            Continent::NorthAmerica => NORTH_AMERICA,
            Continent::SouthAmerica => SOUTH_AMERICA,
            Continent::Oceania => OCEANIA,
        }
    }

    pub fn contains(&self, country: &str) -> bool {
        self.members().contains(&country)
    }

    /// The continent a country belongs to, if it is listed at all.
    pub fn of(country: &str) -> Option<Continent> {
        Continent::ALL.into_iter().find(|c| c.contains(country))
    }
}

/// Filter scope for mean and trend views: the whole dataset or a single
/// continent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegionScope {
    Global,
    Continent(Continent),
}

impl RegionScope {
    pub fn admits(&self, country: &str) -> bool {
        match self {
            RegionScope::Global => true,
            RegionScope::Continent(continent) => continent.contains(country),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegionScope::Global => "Global",
            RegionScope::Continent(continent) => continent.name(),
        }
    }
}
