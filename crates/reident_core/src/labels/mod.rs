//! Display label dictionaries and geographic name resolution.
//!
//! # Responsibility
//! - Map attribute identifiers and value codes to human-readable labels.
//! - Define the geo-name collaborator seam for region/comuna display names.
//!
//! # Invariants
//! - Lookups never fail: unknown codes fall back to the stringified code (age
//!   bands synthesize a "v-v+4 years" label).
//! - Matching logic never depends on this module; labels are display-only.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::attribute::Attribute;
use crate::model::result::CatalogOption;

/// Geographic subdivision kinds resolvable to display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoKind {
    Region,
    Comuna,
}

/// Code-to-name lookup for geographic subdivisions.
///
/// Implementations never fail; unknown codes resolve to a fallback string.
pub trait GeoNameResolver {
    fn name_of(&self, kind: GeoKind, code: i64) -> String;
}

/// Built-in resolver carrying the 16 region names.
///
/// Comuna codes resolve to their stringified form; embedding layers that own
/// the full comuna table inject their own resolver through the trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticGeoNames;

impl GeoNameResolver for StaticGeoNames {
    fn name_of(&self, kind: GeoKind, code: i64) -> String {
        match kind {
            GeoKind::Region => region_name(code)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Region {code}")),
            GeoKind::Comuna => code.to_string(),
        }
    }
}

fn region_name(code: i64) -> Option<&'static str> {
    let name = match code {
        1 => "Tarapacá",
        2 => "Antofagasta",
        3 => "Atacama",
        4 => "Coquimbo",
        5 => "Valparaíso",
        6 => "O'Higgins",
        7 => "Maule",
        8 => "Biobío",
        9 => "La Araucanía",
        10 => "Los Lagos",
        11 => "Aysén",
        12 => "Magallanes",
        13 => "Metropolitana",
        14 => "Los Ríos",
        15 => "Arica y Parinacota",
        16 => "Ñuble",
        _ => return None,
    };
    Some(name)
}

/// Display label for an attribute identifier.
pub fn attribute_label(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::Region => "Region",
        Attribute::Comuna => "Comuna",
        Attribute::Sex => "Sex",
        Attribute::AgeBand => "Age band",
        Attribute::MaritalStatus => "Marital status",
        Attribute::EducationLevel => "Education level",
        Attribute::LaborForceStatus => "Labor force status",
        Attribute::OccupationCode => "Occupation",
        Attribute::WorkplaceLocation => "Workplace location",
        Attribute::CommuteMode => "Commute mode",
    }
}

/// Display label for one attribute value.
///
/// Region and comuna names come from the geo resolver; every other attribute
/// uses its static enumeration table. Unknown codes degrade to the stringified
/// code and never abort a query.
pub fn value_label(attribute: Attribute, value: i64, geo: &dyn GeoNameResolver) -> String {
    match attribute {
        Attribute::Region => geo.name_of(GeoKind::Region, value),
        Attribute::Comuna => geo.name_of(GeoKind::Comuna, value),
        Attribute::AgeBand => age_band_label(value),
        other => static_value_label(other, value)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
    }
}

/// Age-band labels; codes outside the census table synthesize "v-v+4 years".
pub fn age_band_label(value: i64) -> String {
    if value == 85 {
        return "85 years and over".to_string();
    }
    format!("{}-{} years", value, value + 4)
}

fn static_value_label(attribute: Attribute, value: i64) -> Option<&'static str> {
    match attribute {
        Attribute::Sex => sex_label(value),
        Attribute::MaritalStatus => marital_status_label(value),
        Attribute::EducationLevel => education_level_label(value),
        Attribute::LaborForceStatus => labor_force_label(value),
        Attribute::OccupationCode => occupation_label(value),
        Attribute::WorkplaceLocation => workplace_label(value),
        Attribute::CommuteMode => commute_label(value),
        Attribute::Region | Attribute::Comuna | Attribute::AgeBand => None,
    }
}

const SEX_CODES: [i64; 2] = [1, 2];

fn sex_label(value: i64) -> Option<&'static str> {
    match value {
        1 => Some("Male"),
        2 => Some("Female"),
        _ => None,
    }
}

const MARITAL_STATUS_CODES: [i64; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

fn marital_status_label(value: i64) -> Option<&'static str> {
    match value {
        1 => Some("Married"),
        2 => Some("Cohabiting partner"),
        3 => Some("Civil-union partner"),
        4 => Some("Annulled"),
        5 => Some("Separated"),
        6 => Some("Divorced"),
        7 => Some("Widowed"),
        8 => Some("Single"),
        _ => None,
    }
}

const EDUCATION_LEVEL_CODES: [i64; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

fn education_level_label(value: i64) -> Option<&'static str> {
    match value {
        1 => Some("Never attended school"),
        2 => Some("Pre-primary education"),
        3 => Some("Primary incomplete"),
        4 => Some("Primary complete (6th grade)"),
        5 => Some("Primary complete (8th grade)"),
        6 => Some("Secondary, academic track"),
        7 => Some("Secondary, technical-professional track"),
        8 => Some("Higher technical"),
        9 => Some("University"),
        10 => Some("Master's or specialization"),
        11 => Some("Doctorate"),
        12 => Some("Special education"),
        _ => None,
    }
}

const LABOR_FORCE_CODES: [i64; 3] = [1, 2, 3];

fn labor_force_label(value: i64) -> Option<&'static str> {
    match value {
        1 => Some("Employed"),
        2 => Some("Unemployed"),
        3 => Some("Inactive"),
        _ => None,
    }
}

/// Occupation code meaning "could not be coded"; matchable but hidden from
/// the options catalog.
pub const OCCUPATION_NOT_CODEABLE: i64 = 999;

const OCCUPATION_CODES: [i64; 11] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, OCCUPATION_NOT_CODEABLE];

fn occupation_label(value: i64) -> Option<&'static str> {
    match value {
        0 => Some("Armed forces"),
        1 => Some("Managers and directors"),
        2 => Some("Science and intellectual professionals"),
        3 => Some("Mid-level technicians and professionals"),
        4 => Some("Administrative support staff"),
        5 => Some("Service and sales workers"),
        6 => Some("Farmers and agricultural workers"),
        7 => Some("Craft and trades workers"),
        8 => Some("Machine operators"),
        9 => Some("Elementary occupations"),
        OCCUPATION_NOT_CODEABLE => Some("Not codeable"),
        _ => None,
    }
}

const WORKPLACE_CODES: [i64; 5] = [1, 2, 3, 4, 5];

fn workplace_label(value: i64) -> Option<&'static str> {
    match value {
        1 => Some("At home (remote work)"),
        2 => Some("In own comuna, outside home"),
        3 => Some("In another comuna"),
        4 => Some("Abroad"),
        5 => Some("Across several comunas or countries"),
        _ => None,
    }
}

const COMMUTE_CODES: [i64; 7] = [1, 2, 3, 4, 5, 6, 7];

fn commute_label(value: i64) -> Option<&'static str> {
    match value {
        1 => Some("Private car"),
        2 => Some("Public transport (bus, metro, shared taxi)"),
        3 => Some("Walking"),
        4 => Some("Bicycle or scooter"),
        5 => Some("Motorcycle"),
        6 => Some("Horse, launch or boat"),
        7 => Some("Other"),
        _ => None,
    }
}

/// Catalog options for attributes backed by static enumerations.
///
/// Returns `None` for region, comuna and age band, whose option lists come
/// from the loaded store. The not-codeable occupation is excluded.
pub fn static_catalog_entries(attribute: Attribute) -> Option<Vec<CatalogOption>> {
    let codes: &[i64] = match attribute {
        Attribute::Sex => &SEX_CODES,
        Attribute::MaritalStatus => &MARITAL_STATUS_CODES,
        Attribute::EducationLevel => &EDUCATION_LEVEL_CODES,
        Attribute::LaborForceStatus => &LABOR_FORCE_CODES,
        Attribute::OccupationCode => &OCCUPATION_CODES,
        Attribute::WorkplaceLocation => &WORKPLACE_CODES,
        Attribute::CommuteMode => &COMMUTE_CODES,
        Attribute::Region | Attribute::Comuna | Attribute::AgeBand => return None,
    };

    Some(
        codes
            .iter()
            .filter(|&&code| {
                !(attribute == Attribute::OccupationCode && code == OCCUPATION_NOT_CODEABLE)
            })
            .map(|&code| CatalogOption {
                value: code,
                label: static_value_label(attribute, code)
                    .map(str::to_string)
                    .unwrap_or_else(|| code.to_string()),
            })
            .collect(),
    )
}
