//! The extracted filter record and its closed vocabularies.
//!
//! [`ExtractedFilter`] is the sole output of the engine: a flat record where
//! every field is independently optional. "Not found" is a first-class
//! terminal value (`None` / empty collection), statically distinguishable
//! from "found but zero". The record serializes to camelCase JSON for the
//! downstream query builder, which turns non-null fields into storage
//! predicates.

use serde::{Deserialize, Serialize};

/// Property category. At most one is ever selected per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    Apartment,
    Villa,
    Office,
    Land,
    Commercial,
    HolidayHome,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apartment => write!(f, "Apartment"),
            Self::Villa => write!(f, "Villa"),
            Self::Office => write!(f, "Office"),
            Self::Land => write!(f, "Land"),
            Self::Commercial => write!(f, "Commercial"),
            Self::HolidayHome => write!(f, "HolidayHome"),
        }
    }
}

/// Whether the seeker wants to buy or rent. Mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListingStatus {
    Sale,
    Rent,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sale => write!(f, "Sale"),
            Self::Rent => write!(f, "Rent"),
        }
    }
}

/// Supported provinces. `city` is set only through a verified,
/// non-colliding lexicon match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum City {
    Damascus,
    Aleppo,
    Homs,
    Hama,
    Latakia,
    Tartus,
    Daraa,
    DeirEzzor,
    Raqqa,
    Hasakah,
    Idlib,
    Sweida,
    Quneitra,
}

impl City {
    /// Canonical English name, used to reject neighborhood candidates that
    /// are really cities.
    pub fn english_name(&self) -> &'static str {
        match self {
            Self::Damascus => "damascus",
            Self::Aleppo => "aleppo",
            Self::Homs => "homs",
            Self::Hama => "hama",
            Self::Latakia => "latakia",
            Self::Tartus => "tartus",
            Self::Daraa => "daraa",
            Self::DeirEzzor => "deir ezzor",
            Self::Raqqa => "raqqa",
            Self::Hasakah => "hasakah",
            Self::Idlib => "idlib",
            Self::Sweida => "sweida",
            Self::Quneitra => "quneitra",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Damascus => write!(f, "Damascus"),
            Self::Aleppo => write!(f, "Aleppo"),
            Self::Homs => write!(f, "Homs"),
            Self::Hama => write!(f, "Hama"),
            Self::Latakia => write!(f, "Latakia"),
            Self::Tartus => write!(f, "Tartus"),
            Self::Daraa => write!(f, "Daraa"),
            Self::DeirEzzor => write!(f, "Deir Ezzor"),
            Self::Raqqa => write!(f, "Raqqa"),
            Self::Hasakah => write!(f, "Hasakah"),
            Self::Idlib => write!(f, "Idlib"),
            Self::Sweida => write!(f, "Sweida"),
            Self::Quneitra => write!(f, "Quneitra"),
        }
    }
}

/// Canonical amenity values. Repeated surface hits merge into one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Amenity {
    Balcony,
    Garden,
    Elevator,
    Pool,
    Heating,
    AirConditioning,
    Terrace,
    Solar,
}

impl std::fmt::Display for Amenity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Balcony => write!(f, "Balcony"),
            Self::Garden => write!(f, "Garden"),
            Self::Elevator => write!(f, "Elevator"),
            Self::Pool => write!(f, "Pool"),
            Self::Heating => write!(f, "Heating"),
            Self::AirConditioning => write!(f, "AirConditioning"),
            Self::Terrace => write!(f, "Terrace"),
            Self::Solar => write!(f, "Solar"),
        }
    }
}

/// View classification. Only one is kept per query: sea > mountain > open >
/// generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewType {
    Sea,
    Mountain,
    Open,
    Generic,
}

impl std::fmt::Display for ViewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sea => write!(f, "Sea"),
            Self::Mountain => write!(f, "Mountain"),
            Self::Open => write!(f, "Open"),
            Self::Generic => write!(f, "Generic"),
        }
    }
}

/// The structured filter extracted from one search phrase.
///
/// Constructed fresh per call, immutable once returned. Invariants:
/// `bedrooms`/`bathrooms` ≥ 1 when set; `price_min ≤ price_max` and
/// `size_min ≤ size_max` when both ends are set; `amenities` holds unique
/// values; `neighborhood` never equals a recognized city name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFilter {
    pub property_type: Option<PropertyType>,
    pub status: Option<ListingStatus>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub size_min: Option<f64>,
    pub size_max: Option<f64>,
    pub city: Option<City>,
    pub neighborhood: Option<String>,
    pub amenities: Vec<Amenity>,
    pub furnished: Option<bool>,
    pub garages: Option<bool>,
    pub keywords: Vec<String>,
    pub view_type: Option<ViewType>,
}

impl ExtractedFilter {
    /// Add an amenity, keeping the collection a set.
    pub fn add_amenity(&mut self, amenity: Amenity) {
        if !self.amenities.contains(&amenity) {
            self.amenities.push(amenity);
        }
    }

    /// Quick check: did no rule fire at all?
    pub fn is_empty(&self) -> bool {
        self.property_type.is_none()
            && self.status.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.size_min.is_none()
            && self.size_max.is_none()
            && self.city.is_none()
            && self.neighborhood.is_none()
            && self.amenities.is_empty()
            && self.furnished.is_none()
            && self.garages.is_none()
            && self.keywords.is_empty()
            && self.view_type.is_none()
    }

    /// Serialize for the downstream query builder.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_empty() {
        let filter = ExtractedFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.property_type, None);
        assert_eq!(filter.furnished, None);
    }

    #[test]
    fn add_amenity_is_set_insert() {
        let mut filter = ExtractedFilter::default();
        filter.add_amenity(Amenity::Balcony);
        filter.add_amenity(Amenity::Elevator);
        filter.add_amenity(Amenity::Balcony);
        assert_eq!(filter.amenities, vec![Amenity::Balcony, Amenity::Elevator]);
    }

    #[test]
    fn filter_roundtrips_json() {
        let mut filter = ExtractedFilter {
            property_type: Some(PropertyType::Apartment),
            status: Some(ListingStatus::Sale),
            bedrooms: Some(2),
            city: Some(City::Damascus),
            price_max: Some(50_000.0),
            ..Default::default()
        };
        filter.add_amenity(Amenity::Balcony);

        let json = filter.to_json().unwrap();
        assert!(json.contains("\"propertyType\""), "camelCase keys: {json}");
        let back: ExtractedFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filter);
    }

    #[test]
    fn display_names() {
        assert_eq!(PropertyType::HolidayHome.to_string(), "HolidayHome");
        assert_eq!(ListingStatus::Rent.to_string(), "Rent");
        assert_eq!(City::DeirEzzor.to_string(), "Deir Ezzor");
        assert_eq!(ViewType::Sea.to_string(), "Sea");
        assert_eq!(Amenity::AirConditioning.to_string(), "AirConditioning");
    }
}
