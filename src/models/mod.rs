// Data model for the geocoding service response.
// Every nested field is optional or defaulted so that partial documents
// still deserialize; the accessors decide what "missing" means.

use serde::{Deserialize, Serialize};

/// The decoded JSON document returned by the geocoding service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

/// One candidate match in the response's result list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: Option<String>,
    pub place_id: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub geometry: Option<Geometry>,
    pub plus_code: Option<PlusCode>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    pub partial_match: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Option<Location>,
    pub location_type: Option<String>,
    pub viewport: Option<Viewport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Bounding box suggested for displaying a result on a map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub northeast: Option<Location>,
    pub southwest: Option<Location>,
}

/// Short location-encoding code usable as an address substitute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlusCode {
    pub compound_code: Option<String>,
    pub global_code: Option<String>,
}

/// One typed fragment of a structured address (e.g., postal code, locality).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Flattened projection of the first result's address components.
///
/// Fields the service left unset stay `None`; they are never coerced to
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuredAddress {
    pub formatted_address: Option<String>,
    pub street_number: Option<String>,
    pub route: Option<String>,
    pub locality: Option<String>,
    pub administrative_area_level_1: Option<String>,
    pub administrative_area_level_1_short: Option<String>,
    pub administrative_area_level_2: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub country_short: Option<String>,
}
