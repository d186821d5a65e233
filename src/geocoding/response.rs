//! Normalized, read-only view over a decoded geocoding response.
//!
//! All accessors are pure projections over the underlying document; none of
//! them perform network or cache I/O, and none of them panic on missing
//! fields. "First result" means `results[0]` when present.

use crate::models::{
    AddressComponent, GeocodeResult, PlusCode, RawResponse, StructuredAddress, Viewport,
};

/// Geographic coordinates of the first result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Wraps one raw response and exposes typed, optional accessors over it.
#[derive(Debug, Clone)]
pub struct GeocodeResponse {
    raw: RawResponse,
}

impl GeocodeResponse {
    pub fn new(raw: RawResponse) -> Self {
        Self { raw }
    }

    /// The service status string, verbatim. Empty string if missing;
    /// never normalized or translated.
    pub fn status(&self) -> &str {
        &self.raw.status
    }

    pub fn first_result(&self) -> Option<&GeocodeResult> {
        self.raw.results.first()
    }

    /// Coordinates of the first result, absent when the result, its
    /// geometry, or its location is missing.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let location = self.first_result()?.geometry.as_ref()?.location.as_ref()?;
        Some(Coordinates {
            latitude: location.lat,
            longitude: location.lng,
        })
    }

    pub fn formatted_address(&self) -> Option<&str> {
        self.first_result()?.formatted_address.as_deref()
    }

    pub fn place_id(&self) -> Option<&str> {
        self.first_result()?.place_id.as_deref()
    }

    pub fn location_type(&self) -> Option<&str> {
        self.first_result()?.geometry.as_ref()?.location_type.as_deref()
    }

    /// Type tags of the first result. An empty slice when there is no
    /// result, since "no types" is distinct from "no result" for callers
    /// that iterate unconditionally.
    pub fn result_types(&self) -> &[String] {
        self.first_result()
            .map(|r| r.types.as_slice())
            .unwrap_or(&[])
    }

    pub fn partial_match(&self) -> Option<bool> {
        self.first_result()?.partial_match
    }

    pub fn plus_code(&self) -> Option<&PlusCode> {
        self.first_result()?.plus_code.as_ref()
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.first_result()?.geometry.as_ref()?.viewport.as_ref()
    }

    /// Long-form value of the first address component tagged `tag`.
    ///
    /// Components are scanned in array order and the first match wins; the
    /// service orders components from most to least specific, so this linear
    /// policy is deliberate.
    pub fn address_component(&self, tag: &str) -> Option<&str> {
        self.component_by_type(tag)?.long_name.as_deref()
    }

    /// Short-form variant of [`address_component`](Self::address_component).
    pub fn address_component_short(&self, tag: &str) -> Option<&str> {
        self.component_by_type(tag)?.short_name.as_deref()
    }

    /// Flatten the first result into named address fields. Tags the service
    /// did not return map to `None`.
    pub fn structured_address(&self) -> StructuredAddress {
        StructuredAddress {
            formatted_address: self.formatted_address().map(str::to_string),
            street_number: self.component_long("street_number"),
            route: self.component_long("route"),
            locality: self.component_long("locality"),
            administrative_area_level_1: self.component_long("administrative_area_level_1"),
            administrative_area_level_1_short: self
                .address_component_short("administrative_area_level_1")
                .map(str::to_string),
            administrative_area_level_2: self.component_long("administrative_area_level_2"),
            postal_code: self.component_long("postal_code"),
            country: self.component_long("country"),
            country_short: self.address_component_short("country").map(str::to_string),
        }
    }

    /// Iterate over every result in original order. The iterator is lazy and
    /// restartable; calling this again yields the same sequence.
    pub fn results(&self) -> impl Iterator<Item = &GeocodeResult> {
        self.raw.results.iter()
    }

    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    pub fn into_raw(self) -> RawResponse {
        self.raw
    }

    fn component_by_type(&self, tag: &str) -> Option<&AddressComponent> {
        self.first_result()?
            .address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == tag))
    }

    fn component_long(&self, tag: &str) -> Option<String> {
        self.address_component(tag).map(str::to_string)
    }
}
