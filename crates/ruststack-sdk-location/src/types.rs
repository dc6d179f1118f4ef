//! Location Service enums and value objects.
//!
//! Positions are `[longitude, latitude]` pairs.

use std::collections::HashMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use ruststack_sdk_core::codec::{blob, date_time};
use ruststack_sdk_core::input::{required, required_list, validate_opt};
use ruststack_sdk_core::{InputError, Validate, aws_enum};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

aws_enum! {
    /// Mode of transport for route calculation.
    pub enum TravelMode {
        Car = "Car",
        Truck = "Truck",
        Walking = "Walking",
        Bicycle = "Bicycle",
        Motorcycle = "Motorcycle",
    }
}

aws_enum! {
    /// Unit of route distances.
    pub enum DistanceUnit {
        Kilometers = "Kilometers",
        Miles = "Miles",
    }
}

aws_enum! {
    /// Route optimization goal.
    pub enum OptimizationMode {
        FastestRoute = "FastestRoute",
        ShortestRoute = "ShortestRoute",
    }
}

aws_enum! {
    /// Failure reason of one item in a batch call.
    pub enum BatchItemErrorCode {
        AccessDeniedError = "AccessDeniedError",
        ConflictError = "ConflictError",
        InternalServerError = "InternalServerError",
        ResourceNotFoundError = "ResourceNotFoundError",
        ThrottlingError = "ThrottlingError",
        ValidationError = "ValidationError",
    }
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

/// Location of a place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaceGeometry {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub point: Vec<f64>,
}

/// Time zone of a place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeZone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Offset from UTC in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
}

/// A geocoded place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Place {
    /// Full display address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<PlaceGeometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// ISO 3166 alpha-3 code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// `true` when the position was interpolated from an address range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supplemental_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_municipality: Option<String>,
}

/// One match of a text search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchForTextResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<Place>,

    /// Meters from `BiasPosition`, when one was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    /// 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

/// Echo of the search parameters plus the result bounding box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchPlaceIndexForTextSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bias_position: Vec<f64>,
    #[serde(rename = "FilterBBox", default, skip_serializing_if = "Vec::is_empty")]
    pub filter_bbox: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_countries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(rename = "ResultBBox", default, skip_serializing_if = "Vec::is_empty")]
    pub result_bbox: Vec<f64>,
    /// `Esri`, `Grab`, or `Here`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_categories: Vec<String>,
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Route preferences for cars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CalculateRouteCarModeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_ferries: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_tolls: Option<bool>,
}

impl Validate for CalculateRouteCarModeOptions {
    fn validate(&self) -> Result<(), InputError> {
        Ok(())
    }
}

/// Path of a leg, when `IncludeLegGeometry` was set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegGeometry {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_string: Vec<Vec<f64>>,
}

/// One turn-by-turn step of a leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Step {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub start_position: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub end_position: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// Index of the step start in the leg's `LineString`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry_offset: Option<i32>,
}

/// Route between two consecutive positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Leg {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub start_position: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub end_position: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<LegGeometry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

/// Totals of a calculated route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteSummary {
    #[serde(rename = "RouteBBox", default, skip_serializing_if = "Vec::is_empty")]
    pub route_bbox: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,
}

// ---------------------------------------------------------------------------
// Geofences
// ---------------------------------------------------------------------------

/// A circle on the earth's surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Circle {
    /// Required.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub center: Vec<f64>,

    /// Meters. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl Validate for Circle {
    fn validate(&self) -> Result<(), InputError> {
        required_list("Circle", "Center", &self.center)?;
        required("Circle", "Radius", &self.radius)?;
        Ok(())
    }
}

/// Shape of a geofence: a polygon, a circle, or a Geobuf blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GeofenceGeometry {
    /// Linear rings; the first is the exterior, the rest are holes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub polygon: Vec<Vec<Vec<f64>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circle: Option<Circle>,

    /// Base64 in JSON.
    #[serde(default, with = "blob", skip_serializing_if = "Option::is_none")]
    pub geobuf: Option<Bytes>,
}

impl Validate for GeofenceGeometry {
    fn validate(&self) -> Result<(), InputError> {
        validate_opt(self.circle.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Tracking
// ---------------------------------------------------------------------------

/// Accuracy of a position fix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PositionalAccuracy {
    /// Meters. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<f64>,
}

impl Validate for PositionalAccuracy {
    fn validate(&self) -> Result<(), InputError> {
        required("PositionalAccuracy", "Horizontal", &self.horizontal)?;
        Ok(())
    }
}

/// A position report of one device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DevicePositionUpdate {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    /// When the position was sampled. Required.
    #[serde(default, with = "date_time", skip_serializing_if = "Option::is_none")]
    pub sample_time: Option<DateTime<Utc>>,

    /// Required.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub position: Vec<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<PositionalAccuracy>,

    /// Up to three custom key-value pairs.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub position_properties: HashMap<String, String>,
}

impl Validate for DevicePositionUpdate {
    fn validate(&self) -> Result<(), InputError> {
        required("DevicePositionUpdate", "DeviceId", &self.device_id)?;
        required("DevicePositionUpdate", "SampleTime", &self.sample_time)?;
        required_list("DevicePositionUpdate", "Position", &self.position)?;
        validate_opt(self.accuracy.as_ref())
    }
}

/// Error details of one batch item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchItemError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<BatchItemErrorCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A rejected position update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchUpdateDevicePositionError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    #[serde(default, with = "date_time", skip_serializing_if = "Option::is_none")]
    pub sample_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<BatchItemError>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_encode_sample_time_as_rfc3339() {
        let update: DevicePositionUpdate = serde_json::from_value(json!({
            "DeviceId": "truck-7",
            "SampleTime": "2024-05-01T12:30:00Z",
            "Position": [-123.1187, 49.2819],
            "Accuracy": {"Horizontal": 4.5}
        }))
        .unwrap();
        assert!(update.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({
                "DeviceId": "truck-7",
                "SampleTime": "2024-05-01T12:30:00.000Z",
                "Position": [-123.1187, 49.2819],
                "Accuracy": {"Horizontal": 4.5}
            })
        );
    }

    #[test]
    fn test_should_require_position_members() {
        let update = DevicePositionUpdate {
            device_id: Some("d".to_owned()),
            sample_time: Some(Utc::now()),
            ..Default::default()
        };
        assert!(matches!(
            update.validate(),
            Err(InputError::MissingRequiredField {
                shape: "DevicePositionUpdate",
                field: "Position"
            })
        ));

        let geometry = GeofenceGeometry {
            circle: Some(Circle {
                center: vec![0.0, 0.0],
                radius: None,
            }),
            ..Default::default()
        };
        assert!(matches!(
            geometry.validate(),
            Err(InputError::MissingRequiredField {
                shape: "Circle",
                field: "Radius"
            })
        ));
    }

    #[test]
    fn test_should_decode_place_with_bbox_names() {
        let summary: SearchPlaceIndexForTextSummary = serde_json::from_value(json!({
            "Text": "coffee",
            "FilterBBox": [-123.2, 49.2, -123.0, 49.3],
            "ResultBBox": [-123.12, 49.28, -123.11, 49.29],
            "DataSource": "Esri"
        }))
        .unwrap();
        assert_eq!(summary.filter_bbox.len(), 4);
        assert_eq!(summary.result_bbox[0], -123.12);
        assert_eq!(summary.data_source.as_deref(), Some("Esri"));
    }
}
