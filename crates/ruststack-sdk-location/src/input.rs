//! Location Service input types.
//!
//! URI labels and the `key` query parameter are skipped when an input is
//! serialized, so the serialized input is exactly the JSON body.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use http::Method;
use ruststack_sdk_core::codec::date_time;
use ruststack_sdk_core::input::{
    check_enum, json_body, required, required_list, validate_list, validate_opt,
};
use ruststack_sdk_core::uri::required_label;
use ruststack_sdk_core::{AwsInput, InputError, Request, Service, Validate};
use serde::{Deserialize, Serialize};

use crate::SERVICE;
use crate::output::{
    BatchUpdateDevicePositionOutput, CalculateRouteOutput, GetMapTileOutput, PutGeofenceOutput,
    SearchPlaceIndexForTextOutput,
};
use crate::types::{
    CalculateRouteCarModeOptions, DevicePositionUpdate, DistanceUnit, GeofenceGeometry,
    OptimizationMode, TravelMode,
};

/// Build a request whose body is the serialized input.
fn json_request<T>(
    input: &T,
    method: Method,
    path: String,
    host_prefix: &str,
) -> Result<Request, InputError>
where
    T: AwsInput + Serialize,
{
    let mut request = Request::new(method, path);
    request.set_body(T::SERVICE.protocol.content_type(), json_body(T::OPERATION, input)?)?;
    request.set_host_prefix(host_prefix);
    Ok(request)
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

/// Input for the `SearchPlaceIndexForText` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SearchPlaceIndexForTextInput {
    /// URI label. Required.
    #[serde(default, skip_serializing)]
    pub index_name: Option<String>,

    /// Address, name, or place to search for. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Rank results near this position.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bias_position: Vec<f64>,

    /// `[min_lon, min_lat, max_lon, max_lat]`.
    #[serde(rename = "FilterBBox", default, skip_serializing_if = "Vec::is_empty")]
    pub filter_bbox: Vec<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_countries: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// API key, sent as the `key` query parameter.
    #[serde(default, skip_serializing)]
    pub key: Option<String>,

    /// BCP 47 language tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_categories: Vec<String>,
}

impl Validate for SearchPlaceIndexForTextInput {
    fn validate(&self) -> Result<(), InputError> {
        required("SearchPlaceIndexForTextInput", "IndexName", &self.index_name)?;
        required("SearchPlaceIndexForTextInput", "Text", &self.text)?;
        Ok(())
    }
}

impl AwsInput for SearchPlaceIndexForTextInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "SearchPlaceIndexForText";
    type Output = SearchPlaceIndexForTextOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let index_name =
            required_label("SearchPlaceIndexForTextInput", "IndexName", &self.index_name)?;
        let mut request = json_request(
            self,
            Method::POST,
            format!("/places/v0/indexes/{index_name}/search/text"),
            "places.",
        )?;
        request.query_opt("key", self.key.as_deref());
        Ok(request)
    }
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Input for the `CalculateRoute` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CalculateRouteInput {
    /// URI label. Required.
    #[serde(default, skip_serializing)]
    pub calculator_name: Option<String>,

    /// Required.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departure_position: Vec<f64>,

    /// Required.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination_position: Vec<f64>,

    /// Up to 23 intermediate stops.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoint_positions: Vec<Vec<f64>>,

    /// Defaults to `Car`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_mode: Option<TravelMode>,

    #[serde(default, with = "date_time", skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<DateTime<Utc>>,

    /// Use the current time as departure time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depart_now: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,

    /// Return the path of each leg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_leg_geometry: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_mode_options: Option<CalculateRouteCarModeOptions>,

    #[serde(default, with = "date_time", skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimize_for: Option<OptimizationMode>,

    /// API key, sent as the `key` query parameter.
    #[serde(default, skip_serializing)]
    pub key: Option<String>,
}

impl Validate for CalculateRouteInput {
    fn validate(&self) -> Result<(), InputError> {
        const SHAPE: &str = "CalculateRouteInput";
        required(SHAPE, "CalculatorName", &self.calculator_name)?;
        required_list(SHAPE, "DeparturePosition", &self.departure_position)?;
        required_list(SHAPE, "DestinationPosition", &self.destination_position)?;
        check_enum(SHAPE, "TravelMode", self.travel_mode.as_ref())?;
        check_enum(SHAPE, "DistanceUnit", self.distance_unit.as_ref())?;
        check_enum(SHAPE, "OptimizeFor", self.optimize_for.as_ref())?;
        validate_opt(self.car_mode_options.as_ref())
    }
}

impl AwsInput for CalculateRouteInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "CalculateRoute";
    type Output = CalculateRouteOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let calculator_name =
            required_label("CalculateRouteInput", "CalculatorName", &self.calculator_name)?;
        let mut request = json_request(
            self,
            Method::POST,
            format!("/routes/v0/calculators/{calculator_name}/calculate/route"),
            "routes.",
        )?;
        request.query_opt("key", self.key.as_deref());
        Ok(request)
    }
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Input for the `GetMapTile` operation. All members are bound to the URI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GetMapTileInput {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_name: Option<String>,

    /// Zoom level. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<String>,

    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,

    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Validate for GetMapTileInput {
    fn validate(&self) -> Result<(), InputError> {
        required("GetMapTileInput", "MapName", &self.map_name)?;
        required("GetMapTileInput", "Z", &self.z)?;
        required("GetMapTileInput", "X", &self.x)?;
        required("GetMapTileInput", "Y", &self.y)?;
        Ok(())
    }
}

impl AwsInput for GetMapTileInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "GetMapTile";
    type Output = GetMapTileOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let map_name = required_label("GetMapTileInput", "MapName", &self.map_name)?;
        let z = required_label("GetMapTileInput", "Z", &self.z)?;
        let x = required_label("GetMapTileInput", "X", &self.x)?;
        let y = required_label("GetMapTileInput", "Y", &self.y)?;

        let mut request = Request::new(
            Method::GET,
            format!("/maps/v0/maps/{map_name}/tiles/{z}/{x}/{y}"),
        );
        request.query_opt("key", self.key.as_deref());
        request.set_host_prefix("maps.");
        Ok(request)
    }
}

// ---------------------------------------------------------------------------
// Geofencing
// ---------------------------------------------------------------------------

/// Input for the `PutGeofence` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PutGeofenceInput {
    /// URI label. Required.
    #[serde(default, skip_serializing)]
    pub collection_name: Option<String>,

    /// URI label. Required.
    #[serde(default, skip_serializing)]
    pub geofence_id: Option<String>,

    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeofenceGeometry>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub geofence_properties: HashMap<String, String>,
}

impl Validate for PutGeofenceInput {
    fn validate(&self) -> Result<(), InputError> {
        required("PutGeofenceInput", "CollectionName", &self.collection_name)?;
        required("PutGeofenceInput", "GeofenceId", &self.geofence_id)?;
        required("PutGeofenceInput", "Geometry", &self.geometry)?.validate()
    }
}

impl AwsInput for PutGeofenceInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "PutGeofence";
    type Output = PutGeofenceOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let collection_name =
            required_label("PutGeofenceInput", "CollectionName", &self.collection_name)?;
        let geofence_id = required_label("PutGeofenceInput", "GeofenceId", &self.geofence_id)?;
        json_request(
            self,
            Method::PUT,
            format!("/geofencing/v0/collections/{collection_name}/geofences/{geofence_id}"),
            "geofencing.",
        )
    }
}

// ---------------------------------------------------------------------------
// Tracking
// ---------------------------------------------------------------------------

/// Input for the `BatchUpdateDevicePosition` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct BatchUpdateDevicePositionInput {
    /// URI label. Required.
    #[serde(default, skip_serializing)]
    pub tracker_name: Option<String>,

    /// 1 to 10 updates. Required.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<DevicePositionUpdate>,
}

impl Validate for BatchUpdateDevicePositionInput {
    fn validate(&self) -> Result<(), InputError> {
        required(
            "BatchUpdateDevicePositionInput",
            "TrackerName",
            &self.tracker_name,
        )?;
        required_list("BatchUpdateDevicePositionInput", "Updates", &self.updates)?;
        validate_list(&self.updates)
    }
}

impl AwsInput for BatchUpdateDevicePositionInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "BatchUpdateDevicePosition";
    type Output = BatchUpdateDevicePositionOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let tracker_name = required_label(
            "BatchUpdateDevicePositionInput",
            "TrackerName",
            &self.tracker_name,
        )?;
        json_request(
            self,
            Method::POST,
            format!("/tracking/v0/trackers/{tracker_name}/positions"),
            "tracking.",
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn body(request: &Request) -> serde_json::Value {
        serde_json::from_slice(request.body()).unwrap()
    }

    #[test]
    fn test_should_build_search_place_index_request() {
        let input = SearchPlaceIndexForTextInput::from_params(json!({
            "IndexName": "explore.place",
            "Text": "Anyplace, USA",
            "BiasPosition": [-123.11, 49.28],
            "MaxResults": 5,
            "Key": "v1.public.abc"
        }))
        .unwrap();

        let request = input.request().unwrap();
        assert_eq!(*request.method(), Method::POST);
        assert_eq!(
            request.path(),
            "/places/v0/indexes/explore.place/search/text"
        );
        assert_eq!(request.query_value("key"), Some("v1.public.abc"));
        assert_eq!(request.host_prefix(), Some("places."));
        assert_eq!(
            body(&request),
            json!({"Text": "Anyplace, USA", "BiasPosition": [-123.11, 49.28], "MaxResults": 5})
        );
    }

    #[test]
    fn test_should_build_calculate_route_request() {
        let input = CalculateRouteInput::from_params(json!({
            "CalculatorName": "my route calc",
            "DeparturePosition": [-123.11, 49.28],
            "DestinationPosition": [-122.68, 45.52],
            "TravelMode": "Truck",
            "DepartureTime": "2024-05-01T08:00:00Z",
            "CarModeOptions": {"AvoidTolls": true}
        }))
        .unwrap();

        let request = input.request().unwrap();
        assert_eq!(
            request.path(),
            "/routes/v0/calculators/my%20route%20calc/calculate/route"
        );
        assert_eq!(request.host_prefix(), Some("routes."));
        assert!(request.query_pairs().is_empty());
        assert_eq!(
            body(&request),
            json!({
                "DeparturePosition": [-123.11, 49.28],
                "DestinationPosition": [-122.68, 45.52],
                "TravelMode": "Truck",
                "DepartureTime": "2024-05-01T08:00:00.000Z",
                "CarModeOptions": {"AvoidTolls": true}
            })
        );
    }

    #[test]
    fn test_should_reject_unknown_travel_mode() {
        let input = CalculateRouteInput::from_params(json!({
            "CalculatorName": "c",
            "DeparturePosition": [0.0, 0.0],
            "DestinationPosition": [1.0, 1.0],
            "TravelMode": "Boat"
        }))
        .unwrap();
        assert!(matches!(
            input.request(),
            Err(InputError::InvalidEnumValue {
                field: "TravelMode",
                ..
            })
        ));
    }

    #[test]
    fn test_should_build_get_map_tile_request() {
        let input = GetMapTileInput::from_params(json!({
            "MapName": "basemap",
            "Z": "12",
            "X": "654",
            "Y": "1583",
            "Key": "k"
        }))
        .unwrap();

        let request = input.request().unwrap();
        assert_eq!(*request.method(), Method::GET);
        assert_eq!(request.path(), "/maps/v0/maps/basemap/tiles/12/654/1583");
        assert_eq!(request.path_and_query(), "/maps/v0/maps/basemap/tiles/12/654/1583?key=k");
        assert!(request.body().is_empty());
        assert_eq!(request.host_prefix(), Some("maps."));
    }

    #[test]
    fn test_should_build_put_geofence_request() {
        let input = PutGeofenceInput::from_params(json!({
            "CollectionName": "fences",
            "GeofenceId": "depot/1",
            "Geometry": {"Circle": {"Center": [-123.11, 49.28], "Radius": 250.0}},
            "GeofenceProperties": {"site": "north"}
        }))
        .unwrap();

        let request = input.request().unwrap();
        assert_eq!(*request.method(), Method::PUT);
        assert_eq!(
            request.path(),
            "/geofencing/v0/collections/fences/geofences/depot%2F1"
        );
        assert_eq!(
            body(&request),
            json!({
                "Geometry": {"Circle": {"Center": [-123.11, 49.28], "Radius": 250.0}},
                "GeofenceProperties": {"site": "north"}
            })
        );
    }

    #[test]
    fn test_should_reject_unknown_geometry_member() {
        let err = PutGeofenceInput::from_params(json!({
            "CollectionName": "c",
            "GeofenceId": "g",
            "Geometry": {"Square": {}}
        }))
        .unwrap_err();
        assert!(matches!(err, InputError::InvalidParameters { .. }));
    }

    #[test]
    fn test_should_build_batch_update_device_position_request() {
        let input = BatchUpdateDevicePositionInput::from_params(json!({
            "TrackerName": "fleet",
            "Updates": [{
                "DeviceId": "truck-7",
                "SampleTime": "2024-05-01T12:30:00.250Z",
                "Position": [-123.1187, 49.2819]
            }]
        }))
        .unwrap();

        let request = input.request().unwrap();
        assert_eq!(request.path(), "/tracking/v0/trackers/fleet/positions");
        assert_eq!(request.host_prefix(), Some("tracking."));
        assert_eq!(
            body(&request)["Updates"][0]["SampleTime"],
            "2024-05-01T12:30:00.250Z"
        );
    }

    #[test]
    fn test_should_require_updates() {
        let input = BatchUpdateDevicePositionInput {
            tracker_name: Some("fleet".to_owned()),
            updates: Vec::new(),
        };
        assert!(matches!(
            input.request(),
            Err(InputError::MissingRequiredField { field: "Updates", .. })
        ));
    }
}
