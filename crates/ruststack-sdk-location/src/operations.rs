//! Location Service operation enum.

use std::fmt;

use bytes::Bytes;
use ruststack_sdk_core::{AwsInput, ClientConfig, ClientError};

use crate::input::{
    BatchUpdateDevicePositionInput, CalculateRouteInput, GetMapTileInput, PutGeofenceInput,
    SearchPlaceIndexForTextInput,
};

/// All supported Location Service operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationOperation {
    /// Geocode free-form text.
    SearchPlaceIndexForText,
    /// Calculate a route between positions.
    CalculateRoute,
    /// Fetch one map tile.
    GetMapTile,
    /// Create or replace a geofence.
    PutGeofence,
    /// Report device positions to a tracker.
    BatchUpdateDevicePosition,
}

impl LocationOperation {
    /// All operations, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::SearchPlaceIndexForText,
        Self::CalculateRoute,
        Self::GetMapTile,
        Self::PutGeofence,
        Self::BatchUpdateDevicePosition,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SearchPlaceIndexForText => "SearchPlaceIndexForText",
            Self::CalculateRoute => "CalculateRoute",
            Self::GetMapTile => "GetMapTile",
            Self::PutGeofence => "PutGeofence",
            Self::BatchUpdateDevicePosition => "BatchUpdateDevicePosition",
        }
    }

    /// Parse an operation name string into a `LocationOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// Build the HTTP request for this operation from a named-parameter map.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the parameters do not map onto the input
    /// shape, fail validation, or the endpoint cannot be resolved.
    pub fn build_http_request(
        self,
        params: serde_json::Value,
        config: &ClientConfig,
    ) -> Result<http::Request<Bytes>, ClientError> {
        match self {
            Self::SearchPlaceIndexForText => {
                SearchPlaceIndexForTextInput::from_params(params)?.build_http_request(config)
            }
            Self::CalculateRoute => {
                CalculateRouteInput::from_params(params)?.build_http_request(config)
            }
            Self::GetMapTile => GetMapTileInput::from_params(params)?.build_http_request(config),
            Self::PutGeofence => PutGeofenceInput::from_params(params)?.build_http_request(config),
            Self::BatchUpdateDevicePosition => {
                BatchUpdateDevicePositionInput::from_params(params)?.build_http_request(config)
            }
        }
    }
}

impl fmt::Display for LocationOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_round_trip_operation_names() {
        for op in LocationOperation::ALL {
            assert_eq!(LocationOperation::from_name(op.as_str()), Some(*op));
        }
        assert_eq!(LocationOperation::from_name("ListMaps"), None);
    }

    #[test]
    fn test_should_apply_host_prefix_to_regional_endpoint() {
        let config = ClientConfig::builder().region("eu-central-1").build();
        let request = LocationOperation::GetMapTile
            .build_http_request(
                json!({"MapName": "m", "Z": "1", "X": "0", "Y": "0"}),
                &config,
            )
            .unwrap();
        assert_eq!(
            request.uri().to_string(),
            "https://maps.geo.eu-central-1.amazonaws.com/maps/v0/maps/m/tiles/1/0/0"
        );
    }

    #[test]
    fn test_should_skip_host_prefix_for_custom_endpoint() {
        let config = ClientConfig::builder()
            .endpoint("http://localhost:4566/")
            .build();
        let request = LocationOperation::BatchUpdateDevicePosition
            .build_http_request(
                json!({
                    "TrackerName": "fleet",
                    "Updates": [{"DeviceId": "d", "SampleTime": "2024-01-01T00:00:00Z", "Position": [0.0, 0.0]}]
                }),
                &config,
            )
            .unwrap();
        assert_eq!(
            request.uri().to_string(),
            "http://localhost:4566/tracking/v0/trackers/fleet/positions"
        );
        assert_eq!(request.headers()["content-type"], "application/json");
    }
}
