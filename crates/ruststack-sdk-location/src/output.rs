//! Location Service output types.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use ruststack_sdk_core::codec::date_time;
use ruststack_sdk_core::{ClientError, FromResponse, Response, json_output};
use serde::{Deserialize, Serialize};

use crate::types::{
    BatchUpdateDevicePositionError, Leg, RouteSummary, SearchForTextResult,
    SearchPlaceIndexForTextSummary,
};

/// Output for the `SearchPlaceIndexForText` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchPlaceIndexForTextOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SearchPlaceIndexForTextSummary>,

    /// Most relevant first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<SearchForTextResult>,
}

/// Output for the `CalculateRoute` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculateRouteOutput {
    /// One leg per pair of consecutive positions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<Leg>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<RouteSummary>,
}

/// Output for the `GetMapTile` operation: the tile bytes and their headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetMapTileOutput {
    pub blob: Bytes,

    /// e.g. `application/vnd.mapbox-vector-tile`.
    pub content_type: Option<String>,

    pub cache_control: Option<String>,
}

impl FromResponse for GetMapTileOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        let content_type = response.header_string("content-type");
        let cache_control = response.header_string("cache-control");
        Ok(Self {
            blob: response.into_body(),
            content_type,
            cache_control,
        })
    }
}

/// Output for the `PutGeofence` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutGeofenceOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geofence_id: Option<String>,

    #[serde(default, with = "date_time", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(default, with = "date_time", skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output for the `BatchUpdateDevicePosition` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchUpdateDevicePositionOutput {
    /// Rejected updates. Empty when every update was accepted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<BatchUpdateDevicePositionError>,
}

json_output!(
    SearchPlaceIndexForTextOutput,
    CalculateRouteOutput,
    PutGeofenceOutput,
    BatchUpdateDevicePositionOutput,
);
