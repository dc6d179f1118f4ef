//! Location Service integration tests: host prefixes and restJson1 bodies.

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use ruststack_sdk_core::AwsInput;
    use ruststack_sdk_location::input::{PutGeofenceInput, SearchPlaceIndexForTextInput};
    use serde_json::json;

    use crate::{aws_config, json_response, local_config};

    #[test]
    fn test_should_search_places_on_prefixed_host() {
        let input = SearchPlaceIndexForTextInput::from_params(json!({
            "IndexName": "explore",
            "Text": "Space Needle",
            "MaxResults": 1,
            "Key": "v1.public.abc"
        }))
        .unwrap();
        let request = input.build_http_request(&aws_config("us-west-2")).unwrap();

        assert_eq!(
            request.uri().to_string(),
            "https://places.geo.us-west-2.amazonaws.com/places/v0/indexes/explore/search/text?key=v1.public.abc"
        );
        let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
        assert_eq!(body, json!({"Text": "Space Needle", "MaxResults": 1}));

        let output = SearchPlaceIndexForTextInput::parse_response(json_response(
            StatusCode::OK,
            &json!({
                "Summary": {"Text": "Space Needle", "DataSource": "Esri", "MaxResults": 1},
                "Results": [{
                    "Place": {
                        "Label": "Space Needle, 400 Broad St, Seattle, WA, USA",
                        "Geometry": {"Point": [-122.349, 47.620]}
                    },
                    "Relevance": 1.0
                }]
            }),
        ))
        .unwrap();
        let place = output.results[0].place.as_ref().unwrap();
        assert!(place.label.as_deref().unwrap().starts_with("Space Needle"));
    }

    #[test]
    fn test_should_put_geofence_on_local_endpoint() {
        let input = PutGeofenceInput::from_params(json!({
            "CollectionName": "fences",
            "GeofenceId": "depot-1",
            "Geometry": {"Polygon": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}
        }))
        .unwrap();
        let request = input.build_http_request(&local_config()).unwrap();
        assert!(
            request
                .uri()
                .to_string()
                .ends_with("/geofencing/v0/collections/fences/geofences/depot-1")
        );
        assert!(!request.uri().to_string().contains("geofencing.localhost"));

        let output = PutGeofenceInput::parse_response(json_response(
            StatusCode::OK,
            &json!({
                "GeofenceId": "depot-1",
                "CreateTime": "2024-05-01T12:00:00Z",
                "UpdateTime": "2024-05-01T12:00:00Z"
            }),
        ))
        .unwrap();
        assert_eq!(output.create_time.unwrap().timestamp(), 1_714_564_800);
    }
}
