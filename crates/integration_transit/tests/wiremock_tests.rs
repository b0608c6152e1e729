//! Integration tests for the transit client (wiremock-based)

use domain::GeoLocation;
use integration_transit::{HafasTransitClient, TransitClient, TransitConfig, TransitError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for_mock(base_url: &str) -> TransitConfig {
    TransitConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

const fn origin() -> GeoLocation {
    GeoLocation::new(52.52, 13.41)
}

const fn destination() -> GeoLocation {
    GeoLocation::new(52.5, 13.33)
}

const fn sample_journeys_json() -> &'static str {
    r#"{
        "earlierRef": "e1",
        "laterRef": "l1",
        "journeys": [{
            "refreshToken": "tok1",
            "legs": [
                {
                    "origin": { "type": "location", "address": "start" },
                    "destination": { "id": "900100003", "name": "S+U Alexanderplatz" },
                    "departure": "2026-02-11T09:52:00+01:00",
                    "arrival": "2026-02-11T10:00:00+01:00",
                    "walking": true,
                    "distance": 540
                },
                {
                    "origin": { "id": "900100003", "name": "S+U Alexanderplatz" },
                    "destination": { "id": "900023201", "name": "S+U Zoologischer Garten" },
                    "departure": "2026-02-11T10:02:00+01:00",
                    "plannedDeparture": "2026-02-11T10:00:00+01:00",
                    "arrival": "2026-02-11T10:18:00+01:00",
                    "plannedArrival": "2026-02-11T10:18:00+01:00",
                    "departureDelay": 120,
                    "arrivalDelay": 0,
                    "departurePlatform": "2",
                    "direction": "S Westkreuz",
                    "line": {
                        "name": "S5",
                        "product": "suburban",
                        "mode": "train"
                    }
                }
            ]
        }]
    }"#
}

#[tokio::test]
async fn test_search_journeys_sends_coordinates_and_labels() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .and(query_param("from.latitude", "52.52"))
        .and(query_param("from.longitude", "13.41"))
        .and(query_param("to.latitude", "52.5"))
        .and(query_param("to.longitude", "13.33"))
        .and(query_param("from.address", "start"))
        .and(query_param("to.address", "stop"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_journeys_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = HafasTransitClient::new(&config_for_mock(&server.uri())).unwrap();

    let result = client
        .search_journeys(&origin(), &destination())
        .await
        .unwrap();

    assert_eq!(result.journeys.len(), 1);
    let journey = &result.journeys[0];
    assert_eq!(journey.legs.len(), 2);
    assert_eq!(journey.refresh_token.as_deref(), Some("tok1"));

    assert!(journey.legs[0].walking);
    let ride = &journey.legs[1];
    assert_eq!(ride.origin.name.as_deref(), Some("S+U Alexanderplatz"));
    assert_eq!(
        ride.line.as_ref().and_then(|l| l.name.as_deref()),
        Some("S5")
    );
    assert_eq!(ride.departure_delay, Some(120));
}

#[tokio::test]
async fn test_search_journeys_with_trailing_slash_base_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_journeys_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(&format!("{}/", server.uri()));
    let client = HafasTransitClient::new(&config).unwrap();

    let result = client
        .search_journeys(&origin(), &destination())
        .await
        .unwrap();

    assert_eq!(result.journeys.len(), 1);
}

#[tokio::test]
async fn test_search_journeys_without_journeys_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"realtimeDataUpdatedAt": null}"#))
        .mount(&server)
        .await;

    let client = HafasTransitClient::new(&config_for_mock(&server.uri())).unwrap();

    let result = client
        .search_journeys(&origin(), &destination())
        .await
        .unwrap();

    assert!(result.journeys.is_empty());
}

#[tokio::test]
async fn test_search_journeys_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = HafasTransitClient::new(&config_for_mock(&server.uri())).unwrap();

    let result = client.search_journeys(&origin(), &destination()).await;

    assert!(matches!(
        result,
        Err(TransitError::RateLimitExceeded {
            retry_after_secs: Some(30)
        })
    ));
}

#[tokio::test]
async fn test_search_journeys_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HafasTransitClient::new(&config_for_mock(&server.uri())).unwrap();

    let result = client.search_journeys(&origin(), &destination()).await;

    assert!(matches!(result, Err(TransitError::RequestFailed(_))));
}

#[tokio::test]
async fn test_search_journeys_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journeys"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = HafasTransitClient::new(&config_for_mock(&server.uri())).unwrap();

    let result = client.search_journeys(&origin(), &destination()).await;

    assert!(matches!(result, Err(TransitError::ParseError(_))));
}
