//! Integration tests for HTTP handlers
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use application::{
    DestinationService, DestinationSettings, JourneyService,
    error::ApplicationError,
    ports::{JourneyLeg, PlaceResolverPort, PlannedJourney, PositionPort, TransitPort},
};
use async_trait::async_trait;
use axum::http::{HeaderValue, StatusCode, header::AUTHORIZATION};
use axum_test::TestServer;
use chrono::DateTime;
use domain::GeoLocation;
use presentation_http::{routes::create_router, state::AppState};
use secrecy::SecretString;
use serde_json::{Value, json};

const TOKEN: &str = "test-token";
const HOME: GeoLocation = GeoLocation::new(52.525, 13.369);
const AWAY: GeoLocation = GeoLocation::new(52.3906, 13.0645);
const DEVICE: GeoLocation = GeoLocation::new(52.5251, 13.3691);

/// Fixed device position
struct FixedPosition;

#[async_trait]
impl PositionPort for FixedPosition {
    async fn current_position(&self) -> Result<GeoLocation, ApplicationError> {
        Ok(DEVICE)
    }
}

/// Position source that is down
struct BrokenPosition;

#[async_trait]
impl PositionPort for BrokenPosition {
    async fn current_position(&self) -> Result<GeoLocation, ApplicationError> {
        Err(ApplicationError::ExternalService(
            "Position lookup failed: Connection failed: 10.0.0.2:8082".to_string(),
        ))
    }
}

/// Transit service returning canned journeys and remembering the last target
struct CannedTransit {
    journeys: Vec<PlannedJourney>,
    last_target: Mutex<Option<GeoLocation>>,
}

impl CannedTransit {
    fn last_target(&self) -> Option<GeoLocation> {
        *self.last_target.lock().expect("lock poisoned")
    }
}

#[async_trait]
impl TransitPort for CannedTransit {
    async fn search_journeys(
        &self,
        _from: &GeoLocation,
        to: &GeoLocation,
    ) -> Result<Vec<PlannedJourney>, ApplicationError> {
        *self.last_target.lock().expect("lock poisoned") = Some(*to);
        Ok(self.journeys.clone())
    }
}

/// Resolver that counts calls
struct CountingResolver {
    calls: AtomicUsize,
    result: GeoLocation,
}

#[async_trait]
impl PlaceResolverPort for CountingResolver {
    async fn resolve_map_link(&self, _link: &str) -> Result<GeoLocation, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result)
    }
}

fn walk() -> JourneyLeg {
    JourneyLeg {
        destination: Some("Berlin Hbf".to_string()),
        departure: Some(DateTime::parse_from_rfc3339("2026-02-11T07:55:00+01:00").unwrap()),
        walking: true,
        distance_meters: Some(200),
        ..JourneyLeg::default()
    }
}

fn ride() -> JourneyLeg {
    JourneyLeg {
        origin: Some("Berlin Hbf".to_string()),
        destination: Some("Potsdam Hbf".to_string()),
        line: Some("RE1".to_string()),
        direction: Some("Magdeburg Hbf".to_string()),
        departure: Some(DateTime::parse_from_rfc3339("2026-02-11T08:03:00+01:00").unwrap()),
        planned_departure: Some(
            DateTime::parse_from_rfc3339("2026-02-11T08:01:00+01:00").unwrap(),
        ),
        arrival: Some(DateTime::parse_from_rfc3339("2026-02-11T08:40:00+01:00").unwrap()),
        departure_delay_secs: Some(120),
        arrival_delay_secs: None,
        departure_platform: Some("14".to_string()),
        ..JourneyLeg::default()
    }
}

struct Harness {
    server: TestServer,
    transit: Arc<CannedTransit>,
    resolver: Arc<CountingResolver>,
}

fn harness_with(position: Arc<dyn PositionPort>, journeys: Vec<PlannedJourney>) -> Harness {
    let transit = Arc::new(CannedTransit {
        journeys,
        last_target: Mutex::new(None),
    });
    let resolver = Arc::new(CountingResolver {
        calls: AtomicUsize::new(0),
        result: GeoLocation::new(48.1402, 11.5583),
    });

    let journey_service = JourneyService::new(
        position,
        Arc::clone(&transit) as Arc<dyn TransitPort>,
        Arc::clone(&resolver) as Arc<dyn PlaceResolverPort>,
        DestinationService::new(DestinationSettings::new(HOME, AWAY)),
    );

    let state = AppState {
        journey_service: Arc::new(journey_service),
        api_token: SecretString::from(TOKEN),
    };

    Harness {
        server: TestServer::new(create_router(state)).expect("Failed to create test server"),
        transit,
        resolver,
    }
}

fn harness(journeys: Vec<PlannedJourney>) -> Harness {
    harness_with(Arc::new(FixedPosition), journeys)
}

fn journey(legs: Vec<JourneyLeg>) -> PlannedJourney {
    PlannedJourney {
        refresh_token: Some("refresh-1".to_string()),
        legs,
    }
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let h = harness(vec![]);
    let response = h.server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn test_info_without_token_is_unauthorized() {
    let h = harness(vec![journey(vec![ride()])]);

    let response = h.server.get("/journey/info").await;
    response.assert_status_unauthorized();
    response.assert_json(&json!({"detail": "Unauthorized"}));
}

#[tokio::test]
async fn test_info_with_wrong_token_is_unauthorized() {
    let h = harness(vec![journey(vec![ride()])]);

    let response = h
        .server
        .get("/journey/info")
        .authorization_bearer("not-the-token")
        .await;
    response.assert_status_unauthorized();

    let response = h
        .server
        .get("/journey/info")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Basic dGVzdDp0ZXN0"))
        .await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_info_requires_exact_bearer_header() {
    let h = harness(vec![journey(vec![ride()])]);

    for value in [
        "bearer test-token",
        "Bearer  test-token",
        "BEARER test-token\t",
    ] {
        let response = h
            .server
            .get("/journey/info")
            .add_header(AUTHORIZATION, HeaderValue::from_static(value))
            .await;
        response.assert_status_unauthorized();
    }
}

#[tokio::test]
async fn test_info_first_ride() {
    let h = harness(vec![journey(vec![walk(), ride()])]);

    let response = h.server.get("/journey/info").authorization_bearer(TOKEN).await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "line": "RE1",
        "from": "Berlin Hbf",
        "to": "Magdeburg Hbf",
        "delay": 2.0,
        "platform": "14",
        "departure": "08:01"
    }));

    // Device is next to home, so the away default is the target
    assert_eq!(h.transit.last_target(), Some(AWAY));
}

#[tokio::test]
async fn test_info_without_journeys_is_not_found() {
    let h = harness(vec![]);

    let response = h.server.get("/journey/info").authorization_bearer(TOKEN).await;
    response.assert_status_not_found();
    response.assert_json(&json!({"detail": "Could not find good journey"}));
}

#[tokio::test]
async fn test_info_only_walking_is_not_found() {
    let h = harness(vec![journey(vec![walk()])]);

    let response = h.server.get("/journey/info").authorization_bearer(TOKEN).await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_upstream_failure_is_generic_500() {
    let h = harness_with(Arc::new(BrokenPosition), vec![]);

    let response = h.server.get("/journey/info").authorization_bearer(TOKEN).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert!(!body["detail"].as_str().unwrap_or_default().contains("10.0.0.2"));
}

#[tokio::test]
async fn test_details_mapping() {
    let h = harness(vec![journey(vec![walk(), ride()])]);

    let response = h
        .server
        .get("/journey/details")
        .authorization_bearer(TOKEN)
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body[0]["refresh_token"], "refresh-1");

    let walk = &body[0]["trips"][0];
    assert_eq!(walk["walking"], true);
    assert_eq!(walk["distance"], 200);
    assert!(walk["line"].is_null());
    assert!(walk["departureDelay"].is_null());

    let ride = &body[0]["trips"][1];
    assert_eq!(ride["line"], "RE1");
    assert_eq!(ride["from"], "Berlin Hbf");
    assert_eq!(ride["to"], "Potsdam Hbf");
    assert_eq!(ride["direction"], "Magdeburg Hbf");
    assert_eq!(ride["departureDelay"], 2);
    assert_eq!(ride["departurePlatform"], "14");
    assert!(ride["arrivalDelay"].is_null());
    assert_eq!(
        ride["departure"],
        DateTime::parse_from_rfc3339("2026-02-11T08:03:00+01:00")
            .unwrap()
            .timestamp()
    );
}

#[tokio::test]
async fn test_details_empty() {
    let h = harness(vec![]);

    let response = h
        .server
        .get("/journey/details")
        .authorization_bearer(TOKEN)
        .await;
    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_destination_pin_overrides_target() {
    let h = harness(vec![journey(vec![ride()])]);
    let pin = json!({"latitude": 50.1072, "longitude": 8.6637});

    let response = h
        .server
        .post("/journey/destination")
        .authorization_bearer(TOKEN)
        .json(&pin)
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({}));

    h.server
        .get("/journey/info")
        .authorization_bearer(TOKEN)
        .await
        .assert_status_ok();
    assert_eq!(
        h.transit.last_target(),
        Some(GeoLocation::new(50.1072, 8.6637))
    );
}

#[tokio::test]
async fn test_destination_malformed_body() {
    let h = harness(vec![]);

    let response = h
        .server
        .post("/journey/destination")
        .authorization_bearer(TOKEN)
        .json(&json!({"lat": 1.0}))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_gmaps_bad_prefix_skips_resolver() {
    let h = harness(vec![]);

    let response = h
        .server
        .post("/journey/destination/gmaps")
        .authorization_bearer(TOKEN)
        .text("https://example.com/maps/xyz")
        .await;
    response.assert_status_bad_request();
    response.assert_json(&json!({"detail": "Invalid gmaps link"}));
    assert_eq!(h.resolver.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_gmaps_link_resolves_and_pins() {
    let h = harness(vec![journey(vec![ride()])]);

    let response = h
        .server
        .post("/journey/destination/gmaps")
        .authorization_bearer(TOKEN)
        .text("https://maps.app.goo.gl/AbCdEf123")
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({"lat": 48.1402, "lng": 11.5583}));
    assert_eq!(h.resolver.calls.load(Ordering::SeqCst), 1);

    h.server
        .get("/journey/info")
        .authorization_bearer(TOKEN)
        .await
        .assert_status_ok();
    assert_eq!(
        h.transit.last_target(),
        Some(GeoLocation::new(48.1402, 11.5583))
    );
}

#[tokio::test]
async fn test_gmaps_requires_token() {
    let h = harness(vec![]);

    let response = h
        .server
        .post("/journey/destination/gmaps")
        .text("https://maps.app.goo.gl/AbCdEf123")
        .await;
    response.assert_status_unauthorized();
    assert_eq!(h.resolver.calls.load(Ordering::SeqCst), 0);
}
