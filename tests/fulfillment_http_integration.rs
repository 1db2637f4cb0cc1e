//! Integration tests for the classifier fulfillment webhook.
//!
//! These tests drive the full router with an in-memory lookup store:
//! 1. Liveness text on `GET /`
//! 2. Menu transitions with qualified output contexts
//! 3. The three-turn voter search, carrying the draft between calls
//! 4. Lookup failures folded into 200 replies

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use vote_assist::adapters::http::{app_router, AppState};
use vote_assist::adapters::memory::InMemoryLookupStore;
use vote_assist::domain::conversation::replies;
use vote_assist::domain::foundation::{DomainError, ErrorCode, SessionPath};
use vote_assist::domain::voter::{InstructionId, VoterIdentity, VoterRecord};
use vote_assist::ports::{ClassifierError, IntentClassifier, LookupStore, QueryResult};

const SESSION: &str = "projects/rough-igui/agent/sessions/whatsapp:+919876543210";

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Classifier that is never reached by the fulfillment endpoint.
struct UnusedClassifier;

#[async_trait]
impl IntentClassifier for UnusedClassifier {
    async fn detect_intent(
        &self,
        _session: &SessionPath,
        _text: &str,
    ) -> Result<QueryResult, ClassifierError> {
        Err(ClassifierError::network("not wired in this test"))
    }

    fn project_id(&self) -> &str {
        "rough-igui"
    }
}

/// Store whose every query fails.
struct BrokenLookupStore;

#[async_trait]
impl LookupStore for BrokenLookupStore {
    async fn find_instruction(&self, _id: InstructionId) -> Result<Option<String>, DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "pool timed out"))
    }

    async fn find_voter_by_identity(
        &self,
        _identity: &VoterIdentity,
    ) -> Result<Option<VoterRecord>, DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "pool timed out"))
    }

    async fn find_voter_by_name_and_phone(
        &self,
        _full_name: &str,
        _phone_number: &str,
    ) -> Result<Option<VoterRecord>, DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "pool timed out"))
    }

    async fn find_polling_station(&self, _voter_id: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "pool timed out"))
    }

    async fn find_blo_name(&self, _address: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "pool timed out"))
    }
}

fn asha() -> VoterRecord {
    VoterRecord {
        voter_id: "KLA1234567".to_string(),
        full_name: "Asha".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
        relative_name: Some("Kumar".to_string()),
        phone_number: Some("+919876543210".to_string()),
        part_name: Some("Govt LP School Painavu".to_string()),
        part_number: Some("42".to_string()),
        polling_station_address: Some("Govt LP School, Painavu".to_string()),
        ..Default::default()
    }
}

fn app_with_store(store: Arc<dyn LookupStore>) -> Router {
    app_router(
        AppState::new(store, Arc::new(UnusedClassifier), Duration::from_secs(2)),
        Duration::from_secs(5),
    )
}

fn app() -> Router {
    app_with_store(Arc::new(
        InMemoryLookupStore::new()
            .with_voter(asha())
            .with_instruction(InstructionId::VOTER_ID_STATUS, "Track at voters.eci.gov.in.")
            .with_blo("Govt LP School, Painavu", "Mini Joseph"),
    ))
}

async fn post_fulfillment(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn callback(intent: &str, text: &str, parameters: Value, contexts: Value) -> Value {
    json!({
        "session": SESSION,
        "queryResult": {
            "queryText": text,
            "intent": { "displayName": intent },
            "parameters": parameters,
            "outputContexts": contexts
        }
    })
}

fn context<'a>(body: &'a Value, short_name: &str) -> Option<&'a Value> {
    let name = format!("{}/contexts/{}", SESSION, short_name);
    body["outputContexts"]
        .as_array()?
        .iter()
        .find(|ctx| ctx["name"] == name.as_str())
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn root_get_reports_liveness() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"VoteAssist webhook server is running.");
}

#[tokio::test]
async fn welcome_sets_main_menu() {
    let (status, body) = post_fulfillment(
        app(),
        callback("Default Welcome Intent", "hi", json!({}), json!([])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fulfillmentText"], replies::WELCOME_MENU);
    assert_eq!(context(&body, "main-menu").unwrap()["lifespanCount"], 10);
}

#[tokio::test]
async fn menu_selection_one_switches_to_general_menu() {
    let (_, body) = post_fulfillment(
        app(),
        callback(
            "MenuSelectionIntent",
            " 1 ",
            json!({}),
            json!([{ "name": format!("{}/contexts/main-menu", SESSION), "lifespanCount": 9 }]),
        ),
    )
    .await;

    assert!(body["fulfillmentText"]
        .as_str()
        .unwrap()
        .contains("General Instructions Menu"));
    assert_eq!(context(&body, "general-menu").unwrap()["lifespanCount"], 10);
    assert_eq!(context(&body, "main-menu").unwrap()["lifespanCount"], 0);
}

#[tokio::test]
async fn three_turn_search_finds_voter() {
    // Turn 1: name
    let (_, first) = post_fulfillment(
        app(),
        callback("ProvideFullName", "Asha", json!({ "full_name": "Asha" }), json!([])),
    )
    .await;
    assert_eq!(first["fulfillmentText"], replies::PROMPT_DOB);
    let draft = context(&first, "temp_voterdata").unwrap().clone();
    assert_eq!(draft["parameters"]["full_name"], "Asha");

    // Turn 2: date of birth as a classifier timestamp
    let (_, second) = post_fulfillment(
        app(),
        callback(
            "ProvideDOB",
            "1 Jan 1990",
            json!({ "date": "1990-01-01T12:00:00+05:30" }),
            json!([draft]),
        ),
    )
    .await;
    assert_eq!(second["fulfillmentText"], replies::PROMPT_RELATIVE);
    let draft = context(&second, "temp_voterdata").unwrap().clone();
    assert_eq!(draft["parameters"]["date_of_birth"], "1990-01-01");

    // Turn 3: relative name in protobuf Struct form
    let (_, third) = post_fulfillment(
        app(),
        callback(
            "ProvideRelativeName",
            "Kumar",
            json!({ "fields": { "relative_name": { "stringValue": "Kumar" } } }),
            json!([draft]),
        ),
    )
    .await;

    let text = third["fulfillmentText"].as_str().unwrap();
    assert!(text.contains("KLA1234567"));
    assert!(text.contains("Govt LP School Painavu"));
    assert_eq!(context(&third, "temp_voterdata").unwrap()["lifespanCount"], 0);
    assert_eq!(
        context(&third, "voterservices-submenu").unwrap()["lifespanCount"],
        5
    );
}

#[tokio::test]
async fn search_without_match_has_no_contexts() {
    let draft = json!({
        "name": format!("{}/contexts/temp_voterdata", SESSION),
        "lifespanCount": 5,
        "parameters": { "full_name": "Asha", "date_of_birth": "1990-01-01" }
    });
    let (_, body) = post_fulfillment(
        app(),
        callback(
            "ProvideRelativeName",
            "Ravi",
            json!({ "relative_name": "Ravi" }),
            json!([draft]),
        ),
    )
    .await;

    assert_eq!(body["fulfillmentText"], replies::VOTER_NOT_FOUND);
    assert!(body.get("outputContexts").is_none());
}

#[tokio::test]
async fn voter_details_uses_phone_number() {
    let mut request = callback("voterdetails", "Asha", json!({ "full_name": "Asha" }), json!([]));
    request["phoneNumber"] = json!("+919876543210");

    let (_, body) = post_fulfillment(app(), request).await;
    assert!(body["fulfillmentText"]
        .as_str()
        .unwrap()
        .contains("Voter ID: KLA1234567"));
}

#[tokio::test]
async fn blo_lookup_chains_station_and_officer() {
    let (_, body) = post_fulfillment(
        app(),
        callback(
            "GetBLOByPollingStation",
            "KLA1234567",
            json!({ "voter_id": "KLA1234567" }),
            json!([]),
        ),
    )
    .await;

    let text = body["fulfillmentText"].as_str().unwrap();
    assert!(text.contains("Govt LP School, Painavu"));
    assert!(text.contains("Mini Joseph"));
}

#[tokio::test]
async fn polling_location_links_to_map() {
    let (_, body) = post_fulfillment(
        app(),
        callback(
            "pollingLocation",
            "KLA1234567",
            json!({ "voter_id": "KLA1234567" }),
            json!([]),
        ),
    )
    .await;

    assert!(body["fulfillmentText"]
        .as_str()
        .unwrap()
        .contains("query=Govt%20LP%20School%2C%20Painavu"));
}

#[tokio::test]
async fn lookup_failure_still_answers_ok() {
    let (status, body) = post_fulfillment(
        app_with_store(Arc::new(BrokenLookupStore)),
        callback("VoterIdStatus", "status", json!({}), json!([])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["fulfillmentText"].as_str().unwrap().contains("Sorry"));
}

#[tokio::test]
async fn unknown_intent_gets_fallback() {
    let (_, body) = post_fulfillment(
        app(),
        callback("SmallTalk", "how are you", json!({}), json!([])),
    )
    .await;

    assert_eq!(body["fulfillmentText"], replies::UNKNOWN_INTENT);
    assert!(body.get("outputContexts").is_none());
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let (status, _) = post_fulfillment(app(), json!({ "session": SESSION })).await;
    assert!(status.is_client_error());
}
