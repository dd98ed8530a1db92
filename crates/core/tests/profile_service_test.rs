use asabank_core::services::profile_service::ProfileService;
use asabank_primitives::error::{ApiError, AuthError};
use asabank_primitives::models::profile_dto::UpdateProfileRequest;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, headers, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::fixtures;

#[tokio::test]
async fn get_profile_returns_the_stored_row() {
    let mock_server = MockServer::start().await;
    let user_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("id", format!("eq.{}", user_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": user_id,
            "full_name": "Ada Obi",
            "username": "ada",
            "bio": "Saving up.",
            "contact_number": "+234 801 234 5678",
            "balance": 12_000,
            "withdrawal_count": 1,
            "fee_acknowledged": false,
            "version": 3,
            "updated_at": Utc::now(),
        }])))
        .mount(&mock_server)
        .await;

    let state = common::create_test_app_state(&mock_server.uri());
    let session = common::test_session(user_id);

    let profile = ProfileService::get_profile(&state, &session, user_id)
        .await
        .expect("profile read should succeed");

    assert_eq!(profile.id, user_id);
    assert_eq!(profile.full_name.as_deref(), Some("Ada Obi"));
    assert_eq!(profile.username.as_deref(), Some("ada"));
    assert_eq!(profile.balance, 12_000);
    assert_eq!(profile.withdrawal_count, 1);
    assert!(!profile.fee_acknowledged);
}

#[tokio::test]
async fn get_profile_of_a_new_user_reads_as_empty_defaults() {
    let mock_server = MockServer::start().await;
    let user_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let state = common::create_test_app_state(&mock_server.uri());
    let session = common::test_session(user_id);

    let profile = ProfileService::get_profile(&state, &session, user_id)
        .await
        .expect("profile read should succeed");

    assert_eq!(profile.id, user_id);
    assert_eq!(profile.full_name, None);
    assert_eq!(profile.balance, 0);
    assert_eq!(profile.withdrawal_count, 0);
    assert!(!profile.fee_acknowledged);

    // The read path never creates the row
    for request in mock_server.received_requests().await.unwrap() {
        assert_eq!(request.method.as_str(), "GET");
    }
}

#[tokio::test]
async fn update_profile_merges_only_the_fields_given() {
    let mock_server = MockServer::start().await;
    let user_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("on_conflict", "id"))
        .and(headers(
            "Prefer",
            vec!["resolution=merge-duplicates", "return=representation"],
        ))
        .and(body_partial_json(json!({
            "id": user_id,
            "full_name": "Ada Obi",
            "contact_number": "+234 801 234 5678",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": user_id,
            "full_name": "Ada Obi",
            "username": null,
            "bio": null,
            "contact_number": "+234 801 234 5678",
            "balance": 0,
            "withdrawal_count": 0,
            "fee_acknowledged": false,
            "version": 1,
            "updated_at": Utc::now(),
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = common::create_test_app_state(&mock_server.uri());
    let session = common::test_session(user_id);

    let profile = ProfileService::update_profile(
        &state,
        &session,
        UpdateProfileRequest {
            user_id,
            full_name: Some("Ada Obi".to_string()),
            username: None,
            bio: None,
            contact_number: Some("+234 801 234 5678".to_string()),
        },
    )
    .await
    .expect("profile update should succeed");

    assert_eq!(profile.full_name.as_deref(), Some("Ada Obi"));

    // Omitted fields must not be in the payload at all
    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(!body.as_object().unwrap().contains_key("username"));
    assert!(!body.as_object().unwrap().contains_key("bio"));
    assert!(!body.as_object().unwrap().contains_key("balance"));
}

#[tokio::test]
async fn update_profile_rejects_a_bad_contact_number() {
    let mock_server = MockServer::start().await;
    let user_id = Uuid::new_v4();

    let state = common::create_test_app_state(&mock_server.uri());
    let session = common::test_session(user_id);

    for contact_number in ["123", "080-CALL-ME", "0".repeat(21).as_str()] {
        let result = ProfileService::update_profile(
            &state,
            &session,
            UpdateProfileRequest {
                user_id,
                full_name: None,
                username: None,
                bio: None,
                contact_number: Some(contact_number.to_string()),
            },
        )
        .await;

        assert!(
            matches!(result, Err(ApiError::Validation(_))),
            "contact number {:?} should be rejected",
            contact_number
        );
    }

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_profile_for_another_user_is_refused() {
    let mock_server = MockServer::start().await;
    let session_user = Uuid::new_v4();
    let other_user = Uuid::new_v4();

    let state = common::create_test_app_state(&mock_server.uri());
    let session = common::test_session(session_user);

    let result = ProfileService::update_profile(
        &state,
        &session,
        UpdateProfileRequest {
            user_id: other_user,
            full_name: Some("Someone Else".to_string()),
            username: None,
            bio: None,
            contact_number: None,
        },
    )
    .await;

    assert!(matches!(
        result,
        Err(ApiError::Auth(AuthError::UserMismatch))
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn acknowledge_fee_creates_the_profile_row_first() {
    let mock_server = MockServer::start().await;
    let user_id = Uuid::new_v4();

    // 1. No row yet, then the created row shows up
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            fixtures::profile_row(user_id, 0, 0, false, 1)
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("on_conflict", "id"))
        .and(body_partial_json(json!({
            "id": user_id,
            "balance": 0,
            "withdrawal_count": 0,
            "fee_acknowledged": false,
            "version": 1,
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    // 2. The flag write itself
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("id", format!("eq.{}", user_id)))
        .and(body_partial_json(json!({ "fee_acknowledged": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            fixtures::profile_row(user_id, 0, 0, true, 1)
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = common::create_test_app_state(&mock_server.uri());
    let session = common::test_session(user_id);

    let profile = ProfileService::acknowledge_fee(&state, &session)
        .await
        .expect("fee acknowledgment should succeed");

    assert!(profile.fee_acknowledged);
}

#[tokio::test]
async fn acknowledge_fee_on_an_existing_profile_writes_only_the_flag() {
    let mock_server = MockServer::start().await;
    let user_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            fixtures::profile_row(user_id, 30_000, 2, false, 5)
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/profiles"))
        .and(body_partial_json(json!({ "fee_acknowledged": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            fixtures::profile_row(user_id, 30_000, 2, true, 5)
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = common::create_test_app_state(&mock_server.uri());
    let session = common::test_session(user_id);

    let profile = ProfileService::acknowledge_fee(&state, &session)
        .await
        .expect("fee acknowledgment should succeed");

    assert!(profile.fee_acknowledged);
    assert_eq!(profile.balance, 30_000);
}
