use httpmock::prelude::*;
use randomuser::domain::ports::UserApi;
use randomuser::{
    Gender, MemoryUserStore, Nationality, RandomUserClient, RandomUserError, UserRepository,
};
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

fn client_for(server: &MockServer) -> RandomUserClient {
    RandomUserClient::new(&server.base_url(), Duration::from_secs(5)).unwrap()
}

fn sample_body(uuid: &str) -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "gender": "female",
            "name": {"title": "Ms", "first": "Isla", "last": "Walker"},
            "location": {
                "street": {"number": 4123, "name": "Queen Street"},
                "city": "Leeds",
                "state": "West Yorkshire",
                "country": "United Kingdom",
                "postcode": "M7 1JL",
                "coordinates": {"latitude": "52.1", "longitude": "-1.2"},
                "timezone": {"offset": "0:00", "description": "London"}
            },
            "email": "isla.walker@example.com",
            "login": {"uuid": uuid, "username": "orangebird"},
            "dob": {"date": "1985-01-02T03:04:05.000Z", "age": 39},
            "phone": "016977 1234",
            "cell": "07700 900123",
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/1.jpg",
                "medium": "https://randomuser.me/api/portraits/med/women/1.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/women/1.jpg"
            },
            "nat": "GB"
        }],
        "info": {"seed": "abc", "results": 1, "page": 1, "version": "1.4"}
    })
}

#[tokio::test]
async fn test_request_carries_gender_and_nationality() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/")
            .query_param("gender", "female")
            .query_param("nat", "GB");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(sample_body("gb-1"));
    });

    let client = client_for(&server);
    let response = assert_ok!(client.get_random_user(Gender::Female, Nationality::Gb).await);

    api_mock.assert();
    let user = response.into_first_user().unwrap();
    assert_eq!(user.full_name(), "Isla Walker");
    assert_eq!(user.uuid(), Some("gb-1"));
    assert_eq!(
        user.location.and_then(|l| l.postcode).as_deref(),
        Some("M7 1JL")
    );
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(500);
    });

    let client = client_for(&server);
    let err = assert_err!(client.get_random_user(Gender::Male, Nationality::Us).await);

    api_mock.assert();
    match err {
        RandomUserError::ApiError { status, .. } => assert_eq!(status, 500),
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn test_error_body_with_ok_status_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(200)
            .json_body(serde_json::json!({"error": "Uh oh, something has gone wrong."}));
    });

    let client = client_for(&server);
    let err = assert_err!(client.get_random_user(Gender::Male, Nationality::Us).await);
    assert!(err.to_string().contains("something has gone wrong"));
}

#[tokio::test]
async fn test_malformed_json_is_a_serialization_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(200).body("{not json");
    });

    let client = client_for(&server);
    let err = assert_err!(client.get_random_user(Gender::Male, Nationality::Us).await);
    assert!(matches!(err, RandomUserError::SerializationError(_)));
}

/// 空結果：API 回傳空陣列時 repository 必須報錯且不寫入
#[tokio::test]
async fn test_repository_rejects_empty_result_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(200)
            .json_body(serde_json::json!({"results": [], "info": {"results": 0}}));
    });

    let store = MemoryUserStore::new();
    let repo = UserRepository::new(client_for(&server), store);

    let err = assert_err!(repo.fetch_and_save_user(Gender::Female, Nationality::Fr).await);
    assert!(matches!(err, RandomUserError::EmptyResult));
    assert!(assert_ok!(repo.users_from_db().await).is_empty());
}
