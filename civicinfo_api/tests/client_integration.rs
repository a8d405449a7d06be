use civicinfo_api::Client;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REPRESENTATIVES_BODY: &str = r#"{
    "offices": [
        {
            "name": "U.S. Senator",
            "divisionId": "ocd-division/country:us/state:fl"
        },
        {
            "name": "U.S. House of Representatives FL-27",
            "divisionId": "ocd-division/country:us/state:fl/cd:27"
        }
    ]
}"#;

#[tokio::test]
async fn district_for_zip_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/representatives"))
        .and(query_param("address", "33139"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REPRESENTATIVES_BODY))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    let division = client.district_for_zip("33139").await.unwrap();

    let division = division.expect("expected a house division");
    assert_eq!(division.state, "FL");
    assert_eq!(division.district, "FL-27");
}

#[tokio::test]
async fn district_for_zip_no_house_office() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/representatives"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"offices": []}"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    let division = client.district_for_zip("33139").await.unwrap();
    assert!(division.is_none());
}

#[tokio::test]
async fn district_for_zip_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/representatives"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    assert!(client.district_for_zip("33139").await.is_err());
}

#[tokio::test]
async fn district_for_zip_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/representatives"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key");
    assert!(client.district_for_zip("33139").await.is_err());
}
