//! Integration tests for the WeBirr client against a mock gateway.
//!
//! Each test pins down the exact request shape (method, path, query
//! parameters, body) an operation produces and the mapping of the reply
//! into `ApiResponse`.

use serde_json::json;
use webirr_client::{ApiResponse, Bill, Environment, GatewayConfig, GatewayError, WeBirrClient};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_bill() -> Bill {
    Bill::new(
        "270.90",
        "cc01",
        "Elias Haileselassie",
        "drt/2021/125",
        "m01",
    )
    .with_description("hotel booking")
    .with_raw_time("2021-07-22 22:14")
}

async fn client_for(server: &MockServer) -> WeBirrClient {
    let config =
        GatewayConfig::new("sk_valid", Environment::Test).with_base_url(server.uri());
    WeBirrClient::new(config)
}

#[tokio::test]
async fn create_bill_posts_json_and_returns_payment_code() {
    let server = MockServer::start().await;
    let bill = sample_bill();

    Mock::given(method("POST"))
        .and(path("/einvoice/api/postbill"))
        .and(query_param("api_key", "sk_valid"))
        .and(header("content-type", "application/json"))
        .and(body_json(&bill))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": null,
            "res": "14A09"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).await.create_bill(&bill).await.unwrap();

    assert_eq!(response, ApiResponse::Success("14A09".to_string()));
}

#[tokio::test]
async fn create_bill_passes_gateway_error_through() {
    let server = MockServer::start().await;
    let bill = sample_bill();

    // Invalid API keys come back as HTTP 200 with an error member
    Mock::given(method("POST"))
        .and(path("/einvoice/api/postbill"))
        .and(query_param("api_key", "sk_valid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "Invalid API Key",
            "res": null
        })))
        .mount(&server)
        .await;

    let response = client_for(&server).await.create_bill(&bill).await.unwrap();

    assert_eq!(response.error(), Some("Invalid API Key"));
    assert!(response.payload().is_none());
}

#[tokio::test]
async fn update_bill_puts_to_postbill_path() {
    let server = MockServer::start().await;
    let bill = sample_bill();

    Mock::given(method("PUT"))
        .and(path("/einvoice/api/postbill"))
        .and(query_param("api_key", "sk_valid"))
        .and(body_json(&bill))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": null,
            "res": "OK"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).await.update_bill(&bill).await.unwrap();

    assert_eq!(response, ApiResponse::Success("OK".to_string()));
}

#[tokio::test]
async fn delete_bill_puts_payment_code_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/einvoice/api/deletebill"))
        .and(query_param("api_key", "sk_valid"))
        .and(query_param("wbc_code", "14A09"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": null,
            "res": "OK"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).await.delete_bill("14A09").await.unwrap();

    assert_eq!(response, ApiResponse::Success("OK".to_string()));
}

#[tokio::test]
async fn delete_unknown_bill_yields_gateway_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/einvoice/api/deletebill"))
        .and(query_param("wbc_code", "xxxx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "Bill not found",
            "res": null
        })))
        .mount(&server)
        .await;

    let response = client_for(&server).await.delete_bill("xxxx").await.unwrap();

    assert!(!response.is_success());
    assert!(!response.error().unwrap().is_empty());
}

#[tokio::test]
async fn get_payment_status_returns_payment_with_opaque_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/einvoice/api/getPaymentStatus"))
        .and(query_param("api_key", "sk_valid"))
        .and(query_param("wbc_code", "14A09"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": null,
            "res": {
                "isPaid": true,
                "data": {
                    "bankID": "cbe_birr",
                    "paymentReference": "TX100045",
                    "amount": "270.90"
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .await
        .get_payment_status("14A09")
        .await
        .unwrap();

    let payment = response.payload().expect("expected a payment payload");
    assert!(payment.is_paid);
    // Detail is passed through unmodified
    let detail = payment.data.as_ref().unwrap();
    assert_eq!(detail["bankID"], "cbe_birr");
    assert_eq!(detail["paymentReference"], "TX100045");
}

#[tokio::test]
async fn non_200_status_becomes_http_error_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/einvoice/api/getPaymentStatus"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .await
        .get_payment_status("14A09")
        .await
        .unwrap();

    assert_eq!(response.error(), Some("http error 404 Not Found"));
}

#[tokio::test]
async fn non_200_status_ignores_response_body() {
    let server = MockServer::start().await;
    let bill = sample_bill();

    Mock::given(method("POST"))
        .and(path("/einvoice/api/postbill"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": null, "res": "14A09" })),
        )
        .mount(&server)
        .await;

    let response = client_for(&server).await.create_bill(&bill).await.unwrap();

    assert_eq!(response.error(), Some("http error 500 Internal Server Error"));
}

#[tokio::test]
async fn unparseable_200_body_is_a_serialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/einvoice/api/getPaymentStatus"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway down</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .get_payment_status("14A09")
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Serialization(_)));
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/einvoice/api/getPaymentStatus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": null,
            "res": { "isPaid": false }
        })))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (a, b, c) = tokio::join!(
        client.get_payment_status("A"),
        client.get_payment_status("B"),
        client.get_payment_status("C"),
    );

    for response in [a.unwrap(), b.unwrap(), c.unwrap()] {
        assert!(!response.payload().unwrap().is_paid);
    }
}
