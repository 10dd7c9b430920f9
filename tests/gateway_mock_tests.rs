//! Gateway tests against a WireMock server.
//!
//! These exercise the real reqwest transport: form encoding, the authorization
//! header, url joining and response classification.

use citcall::{
    Call, CallOptions, CitcallClient, CitcallError, Config, ConfigError, GatewayNumber,
    MessageText, Msisdn, OtpToken, SendOtp, SendOtpOptions, SendSms, TrxId, VerificationCode,
    VerifyOtp,
};
use wiremock::matchers::{any, body_string, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(mock_server: &MockServer, config: Config) -> CitcallClient {
    CitcallClient::new(config.with_api_url(mock_server.uri())).unwrap()
}

fn credentials() -> Config {
    Config::new()
        .with_user_id("U1")
        .with_api_key("K1")
        .with_sender_id("S1")
}

fn sms() -> SendSms {
    SendSms::new(Msisdn::new("+6281234567890").unwrap(), MessageText::new("hi"))
}

#[tokio::test]
async fn send_posts_form_with_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/sms"))
        .and(header("Authorization", "VTE6SzE="))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("senderid=S1&msisdn=081234567890&text=hi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rc": 0,
            "info": "Success",
            "msisdn": "081234567890"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, credentials());
    let response = client.send(sms()).await.unwrap();

    assert_eq!(response.rc(), Some(0));
    assert_eq!(response.info(), Some("Success"));
    assert_eq!(client.last_response().map(|r| r.status), Some(200));
}

#[tokio::test]
async fn async_call_hits_asynccall_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/asynccall"))
        .and(body_string("msisdn=081234567890&gateway=2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rc": 0,
            "trxid": "call-1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, credentials());
    let request = Call::new(
        Msisdn::new("6281234567890").unwrap(),
        CallOptions {
            gateway: GatewayNumber::new(2).unwrap(),
            asynchronous: true,
        },
    );

    let response = client.call(request).await.unwrap();
    assert_eq!(response.trxid(), Some("call-1"));
}

#[tokio::test]
async fn otp_round_trip_forwards_retry_hint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/smsotp"))
        .and(body_string_contains("token=4321"))
        .and(body_string_contains("valid_time=300"))
        .and(body_string_contains("limit_try=5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rc": 0,
            "trxid": "otp-7"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/verify"))
        .and(body_string("trxid=otp-7&msisdn=081234567890&token=4321&limit_try=5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rc": 0,
            "info": "verified"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(
        &mock_server,
        credentials().with_app_name("Acme").with_retry(5),
    );

    let issued = client
        .send_otp(SendOtp::new(
            Msisdn::new("081234567890").unwrap(),
            OtpToken::new("4321").unwrap(),
            SendOtpOptions { expires: 300 },
        ))
        .await
        .unwrap();
    let trx_id = TrxId::new(issued.trxid().unwrap());

    let verified = client
        .verify_otp(VerifyOtp::new(
            trx_id,
            Msisdn::new("+6281234567890").unwrap(),
            VerificationCode::new("4321"),
        ))
        .await
        .unwrap();
    assert_eq!(verified.info(), Some("verified"));
}

#[tokio::test]
async fn server_error_maps_to_gateway_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/sms"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, credentials());
    let err = client.send(sms()).await.unwrap_err();

    match err {
        CitcallError::Gateway { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "internal failure");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_body_maps_to_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, credentials());
    let err = client.send(sms()).await.unwrap_err();
    assert!(matches!(err, CitcallError::Unavailable));
}

#[tokio::test]
async fn missing_api_key_never_reaches_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Config::new().with_user_id("U1"));
    let err = client.send(sms()).await.unwrap_err();
    assert!(matches!(
        err,
        CitcallError::Config(ConfigError::Missing { field: "API key" })
    ));
}

#[tokio::test]
async fn unreachable_server_maps_to_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client =
        CitcallClient::new(credentials().with_api_url(format!("http://127.0.0.1:{port}")))
            .unwrap();
    let err = client.send(sms()).await.unwrap_err();
    assert!(matches!(err, CitcallError::Transport(_)));
    assert!(client.last_response().is_none());
}
