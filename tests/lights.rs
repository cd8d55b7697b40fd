use huechat::api::client::{HueClient, StateChange};
use huechat::config::BridgeConfig;
use huechat::error::AppError;
use huechat::models::color::RgbColor;
use huechat::models::light::{Light, LightOutcome};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER: &str = "testuser";

fn client(server: &MockServer) -> HueClient {
    let config = BridgeConfig::new(Some(server.address().to_string()), USER);
    HueClient::new(config).unwrap()
}

fn success(field: &str, value: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!([{"success": {field: value}}]))
}

async fn mount_two_lights(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{}/lights", USER)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "2": {"name": "Desk", "type": "Extended color light", "state": {"on": false, "bri": 120}},
            "1": {"name": "Lamp", "state": {"on": true}}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn list_lights_normalizes_bridge_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/testuser/lights"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"1": {"name": "Lamp", "state": {"on": true}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let lights = client(&server).list_lights().await.unwrap();

    assert_eq!(
        lights,
        vec![Light {
            id: 1,
            name: "Lamp".into(),
            is_on: Some(true),
        }]
    );
}

#[tokio::test]
async fn list_lights_orders_by_numeric_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/testuser/lights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "10": {"name": "Porch", "state": {"on": false}},
            "2": {"name": "Desk", "state": {}},
            "1": {"name": "Lamp", "state": {"on": true}}
        })))
        .mount(&server)
        .await;

    let lights = client(&server).list_lights().await.unwrap();

    let ids: Vec<u32> = lights.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 10]);
    assert_eq!(lights[1].is_on, None);
}

#[tokio::test]
async fn non_numeric_light_id_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/testuser/lights"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"abc": {"name": "Lamp", "state": {"on": true}}})),
        )
        .mount(&server)
        .await;

    let err = client(&server).list_lights().await.unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)), "got {:?}", err);
}

#[tokio::test]
async fn bridge_failure_on_read_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/testuser/lights"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    match client(&server).list_lights().await {
        Err(AppError::Upstream { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn unauthorized_user_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/testuser/lights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"error": {"type": 1, "address": "/lights", "description": "unauthorized user"}}
        ])))
        .mount(&server)
        .await;

    let err = client(&server).list_lights().await.unwrap_err();
    assert!(err.to_string().contains("unauthorized user"));
}

#[tokio::test]
async fn power_off_all_issues_one_request_per_light() {
    let server = MockServer::start().await;
    mount_two_lights(&server).await;
    for id in [1, 2] {
        Mock::given(method("PUT"))
            .and(path(format!("/api/testuser/lights/{}/state", id)))
            .and(body_json(json!({"on": false})))
            .respond_with(success(&format!("/lights/{}/state/on", id), json!(false)))
            .expect(1)
            .mount(&server)
            .await;
    }

    assert!(client(&server).set_power(None, false).await.unwrap());
}

#[tokio::test]
async fn set_color_sends_hue_saturation_and_full_brightness() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/testuser/lights/3/state"))
        .and(body_json(json!({"on": true, "hue": 21845, "sat": 254, "bri": 255})))
        .respond_with(success("/lights/3/state/hue", json!(21845)))
        .expect(1)
        .mount(&server)
        .await;

    let ok = client(&server)
        .set_color(Some(3), RgbColor::new(0, 255, 0))
        .await
        .unwrap();
    assert!(ok);
}

#[tokio::test]
async fn non_success_status_on_write_returns_false() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/testuser/lights/9/state"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(!client(&server).set_power(Some(9), true).await.unwrap());
}

#[tokio::test]
async fn bridge_error_entry_on_write_returns_false() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/testuser/lights/1/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"error": {"type": 201, "description": "parameter, on, is not modifiable. Device is set to off."}}
        ])))
        .mount(&server)
        .await;

    assert!(!client(&server).set_power(Some(1), true).await.unwrap());
}

#[tokio::test]
async fn apply_to_all_attempts_every_light_and_reports_partial_failure() {
    let server = MockServer::start().await;
    mount_two_lights(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/testuser/lights/1/state"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/testuser/lights/2/state"))
        .respond_with(success("/lights/2/state/on", json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let outcomes = client.change_all(StateChange::Power(true)).await.unwrap();

    assert_eq!(
        outcomes,
        vec![
            LightOutcome { id: 1, success: false },
            LightOutcome { id: 2, success: true },
        ]
    );
}

#[tokio::test]
async fn aggregate_result_is_false_when_any_light_fails() {
    let server = MockServer::start().await;
    mount_two_lights(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/testuser/lights/1/state"))
        .respond_with(success("/lights/1/state/on", json!(true)))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/testuser/lights/2/state"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(!client(&server).set_power(None, true).await.unwrap());
}

#[tokio::test]
async fn transport_failure_on_write_propagates() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);

    let client = HueClient::new(BridgeConfig::new(Some(address), USER)).unwrap();
    let err = client.set_power(Some(1), true).await.unwrap_err();
    assert!(matches!(err, AppError::Http(_)), "got {:?}", err);
}
