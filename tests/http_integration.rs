// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport using wiremock.

use ledsync_lib::protocol::{Gateway, HttpClient};
use ledsync_lib::types::{Brightness, RgbColor};
use ledsync_lib::{Error, ParseError, TransportError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn status_body() -> serde_json::Value {
    serde_json::json!({
        "isPoweredOn": true,
        "brightnessLevel": 7,
        "currentMode": 1,
        "customRed": 255,
        "customGreen": 128,
        "customBlue": 0,
        "customWhite": 64,
        "useCustomColor": false,
        "deviceName": "Living Room Strip",
        "wifiSSID": "HomeNet",
        "macAddress": "AA:BB:CC:DD:EE:FF",
        "signalStrength": -52,
        "uptime": 3725
    })
}

#[tokio::test]
async fn get_status_parses_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body()))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri()).unwrap();
    let status = client.get_status().await.unwrap();

    assert!(status.is_powered_on);
    assert_eq!(status.brightness_level, 7);
    assert_eq!(status.current_mode, 1);
    assert_eq!(status.color(), RgbColor::new(255, 128, 0));
    assert_eq!(status.custom_white, 64);
    assert_eq!(status.device_name, "Living Room Strip");
    assert_eq!(status.wifi_ssid, "HomeNet");
    assert_eq!(status.signal_strength, -52);
    assert_eq!(status.uptime, 3725);
}

#[tokio::test]
async fn get_status_without_white_channel_defaults_to_zero() {
    let mock_server = MockServer::start().await;

    let mut body = status_body();
    body.as_object_mut().unwrap().remove("customWhite");

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri()).unwrap();
    let status = client.get_status().await.unwrap();

    assert_eq!(status.custom_white, 0);
}

#[tokio::test]
async fn set_brightness_sends_level_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brightness"))
        .and(query_param("level", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Brightness set"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri()).unwrap();
    client
        .set_brightness(Brightness::new(7).unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn set_mode_sends_mode_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mode"))
        .and(query_param("mode", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Mode set"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri()).unwrap();
    client.set_mode(3).await.unwrap();
}

#[tokio::test]
async fn set_color_sends_rgb_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/color"))
        .and(query_param("r", "255"))
        .and(query_param("g", "128"))
        .and(query_param("b", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Color set"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri()).unwrap();
    client
        .set_color(RgbColor::new(255, 128, 0), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn set_color_includes_white_when_given() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/color"))
        .and(query_param("r", "10"))
        .and(query_param("g", "20"))
        .and(query_param("b", "30"))
        .and(query_param("w", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Color set"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri()).unwrap();
    client
        .set_color(RgbColor::new(10, 20, 30), Some(200))
        .await
        .unwrap();
}

#[tokio::test]
async fn toggle_hits_toggle_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/toggle"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Power toggled"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri()).unwrap();
    client.toggle_power().await.unwrap();
}

#[tokio::test]
async fn server_error_surfaces_as_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri()).unwrap();
    let result = client.get_status().await;

    assert!(matches!(
        result,
        Err(Error::Transport(TransportError::ConnectionFailed(_)))
    ));
}

#[tokio::test]
async fn malformed_status_surfaces_as_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(mock_server.uri()).unwrap();
    let result = client.get_status().await;

    assert!(matches!(result, Err(Error::Parse(ParseError::Json(_)))));
}

#[tokio::test]
async fn connection_refused_surfaces_as_transport_error() {
    // Use a port that's definitely not listening
    let client = HttpClient::new("127.0.0.1:59999").unwrap();
    let result = client.toggle_power().await;

    assert!(matches!(
        result,
        Err(Error::Transport(TransportError::Http(_)))
    ));
}
