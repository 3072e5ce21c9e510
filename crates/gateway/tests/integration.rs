/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */


use std::io::Write;

use gateway::{GatewayClient, GatewayError};
use mock_server as ms;
use mockito::Matcher;

// --> authentication <--

#[tokio::test]
async fn login_stores_token_and_username() {
    let mut server = ms::create_mock_http_server().await;
    let token = ms::test_token(r#"{"username":"admin","iat":1724800000}"#);
    ms::add_json_mock(
        &mut server,
        "POST",
        "/api/login",
        200,
        &format!(r#"{{"token":"{token}"}}"#),
    );

    let client = GatewayClient::new(&server.url()).unwrap();
    client.login("admin", "hunter2").await.unwrap();

    assert!(client.session().is_authenticated());
    assert_eq!(client.session().token().as_deref(), Some(token.as_str()));
    assert_eq!(client.session().username().as_deref(), Some("admin"));
}

#[tokio::test]
async fn login_rejection_is_invalid_credentials() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_json_mock(
        &mut server,
        "POST",
        "/api/login",
        401,
        r#"{"error":"Invalid credentials"}"#,
    );

    let client = GatewayClient::new(&server.url()).unwrap();
    let err = client.login("admin", "wrong").await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidCredentials));
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn authenticated_call_without_session_is_refused() {
    let server = ms::create_mock_http_server().await;
    let client = GatewayClient::new(&server.url()).unwrap();
    let err = client.profile().await.unwrap_err();
    assert!(matches!(err, GatewayError::Unauthorized));
}

#[tokio::test]
async fn any_forbidden_response_clears_the_session() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_json_mock(
        &mut server,
        "GET",
        "/api/profile",
        403,
        r#"{"error":"Forbidden"}"#,
    );

    let client = ms::signed_in_client(&server);
    assert!(client.session().is_authenticated());

    let err = client.profile().await.unwrap_err();
    assert!(matches!(err, GatewayError::SessionExpired));
    assert!(!client.session().is_authenticated());

    // The next authenticated call fails before reaching the wire.
    let err = client.profile().await.unwrap_err();
    assert!(matches!(err, GatewayError::Unauthorized));
}

#[tokio::test]
async fn profile_roundtrip_and_missing_profile() {
    let mut server = ms::create_mock_http_server().await;
    let ok = ms::add_json_mock(
        &mut server,
        "GET",
        "/api/profile",
        200,
        r#"{"id":1,"username":"admin"}"#,
    );

    let client = ms::signed_in_client(&server);
    let profile = client.profile().await.unwrap();
    assert_eq!(profile.id, 1);
    assert_eq!(profile.username, "admin");
    ok.assert();

    ms::add_json_mock(&mut server, "GET", "/api/profile", 404, "{}");
    let err = client.profile().await.unwrap_err();
    assert!(matches!(err, GatewayError::NotFound("profile")));
}

// --> broker configuration <--

#[tokio::test]
async fn broker_config_parses_full_response() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_json_mock(
        &mut server,
        "GET",
        "/api/mqtt",
        200,
        r#"{
            "host": "broker.fleet.local",
            "port": 1883,
            "user": "console",
            "pass": "secret",
            "statusTopic": "fleet/state",
            "commandTopic": "fleet/cmd",
            "infoTopic": "fleet/info"
        }"#,
    );

    let client = ms::signed_in_client(&server);
    let config = client.broker_config().await.unwrap();
    assert_eq!(config.host, "broker.fleet.local");
    assert_eq!(config.port, 1883);
    let creds = config.credentials.unwrap();
    assert_eq!(creds.username, "console");
    assert_eq!(creds.password, "secret");
    assert_eq!(config.topics.status, "fleet/state");
    assert_eq!(config.topics.command, "fleet/cmd");
    assert_eq!(config.topics.info, "fleet/info");
}

#[tokio::test]
async fn broker_config_defaults_topics_and_accepts_string_port() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_json_mock(
        &mut server,
        "GET",
        "/api/mqtt",
        200,
        r#"{"host":"broker.fleet.local","port":"8883"}"#,
    );

    let client = ms::signed_in_client(&server);
    let config = client.broker_config().await.unwrap();
    assert_eq!(config.port, 8883);
    assert!(config.credentials.is_none());
    assert_eq!(config.topics.status, "device/status");
    assert_eq!(config.topics.command, "device/command");
    assert_eq!(config.topics.info, "device/info");
}

#[tokio::test]
async fn unconfigured_broker_maps_to_broker_config_missing() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_json_mock(
        &mut server,
        "GET",
        "/api/mqtt",
        500,
        r#"{"code":"MQTT_CONFIG_MISSING","error":"MQTT settings not configured"}"#,
    );

    let client = ms::signed_in_client(&server);
    let err = client.broker_config().await.unwrap_err();
    assert!(matches!(err, GatewayError::BrokerConfigMissing));
}

#[tokio::test]
async fn broker_config_without_host_is_treated_as_missing() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_json_mock(&mut server, "GET", "/api/mqtt", 200, r#"{"port":1883}"#);

    let client = ms::signed_in_client(&server);
    let err = client.broker_config().await.unwrap_err();
    assert!(matches!(err, GatewayError::BrokerConfigMissing));
}

#[tokio::test]
async fn unrelated_server_error_passes_through() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_json_mock(
        &mut server,
        "GET",
        "/api/mqtt",
        500,
        r#"{"error":"database is down"}"#,
    );

    let client = ms::signed_in_client(&server);
    let err = client.broker_config().await.unwrap_err();
    match err {
        GatewayError::Api { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("database is down"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// --> release catalog <--

#[tokio::test]
async fn releases_lists_the_catalog() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_json_mock(
        &mut server,
        "GET",
        "/api/updates",
        200,
        r#"[
            {"id":1,"version":"1.0","tag":"stable","filename":"fw-1.0.bin","date":"2026-08-01T12:00:00Z"},
            {"version":2,"filename":"fw-2.bin"}
        ]"#,
    );

    let client = ms::signed_in_client(&server);
    let releases = client.releases().await.unwrap();
    assert_eq!(releases.len(), 2);
    assert_eq!(releases[0].id, Some(1));
    assert_eq!(releases[0].tag.as_deref(), Some("stable"));
    // Numeric version from an older catalog row.
    assert_eq!(releases[1].version, "2");
    assert_eq!(releases[1].id, None);
}

#[tokio::test]
async fn latest_release_by_tag() {
    let mut server = ms::create_mock_http_server().await;
    server
        .mock("GET", "/api/updates")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("latest".into(), "true".into()),
            Matcher::UrlEncoded("tag".into(), "stable".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":7,"version":"1.4","tag":"stable","filename":"fw-1.4.bin"}"#)
        .create();

    let client = ms::signed_in_client(&server);
    let latest = client.latest_release("stable").await.unwrap().unwrap();
    assert_eq!(latest.version, "1.4");
    assert_eq!(latest.id, Some(7));
}

#[tokio::test]
async fn latest_release_absent_tag_is_none() {
    let mut server = ms::create_mock_http_server().await;
    server
        .mock("GET", "/api/updates")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error":"No release found"}"#)
        .create();

    let client = ms::signed_in_client(&server);
    assert!(client.latest_release("nightly").await.unwrap().is_none());
}

#[tokio::test]
async fn create_release_uploads_multipart() {
    let mut server = ms::create_mock_http_server().await;
    let mock = server
        .mock("POST", "/api/updates")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data.*".to_string()),
        )
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":3,"version":"2.0","tag":"stable","filename":"fw-2.0.bin"}"#)
        .create();

    let mut firmware = tempfile::NamedTempFile::new().unwrap();
    firmware.write_all(b"firmware bytes").unwrap();

    let client = ms::signed_in_client(&server);
    let release = client
        .create_release("2.0", Some("stable"), firmware.path())
        .await
        .unwrap();
    assert_eq!(release.version, "2.0");
    assert_eq!(release.id, Some(3));
    mock.assert();
}

#[tokio::test]
async fn delete_release_and_missing_id() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_json_mock(&mut server, "DELETE", "/api/updates/3", 200, r#"{"success":true}"#);
    ms::add_json_mock(&mut server, "DELETE", "/api/updates/99", 404, "{}");

    let client = ms::signed_in_client(&server);
    client.delete_release(3).await.unwrap();
    let err = client.delete_release(99).await.unwrap_err();
    assert!(matches!(err, GatewayError::NotFound("release")));
}

#[tokio::test]
async fn download_release_streams_to_disk() {
    let mut server = ms::create_mock_http_server().await;
    server
        .mock("GET", "/api/updates/stable/1.4/download")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(b"\x00\x01binary firmware image\xff")
        .create();

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("fw-1.4.bin");

    let client = GatewayClient::new(&server.url()).unwrap();
    let written = client
        .download_release("stable", "1.4", &dest)
        .await
        .unwrap();
    assert_eq!(written, 24);
    let on_disk = std::fs::read(&dest).unwrap();
    assert_eq!(on_disk, b"\x00\x01binary firmware image\xff");
}

#[tokio::test]
async fn download_of_unknown_release_is_not_found() {
    let mut server = ms::create_mock_http_server().await;
    ms::add_json_mock(
        &mut server,
        "GET",
        "/api/updates/stable/9.9/download",
        404,
        r#"{"error":"Not found"}"#,
    );

    let dir = tempfile::tempdir().unwrap();
    let client = GatewayClient::new(&server.url()).unwrap();
    let err = client
        .download_release("stable", "9.9", &dir.path().join("fw.bin"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::NotFound("release")));
}
