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

// src/client.rs
// GatewayClient: authenticated access to the fleetdeck backend.
//
// Every authenticated call goes through authorize() to attach the
// bearer token and through check() on the way back, so the 403
// reaction (clear the session, report SessionExpired) is in exactly
// one place no matter which endpoint tripped it.

use broker::{BrokerConfig, ClientCredentials, TopicSet};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::errors::GatewayError;
use crate::session::SessionStore;

pub struct GatewayClient {
    http: reqwest::Client,
    base_url: Url,
    session: SessionStore,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub username: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

// The /api/mqtt response. Every field is optional on the wire;
// what counts as "configured enough" is decided in broker_config.
#[derive(Deserialize)]
struct MqttConfigResponse {
    host: Option<String>,
    port: Option<PortValue>,
    user: Option<String>,
    pass: Option<String>,
    #[serde(rename = "statusTopic")]
    status_topic: Option<String>,
    #[serde(rename = "commandTopic")]
    command_topic: Option<String>,
    #[serde(rename = "infoTopic")]
    info_topic: Option<String>,
}

// Older backend deployments stored the port as a string; current
// ones send a number. Accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u16),
    Text(String),
}

impl PortValue {
    fn as_port(&self) -> Option<u16> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.parse().ok(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
}

const MQTT_CONFIG_MISSING: &str = "MQTT_CONFIG_MISSING";

impl GatewayClient {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Self::with_session(base_url, SessionStore::new())
    }

    // with_session builds a client sharing an existing session
    // store, so several clients (or a client and the CLI's token
    // persistence) see the same credential.
    pub fn with_session(base_url: &str, session: SessionStore) -> Result<Self, GatewayError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        Ok(self.base_url.join(path)?)
    }

    // authorize attaches the bearer token, refusing outright when
    // no session is stored.
    pub(crate) fn authorize(
        &self,
        builder: RequestBuilder,
    ) -> Result<RequestBuilder, GatewayError> {
        match self.session.token() {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Err(GatewayError::Unauthorized),
        }
    }

    // check applies the global 403 reaction before any per-endpoint
    // status handling runs.
    pub(crate) fn check(&self, response: Response) -> Result<Response, GatewayError> {
        if response.status() == StatusCode::FORBIDDEN {
            info!("backend rejected the session; clearing stored credential");
            self.session.clear();
            return Err(GatewayError::SessionExpired);
        }
        Ok(response)
    }

    // api_error turns a non-success response into the pass-through
    // error variant.
    pub(crate) async fn api_error(&self, response: Response) -> GatewayError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        GatewayError::Api { status, body }
    }

    // login authenticates and stores the returned token in the
    // session. A 401 is a normal wrong-password outcome, not an API
    // failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), GatewayError> {
        let response = self
            .http
            .post(self.endpoint("/api/login")?)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(GatewayError::InvalidCredentials),
            status if status.is_success() => {
                let body: LoginResponse = response.json().await?;
                self.session.set_token(body.token);
                info!(username, "signed in");
                Ok(())
            }
            _ => Err(self.api_error(response).await),
        }
    }

    // logout drops the stored credential. The backend keeps no
    // session state, so there is nothing to call.
    pub fn logout(&self) {
        self.session.clear();
        info!("signed out");
    }

    // broker_config fetches the MQTT connection details and shapes
    // them into a BrokerConfig. A deployment with no broker
    // configured answers 500 with code MQTT_CONFIG_MISSING; a body
    // missing host or port amounts to the same thing. Topic names
    // absent from the response fall back to the defaults.
    pub async fn broker_config(&self) -> Result<BrokerConfig, GatewayError> {
        let request = self.authorize(self.http.get(self.endpoint("/api/mqtt")?))?;
        let response = self.check(request.send().await?)?;

        if response.status() == StatusCode::INTERNAL_SERVER_ERROR {
            let body = response.text().await.unwrap_or_default();
            if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&body) {
                if parsed.code.as_deref() == Some(MQTT_CONFIG_MISSING) {
                    return Err(GatewayError::BrokerConfigMissing);
                }
            }
            return Err(GatewayError::Api { status: 500, body });
        }
        if !response.status().is_success() {
            return Err(self.api_error(response).await);
        }

        let body: MqttConfigResponse = response.json().await?;
        let host = match body.host {
            Some(h) if !h.is_empty() => h,
            _ => return Err(GatewayError::BrokerConfigMissing),
        };
        let port = match body.port.as_ref().and_then(PortValue::as_port) {
            Some(p) if p != 0 => p,
            _ => return Err(GatewayError::BrokerConfigMissing),
        };

        let mut config = BrokerConfig::new(host, port).with_topics(TopicSet::new(
            body.status_topic,
            body.command_topic,
            body.info_topic,
        ));
        if let (Some(user), Some(pass)) = (body.user, body.pass) {
            if !user.is_empty() {
                config = config.with_credentials(ClientCredentials::new(user, pass));
            }
        }
        debug!(
            host = config.host.as_str(),
            port = config.port,
            "fetched broker connection details"
        );
        Ok(config)
    }

    pub async fn profile(&self) -> Result<Profile, GatewayError> {
        let request = self.authorize(self.http.get(self.endpoint("/api/profile")?))?;
        let response = self.check(request.send().await?)?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(GatewayError::NotFound("profile")),
            status if status.is_success() => Ok(response.json().await?),
            _ => Err(self.api_error(response).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Port values arrive as numbers from current deployments and
    /// strings from older ones.
    #[test]
    fn port_value_accepts_both_wire_forms() {
        let number: PortValue = serde_json::from_str("1883").unwrap();
        assert_eq!(number.as_port(), Some(1883));
        let text: PortValue = serde_json::from_str(r#""8883""#).unwrap();
        assert_eq!(text.as_port(), Some(8883));
        let junk: PortValue = serde_json::from_str(r#""not-a-port""#).unwrap();
        assert_eq!(junk.as_port(), None);
    }

    #[test]
    fn authorize_requires_a_session() {
        let client = GatewayClient::new("http://gateway.local").unwrap();
        let result = client.authorize(client.http.get("http://gateway.local/api/mqtt"));
        assert!(matches!(result, Err(GatewayError::Unauthorized)));
    }
}
