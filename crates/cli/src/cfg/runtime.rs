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

use std::fs;
use std::path::PathBuf;

use broker::BrokerClient;
use eyre::WrapErr;
use gateway::{GatewayClient, GatewayError, SessionStore};
use tracing::debug;

// RuntimeContext is context passed to all subcommand dispatch
// handlers. This is built at the beginning of runtime and then
// passed to the appropriate dispatcher.
pub struct RuntimeContext {
    pub gateway: GatewayClient,
    token_path: PathBuf,
}

impl RuntimeContext {
    // build wires the gateway client to a session seeded from the
    // token file, so separate invocations share one sign-in.
    pub fn build(gateway_url: &str, token_file: Option<PathBuf>) -> eyre::Result<Self> {
        let token_path = match token_file {
            Some(path) => path,
            None => default_token_path()?,
        };

        let session = SessionStore::new();
        if let Ok(token) = fs::read_to_string(&token_path) {
            let token = token.trim();
            if !token.is_empty() {
                debug!(path = %token_path.display(), "loaded session token");
                session.set_token(token);
            }
        }

        let gateway = GatewayClient::with_session(gateway_url, session)
            .wrap_err("invalid gateway URL")?;
        Ok(Self {
            gateway,
            token_path,
        })
    }

    // persist_token writes the current session token to the token
    // file. Called after a successful login.
    pub fn persist_token(&self) -> eyre::Result<()> {
        let token = self
            .gateway
            .session()
            .token()
            .ok_or_else(|| eyre::eyre!("no session to persist"))?;
        if let Some(parent) = self.token_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.token_path, token)?;
        Ok(())
    }

    // forget_token removes the persisted token, if any.
    pub fn forget_token(&self) {
        if fs::remove_file(&self.token_path).is_ok() {
            debug!(path = %self.token_path.display(), "removed session token");
        }
    }

    // settle is the CLI's equivalent of the dashboard's
    // redirect-to-login: any call that came back SessionExpired has
    // already cleared the in-memory session, so drop the persisted
    // token too before handing the error up.
    pub fn settle<T>(&self, result: Result<T, GatewayError>) -> eyre::Result<T> {
        if let Err(GatewayError::SessionExpired) = &result {
            self.forget_token();
        }
        result.map_err(Into::into)
    }

    // connect_broker fetches connection details from the gateway
    // and opens a broker session with them.
    pub async fn connect_broker(&self) -> eyre::Result<BrokerClient> {
        let config = self.settle(self.gateway.broker_config().await)?;
        let client = BrokerClient::default();
        client.connect(config).await?;
        Ok(client)
    }
}

fn default_token_path() -> eyre::Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .ok_or_else(|| eyre::eyre!("HOME is not set; pass --token-file"))?;
    Ok(PathBuf::from(home).join(".fleetdeck").join("token"))
}
