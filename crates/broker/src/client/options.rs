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

// src/client/options.rs
// Tunables for the broker client that are not part of the per-broker
// configuration handed out by the gateway.

use std::time::Duration;

// ClientCredentials carries the MQTT username/password pair from the
// gateway's broker configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientCredentials {
    pub username: String,
    pub password: String,
}

impl ClientCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// ClientOptions controls the MQTT session itself. Defaults match
// what the console has always run with; override via the with_*
// builders.
#[derive(Clone, Debug)]
pub struct ClientOptions {
    // Prefix for the generated client id; a random hex suffix is
    // appended per connection so parallel consoles do not evict
    // each other's sessions.
    pub client_id_prefix: String,
    pub keep_alive: Duration,
    // Bound on rumqttc's internal request channel.
    pub channel_capacity: usize,
    pub clean_session: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            client_id_prefix: "fleetdeck".to_string(),
            keep_alive: Duration::from_secs(30),
            channel_capacity: 100,
            clean_session: true,
        }
    }
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.client_id_prefix = prefix.into();
        self
    }

    pub fn with_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    pub fn with_clean_session(mut self, clean: bool) -> Self {
        self.clean_session = clean;
        self
    }
}
