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

// src/lib.rs
// Main exports for the fleetdeck broker client library.

pub mod client;
pub mod console;
pub mod errors;
pub mod message_types;
pub mod registry;
pub mod topics;

// Export some things for convenience.
pub use client::{BrokerClient, ClientCredentials, ClientOptions, InboundMessage, ListenerHandle};
pub use console::{ConsoleEntry, ConsoleLog};
pub use errors::BrokerClientError;
pub use message_types::{DeviceCommand, DeviceInfo};
pub use registry::{DeviceRecord, DeviceRegistry, DeviceStatus, RegistryChange};
pub use rumqttc::QoS;
pub use topics::TopicSet;

// BrokerConfig holds everything needed to open one broker
// connection: transport endpoint, optional credentials, and
// the topic namespaces to operate in. Normally produced by
// the gateway crate from the backend's /api/mqtt response.
#[derive(Clone, Debug)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    pub credentials: Option<ClientCredentials>,
    pub topics: TopicSet,
}

impl BrokerConfig {
    // new creates a config for the given endpoint with default
    // topic namespaces and no credentials.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            credentials: None,
            topics: TopicSet::default(),
        }
    }

    pub fn with_credentials(mut self, credentials: ClientCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_topics(mut self, topics: TopicSet) -> Self {
        self.topics = topics;
        self
    }

    // validate rejects configs that cannot possibly connect. Empty
    // host and zero port are what we get when the backend config
    // endpoint answered but its deployment left the fields blank.
    pub fn validate(&self) -> Result<(), BrokerClientError> {
        if self.host.is_empty() {
            return Err(BrokerClientError::IncompleteConfig("host"));
        }
        if self.port == 0 {
            return Err(BrokerClientError::IncompleteConfig("port"));
        }
        Ok(())
    }
}
