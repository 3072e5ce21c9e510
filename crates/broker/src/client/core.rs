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

// src/client/core.rs
// BrokerClient: connection lifecycle, baseline subscriptions, and
// the event loop that feeds the registry, the console log, and
// registered listeners.
//
// The client never reconnects on its own. A transport error stops
// the event loop, records the error, and leaves the client
// disconnected; whoever owns the client decides whether to call
// connect again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use rumqttc::{AsyncClient, Event, MqttOptions, Packet, Publish, QoS};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::listeners::{ListenerHandle, ListenerSet};
use super::messages::InboundMessage;
use super::options::ClientOptions;
use crate::console::{ConsoleEntry, ConsoleLog};
use crate::errors::BrokerClientError;
use crate::message_types::DeviceCommand;
use crate::registry::{DeviceRecord, DeviceRegistry};
use crate::topics::TopicSet;
use crate::BrokerConfig;

// Per-connection state. Replaced wholesale on every connect; the
// alive flag is shared with that connection's event loop task so a
// teardown can fence off a loop that is still draining.
struct Connection {
    client: AsyncClient,
    topics: TopicSet,
    alive: Arc<AtomicBool>,
}

pub struct BrokerClient {
    options: ClientOptions,
    connection: Mutex<Option<Connection>>,
    registry: Arc<StdMutex<DeviceRegistry>>,
    console: Arc<StdMutex<ConsoleLog>>,
    listeners: ListenerSet,
    last_error: Arc<StdMutex<Option<String>>>,
}

impl Default for BrokerClient {
    fn default() -> Self {
        Self::new(ClientOptions::default())
    }
}

impl BrokerClient {
    pub fn new(options: ClientOptions) -> Self {
        Self {
            options,
            connection: Mutex::new(None),
            registry: Arc::new(StdMutex::new(DeviceRegistry::new())),
            console: Arc::new(StdMutex::new(ConsoleLog::new())),
            listeners: ListenerSet::new(),
            last_error: Arc::new(StdMutex::new(None)),
        }
    }

    // connect opens a session to the broker described by config and
    // subscribes the baseline status and info wildcards. Calling
    // connect while a session is already live is a no-op; after a
    // transport failure or an explicit disconnect it opens a fresh
    // session. Connection establishment itself is left to the MQTT
    // keep-alive machinery, with no additional timeout.
    pub async fn connect(&self, config: BrokerConfig) -> Result<(), BrokerClientError> {
        config.validate()?;

        let mut connection = self.connection.lock().await;
        if let Some(existing) = connection.as_ref() {
            if existing.alive.load(Ordering::SeqCst) {
                debug!("connect called while already connected; ignoring");
                return Ok(());
            }
        }

        let client_id = format!(
            "{}-{:08x}",
            self.options.client_id_prefix,
            rand::random::<u32>()
        );
        info!(
            host = config.host.as_str(),
            port = config.port,
            client_id = client_id.as_str(),
            "connecting to broker"
        );

        let mut mqtt_options = MqttOptions::new(client_id, config.host.clone(), config.port);
        mqtt_options.set_keep_alive(self.options.keep_alive);
        mqtt_options.set_clean_session(self.options.clean_session);
        if let Some(credentials) = &config.credentials {
            mqtt_options.set_credentials(credentials.username.clone(), credentials.password.clone());
        }

        let (client, mut event_loop) =
            AsyncClient::new(mqtt_options, self.options.channel_capacity);

        client
            .subscribe(config.topics.status_wildcard(), QoS::AtLeastOnce)
            .await?;
        client
            .subscribe(config.topics.info_wildcard(), QoS::AtLeastOnce)
            .await?;

        let alive = Arc::new(AtomicBool::new(true));
        *self.last_error.lock().unwrap_or_else(|e| e.into_inner()) = None;

        let loop_alive = alive.clone();
        let loop_topics = config.topics.clone();
        let registry = self.registry.clone();
        let console = self.console.clone();
        let listeners = self.listeners.clone();
        let last_error = self.last_error.clone();
        tokio::spawn(async move {
            loop {
                match event_loop.poll().await {
                    Ok(Event::Incoming(Packet::Publish(publish))) => {
                        if !handle_publish(
                            &loop_alive,
                            &loop_topics,
                            &registry,
                            &console,
                            &listeners,
                            &publish,
                        ) {
                            break;
                        }
                    }
                    Ok(Event::Incoming(Packet::Disconnect)) => {
                        warn!("broker closed the connection");
                        if loop_alive.swap(false, Ordering::SeqCst) {
                            *last_error.lock().unwrap_or_else(|e| e.into_inner()) =
                                Some("broker closed the connection".to_string());
                            registry.lock().unwrap_or_else(|e| e.into_inner()).clear();
                            console.lock().unwrap_or_else(|e| e.into_inner()).clear();
                        }
                        break;
                    }
                    Ok(_) => {}
                    Err(err) => {
                        // swap so a racing disconnect() does not
                        // double-clear or overwrite its own state.
                        if loop_alive.swap(false, Ordering::SeqCst) {
                            warn!("broker connection failed: {err}");
                            *last_error.lock().unwrap_or_else(|e| e.into_inner()) =
                                Some(err.to_string());
                            registry.lock().unwrap_or_else(|e| e.into_inner()).clear();
                            console.lock().unwrap_or_else(|e| e.into_inner()).clear();
                        }
                        break;
                    }
                }
            }
            debug!("broker event loop stopped");
        });

        *connection = Some(Connection {
            client,
            topics: config.topics,
            alive,
        });
        Ok(())
    }

    // disconnect tears down the current session, if any, and clears
    // the device registry and console log. Safe to call repeatedly.
    pub async fn disconnect(&self) {
        let mut connection = self.connection.lock().await;
        if let Some(conn) = connection.take() {
            let was_alive = conn.alive.swap(false, Ordering::SeqCst);
            // The request queue may already be closed if the event
            // loop died first; nothing useful to do about it here.
            if conn.client.disconnect().await.is_err() {
                debug!("disconnect request after event loop already stopped");
            }
            if was_alive {
                info!("disconnected from broker");
            }
        }
        self.registry
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        self.console
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    // is_connected reports whether a session is live right now. A
    // session that died in the event loop counts as disconnected
    // even before disconnect() reaps it.
    pub async fn is_connected(&self) -> bool {
        self.connection
            .lock()
            .await
            .as_ref()
            .is_some_and(|conn| conn.alive.load(Ordering::SeqCst))
    }

    // last_error returns the transport error that ended the previous
    // session, if it ended in one.
    pub fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    // topics returns the topic namespaces of the live session.
    pub async fn topics(&self) -> Option<TopicSet> {
        self.connection
            .lock()
            .await
            .as_ref()
            .filter(|conn| conn.alive.load(Ordering::SeqCst))
            .map(|conn| conn.topics.clone())
    }

    // publish sends one message at QoS 1. No delivery timeout; the
    // future resolves when the request is queued and errors only if
    // the session is gone.
    pub async fn publish(
        &self,
        topic: &str,
        payload: impl Into<Vec<u8>>,
        retain: bool,
    ) -> Result<(), BrokerClientError> {
        let connection = self.connection.lock().await;
        let conn = live_connection(&connection)?;
        conn.client
            .publish(topic, QoS::AtLeastOnce, retain, payload.into())
            .await?;
        Ok(())
    }

    // send_command publishes a command to a device's command topic,
    // non-retained.
    pub async fn send_command(
        &self,
        device_id: &str,
        command: &DeviceCommand,
    ) -> Result<(), BrokerClientError> {
        let connection = self.connection.lock().await;
        let conn = live_connection(&connection)?;
        let topic = conn.topics.command_topic(device_id);
        // DeviceCommand always serializes; the enum carries only
        // strings.
        let payload = serde_json::to_vec(command).unwrap_or_default();
        debug!(device_id, topic = topic.as_str(), "sending command");
        conn.client
            .publish(topic, QoS::AtLeastOnce, false, payload)
            .await?;
        Ok(())
    }

    // remove_device publishes a retained empty payload on the
    // device's status topic. The broker drops its retained state and
    // every connected console (this one included, via the echoed
    // tombstone) removes the record.
    pub async fn remove_device(&self, device_id: &str) -> Result<(), BrokerClientError> {
        let connection = self.connection.lock().await;
        let conn = live_connection(&connection)?;
        let topic = conn.topics.status_topic(device_id);
        info!(device_id, "removing device (retained tombstone)");
        conn.client
            .publish(topic, QoS::AtLeastOnce, true, Vec::new())
            .await?;
        Ok(())
    }

    // subscribe adds a topic filter on top of the baseline
    // subscriptions. Messages arriving on it go to the console log
    // and listeners like any other traffic.
    pub async fn subscribe(&self, topic: &str) -> Result<(), BrokerClientError> {
        let connection = self.connection.lock().await;
        let conn = live_connection(&connection)?;
        conn.client.subscribe(topic, QoS::AtLeastOnce).await?;
        Ok(())
    }

    // unsubscribe removes a previously added topic filter. The
    // baseline status wildcard is refused: dropping it would freeze
    // the device registry while the client still claims to be
    // connected.
    pub async fn unsubscribe(&self, topic: &str) -> Result<(), BrokerClientError> {
        let connection = self.connection.lock().await;
        let conn = live_connection(&connection)?;
        if topic == conn.topics.status_wildcard() {
            return Err(BrokerClientError::BaselineTopic(topic.to_string()));
        }
        conn.client.unsubscribe(topic).await?;
        Ok(())
    }

    // on_message registers a listener for every inbound message on
    // every subscribed topic. The handle deregisters it; handles
    // survive reconnects.
    pub fn on_message<F>(&self, callback: F) -> ListenerHandle
    where
        F: Fn(&InboundMessage) + Send + Sync + 'static,
    {
        self.listeners.register(callback)
    }

    // devices returns a snapshot of the registry, sorted by id for
    // stable display.
    pub fn devices(&self) -> Vec<DeviceRecord> {
        let mut devices = self
            .registry
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .snapshot();
        devices.sort_by(|a, b| a.device_id().cmp(b.device_id()));
        devices
    }

    // device returns the current record for one device id.
    pub fn device(&self, device_id: &str) -> Option<DeviceRecord> {
        self.registry
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(device_id)
            .cloned()
    }

    // console_entries returns the console log in arrival order.
    pub fn console_entries(&self) -> Vec<ConsoleEntry> {
        self.console
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entries()
            .to_vec()
    }

    pub fn clear_console(&self) {
        self.console
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

fn live_connection<'a>(
    connection: &'a Option<Connection>,
) -> Result<&'a Connection, BrokerClientError> {
    connection
        .as_ref()
        .filter(|conn| conn.alive.load(Ordering::SeqCst))
        .ok_or(BrokerClientError::NotConnected)
}

// handle_publish feeds one inbound publish into the console log,
// the registry, and the listeners, in that order. Returns false
// when the connection was torn down before the message could be
// processed; the message is then dropped entirely so no state
// mutation or listener call happens after teardown.
fn handle_publish(
    alive: &AtomicBool,
    topics: &TopicSet,
    registry: &StdMutex<DeviceRegistry>,
    console: &StdMutex<ConsoleLog>,
    listeners: &ListenerSet,
    publish: &Publish,
) -> bool {
    if !alive.load(Ordering::SeqCst) {
        return false;
    }
    let message = InboundMessage::from_publish(publish);
    console
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .append(&message.topic, &message.payload, message.received_at);
    registry
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .apply(topics, &message.topic, &message.payload);
    listeners.dispatch(&message);
    true
}
