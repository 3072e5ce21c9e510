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

// src/registry/core.rs
// DeviceRegistry folds status-topic traffic into a mapping from
// device id to last-known-state record.
//
// The fold is a pure synchronous step: no I/O, no locking, no
// clock. Replaying the same event sequence from empty always yields
// the same mapping, which is what makes retained-message replay a
// sufficient resynchronization mechanism after reconnect.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::debug;

use super::record::DeviceRecord;
use crate::topics::TopicSet;

// RegistryChange describes what a single applied event did, mostly
// so callers can decide whether a re-render is worth it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryChange {
    // A record was created or merged into.
    Updated(String),
    // A tombstone removed a record.
    Removed(String),
}

// DeviceRegistry is the projection of "devices known from status
// traffic". One instance lives behind each broker connection and
// is cleared wholesale when that connection goes away.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: HashMap<String, DeviceRecord>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // apply folds one (topic, payload) event into the registry.
    //
    // Topics outside the status namespace, topics with more than one
    // segment after the prefix, and payloads that do not decode to a
    // JSON object are all ignored without touching any record. An
    // empty payload is a tombstone: the record is removed (a no-op
    // if it was never there). A valid payload is shallow-merged into
    // the existing record, creating one when absent; the deviceId
    // field always comes from the topic, never the payload.
    //
    // There is deliberately no timestamp comparison: the transport
    // gives no cross-publisher ordering, so the registry accepts
    // last-arrived-wins. A stale update arriving after a tombstone
    // recreates the device from scratch.
    pub fn apply(
        &mut self,
        topics: &TopicSet,
        topic: &str,
        payload: &[u8],
    ) -> Option<RegistryChange> {
        let device_id = topics.device_from_status_topic(topic)?;

        if payload.is_empty() {
            return match self.devices.remove(device_id) {
                Some(_) => {
                    debug!("removed device '{device_id}' (tombstone)");
                    Some(RegistryChange::Removed(device_id.to_string()))
                }
                None => None,
            };
        }

        let decoded: Map<String, Value> = match serde_json::from_slice::<Value>(payload) {
            Ok(Value::Object(map)) => map,
            // Non-JSON and non-object traffic shares the namespace;
            // it is dropped here without error. The raw console log
            // still shows it.
            _ => {
                debug!("ignoring undecodable status payload on '{topic}'");
                return None;
            }
        };

        self.devices
            .entry(device_id.to_string())
            .or_insert_with(|| DeviceRecord::new(device_id))
            .merge(decoded);
        Some(RegistryChange::Updated(device_id.to_string()))
    }

    // get returns the current record for a device id, if known.
    pub fn get(&self, device_id: &str) -> Option<&DeviceRecord> {
        self.devices.get(device_id)
    }

    // snapshot returns the current records. Order carries no
    // meaning; views sort as they see fit.
    pub fn snapshot(&self) -> Vec<DeviceRecord> {
        self.devices.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    // clear drops every record. Called on disconnect; the next
    // connect rebuilds the registry purely from the broker's
    // retained-message replay.
    pub fn clear(&mut self) {
        self.devices.clear();
        debug!("cleared device registry");
    }
}
