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

// src/registry/record.rs
// The per-device record a registry fold produces.

use serde::Serialize;
use serde_json::{Map, Value};

// DEVICE_ID_FIELD is the payload field that mirrors the registry
// key. It is always overwritten with the key derived from the
// topic, so a payload can never claim to be another device.
pub(crate) const DEVICE_ID_FIELD: &str = "deviceId";

// DeviceStatus is the well-known subset of the free-form status
// field. Anything else (or a missing field) renders as Unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceStatus {
    Online,
    Offline,
    Updating,
    Unknown,
}

impl DeviceStatus {
    fn from_field(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("online") => Self::Online,
            Some("offline") => Self::Offline,
            Some("updating") => Self::Updating,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Updating => "updating",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

// DeviceRecord is the last-write-wins merge of every field ever
// seen for one device id. It has no identity beyond its key and is
// rebuilt from retained-message replay after every reconnect.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeviceRecord {
    device_id: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl DeviceRecord {
    // new creates an empty record for a key. The deviceId field is
    // seeded immediately so even a `{}` payload yields a record
    // that names its device.
    pub(crate) fn new(device_id: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(DEVICE_ID_FIELD.to_string(), Value::String(device_id.to_string()));
        Self {
            device_id: device_id.to_string(),
            fields,
        }
    }

    // merge shallow-merges a decoded payload into this record,
    // overwriting colliding fields and re-pinning deviceId to the
    // topic-derived key.
    pub(crate) fn merge(&mut self, payload: Map<String, Value>) {
        self.fields.extend(payload);
        self.fields.insert(
            DEVICE_ID_FIELD.to_string(),
            Value::String(self.device_id.clone()),
        );
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn status(&self) -> DeviceStatus {
        DeviceStatus::from_field(self.fields.get("status"))
    }

    // version is the firmware version the device last reported,
    // when present.
    pub fn version(&self) -> Option<&str> {
        self.fields.get("version").and_then(Value::as_str)
    }

    // field gives raw access to any merged payload field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    // fields exposes the whole merged map, deviceId included.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
