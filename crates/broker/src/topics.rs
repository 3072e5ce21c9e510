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

// src/topics.rs
// Topic namespace handling for the three per-device channels.
//
// Devices broadcast state on <status>/<id> (retained), receive
// commands on <command>/<id>, and answer diagnostics on
// <info>/<id>. The prefixes are deployment-configurable through
// the backend, with the defaults below.

use serde::{Deserialize, Serialize};

pub const DEFAULT_STATUS_TOPIC: &str = "device/status";
pub const DEFAULT_COMMAND_TOPIC: &str = "device/command";
pub const DEFAULT_INFO_TOPIC: &str = "device/info";

// TopicSet is the group of topic namespaces one connection
// operates in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSet {
    pub status: String,
    pub command: String,
    pub info: String,
}

impl Default for TopicSet {
    fn default() -> Self {
        Self {
            status: DEFAULT_STATUS_TOPIC.to_string(),
            command: DEFAULT_COMMAND_TOPIC.to_string(),
            info: DEFAULT_INFO_TOPIC.to_string(),
        }
    }
}

impl TopicSet {
    // new builds a TopicSet from optional per-deployment overrides,
    // falling back to the defaults for any namespace left blank.
    pub fn new(
        status: Option<String>,
        command: Option<String>,
        info: Option<String>,
    ) -> Self {
        let or_default = |value: Option<String>, default: &str| match value {
            Some(v) if !v.is_empty() => v,
            _ => default.to_string(),
        };
        Self {
            status: or_default(status, DEFAULT_STATUS_TOPIC),
            command: or_default(command, DEFAULT_COMMAND_TOPIC),
            info: or_default(info, DEFAULT_INFO_TOPIC),
        }
    }

    // status_wildcard returns the subscription filter covering all
    // device status topics.
    pub fn status_wildcard(&self) -> String {
        format!("{}/#", self.status)
    }

    // info_wildcard returns the subscription filter covering all
    // device info topics.
    pub fn info_wildcard(&self) -> String {
        format!("{}/#", self.info)
    }

    pub fn status_topic(&self, device_id: &str) -> String {
        format!("{}/{}", self.status, device_id)
    }

    pub fn command_topic(&self, device_id: &str) -> String {
        format!("{}/{}", self.command, device_id)
    }

    pub fn info_topic(&self, device_id: &str) -> String {
        format!("{}/{}", self.info, device_id)
    }

    // device_from_status_topic extracts the device id from a status
    // topic. Only topics of the exact shape <status>/<one-segment>
    // match; nested topics under the status namespace do not feed
    // the device registry.
    pub fn device_from_status_topic<'a>(&self, topic: &'a str) -> Option<&'a str> {
        let rest = topic.strip_prefix(self.status.as_str())?;
        let device_id = rest.strip_prefix('/')?;
        if device_id.is_empty() || device_id.contains('/') {
            return None;
        }
        Some(device_id)
    }

    // device_from_info_topic extracts the device id from an info
    // topic, same single-segment rule as the status namespace.
    pub fn device_from_info_topic<'a>(&self, topic: &'a str) -> Option<&'a str> {
        let rest = topic.strip_prefix(self.info.as_str())?;
        let device_id = rest.strip_prefix('/')?;
        if device_id.is_empty() || device_id.contains('/') {
            return None;
        }
        Some(device_id)
    }

    // is_status_traffic reports whether a topic belongs to the
    // status namespace. Used as a display-time predicate by console
    // views ("hide status traffic"); it never affects what gets
    // stored.
    pub fn is_status_traffic(&self, topic: &str) -> bool {
        topic == self.status
            || topic
                .strip_prefix(self.status.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_overrides() {
        let topics = TopicSet::new(Some("fleet/state".to_string()), None, Some(String::new()));
        assert_eq!(topics.status, "fleet/state");
        assert_eq!(topics.command, DEFAULT_COMMAND_TOPIC);
        assert_eq!(topics.info, DEFAULT_INFO_TOPIC);
    }

    #[test]
    fn device_id_requires_exactly_one_segment() {
        let topics = TopicSet::default();
        assert_eq!(
            topics.device_from_status_topic("device/status/esp1"),
            Some("esp1")
        );
        assert_eq!(topics.device_from_status_topic("device/status/esp1/extra"), None);
        assert_eq!(topics.device_from_status_topic("device/status"), None);
        assert_eq!(topics.device_from_status_topic("device/status/"), None);
        assert_eq!(topics.device_from_status_topic("device/command/esp1"), None);
    }

    #[test]
    fn prefix_match_is_segment_aware() {
        // "device/statusx/esp1" shares a string prefix with the
        // status namespace but is a different topic tree.
        let topics = TopicSet::default();
        assert_eq!(topics.device_from_status_topic("device/statusx/esp1"), None);
        assert!(!topics.is_status_traffic("device/statusx/esp1"));
        assert!(topics.is_status_traffic("device/status/esp1"));
        assert!(topics.is_status_traffic("device/status/esp1/extra"));
    }
}
