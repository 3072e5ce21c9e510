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

// src/message_types/info.rs
// Diagnostic payload a device publishes on <info>/<deviceId> in
// response to an info command.

use serde::{Deserialize, Serialize};

// DeviceInfo mirrors the firmware's diagnostics JSON. Fields are
// camelCase on the wire; wifiSSID is all-caps SSID there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub device_id: String,
    pub mac_address: String,
    pub firmware_version: String,
    pub ip_address: String,
    #[serde(rename = "wifiSSID")]
    pub wifi_ssid: String,
    // Signal strength in dBm (negative in practice).
    pub wifi_strength: i32,
    // Free heap in bytes.
    pub free_heap: u64,
    // Uptime in milliseconds.
    pub uptime: u64,
}

impl DeviceInfo {
    // uptime_human renders the millisecond uptime counter the way
    // the dashboard did: "3d 4h 5m 6s".
    pub fn uptime_human(&self) -> String {
        let seconds = self.uptime / 1000;
        let d = seconds / 86_400;
        let h = (seconds % 86_400) / 3600;
        let m = (seconds % 3600) / 60;
        let s = seconds % 60;
        format!("{d}d {h}h {m}m {s}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_parses_firmware_payload() {
        let payload = r#"{
            "deviceId": "esp1",
            "macAddress": "24:6F:28:AA:BB:CC",
            "firmwareVersion": "1.2",
            "ipAddress": "192.168.1.40",
            "wifiSSID": "workshop",
            "wifiStrength": -61,
            "freeHeap": 14288,
            "uptime": 93784000
        }"#;
        let info: DeviceInfo = serde_json::from_str(payload).unwrap();
        assert_eq!(info.device_id, "esp1");
        assert_eq!(info.wifi_ssid, "workshop");
        assert_eq!(info.wifi_strength, -61);
        // 93784000 ms = 1d 2h 3m 4s
        assert_eq!(info.uptime_human(), "1d 2h 3m 4s");
    }

    #[test]
    fn info_requires_all_fields() {
        assert!(serde_json::from_str::<DeviceInfo>(r#"{"deviceId":"esp1"}"#).is_err());
    }
}
