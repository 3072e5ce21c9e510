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

// src/message_types/command.rs
// Commands published by the console to <command>/<deviceId>.

use serde::{Deserialize, Serialize};

// DeviceCommand is the console-to-device command payload. On the
// wire: {"action":"update","version":"stable/1.2"}, {"action":"delete"},
// {"action":"info"}.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum DeviceCommand {
    // Ask the device to fetch and flash a release. The version
    // string is "<tag>/<version>" on deployments with tags, or the
    // bare version otherwise; the device resolves it against the
    // release download endpoint.
    Update { version: String },
    // Ask the device to factory-reset and drop off the fleet.
    Delete,
    // Ask the device to publish a DeviceInfo payload on its info
    // topic.
    Info,
}
