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

// src/client/messages.rs
// Inbound message envelope handed to registered listeners.

use chrono::{DateTime, Utc};
use rumqttc::Publish;

// InboundMessage is one raw broker message plus its receipt
// timestamp. Listeners get every message on every subscribed
// topic; filtering is up to them.
#[derive(Clone, Debug)]
pub struct InboundMessage {
    pub topic: String,
    pub payload: Vec<u8>,
    pub received_at: DateTime<Utc>,
}

impl InboundMessage {
    // from_publish converts an MQTT publish packet into the
    // envelope, stamping the receipt time.
    pub(crate) fn from_publish(publish: &Publish) -> Self {
        Self {
            topic: publish.topic.clone(),
            payload: publish.payload.to_vec(),
            received_at: Utc::now(),
        }
    }

    // payload_text renders the payload for display; binary data
    // comes through lossy.
    pub fn payload_text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }

    // is_tombstone reports whether this is an empty-payload
    // deletion marker.
    pub fn is_tombstone(&self) -> bool {
        self.payload.is_empty()
    }
}
