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

// src/console.rs
// The raw console log: every inbound message on every subscribed
// topic, kept in arrival order.
//
// The log is append-only and unbounded until the user clears it.
// Newest-first display and "hide status traffic" are presentation
// concerns layered on top of the stored sequence, never mutations
// of it.

use chrono::{DateTime, Utc};

// ConsoleEntry is one received message, immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleEntry {
    pub topic: String,
    // Payload rendered as text. Binary traffic comes through lossy,
    // the same way a browser console would show it.
    pub payload: String,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct ConsoleLog {
    entries: Vec<ConsoleEntry>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    // append records one message with its receipt timestamp. No
    // deduplication; duplicates on the wire show up twice.
    pub fn append(&mut self, topic: &str, payload: &[u8], received_at: DateTime<Utc>) {
        self.entries.push(ConsoleEntry {
            topic: topic.to_string(),
            payload: String::from_utf8_lossy(payload).into_owned(),
            received_at,
        });
    }

    // entries returns the stored sequence in arrival order.
    pub fn entries(&self) -> &[ConsoleEntry] {
        &self.entries
    }

    // newest_first is the display-order view.
    pub fn newest_first(&self) -> impl Iterator<Item = &ConsoleEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
