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

// src/client/listeners.rs
// Observer registry for the raw inbound-message stream.
//
// Every registered listener receives every message (fan-out, not
// filtered). Registration hands back a ListenerHandle; dropping or
// re-deregistering a handle never disturbs the other listeners.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use super::messages::InboundMessage;

type ListenerCallback = Arc<dyn Fn(&InboundMessage) + Send + Sync>;

#[derive(Default)]
struct ListenerMap {
    next_id: u64,
    callbacks: HashMap<u64, ListenerCallback>,
}

// ListenerSet is the shared callback table one client owns.
#[derive(Clone, Default)]
pub struct ListenerSet {
    inner: Arc<Mutex<ListenerMap>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    // register adds a callback and returns its deregistration
    // handle.
    pub fn register<F>(&self, callback: F) -> ListenerHandle
    where
        F: Fn(&InboundMessage) + Send + Sync + 'static,
    {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let id = map.next_id;
        map.next_id += 1;
        map.callbacks.insert(id, Arc::new(callback));
        ListenerHandle {
            id,
            set: Arc::downgrade(&self.inner),
        }
    }

    // dispatch invokes every callback with the message. It iterates
    // a snapshot of the table so a callback that registers or
    // deregisters listeners cannot deadlock or invalidate the
    // iteration.
    pub fn dispatch(&self, message: &InboundMessage) {
        let snapshot: Vec<ListenerCallback> = {
            let map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            map.callbacks.values().cloned().collect()
        };
        for callback in snapshot {
            callback(message);
        }
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .callbacks
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ListenerHandle identifies one registration. Deregistration is
// explicit and safe to repeat; removing an absent id is a no-op.
pub struct ListenerHandle {
    id: u64,
    set: Weak<Mutex<ListenerMap>>,
}

impl ListenerHandle {
    pub fn deregister(&self) {
        if let Some(inner) = self.set.upgrade() {
            inner
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .callbacks
                .remove(&self.id);
        }
    }
}
