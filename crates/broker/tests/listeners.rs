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

// tests/listeners.rs
// Listener fan-out and deregistration semantics.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use broker::client::{InboundMessage, ListenerSet};
use chrono::Utc;

fn message(topic: &str, payload: &[u8]) -> InboundMessage {
    InboundMessage {
        topic: topic.to_string(),
        payload: payload.to_vec(),
        received_at: Utc::now(),
    }
}

#[test]
fn every_listener_sees_every_message() {
    let listeners = ListenerSet::new();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let first_counter = first.clone();
    let _a = listeners.register(move |_| {
        first_counter.fetch_add(1, Ordering::SeqCst);
    });
    let second_counter = second.clone();
    let _b = listeners.register(move |_| {
        second_counter.fetch_add(1, Ordering::SeqCst);
    });

    listeners.dispatch(&message("device/status/esp1", b"{}"));
    listeners.dispatch(&message("custom/topic", b"hello"));

    assert_eq!(first.load(Ordering::SeqCst), 2);
    assert_eq!(second.load(Ordering::SeqCst), 2);
}

#[test]
fn deregistered_listener_stops_receiving() {
    let listeners = ListenerSet::new();
    let count = Arc::new(AtomicUsize::new(0));

    let counter = count.clone();
    let handle = listeners.register(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    listeners.dispatch(&message("a", b"1"));
    handle.deregister();
    listeners.dispatch(&message("a", b"2"));

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(listeners.is_empty());
}

#[test]
fn deregister_is_repeat_safe() {
    let listeners = ListenerSet::new();
    let survivor_hits = Arc::new(AtomicUsize::new(0));

    let handle = listeners.register(|_| {});
    let counter = survivor_hits.clone();
    let _survivor = listeners.register(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    handle.deregister();
    // A second deregistration of the same handle must not disturb
    // the remaining listener.
    handle.deregister();
    assert_eq!(listeners.len(), 1);

    listeners.dispatch(&message("a", b"1"));
    assert_eq!(survivor_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn listener_can_deregister_itself_during_dispatch() {
    let listeners = ListenerSet::new();
    let count = Arc::new(AtomicUsize::new(0));

    let inner = listeners.clone();
    let counter = count.clone();
    let handle = Arc::new(std::sync::Mutex::new(None));
    let handle_slot = handle.clone();
    let registered = inner.register(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        if let Some(h) = handle_slot.lock().unwrap().take() {
            let h: broker::client::ListenerHandle = h;
            h.deregister();
        }
    });
    *handle.lock().unwrap() = Some(registered);

    // First dispatch fires the listener, which removes itself
    // mid-iteration without deadlocking.
    listeners.dispatch(&message("a", b"1"));
    listeners.dispatch(&message("a", b"2"));
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(listeners.is_empty());
}
