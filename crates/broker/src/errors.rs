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

// src/errors.rs
// Error types for the broker client library.

// BrokerClientError covers everything that can go wrong between
// "we have connection details" and "messages are flowing". Nothing
// here is retried automatically; callers decide whether to
// reconnect.
#[derive(Debug, thiserror::Error)]
pub enum BrokerClientError {
    // Connection details answered by the backend were unusable.
    #[error("broker connection details are incomplete: missing {0}")]
    IncompleteConfig(&'static str),

    // Request-side failures from the underlying MQTT client
    // (publish/subscribe/disconnect while the request queue is
    // closed or full).
    #[error("MQTT client error: {0}")]
    Client(#[from] rumqttc::ClientError),

    // Transport-level failure observed by the event loop. The
    // connection is left closed; reconnecting is the caller's call.
    #[error("MQTT connection error: {0}")]
    Connection(String),

    // An operation that needs a live connection was invoked
    // without one.
    #[error("not connected to a broker")]
    NotConnected,

    // Unsubscribing the baseline status wildcard would silently
    // stop the device registry from updating, so it is refused.
    #[error("cannot unsubscribe baseline topic '{0}'")]
    BaselineTopic(String),
}
