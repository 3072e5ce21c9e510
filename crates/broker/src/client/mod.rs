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

// src/client/mod.rs
// Client module exports.
//
// Provides a clean interface by re-exporting the connection manager
// and supporting types while hiding the internal module structure.

mod core;
mod listeners;
mod messages;
mod options;

pub use core::BrokerClient;
pub use listeners::{ListenerHandle, ListenerSet};
pub use messages::InboundMessage;
pub use options::{ClientCredentials, ClientOptions};
