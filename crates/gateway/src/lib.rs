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

// src/lib.rs
// Client library for the fleetdeck backend API: authentication,
// broker connection details, and the release catalog.

pub mod client;
pub mod errors;
pub mod releases;
pub mod session;

pub use client::{GatewayClient, Profile};
pub use errors::GatewayError;
pub use releases::Release;
pub use session::SessionStore;
