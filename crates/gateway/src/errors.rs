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
// Error types for the gateway client library.

// GatewayError distinguishes the failures callers react to
// differently: bad login attempts stay on the login prompt, an
// expired session sends the user back to sign in, a missing broker
// config blocks the whole console, and everything else is surfaced
// as-is.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    // Login was rejected with 401.
    #[error("invalid username or password")]
    InvalidCredentials,

    // The backend answered 403 on an authenticated call. The stored
    // session has already been cleared by the time this is returned.
    #[error("session expired or rejected; sign in again")]
    SessionExpired,

    // An authenticated call was attempted with no stored session.
    #[error("not signed in")]
    Unauthorized,

    // The backend has no usable broker connection details.
    #[error("broker connection details are not configured on the backend")]
    BrokerConfigMissing,

    #[error("{0} not found")]
    NotFound(&'static str),

    // Any other non-success response, passed through verbatim.
    #[error("backend returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("backend communication failed: {0}")]
    Communication(#[from] reqwest::Error),

    #[error("invalid gateway URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
