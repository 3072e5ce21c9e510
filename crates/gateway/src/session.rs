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

// src/session.rs
// Shared bearer-token holder. One store is shared by every client
// handle in the process; clearing it (logout, or any 403) signs the
// whole process out at once.

use std::sync::{Arc, RwLock};

use base64::prelude::{Engine as _, BASE64_URL_SAFE_NO_PAD};
use tracing::debug;

#[derive(Clone, Debug)]
struct Credential {
    token: String,
    username: Option<String>,
}

// SessionStore is a cheaply clonable handle onto the process-wide
// credential.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Credential>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // set_token stores a bearer token and extracts the username
    // claim for display. A token whose claims cannot be decoded is
    // still stored; it just has no display name.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let username = username_claim(&token);
        debug!(username = username.as_deref(), "storing session token");
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) =
            Some(Credential { token, username });
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|c| c.token.clone())
    }

    pub fn username(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .and_then(|c| c.username.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    // clear drops the credential. The single exit point for a
    // session: logout and the global 403 reaction both land here.
    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

// username_claim pulls the username out of a JWT's claims section
// without verifying the signature. The token is opaque to us
// otherwise; the backend is the authority on validity and this
// value is display-only.
fn username_claim(token: &str) -> Option<String> {
    let claims = token.split('.').nth(1)?;
    let decoded = BASE64_URL_SAFE_NO_PAD.decode(claims).ok()?;
    let value: serde_json::Value = serde_json::from_slice(&decoded).ok()?;
    value.get("username")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_claims(claims: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.signature",
            BASE64_URL_SAFE_NO_PAD.encode(claims)
        )
    }

    #[test]
    fn username_comes_from_the_claims_section() {
        let store = SessionStore::new();
        store.set_token(token_with_claims(r#"{"username":"admin","iat":1724800000}"#));
        assert!(store.is_authenticated());
        assert_eq!(store.username().as_deref(), Some("admin"));
    }

    #[test]
    fn undecodable_claims_still_store_the_token() {
        let store = SessionStore::new();
        store.set_token("not-a-jwt");
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("not-a-jwt"));
        assert_eq!(store.username(), None);
    }

    #[test]
    fn clear_signs_out_every_handle() {
        let store = SessionStore::new();
        let other = store.clone();
        store.set_token(token_with_claims(r#"{"username":"admin"}"#));
        assert!(other.is_authenticated());

        other.clear();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
    }
}
