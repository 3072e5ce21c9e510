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

// src/releases.rs
// Release catalog pass-through: list, latest-by-tag, upload,
// delete, and binary download. The backend owns all catalog
// invariants; this module only shapes requests and responses.

use std::path::Path;

use chrono::{DateTime, Utc};
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::{Deserialize, Deserializer};
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::client::GatewayClient;
use crate::errors::GatewayError;

// Release is one catalog entry. Old catalog rows may lack an id
// (the frontend keyed on version in that case) and may carry the
// version as a bare number.
#[derive(Clone, Debug, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(deserialize_with = "version_field")]
    pub version: String,
    #[serde(default)]
    pub tag: Option<String>,
    pub filename: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

// version_field accepts the version as either a JSON number or a
// string.
fn version_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum VersionValue {
        Number(serde_json::Number),
        Text(String),
    }
    Ok(match VersionValue::deserialize(deserializer)? {
        VersionValue::Number(n) => n.to_string(),
        VersionValue::Text(s) => s,
    })
}

impl GatewayClient {
    // releases lists the whole catalog.
    pub async fn releases(&self) -> Result<Vec<Release>, GatewayError> {
        let request = self.authorize(self.http().get(self.endpoint("/api/updates")?))?;
        let response = self.check(request.send().await?)?;
        if !response.status().is_success() {
            return Err(self.api_error(response).await);
        }
        Ok(response.json().await?)
    }

    // latest_release asks for the newest release under a tag. A tag
    // with no releases answers 404, which is an ordinary empty
    // result here.
    pub async fn latest_release(&self, tag: &str) -> Result<Option<Release>, GatewayError> {
        let request = self.authorize(
            self.http()
                .get(self.endpoint("/api/updates")?)
                .query(&[("latest", "true"), ("tag", tag)]),
        )?;
        let response = self.check(request.send().await?)?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            _ => Err(self.api_error(response).await),
        }
    }

    // create_release uploads a firmware binary as a new catalog
    // entry (multipart fields version, tag, file).
    pub async fn create_release(
        &self,
        version: &str,
        tag: Option<&str>,
        file: &Path,
    ) -> Result<Release, GatewayError> {
        let data = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "firmware.bin".to_string());

        let mut form = Form::new()
            .text("version", version.to_string())
            .part("file", Part::bytes(data).file_name(file_name));
        if let Some(tag) = tag {
            form = form.text("tag", tag.to_string());
        }

        let request = self.authorize(
            self.http()
                .post(self.endpoint("/api/updates")?)
                .multipart(form),
        )?;
        let response = self.check(request.send().await?)?;
        if !response.status().is_success() {
            return Err(self.api_error(response).await);
        }
        let release: Release = response.json().await?;
        info!(version = release.version.as_str(), "uploaded release");
        Ok(release)
    }

    // delete_release removes a catalog entry and its backing file.
    pub async fn delete_release(&self, id: u64) -> Result<(), GatewayError> {
        let request =
            self.authorize(self.http().delete(self.endpoint(&format!("/api/updates/{id}"))?))?;
        let response = self.check(request.send().await?)?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(GatewayError::NotFound("release")),
            status if status.is_success() => {
                info!(id, "deleted release");
                Ok(())
            }
            _ => Err(self.api_error(response).await),
        }
    }

    // download_release streams a release binary to dest and returns
    // the byte count. The endpoint is the same one devices fetch
    // firmware from, so no bearer token is attached.
    pub async fn download_release(
        &self,
        tag: &str,
        version: &str,
        dest: &Path,
    ) -> Result<u64, GatewayError> {
        let url = self.endpoint(&format!("/api/updates/{tag}/{version}/download"))?;
        let response = self.http().get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => return Err(GatewayError::NotFound("release")),
            status if !status.is_success() => return Err(self.api_error(response).await),
            _ => {}
        }

        let mut file = tokio::fs::File::create(dest).await?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        info!(tag, version, bytes = written, "downloaded release");
        Ok(written)
    }
}
