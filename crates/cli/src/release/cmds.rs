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

use std::path::PathBuf;

use gateway::Release;

use super::args::{DeleteOpts, DownloadOpts, LatestOpts, UploadOpts};
use crate::cfg::runtime::RuntimeContext;

fn print_release(release: &Release) {
    println!(
        "{:<6} {:<12} {:<12} {:<28} {}",
        release.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
        release.version,
        release.tag.as_deref().unwrap_or("-"),
        release.filename,
        release
            .date
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    );
}

pub async fn list(ctx: &RuntimeContext) -> eyre::Result<()> {
    let releases = ctx.settle(ctx.gateway.releases().await)?;
    if releases.is_empty() {
        println!("no releases");
        return Ok(());
    }
    println!(
        "{:<6} {:<12} {:<12} {:<28} {}",
        "ID", "VERSION", "TAG", "FILE", "DATE"
    );
    for release in &releases {
        print_release(release);
    }
    Ok(())
}

pub async fn latest(ctx: &RuntimeContext, opts: LatestOpts) -> eyre::Result<()> {
    match ctx.settle(ctx.gateway.latest_release(&opts.tag).await)? {
        Some(release) => {
            println!(
                "{:<6} {:<12} {:<12} {:<28} {}",
                "ID", "VERSION", "TAG", "FILE", "DATE"
            );
            print_release(&release);
        }
        None => println!("no releases under tag '{}'", opts.tag),
    }
    Ok(())
}

pub async fn upload(ctx: &RuntimeContext, opts: UploadOpts) -> eyre::Result<()> {
    let release = ctx.settle(
        ctx.gateway
            .create_release(&opts.version, opts.tag.as_deref(), &opts.file)
            .await,
    )?;
    println!(
        "uploaded {} as version {}",
        release.filename, release.version
    );
    Ok(())
}

pub async fn delete(ctx: &RuntimeContext, opts: DeleteOpts) -> eyre::Result<()> {
    ctx.settle(ctx.gateway.delete_release(opts.id).await)?;
    println!("deleted release {}", opts.id);
    Ok(())
}

// default_output names the downloaded file after the version when
// no destination was given.
pub fn default_output(version: &str) -> PathBuf {
    PathBuf::from(format!("{version}.bin"))
}

pub async fn download(ctx: &RuntimeContext, opts: DownloadOpts) -> eyre::Result<()> {
    let dest = opts.output.unwrap_or_else(|| default_output(&opts.version));
    let bytes = ctx.settle(
        ctx.gateway
            .download_release(&opts.tag, &opts.version, &dest)
            .await,
    )?;
    println!("wrote {} ({bytes} bytes)", dest.display());
    Ok(())
}
