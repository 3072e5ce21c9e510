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

use clap::{Parser, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// List the release catalog
    List,
    /// Show the newest release under a tag
    Latest(LatestOpts),
    /// Upload a firmware binary as a new release
    Upload(UploadOpts),
    /// Delete a release and its backing file
    Delete(DeleteOpts),
    /// Download a release binary
    Download(DownloadOpts),
}

#[derive(Parser, Debug)]
pub struct LatestOpts {
    #[clap(help = "Release tag")]
    pub tag: String,
}

#[derive(Parser, Debug)]
pub struct UploadOpts {
    #[clap(help = "Version of the new release")]
    pub version: String,

    #[clap(help = "Firmware binary to upload")]
    pub file: PathBuf,

    #[clap(long, help = "Tag to file the release under")]
    pub tag: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DeleteOpts {
    #[clap(help = "Release id")]
    pub id: u64,
}

#[derive(Parser, Debug)]
pub struct DownloadOpts {
    #[clap(help = "Release tag")]
    pub tag: String,

    #[clap(help = "Release version")]
    pub version: String,

    #[clap(short, long, help = "Destination path (default <version>.bin)")]
    pub output: Option<PathBuf>,
}
