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

use clap::{Parser, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// List devices known from retained status messages
    List(ListOpts),
    /// Stream device status changes until interrupted
    Watch,
    /// Request and print a device's diagnostics
    Info(InfoOpts),
    /// Command a device to update to a release
    Update(UpdateOpts),
    /// Remove a device from the fleet (retained tombstone)
    Remove(RemoveOpts),
}

#[derive(Parser, Debug)]
pub struct ListOpts {
    #[clap(
        long,
        default_value("1500"),
        help = "How long to wait for the broker's retained-message replay, in milliseconds"
    )]
    pub wait_ms: u64,
}

#[derive(Parser, Debug)]
pub struct InfoOpts {
    #[clap(help = "Device id")]
    pub device_id: String,

    #[clap(
        long,
        default_value("5"),
        help = "How long to wait for the device's reply, in seconds"
    )]
    pub timeout_secs: u64,
}

#[derive(Parser, Debug)]
pub struct UpdateOpts {
    #[clap(help = "Device id")]
    pub device_id: String,

    #[clap(help = "Release version to update to")]
    pub version: String,

    #[clap(long, help = "Release tag the version lives under")]
    pub tag: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RemoveOpts {
    #[clap(help = "Device id")]
    pub device_id: String,
}
