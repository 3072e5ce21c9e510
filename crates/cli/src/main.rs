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

// fleetdeck: terminal console for an MQTT-managed device fleet.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod auth;
mod cfg;
mod console;
mod device;
mod release;

use cfg::dispatch::Dispatch;
use cfg::runtime::RuntimeContext;

#[derive(Parser, Debug)]
#[command(name = "fleetdeck", about = "Device fleet console", version)]
struct Cli {
    #[clap(
        long,
        env = "FLEETDECK_GATEWAY_URL",
        default_value = "http://localhost:3000",
        help = "Base URL of the fleetdeck backend"
    )]
    gateway_url: String,

    #[clap(
        long,
        env = "FLEETDECK_TOKEN_FILE",
        help = "Where the session token is persisted (default ~/.fleetdeck/token)"
    )]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Sign in, sign out, show the current profile
    #[command(subcommand)]
    Auth(auth::args::Cmd),
    /// Inspect and manage fleet devices
    #[command(subcommand)]
    Device(device::args::Cmd),
    /// Tail raw broker traffic or publish one-off messages
    #[command(subcommand)]
    Console(console::args::Cmd),
    /// Manage the firmware release catalog
    #[command(subcommand)]
    Release(release::args::Cmd),
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = RuntimeContext::build(&cli.gateway_url, cli.token_file)?;

    match cli.cmd {
        Cmd::Auth(cmd) => cmd.dispatch(ctx).await,
        Cmd::Device(cmd) => cmd.dispatch(ctx).await,
        Cmd::Console(cmd) => cmd.dispatch(ctx).await,
        Cmd::Release(cmd) => cmd.dispatch(ctx).await,
    }
}
