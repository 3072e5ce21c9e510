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
    /// Print broker traffic as it arrives
    Tail(TailOpts),
    /// Publish a one-off message
    Publish(PublishOpts),
}

#[derive(Parser, Debug)]
pub struct TailOpts {
    #[clap(long, help = "Include device status traffic (hidden by default)")]
    pub all: bool,

    #[clap(
        short,
        long = "subscribe",
        help = "Extra topic filter to subscribe to; repeatable"
    )]
    pub subscribe: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct PublishOpts {
    #[clap(help = "Topic to publish to")]
    pub topic: String,

    #[clap(help = "Payload text")]
    pub payload: String,

    #[clap(long, help = "Set the retain flag")]
    pub retain: bool,
}
