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

use super::args::{PublishOpts, TailOpts};
use crate::cfg::runtime::RuntimeContext;

pub async fn tail(ctx: &RuntimeContext, opts: TailOpts) -> eyre::Result<()> {
    let client = ctx.connect_broker().await?;
    let topics = client
        .topics()
        .await
        .ok_or_else(|| eyre::eyre!("broker connection lost"))?;

    for topic in &opts.subscribe {
        client.subscribe(topic).await?;
    }

    let show_all = opts.all;
    let handle = client.on_message(move |message| {
        // Status traffic floods the view; hide it unless asked for.
        if !show_all && topics.is_status_traffic(&message.topic) {
            return;
        }
        println!(
            "{} {} {}",
            message.received_at.format("%H:%M:%S%.3f"),
            message.topic,
            message.payload_text()
        );
    });

    eprintln!("tailing broker traffic, ctrl-c to stop");
    tokio::signal::ctrl_c().await?;
    handle.deregister();
    client.disconnect().await;
    Ok(())
}

pub async fn publish(ctx: &RuntimeContext, opts: PublishOpts) -> eyre::Result<()> {
    let client = ctx.connect_broker().await?;
    client
        .publish(&opts.topic, opts.payload.into_bytes(), opts.retain)
        .await?;
    client.disconnect().await;
    println!("published to {}", opts.topic);
    Ok(())
}
