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

use std::sync::Arc;
use std::time::Duration;

use broker::message_types::{DeviceCommand, DeviceInfo};
use eyre::WrapErr;
use tokio::sync::mpsc;

use super::args::{InfoOpts, ListOpts, RemoveOpts, UpdateOpts};
use crate::cfg::runtime::RuntimeContext;

// compose_version builds the version string devices expect in an
// update command: "<tag>/<version>" on tagged deployments, the bare
// version otherwise.
pub fn compose_version(version: &str, tag: Option<&str>) -> String {
    match tag {
        Some(tag) => format!("{tag}/{version}"),
        None => version.to_string(),
    }
}

pub async fn list(ctx: &RuntimeContext, opts: ListOpts) -> eyre::Result<()> {
    let client = ctx.connect_broker().await?;
    // The registry fills from the broker's retained-message replay;
    // give it a moment to arrive.
    tokio::time::sleep(Duration::from_millis(opts.wait_ms)).await;

    let devices = client.devices();
    client.disconnect().await;

    if devices.is_empty() {
        println!("no devices");
        return Ok(());
    }
    println!("{:<24} {:<10} {}", "DEVICE", "STATUS", "VERSION");
    for device in devices {
        println!(
            "{:<24} {:<10} {}",
            device.device_id(),
            device.status(),
            device.version().unwrap_or("-")
        );
    }
    Ok(())
}

pub async fn watch(ctx: &RuntimeContext) -> eyre::Result<()> {
    let client = Arc::new(ctx.connect_broker().await?);
    let topics = client
        .topics()
        .await
        .ok_or_else(|| eyre::eyre!("broker connection lost"))?;

    let lookup = client.clone();
    let handle = client.on_message(move |message| {
        let Some(device_id) = topics.device_from_status_topic(&message.topic) else {
            return;
        };
        if message.is_tombstone() {
            println!("{device_id:<24} removed");
            return;
        }
        // The registry was updated before listeners fired, so the
        // record reflects this message.
        if let Some(record) = lookup.device(device_id) {
            println!(
                "{:<24} {:<10} {}",
                record.device_id(),
                record.status(),
                record.version().unwrap_or("-")
            );
        }
    });

    eprintln!("watching devices, ctrl-c to stop");
    tokio::signal::ctrl_c().await?;
    handle.deregister();
    client.disconnect().await;
    Ok(())
}

pub async fn info(ctx: &RuntimeContext, opts: InfoOpts) -> eyre::Result<()> {
    let client = ctx.connect_broker().await?;
    let topics = client
        .topics()
        .await
        .ok_or_else(|| eyre::eyre!("broker connection lost"))?;

    let (tx, mut rx) = mpsc::unbounded_channel::<DeviceInfo>();
    let device_id = opts.device_id.clone();
    let handle = client.on_message(move |message| {
        if topics.device_from_info_topic(&message.topic) != Some(device_id.as_str()) {
            return;
        }
        if let Ok(info) = serde_json::from_slice::<DeviceInfo>(&message.payload) {
            let _ = tx.send(info);
        }
    });

    client.send_command(&opts.device_id, &DeviceCommand::Info).await?;

    let reply = tokio::time::timeout(Duration::from_secs(opts.timeout_secs), rx.recv())
        .await
        .wrap_err_with(|| format!("no reply from '{}'", opts.device_id))?;
    handle.deregister();
    client.disconnect().await;

    let info = reply.ok_or_else(|| eyre::eyre!("no reply from '{}'", opts.device_id))?;
    println!("device:        {}", info.device_id);
    println!("mac:           {}", info.mac_address);
    println!("firmware:      {}", info.firmware_version);
    println!("ip:            {}", info.ip_address);
    println!("wifi ssid:     {}", info.wifi_ssid);
    println!("wifi strength: {} dBm", info.wifi_strength);
    println!("free heap:     {} bytes", info.free_heap);
    println!("uptime:        {}", info.uptime_human());
    Ok(())
}

pub async fn update(ctx: &RuntimeContext, opts: UpdateOpts) -> eyre::Result<()> {
    let version = compose_version(&opts.version, opts.tag.as_deref());
    let client = ctx.connect_broker().await?;
    client
        .send_command(
            &opts.device_id,
            &DeviceCommand::Update {
                version: version.clone(),
            },
        )
        .await?;
    client.disconnect().await;
    println!("told '{}' to update to {version}", opts.device_id);
    Ok(())
}

pub async fn remove(ctx: &RuntimeContext, opts: RemoveOpts) -> eyre::Result<()> {
    let client = ctx.connect_broker().await?;
    // Tell the device to reset, then clear its retained status so
    // every console forgets it.
    client
        .send_command(&opts.device_id, &DeviceCommand::Delete)
        .await?;
    client.remove_device(&opts.device_id).await?;
    client.disconnect().await;
    println!("removed '{}'", opts.device_id);
    Ok(())
}
