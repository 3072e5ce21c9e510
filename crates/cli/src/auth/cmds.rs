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

use super::args::LoginOpts;
use crate::cfg::runtime::RuntimeContext;

pub async fn login(ctx: &RuntimeContext, opts: LoginOpts) -> eyre::Result<()> {
    ctx.settle(ctx.gateway.login(&opts.username, &opts.password).await)?;
    ctx.persist_token()?;
    match ctx.gateway.session().username() {
        Some(name) => println!("signed in as {name}"),
        None => println!("signed in"),
    }
    Ok(())
}

pub fn logout(ctx: &RuntimeContext) -> eyre::Result<()> {
    ctx.gateway.logout();
    ctx.forget_token();
    println!("signed out");
    Ok(())
}

pub async fn profile(ctx: &RuntimeContext) -> eyre::Result<()> {
    let profile = ctx.settle(ctx.gateway.profile().await)?;
    println!("id:       {}", profile.id);
    println!("username: {}", profile.username);
    Ok(())
}
