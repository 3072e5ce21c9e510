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

pub mod args;
pub mod cmds;

#[cfg(test)]
mod tests;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for args::Cmd {
    async fn dispatch(self, ctx: RuntimeContext) -> eyre::Result<()> {
        match self {
            args::Cmd::List(opts) => cmds::list(&ctx, opts).await,
            args::Cmd::Watch => cmds::watch(&ctx).await,
            args::Cmd::Info(opts) => cmds::info(&ctx, opts).await,
            args::Cmd::Update(opts) => cmds::update(&ctx, opts).await,
            args::Cmd::Remove(opts) => cmds::remove(&ctx, opts).await,
        }
    }
}
