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
            args::Cmd::List => cmds::list(&ctx).await,
            args::Cmd::Latest(opts) => cmds::latest(&ctx, opts).await,
            args::Cmd::Upload(opts) => cmds::upload(&ctx, opts).await,
            args::Cmd::Delete(opts) => cmds::delete(&ctx, opts).await,
            args::Cmd::Download(opts) => cmds::download(&ctx, opts).await,
        }
    }
}
