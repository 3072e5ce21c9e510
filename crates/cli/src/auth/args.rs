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
    /// Sign in and persist the session token
    Login(LoginOpts),
    /// Drop the stored session
    Logout,
    /// Show the signed-in user's profile
    Profile,
}

#[derive(Parser, Debug)]
pub struct LoginOpts {
    #[clap(short, long, help = "Backend username")]
    pub username: String,

    #[clap(
        short,
        long,
        env = "FLEETDECK_PASSWORD",
        hide_env_values = true,
        help = "Backend password"
    )]
    pub password: String,
}
