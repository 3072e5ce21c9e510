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

use clap::Parser;

use super::args::Cmd;
use super::cmds::default_output;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[test]
fn upload_args_parse() {
    let cli = TestCli::try_parse_from([
        "release", "upload", "1.4", "fw.bin", "--tag", "stable",
    ])
    .unwrap();
    match cli.cmd {
        Cmd::Upload(opts) => {
            assert_eq!(opts.version, "1.4");
            assert_eq!(opts.tag.as_deref(), Some("stable"));
            assert_eq!(opts.file.to_str(), Some("fw.bin"));
        }
        other => panic!("parsed as {other:?}"),
    }
}

#[test]
fn download_defaults_output_to_version() {
    let cli = TestCli::try_parse_from(["release", "download", "stable", "1.4"]).unwrap();
    match cli.cmd {
        Cmd::Download(opts) => {
            assert!(opts.output.is_none());
            assert_eq!(default_output(&opts.version).to_str(), Some("1.4.bin"));
        }
        other => panic!("parsed as {other:?}"),
    }
}
