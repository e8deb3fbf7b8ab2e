// Copyright (c) 2022 Huawei Technologies Co.,Ltd. All rights reserved.
//
// sysMaster is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan
// PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//         http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY
// KIND, EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO
// NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! # drv_cfg
//!
//! Control utility of the sdc kernel module. Queries the module's unique id
//! or forces a configuration rescan through the scini character device.

mod logger;

use clap::{ArgGroup, Parser};
use scini::SciniDevice;
use std::process::exit;

/// parse program arguments
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(rename_all = "snake_case")]
#[clap(group(ArgGroup::new("operation").required(true).args(&["query_guid", "rescan"])))]
struct Args {
    /// Get the unique ID of the kernel module
    #[clap(long)]
    query_guid: bool,

    /// Forces a configuration rescan operation against all known MDMs.
    #[clap(long)]
    rescan: bool,
}

fn run(args: &Args) -> scini::Result<()> {
    let device = SciniDevice::open()?;

    if args.query_guid {
        let guid = device.query_guid()?;
        println!("{}", guid.hyphenated().to_string().to_uppercase());
    } else {
        device.rescan()?;
    }
    Ok(())
}

fn main() {
    logger::init_log("drv_cfg", log::LevelFilter::Info);

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_operation_parses() {
        let args = Args::try_parse_from(["drv_cfg", "--query_guid"]).unwrap();
        assert!(args.query_guid);
        assert!(!args.rescan);

        let args = Args::try_parse_from(["drv_cfg", "--rescan"]).unwrap();
        assert!(args.rescan);
        assert!(!args.query_guid);
    }

    #[test]
    fn test_operations_are_exclusive() {
        assert!(Args::try_parse_from(["drv_cfg", "--query_guid", "--rescan"]).is_err());
    }

    #[test]
    fn test_operation_is_required() {
        assert!(Args::try_parse_from(["drv_cfg"]).is_err());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["drv_cfg", "--scan"]).is_err());
    }
}
