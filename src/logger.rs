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

//! Console logging behind the `log` facade
use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;

/* Log messages go to stderr, stdout only carries command responses. */
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let module_path = match record.module_path() {
            None => "unknown",
            Some(v) => v,
        };
        let mut stderr = std::io::stderr();
        write_msg(&mut stderr, module_path, record.args().to_string());
    }

    fn flush(&self) {}
}

fn write_msg(writer: &mut impl Write, module: &str, msg: String) {
    let time: libc::time_t = unsafe { libc::time(std::ptr::null_mut()) };
    let now = unsafe { libc::localtime(&time) };
    let now_str = unsafe {
        format!(
            "{:0>4}-{:0>2}-{:0>2} {:0>2}:{:0>2}:{:0>2} ",
            (*now).tm_year + 1900, /* tm_year is years since 1900 */
            (*now).tm_mon + 1,     /* tm_mon is months since Jan: [0, 11] */
            (*now).tm_mday,
            (*now).tm_hour,
            (*now).tm_min,
            (*now).tm_sec
        )
    };

    if let Err(e) = writeln!(writer, "{}{} {}", now_str, module, msg) {
        println!("Failed to log message: {}", e);
    }
}

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the global console logger with the given level.
pub fn init_log(name: &str, level: LevelFilter) {
    if let Err(e) = log::set_logger(&CONSOLE_LOGGER) {
        eprintln!("{}: failed to set global logger: {:?}", name, e);
        return;
    }
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_log() {
        init_log("test", LevelFilter::Debug);
        log::error!("hello, error!");
        log::set_max_level(LevelFilter::Info);
        log::debug!("hello, debug!"); /* Won't print */
    }
}
