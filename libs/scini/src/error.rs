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

//! error definitions
use nix::errno::Errno;
use snafu::prelude::*;
#[allow(unused_imports)]
pub use snafu::ResultExt;

/// scini library error
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
#[non_exhaustive]
pub enum Error {
    /// the character device could not be opened
    #[snafu(display("Failed to open character device: {}", source))]
    OpenDevice {
        /// underlying open error
        source: std::io::Error,
    },

    /// the ioctl syscall failed
    #[snafu(display("Failed to send ioctl request: {}", source))]
    SendIoctl {
        /// errno returned by the driver
        source: nix::Error,
    },

    /// the driver response carries no guid
    #[snafu(display("Sdc guid is not presented in response"))]
    GuidNotPresented,

    /// the guid payload could not be converted
    #[snafu(display("Failed to parse sdc uuid: {}", source))]
    ParseUuid {
        /// underlying conversion error
        source: uuid::Error,
    },
}

impl Error {
    /// Translate the error to an error number.
    pub fn get_errno(&self) -> Errno {
        match self {
            Error::OpenDevice { source } => source
                .raw_os_error()
                .map(Errno::from_i32)
                .unwrap_or(Errno::EIO),
            Error::SendIoctl { source } => *source,
            Error::GuidNotPresented => Errno::ENOENT,
            Error::ParseUuid { source: _ } => Errno::EINVAL,
        }
    }
}

///
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_reported_lines() {
        let e = Error::GuidNotPresented;
        assert_eq!(e.to_string(), "Sdc guid is not presented in response");

        let e = Error::SendIoctl {
            source: Errno::ENOTTY,
        };
        assert!(e.to_string().starts_with("Failed to send ioctl request:"));
    }

    #[test]
    fn test_get_errno() {
        assert_eq!(
            Error::SendIoctl {
                source: Errno::EIO
            }
            .get_errno(),
            Errno::EIO
        );
        assert_eq!(Error::GuidNotPresented.get_errno(), Errno::ENOENT);

        let e = Error::OpenDevice {
            source: std::io::Error::from_raw_os_error(libc::EACCES),
        };
        assert_eq!(e.get_errno(), Errno::EACCES);
    }
}
