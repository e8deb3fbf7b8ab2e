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

//! Scoped access to the scini character device
use crate::error::*;
use crate::ioctl::{
    io, GuidResponse, RescanResponse, SCINI_IOCTL_BASE, SCINI_QUERY_GUID, SCINI_RESCAN,
};
use nix::errno::Errno;
use std::fs::{File, OpenOptions};
use std::os::unix::io::AsRawFd;
use uuid::Uuid;

/// path of the character device created by the sdc kernel module
pub const SCINI_PATH: &str = "/dev/scini";

/// An open handle to the scini device.
///
/// The handle owns the file descriptor and closes it on drop, whether the
/// request that follows succeeds or fails.
#[derive(Debug)]
pub struct SciniDevice {
    file: File,
}

impl SciniDevice {
    /// Open the scini device read/write.
    pub fn open() -> Result<Self> {
        Self::open_path(SCINI_PATH)
    }

    /// Open a scini device at the given path.
    pub fn open_path(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .context(OpenDeviceSnafu)?;
        log::debug!("opened {}", path);
        Ok(SciniDevice { file })
    }

    /// Send one ioctl request, the driver fills `response` in place.
    fn ioctl<T>(&self, op_code: u32, response: &mut T) -> Result<()> {
        log::debug!("sending ioctl request {:#x}", op_code);
        let r = unsafe {
            libc::ioctl(
                self.file.as_raw_fd(),
                op_code as libc::c_ulong,
                response as *mut T as *mut libc::c_void,
            )
        };
        Errno::result(r).context(SendIoctlSnafu)?;
        Ok(())
    }

    /// Query the unique id of the sdc kernel module.
    pub fn query_guid(&self) -> Result<Uuid> {
        let mut response = GuidResponse::default();
        self.ioctl(io(SCINI_IOCTL_BASE, SCINI_QUERY_GUID), &mut response)?;
        response.check_return_code()?;
        response.guid()
    }

    /// Force a configuration rescan against all known MDMs.
    ///
    /// The return code in the response is not inspected, a successful ioctl
    /// is the success criterion.
    pub fn rescan(&self) -> Result<()> {
        let mut response = RescanResponse::default();
        self.ioctl(io(SCINI_IOCTL_BASE, SCINI_RESCAN), &mut response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn has_scini() -> bool {
        Path::new(SCINI_PATH).exists()
    }

    #[test]
    fn test_open_missing_device() {
        let e = SciniDevice::open_path("/dev/scini-does-not-exist").unwrap_err();
        assert!(e
            .to_string()
            .starts_with("Failed to open character device:"));
        assert_eq!(e.get_errno(), Errno::ENOENT);
    }

    #[test]
    fn test_ioctl_on_wrong_device() {
        /* /dev/null accepts the open but rejects the request */
        let device = SciniDevice::open_path("/dev/null").unwrap();
        let e = device.rescan().unwrap_err();
        assert!(e.to_string().starts_with("Failed to send ioctl request:"));
    }

    #[test]
    fn test_query_guid() {
        if !has_scini() {
            return;
        }
        if !nix::unistd::getuid().is_root() {
            println!("Unprivileged users cannot query the sdc guid, skipping.");
            return;
        }
        let device = SciniDevice::open().unwrap();
        let guid = device.query_guid().unwrap();
        assert!(!guid.is_nil());
    }

    #[test]
    fn test_rescan() {
        if !has_scini() {
            return;
        }
        if !nix::unistd::getuid().is_root() {
            println!("Unprivileged users cannot trigger a rescan, skipping.");
            return;
        }
        let device = SciniDevice::open().unwrap();
        device.rescan().unwrap();
    }
}
