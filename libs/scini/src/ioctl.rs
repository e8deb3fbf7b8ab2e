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

//! Request codes and response layouts of the scini driver
//!
//! The request codes follow the driver's _IO/_IOC encoding. Both supported
//! requests transfer no data through the size field, the driver fills the
//! response structure passed as the ioctl argument instead.
use crate::error::*;
use uuid::Uuid;

/// mask of the size field in a request code
pub const IOCPARM_MASK: u32 = 0x1fff;
/// direction value of a request that transfers no data
pub const IOC_VOID: u32 = 0x0;

/// command group of the scini driver
pub const SCINI_IOCTL_BASE: u8 = b'a';
/// command number of the guid query
pub const SCINI_QUERY_GUID: u8 = 14;
/// command number of the rescan request
pub const SCINI_RESCAN: u8 = 10;

/* The driver reports a valid guid by placing this marker in the leading
 * byte of the return code. */
const GUID_MARKER: u8 = 0x41;

/// Encode a request code from direction, command group, command number and size.
pub const fn ioc(direction: u32, group: u8, number: u8, size: u32) -> u32 {
    direction | ((size & IOCPARM_MASK) << 16) | ((group as u32) << 8) | number as u32
}

/// Encode a request code that transfers no data.
pub const fn io(group: u8, number: u8) -> u32 {
    ioc(IOC_VOID, group, number, 0)
}

/// Response of the guid query, laid out as the driver writes it.
#[repr(C)]
#[derive(Debug, Default)]
pub struct GuidResponse {
    /// return code, the leading byte carries the guid marker
    pub return_code: u64,
    /// guid payload, four words in native byte order
    pub uuid: [u32; 4],
    /// network id magic number
    pub network_id_magic_num: u32,
    /// network id timestamp
    pub network_id_time_stamp: u32,
}

impl GuidResponse {
    /// Check the return code for the guid marker.
    pub fn check_return_code(&self) -> Result<()> {
        if self.return_code.to_ne_bytes()[0] != GUID_MARKER {
            return Err(Error::GuidNotPresented);
        }
        Ok(())
    }

    /// Decode the payload words into a uuid.
    ///
    /// The words are serialized in order, each in native byte order, and the
    /// resulting 16 bytes are the uuid in RFC text order.
    pub fn guid(&self) -> Result<Uuid> {
        let mut bytes = [0u8; 16];
        for (i, word) in self.uuid.iter().enumerate() {
            bytes[i * 4..(i + 1) * 4].copy_from_slice(&word.to_ne_bytes());
        }
        Uuid::from_slice(&bytes).context(ParseUuidSnafu)
    }
}

/// Response of the rescan request.
#[repr(C)]
#[derive(Debug, Default)]
pub struct RescanResponse {
    /// return code, not inspected
    pub return_code: u64,
}
