//! Opaque game identifiers
//!
//! Ids are random 128-bit values shown in the hyphenated UUID v4 text form.

use crate::error::ParseGameIdError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const GROUP_LENGTHS: [usize; 5] = [8, 4, 4, 4, 12];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameId(u128);

impl GameId {
    /// Build an id from 128 random bits, stamping the v4 version and variant bits
    pub fn from_random(bits: u128) -> Self {
        let bits = (bits & !(0xF_u128 << 76)) | (0x4_u128 << 76);
        let bits = (bits & !(0x3_u128 << 62)) | (0x2_u128 << 62);
        Self(bits)
    }

    pub fn as_u128(self) -> u128 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v as u64 & 0xFFFF_FFFF_FFFF,
        )
    }
}

impl FromStr for GameId {
    type Err = ParseGameIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups: Vec<&str> = s.split('-').collect();
        let well_formed = groups.len() == GROUP_LENGTHS.len()
            && groups.iter().zip(GROUP_LENGTHS).all(|(group, len)| {
                group.len() == len && group.bytes().all(|b| b.is_ascii_hexdigit())
            });
        if !well_formed {
            return Err(ParseGameIdError(s.to_string()));
        }

        u128::from_str_radix(&groups.concat(), 16)
            .map(GameId)
            .map_err(|_| ParseGameIdError(s.to_string()))
    }
}

impl Serialize for GameId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
