use std::fmt;
use std::fmt::Formatter;
use serde::Serialize;
use crate::common::common::{bin2hex, hex_to_array};
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl PeerId {
    /// Literal, case-sensitive prefix test on the raw peer id bytes.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }

    /// The Azureus-style client signature (`-AZ2060-`) if the peer id carries one.
    pub fn client_signature(&self) -> Option<&str> {
        if self.0[0] != b'-' || self.0[7] != b'-' {
            return None;
        }
        std::str::from_utf8(&self.0[..8]).ok()
    }
}

impl Serialize for PeerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl std::str::FromStr for PeerId {
    type Err = binascii::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_array(s).map(PeerId)
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = binascii::ConvertError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let bytes = <[u8; 20]>::try_from(data).map_err(|_| binascii::ConvertError::InvalidInputLength)?;
        Ok(PeerId(bytes))
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(data)
    }
}
