//! application_layer_protocol_negotiation extension (0x0010, RFC 7301)
//!
//! Wire format for extension data:
//! ```text
//! +0  Protocol name list length (2 bytes BE16)
//! +2  Entries, repeated:
//!       proto_length (1 byte)
//!       proto        (proto_length bytes)
//! ```
//!
//! Protocol names are opaque byte strings. The 255-byte limit is only checked
//! at encode time.

use crate::core::constants::MAX_ALPN_PROTOCOL_LEN;
use crate::core::wire::{self, PrefixWidth};
use crate::core::{DecodeError, DecodeExtension, EncodeError, TlsExtension};

use super::extension_type::ExtensionType;

/// Application-Layer Protocol Negotiation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlpnExtension {
    protocols: Vec<Vec<u8>>,
}

impl AlpnExtension {
    /// Create with the given protocols, kept as-is (duplicates included).
    pub fn new<I, P>(protocols: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Vec<u8>>,
    {
        Self {
            protocols: protocols.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a protocol unless it is already listed.
    pub fn add_protocol(&mut self, protocol: impl Into<Vec<u8>>) -> &mut Self {
        let protocol = protocol.into();
        if !self.protocols.contains(&protocol) {
            self.protocols.push(protocol);
        }
        self
    }

    /// Protocols in wire order.
    pub fn protocols(&self) -> &[Vec<u8>] {
        &self.protocols
    }

    /// Check if `protocol` is listed.
    pub fn contains(&self, protocol: impl AsRef<[u8]>) -> bool {
        let protocol = protocol.as_ref();
        self.protocols.iter().any(|p| p == protocol)
    }
}

impl TlsExtension for AlpnExtension {
    fn extension_type(&self) -> u16 {
        Self::EXTENSION_TYPE
    }

    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut list = Vec::new();
        for protocol in &self.protocols {
            if protocol.len() > MAX_ALPN_PROTOCOL_LEN {
                return Err(EncodeError::ProtocolNameTooLong {
                    len: protocol.len(),
                });
            }
            wire::encode_length_prefixed(PrefixWidth::U8, protocol, &mut list)?;
        }

        let mut buf = Vec::with_capacity(2 + list.len());
        wire::encode_length_prefixed(PrefixWidth::U16, &list, &mut buf)?;
        Ok(buf)
    }
}

impl DecodeExtension for AlpnExtension {
    const EXTENSION_TYPE: u16 = ExtensionType::Alpn.as_u16();

    fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (list, end) = wire::decode_length_prefixed(PrefixWidth::U16, data, 0)?;
        super::trace_trailing("alpn", data, end);

        let mut protocols = Vec::new();
        let mut offset = 0;
        while offset < list.len() {
            let (protocol, next) = wire::decode_length_prefixed(PrefixWidth::U8, list, offset)?;
            protocols.push(protocol.to_vec());
            offset = next;
        }

        Ok(Self { protocols })
    }
}
