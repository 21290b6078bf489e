//! key_share extension (0x0033, RFC 8446 section 4.2.8)
//!
//! Two wire shapes, told apart only by the total data length:
//! ```text
//! ClientHello / ServerHello:
//!   +0  Key share list length (2 bytes BE16)
//!   +2  Entries, repeated:
//!         group               (2 bytes BE16)
//!         key_exchange_length (2 bytes BE16)
//!         key_exchange        (key_exchange_length bytes)
//!
//! HelloRetryRequest:
//!   +0  Selected group (2 bytes BE16), nothing else
//! ```
//!
//! Data of exactly 2 bytes always decodes as HelloRetryRequest. An empty share
//! list encodes to `00 00`, which therefore reads back as a HelloRetryRequest
//! selecting group 0; an empty list is never produced by [`decode`].
//!
//! Key exchange bytes are opaque and never validated.
//!
//! [`decode`]: DecodeExtension::decode

use tracing::trace;

use crate::core::constants::SINGLE_U16_DATA_LEN;
use crate::core::wire::{self, PrefixWidth};
use crate::core::{DecodeError, DecodeExtension, EncodeError, TlsExtension, version_at_least};

use super::extension_type::ExtensionType;

/// A single `(group, key_exchange)` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyShareEntry {
    /// Named group id.
    pub group: u16,
    /// Public key exchange material.
    pub key_exchange: Vec<u8>,
}

impl KeyShareEntry {
    /// Create an entry.
    pub fn new(group: u16, key_exchange: impl Into<Vec<u8>>) -> Self {
        Self {
            group,
            key_exchange: key_exchange.into(),
        }
    }

    /// Encoded size of this entry.
    pub fn wire_size(&self) -> usize {
        2 + 2 + self.key_exchange.len()
    }
}

/// Key shares offered (ClientHello), chosen (ServerHello), or the group
/// requested by a HelloRetryRequest.
///
/// In HelloRetryRequest mode only `selected_group` is encoded; any key shares
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyShareExtension {
    key_shares: Vec<KeyShareEntry>,
    is_hello_retry: bool,
    selected_group: Option<u16>,
}

impl KeyShareExtension {
    /// Create with explicit contents.
    ///
    /// A HelloRetryRequest without `selected_group` can be built but fails to
    /// encode.
    pub fn new(
        key_shares: impl Into<Vec<KeyShareEntry>>,
        is_hello_retry: bool,
        selected_group: Option<u16>,
    ) -> Self {
        Self {
            key_shares: key_shares.into(),
            is_hello_retry,
            selected_group,
        }
    }

    /// Create from a list of key shares.
    pub fn with_shares(key_shares: impl Into<Vec<KeyShareEntry>>) -> Self {
        Self::new(key_shares, false, None)
    }

    /// HelloRetryRequest form selecting `group`.
    pub fn hello_retry(group: u16) -> Self {
        Self::new(Vec::<KeyShareEntry>::new(), true, Some(group))
    }

    /// Append a key share. Entries with the same group are all kept.
    pub fn add_key_share(&mut self, group: u16, key_exchange: impl Into<Vec<u8>>) -> &mut Self {
        self.key_shares.push(KeyShareEntry::new(group, key_exchange));
        self
    }

    /// Key shares in insertion order.
    pub fn key_shares(&self) -> &[KeyShareEntry] {
        &self.key_shares
    }

    /// First key share for `group`.
    pub fn find(&self, group: u16) -> Option<&KeyShareEntry> {
        self.key_shares.iter().find(|entry| entry.group == group)
    }

    /// `true` for the HelloRetryRequest form.
    pub fn is_hello_retry(&self) -> bool {
        self.is_hello_retry
    }

    /// Group requested by a HelloRetryRequest.
    pub fn selected_group(&self) -> Option<u16> {
        self.selected_group
    }
}

impl TlsExtension for KeyShareExtension {
    fn extension_type(&self) -> u16 {
        Self::EXTENSION_TYPE
    }

    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        if self.is_hello_retry {
            let group = self.selected_group.ok_or(EncodeError::MissingSelectedGroup)?;
            return Ok(wire::encode_u16(group).to_vec());
        }

        let list_len: usize = self.key_shares.iter().map(KeyShareEntry::wire_size).sum();
        let mut buf = Vec::with_capacity(2 + list_len);
        wire::encode_length(PrefixWidth::U16, list_len, &mut buf)?;
        for entry in &self.key_shares {
            buf.extend_from_slice(&wire::encode_u16(entry.group));
            wire::encode_length_prefixed(PrefixWidth::U16, &entry.key_exchange, &mut buf)?;
        }
        Ok(buf)
    }

    fn is_applicable(&self, version: &str) -> bool {
        version_at_least(version, "1.3")
    }
}

impl DecodeExtension for KeyShareExtension {
    const EXTENSION_TYPE: u16 = ExtensionType::KeyShare.as_u16();

    fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() == SINGLE_U16_DATA_LEN {
            let (group, _) = wire::decode_u16(data, 0)?;
            trace!(group, "key_share: 2-byte data, HelloRetryRequest form");
            return Ok(Self::hello_retry(group));
        }

        let (list, end) = wire::decode_length_prefixed(PrefixWidth::U16, data, 0)?;
        super::trace_trailing("key_share", data, end);

        let mut ext = Self::default();
        let mut offset = 0;
        while offset < list.len() {
            let (group, next) = wire::decode_u16(list, offset)?;
            let (key_exchange, next) = wire::decode_length_prefixed(PrefixWidth::U16, list, next)?;
            ext.add_key_share(group, key_exchange);
            offset = next;
        }

        Ok(ext)
    }
}
