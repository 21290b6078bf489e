//! server_name extension (0x0000, RFC 6066 section 3)
//!
//! Wire format for extension data:
//! ```text
//! +0  Server name list length (2 bytes BE16)
//! +2  Entries, repeated until the list length is consumed:
//!       name_type   (1 byte)
//!       name_length (2 bytes BE16)
//!       name        (name_length bytes)
//! ```
//!
//! Entries are keyed by name type. Adding (or decoding) a name type that is
//! already present replaces the name in place, so the original position is
//! kept for re-encoding.

use crate::core::constants::NAME_TYPE_HOST_NAME;
use crate::core::wire::{self, PrefixWidth};
use crate::core::{DecodeError, DecodeExtension, EncodeError, TlsExtension};

use super::extension_type::ExtensionType;

/// Server Name Indication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerNameExtension {
    names: Vec<(u8, Vec<u8>)>,
}

impl ServerNameExtension {
    /// Create an empty extension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from `(name_type, name)` pairs. Later pairs overwrite earlier
    /// ones with the same name type.
    pub fn from_names<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = (u8, N)>,
        N: Into<Vec<u8>>,
    {
        let mut ext = Self::new();
        for (name_type, name) in names {
            ext.add(name, name_type);
        }
        ext
    }

    /// Set the name for `name_type`, replacing any existing one.
    pub fn add(&mut self, name: impl Into<Vec<u8>>, name_type: u8) -> &mut Self {
        let name = name.into();
        if let Some(existing) = self.names.iter_mut().find(|(t, _)| *t == name_type) {
            existing.1 = name;
        } else {
            self.names.push((name_type, name));
        }
        self
    }

    /// Set the DNS host name (name type 0).
    pub fn add_host_name(&mut self, name: impl Into<Vec<u8>>) -> &mut Self {
        self.add(name, NAME_TYPE_HOST_NAME)
    }

    /// All entries in insertion order.
    pub fn server_names(&self) -> &[(u8, Vec<u8>)] {
        &self.names
    }

    /// Name registered for `name_type`.
    pub fn get(&self, name_type: u8) -> Option<&[u8]> {
        self.names
            .iter()
            .find(|(t, _)| *t == name_type)
            .map(|(_, name)| name.as_slice())
    }

    /// The host name, if present and valid UTF-8.
    pub fn host_name(&self) -> Option<&str> {
        self.get(NAME_TYPE_HOST_NAME)
            .and_then(|name| std::str::from_utf8(name).ok())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl TlsExtension for ServerNameExtension {
    fn extension_type(&self) -> u16 {
        Self::EXTENSION_TYPE
    }

    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut list = Vec::new();
        for (name_type, name) in &self.names {
            list.push(*name_type);
            wire::encode_length_prefixed(PrefixWidth::U16, name, &mut list)?;
        }

        let mut buf = Vec::with_capacity(2 + list.len());
        wire::encode_length_prefixed(PrefixWidth::U16, &list, &mut buf)?;
        Ok(buf)
    }
}

impl DecodeExtension for ServerNameExtension {
    const EXTENSION_TYPE: u16 = ExtensionType::ServerName.as_u16();

    fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (list, end) = wire::decode_length_prefixed(PrefixWidth::U16, data, 0)?;
        super::trace_trailing("server_name", data, end);

        let mut ext = Self::new();
        let mut offset = 0;
        while offset < list.len() {
            let (name_type, next) = wire::decode_u8(list, offset)?;
            let (name, next) = wire::decode_length_prefixed(PrefixWidth::U16, list, next)?;
            ext.add(name, name_type);
            offset = next;
        }

        Ok(ext)
    }
}
