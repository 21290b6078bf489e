//! supported_versions extension (0x002B, RFC 8446 section 4.2.1)
//!
//! Two wire shapes, told apart only by the total data length:
//! ```text
//! ClientHello:  +0  Version list length (1 byte)
//!               +1  Versions (2 bytes BE16 each)
//!
//! ServerHello:  +0  Selected version (2 bytes BE16), nothing else
//! ```
//!
//! Data of exactly 2 bytes always decodes as the server form. A client list
//! holding one version would be 3 bytes (prefix + version), so real client
//! lists never collide with it.

use tracing::trace;

use crate::core::constants::{MAX_SUPPORTED_VERSIONS_LEN, SINGLE_U16_DATA_LEN};
use crate::core::wire::{self, PrefixWidth};
use crate::core::{DecodeError, DecodeExtension, EncodeError, TlsExtension, version_at_least};

use super::extension_type::ExtensionType;

/// Protocol versions offered by a client, or the one selected by a server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedVersionsExtension {
    versions: Vec<u16>,
    is_server_role: bool,
}

impl SupportedVersionsExtension {
    /// Create with the given versions and role.
    ///
    /// In server role only the first version is encoded.
    pub fn new(versions: impl Into<Vec<u16>>, is_server_role: bool) -> Self {
        Self {
            versions: versions.into(),
            is_server_role,
        }
    }

    /// Client-role list of offered versions.
    pub fn client(versions: impl Into<Vec<u16>>) -> Self {
        Self::new(versions, false)
    }

    /// Server-role extension carrying the selected version.
    pub fn server(selected: u16) -> Self {
        Self::new(vec![selected], true)
    }

    /// Append a version unless it is already listed.
    pub fn add_version(&mut self, version: u16) -> &mut Self {
        if !self.versions.contains(&version) {
            self.versions.push(version);
        }
        self
    }

    /// Versions in wire order.
    pub fn versions(&self) -> &[u16] {
        &self.versions
    }

    /// `true` for the ServerHello form.
    pub fn is_server_role(&self) -> bool {
        self.is_server_role
    }

    /// Version chosen by the server (first entry) in server role.
    pub fn selected_version(&self) -> Option<u16> {
        if self.is_server_role {
            self.versions.first().copied()
        } else {
            None
        }
    }
}

impl TlsExtension for SupportedVersionsExtension {
    fn extension_type(&self) -> u16 {
        Self::EXTENSION_TYPE
    }

    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        if self.is_server_role {
            let selected = self
                .versions
                .first()
                .ok_or(EncodeError::MissingSelectedVersion)?;
            return Ok(wire::encode_u16(*selected).to_vec());
        }

        let list_len = self.versions.len() * 2;
        if list_len > MAX_SUPPORTED_VERSIONS_LEN {
            return Err(EncodeError::VersionListTooLong { len: list_len });
        }

        let mut buf = Vec::with_capacity(1 + list_len);
        wire::encode_length(PrefixWidth::U8, list_len, &mut buf)?;
        for version in &self.versions {
            buf.extend_from_slice(&wire::encode_u16(*version));
        }
        Ok(buf)
    }

    fn is_applicable(&self, version: &str) -> bool {
        version_at_least(version, "1.3")
    }
}

impl DecodeExtension for SupportedVersionsExtension {
    const EXTENSION_TYPE: u16 = ExtensionType::SupportedVersions.as_u16();

    fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() == SINGLE_U16_DATA_LEN {
            let (selected, _) = wire::decode_u16(data, 0)?;
            trace!(selected, "supported_versions: 2-byte data, server form");
            return Ok(Self::server(selected));
        }

        let (list, end) = wire::decode_length_prefixed(PrefixWidth::U8, data, 0)?;
        super::trace_trailing("supported_versions", data, end);

        let mut versions = Vec::with_capacity(list.len() / 2);
        let mut offset = 0;
        while offset < list.len() {
            let (version, next) = wire::decode_u16(list, offset)?;
            versions.push(version);
            offset = next;
        }

        Ok(Self::client(versions))
    }
}
