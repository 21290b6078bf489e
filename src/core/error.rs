//! Error types for TLS extension encoding and decoding.

use thiserror::Error;

/// Errors that can occur when decoding extension data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes remain than a required field needs.
    #[error("truncated data: need {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Bytes required by the field being read.
        needed: usize,
        /// Bytes left in the buffer at the read offset.
        remaining: usize,
    },
}

/// Errors that can occur when encoding extension data.
///
/// Every variant is a wire-format size limit violated at encode time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// ALPN protocol name longer than 255 bytes.
    #[error("protocol name too long: {len} bytes (max 255)")]
    ProtocolNameTooLong {
        /// Length of the offending protocol name.
        len: usize,
    },

    /// Client supported_versions list longer than 254 bytes.
    #[error("version list too long: {len} bytes (max 254)")]
    VersionListTooLong {
        /// Encoded length of the version list.
        len: usize,
    },

    /// Server-role supported_versions has no version to select.
    #[error("server extension must have exactly one selected version")]
    MissingSelectedVersion,

    /// HelloRetryRequest key_share has no selected group.
    #[error("HelloRetryRequest must have a selected group")]
    MissingSelectedGroup,

    /// A length does not fit in its prefix.
    #[error("length {len} does not fit in a {width}-byte length prefix")]
    LengthOverflow {
        /// Length that was to be written.
        len: usize,
        /// Width of the prefix in bytes.
        width: usize,
    },
}

/// Top-level extension errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    /// Decode error.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Encode error.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// No decoder registered for the type code.
    #[error("unknown extension type: 0x{0:04X}")]
    UnknownExtensionType(u16),

    /// Decoder does not satisfy the extension contract for the code it was
    /// registered under.
    #[error("invalid registration for 0x{type_code:04X}: decoder produces 0x{declared:04X}")]
    InvalidRegistration {
        /// Code the decoder was registered under.
        type_code: u16,
        /// Extension type the decoder declares.
        declared: u16,
    },
}

/// Result alias defaulting to [`ExtensionError`].
pub type Result<T, E = ExtensionError> = std::result::Result<T, E>;
