//! # tls-extension-codec
//!
//! Encoding and decoding of the `extension_data` field of TLS handshake
//! messages.
//!
//! The handshake framing layer splits a message's extension block into
//! `(type, data)` pairs; this crate turns `data` into typed values and back:
//!
//! - **server_name** (RFC 6066)
//! - **application_layer_protocol_negotiation** (RFC 7301)
//! - **signature_algorithms** (RFC 8446)
//! - **supported_versions** (RFC 8446), client list or server selection
//! - **key_share** (RFC 8446), share list or HelloRetryRequest group
//!
//! Identifiers (groups, schemes, versions) and key exchange bytes are opaque:
//! nothing is validated beyond the wire structure.
//!
//! ## Feature Flags
//!
//! - `registry` (default): [`Registry`] dispatch from type code to decoder
//!
//! ## Modules
//!
//! - [`core`]: Capability traits, wire primitives, constants, and error types
//! - [`extensions`]: The concrete extension codecs
//! - [`registry`]: Type registry and convenience constructors (requires
//!   `registry` feature)
//!
//! ## Example Usage
//!
//! ```rust
//! use tls_extension_codec::prelude::*;
//!
//! let mut alpn = AlpnExtension::default();
//! alpn.add_protocol("h2").add_protocol("http/1.1");
//! let data = alpn.encode().unwrap();
//!
//! let registry = Registry::new();
//! let decoded = registry.create(alpn.extension_type(), &data).unwrap();
//! let decoded = decoded.downcast_ref::<AlpnExtension>().unwrap();
//! assert_eq!(decoded.protocols(), alpn.protocols());
//!
//! // Two bytes of key_share data is always a HelloRetryRequest
//! let retry = KeyShareExtension::decode(&[0x00, 0x1D]).unwrap();
//! assert!(retry.is_hello_retry());
//! assert_eq!(retry.selected_group(), Some(0x001D));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core module (always included)
pub mod core;

// Extension codecs (always included)
pub mod extensions;

// Type registry (feature-gated)
#[cfg(feature = "registry")]
#[cfg_attr(docsrs, doc(cfg(feature = "registry")))]
pub mod registry;

/// Prelude module for convenient imports.
pub mod prelude {
    // Core traits and types
    pub use crate::core::*;

    // Extension codecs
    pub use crate::extensions::*;

    // Registry (when enabled)
    #[cfg(feature = "registry")]
    pub use crate::registry::{ExtensionDecoder, Registry, decoder_for};
}

// Re-export commonly used items at crate root
pub use crate::core::{DecodeError, DecodeExtension, EncodeError, ExtensionError, TlsExtension};
pub use extensions::{
    AlpnExtension, ExtensionType, KeyShareEntry, KeyShareExtension, ServerNameExtension,
    SignatureAlgorithmsExtension, SupportedVersionsExtension,
};

#[cfg(feature = "registry")]
pub use registry::Registry;
