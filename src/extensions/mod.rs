//! TLS extension codecs
//!
//! Each module owns one extension's data layout. The data handed to
//! `decode` is the extension body only; the `(type, length)` header belongs to
//! the enclosing handshake message.
//!
//! | ID     | Module                 | RFC        |
//! |--------|------------------------|------------|
//! | 0x0000 | `server_name`          | RFC 6066   |
//! | 0x000D | `signature_algorithms` | RFC 8446   |
//! | 0x0010 | `alpn`                 | RFC 7301   |
//! | 0x002B | `supported_versions`   | RFC 8446   |
//! | 0x0033 | `key_share`            | RFC 8446   |
//!
//! Decoders stop at the declared list length; bytes after it are ignored.

mod alpn;
mod extension_type;
mod key_share;
mod server_name;
mod signature_algorithms;
mod supported_versions;

pub use alpn::*;
pub use extension_type::*;
pub use key_share::*;
pub use server_name::*;
pub use signature_algorithms::*;
pub use supported_versions::*;

fn trace_trailing(extension: &'static str, data: &[u8], end: usize) {
    if end < data.len() {
        tracing::trace!(
            extension,
            trailing = data.len() - end,
            "ignoring bytes after declared list length"
        );
    }
}
