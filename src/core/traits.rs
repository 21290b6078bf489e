//! The extension capability contract.
//!
//! Every extension, built-in or registered by the caller, implements
//! [`TlsExtension`]. Types that can be built from wire data also implement
//! [`DecodeExtension`].

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use super::error::{DecodeError, EncodeError};

/// Upcast to [`Any`] so type-erased extensions can be downcast.
///
/// Implemented for every `'static` type; never implement it by hand.
pub trait AsAny: Any {
    /// View as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A TLS extension that knows its type code and how to serialize itself.
///
/// # Example
///
/// ```
/// use tls_extension_codec::prelude::*;
///
/// #[derive(Debug)]
/// struct Opaque(Vec<u8>);
///
/// impl TlsExtension for Opaque {
///     fn extension_type(&self) -> u16 {
///         0xFF00
///     }
///
///     fn encode(&self) -> Result<Vec<u8>, EncodeError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let ext = Opaque(vec![1, 2, 3]);
/// assert!(ext.is_applicable("1.2"));
/// assert_eq!(ext.encode().unwrap(), [1, 2, 3]);
/// ```
pub trait TlsExtension: AsAny + fmt::Debug + Send + Sync {
    /// 16-bit IANA extension type code.
    fn extension_type(&self) -> u16;

    /// Serialize the extension data (without the type/length header).
    fn encode(&self) -> Result<Vec<u8>, EncodeError>;

    /// Whether this extension may be sent for the given TLS version
    /// (dotted form, e.g. `"1.2"`).
    fn is_applicable(&self, version: &str) -> bool {
        let _ = version;
        true
    }
}

impl dyn TlsExtension {
    /// Returns `true` if the erased extension is a `T`.
    pub fn is<T: TlsExtension>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcast to the concrete extension type.
    pub fn downcast_ref<T: TlsExtension>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// An extension that can be parsed from its wire data.
pub trait DecodeExtension: TlsExtension + Sized {
    /// Type code carried by every decoded instance.
    const EXTENSION_TYPE: u16;

    /// Parse extension data. Either the whole value is decoded or an error is
    /// returned.
    fn decode(data: &[u8]) -> Result<Self, DecodeError>;
}

/// Compare dotted version strings numerically, component by component.
///
/// Non-numeric suffixes inside a component are ignored (`"1.3rc"` reads as
/// `1.3`). When one version is a prefix of the other, the longer one is
/// greater.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    fn components(v: &str) -> Vec<u64> {
        v.trim()
            .split('.')
            .map(|part| {
                let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
                digits.parse().unwrap_or(0)
            })
            .collect()
    }

    components(a).cmp(&components(b))
}

/// `true` if `version >= minimum`.
pub fn version_at_least(version: &str, minimum: &str) -> bool {
    compare_versions(version, minimum) != Ordering::Less
}
