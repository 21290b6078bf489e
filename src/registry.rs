//! Extension type registry
//!
//! Maps a 16-bit extension type code to the decoder that parses its data.
//! A [`Registry`] is plain owned state: build one, share it (for example in an
//! `Arc`), and call [`Registry::create`] for every `(type, data)` pair that
//! the handshake framing layer hands over.
//!
//! The map sits behind a read-mostly lock, so `register` and `create` may run
//! concurrently. Decoders run outside the lock.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::core::{DecodeError, DecodeExtension, ExtensionError, Result, TlsExtension};
use crate::extensions::{
    AlpnExtension, ExtensionType, KeyShareEntry, KeyShareExtension, ServerNameExtension,
    SignatureAlgorithmsExtension, SupportedVersionsExtension,
};

/// Builds a type-erased extension from wire data.
pub trait ExtensionDecoder: Send + Sync {
    /// Type code carried by every extension this decoder produces.
    fn extension_type(&self) -> u16;

    /// Parse extension data.
    fn decode(&self, data: &[u8]) -> Result<Box<dyn TlsExtension>, DecodeError>;
}

/// [`ExtensionDecoder`] backed by a [`DecodeExtension`] type.
pub struct DecoderFor<E>(PhantomData<fn() -> E>);

impl<E> DecoderFor<E> {
    /// Create the decoder.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for DecoderFor<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for DecoderFor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DecoderFor")
            .field(&std::any::type_name::<E>())
            .finish()
    }
}

impl<E: DecodeExtension> ExtensionDecoder for DecoderFor<E> {
    fn extension_type(&self) -> u16 {
        E::EXTENSION_TYPE
    }

    fn decode(&self, data: &[u8]) -> Result<Box<dyn TlsExtension>, DecodeError> {
        Ok(Box::new(E::decode(data)?))
    }
}

/// Decoder for `E`.
pub fn decoder_for<E: DecodeExtension>() -> DecoderFor<E> {
    DecoderFor::new()
}

/// Type code to decoder mapping.
pub struct Registry {
    decoders: RwLock<HashMap<u16, Arc<dyn ExtensionDecoder>>>,
}

impl Registry {
    /// Registry with the built-in decoders: server_name, signature_algorithms,
    /// ALPN, supported_versions, and key_share.
    pub fn new() -> Self {
        let mut decoders: HashMap<u16, Arc<dyn ExtensionDecoder>> = HashMap::new();
        decoders.insert(
            ServerNameExtension::EXTENSION_TYPE,
            Arc::new(decoder_for::<ServerNameExtension>()),
        );
        decoders.insert(
            SupportedVersionsExtension::EXTENSION_TYPE,
            Arc::new(decoder_for::<SupportedVersionsExtension>()),
        );
        decoders.insert(
            AlpnExtension::EXTENSION_TYPE,
            Arc::new(decoder_for::<AlpnExtension>()),
        );
        decoders.insert(
            SignatureAlgorithmsExtension::EXTENSION_TYPE,
            Arc::new(decoder_for::<SignatureAlgorithmsExtension>()),
        );
        decoders.insert(
            KeyShareExtension::EXTENSION_TYPE,
            Arc::new(decoder_for::<KeyShareExtension>()),
        );
        Self {
            decoders: RwLock::new(decoders),
        }
    }

    /// Registry without any decoders.
    pub fn empty() -> Self {
        Self {
            decoders: RwLock::new(HashMap::new()),
        }
    }

    /// Map `type_code` to `decoder`, replacing any existing mapping.
    ///
    /// Fails with [`ExtensionError::InvalidRegistration`] if the decoder
    /// produces extensions of a different type.
    pub fn register(
        &self,
        type_code: u16,
        decoder: impl ExtensionDecoder + 'static,
    ) -> Result<()> {
        let declared = decoder.extension_type();
        if declared != type_code {
            return Err(ExtensionError::InvalidRegistration {
                type_code,
                declared,
            });
        }

        let replaced = self
            .decoders
            .write()
            .insert(type_code, Arc::new(decoder))
            .is_some();
        debug!(
            extension_type = %ExtensionType::from(type_code),
            replaced,
            "registered extension decoder"
        );
        Ok(())
    }

    /// Register the decoder for `E` under its own type code.
    pub fn register_type<E: DecodeExtension>(&self) -> Result<()> {
        self.register(E::EXTENSION_TYPE, decoder_for::<E>())
    }

    /// Decode `data` with the decoder registered for `type_code`.
    pub fn create(&self, type_code: u16, data: &[u8]) -> Result<Box<dyn TlsExtension>> {
        let decoder = self.decoders.read().get(&type_code).cloned();
        let Some(decoder) = decoder else {
            debug!(
                extension_type = %ExtensionType::from(type_code),
                "no decoder registered"
            );
            return Err(ExtensionError::UnknownExtensionType(type_code));
        };
        Ok(decoder.decode(data)?)
    }

    /// Check if a decoder is registered for `type_code`.
    pub fn is_registered(&self, type_code: u16) -> bool {
        self.decoders.read().contains_key(&type_code)
    }

    /// All registered type codes.
    pub fn registered_types(&self) -> BTreeSet<u16> {
        self.decoders.read().keys().copied().collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("registered_types", &self.registered_types())
            .finish()
    }
}

// =============================================================================
// CONVENIENCE CONSTRUCTORS
// =============================================================================

/// server_name extension with a single host name.
pub fn server_name(name: impl Into<Vec<u8>>) -> ServerNameExtension {
    let mut ext = ServerNameExtension::new();
    ext.add_host_name(name);
    ext
}

/// ALPN extension with the given protocols.
pub fn alpn<I, P>(protocols: I) -> AlpnExtension
where
    I: IntoIterator<Item = P>,
    P: Into<Vec<u8>>,
{
    AlpnExtension::new(protocols)
}

/// supported_versions extension in client or server role.
pub fn supported_versions(
    versions: impl Into<Vec<u16>>,
    is_server: bool,
) -> SupportedVersionsExtension {
    SupportedVersionsExtension::new(versions, is_server)
}

/// signature_algorithms extension.
pub fn signature_algorithms(algorithms: impl Into<Vec<u16>>) -> SignatureAlgorithmsExtension {
    SignatureAlgorithmsExtension::new(algorithms)
}

/// key_share extension with the given entries.
pub fn key_share(key_shares: impl Into<Vec<KeyShareEntry>>) -> KeyShareExtension {
    KeyShareExtension::with_shares(key_shares)
}

/// HelloRetryRequest key_share selecting `group`.
pub fn hello_retry_key_share(group: u16) -> KeyShareExtension {
    KeyShareExtension::hello_retry(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EncodeError;
    use crate::core::constants::{GROUP_X25519, TLS_1_2, TLS_1_3};
    use tracing_test::traced_test;

    /// Opaque extension used to exercise custom registration.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Custom(Vec<u8>);

    impl TlsExtension for Custom {
        fn extension_type(&self) -> u16 {
            Self::EXTENSION_TYPE
        }

        fn encode(&self) -> Result<Vec<u8>, EncodeError> {
            Ok(self.0.clone())
        }
    }

    impl DecodeExtension for Custom {
        const EXTENSION_TYPE: u16 = 0x9999;

        fn decode(data: &[u8]) -> Result<Self, DecodeError> {
            Ok(Self(data.to_vec()))
        }
    }

    #[test]
    fn test_builtin_types() {
        let registry = Registry::new();
        assert_eq!(
            registry.registered_types(),
            BTreeSet::from([0x0000, 0x000D, 0x0010, 0x002B, 0x0033])
        );
        assert!(registry.is_registered(0x0010));
        assert!(!registry.is_registered(0x8888));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::empty();
        assert!(registry.registered_types().is_empty());
        assert_eq!(
            registry.create(0x0000, &[0x00, 0x00]).unwrap_err(),
            ExtensionError::UnknownExtensionType(0x0000)
        );
    }

    #[test]
    fn test_create_dispatches_to_builtin() {
        let registry = Registry::new();

        let ext = registry.create(0x0010, &[0x00, 0x03, 0x02, b'h', b'2']).unwrap();
        let alpn = ext.downcast_ref::<AlpnExtension>().unwrap();
        assert_eq!(alpn.protocols(), &[b"h2".to_vec()]);

        let ext = registry.create(0x0033, &[0x00, 0x1D]).unwrap();
        let key_share = ext.downcast_ref::<KeyShareExtension>().unwrap();
        assert!(key_share.is_hello_retry());
        assert_eq!(key_share.selected_group(), Some(GROUP_X25519));

        let ext = registry.create(0x002B, &[0x03, 0x04]).unwrap();
        assert!(ext.is::<SupportedVersionsExtension>());
        assert!(!ext.is_applicable("1.2"));
    }

    #[test]
    fn test_create_unknown_type() {
        let registry = Registry::new();
        let err = registry.create(0x9999, b"data").unwrap_err();
        assert_eq!(err, ExtensionError::UnknownExtensionType(0x9999));
        assert_eq!(err.to_string(), "unknown extension type: 0x9999");
    }

    #[test]
    fn test_create_propagates_decode_error() {
        let registry = Registry::new();
        let err = registry.create(0x0000, &[0x00, 0x09, 0x00]).unwrap_err();
        assert!(matches!(
            err,
            ExtensionError::Decode(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn test_register_custom_type() {
        let registry = Registry::new();
        assert!(!registry.is_registered(0x9999));

        registry.register(0x9999, decoder_for::<Custom>()).unwrap();
        assert!(registry.is_registered(0x9999));
        assert!(registry.registered_types().contains(&0x9999));

        let ext = registry.create(0x9999, b"payload").unwrap();
        assert_eq!(ext.extension_type(), 0x9999);
        assert_eq!(
            ext.downcast_ref::<Custom>(),
            Some(&Custom(b"payload".to_vec()))
        );
        assert_eq!(ext.encode().unwrap(), b"payload");
    }

    #[test]
    fn test_register_rejects_mismatched_decoder() {
        let registry = Registry::new();
        let err = registry
            .register(0x9998, decoder_for::<AlpnExtension>())
            .unwrap_err();
        assert_eq!(
            err,
            ExtensionError::InvalidRegistration {
                type_code: 0x9998,
                declared: 0x0010,
            }
        );
        assert!(!registry.is_registered(0x9998));
    }

    #[test]
    fn test_register_overwrites() {
        struct RawServerName;

        impl ExtensionDecoder for RawServerName {
            fn extension_type(&self) -> u16 {
                0x0000
            }

            fn decode(&self, data: &[u8]) -> Result<Box<dyn TlsExtension>, DecodeError> {
                Ok(Box::new(Custom(data.to_vec())))
            }
        }

        let registry = Registry::new();
        registry.register(0x0000, RawServerName).unwrap();

        let ext = registry.create(0x0000, &[0xAA]).unwrap();
        assert!(ext.is::<Custom>());
        assert_eq!(registry.registered_types().len(), 5);
    }

    #[test]
    #[traced_test]
    fn test_register_logs() {
        let registry = Registry::new();
        registry.register_type::<Custom>().unwrap();
        assert!(logs_contain("registered extension decoder"));

        let _ = registry.create(0x7777, &[]);
        assert!(logs_contain("no decoder registered"));
    }

    #[test]
    fn test_convenience_constructors() {
        let sni = server_name("example.com");
        assert_eq!(sni.host_name(), Some("example.com"));

        let protocols = alpn(["h2", "http/1.1"]);
        assert_eq!(protocols.protocols().len(), 2);

        let client = supported_versions([TLS_1_3, TLS_1_2], false);
        assert!(!client.is_server_role());
        let server = supported_versions([TLS_1_3], true);
        assert_eq!(server.encode().unwrap(), [0x03, 0x04]);

        let algorithms = signature_algorithms([0x0403, 0x0804]);
        assert_eq!(algorithms.algorithms(), &[0x0403, 0x0804]);

        let shares = key_share(vec![KeyShareEntry::new(GROUP_X25519, [9u8; 32])]);
        assert!(!shares.is_hello_retry());
        assert_eq!(shares.key_shares().len(), 1);

        let retry = hello_retry_key_share(GROUP_X25519);
        assert!(retry.is_hello_retry());
        assert_eq!(retry.encode().unwrap(), [0x00, 0x1D]);
    }

    #[test]
    fn test_roundtrip_through_registry() {
        let registry = Registry::new();
        let originals: Vec<Box<dyn TlsExtension>> = vec![
            Box::new(server_name("example.com")),
            Box::new(alpn(["h2"])),
            Box::new(signature_algorithms([0x0807])),
            Box::new(supported_versions([TLS_1_3, TLS_1_2], false)),
            Box::new(key_share(vec![KeyShareEntry::new(GROUP_X25519, [1u8; 32])])),
        ];

        for original in originals {
            let data = original.encode().unwrap();
            let decoded = registry.create(original.extension_type(), &data).unwrap();
            assert_eq!(decoded.extension_type(), original.extension_type());
            assert_eq!(decoded.encode().unwrap(), data);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_register_and_create() {
        let registry = Arc::new(Registry::new());

        let mut handles = Vec::new();
        for i in 0..8u16 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    if i % 2 == 0 {
                        registry.register_type::<Custom>().unwrap();
                    }
                    let ext = registry.create(0x0010, &[0x00, 0x03, 0x02, b'h', b'2']).unwrap();
                    assert!(ext.is::<AlpnExtension>());
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }
        assert!(registry.is_registered(0x9999));
    }
}
