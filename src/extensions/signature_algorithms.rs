//! signature_algorithms extension (0x000D, RFC 8446 section 4.2.3)
//!
//! Wire format for extension data:
//! ```text
//! +0  Algorithm list length (2 bytes BE16)
//! +2  Algorithm ids (2 bytes BE16 each)
//! ```

use crate::core::wire::{self, PrefixWidth};
use crate::core::{DecodeError, DecodeExtension, EncodeError, TlsExtension};

use super::extension_type::ExtensionType;

/// Supported signature schemes, in preference order.
///
/// Any 16-bit value is accepted, including reserved or unknown ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureAlgorithmsExtension {
    algorithms: Vec<u16>,
}

impl SignatureAlgorithmsExtension {
    /// Create with the given algorithms, kept as-is.
    pub fn new(algorithms: impl Into<Vec<u16>>) -> Self {
        Self {
            algorithms: algorithms.into(),
        }
    }

    /// Append an algorithm unless it is already listed.
    pub fn add_algorithm(&mut self, algorithm: u16) -> &mut Self {
        if !self.algorithms.contains(&algorithm) {
            self.algorithms.push(algorithm);
        }
        self
    }

    /// Algorithms in wire order.
    pub fn algorithms(&self) -> &[u16] {
        &self.algorithms
    }
}

impl TlsExtension for SignatureAlgorithmsExtension {
    fn extension_type(&self) -> u16 {
        Self::EXTENSION_TYPE
    }

    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let list_len = self.algorithms.len() * 2;
        let mut buf = Vec::with_capacity(2 + list_len);
        wire::encode_length(PrefixWidth::U16, list_len, &mut buf)?;
        for algorithm in &self.algorithms {
            buf.extend_from_slice(&wire::encode_u16(*algorithm));
        }
        Ok(buf)
    }
}

impl DecodeExtension for SignatureAlgorithmsExtension {
    const EXTENSION_TYPE: u16 = ExtensionType::SignatureAlgorithms.as_u16();

    fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (list, end) = wire::decode_length_prefixed(PrefixWidth::U16, data, 0)?;
        super::trace_trailing("signature_algorithms", data, end);

        let mut algorithms = Vec::with_capacity(list.len() / 2);
        let mut offset = 0;
        while offset < list.len() {
            let (algorithm, next) = wire::decode_u16(list, offset)?;
            algorithms.push(algorithm);
            offset = next;
        }

        Ok(Self { algorithms })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{ECDSA_SECP256R1_SHA256, ED25519, RSA_PSS_RSAE_SHA256};

    #[test]
    fn test_encode() {
        let ext = SignatureAlgorithmsExtension::new([
            ECDSA_SECP256R1_SHA256,
            RSA_PSS_RSAE_SHA256,
            ED25519,
        ]);
        assert_eq!(ext.encode().unwrap(), hex::decode("0006040308040807").unwrap());
    }

    #[test]
    fn test_roundtrip() {
        let ext = SignatureAlgorithmsExtension::new([0x0403, 0x0804, 0x0401]);
        let decoded = SignatureAlgorithmsExtension::decode(&ext.encode().unwrap()).unwrap();
        assert_eq!(decoded, ext);
    }

    #[test]
    fn test_empty() {
        let ext = SignatureAlgorithmsExtension::default();
        let encoded = ext.encode().unwrap();
        assert_eq!(encoded, [0x00, 0x00]);
        assert!(
            SignatureAlgorithmsExtension::decode(&encoded)
                .unwrap()
                .algorithms()
                .is_empty()
        );
    }

    #[test]
    fn test_add_algorithm_deduplicates() {
        let mut ext = SignatureAlgorithmsExtension::default();
        ext.add_algorithm(ED25519)
            .add_algorithm(ECDSA_SECP256R1_SHA256)
            .add_algorithm(ED25519);

        assert_eq!(ext.algorithms(), &[ED25519, ECDSA_SECP256R1_SHA256]);
    }

    #[test]
    fn test_unknown_values_accepted() {
        let ext = SignatureAlgorithmsExtension::new([0x0000, 0xFFFF, 0x1A1A]);
        let decoded = SignatureAlgorithmsExtension::decode(&ext.encode().unwrap()).unwrap();
        assert_eq!(decoded.algorithms(), &[0x0000, 0xFFFF, 0x1A1A]);
    }

    #[test]
    fn test_decode_odd_list_length() {
        let data = [0x00, 0x03, 0x04, 0x03, 0x08];
        assert_eq!(
            SignatureAlgorithmsExtension::decode(&data),
            Err(DecodeError::Truncated {
                needed: 2,
                remaining: 1
            })
        );
    }

    #[test]
    fn test_decode_truncated_list() {
        assert!(matches!(
            SignatureAlgorithmsExtension::decode(&[0x00, 0x04, 0x04, 0x03]),
            Err(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn test_decode_every_cut_fails_cleanly() {
        let encoded = SignatureAlgorithmsExtension::new([0x0403, 0x0804, 0x0807])
            .encode()
            .unwrap();
        for cut in 0..encoded.len() {
            assert!(
                matches!(
                    SignatureAlgorithmsExtension::decode(&encoded[..cut]),
                    Err(DecodeError::Truncated { .. })
                ),
                "cut at {cut}"
            );
        }
    }
}
