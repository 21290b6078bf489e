//! Wire limits and well-known identifiers.
//!
//! Identifiers are carried as opaque integers or byte strings; the codec never
//! checks that a value appears here.

// =============================================================================
// WIRE LIMITS (RFC 7301, RFC 8446)
// =============================================================================

/// Maximum length of a single ALPN protocol name (1-byte length prefix).
pub const MAX_ALPN_PROTOCOL_LEN: usize = 255;

/// Maximum encoded length of a client supported_versions list.
pub const MAX_SUPPORTED_VERSIONS_LEN: usize = 254;

/// Data length of the single-value forms: server-role supported_versions and
/// HelloRetryRequest key_share.
pub const SINGLE_U16_DATA_LEN: usize = 2;

// =============================================================================
// SERVER NAME TYPES (RFC 6066)
// =============================================================================

/// DNS host name.
pub const NAME_TYPE_HOST_NAME: u8 = 0;

// =============================================================================
// PROTOCOL VERSIONS (RFC 8446)
// =============================================================================

/// TLS 1.0.
pub const TLS_1_0: u16 = 0x0301;

/// TLS 1.1.
pub const TLS_1_1: u16 = 0x0302;

/// TLS 1.2.
pub const TLS_1_2: u16 = 0x0303;

/// TLS 1.3.
pub const TLS_1_3: u16 = 0x0304;

// =============================================================================
// NAMED GROUPS (RFC 8446 4.2.7)
// =============================================================================

/// NIST P-256.
pub const GROUP_SECP256R1: u16 = 0x0017;

/// NIST P-384.
pub const GROUP_SECP384R1: u16 = 0x0018;

/// NIST P-521.
pub const GROUP_SECP521R1: u16 = 0x0019;

/// Curve25519 ECDH.
pub const GROUP_X25519: u16 = 0x001D;

/// Curve448 ECDH.
pub const GROUP_X448: u16 = 0x001E;

/// 2048-bit finite field DH.
pub const GROUP_FFDHE2048: u16 = 0x0100;

/// 3072-bit finite field DH.
pub const GROUP_FFDHE3072: u16 = 0x0101;

/// 4096-bit finite field DH.
pub const GROUP_FFDHE4096: u16 = 0x0102;

// =============================================================================
// SIGNATURE SCHEMES (RFC 8446 4.2.3)
// =============================================================================

/// RSASSA-PKCS1-v1_5 with SHA-256.
pub const RSA_PKCS1_SHA256: u16 = 0x0401;

/// RSASSA-PKCS1-v1_5 with SHA-384.
pub const RSA_PKCS1_SHA384: u16 = 0x0501;

/// RSASSA-PKCS1-v1_5 with SHA-512.
pub const RSA_PKCS1_SHA512: u16 = 0x0601;

/// ECDSA over P-256 with SHA-256.
pub const ECDSA_SECP256R1_SHA256: u16 = 0x0403;

/// ECDSA over P-384 with SHA-384.
pub const ECDSA_SECP384R1_SHA384: u16 = 0x0503;

/// ECDSA over P-521 with SHA-512.
pub const ECDSA_SECP521R1_SHA512: u16 = 0x0603;

/// RSASSA-PSS (rsaEncryption key) with SHA-256.
pub const RSA_PSS_RSAE_SHA256: u16 = 0x0804;

/// RSASSA-PSS (rsaEncryption key) with SHA-384.
pub const RSA_PSS_RSAE_SHA384: u16 = 0x0805;

/// RSASSA-PSS (rsaEncryption key) with SHA-512.
pub const RSA_PSS_RSAE_SHA512: u16 = 0x0806;

/// EdDSA over Ed25519.
pub const ED25519: u16 = 0x0807;

/// EdDSA over Ed448.
pub const ED448: u16 = 0x0808;

/// RSASSA-PSS (RSASSA-PSS key) with SHA-256.
pub const RSA_PSS_PSS_SHA256: u16 = 0x0809;

/// RSASSA-PSS (RSASSA-PSS key) with SHA-384.
pub const RSA_PSS_PSS_SHA384: u16 = 0x080A;

/// RSASSA-PSS (RSASSA-PSS key) with SHA-512.
pub const RSA_PSS_PSS_SHA512: u16 = 0x080B;

// =============================================================================
// ALPN PROTOCOL IDS (IANA registry)
// =============================================================================

/// HTTP/1.1.
pub const ALPN_HTTP_1_1: &str = "http/1.1";

/// HTTP/2 over TLS.
pub const ALPN_HTTP_2: &str = "h2";

/// HTTP/3.
pub const ALPN_HTTP_3: &str = "h3";

/// SPDY/3.1.
pub const ALPN_SPDY_3_1: &str = "spdy/3.1";
