//! IANA TLS extension type codes.

use std::fmt;

macro_rules! extension_types {
    ($($(#[$doc:meta])* $variant:ident => $code:literal, $label:literal;)+) => {
        /// TLS extension type code.
        ///
        /// Values not listed here are kept as [`ExtensionType::Unknown`], so
        /// conversion from and to `u16` never loses information. Equality and
        /// hashing use the wire value, so `Unknown(0x0010) == Alpn`.
        #[derive(Debug, Clone, Copy)]
        pub enum ExtensionType {
            $($(#[$doc])* $variant,)+
            /// Unrecognised code.
            Unknown(u16),
        }

        impl ExtensionType {
            /// Wire value.
            pub const fn as_u16(self) -> u16 {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Unknown(code) => code,
                }
            }

            /// Human-readable name, `None` for unknown codes.
            pub fn label(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($label),)+
                    Self::Unknown(_) => None,
                }
            }
        }

        impl PartialEq for ExtensionType {
            fn eq(&self, other: &Self) -> bool {
                self.as_u16() == other.as_u16()
            }
        }

        impl Eq for ExtensionType {}

        impl std::hash::Hash for ExtensionType {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.as_u16().hash(state);
            }
        }

        impl From<u16> for ExtensionType {
            fn from(code: u16) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    other => Self::Unknown(other),
                }
            }
        }
    };
}

extension_types! {
    /// server_name (RFC 6066).
    ServerName => 0x0000, "server name indication";
    /// max_fragment_length (RFC 6066).
    MaxFragmentLength => 0x0001, "maximum fragment length";
    /// status_request (RFC 6066).
    StatusRequest => 0x0005, "certificate status request";
    /// supported_groups (RFC 8422, RFC 7919).
    SupportedGroups => 0x000A, "supported groups";
    /// ec_point_formats (RFC 8422).
    EcPointFormats => 0x000B, "elliptic curve point formats";
    /// signature_algorithms (RFC 8446).
    SignatureAlgorithms => 0x000D, "signature algorithms";
    /// use_srtp (RFC 5764).
    UseSrtp => 0x000E, "use SRTP";
    /// heartbeat (RFC 6520).
    Heartbeat => 0x000F, "heartbeat";
    /// application_layer_protocol_negotiation (RFC 7301).
    Alpn => 0x0010, "application layer protocol negotiation";
    /// signed_certificate_timestamp (RFC 6962).
    SignedCertificateTimestamp => 0x0012, "signed certificate timestamp";
    /// padding (RFC 7685).
    Padding => 0x0015, "padding";
    /// extended_master_secret (RFC 7627).
    ExtendedMasterSecret => 0x0017, "extended master secret";
    /// session_ticket (RFC 5077).
    SessionTicket => 0x0023, "session ticket";
    /// pre_shared_key (RFC 8446).
    PreSharedKey => 0x0029, "pre-shared key";
    /// early_data (RFC 8446).
    EarlyData => 0x002A, "early data";
    /// supported_versions (RFC 8446).
    SupportedVersions => 0x002B, "supported versions";
    /// cookie (RFC 8446).
    Cookie => 0x002C, "cookie";
    /// psk_key_exchange_modes (RFC 8446).
    PskKeyExchangeModes => 0x002D, "PSK key exchange modes";
    /// certificate_authorities (RFC 8446).
    CertificateAuthorities => 0x002F, "certificate authorities";
    /// oid_filters (RFC 8446).
    OidFilters => 0x0030, "OID filters";
    /// post_handshake_auth (RFC 8446).
    PostHandshakeAuth => 0x0031, "post-handshake authentication";
    /// signature_algorithms_cert (RFC 8446).
    SignatureAlgorithmsCert => 0x0032, "certificate signature algorithms";
    /// key_share (RFC 8446).
    KeyShare => 0x0033, "key share";
    /// renegotiation_info (RFC 5746).
    RenegotiationInfo => 0xFF01, "renegotiation info";
}

impl From<ExtensionType> for u16 {
    fn from(ty: ExtensionType) -> Self {
        ty.as_u16()
    }
}

impl fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{label} (0x{:04X})", self.as_u16()),
            None => write!(f, "unknown (0x{:04X})", self.as_u16()),
        }
    }
}
