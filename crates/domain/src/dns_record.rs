use std::fmt;
use std::str::FromStr;

/// Declares the record type enum together with its mnemonic and wire number
/// tables so the three can never drift apart.
macro_rules! record_types {
    ($( $(#[$meta:meta])* $variant:ident => $mnemonic:literal = $code:literal ),+ $(,)?) => {
        /// DNS resource-record types that may be kept warm.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum RecordType {
            $( $(#[$meta])* $variant, )+
        }

        impl RecordType {
            /// Every known type, in wire-number order.
            pub const ALL: &'static [RecordType] = &[$( RecordType::$variant, )+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( RecordType::$variant => $mnemonic, )+
                }
            }

            /// Convert to wire format number (RFC 1035 and successors)
            pub fn to_u16(&self) -> u16 {
                match self {
                    $( RecordType::$variant => $code, )+
                }
            }

            pub fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $( $code => Some(RecordType::$variant), )+
                    _ => None,
                }
            }

            fn from_mnemonic(upper: &str) -> Option<Self> {
                match upper {
                    $( $mnemonic => Some(RecordType::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

record_types! {
    A => "A" = 1,
    NS => "NS" = 2,
    MD => "MD" = 3,
    MF => "MF" = 4,
    CNAME => "CNAME" = 5,
    SOA => "SOA" = 6,
    MB => "MB" = 7,
    MG => "MG" = 8,
    MR => "MR" = 9,
    NULL => "NULL" = 10,
    PTR => "PTR" = 12,
    HINFO => "HINFO" = 13,
    MINFO => "MINFO" = 14,
    MX => "MX" = 15,
    TXT => "TXT" = 16,
    RP => "RP" = 17,
    AFSDB => "AFSDB" = 18,
    X25 => "X25" = 19,
    ISDN => "ISDN" = 20,
    RT => "RT" = 21,
    NSAPPTR => "NSAP-PTR" = 23,
    SIG => "SIG" = 24,
    KEY => "KEY" = 25,
    PX => "PX" = 26,
    GPOS => "GPOS" = 27,
    AAAA => "AAAA" = 28,
    LOC => "LOC" = 29,
    NXT => "NXT" = 30,
    EID => "EID" = 31,
    NIMLOC => "NIMLOC" = 32,
    SRV => "SRV" = 33,
    ATMA => "ATMA" = 34,
    NAPTR => "NAPTR" = 35,
    KX => "KX" = 36,
    CERT => "CERT" = 37,
    DNAME => "DNAME" = 39,
    OPT => "OPT" = 41,
    APL => "APL" = 42,
    DS => "DS" = 43,
    SSHFP => "SSHFP" = 44,
    IPSECKEY => "IPSECKEY" = 45,
    RRSIG => "RRSIG" = 46,
    NSEC => "NSEC" = 47,
    DNSKEY => "DNSKEY" = 48,
    DHCID => "DHCID" = 49,
    NSEC3 => "NSEC3" = 50,
    NSEC3PARAM => "NSEC3PARAM" = 51,
    TLSA => "TLSA" = 52,
    SMIMEA => "SMIMEA" = 53,
    HIP => "HIP" = 55,
    NINFO => "NINFO" = 56,
    RKEY => "RKEY" = 57,
    TALINK => "TALINK" = 58,
    CDS => "CDS" = 59,
    CDNSKEY => "CDNSKEY" = 60,
    OPENPGPKEY => "OPENPGPKEY" = 61,
    CSYNC => "CSYNC" = 62,
    ZONEMD => "ZONEMD" = 63,
    SVCB => "SVCB" = 64,
    HTTPS => "HTTPS" = 65,
    SPF => "SPF" = 99,
    UINFO => "UINFO" = 100,
    UID => "UID" = 101,
    GID => "GID" = 102,
    UNSPEC => "UNSPEC" = 103,
    NID => "NID" = 104,
    L32 => "L32" = 105,
    L64 => "L64" = 106,
    LP => "LP" = 107,
    EUI48 => "EUI48" = 108,
    EUI64 => "EUI64" = 109,
    NXNAME => "NXNAME" = 128,
    TKEY => "TKEY" = 249,
    TSIG => "TSIG" = 250,
    IXFR => "IXFR" = 251,
    AXFR => "AXFR" = 252,
    MAILB => "MAILB" = 253,
    MAILA => "MAILA" = 254,
    /// Meta query; any answer type satisfies it.
    ANY => "ANY" = 255,
    URI => "URI" = 256,
    CAA => "CAA" = 257,
    AVC => "AVC" = 258,
    AMTRELAY => "AMTRELAY" = 260,
    RESINFO => "RESINFO" = 261,
    TA => "TA" = 32768,
    DLV => "DLV" = 32769,
}

impl RecordType {
    /// Validates if a record type mnemonic is supported (case-insensitive)
    pub fn is_supported(name: &str) -> bool {
        Self::from_str(name).is_ok()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mnemonic(&s.to_uppercase()).ok_or_else(|| format!("Unknown record type: {}", s))
    }
}
