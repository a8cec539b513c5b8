use std::str::FromStr;

use smart_default::SmartDefault;

use crate::error::Error;

/// How `FixedString(N)` columns are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, SmartDefault)]
pub enum FixedStringHandling {
    /// Keep the raw N bytes, including zero padding
    #[default]
    Bytes,
    /// Strip trailing zero bytes and decode as UTF-8; invalid UTF-8 is an error
    Utf8,
    /// Like `Utf8`, but invalid UTF-8 decodes to the lowercase hex of the raw bytes
    Utf8OrHex,
}

impl FromStr for FixedStringHandling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bytes" => Ok(Self::Bytes),
            "utf8" => Ok(Self::Utf8),
            "utf8_or_hex" => Ok(Self::Utf8OrHex),
            _ => Err(Error::BadConfigError(format!(
                "Invalid fixed_string handling '{}', expected one of bytes, utf8, utf8_or_hex",
                s
            ))),
        }
    }
}

/// How `UInt64` columns are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, SmartDefault)]
pub enum UInt64Handling {
    #[default]
    Unsigned,
    /// Reinterpret the 8 bytes as `i64` for consumers without unsigned 64-bit support
    Signed,
}

impl FromStr for UInt64Handling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unsigned" => Ok(Self::Unsigned),
            "signed" => Ok(Self::Signed),
            _ => Err(Error::BadConfigError(format!(
                "Invalid uint64 handling '{}', expected unsigned or signed",
                s
            ))),
        }
    }
}

/// Codec options consumed by the default type registry
///
/// ```rs
/// let mut opts1 = Opts::default();
/// opts1.uint64 = UInt64Handling::Signed;
///
/// let opts2 = Opts::try_from("clickhouse://localhost:8123/?fixed_string=utf8_or_hex");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, SmartDefault)]
pub struct Opts {
    #[default(FixedStringHandling::Bytes)]
    pub fixed_string: FixedStringHandling,

    #[default(UInt64Handling::Unsigned)]
    pub uint64: UInt64Handling,
}

impl TryFrom<&str> for Opts {
    type Error = Error;

    fn try_from(url: &str) -> Result<Self, Self::Error> {
        let parsed = url::Url::parse(url)
            .map_err(|e| Error::BadConfigError(format!("Failed to parse ClickHouse URL: {}", e)))?;

        if !matches!(parsed.scheme(), "clickhouse" | "http" | "https") {
            return Err(Error::BadConfigError(format!(
                "Invalid URL scheme '{}', expected 'clickhouse', 'http' or 'https'",
                parsed.scheme()
            )));
        }

        let mut opts = Self::default();
        // other query parameters belong to the transport
        for (key, value) in parsed.query_pairs() {
            match key.as_ref() {
                "fixed_string" => opts.fixed_string = value.parse()?,
                "uint64" => opts.uint64 = value.parse()?,
                _ => {}
            }
        }
        Ok(opts)
    }
}
