use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Yahoo Finance suffix for Tokyo Stock Exchange listings.
const TOKYO_SUFFIX: &str = ".T";

/// A numeric Tokyo Stock Exchange security code (e.g. `7203`).
///
/// Keeps the string exactly as the client sent it, because that form is what
/// goes into upstream URLs. Whether the code names a real listing is only ever
/// decided by the upstreams.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u64")]
pub struct SecurityCode {
    number: u64,
    raw: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid security code: {0:?}")]
pub struct ParseSecurityCodeError(pub String);

impl SecurityCode {
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The code as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Yahoo Finance ticker symbol, e.g. `7203.T`.
    pub fn yahoo_symbol(&self) -> String {
        format!("{}{}", self.raw, TOKYO_SUFFIX)
    }
}

impl FromStr for SecurityCode {
    type Err = ParseSecurityCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .parse::<u64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ParseSecurityCodeError(s.to_string()))?;
        Ok(Self {
            number,
            raw: s.to_string(),
        })
    }
}

impl fmt::Display for SecurityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<SecurityCode> for u64 {
    fn from(code: SecurityCode) -> Self {
        code.number
    }
}
