//! Claim status and redemption code types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a claim.
///
/// Every claim issued today is created `Approved`; `Pending` and `Rejected`
/// are accepted by storage for a future review workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown claim status: {0}")]
pub struct UnknownClaimStatus(pub String);

impl FromStr for ClaimStatus {
    type Err = UnknownClaimStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(UnknownClaimStatus(other.to_owned())),
        }
    }
}

/// Fixed prefix of every redemption code.
pub const CLAIM_CODE_PREFIX: &str = "CLAIM-";

/// Number of characters after the prefix.
pub const CLAIM_CODE_SUFFIX_LEN: usize = 9;

/// Characters allowed in the suffix (uppercase alphanumeric).
pub const CLAIM_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Human-shareable redemption code, e.g. `CLAIM-7K2Q9ZX4M`.
///
/// Codes are random and not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimCode(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed claim code")]
pub struct MalformedClaimCode;

impl ClaimCode {
    /// Build a code from a suffix, validating length and charset.
    pub fn from_suffix(suffix: &str) -> Result<Self, MalformedClaimCode> {
        Self::parse(&format!("{CLAIM_CODE_PREFIX}{suffix}"))
    }

    pub fn parse(s: &str) -> Result<Self, MalformedClaimCode> {
        let suffix = s.strip_prefix(CLAIM_CODE_PREFIX).ok_or(MalformedClaimCode)?;
        let valid = suffix.len() == CLAIM_CODE_SUFFIX_LEN
            && suffix.bytes().all(|b| CLAIM_CODE_CHARSET.contains(&b));
        if !valid {
            return Err(MalformedClaimCode);
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ClaimCode {
    type Error = MalformedClaimCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ClaimCode> for String {
    fn from(code: ClaimCode) -> Self {
        code.0
    }
}
