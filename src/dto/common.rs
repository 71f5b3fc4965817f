use crate::error::{SpinError, ValidationReason};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Currency codes the platform documents; any other code is passed through as-is
pub const COMMON_CURRENCIES: [&str; 8] = ["USD", "EUR", "GBP", "BRL", "AUD", "CAD", "NZD", "TRY"];

/// Player or game currency. Open set: unknown codes are forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Currency(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_common(&self) -> bool {
        COMMON_CURRENCIES.contains(&self.0.as_str())
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Currency(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Game client language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    De,
    Tr,
    Ru,
    Nl,
    Pt,
    Es,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Fr,
        Language::De,
        Language::Tr,
        Language::Ru,
        Language::Nl,
        Language::Pt,
        Language::Es,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Tr => "tr",
            Language::Ru => "ru",
            Language::Nl => "nl",
            Language::Pt => "pt",
            Language::Es => "es",
        }
    }
}

impl FromStr for Language {
    type Err = SpinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| {
                SpinError::validation(
                    "lang",
                    ValidationReason::NotAllowed(format!("`{s}` is not a supported language")),
                )
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free round bet level, 0 through 6 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct BetLevel(u8);

impl BetLevel {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 6;

    pub fn new(level: u8) -> Result<Self, SpinError> {
        if level > Self::MAX {
            return Err(SpinError::validation(
                "bet_level",
                ValidationReason::NotAllowed(format!(
                    "must be between {} and {}, got {level}",
                    Self::MIN,
                    Self::MAX
                )),
            ));
        }
        Ok(BetLevel(level))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for BetLevel {
    type Error = SpinError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        BetLevel::new(level)
    }
}

impl From<BetLevel> for u8 {
    fn from(level: BetLevel) -> u8 {
        level.0
    }
}

/// Whether game list entries carry their provider system details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ShowSystems {
    Hidden,
    Shown,
}

impl From<ShowSystems> for u8 {
    fn from(flag: ShowSystems) -> u8 {
        match flag {
            ShowSystems::Hidden => 0,
            ShowSystems::Shown => 1,
        }
    }
}

impl TryFrom<u8> for ShowSystems {
    type Error = SpinError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ShowSystems::Hidden),
            1 => Ok(ShowSystems::Shown),
            other => Err(SpinError::validation(
                "show_systems",
                ValidationReason::NotAllowed(format!("must be 0 or 1, got {other}")),
            )),
        }
    }
}

/// Game list layout. Type 2 is the compact, faster listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ListType {
    #[default]
    Full,
    Compact,
}

impl From<ListType> for u8 {
    fn from(list_type: ListType) -> u8 {
        match list_type {
            ListType::Full => 1,
            ListType::Compact => 2,
        }
    }
}

impl TryFrom<u8> for ListType {
    type Error = SpinError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ListType::Full),
            2 => Ok(ListType::Compact),
            other => Err(SpinError::validation(
                "list_type",
                ValidationReason::NotAllowed(format!("must be 1 or 2, got {other}")),
            )),
        }
    }
}

/// Real-money or play-for-fun launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PlayForFun {
    #[default]
    Real,
    Fun,
}

impl From<PlayForFun> for u8 {
    fn from(mode: PlayForFun) -> u8 {
        match mode {
            PlayForFun::Real => 0,
            PlayForFun::Fun => 1,
        }
    }
}

impl TryFrom<u8> for PlayForFun {
    type Error = SpinError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PlayForFun::Real),
            1 => Ok(PlayForFun::Fun),
            other => Err(SpinError::validation(
                "play_for_fun",
                ValidationReason::NotAllowed(format!("must be 0 or 1, got {other}")),
            )),
        }
    }
}

/// SHA-256 hex digest of a player password. Plaintext never leaves the process.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a plaintext password
    pub fn from_plain(password: &str) -> Self {
        PasswordHash(hex::encode(Sha256::digest(password.as_bytes())))
    }

    /// Accept an already computed digest (64 lowercase hex characters)
    pub fn from_digest(digest: impl Into<String>) -> Result<Self, SpinError> {
        let digest = digest.into();
        let well_formed = digest.len() == 64
            && digest
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !well_formed {
            return Err(SpinError::validation(
                "user_password",
                ValidationReason::NotAllowed("must be a SHA-256 hex digest".to_string()),
            ));
        }
        Ok(PasswordHash(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

impl TryFrom<String> for PasswordHash {
    type Error = SpinError;

    fn try_from(digest: String) -> Result<Self, Self::Error> {
        PasswordHash::from_digest(digest)
    }
}

impl From<PasswordHash> for String {
    fn from(hash: PasswordHash) -> String {
        hash.0
    }
}
