//! SteamID - durable 64-bit player identity
//!
//! Structure of the 64-bit form (individual accounts):
//! - Bits 63-56: Universe (1 = Public, 2 = Beta, 3 = Internal, 4 = Dev)
//! - Bits 55-52: Account type (1 = Individual)
//! - Bits 51-32: Instance (1 = Desktop)
//! - Bits 31-0:  Account ID
//!
//! Accepted textual forms:
//! - Steam2:    `STEAM_X:Y:Z`  (account ID = Z * 2 + Y, X = 0 means Public)
//! - Steam3:    `[U:1:W]`      (account ID = W)
//! - SteamID64: `76561197960287930`

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Durable SteamID of an individual account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamId(u64);

impl SteamId {
    /// Public universe
    pub const UNIVERSE_PUBLIC: u8 = 1;
    /// Highest universe an individual account can live in (Dev)
    pub const UNIVERSE_MAX: u8 = 4;

    const ACCOUNT_TYPE_INDIVIDUAL: u64 = 1;
    const INSTANCE_DESKTOP: u64 = 1;

    /// Build a SteamID from its universe and 32-bit account ID
    pub fn from_parts(universe: u8, account_id: u32) -> Result<Self, SteamIdParseError> {
        if universe == 0 || universe > Self::UNIVERSE_MAX {
            return Err(SteamIdParseError::InvalidUniverse(universe));
        }
        if account_id == 0 {
            return Err(SteamIdParseError::InvalidAccountId);
        }

        Ok(Self(
            (u64::from(universe) << 56)
                | (Self::ACCOUNT_TYPE_INDIVIDUAL << 52)
                | (Self::INSTANCE_DESKTOP << 32)
                | u64::from(account_id),
        ))
    }

    /// Validate a raw 64-bit value
    pub fn from_u64(value: u64) -> Result<Self, SteamIdParseError> {
        let universe = (value >> 56) as u8;
        if universe == 0 || universe > Self::UNIVERSE_MAX {
            return Err(SteamIdParseError::InvalidUniverse(universe));
        }
        if (value >> 52) & 0xF != Self::ACCOUNT_TYPE_INDIVIDUAL {
            return Err(SteamIdParseError::NotIndividual);
        }
        if value & 0xFFFF_FFFF == 0 {
            return Err(SteamIdParseError::InvalidAccountId);
        }
        Ok(Self(value))
    }

    /// Parse any of the supported textual forms
    pub fn parse(s: &str) -> Result<Self, SteamIdParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SteamIdParseError::Empty);
        }

        if let Some(rest) = s.strip_prefix("STEAM_") {
            return Self::parse_steam2(rest);
        }
        if let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            return Self::parse_steam3(inner);
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            let value = s
                .parse::<u64>()
                .map_err(|_| SteamIdParseError::OutOfRange)?;
            return Self::from_u64(value);
        }

        Err(SteamIdParseError::InvalidFormat)
    }

    // `X:Y:Z` after the `STEAM_` prefix
    fn parse_steam2(rest: &str) -> Result<Self, SteamIdParseError> {
        let mut parts = rest.split(':');
        let (Some(universe), Some(low_bit), Some(high_bits), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(SteamIdParseError::InvalidFormat);
        };

        let universe = parse_component::<u8>(universe)?;
        let low_bit = match low_bit {
            "0" => 0,
            "1" => 1,
            _ => return Err(SteamIdParseError::InvalidFormat),
        };
        let account_id = parse_component::<u32>(high_bits)?
            .checked_mul(2)
            .and_then(|v| v.checked_add(low_bit))
            .ok_or(SteamIdParseError::OutOfRange)?;

        // Legacy Source games render the Public universe as 0
        let universe = if universe == 0 {
            Self::UNIVERSE_PUBLIC
        } else {
            universe
        };

        Self::from_parts(universe, account_id)
    }

    // `U:1:W` between the brackets
    fn parse_steam3(inner: &str) -> Result<Self, SteamIdParseError> {
        let mut parts = inner.split(':');
        let (Some(kind), Some(universe), Some(account_id), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(SteamIdParseError::InvalidFormat);
        };

        if kind != "U" {
            return Err(SteamIdParseError::NotIndividual);
        }

        Self::from_parts(
            parse_component::<u8>(universe)?,
            parse_component::<u32>(account_id)?,
        )
    }

    /// Get the 64-bit form
    #[inline]
    pub const fn to_u64(self) -> u64 {
        self.0
    }

    /// Get the 32-bit account ID
    #[inline]
    pub const fn account_id(self) -> u32 {
        (self.0 & 0xFFFF_FFFF) as u32
    }

    /// Get the universe
    #[inline]
    pub const fn universe(self) -> u8 {
        (self.0 >> 56) as u8
    }

    /// Render as `STEAM_X:Y:Z`
    pub fn to_steam2(self) -> String {
        let account_id = self.account_id();
        format!(
            "STEAM_{}:{}:{}",
            self.universe(),
            account_id & 1,
            account_id >> 1
        )
    }

    /// Render as `[U:X:W]`
    pub fn to_steam3(self) -> String {
        format!("[U:{}:{}]", self.universe(), self.account_id())
    }

    /// Signed form for `BIGINT` columns
    ///
    /// Individual-account universes never set the top bit, so this is lossless.
    #[inline]
    pub const fn to_db(self) -> i64 {
        self.0 as i64
    }

    /// Inverse of [`SteamId::to_db`]
    #[inline]
    pub const fn from_db(value: i64) -> Self {
        Self(value as u64)
    }
}

fn parse_component<T: std::str::FromStr>(s: &str) -> Result<T, SteamIdParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SteamIdParseError::InvalidFormat);
    }
    s.parse::<T>().map_err(|_| SteamIdParseError::OutOfRange)
}

/// Error when parsing a SteamID
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SteamIdParseError {
    #[error("empty steam id")]
    Empty,

    #[error("invalid steam id format")]
    InvalidFormat,

    #[error("steam id component out of range")]
    OutOfRange,

    #[error("invalid steam universe: {0}")]
    InvalidUniverse(u8),

    #[error("invalid steam account id")]
    InvalidAccountId,

    #[error("steam id is not an individual account")]
    NotIndividual,
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SteamId> for u64 {
    fn from(id: SteamId) -> Self {
        id.0
    }
}

impl TryFrom<u64> for SteamId {
    type Error = SteamIdParseError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        SteamId::from_u64(value)
    }
}

impl std::str::FromStr for SteamId {
    type Err = SteamIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SteamId::parse(s)
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for SteamId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from any textual form or a number
impl<'de> Deserialize<'de> for SteamId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SteamIdVisitor;

        impl Visitor<'_> for SteamIdVisitor {
            type Value = SteamId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a steam id string or 64-bit integer")
            }

            fn visit_i64<E>(self, value: i64) -> Result<SteamId, E>
            where
                E: de::Error,
            {
                let value = u64::try_from(value).map_err(de::Error::custom)?;
                SteamId::from_u64(value).map_err(de::Error::custom)
            }

            fn visit_u64<E>(self, value: u64) -> Result<SteamId, E>
            where
                E: de::Error,
            {
                SteamId::from_u64(value).map_err(de::Error::custom)
            }

            fn visit_str<E>(self, value: &str) -> Result<SteamId, E>
            where
                E: de::Error,
            {
                SteamId::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(SteamIdVisitor)
    }
}
