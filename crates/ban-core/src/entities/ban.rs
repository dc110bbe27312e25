//! Ban entity - one recorded ban event

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::value_objects::SteamId;

/// Surrogate primary key of a persisted ban
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BanId(i64);

impl BanId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ban that has been built in memory but not yet persisted
///
/// Fields not carried here (`name`, `stop_date`, `ip_address`, `server_id`,
/// `start_date`) take their column defaults on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBan {
    pub target_id: SteamId,
    pub admin_id: Option<SteamId>,
    /// Seconds, 0 = permanent
    pub duration: u32,
    pub reason: Option<String>,
}

impl NewBan {
    /// Create a permanent, system-issued ban with no reason
    pub fn new(target_id: SteamId) -> Self {
        Self {
            target_id,
            admin_id: None,
            duration: 0,
            reason: None,
        }
    }

    #[inline]
    pub fn is_permanent(&self) -> bool {
        self.duration == 0
    }
}

/// Persisted ban record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BanRecord {
    pub id: BanId,
    pub target_id: SteamId,
    /// `None` for system-issued bans
    pub admin_id: Option<SteamId>,
    pub name: Option<String>,
    pub start_date: DateTime<Utc>,
    pub stop_date: Option<DateTime<Utc>>,
    pub duration: u32,
    pub reason: Option<String>,
    pub ip_address: Option<String>,
    pub server_id: i32,
}

impl BanRecord {
    /// Column default for `server_id`
    pub const UNKNOWN_SERVER_ID: i32 = -1;

    #[inline]
    pub fn is_permanent(&self) -> bool {
        self.duration == 0
    }

    /// Check if no admin issued this ban
    #[inline]
    pub fn is_system_issued(&self) -> bool {
        self.admin_id.is_none()
    }

    #[inline]
    pub fn has_known_server(&self) -> bool {
        self.server_id != Self::UNKNOWN_SERVER_ID
    }
}
