//! Ban request - caller-facing input to `BanStore::add_ban`

use ban_core::PlayerIndex;

/// A ban to record, expressed in engine player references
///
/// Defaults to a permanent, system-issued ban with no reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanRequest {
    pub target: PlayerIndex,
    /// Seconds, 0 = permanent
    pub duration: u32,
    /// `None` (or the world slot) for system-issued bans
    pub admin: Option<PlayerIndex>,
    pub reason: Option<String>,
}

impl BanRequest {
    pub fn new(target: PlayerIndex) -> Self {
        Self {
            target,
            duration: 0,
            admin: None,
            reason: None,
        }
    }

    /// Set the ban length in seconds
    pub fn duration(mut self, seconds: u32) -> Self {
        self.duration = seconds;
        self
    }

    /// Set the issuing admin
    pub fn admin(mut self, admin: PlayerIndex) -> Self {
        self.admin = Some(admin);
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
