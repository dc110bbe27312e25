//! Ban database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for bans table
#[derive(Debug, Clone, FromRow)]
pub struct BanModel {
    pub id: i64,
    pub target_id: i64,
    pub admin_id: Option<i64>,
    pub name: Option<String>,
    pub start_date: DateTime<Utc>,
    pub stop_date: Option<DateTime<Utc>>,
    pub duration: i64,
    pub reason: Option<String>,
    pub ip_address: Option<String>,
    pub server_id: i64,
}
