//! Dashboard role model and permission checks
//!
//! Profiles carry a free-text role and status. Anything unrecognized falls
//! back to the least privileged value (`user`, `active`), matching what an
//! anonymous visitor gets.
//!
//! The web shell calls these checks for route guards and navigation; no CLI
//! command uses them.

use crate::constants::roles::{ADMINISTRATOR, MODERATOR, STATUS_ACTIVE, STATUS_SUSPENDED, USER};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Moderator,
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => USER,
            Role::Moderator => MODERATOR,
            Role::Administrator => ADMINISTRATOR,
        }
    }

    /// Lenient parse of a stored role; blank or unknown values become `User`
    pub fn from_profile(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            USER => Ok(Role::User),
            MODERATOR => Ok(Role::Moderator),
            ADMINISTRATOR => Ok(Role::Administrator),
            other => Err(Error::configuration(format!("Unknown role '{}'", other))),
        }
    }
}

/// Account status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    #[default]
    Active,
    Suspended,
}

impl ProfileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStatus::Active => STATUS_ACTIVE,
            ProfileStatus::Suspended => STATUS_SUSPENDED,
        }
    }

    /// Lenient parse of a stored status; only `suspended` suspends
    pub fn from_profile(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_lowercase()) {
            Some(value) if value == STATUS_SUSPENDED => ProfileStatus::Suspended,
            _ => ProfileStatus::Active,
        }
    }
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role and status of the signed-in account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessProfile {
    pub role: Role,
    pub status: ProfileStatus,
}

impl AccessProfile {
    pub fn new(role: Role, status: ProfileStatus) -> Self {
        Self { role, status }
    }

    /// Profile for a visitor without a session
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build from raw profile columns
    pub fn from_profile(role: Option<&str>, status: Option<&str>) -> Self {
        Self::new(Role::from_profile(role), ProfileStatus::from_profile(status))
    }

    pub fn is_suspended(&self) -> bool {
        self.status == ProfileStatus::Suspended
    }

    /// Records may be edited in data tables
    pub fn can_edit(&self) -> bool {
        matches!(self.role, Role::Moderator | Role::Administrator)
    }

    /// Records may be deleted from data tables
    pub fn can_delete(&self) -> bool {
        self.role == Role::Administrator
    }

    /// The header links to the admin dashboard
    pub fn can_view_dashboard(&self) -> bool {
        self.role == Role::Administrator && !self.is_suspended()
    }

    /// Admin routes may be entered at all
    pub fn can_enter_admin_area(&self) -> bool {
        self.can_edit() && !self.is_suspended()
    }

    /// Elements marked admin-only are shown
    pub fn shows_admin_only(&self) -> bool {
        self.role == Role::Administrator
    }
}
