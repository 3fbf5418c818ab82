//! Administrative diagnostics channel.
//!
//! The extension has exactly one user-visible failure: the compatibility
//! warning. It is delivered through a [`NoticeSink`], which the embedding
//! application maps onto its admin surface (a banner, a CLI message, a log).

use std::fmt;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Severity of an admin notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Informational.
    Info,
    /// Something is degraded.
    Warning,
    /// Something does not work at all.
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A message for site administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminNotice {
    /// Severity.
    pub level: NoticeLevel,
    /// Human-readable message.
    pub message: String,
}

impl AdminNotice {
    /// Create an error-level notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for AdminNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Receives admin notices.
pub trait NoticeSink: Send + Sync {
    /// Deliver a notice.
    fn emit(&self, notice: AdminNotice);
}

/// Collects notices in memory for later display.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Mutex<Vec<AdminNotice>>,
}

impl NoticeBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every notice received so far.
    pub fn notices(&self) -> Vec<AdminNotice> {
        self.lock().clone()
    }

    /// Remove and return every notice.
    pub fn drain(&self) -> Vec<AdminNotice> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of notices held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if no notice was received.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<AdminNotice>> {
        // A poisoned board still holds valid notices.
        self.notices.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl NoticeSink for NoticeBoard {
    fn emit(&self, notice: AdminNotice) {
        self.lock().push(notice);
    }
}

/// Forwards notices to the logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNoticeSink;

impl NoticeSink for LogNoticeSink {
    fn emit(&self, notice: AdminNotice) {
        match notice.level {
            NoticeLevel::Info => log::info!("{}", notice.message),
            NoticeLevel::Warning => log::warn!("{}", notice.message),
            NoticeLevel::Error => log::error!("{}", notice.message),
        }
    }
}
