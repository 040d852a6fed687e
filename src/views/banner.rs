//! Transient success and error notices

use std::{
    sync::{Mutex, PoisonError},
    time::Duration,
};

use serde::Serialize;
use tokio::time::Instant;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

/// Notice shown after a mutation. It disappears once `dismiss_after_ms` elapsed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub dismiss_after_ms: u64,
    #[serde(skip)]
    shown_at: Instant,
}

impl Banner {
    pub fn new(kind: BannerKind, message: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            kind,
            message: message.into(),
            dismiss_after_ms: u64::try_from(dismiss_after.as_millis()).unwrap_or(u64::MAX),
            shown_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>, dismiss_after: Duration) -> Self {
        Self::new(BannerKind::Success, message, dismiss_after)
    }

    pub fn error(message: impl Into<String>, dismiss_after: Duration) -> Self {
        Self::new(BannerKind::Error, message, dismiss_after)
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Duration::from_millis(self.dismiss_after_ms)
    }
}

/// The single banner slot of the UI. A new banner replaces the current one.
#[derive(Debug, Default)]
pub struct BannerSlot {
    current: Mutex<Option<Banner>>,
}

impl BannerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, banner: Banner) {
        tracing::debug!(kind = ?banner.kind, message = %banner.message, "Showing banner");
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(banner);
    }

    /// Visible banner, if any. Expired banners are dropped here.
    pub fn current(&self) -> Option<Banner> {
        let mut slot = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.as_ref().is_some_and(Banner::is_expired) {
            *slot = None;
        }
        slot.clone()
    }

    pub fn dismiss(&self) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
