//! Single-shot position requests.
//!
//! A request hands the provider a [`PositionReply`]. The provider answers at
//! most once: [`PositionReply::deliver`] reports a fix, dropping the reply
//! reports that no fix is coming (denied, unavailable, or failed). The caller
//! sees either `Some(fix)` or `None`; there is no error channel.

use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::plane::GeodeticFix;

/// Completion handle for one position request.
#[derive(Debug)]
pub struct PositionReply {
    sender: oneshot::Sender<GeodeticFix>,
}

impl PositionReply {
    pub fn deliver(self, fix: GeodeticFix) {
        // The requester may have timed out already; nothing to report then.
        let _ = self.sender.send(fix);
    }

    /// True when the requester stopped waiting.
    pub fn is_abandoned(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Source of the device position.
pub trait GeolocationProvider {
    /// Starts one position request. Must not block.
    fn request_position(&self, reply: PositionReply);
}

/// Issues one request and waits for its outcome.
///
/// `timeout` of `None` waits for as long as the provider holds the reply.
/// Fixes with non-finite coordinates are treated as absent.
pub async fn request_current_position<P>(
    provider: &P,
    timeout: Option<Duration>,
) -> Option<GeodeticFix>
where
    P: GeolocationProvider + ?Sized,
{
    let (sender, receiver) = oneshot::channel();
    provider.request_position(PositionReply { sender });

    let outcome = match timeout {
        Some(limit) => match tokio::time::timeout(limit, receiver).await {
            Ok(result) => result.ok(),
            Err(_) => {
                info!(?limit, "position request timed out");
                return None;
            }
        },
        None => receiver.await.ok(),
    };

    match outcome {
        Some(fix) if fix.is_finite() => {
            debug!(
                latitude = fix.latitude,
                longitude = fix.longitude,
                "position fix received"
            );
            Some(fix)
        }
        Some(fix) => {
            warn!(?fix, "discarding non-finite position fix");
            None
        }
        None => {
            info!("position unavailable");
            None
        }
    }
}

/// Answers every request the same way: with a fixed position, or not at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProvider {
    fix: Option<GeodeticFix>,
}

impl StaticProvider {
    pub fn at(fix: GeodeticFix) -> Self {
        Self { fix: Some(fix) }
    }

    pub fn unavailable() -> Self {
        Self { fix: None }
    }
}

impl GeolocationProvider for StaticProvider {
    fn request_position(&self, reply: PositionReply) {
        if let Some(fix) = self.fix {
            reply.deliver(fix);
        }
    }
}

/// Parks requests until the host fulfils or denies them, for hosts whose
/// position source reports through its own event loop.
#[derive(Debug, Default)]
pub struct ManualProvider {
    pending: Mutex<Vec<PositionReply>>,
}

impl ManualProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    /// Delivers `fix` to every waiting request. Returns how many were answered.
    pub fn fulfill(&self, fix: GeodeticFix) -> usize {
        let replies = std::mem::take(&mut *self.lock());
        let count = replies.len();
        for reply in replies {
            reply.deliver(fix);
        }
        count
    }

    /// Drops every waiting request so their callers see no fix.
    pub fn deny(&self) -> usize {
        let replies = std::mem::take(&mut *self.lock());
        replies.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<PositionReply>> {
        // A panic while holding the lock cannot leave the queue half-written.
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl GeolocationProvider for ManualProvider {
    fn request_position(&self, reply: PositionReply) {
        self.lock().push(reply);
    }
}
