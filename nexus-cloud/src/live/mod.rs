//! Live fan-out of inquiry changes
//!
//! ```text
//! contact / admin write handlers
//!       │ notify(change)
//!       ▼
//! InquiryFeed (broadcast::Sender<FeedEvent>)
//!       │
//!       ▼
//! FeedSubscription (one per enquiry WS session, released on drop)
//!       │ on every event: reload full ordered snapshot → push
//! ```
//!
//! Events only say *that* something changed; sessions re-read the whole
//! collection so every delivery is a complete, ordered snapshot.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::broadcast;

/// Broadcast channel capacity, enough to absorb a burst of writes
const BROADCAST_CAPACITY: usize = 256;

/// What happened to an inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

/// Feed event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEvent {
    pub inquiry_id: i64,
    pub kind: ChangeKind,
}

/// Live inquiry change hub
#[derive(Clone)]
pub struct InquiryFeed {
    tx: broadcast::Sender<FeedEvent>,
    active: Arc<AtomicUsize>,
}

impl Default for InquiryFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl InquiryFeed {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            tx,
            active: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Announce a change (no subscribers is fine)
    pub fn notify(&self, inquiry_id: i64, kind: ChangeKind) {
        let _ = self.tx.send(FeedEvent { inquiry_id, kind });
    }

    /// Start listening; the listener is released when the guard drops
    pub fn subscribe(&self) -> FeedSubscription {
        let now_active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(active = now_active, "Inquiry feed subscribed");
        FeedSubscription {
            rx: self.tx.subscribe(),
            tx: self.tx.clone(),
            active: self.active.clone(),
        }
    }

    /// Number of live subscriptions
    pub fn active_subscriptions(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// Scoped feed listener
///
/// Every exit path of the owning session (close, error, panic unwinding)
/// drops this guard, which unsubscribes.
pub struct FeedSubscription {
    rx: broadcast::Receiver<FeedEvent>,
    tx: broadcast::Sender<FeedEvent>,
    active: Arc<AtomicUsize>,
}

impl FeedSubscription {
    pub async fn recv(&mut self) -> Result<FeedEvent, broadcast::error::RecvError> {
        self.rx.recv().await
    }

    /// Skip whatever was missed after lagging and continue from now
    pub fn resync(&mut self) {
        self.rx = self.tx.subscribe();
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        let left = self.active.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
        tracing::debug!(active = left, "Inquiry feed unsubscribed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_changes() {
        let feed = InquiryFeed::new();
        let mut a = feed.subscribe();
        let mut b = feed.subscribe();

        feed.notify(7, ChangeKind::Created);

        let expected = FeedEvent {
            inquiry_id: 7,
            kind: ChangeKind::Created,
        };
        assert_eq!(a.recv().await.unwrap(), expected);
        assert_eq!(b.recv().await.unwrap(), expected);
    }

    #[test]
    fn drop_releases_subscription() {
        let feed = InquiryFeed::new();
        assert_eq!(feed.active_subscriptions(), 0);
        {
            let _a = feed.subscribe();
            let _b = feed.subscribe();
            assert_eq!(feed.active_subscriptions(), 2);
        }
        assert_eq!(feed.active_subscriptions(), 0);
        assert_eq!(feed.tx.receiver_count(), 0);
    }

    #[test]
    fn notify_without_subscribers_is_silent() {
        let feed = InquiryFeed::new();
        feed.notify(1, ChangeKind::Deleted);
        assert_eq!(feed.active_subscriptions(), 0);
    }

    #[tokio::test]
    async fn resync_after_lag_resumes_with_new_events() {
        let feed = InquiryFeed::new();
        let mut sub = feed.subscribe();

        for i in 0..(BROADCAST_CAPACITY as i64 + 10) {
            feed.notify(i, ChangeKind::Updated);
        }
        assert!(matches!(
            sub.recv().await,
            Err(broadcast::error::RecvError::Lagged(_))
        ));

        sub.resync();
        feed.notify(999, ChangeKind::Deleted);
        assert_eq!(sub.recv().await.unwrap().inquiry_id, 999);
        assert_eq!(feed.active_subscriptions(), 1);
    }

    #[test]
    fn clones_share_the_hub() {
        let feed = InquiryFeed::new();
        let other = feed.clone();
        let _sub = other.subscribe();
        assert_eq!(feed.active_subscriptions(), 1);
    }
}
