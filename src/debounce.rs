//! Debouncing for search input.
//!
//! Each [`Model::push`] buffers a value and schedules a [`DebounceMsg`] after
//! the quiescence window. Pushing again before the message arrives bumps the
//! sequence tag, so the earlier message is stale when it is delivered and is
//! ignored. Only the message carrying the latest tag releases the buffered
//! value, and only if that value differs from the last one released.
//!
//! ```rust
//! use bubbletea_datatable::debounce::{DebounceMsg, Model};
//! use bubbletea_rs::Msg;
//! use std::time::Duration;
//!
//! let mut debounce = Model::new(Duration::from_millis(300));
//! let _cmd = debounce.push("hon");
//! let _cmd = debounce.push("honda");
//!
//! // The first tick was superseded by the second push.
//! let stale: Msg = Box::new(DebounceMsg { id: debounce.id(), tag: debounce.tag() - 1 });
//! assert_eq!(debounce.update(&stale), None);
//!
//! let current: Msg = Box::new(DebounceMsg { id: debounce.id(), tag: debounce.tag() });
//! assert_eq!(debounce.update(&current), Some("honda".to_string()));
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Used to ensure that debounce messages are only received by the model that sent them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// Default quiescence window.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Delivered when a debounce window elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceMsg {
    /// Identifier of the debouncer that scheduled this message.
    pub id: usize,
    /// Sequence tag at the time the window was started.
    pub tag: usize,
}

/// A coalescing buffer for a stream of values.
#[derive(Debug, Clone)]
pub struct Model {
    /// Quiescence window.
    pub delay: Duration,
    id: usize,
    tag: usize,
    pending: Option<String>,
    last_emitted: Option<String>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Model {
    /// Creates a debouncer with the given quiescence window.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            id: next_id(),
            tag: 0,
            pending: None,
            last_emitted: None,
        }
    }

    /// This debouncer's identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The tag of the most recently started window.
    pub fn tag(&self) -> usize {
        self.tag
    }

    /// The value waiting for the window to elapse, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// The value most recently released.
    pub fn last_emitted(&self) -> Option<&str> {
        self.last_emitted.as_deref()
    }

    /// Buffers `value` and (re)starts the window.
    pub fn push(&mut self, value: impl Into<String>) -> Cmd {
        let value = value.into();
        if self.pending.is_some() {
            log::trace!("debounce {}: superseding pending value", self.id);
        }
        self.pending = Some(value);
        self.tag += 1;

        let id = self.id;
        let tag = self.tag;
        tick(self.delay, move |_| Box::new(DebounceMsg { id, tag }) as Msg)
    }

    /// Handles a [`DebounceMsg`], returning the value to act on, if any.
    pub fn update(&mut self, msg: &Msg) -> Option<String> {
        let debounce_msg = msg.downcast_ref::<DebounceMsg>()?;

        // Were we expecting this message?
        if debounce_msg.id != self.id || debounce_msg.tag != self.tag {
            return None;
        }

        self.release()
    }

    /// Releases the pending value now instead of waiting for the window.
    pub fn flush(&mut self) -> Option<String> {
        // Invalidate the tick that is still in flight.
        self.tag += 1;
        self.release()
    }

    /// Records `value` as applied by other means, so repeats are measured
    /// against it rather than against the last value this debouncer released.
    pub fn mark_emitted(&mut self, value: &str) {
        if self.last_emitted.as_deref() != Some(value) {
            self.last_emitted = Some(value.to_string());
        }
    }

    fn release(&mut self) -> Option<String> {
        let value = self.pending.take()?;
        if self.last_emitted.as_deref() == Some(value.as_str()) {
            log::trace!("debounce {}: dropping repeated value", self.id);
            return None;
        }
        self.last_emitted = Some(value.clone());
        Some(value)
    }
}
