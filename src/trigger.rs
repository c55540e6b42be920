//! One-shot visibility trigger for the reveal.

use crate::render::Fragment;

/// Minimum visible fraction of the container before the reveal fires.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Source of viewport-intersection notifications for one rendered container.
///
/// Implementations only manage the subscription; the host delivers each
/// notification to [`Element::handle_intersection`](crate::Element::handle_intersection).
pub trait VisibilityWatcher {
    /// Receive every new or re-activated fragment, before any `observe`.
    ///
    /// Hosts rendering into a live document replace their output here so
    /// the container exists when it is observed.
    fn mount(&mut self, _fragment: &Fragment) {}

    /// Start watching the current container.
    ///
    /// Returns `false` when there is no container to watch.
    fn observe(&mut self, threshold: f64) -> bool;

    /// Stop watching. Calling it while not watching is a no-op.
    fn disconnect(&mut self);
}

/// Host-driven watcher that only records its subscription state.
///
/// Useful where the host measures visibility itself and feeds ratios in
/// directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualWatcher {
    observing: bool,
    has_target: bool,
    observe_calls: usize,
    disconnect_calls: usize,
    mount_calls: usize,
}

impl ManualWatcher {
    /// A watcher whose container is always present.
    pub fn new() -> Self {
        Self {
            has_target: true,
            ..Self::default()
        }
    }

    /// A watcher that never finds a container.
    pub fn without_target() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    #[inline]
    pub fn observe_calls(&self) -> usize {
        self.observe_calls
    }

    #[inline]
    pub fn disconnect_calls(&self) -> usize {
        self.disconnect_calls
    }

    #[inline]
    pub fn mount_calls(&self) -> usize {
        self.mount_calls
    }
}

impl VisibilityWatcher for ManualWatcher {
    fn mount(&mut self, _fragment: &Fragment) {
        self.mount_calls += 1;
    }

    fn observe(&mut self, _threshold: f64) -> bool {
        self.observe_calls += 1;
        self.observing = self.has_target;
        self.observing
    }

    fn disconnect(&mut self) {
        if self.observing {
            self.disconnect_calls += 1;
        }
        self.observing = false;
    }
}

/// Reveal lifecycle of a widget instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealState {
    /// No watcher has been installed yet
    #[default]
    NotArmed,
    /// A watcher was installed and the reveal has not fired
    Armed,
    /// The reveal fired; terminal
    Revealed,
}

/// State machine deciding when the reveal fires.
///
/// `NotArmed -> Armed -> Revealed`, with `Revealed` reached at most once.
/// Detaching before the reveal drops the subscription but keeps `Armed`;
/// the next [`arm`](Self::arm) installs a fresh one.
///
/// ## Example
///
/// ```rust
/// use slide_text::{ManualWatcher, RevealState, VisibilityTrigger};
///
/// let mut watcher = ManualWatcher::new();
/// let mut trigger = VisibilityTrigger::new();
///
/// trigger.arm(&mut watcher);
/// assert_eq!(trigger.state(), RevealState::Armed);
///
/// assert!(!trigger.observe(0.05, &mut watcher));
/// assert!(trigger.observe(0.5, &mut watcher));
/// assert!(!trigger.observe(1.0, &mut watcher));
/// assert_eq!(trigger.state(), RevealState::Revealed);
/// assert!(!watcher.is_observing());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTrigger {
    state: RevealState,
    threshold: f64,
    watching: bool,
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityTrigger {
    /// Create a trigger with the default 10% threshold.
    pub fn new() -> Self {
        Self::with_threshold(VISIBILITY_THRESHOLD)
    }

    /// Create a trigger with a custom threshold, clamped to `0.0..=1.0`.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            state: RevealState::NotArmed,
            threshold: threshold.clamp(0.0, 1.0),
            watching: false,
        }
    }

    /// Install a watch on the current container.
    ///
    /// Any previous subscription is released first, since a render replaces
    /// the container. Does nothing once revealed. Returns `true` when a watch
    /// is active afterwards.
    pub fn arm<W: VisibilityWatcher + ?Sized>(&mut self, watcher: &mut W) -> bool {
        if self.state == RevealState::Revealed {
            return false;
        }
        if self.watching {
            watcher.disconnect();
            self.watching = false;
        }
        if watcher.observe(self.threshold) {
            self.watching = true;
            if self.state == RevealState::NotArmed {
                tracing::debug!(threshold = self.threshold, "visibility trigger armed");
            }
            self.state = RevealState::Armed;
            true
        } else {
            tracing::debug!("no container to observe; trigger not armed");
            false
        }
    }

    /// Feed one intersection notification.
    ///
    /// Returns `true` exactly once: on the first notification at or above
    /// the threshold while a watch is active. The watcher is disconnected
    /// before returning.
    pub fn observe<W: VisibilityWatcher + ?Sized>(&mut self, ratio: f64, watcher: &mut W) -> bool {
        if self.state != RevealState::Armed || !self.watching {
            return false;
        }
        if ratio < self.threshold || ratio.is_nan() {
            return false;
        }

        self.state = RevealState::Revealed;
        self.watching = false;
        watcher.disconnect();
        tracing::debug!(ratio, "reveal fired");
        true
    }

    /// Release the watch without revealing (e.g. on detach).
    pub fn disarm<W: VisibilityWatcher + ?Sized>(&mut self, watcher: &mut W) {
        if self.watching {
            watcher.disconnect();
            self.watching = false;
            tracing::debug!("visibility trigger disarmed");
        }
    }

    #[inline]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Whether a watch subscription is currently held.
    #[inline]
    pub fn is_watching(&self) -> bool {
        self.watching
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
