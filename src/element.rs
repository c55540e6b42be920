//! The slide-text widget instance and its lifecycle hooks.

use crate::config::{is_observed, Attributes, RevealMode, WidgetConfig};
use crate::render::Fragment;
use crate::trigger::{RevealState, VisibilityTrigger, VisibilityWatcher};

/// A slide-text widget.
///
/// The host drives it through the lifecycle hooks
/// ([`connected`](Self::connected), [`disconnected`](Self::disconnected),
/// [`attribute_changed`](Self::attribute_changed)) and forwards visibility
/// notifications to [`handle_intersection`](Self::handle_intersection).
/// Every render, and the activation on reveal, is handed to
/// [`VisibilityWatcher::mount`]; the output always replaces the previous one
/// in full. [`html`](Self::html) gives the same output as a string.
///
/// ## Example
///
/// ```rust
/// use slide_text::{Element, ManualWatcher, RevealMode, RevealState};
///
/// let mut element = Element::new(RevealMode::OnVisible, ManualWatcher::new());
/// element.set_attribute("text", "Hi there");
/// element.connected();
/// assert_eq!(element.reveal_state(), Some(RevealState::Armed));
/// assert!(!element.fragment().is_active());
///
/// assert!(element.handle_intersection(0.25));
/// assert!(element.fragment().is_active());
/// assert!(!element.watcher().is_observing());
/// ```
#[derive(Debug)]
pub struct Element<W: VisibilityWatcher> {
    mode: RevealMode,
    attributes: Attributes,
    config: WidgetConfig,
    fragment: Fragment,
    /// `None` for [`RevealMode::OnRender`]
    trigger: Option<VisibilityTrigger>,
    watcher: W,
    connected: bool,
}

impl<W: VisibilityWatcher> Element<W> {
    /// Create a detached element with no attributes set.
    pub fn new(mode: RevealMode, watcher: W) -> Self {
        let config = WidgetConfig::resolve(&Attributes::new(), mode);
        let fragment = Fragment::new(&config);
        let trigger = match mode {
            RevealMode::OnVisible => Some(VisibilityTrigger::new()),
            RevealMode::OnRender => None,
        };
        Self {
            mode,
            attributes: Attributes::new(),
            config,
            fragment,
            trigger,
            watcher,
            connected: false,
        }
    }

    /// Create a detached element with initial attributes.
    ///
    /// No render happens until the element is connected or an attribute
    /// changes, but the config already reflects `attributes`.
    pub fn with_attributes(mode: RevealMode, watcher: W, attributes: Attributes) -> Self {
        let mut element = Self::new(mode, watcher);
        element.config = WidgetConfig::resolve(&attributes, mode);
        element.fragment = Fragment::new(&element.config);
        element.attributes = attributes;
        element
    }

    /// Set an attribute and run the change hook.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let old = self.attributes.get(name).map(str::to_owned);
        self.attribute_changed(name, old.as_deref(), Some(value));
    }

    /// Remove an attribute and run the change hook.
    pub fn remove_attribute(&mut self, name: &str) {
        if let Some(old) = self.attributes.get(name).map(str::to_owned) {
            self.attribute_changed(name, Some(&old), None);
        }
    }

    /// Attribute-change hook.
    ///
    /// Stores `new` (removing the attribute when `None`), then re-renders
    /// when `name` is observed and the value actually changed. While
    /// connected and not yet revealed, the trigger is re-armed on the new
    /// container. Returns `true` if a render happened.
    pub fn attribute_changed(&mut self, name: &str, old: Option<&str>, new: Option<&str>) -> bool {
        match new {
            Some(value) => {
                self.attributes.set(name, value);
            }
            None => {
                self.attributes.remove(name);
            }
        }
        if !is_observed(name) || old == new {
            return false;
        }
        tracing::trace!(name, ?old, ?new, "attribute changed");

        self.render();
        if self.connected {
            if let Some(trigger) = self.trigger.as_mut() {
                trigger.arm(&mut self.watcher);
            }
        }
        true
    }

    /// Attach hook: render and arm the trigger.
    pub fn connected(&mut self) {
        self.connected = true;
        self.render();
        if let Some(trigger) = self.trigger.as_mut() {
            trigger.arm(&mut self.watcher);
        }
    }

    /// Detach hook: release the watcher.
    pub fn disconnected(&mut self) {
        self.connected = false;
        if let Some(trigger) = self.trigger.as_mut() {
            trigger.disarm(&mut self.watcher);
        }
    }

    /// Deliver an intersection notification for the rendered container.
    ///
    /// Returns `true` if this notification fired the reveal.
    pub fn handle_intersection(&mut self, ratio: f64) -> bool {
        let Some(trigger) = self.trigger.as_mut() else {
            return false;
        };
        if !trigger.observe(ratio, &mut self.watcher) {
            return false;
        }
        let activated = self.fragment.activate();
        self.watcher.mount(&self.fragment);
        tracing::debug!(letters = activated, "reveal animation started");
        true
    }

    /// Rebuild config and fragment from the current attributes.
    ///
    /// The new fragment starts idle unless the reveal already happened (or
    /// the element is in [`RevealMode::OnRender`]), in which case it is
    /// activated right away.
    pub fn render(&mut self) {
        self.config = WidgetConfig::resolve(&self.attributes, self.mode);
        self.fragment = Fragment::new(&self.config);

        let activate_now = match &self.trigger {
            Some(trigger) => trigger.is_revealed(),
            None => true,
        };
        if activate_now {
            self.fragment.activate();
        }
        self.watcher.mount(&self.fragment);
        tracing::trace!(
            letters = self.fragment.letter_count(),
            active = self.fragment.is_active(),
            "rendered"
        );
    }

    #[inline]
    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Raw value of an attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    #[inline]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[inline]
    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// The full output to mount in the host's render target.
    pub fn html(&self) -> String {
        self.fragment.to_html()
    }

    /// Reveal state, or `None` for [`RevealMode::OnRender`].
    pub fn reveal_state(&self) -> Option<RevealState> {
        self.trigger.as_ref().map(VisibilityTrigger::state)
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    #[inline]
    pub fn watcher(&self) -> &W {
        &self.watcher
    }

    #[inline]
    pub fn watcher_mut(&mut self) -> &mut W {
        &mut self.watcher
    }
}
