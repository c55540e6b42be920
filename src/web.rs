//! Browser binding: shadow-root rendering and `IntersectionObserver`.
//!
//! A thin custom element class on the JS side owns a [`WebSlideText`] and
//! forwards its lifecycle callbacks:
//!
//! ```js
//! class SlideText extends HTMLElement {
//!   static get observedAttributes() { return observedAttributes(); }
//!   constructor() { super(); this.inner = new WebSlideText(this, true); }
//!   connectedCallback() { this.inner.connected(); }
//!   disconnectedCallback() { this.inner.disconnected(); }
//!   attributeChangedCallback(name, oldValue, newValue) {
//!     this.inner.attributeChanged(name, oldValue, newValue);
//!   }
//! }
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ShadowRoot,
    ShadowRootInit, ShadowRootMode,
};

use crate::render::web::{container, mount};
use crate::{Element, Fragment, RevealMode, VisibilityWatcher, OBSERVED_ATTRIBUTES};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// [`VisibilityWatcher`] over a shadow root and an `IntersectionObserver`.
pub struct DomWatcher {
    root: ShadowRoot,
    observer: Option<IntersectionObserver>,
    /// Kept for the watcher's lifetime; the observer holds a JS reference to it
    callback: ObserverCallback,
}

impl DomWatcher {
    fn new(root: ShadowRoot, callback: ObserverCallback) -> Self {
        Self {
            root,
            observer: None,
            callback,
        }
    }
}

impl std::fmt::Debug for DomWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomWatcher")
            .field("observing", &self.observer.is_some())
            .finish()
    }
}

impl VisibilityWatcher for DomWatcher {
    fn mount(&mut self, fragment: &Fragment) {
        mount(fragment, &self.root);
    }

    fn observe(&mut self, threshold: f64) -> bool {
        self.disconnect();

        let target = match container(&self.root) {
            Ok(Some(target)) => target,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!("{e}");
                return false;
            }
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        match IntersectionObserver::new_with_options(self.callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&target);
                self.observer = Some(observer);
                true
            }
            Err(_) => {
                tracing::warn!("Failed to create IntersectionObserver");
                false
            }
        }
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

/// Largest intersection ratio among the delivered entries.
fn max_ratio(entries: &js_sys::Array) -> f64 {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(|entry| entry.is_intersecting())
        .map(|entry| entry.intersection_ratio())
        .fold(0.0, f64::max)
}

/// A slide-text widget bound to a host element's shadow root.
#[wasm_bindgen]
pub struct WebSlideText {
    inner: Rc<RefCell<Element<DomWatcher>>>,
}

#[wasm_bindgen]
impl WebSlideText {
    /// Attach an open shadow root to `host` and bind a widget to it.
    ///
    /// `reveal_on_visible` selects [`RevealMode::OnVisible`]; otherwise the
    /// widget animates on every render.
    #[wasm_bindgen(constructor)]
    pub fn new(host: &web_sys::Element, reveal_on_visible: bool) -> Result<WebSlideText, JsValue> {
        let root = host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?;
        let mode = if reveal_on_visible {
            RevealMode::OnVisible
        } else {
            RevealMode::OnRender
        };

        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<Element<DomWatcher>>>| {
            let weak = weak.clone();
            let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let ratio = max_ratio(&entries);
                match inner.try_borrow_mut() {
                    Ok(mut element) => {
                        element.handle_intersection(ratio);
                    }
                    Err(_) => tracing::warn!("intersection delivered while widget busy; dropped"),
                };
            });
            RefCell::new(Element::new(mode, DomWatcher::new(root, callback)))
        });

        Ok(WebSlideText { inner })
    }

    /// Attach hook.
    pub fn connected(&self) {
        self.inner.borrow_mut().connected();
    }

    /// Detach hook.
    pub fn disconnected(&self) {
        self.inner.borrow_mut().disconnected();
    }

    /// Attribute-change hook, mirroring the platform callback.
    #[wasm_bindgen(js_name = attributeChanged)]
    pub fn attribute_changed(&self, name: &str, old: Option<String>, new: Option<String>) {
        self.inner
            .borrow_mut()
            .attribute_changed(name, old.as_deref(), new.as_deref());
    }

    /// Current output as HTML.
    pub fn html(&self) -> String {
        self.inner.borrow().html()
    }

    /// Whether the reveal already fired.
    #[wasm_bindgen(js_name = isRevealed)]
    pub fn is_revealed(&self) -> bool {
        self.inner.borrow().reveal_state() == Some(crate::RevealState::Revealed)
    }
}

/// Attribute names the custom element should observe.
#[wasm_bindgen(js_name = observedAttributes)]
pub fn observed_attributes() -> js_sys::Array {
    OBSERVED_ATTRIBUTES.iter().map(|name| JsValue::from_str(name)).collect()
}

/// Record `name` in the process-wide registry before calling
/// `customElements.define` on the JS side.
#[wasm_bindgen(js_name = defineElement)]
pub fn define_element(name: &str) -> Result<(), JsValue> {
    crate::registry::define_global(name).map_err(|e| JsValue::from_str(&e.to_string()))
}
