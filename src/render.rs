//! Rendering a resolved config into a self-contained fragment.

use crate::animation::Cascade;
use crate::markup::{push_escaped, segments, Segment};
use crate::style::{stylesheet, ACTIVE_CLASS, CONTAINER_CLASS, LETTER_CLASS};
use crate::WidgetConfig;

/// Output of one render: stylesheet, segments and their animation state.
///
/// A fragment always replaces the previous one in full; it is never
/// patched.
///
/// ## Example
///
/// ```rust
/// use slide_text::{Attributes, Fragment, RevealMode, WidgetConfig};
///
/// let attrs: Attributes = [("text", "AB C")].into_iter().collect();
/// let mut fragment = Fragment::new(&WidgetConfig::resolve(&attrs, RevealMode::OnVisible));
///
/// assert_eq!(
///     fragment.markup(),
///     r#"<div class="slide-container"><span class="letter">A</span><span class="letter">B</span> <span class="letter">C</span></div>"#
/// );
///
/// fragment.activate();
/// assert!(fragment.markup().contains(r#"<span class="letter animate" style="animation-delay: 0.2s">C</span>"#));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    style: String,
    segments: Vec<Segment>,
    cascade: Cascade,
}

impl Fragment {
    /// Build the fragment for `config` with every letter idle.
    pub fn new(config: &WidgetConfig) -> Self {
        let segments = segments(&config.text);
        let letter_count = segments.iter().filter(|s| s.is_animated()).count();
        Self {
            style: stylesheet(config),
            segments,
            cascade: Cascade::new(letter_count),
        }
    }

    /// Activate all letters. Returns the number activated.
    pub fn activate(&mut self) -> usize {
        self.cascade.activate()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.cascade.is_active()
    }

    #[inline]
    pub fn style(&self) -> &str {
        &self.style
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn cascade(&self) -> &Cascade {
        &self.cascade
    }

    #[inline]
    pub fn letter_count(&self) -> usize {
        self.cascade.letter_count()
    }

    /// Container markup with one span per letter and literal spaces.
    pub fn markup(&self) -> String {
        let mut out = format!(r#"<div class="{CONTAINER_CLASS}">"#);
        for segment in &self.segments {
            match *segment {
                Segment::Gap => out.push(' '),
                Segment::Letter { ch, index } => {
                    let delay = self.cascade.letter(index).and_then(|l| l.delay_css());
                    match delay {
                        Some(delay) => out.push_str(&format!(
                            r#"<span class="{LETTER_CLASS} {ACTIVE_CLASS}" style="animation-delay: {delay}">"#
                        )),
                        None => out.push_str(&format!(r#"<span class="{LETTER_CLASS}">"#)),
                    }
                    push_escaped(&mut out, ch);
                    out.push_str("</span>");
                }
            }
        }
        out.push_str("</div>");
        out
    }

    /// Full fragment: `<style>` block followed by the container markup.
    pub fn to_html(&self) -> String {
        format!("<style>{}</style>{}", self.style, self.markup())
    }
}

/// Web-specific mounting into a shadow root.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use web_sys::{Element, ShadowRoot};

    /// Replace the shadow root's content with `fragment`.
    pub fn mount(fragment: &Fragment, root: &ShadowRoot) {
        root.set_inner_html(&fragment.to_html());
    }

    /// Find the rendered container inside `root`.
    ///
    /// Returns `Ok(None)` when nothing has been mounted yet.
    pub fn container(root: &ShadowRoot) -> Result<Option<Element>, String> {
        root.query_selector(&format!(".{CONTAINER_CLASS}"))
            .map_err(|_| "Failed to query slide container".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attributes, RevealMode};

    fn fragment_for(text: &str) -> Fragment {
        let attrs: Attributes = [("text", text)].into_iter().collect();
        Fragment::new(&WidgetConfig::resolve(&attrs, RevealMode::OnVisible))
    }

    #[test]
    fn idle_markup() {
        let fragment = fragment_for("AB C");
        assert_eq!(fragment.letter_count(), 3);
        assert!(!fragment.is_active());
        assert_eq!(
            fragment.markup(),
            concat!(
                r#"<div class="slide-container">"#,
                r#"<span class="letter">A</span>"#,
                r#"<span class="letter">B</span>"#,
                " ",
                r#"<span class="letter">C</span>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn active_markup_stamps_delays() {
        let mut fragment = fragment_for("AB C");
        assert_eq!(fragment.activate(), 3);
        assert_eq!(
            fragment.markup(),
            concat!(
                r#"<div class="slide-container">"#,
                r#"<span class="letter animate" style="animation-delay: 0s">A</span>"#,
                r#"<span class="letter animate" style="animation-delay: 0.1s">B</span>"#,
                " ",
                r#"<span class="letter animate" style="animation-delay: 0.2s">C</span>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn empty_text_renders_bare_container() {
        // empty attribute falls back to the default text
        assert_eq!(fragment_for("").letter_count(), 7);

        let config = WidgetConfig {
            text: String::new(),
            ..WidgetConfig::default()
        };
        let mut fragment = Fragment::new(&config);
        assert_eq!(fragment.letter_count(), 0);
        assert_eq!(fragment.markup(), r#"<div class="slide-container"></div>"#);
        assert_eq!(fragment.activate(), 0);
    }

    #[test]
    fn letters_are_escaped() {
        let fragment = fragment_for("<b>");
        assert!(fragment.markup().contains(r#"<span class="letter">&lt;</span>"#));
        assert!(fragment.markup().contains(r#"<span class="letter">&gt;</span>"#));
        assert_eq!(fragment.segments()[1], Segment::Letter { ch: 'b', index: 1 });
    }

    #[test]
    fn html_wraps_style() {
        let fragment = fragment_for("Hi");
        let html = fragment.to_html();
        assert!(html.starts_with("<style>"));
        assert!(html.contains("@keyframes slideLeft"));
        assert!(html.ends_with("</div>"));
        let attrs: Attributes = [("text", "Hi")].into_iter().collect();
        let config = WidgetConfig::resolve(&attrs, RevealMode::OnVisible);
        assert_eq!(fragment.style(), stylesheet(&config));
    }

    #[test]
    fn identical_config_renders_identically() {
        assert_eq!(fragment_for("Twice"), fragment_for("Twice"));
        assert_eq!(fragment_for("Twice").to_html(), fragment_for("Twice").to_html());
    }
}
