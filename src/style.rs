//! Scoped stylesheet generation.

use crate::config::{Direction, WidgetConfig};

/// Easing curve shared by both slide directions.
pub(crate) const EASING: &str = "cubic-bezier(0.075, 0.82, 0.165, 1)";

/// CSS class of the element wrapping all segments.
pub(crate) const CONTAINER_CLASS: &str = "slide-container";
/// CSS class of a single letter.
pub(crate) const LETTER_CLASS: &str = "letter";
/// CSS class added to a letter once its animation is active.
pub(crate) const ACTIVE_CLASS: &str = "animate";

/// Generate the stylesheet for a resolved config.
///
/// Values are interpolated verbatim; nothing is validated or escaped
/// beyond what the config carries.
///
/// ## Example
///
/// ```rust
/// use slide_text::{stylesheet, WidgetConfig};
///
/// let css = stylesheet(&WidgetConfig::default());
/// assert!(css.contains("animation: slideLeft 1.5s"));
/// assert!(css.contains("font-size: 5vw;"));
/// ```
pub fn stylesheet(config: &WidgetConfig) -> String {
    let animation = config.direction.animation_name();
    let WidgetConfig {
        background_color,
        text_color,
        alignment,
        duration,
        font_family,
        generic_family,
        font_size,
        ..
    } = config;

    format!(
        r#"
:host {{
    display: block;
    width: 100%;
    background: {background_color};
    overflow: hidden;
}}
.{CONTAINER_CLASS} {{
    text-align: {alignment};
    font-family: {font_family}, {generic_family};
    font-size: {font_size}vw;
    color: {text_color};
    text-transform: uppercase;
    padding: 20px;
}}
.{LETTER_CLASS} {{
    display: inline-block;
    opacity: 0;
}}
.{LETTER_CLASS}.{ACTIVE_CLASS} {{
    animation: {animation} {duration}s {EASING} forwards;
}}
{left}
{right}
"#,
        left = keyframes(Direction::Left),
        right = keyframes(Direction::Right),
    )
}

/// Keyframe block sliding a letter in from the direction's start offset.
pub fn keyframes(direction: Direction) -> String {
    format!(
        r#"@keyframes {name} {{
    from {{
        opacity: 0;
        transform: translateX({from});
    }}
    to {{
        opacity: 1;
        transform: translateX(0);
    }}
}}"#,
        name = direction.animation_name(),
        from = direction.translate_from(),
    )
}
