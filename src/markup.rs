//! Splitting text into animatable letter segments.

/// Seconds between the start of consecutive letters.
pub const STAGGER_STEP_SECS: f64 = 0.1;

/// One unit of the rendered text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// A non-space character, animated on its own
    Letter {
        ch: char,
        /// Position among letters only; spaces do not consume an index
        index: usize,
    },
    /// A literal space, never wrapped or delayed
    Gap,
}

impl Segment {
    #[inline]
    pub fn is_animated(&self) -> bool {
        matches!(self, Segment::Letter { .. })
    }

    /// The character this segment renders.
    #[inline]
    pub fn char(&self) -> char {
        match self {
            Segment::Letter { ch, .. } => *ch,
            Segment::Gap => ' ',
        }
    }
}

/// Split `text` into segments, preserving order.
///
/// ## Example
///
/// ```rust
/// use slide_text::{segments, Segment};
///
/// let segs = segments("AB C");
/// assert_eq!(
///     segs,
///     vec![
///         Segment::Letter { ch: 'A', index: 0 },
///         Segment::Letter { ch: 'B', index: 1 },
///         Segment::Gap,
///         Segment::Letter { ch: 'C', index: 2 },
///     ]
/// );
/// ```
pub fn segments(text: &str) -> Vec<Segment> {
    let mut next_index = 0;
    text.chars()
        .map(|ch| {
            if ch == ' ' {
                Segment::Gap
            } else {
                let index = next_index;
                next_index += 1;
                Segment::Letter { ch, index }
            }
        })
        .collect()
}

/// Start delay in seconds for the letter at `index`.
#[inline]
pub fn stagger_delay(index: usize) -> f64 {
    // index / 10 is exact at one decimal; index * 0.1 is not
    index as f64 / 10.0
}

/// Append `ch` to `out`, escaping HTML-significant characters.
pub(crate) fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(ch),
    }
}
