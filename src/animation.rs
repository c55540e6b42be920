//! Per-letter activation of the staggered reveal.

use crate::markup::stagger_delay;

/// Animation state of a single letter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LetterAnimation {
    /// Whether the letter left its hidden base state
    pub active: bool,
    /// Start delay in seconds, stamped on activation
    pub delay_secs: Option<f64>,
}

impl LetterAnimation {
    /// CSS `animation-delay` value, if stamped.
    pub fn delay_css(&self) -> Option<String> {
        self.delay_secs.map(|d| format!("{d}s"))
    }
}

/// Current state of the cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CascadeState {
    /// Letters are in their hidden base state
    Idle,
    /// Every letter has been activated with its delay
    Active,
}

/// Activation state for every letter of one render.
///
/// The cascade does not keep time; delays are stamped once and the styling
/// facility plays them.
///
/// ## Example
///
/// ```rust
/// use slide_text::{Cascade, CascadeState};
///
/// let mut cascade = Cascade::new(3);
/// assert_eq!(cascade.state(), CascadeState::Idle);
///
/// cascade.activate();
/// assert_eq!(cascade.state(), CascadeState::Active);
/// assert_eq!(cascade.letter(2).unwrap().delay_secs, Some(0.2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Cascade {
    letters: Vec<LetterAnimation>,
    state: CascadeState,
}

impl Cascade {
    /// Create an idle cascade for `letter_count` letters.
    pub fn new(letter_count: usize) -> Self {
        Self {
            letters: vec![LetterAnimation::default(); letter_count],
            state: CascadeState::Idle,
        }
    }

    /// Activate every letter in order, stamping `index × 0.1s` delays.
    ///
    /// Returns the number of letters activated. Calling it again restamps
    /// the same values.
    pub fn activate(&mut self) -> usize {
        for (index, letter) in self.letters.iter_mut().enumerate() {
            letter.active = true;
            letter.delay_secs = Some(stagger_delay(index));
        }
        self.state = CascadeState::Active;
        self.letters.len()
    }

    #[inline]
    pub fn state(&self) -> CascadeState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == CascadeState::Active
    }

    #[inline]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    /// Get the state of the letter at `index`.
    #[inline]
    pub fn letter(&self, index: usize) -> Option<&LetterAnimation> {
        self.letters.get(index)
    }

    pub fn letters(&self) -> &[LetterAnimation] {
        &self.letters
    }
}
