//! Typewriter animation for the hero tagline.
//!
//! Cycles forever through a fixed list of phrases: type one character per
//! tick, hold, delete one character per tick, hold, move to the next
//! phrase. The four phases are explicit states; the delay before the next
//! tick is derived from the state a tick lands in.
//!
//! Characters are grapheme clusters, so the displayed prefix never cuts an
//! accented letter or emoji in half.

use std::time::Duration;

use folio_core::{Step, Ticker, TypewriterConfig, TypewriterError};
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

// =============================================================================
// Phase
// =============================================================================

/// Current animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Adding characters.
    #[default]
    Typing,
    /// Phrase fully typed; holding before deletion starts.
    PausedAtFull,
    /// Removing characters.
    Deleting,
    /// Phrase fully deleted; holding before the next phrase starts.
    PausedAtEmpty,
}

impl Phase {
    /// Whether the next tick removes a character.
    pub fn is_deleting(self) -> bool {
        matches!(self, Phase::PausedAtFull | Phase::Deleting)
    }
}

/// Delays between ticks, per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold_full: Duration,
    pub hold_empty: Duration,
}

impl TypewriterTiming {
    /// Delay before the tick that follows a tick ending in `phase`.
    pub fn delay_after(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Typing => self.type_delay,
            Phase::PausedAtFull => self.hold_full,
            Phase::Deleting => self.delete_delay,
            Phase::PausedAtEmpty => self.hold_empty,
        }
    }
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self::from(&TypewriterConfig::default())
    }
}

impl From<&TypewriterConfig> for TypewriterTiming {
    fn from(config: &TypewriterConfig) -> Self {
        Self {
            type_delay: config.type_delay(),
            delete_delay: config.delete_delay(),
            hold_full: config.hold_full(),
            hold_empty: config.hold_empty(),
        }
    }
}

// =============================================================================
// Phrase
// =============================================================================

/// A phrase with precomputed grapheme boundaries.
#[derive(Debug, Clone)]
struct Phrase {
    text: String,
    /// `boundaries[n]` is the byte length of the first `n` graphemes.
    boundaries: Vec<usize>,
}

impl Phrase {
    fn new(text: String) -> Self {
        let mut boundaries: Vec<usize> = text.grapheme_indices(true).map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self { text, boundaries }
    }

    /// Length in graphemes.
    fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    fn prefix(&self, chars: usize) -> &str {
        &self.text[..self.boundaries[chars.min(self.len())]]
    }
}

// =============================================================================
// Typewriter
// =============================================================================

/// What the tagline shows after a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypewriterFrame {
    pub text: String,
    pub phrase_index: usize,
    pub char_index: usize,
    pub phase: Phase,
    /// Delay before the next tick.
    #[serde(skip)]
    pub delay: Duration,
}

/// Typewriter state machine.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Phrase>,
    phrase_index: usize,
    char_index: usize,
    phase: Phase,
    timing: TypewriterTiming,
}

impl Typewriter {
    /// Create a typewriter over a non-empty list of non-empty phrases.
    pub fn new<I, S>(phrases: I, timing: TypewriterTiming) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<Phrase> = phrases
            .into_iter()
            .map(|p| Phrase::new(p.into()))
            .collect();

        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        if let Some(index) = phrases.iter().position(|p| p.len() == 0) {
            return Err(TypewriterError::EmptyPhrase { index });
        }

        Ok(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            timing,
        })
    }

    pub fn from_config(config: &TypewriterConfig) -> Result<Self, TypewriterError> {
        Self::new(config.phrases.iter().cloned(), TypewriterTiming::from(config))
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        self.phase.is_deleting()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// The phrase currently being typed or deleted.
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index].text
    }

    /// The text currently displayed.
    pub fn text(&self) -> &str {
        self.phrases[self.phrase_index].prefix(self.char_index)
    }

    /// Back to the first phrase, nothing typed.
    pub fn reset(&mut self) {
        self.phrase_index = 0;
        self.char_index = 0;
        self.phase = Phase::Typing;
    }

    /// Run one tick and return what to display.
    pub fn advance(&mut self) -> TypewriterFrame {
        let phrase_len = self.phrases[self.phrase_index].len();

        // The displayed text must be captured before the phrase advances,
        // when deleting reaches the empty string.
        let text = if self.phase.is_deleting() {
            self.char_index -= 1;
            let text = self.text().to_string();
            if self.char_index == 0 {
                self.phase = Phase::PausedAtEmpty;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            } else {
                self.phase = Phase::Deleting;
            }
            text
        } else {
            self.char_index += 1;
            self.phase = if self.char_index == phrase_len {
                Phase::PausedAtFull
            } else {
                Phase::Typing
            };
            self.text().to_string()
        };

        TypewriterFrame {
            text,
            phrase_index: self.phrase_index,
            char_index: self.char_index,
            phase: self.phase,
            delay: self.timing.delay_after(self.phase),
        }
    }
}

impl Ticker for Typewriter {
    type Frame = TypewriterFrame;

    fn tick(&mut self) -> Step<TypewriterFrame> {
        let frame = self.advance();
        let delay = frame.delay;
        Step::after(frame, delay)
    }
}

// =============================================================================
// Tests
// =============================================================================
