//! Typewriter cadence
//!
//! The hero line cycles a fixed word list: type a word character by
//! character, hold it, delete it, move to the next, forever. This is the
//! step machine; the component layer sleeps for the returned delay between
//! steps.

/// One step of the cycle: what to display and how long to wait before the
/// next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u64,
}

/// Per-phase delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    /// Delay after revealing one more character
    pub typing_ms: u64,
    /// Delay after hiding one character
    pub deleting_ms: u64,
    /// Hold on a fully typed word
    pub hold_ms: u64,
    /// Pause before starting the next word
    pub advance_ms: u64,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            typing_ms: 100,
            deleting_ms: 50,
            hold_ms: 1500,
            advance_ms: 300,
        }
    }
}

/// Cycles through `words`, yielding one [`TypeStep`] per `tick`.
#[derive(Debug, Clone)]
pub struct TypewriterCycle {
    words: Vec<String>,
    cadence: Cadence,
    word: usize,
    chars: usize,
    deleting: bool,
}

impl TypewriterCycle {
    pub fn new(words: Vec<String>) -> Self {
        Self::with_cadence(words, Cadence::default())
    }

    pub fn with_cadence(words: Vec<String>, cadence: Cadence) -> Self {
        Self {
            words,
            cadence,
            word: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Advance one step and return the text to display plus the delay to
    /// sleep before the next call.
    pub fn tick(&mut self) -> TypeStep {
        let Some(word) = self.words.get(self.word) else {
            // Nothing to type; idle at the hold cadence.
            return TypeStep {
                text: String::new(),
                delay_ms: self.cadence.hold_ms,
            };
        };

        let word_len = word.chars().count();
        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(word_len);
        }

        let text: String = word.chars().take(self.chars).collect();
        let mut delay_ms = if self.deleting {
            self.cadence.deleting_ms
        } else {
            self.cadence.typing_ms
        };

        if !self.deleting && self.chars == word_len {
            delay_ms = self.cadence.hold_ms;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.word = (self.word + 1) % self.words.len();
            delay_ms = self.cadence.advance_ms;
        }

        TypeStep { text, delay_ms }
    }
}
