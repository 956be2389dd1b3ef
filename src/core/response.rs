//! Feedback computation and representation
//!
//! A Response encodes the host's feedback for one guess using base-3 packing:
//! - 0 = absent (letter not in word)
//! - 1 = present (letter in word, wrong position)
//! - 2 = correct (letter in correct position)
//!
//! The response is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::Word;
use super::word::WORD_LEN;

/// Per-position feedback tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

/// Feedback for one guess against one hypothetical target
///
/// Represents the per-letter tags as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible responses)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Response(u8);

impl Response {
    /// All positions correct (the winning response)
    pub const ALL_CORRECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new response from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Response value must be < 243");
        Self(value)
    }

    /// Get the raw packed value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every position is correct (the previous guess won)
    #[inline]
    #[must_use]
    pub const fn is_all_correct(self) -> bool {
        self.0 == 242
    }

    /// Compute the feedback for `guess` when `target` is the hidden word
    ///
    /// Implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct and consume the matched
    ///    target letter
    /// 2. Second pass: each unresolved guess letter consumes one remaining
    ///    target occurrence (present) or is marked absent
    ///
    /// The exact pass must fully resolve before the displaced pass so a
    /// repeated guess letter cannot claim a target letter that a later exact
    /// match needs.
    ///
    /// # Examples
    /// ```
    /// use wordle_optimal::core::{Response, Tag, Word};
    ///
    /// let target = Word::new("trace").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let response = Response::compute(&target, &guess);
    ///
    /// assert_eq!(
    ///     response.tags(),
    ///     [Tag::Present, Tag::Correct, Tag::Correct, Tag::Absent, Tag::Correct]
    /// );
    /// ```
    #[must_use]
    pub fn compute(target: &Word, guess: &Word) -> Self {
        let mut result = [0u8; WORD_LEN];
        let mut available = target.letter_counts();

        // First pass: exact matches consume the matched target letter
        for i in 0..WORD_LEN {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = Tag::Correct as u8;
                available[(guess.char_at(i) - b'a') as usize] -= 1;
            }
        }

        // Second pass: displaced letters draw from what the first pass left
        for i in 0..WORD_LEN {
            if result[i] == Tag::Absent as u8 {
                let remaining = &mut available[(guess.char_at(i) - b'a') as usize];
                if *remaining > 0 {
                    result[i] = Tag::Present as u8;
                    *remaining -= 1;
                }
            }
        }

        // Pack as base-3 number
        let mut packed = 0u8;
        let mut multiplier = 1u8;
        for &digit in &result {
            packed += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Self(packed)
    }

    /// Decode the packed value into per-position tags
    #[must_use]
    pub fn tags(self) -> [Tag; WORD_LEN] {
        let mut tags = [Tag::Absent; WORD_LEN];
        let mut val = self.0;

        for tag in &mut tags {
            *tag = match val % 3 {
                1 => Tag::Present,
                2 => Tag::Correct,
                _ => Tag::Absent,
            };
            val /= 3;
        }

        tags
    }

    /// Get the tag at a specific position (0-4)
    #[must_use]
    pub fn tag_at(self, position: usize) -> Tag {
        debug_assert!(position < WORD_LEN);
        self.tags()[position]
    }

    /// Parse a response from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜/⬛ for absent (light- and dark-theme squares both work)
    ///
    /// # Examples
    /// ```
    /// use wordle_optimal::core::Response;
    ///
    /// let r1 = Response::from_str("GY-GY").unwrap();
    /// let r2 = Response::from_str("🟩🟨⬛🟩🟨").unwrap();
    /// assert_eq!(r1, r2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut packed = 0u8;
        let mut multiplier = 1u8;

        for ch in chars {
            let digit = match ch {
                'G' | 'g' | '🟩' => 2,
                'Y' | 'y' | '🟨' => 1,
                '-' | '_' | '⬜' | '⬛' => 0,
                _ => return None,
            };
            packed += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Some(Self(packed))
    }

    /// Render as colored block glyphs, light-theme absent squares
    ///
    /// This is the canonical form used to key the share-deduction table.
    ///
    /// # Examples
    /// ```
    /// use wordle_optimal::core::Response;
    ///
    /// let r = Response::from_str("GY-GY").unwrap();
    /// assert_eq!(r.to_blocks(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_blocks(self) -> String {
        let mut result = String::with_capacity(4 * WORD_LEN);
        let mut val = self.0;

        for _ in 0..WORD_LEN {
            result.push(match val % 3 {
                2 => '🟩',
                1 => '🟨',
                _ => '⬜',
            });
            val /= 3;
        }

        result
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_blocks())
    }
}

impl std::str::FromStr for Response {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid response string: {s}"))
    }
}
