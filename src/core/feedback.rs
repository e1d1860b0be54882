//! Feedback calculation and representation
//!
//! Feedback is five verdicts, one per guess position:
//! - `Exact`: letter is in the correct position (green)
//! - `Present`: letter is in the word, wrong position (yellow)
//! - `Absent`: letter is not in the word, or every copy is already accounted for

use super::word::WORD_LEN;
use super::{HintError, Word};
use std::fmt;

/// Verdict for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Exact,
    Present,
    Absent,
}

impl Verdict {
    pub const ALL: [Self; 3] = [Self::Exact, Self::Present, Self::Absent];

    /// Emoji square for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, aligned positionally with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LEN]);

impl Feedback {
    /// All exact (the guess was the answer)
    pub const SOLVED: Self = Self([Verdict::Exact; WORD_LEN]);

    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LEN]) -> Self {
        Self(verdicts)
    }

    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LEN] {
        &self.0
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark every exact position match and consume that letter once
    /// 2. Second pass, left to right over the remaining positions: mark present
    ///    while the letter has unconsumed copies in the answer, otherwise absent
    ///
    /// A guess with two copies of a letter the answer holds once therefore gets
    /// one present (the leftmost non-exact copy) and one absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("bubba").unwrap();
    /// let answer = Word::new("beans").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// use Verdict::*;
    /// assert_eq!(feedback.verdicts(), &[Exact, Absent, Absent, Absent, Present]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LEN];
        let mut answer_available = answer.char_counts();

        // Index needed to access guess[i], answer[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] == answer.chars()[i] {
                result[i] = Verdict::Exact;
                if let Some(count) = answer_available.get_mut(&guess.chars()[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == Verdict::Exact {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&guess.chars()[i])
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Number of exact verdicts
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Exact).count()
    }

    /// Number of present verdicts
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Render as emoji squares, e.g. "🟩🟨⬜⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", FeedbackSymbols::default().render(self))
    }
}

/// Classify `guess` against `answer`
///
/// # Errors
/// `InvalidLength` if either argument is not five characters, `InvalidValue`
/// if either holds anything but lowercase letters.
pub fn classify(guess: &str, answer: &str) -> Result<Feedback, HintError> {
    let guess = Word::named("guess", guess)?;
    let answer = Word::named("answer", answer)?;
    Ok(Feedback::calculate(&guess, &answer))
}

/// Classify raw byte input, rejecting anything that is not text
///
/// # Errors
/// `InvalidType` for non-UTF-8 input, then the same errors as [`classify`].
pub fn classify_bytes(guess: &[u8], answer: &[u8]) -> Result<Feedback, HintError> {
    let as_text = |name: &'static str, bytes: &[u8]| {
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| HintError::InvalidType {
                name,
                found: format!("{} non-UTF-8 bytes", bytes.len()),
            })
    };
    classify(&as_text("guess", guess)?, &as_text("answer", answer)?)
}

/// The three printable symbols a caller uses to spell feedback
///
/// Matching is ASCII case-insensitive, so the default alphabet accepts both
/// "gy---" and "GY---".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackSymbols {
    pub exact: char,
    pub present: char,
    pub absent: char,
}

impl Default for FeedbackSymbols {
    fn default() -> Self {
        Self {
            exact: 'g',
            present: 'y',
            absent: '-',
        }
    }
}

impl FeedbackSymbols {
    /// Build an alphabet, rejecting one that maps two verdicts to the same symbol
    ///
    /// # Errors
    /// `InvalidValue` naming the duplicated symbol.
    pub fn new(exact: char, present: char, absent: char) -> Result<Self, HintError> {
        let same = |a: char, b: char| a.eq_ignore_ascii_case(&b);
        for (a, b) in [(exact, present), (exact, absent), (present, absent)] {
            if same(a, b) {
                return Err(HintError::InvalidValue {
                    name: "feedback symbols",
                    found: b,
                    reason: "is used for more than one verdict",
                });
            }
        }
        Ok(Self {
            exact,
            present,
            absent,
        })
    }

    #[must_use]
    pub const fn symbol(&self, verdict: Verdict) -> char {
        match verdict {
            Verdict::Exact => self.exact,
            Verdict::Present => self.present,
            Verdict::Absent => self.absent,
        }
    }

    /// Map one symbol to its verdict
    #[must_use]
    pub fn verdict(&self, symbol: char) -> Option<Verdict> {
        Verdict::ALL
            .into_iter()
            .find(|&v| self.symbol(v).eq_ignore_ascii_case(&symbol))
    }

    /// Parse a five-symbol feedback string
    ///
    /// # Errors
    /// `InvalidLength` if `text` is not five symbols, `InvalidValue` for a
    /// symbol outside the alphabet.
    pub fn parse(&self, text: &str) -> Result<Feedback, HintError> {
        let actual = text.chars().count();
        if actual != WORD_LEN {
            return Err(HintError::InvalidLength {
                name: "feedback",
                expected: WORD_LEN,
                actual,
            });
        }

        let mut verdicts = [Verdict::Absent; WORD_LEN];
        for (slot, ch) in verdicts.iter_mut().zip(text.chars()) {
            *slot = self.verdict(ch).ok_or(HintError::InvalidValue {
                name: "feedback",
                found: ch,
                reason: "is not a recognised feedback symbol",
            })?;
        }
        Ok(Feedback(verdicts))
    }

    /// Spell `feedback` in this alphabet
    #[must_use]
    pub fn render(&self, feedback: &Feedback) -> String {
        feedback.0.iter().map(|&v| self.symbol(v)).collect()
    }

    /// Human-readable legend, e.g. "G = green, Y = yellow, - = grey"
    #[must_use]
    pub fn legend(&self) -> String {
        format!(
            "{} = green, {} = yellow, {} = grey",
            self.exact.to_ascii_uppercase(),
            self.present.to_ascii_uppercase(),
            self.absent.to_ascii_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Verdict::{Absent, Exact, Present};
    use super::*;
    use test_case::test_case;

    #[test_case("frank", "goopy", [Absent, Absent, Absent, Absent, Absent] ; "no hits")]
    #[test_case("frank", "laugh", [Absent, Absent, Present, Absent, Absent] ; "one misplaced")]
    #[test_case("blown", "beans", [Exact, Absent, Absent, Absent, Present] ; "one exact one misplaced")]
    #[test_case("frank", "beans", [Absent, Absent, Exact, Exact, Absent] ; "two exact")]
    #[test_case("loopy", "goopy", [Absent, Exact, Exact, Exact, Exact] ; "four exact")]
    #[test_case("beans", "beans", [Exact, Exact, Exact, Exact, Exact] ; "all exact")]
    #[test_case("beans", "floof", [Absent, Absent, Absent, Absent, Absent] ; "answer repeats unguessed letter")]
    #[test_case("frank", "floof", [Exact, Absent, Absent, Absent, Absent] ; "answer repeats first letter")]
    #[test_case("after", "floof", [Absent, Present, Absent, Absent, Absent] ; "answer repeats second letter")]
    #[test_case("ulfen", "floof", [Absent, Exact, Present, Absent, Absent] ; "answer repeats third letter")]
    #[test_case("lords", "dudes", [Absent, Absent, Absent, Present, Exact] ; "answer repeats fourth letter")]
    #[test_case("lords", "sassy", [Absent, Absent, Absent, Absent, Present] ; "answer repeats fifth letter")]
    #[test_case("bubba", "beans", [Exact, Absent, Absent, Absent, Present] ; "guess repeats letter answer has once")]
    #[test_case("boooh", "prods", [Absent, Absent, Exact, Absent, Absent] ; "exact copy consumes the only one")]
    #[test_case("boooh", "foody", [Absent, Exact, Exact, Absent, Absent] ; "two exact copies exhaust the answer")]
    #[test_case("foody", "flops", [Exact, Absent, Exact, Absent, Absent] ; "exact copy beats earlier misplaced copy")]
    #[test_case("llama", "hello", [Present, Present, Absent, Absent, Absent] ; "leftmost misplaced copies claim first")]
    #[test_case("speed", "erase", [Present, Absent, Present, Present, Absent] ; "both copies misplaced")]
    #[test_case("robot", "floor", [Present, Present, Absent, Exact, Absent] ; "exact claimed before misplaced")]
    #[test_case("eerie", "there", [Present, Absent, Present, Absent, Exact] ; "exact at end limits misplaced copies")]
    fn classify_matches_game_rules(guess: &str, answer: &str, expected: [Verdict; 5]) {
        assert_eq!(classify(guess, answer).unwrap(), Feedback::new(expected));
    }

    #[test]
    fn classify_self_is_solved() {
        for word in ["crane", "sassy", "aaaaa", "zzzzz", "eerie"] {
            let feedback = classify(word, word).unwrap();
            assert!(feedback.is_solved());
            assert_eq!(feedback.count_exact(), 5);
        }
    }

    #[test]
    fn classify_is_not_symmetric() {
        let forward = classify("speed", "erase").unwrap();
        let backward = classify("erase", "speed").unwrap();
        assert_ne!(forward, backward);
    }

    #[test]
    fn classify_counts_never_exceed_answer_copies() {
        // Three o's guessed, answer has two
        let feedback = classify("ooooh", "robot").unwrap();
        assert_eq!(feedback.count_exact() + feedback.count_present(), 2);
    }

    #[test]
    fn classify_reports_bad_lengths() {
        assert_eq!(
            classify("bean", "beans"),
            Err(HintError::InvalidLength {
                name: "guess",
                expected: 5,
                actual: 4
            })
        );
        assert!(matches!(
            classify("beans", ""),
            Err(HintError::InvalidLength { name: "answer", actual: 0, .. })
        ));
        assert!(matches!(
            classify("beans", &"b".repeat(117)),
            Err(HintError::InvalidLength { actual: 117, .. })
        ));
    }

    #[test]
    fn classify_bytes_rejects_non_text() {
        assert!(matches!(
            classify_bytes(b"\xffeans", b"beans"),
            Err(HintError::InvalidType { name: "guess", .. })
        ));
        assert!(matches!(
            classify_bytes(b"beans", b"\xc3\x28ans"),
            Err(HintError::InvalidType { name: "answer", .. })
        ));
        assert!(classify_bytes(b"beans", b"beans").unwrap().is_solved());
    }

    #[test]
    fn symbols_parse_and_render() {
        let symbols = FeedbackSymbols::default();
        let feedback = symbols.parse("gY--y").unwrap();
        assert_eq!(
            feedback,
            Feedback::new([Exact, Present, Absent, Absent, Present])
        );
        assert_eq!(symbols.render(&feedback), "gy--y");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜🟨");
        assert_eq!(feedback.to_string(), "gy--y");
    }

    #[test]
    fn symbols_custom_alphabet() {
        let symbols = FeedbackSymbols::new('g', 'y', ' ').unwrap();
        let feedback = symbols.parse("gggy ").unwrap();
        assert_eq!(feedback, Feedback::new([Exact, Exact, Exact, Present, Absent]));
    }

    #[test]
    fn symbols_reject_unknown_and_bad_length() {
        let symbols = FeedbackSymbols::default();
        assert!(matches!(
            symbols.parse("gyxgy"),
            Err(HintError::InvalidValue { found: 'x', .. })
        ));
        assert!(matches!(
            symbols.parse("gyg"),
            Err(HintError::InvalidLength { actual: 3, .. })
        ));
    }

    #[test]
    fn symbols_must_be_distinct() {
        assert!(FeedbackSymbols::new('g', 'G', '-').is_err());
        assert!(FeedbackSymbols::new('1', '2', '3').is_ok());
    }
}
