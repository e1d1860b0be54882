//! Guess selection strategies
//!
//! A strategy decides, round by round, whether the ranking is restricted to
//! words without repeated letters.

use std::fmt;
use std::str::FromStr;

/// When to restrict suggestions to words with distinct letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Never restrict
    All,
    /// Restrict in the first round only (default)
    #[default]
    UniqueFirst,
    /// Restrict every round
    Unique,
}

impl Strategy {
    /// Every strategy, in display order
    pub const ALL: [Self; 3] = [Self::All, Self::UniqueFirst, Self::Unique];

    /// Create strategy from name string
    ///
    /// Supported names: "all", "unique-first", "unique". Returns `None` if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "all" | "unique-false" => Some(Self::All),
            "unique-first" | "first" => Some(Self::UniqueFirst),
            "unique" | "unique-true" => Some(Self::Unique),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::UniqueFirst => "unique-first",
            Self::Unique => "unique",
        }
    }

    /// Whether ranking in `round` (1-based) is restricted to unique words
    #[must_use]
    pub const fn unique_only(self, round: usize) -> bool {
        match self {
            Self::All => false,
            Self::UniqueFirst => round == 1,
            Self::Unique => true,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(|s| s.name()).collect();
            format!("unknown strategy {s:?}, expected one of: {}", names.join(", "))
        })
    }
}
