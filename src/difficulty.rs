//! Difficulty tiers
//!
//! Each tier carries a menu key, a display name (also the highscore file key)
//! and an optional attempt budget.

/// Difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// All tiers in menu order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Single-letter menu key
    pub fn key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "E",
            Difficulty::Normal => "N",
            Difficulty::Hard => "H",
        }
    }

    /// Display name, also used as the persisted highscore key
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Maximum number of guesses (None = unlimited)
    pub fn max_attempts(&self) -> Option<u32> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Normal => Some(10),
            Difficulty::Hard => Some(7),
        }
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Normal => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "E" => Some(Difficulty::Easy),
            "N" => Some(Difficulty::Normal),
            "H" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Exact match on the display name
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == s)
    }

    /// Budget as shown in the difficulty chooser
    pub fn budget_label(&self) -> String {
        match self.max_attempts() {
            Some(n) => n.to_string(),
            None => "∞".to_string(),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
