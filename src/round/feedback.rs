//! Per-guess feedback: direction and proximity

use crate::consts::{GETTING_WARM_MAX, VERY_CLOSE_MAX};

/// Which side of the secret a wrong guess landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TooLow,
    TooHigh,
}

impl Direction {
    /// Direction of `guess` relative to `secret`. None when they are equal.
    pub fn of(guess: u32, secret: u32) -> Option<Self> {
        match guess.cmp(&secret) {
            std::cmp::Ordering::Less => Some(Direction::TooLow),
            std::cmp::Ordering::Greater => Some(Direction::TooHigh),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::TooLow => "Too Low.",
            Direction::TooHigh => "Too High.",
        }
    }
}

/// How far a wrong guess was from the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    /// Distance 0..=5
    VeryClose,
    /// Distance 6..=10
    GettingWarm,
    /// Distance 11 and up
    Cold,
}

impl Proximity {
    /// Classify an absolute distance
    pub fn classify(distance: u32) -> Self {
        match distance {
            d if d <= VERY_CLOSE_MAX => Proximity::VeryClose,
            d if d <= GETTING_WARM_MAX => Proximity::GettingWarm,
            _ => Proximity::Cold,
        }
    }

    pub fn between(guess: u32, secret: u32) -> Self {
        Self::classify(guess.abs_diff(secret))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Proximity::VeryClose => "Very close!",
            Proximity::GettingWarm => "Getting warm.",
            Proximity::Cold => "Cold.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_proximity_boundaries() {
        assert_eq!(Proximity::classify(0), Proximity::VeryClose);
        assert_eq!(Proximity::classify(5), Proximity::VeryClose);
        assert_eq!(Proximity::classify(6), Proximity::GettingWarm);
        assert_eq!(Proximity::classify(10), Proximity::GettingWarm);
        assert_eq!(Proximity::classify(11), Proximity::Cold);
        assert_eq!(Proximity::classify(99), Proximity::Cold);
    }

    #[test]
    fn test_direction_equal_is_none() {
        assert_eq!(Direction::of(42, 42), None);
        assert_eq!(Direction::of(1, 100), Some(Direction::TooLow));
        assert_eq!(Direction::of(100, 1), Some(Direction::TooHigh));
    }

    proptest! {
        #[test]
        fn prop_proximity_partitions_distances(d in 0u32..=99) {
            let p = Proximity::classify(d);
            let expected = if d <= 5 {
                Proximity::VeryClose
            } else if d <= 10 {
                Proximity::GettingWarm
            } else {
                Proximity::Cold
            };
            prop_assert_eq!(p, expected);
        }

        #[test]
        fn prop_direction_matches_ordering(guess in 1u32..=100, secret in 1u32..=100) {
            prop_assume!(guess != secret);
            let dir = Direction::of(guess, secret);
            prop_assert_eq!(dir == Some(Direction::TooLow), guess < secret);
            prop_assert_eq!(dir == Some(Direction::TooHigh), guess > secret);
        }
    }
}
