//! Message formatting helpers

use crate::core::{Direction, Proximity, RoundScore};

/// Directional feedback for a miss
#[must_use]
pub const fn direction_message(direction: Direction) -> &'static str {
    match direction {
        Direction::TooHigh => "Too high.",
        Direction::TooLow => "Too low.",
    }
}

/// Relative-distance hint for a miss
#[must_use]
pub const fn proximity_message(proximity: Proximity) -> &'static str {
    match proximity {
        Proximity::Warmer => "You're getting warmer (closer) than last guess.",
        Proximity::Colder => "You're getting colder (farther) than last guess.",
        Proximity::Same => "Same distance as last guess.",
        Proximity::VeryClose => "Very close!",
    }
}

/// One-line breakdown of a winning round's score
#[must_use]
pub fn score_breakdown(score: &RoundScore) -> String {
    format!(
        "{} (base {} + time bonus {})",
        score.total(),
        score.base,
        score.time_bonus
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_messages() {
        assert_eq!(direction_message(Direction::TooHigh), "Too high.");
        assert_eq!(direction_message(Direction::TooLow), "Too low.");
    }

    #[test]
    fn proximity_messages() {
        assert!(proximity_message(Proximity::Warmer).contains("warmer"));
        assert!(proximity_message(Proximity::Colder).contains("colder"));
        assert!(proximity_message(Proximity::Same).contains("Same distance"));
        assert_eq!(proximity_message(Proximity::VeryClose), "Very close!");
    }

    #[test]
    fn breakdown_shows_all_components() {
        let score = RoundScore {
            base: 70,
            time_bonus: 25,
            attempts_used: 2,
            elapsed_secs: 5,
        };
        assert_eq!(score_breakdown(&score), "95 (base 70 + time bonus 25)");
    }
}
