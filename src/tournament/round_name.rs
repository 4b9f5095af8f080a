use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(
    Debug, Default, Clone, Copy, Display, EnumIter, ValueEnum, Serialize, Deserialize, PartialEq,
)]
pub enum RoundLanguage {
    #[default]
    English,
    Korean,
}

/// Names `round` counting back from the final, so the same mapping works
/// for any number of rounds.
pub fn round_label(round: usize, total_rounds: usize, language: RoundLanguage) -> String {
    if round == 0 || round > total_rounds {
        return match language {
            RoundLanguage::English => format!("Round {round}"),
            RoundLanguage::Korean => format!("{round}라운드"),
        };
    }

    let rounds_to_final = total_rounds - round;
    match (rounds_to_final, language) {
        (0, RoundLanguage::English) => "Final".to_string(),
        (0, RoundLanguage::Korean) => "결승전".to_string(),
        (1, RoundLanguage::English) => "Semifinal".to_string(),
        (1, RoundLanguage::Korean) => "준결승".to_string(),
        (k, RoundLanguage::English) => format!("Round of {}", entrants_in_round(k)),
        (k, RoundLanguage::Korean) => format!("{}강전", entrants_in_round(k)),
    }
}

fn entrants_in_round(rounds_to_final: usize) -> u64 {
    1u64.checked_shl(rounds_to_final as u32 + 1)
        .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::{round_label, RoundLanguage};

    #[test]
    fn test_sixteen_entrants_round_names() {
        let english = (1..=4)
            .map(|r| round_label(r, 4, RoundLanguage::English))
            .collect::<Vec<_>>();
        assert_eq!(
            english,
            vec!["Round of 16", "Round of 8", "Semifinal", "Final"]
        );

        let korean = (1..=4)
            .map(|r| round_label(r, 4, RoundLanguage::Korean))
            .collect::<Vec<_>>();
        assert_eq!(korean, vec!["16강전", "8강전", "준결승", "결승전"]);
    }

    #[test]
    fn test_small_brackets_start_closer_to_the_final() {
        assert_eq!(round_label(1, 1, RoundLanguage::English), "Final");
        assert_eq!(round_label(1, 2, RoundLanguage::English), "Semifinal");
        assert_eq!(round_label(1, 3, RoundLanguage::Korean), "8강전");
    }

    #[test]
    fn test_out_of_bracket_round() {
        assert_eq!(round_label(5, 4, RoundLanguage::English), "Round 5");
        assert_eq!(round_label(0, 4, RoundLanguage::Korean), "0라운드");
    }
}
