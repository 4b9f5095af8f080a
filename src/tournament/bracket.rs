use crate::types::{BracketId, Tick};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum::Display as StrumDisplay;

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MatchId {
    // 1-based round number.
    pub round: usize,
    // 0-based position within the round.
    pub position: usize,
}

impl Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}-m{}", self.round, self.position + 1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match<C> {
    pub id: MatchId,
    pub slot_a: C,
    pub slot_b: C,
    pub winner: Option<C>,
    // Set at creation only: equal entrants in both slots still play.
    #[serde(default)]
    bye: bool,
}

impl<C: Clone + PartialEq> Match<C> {
    pub fn new(id: MatchId, slot_a: C, slot_b: C) -> Self {
        Self {
            id,
            slot_a,
            slot_b,
            winner: None,
            bye: false,
        }
    }

    /// A match where the only entrant advances without playing.
    pub fn bye(id: MatchId, entrant: C) -> Self {
        Self {
            id,
            slot_a: entrant.clone(),
            slot_b: entrant.clone(),
            winner: Some(entrant),
            bye: true,
        }
    }

    pub fn round(&self) -> usize {
        self.id.round
    }

    pub fn is_bye(&self) -> bool {
        self.bye
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    pub fn has_entrant(&self, candidate: &C) -> bool {
        self.slot_a == *candidate || self.slot_b == *candidate
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Round<C> {
    pub number: usize,
    pub matches: Vec<Match<C>>,
}

impl<C: Clone + PartialEq> Round<C> {
    /// Pairs entrants two at a time, in order. A trailing unpaired
    /// entrant gets a bye that is already resolved.
    pub fn from_entrants(number: usize, entrants: &[C]) -> Self {
        let matches = entrants
            .chunks(2)
            .enumerate()
            .map(|(position, pair)| {
                let id = MatchId { round: number, position };
                match pair {
                    [a, b] => Match::new(id, a.clone(), b.clone()),
                    [a] => Match::bye(id, a.clone()),
                    _ => unreachable!("chunks(2) yields one or two entrants"),
                }
            })
            .collect();

        Self { number, matches }
    }

    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(|m| m.is_decided())
    }

    /// Winners in match order, or `None` while a match is still undecided.
    pub fn winners(&self) -> Option<Vec<C>> {
        self.matches.iter().map(|m| m.winner.clone()).collect()
    }
}

/// A deferred construction of the next round. It captures the identity of
/// the bracket it was scheduled on, so it can never be applied to a
/// bracket that replaced it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PendingTransition {
    pub bracket_id: BracketId,
    pub target_round: usize,
    pub fires_at: Tick,
}

impl PendingTransition {
    pub fn is_due(&self, now: Tick) -> bool {
        now >= self.fires_at
    }
}

#[derive(Debug, Default, Clone, Copy, StrumDisplay, PartialEq)]
pub enum BracketPhase {
    // No matches, waiting for a candidate list.
    #[default]
    Empty,
    // A match is waiting for a winner.
    InProgress,
    // The round is over and the next one is scheduled.
    RoundTransition(PendingTransition),
    // The champion is known.
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bracket<C> {
    pub id: BracketId,
    pub rounds: Vec<Round<C>>,
    pub seed_count: usize,
    pub current_round: usize,
    pub current_match_index: usize,
    pub champion: Option<C>,
    pub phase: BracketPhase,
}

impl<C> Default for Bracket<C> {
    fn default() -> Self {
        Self {
            id: BracketId::nil(),
            rounds: vec![],
            seed_count: 0,
            current_round: 1,
            current_match_index: 0,
            champion: None,
            phase: BracketPhase::Empty,
        }
    }
}

impl<C: Clone + PartialEq> Bracket<C> {
    pub fn seeded(entrants: &[C]) -> Self {
        Self {
            id: BracketId::new_v4(),
            rounds: vec![Round::from_entrants(1, entrants)],
            seed_count: entrants.len(),
            phase: BracketPhase::InProgress,
            ..Default::default()
        }
    }

    pub fn round(&self, number: usize) -> Option<&Round<C>> {
        number
            .checked_sub(1)
            .and_then(|index| self.rounds.get(index))
    }

    fn round_mut(&mut self, number: usize) -> Option<&mut Round<C>> {
        number
            .checked_sub(1)
            .and_then(|index| self.rounds.get_mut(index))
    }

    pub fn matches(&self) -> impl Iterator<Item = &Match<C>> {
        self.rounds.iter().flat_map(|round| round.matches.iter())
    }

    pub fn current_match(&self) -> Option<&Match<C>> {
        if self.phase != BracketPhase::InProgress {
            return None;
        }

        self.round(self.current_round)?
            .matches
            .get(self.current_match_index)
    }

    pub(crate) fn current_match_mut(&mut self) -> Option<&mut Match<C>> {
        if self.phase != BracketPhase::InProgress {
            return None;
        }

        let index = self.current_match_index;
        self.round_mut(self.current_round)?.matches.get_mut(index)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == BracketPhase::Complete
    }

    /// Number of rounds a full bracket of `seed_count` entrants plays.
    pub fn total_rounds(&self) -> usize {
        total_rounds(self.seed_count)
    }

    /// Real matches in a full bracket: every one of them eliminates
    /// exactly one entrant, byes eliminate nobody.
    pub fn total_matches(&self) -> usize {
        self.seed_count.saturating_sub(1)
    }

    pub fn decided_matches(&self) -> usize {
        self.matches()
            .filter(|m| !m.is_bye() && m.is_decided())
            .count()
    }
}

pub fn total_rounds(entrants: usize) -> usize {
    if entrants < 2 {
        return 0;
    }
    (usize::BITS - (entrants - 1).leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use super::{total_rounds, Match, MatchId, Round};

    #[test]
    fn test_total_rounds() {
        let expected = [
            (0, 0),
            (1, 0),
            (2, 1),
            (3, 2),
            (4, 2),
            (5, 3),
            (8, 3),
            (9, 4),
            (16, 4),
            (17, 5),
        ];
        for (entrants, rounds) in expected {
            assert_eq!(total_rounds(entrants), rounds, "entrants: {entrants}");
        }
    }

    #[test]
    fn test_round_from_even_entrants() {
        let round = Round::from_entrants(1, &["a", "b", "c", "d"]);
        assert_eq!(round.matches.len(), 2);
        assert_eq!(round.matches[0], Match::new(MatchId { round: 1, position: 0 }, "a", "b"));
        assert_eq!(round.matches[1], Match::new(MatchId { round: 1, position: 1 }, "c", "d"));
        assert!(!round.is_complete());
    }

    #[test]
    fn test_round_from_odd_entrants_gets_a_bye() {
        let round = Round::from_entrants(3, &["a", "b", "c"]);
        assert_eq!(round.matches.len(), 2);

        let bye = &round.matches[1];
        assert!(bye.is_bye());
        assert_eq!(bye.winner, Some("c"));
        assert_eq!(bye.id.to_string(), "r3-m2");
    }

    #[test]
    fn test_round_winners_keep_match_order() {
        let mut round = Round::from_entrants(1, &["a", "b", "c", "d", "e"]);
        round.matches[0].winner = Some("b");
        assert_eq!(round.winners(), None);

        round.matches[1].winner = Some("c");
        assert!(round.is_complete());
        assert_eq!(round.winners(), Some(vec!["b", "c", "e"]));
    }

    #[test]
    fn test_equal_entrants_are_not_a_bye() {
        let round = Round::from_entrants(1, &["a", "a", "b"]);
        assert!(!round.matches[0].is_bye());
        assert!(!round.matches[0].is_decided());
        assert!(round.matches[1].is_bye());
    }
}
