use super::bracket::{Bracket, BracketPhase, Match, PendingTransition, Round};
use super::constants::{DEFAULT_BRACKET_SIZE, DEFAULT_ROUND_TRANSITION_DELAY, MIN_PARTICIPANTS};
use super::round_name::{round_label, RoundLanguage};
use crate::types::{AppResult, Tick};
use anyhow::anyhow;
use log::{debug, info};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TournamentConfig {
    pub bracket_size: usize,
    pub round_transition_delay: Tick,
    pub language: RoundLanguage,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            bracket_size: DEFAULT_BRACKET_SIZE,
            round_transition_delay: DEFAULT_ROUND_TRANSITION_DELAY,
            language: RoundLanguage::default(),
        }
    }
}

impl TournamentConfig {
    pub fn validate(&self) -> AppResult<()> {
        if self.bracket_size < MIN_PARTICIPANTS {
            return Err(anyhow!(
                "Bracket size must be at least {MIN_PARTICIPANTS}, got {}.",
                self.bracket_size
            ));
        }
        Ok(())
    }
}

/// What a command did to the bracket, for the UI to react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BracketEvent {
    NextMatch,
    RoundTransition { next_round: usize },
    RoundStarted { round: usize },
    Champion,
}

#[derive(Debug, Clone)]
pub struct TournamentController<C> {
    config: TournamentConfig,
    bracket: Bracket<C>,
}

impl<C> TournamentController<C>
where
    C: Clone + PartialEq + Debug,
{
    pub fn new(config: TournamentConfig) -> Self {
        Self {
            config,
            bracket: Bracket::default(),
        }
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn bracket(&self) -> &Bracket<C> {
        &self.bracket
    }

    /// Replaces any previous bracket with a fresh one seeded from the first
    /// `bracket_size` candidates. Returns false, leaving an empty bracket,
    /// when there are fewer than two candidates.
    pub fn start(&mut self, candidates: &[C], now: Tick) -> bool {
        if candidates.len() < MIN_PARTICIPANTS {
            debug!(
                "Not starting a tournament with {} candidate(s).",
                candidates.len()
            );
            self.bracket = Bracket::default();
            return false;
        }

        let size = self.config.bracket_size.min(candidates.len());
        self.bracket = Bracket::seeded(&candidates[..size]);
        info!(
            "Tournament {} started at {now} with {size} entrants over {} rounds.",
            self.bracket.id,
            self.bracket.total_rounds()
        );
        true
    }

    pub fn reset(&mut self, candidates: &[C], now: Tick) -> bool {
        self.start(candidates, now)
    }

    pub fn current_match(&self) -> Option<&Match<C>> {
        self.bracket.current_match()
    }

    /// Records `winner` on the current match. Selections without a current
    /// match, or naming someone outside it, are ignored.
    pub fn select_winner(&mut self, winner: &C, now: Tick) -> Option<BracketEvent> {
        let delay = self.config.round_transition_delay;
        let bracket_id = self.bracket.id;

        let Some(current) = self.bracket.current_match_mut() else {
            debug!("Ignoring selection of {winner:?}: no match is being played.");
            return None;
        };
        if !current.has_entrant(winner) {
            debug!("Ignoring selection of {winner:?}: not playing in {}.", current.id);
            return None;
        }
        current.winner = Some(winner.clone());
        debug!("{} won by {winner:?}.", current.id);

        let current_round = self.bracket.current_round;
        let Some(winners) = self.bracket.round(current_round)?.winners() else {
            self.bracket.current_match_index += 1;
            return Some(BracketEvent::NextMatch);
        };
        if let [champion] = winners.as_slice() {
            info!("Tournament {} won by {champion:?}.", self.bracket.id);
            self.bracket.champion = Some(champion.clone());
            self.bracket.phase = BracketPhase::Complete;
            return Some(BracketEvent::Champion);
        }

        let next_round = current_round + 1;
        info!(
            "Round {current_round} over, {} entrants move on to round {next_round}.",
            winners.len()
        );
        self.bracket.phase = BracketPhase::RoundTransition(PendingTransition {
            bracket_id,
            target_round: next_round,
            fires_at: now.saturating_add(delay),
        });
        Some(BracketEvent::RoundTransition { next_round })
    }

    /// Builds the scheduled round once its delay has elapsed.
    pub fn tick(&mut self, now: Tick) -> Option<BracketEvent> {
        match self.bracket.phase {
            BracketPhase::RoundTransition(pending) if pending.is_due(now) => {
                self.complete_transition(&pending)
            }
            _ => None,
        }
    }

    /// Builds the next round if `pending` still belongs to this bracket and
    /// to its current round boundary, regardless of its due time.
    pub fn complete_transition(&mut self, pending: &PendingTransition) -> Option<BracketEvent> {
        let BracketPhase::RoundTransition(scheduled) = self.bracket.phase else {
            debug!("Dropping transition to round {}: nothing scheduled.", pending.target_round);
            return None;
        };
        if scheduled.bracket_id != pending.bracket_id
            || scheduled.target_round != pending.target_round
        {
            debug!(
                "Dropping stale transition to round {} of bracket {}.",
                pending.target_round, pending.bracket_id
            );
            return None;
        }

        let Some(winners) = self.bracket.round(self.bracket.current_round)?.winners() else {
            debug!("Dropping transition to round {}: round still open.", pending.target_round);
            return None;
        };
        let round = pending.target_round;
        self.bracket.rounds.push(Round::from_entrants(round, &winners));
        self.bracket.current_round = round;
        self.bracket.current_match_index = 0;
        self.bracket.phase = BracketPhase::InProgress;
        info!("Round {round} ({}) started.", self.round_label(round));
        Some(BracketEvent::RoundStarted { round })
    }

    pub fn pending_transition(&self) -> Option<&PendingTransition> {
        match &self.bracket.phase {
            BracketPhase::RoundTransition(pending) => Some(pending),
            _ => None,
        }
    }

    pub fn phase(&self) -> BracketPhase {
        self.bracket.phase
    }

    pub fn champion(&self) -> Option<&C> {
        self.bracket.champion.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.bracket.is_complete()
    }

    pub fn is_empty(&self) -> bool {
        self.bracket.phase == BracketPhase::Empty
    }

    pub fn rounds(&self) -> &[Round<C>] {
        &self.bracket.rounds
    }

    pub fn current_round_number(&self) -> usize {
        self.bracket.current_round
    }

    /// 1-based position of the current match and the length of its round.
    pub fn match_position_in_round(&self) -> Option<(usize, usize)> {
        self.current_match()?;
        let round = self.bracket.round(self.bracket.current_round)?;
        Some((self.bracket.current_match_index + 1, round.matches.len()))
    }

    pub fn total_rounds(&self) -> usize {
        self.bracket.total_rounds()
    }

    /// Percentage of the real matches of the full bracket that have been
    /// decided. Exactly 100 only once the champion is known.
    pub fn progress(&self) -> f64 {
        let total = self.bracket.total_matches();
        if total == 0 {
            return 0.0;
        }
        self.bracket.decided_matches() as f64 / total as f64 * 100.0
    }

    pub fn round_label(&self, round: usize) -> String {
        round_label(round, self.total_rounds(), self.config.language)
    }
}
