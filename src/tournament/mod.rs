pub mod bracket;
pub mod constants;
pub mod controller;
pub mod round_name;

pub use bracket::{Bracket, BracketPhase, Match, MatchId, PendingTransition, Round};
pub use controller::{BracketEvent, TournamentConfig, TournamentController};
pub use round_name::{round_label, RoundLanguage};
