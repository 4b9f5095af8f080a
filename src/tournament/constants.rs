use crate::types::{Tick, MILLISECONDS};

pub const DEFAULT_BRACKET_SIZE: usize = 16;
pub const MIN_PARTICIPANTS: usize = 2;
pub const DEFAULT_ROUND_TRANSITION_DELAY: Tick = 800 * MILLISECONDS;
