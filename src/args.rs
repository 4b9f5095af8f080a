use crate::catalog::{Catalog, Exhibition};
use crate::tournament::constants::{DEFAULT_BRACKET_SIZE, DEFAULT_ROUND_TRANSITION_DELAY};
use crate::tournament::{RoundLanguage, TournamentConfig};
use crate::types::{AppResult, SystemTimeTick, Tick};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(name="artcup", about = "Exhibition world cup in your terminal", author, version, long_about = None)]
pub struct AppArgs {
    #[clap(long, short = 'c', action=ArgAction::Set, help = "Load exhibitions from a JSON file instead of the bundled catalog")]
    pub catalog: Option<PathBuf>,
    #[clap(long, short = 'b', action=ArgAction::Set, default_value_t = DEFAULT_BRACKET_SIZE, help = "Maximum number of exhibitions entering the world cup")]
    pub bracket_size: usize,
    #[clap(long, short = 'd', action=ArgAction::Set, default_value_t = DEFAULT_ROUND_TRANSITION_DELAY, help = "Pause between rounds in milliseconds")]
    pub transition_delay: Tick,
    #[clap(long, short = 't', action=ArgAction::Set, help = "Only enter exhibitions with this theme")]
    pub theme: Option<String>,
    #[clap(long, short = 'r', action=ArgAction::SetTrue, help = "Only enter exhibitions running today")]
    pub running_only: bool,
    #[clap(long, short = 's', action=ArgAction::Set, help = "Shuffle the entrants with this seed")]
    pub shuffle_seed: Option<u64>,
    #[clap(long, short = 'l', value_enum, default_value_t = RoundLanguage::English, help = "Language of the round names")]
    pub language: RoundLanguage,
    #[clap(long, action=ArgAction::Set, help = "Set store prefix")]
    pub store_prefix: Option<String>,
}

impl AppArgs {
    pub fn test() -> Self {
        Self {
            catalog: None,
            bracket_size: DEFAULT_BRACKET_SIZE,
            transition_delay: DEFAULT_ROUND_TRANSITION_DELAY,
            theme: None,
            running_only: false,
            shuffle_seed: None,
            language: RoundLanguage::English,
            store_prefix: None,
        }
    }

    pub fn store_prefix(&self) -> &str {
        if let Some(prefix) = self.store_prefix.as_ref() {
            prefix
        } else {
            "local"
        }
    }

    pub fn tournament_config(&self) -> AppResult<TournamentConfig> {
        let config = TournamentConfig {
            bracket_size: self.bracket_size,
            round_transition_delay: self.transition_delay,
            language: self.language,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load_catalog(&self) -> AppResult<Catalog> {
        match self.catalog.as_ref() {
            Some(path) => Catalog::from_path(path),
            None => Catalog::embedded(),
        }
    }

    /// Exhibitions entering the world cup, in seeding order.
    pub fn entrants(&self, catalog: &Catalog) -> Vec<Exhibition> {
        let mut entrants = match self.shuffle_seed {
            Some(seed) => catalog.shuffled(seed),
            None => catalog.exhibitions().to_vec(),
        };

        if let Some(theme) = self.theme.as_deref() {
            entrants.retain(|e| e.theme.as_deref() == Some(theme));
        }

        if self.running_only {
            let today = Tick::now().as_local_date();
            entrants.retain(|e| e.is_running_on(today));
        }

        entrants
    }
}
