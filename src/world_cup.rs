use crate::catalog::{Catalog, Exhibition};
use crate::tournament::constants::MIN_PARTICIPANTS;
use crate::tournament::{BracketEvent, TournamentConfig, TournamentController};
use crate::types::{AppResult, ExhibitionId, Tick};
use anyhow::anyhow;
use log::info;

/// Everything the interface shows: the catalog, the pool of exhibitions
/// that may enter a world cup and the bracket being played.
#[derive(Debug, Clone)]
pub struct WorldCup {
    catalog: Catalog,
    pool: Vec<Exhibition>,
    theme: Option<String>,
    last_entrants: Vec<Exhibition>,
    pub controller: TournamentController<Exhibition>,
}

impl WorldCup {
    pub fn new(catalog: Catalog, pool: Vec<Exhibition>, config: TournamentConfig) -> Self {
        Self {
            catalog,
            pool,
            theme: None,
            last_entrants: vec![],
            controller: TournamentController::new(config),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Moves the theme filter to the next theme of the catalog, wrapping
    /// back to no filter after the last one.
    pub fn cycle_theme(&mut self) {
        let themes = self.catalog.themes();
        let next = match self.theme.as_deref() {
            None => themes.first(),
            Some(theme) => themes
                .iter()
                .position(|t| *t == theme)
                .and_then(|idx| themes.get(idx + 1)),
        };
        self.theme = next.map(|t| t.to_string());
    }

    pub fn set_theme(&mut self, theme: Option<String>) {
        self.theme = theme;
    }

    /// The pool narrowed down by the theme filter, in seeding order.
    pub fn entrants(&self) -> Vec<Exhibition> {
        self.pool
            .iter()
            .filter(|e| match self.theme.as_deref() {
                Some(theme) => e.theme.as_deref() == Some(theme),
                None => true,
            })
            .cloned()
            .collect()
    }

    pub fn start(&mut self, now: Tick) -> AppResult<()> {
        let entrants = self.entrants();
        self.start_with(entrants, now)
    }

    /// Plays again with the entrants of the last world cup.
    pub fn restart(&mut self, now: Tick) -> AppResult<()> {
        if self.last_entrants.is_empty() {
            return self.start(now);
        }
        let entrants = self.last_entrants.clone();
        self.start_with(entrants, now)
    }

    fn start_with(&mut self, entrants: Vec<Exhibition>, now: Tick) -> AppResult<()> {
        if entrants.len() < MIN_PARTICIPANTS {
            return Err(anyhow!(
                "Need at least {MIN_PARTICIPANTS} exhibitions to start a world cup, found {}.",
                entrants.len()
            ));
        }

        self.controller.start(&entrants, now);
        info!(
            "World cup started with theme {}.",
            self.theme.as_deref().unwrap_or("any")
        );
        self.last_entrants = entrants;
        Ok(())
    }

    /// Picks the exhibition with `exhibition_id` as the winner of the
    /// current match.
    pub fn select(&mut self, exhibition_id: ExhibitionId, now: Tick) -> Option<BracketEvent> {
        let current = self.controller.current_match()?;
        let winner = [&current.slot_a, &current.slot_b]
            .into_iter()
            .find(|e| e.id == exhibition_id)?
            .clone();
        self.controller.select_winner(&winner, now)
    }

    pub fn tick(&mut self, now: Tick) -> Option<BracketEvent> {
        self.controller.tick(now)
    }

    pub fn get_exhibition_or_err(&self, exhibition_id: ExhibitionId) -> AppResult<&Exhibition> {
        self.catalog
            .get(exhibition_id)
            .ok_or(anyhow!("Exhibition {exhibition_id} not found."))
    }
}

#[cfg(test)]
mod tests {
    use super::WorldCup;
    use crate::catalog::Catalog;
    use crate::tournament::{BracketEvent, BracketPhase, TournamentConfig};
    use crate::types::AppResult;

    fn world_cup() -> AppResult<WorldCup> {
        let catalog = Catalog::embedded()?;
        let pool = catalog.exhibitions().to_vec();
        Ok(WorldCup::new(
            catalog,
            pool,
            TournamentConfig {
                round_transition_delay: 100,
                ..Default::default()
            },
        ))
    }

    #[test]
    fn test_theme_cycle_wraps_around() -> AppResult<()> {
        let mut world_cup = world_cup()?;
        let themes: Vec<String> = world_cup
            .catalog()
            .themes()
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert!(!themes.is_empty());

        for theme in themes.iter() {
            world_cup.cycle_theme();
            assert_eq!(world_cup.theme(), Some(theme.as_str()));
            assert!(world_cup
                .entrants()
                .iter()
                .all(|e| e.theme.as_ref() == Some(theme)));
        }
        world_cup.cycle_theme();
        assert_eq!(world_cup.theme(), None);
        assert_eq!(world_cup.entrants().len(), 16);
        Ok(())
    }

    #[test]
    fn test_start_needs_two_entrants() -> AppResult<()> {
        let mut world_cup = world_cup()?;
        world_cup.set_theme(Some("No such theme".to_string()));
        let result = world_cup.start(0);
        assert!(matches!(
            result,
            Err(e) if e.to_string() == "Need at least 2 exhibitions to start a world cup, found 0."
        ));
        assert!(world_cup.controller.is_empty());
        Ok(())
    }

    #[test]
    fn test_select_by_id() -> AppResult<()> {
        let mut world_cup = world_cup()?;
        world_cup.start(0)?;

        let current = world_cup.controller.current_match().cloned();
        let current = current.expect("A match should be played");
        // Exhibitions outside the match are ignored.
        let outsider = world_cup.entrants()[5].id;
        assert_eq!(world_cup.select(outsider, 0), None);

        assert_eq!(
            world_cup.select(current.slot_b.id, 0),
            Some(BracketEvent::NextMatch)
        );
        assert_eq!(
            world_cup.controller.rounds()[0].matches[0].winner.as_ref(),
            Some(&current.slot_b)
        );
        Ok(())
    }

    #[test]
    fn test_restart_replays_last_entrants() -> AppResult<()> {
        let mut world_cup = world_cup()?;
        world_cup.cycle_theme();
        world_cup.start(0)?;
        let first_round = world_cup.controller.rounds()[0].clone();

        let mut now = 0;
        while !world_cup.controller.is_complete() {
            now += 100;
            match world_cup.controller.current_match() {
                Some(m) => {
                    let id = m.slot_a.id;
                    world_cup.select(id, now);
                }
                None => {
                    world_cup.tick(now);
                }
            }
        }
        assert_eq!(world_cup.controller.phase(), BracketPhase::Complete);

        // A changed filter does not affect the replay.
        world_cup.set_theme(None);
        world_cup.restart(now)?;
        assert_eq!(world_cup.controller.phase(), BracketPhase::InProgress);
        assert_eq!(world_cup.controller.rounds()[0], first_round);
        Ok(())
    }
}
