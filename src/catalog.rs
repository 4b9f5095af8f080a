use crate::store::{load_asset, load_from_json, CATALOG_ASSET_FILENAME};
use crate::types::{AppResult, ExhibitionId};
use anyhow::anyhow;
use chrono::NaiveDate;
use itertools::Itertools;
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exhibition {
    pub id: ExhibitionId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub theme: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub image: String,
    pub location: String,
    #[serde(default)]
    pub link: String,
    pub cost: String,
}

// Catalog ids are unique, so they are the exhibition's identity.
impl PartialEq for Exhibition {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Exhibition {}

impl Exhibition {
    /// Title on a single line. Some titles carry a subtitle after a newline.
    pub fn short_title(&self) -> String {
        self.title.lines().map(str::trim).join(" ")
    }

    pub fn is_running_on(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_free(&self) -> bool {
        self.cost.trim() == "무료"
    }

    pub fn period(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }

    /// Follow-up question for the curator chat about this exhibition.
    pub fn ask_prompt(&self) -> String {
        format!("{} 전시에 대해 알려줘", self.short_title())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    exhibitions: Vec<Exhibition>,
}

impl Catalog {
    pub fn new(exhibitions: Vec<Exhibition>) -> AppResult<Self> {
        if exhibitions.is_empty() {
            return Err(anyhow!("Catalog has no exhibitions."));
        }

        let mut ids = HashSet::new();
        for exhibition in exhibitions.iter() {
            if !ids.insert(exhibition.id) {
                return Err(anyhow!("Duplicate exhibition id {}.", exhibition.id));
            }
            if exhibition.end < exhibition.start {
                return Err(anyhow!(
                    "Exhibition {} ends before it starts.",
                    exhibition.id
                ));
            }
        }

        Ok(Self { exhibitions })
    }

    pub fn embedded() -> AppResult<Self> {
        Self::new(load_asset(CATALOG_ASSET_FILENAME)?)
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        Self::new(load_from_json(path)?)
    }

    pub fn exhibitions(&self) -> &[Exhibition] {
        &self.exhibitions
    }

    pub fn len(&self) -> usize {
        self.exhibitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exhibitions.is_empty()
    }

    pub fn get(&self, id: ExhibitionId) -> Option<&Exhibition> {
        self.exhibitions.iter().find(|e| e.id == id)
    }

    pub fn themes(&self) -> Vec<&str> {
        self.exhibitions
            .iter()
            .filter_map(|e| e.theme.as_deref())
            .unique()
            .sorted()
            .collect()
    }

    pub fn with_theme(&self, theme: &str) -> Vec<Exhibition> {
        self.exhibitions
            .iter()
            .filter(|e| e.theme.as_deref() == Some(theme))
            .cloned()
            .collect()
    }

    pub fn running_on(&self, date: NaiveDate) -> Vec<Exhibition> {
        self.exhibitions
            .iter()
            .filter(|e| e.is_running_on(date))
            .cloned()
            .collect()
    }

    pub fn shuffled(&self, seed: u64) -> Vec<Exhibition> {
        let rng = &mut ChaCha8Rng::seed_from_u64(seed);
        let mut exhibitions = self.exhibitions.clone();
        exhibitions.shuffle(rng);
        exhibitions
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, Exhibition};
    use crate::types::AppResult;
    use chrono::NaiveDate;

    fn exhibition(id: u32, theme: Option<&str>, start: &str, end: &str) -> Exhibition {
        Exhibition {
            id,
            title: format!("Exhibition {id}"),
            description: String::new(),
            theme: theme.map(str::to_string),
            start: start.parse().expect("Valid date"),
            end: end.parse().expect("Valid date"),
            image: String::new(),
            location: "Seoul".to_string(),
            link: String::new(),
            cost: "무료".to_string(),
        }
    }

    #[test]
    fn test_embedded_catalog() -> AppResult<()> {
        let catalog = Catalog::embedded()?;
        assert_eq!(catalog.len(), 16);

        let first = catalog.get(1).expect("Exhibition 1 should exist");
        assert_eq!(first.theme.as_deref(), Some("회화"));
        assert_eq!(first.start, NaiveDate::from_ymd_opt(2025, 8, 12).expect("Valid date"));
        assert!(catalog.get(6).is_some_and(|e| e.theme.is_none()));
        assert!(catalog.themes().contains(&"미디어아트"));
        Ok(())
    }

    #[test]
    fn test_parse_with_null_theme_and_missing_link() -> AppResult<()> {
        let data = r#"[{
            "id": 7,
            "title": "Light\nand shadow",
            "description": "d",
            "theme": null,
            "start": "2025-01-01",
            "end": "2025-02-01",
            "image": "i",
            "location": "l",
            "cost": "5,000원"
        }]"#;
        let exhibitions: Vec<Exhibition> = serde_json::from_str(data)?;
        let catalog = Catalog::new(exhibitions)?;
        let exhibition = &catalog.exhibitions()[0];
        assert_eq!(exhibition.theme, None);
        assert_eq!(exhibition.short_title(), "Light and shadow");
        assert_eq!(exhibition.ask_prompt(), "Light and shadow 전시에 대해 알려줘");
        assert!(!exhibition.is_free());
        Ok(())
    }

    #[test]
    fn test_invalid_catalogs() {
        assert!(Catalog::new(vec![]).is_err());

        let duplicated = vec![
            exhibition(1, None, "2025-01-01", "2025-02-01"),
            exhibition(1, None, "2025-01-01", "2025-02-01"),
        ];
        assert!(matches!(
            Catalog::new(duplicated),
            Err(e) if e.to_string() == "Duplicate exhibition id 1."
        ));

        let reversed = vec![exhibition(2, None, "2025-03-01", "2025-02-01")];
        assert!(Catalog::new(reversed).is_err());
    }

    #[test]
    fn test_filters() -> AppResult<()> {
        let catalog = Catalog::new(vec![
            exhibition(1, Some("회화"), "2025-01-01", "2025-01-31"),
            exhibition(2, Some("조각"), "2025-02-01", "2025-02-28"),
            exhibition(3, Some("회화"), "2025-01-15", "2025-02-15"),
            exhibition(4, None, "2025-01-01", "2025-12-31"),
        ])?;

        assert_eq!(catalog.themes(), vec!["조각", "회화"]);
        let paintings = catalog.with_theme("회화");
        assert_eq!(paintings.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);

        let date = NaiveDate::from_ymd_opt(2025, 2, 1).expect("Valid date");
        let running = catalog.running_on(date);
        assert_eq!(running.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 3, 4]);
        Ok(())
    }

    #[test]
    fn test_shuffle_is_deterministic() -> AppResult<()> {
        let catalog = Catalog::embedded()?;
        let a = catalog.shuffled(42);
        let b = catalog.shuffled(42);
        assert_eq!(a, b);
        assert_eq!(a.len(), catalog.len());
        for exhibition in catalog.exhibitions() {
            assert!(a.contains(exhibition));
        }
        Ok(())
    }

    #[test]
    fn test_identity_is_the_id() {
        let a = exhibition(5, Some("회화"), "2025-01-01", "2025-02-01");
        let mut b = a.clone();
        b.title = "Renamed".to_string();
        assert_eq!(a, b);
    }
}
