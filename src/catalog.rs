//! Episode catalog.
//!
//! The catalog is an immutable, fully materialized collection loaded once at
//! startup — either the dataset bundled into the binary or a JSON file named
//! on the command line. Nothing mutates it afterwards; both presenters and the
//! saved-collection view borrow from it.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const BUNDLED_DATASET: &str = include_str!("../data/episodes.json");

/// One catalog entry. Identifiers are unique and stable for the process
/// lifetime; they key the bookmark ledger and the presenters' scroll anchors.
#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub guest: String,
    pub duration: String,
    /// ISO `YYYY-MM-DD`; unparseable dates sort after everything else.
    pub published: String,
    pub image_url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub links: EpisodeLinks,
}

/// Platform links. A present entry means the platform button is offered.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeLinks {
    /// Canonical episode page, also the share URL.
    pub page: String,
    #[serde(default)]
    pub spotify: Option<String>,
    #[serde(default)]
    pub apple: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub deezer: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Episode {
    pub fn published_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.published, "%Y-%m-%d").ok()
    }
}

pub struct Catalog {
    episodes: Vec<Episode>,
    /// Indices into `episodes`, newest publish date first.
    by_recency: Vec<usize>,
}

impl Catalog {
    pub fn new(episodes: Vec<Episode>) -> Result<Self> {
        let mut seen = HashSet::new();
        for episode in &episodes {
            if !seen.insert(episode.id) {
                bail!("duplicate episode id {} in dataset", episode.id);
            }
        }

        let mut by_recency: Vec<usize> = (0..episodes.len()).collect();
        by_recency.sort_by(|&a, &b| {
            let da = episodes[a].published_date();
            let db = episodes[b].published_date();
            db.cmp(&da).then_with(|| episodes[b].id.cmp(&episodes[a].id))
        });

        debug!(episodes = episodes.len(), "Catalog indexed");
        Ok(Catalog {
            episodes,
            by_recency,
        })
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn by_id(&self, id: u32) -> Option<&Episode> {
        self.episodes.iter().find(|episode| episode.id == id)
    }

    /// Episodes in presentation order, newest first. Both the feed and the
    /// slider walk this view, so an index into it is a stable scroll anchor.
    pub fn sorted_by_recency(&self) -> impl Iterator<Item = &Episode> {
        self.by_recency.iter().map(|&idx| &self.episodes[idx])
    }

    pub fn sorted_position(&self, id: u32) -> Option<usize> {
        self.by_recency
            .iter()
            .position(|&idx| self.episodes[idx].id == id)
    }

    pub fn at_sorted_position(&self, position: usize) -> Option<&Episode> {
        self.by_recency
            .get(position)
            .map(|&idx| &self.episodes[idx])
    }
}

/// Load the catalog from an explicit file, or fall back to the dataset
/// bundled at build time.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let episodes: Vec<Episode> = match path {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read dataset {}", path.display()))?;
            info!(path = %path.display(), "Loading episode dataset from file");
            serde_json::from_str(&data)
                .with_context(|| format!("Invalid episode dataset {}", path.display()))?
        }
        None => {
            info!("Loading bundled episode dataset");
            serde_json::from_str(BUNDLED_DATASET).context("Invalid bundled episode dataset")?
        }
    };
    Catalog::new(episodes)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn episode(id: u32, published: &str) -> Episode {
        Episode {
            id,
            title: format!("Episode {id}"),
            description: format!("Description for episode {id}."),
            category: "Society".to_string(),
            guest: format!("Guest {id}"),
            duration: "32 min".to_string(),
            published: published.to_string(),
            image_url: format!("https://podcast.example/covers/{id}.jpg"),
            keywords: vec!["climate".to_string(), "cities".to_string()],
            links: EpisodeLinks {
                page: format!("https://podcast.example/episodes/{id}"),
                spotify: Some(format!("https://open.spotify.com/episode/{id}")),
                apple: None,
                youtube: None,
                deezer: None,
                transcript: None,
                summary: None,
            },
        }
    }

    #[test]
    fn sorts_newest_first() {
        let catalog = Catalog::new(vec![
            episode(1, "2024-03-01"),
            episode(2, "2024-06-15"),
            episode(3, "2023-12-31"),
        ])
        .unwrap();

        let order: Vec<u32> = catalog.sorted_by_recency().map(|e| e.id).collect();
        assert_eq!(order, vec![2, 1, 3]);
        assert_eq!(catalog.sorted_position(2), Some(0));
        assert_eq!(catalog.at_sorted_position(2).map(|e| e.id), Some(3));
    }

    #[test]
    fn unparseable_dates_sort_last() {
        let catalog = Catalog::new(vec![
            episode(1, "unknown"),
            episode(2, "2024-01-10"),
        ])
        .unwrap();
        let order: Vec<u32> = catalog.sorted_by_recency().map(|e| e.id).collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::new(vec![episode(7, "2024-01-01"), episode(7, "2024-02-01")]);
        assert!(result.is_err());
    }

    #[test]
    fn bundled_dataset_parses() {
        let catalog = load_catalog(None).unwrap();
        assert!(!catalog.is_empty());
        for episode in catalog.sorted_by_recency() {
            assert!(!episode.links.page.is_empty());
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::new(vec![episode(4, "2024-05-05")]).unwrap();
        assert_eq!(catalog.by_id(4).map(|e| e.id), Some(4));
        assert!(catalog.by_id(9).is_none());
    }
}
