use crate::domain::printing::Printing;
use crate::domain::query::{FilterConfig, ParseFoilRequirementError, ParseSortKeyError, SortKey};
use crate::domain::search::DEFAULT_BUCKET_LIMIT;
use crate::domain::set::ParseSetCategoryError;
use std::env;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} wasn't in env vars")]
    Missing(&'static str),
    #[error("invalid SORT: {0}")]
    Sort(#[from] ParseSortKeyError),
    #[error("invalid FOIL: {0}")]
    Foil(#[from] ParseFoilRequirementError),
    #[error("invalid DISABLED_CATEGORIES: {0}")]
    Category(#[from] ParseSetCategoryError),
    #[error("invalid BUCKET_LIMIT '{0}'")]
    BucketLimit(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not decode printings: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub printings_path: PathBuf,
    pub sort: SortKey,
    pub filters: FilterConfig,
    pub bucket_limit: usize,
}

impl Config {
    #[allow(clippy::missing_errors_doc)]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`. Blank values count as unset.
    #[allow(clippy::missing_errors_doc)]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let printings_path = get("PRINTINGS_PATH")
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing("PRINTINGS_PATH"))?;

        let sort = match get("SORT") {
            Some(sort) => sort.parse()?,
            None => SortKey::default(),
        };

        let mut filters = FilterConfig {
            frame: get("FRAME"),
            border_color: get("BORDER"),
            foil: get("FOIL").map(|foil| foil.parse()).transpose()?,
            selected_name: get("SELECTED_CARD"),
            ..FilterConfig::default()
        };
        if let Some(disabled) = get("DISABLED_CATEGORIES") {
            for category in disabled.split(',').filter(|c| !c.trim().is_empty()) {
                filters.categories.disable(category.parse()?);
            }
        }

        let bucket_limit = match get("BUCKET_LIMIT") {
            Some(limit) => limit
                .parse()
                .map_err(|_| ConfigError::BucketLimit(limit))?,
            None => DEFAULT_BUCKET_LIMIT,
        };

        Ok(Self {
            printings_path,
            sort,
            filters,
            bucket_limit,
        })
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn load_printings(&self) -> Result<Vec<Printing>, LoadError> {
        let raw = fs::read_to_string(&self.printings_path).map_err(|source| LoadError::Io {
            path: self.printings_path.clone(),
            source,
        })?;
        let printings: Vec<Printing> = serde_json::from_str(&raw)?;
        log::info!(
            "Loaded {} printings from {}",
            printings.len(),
            self.printings_path.display()
        );
        Ok(printings)
    }
}
