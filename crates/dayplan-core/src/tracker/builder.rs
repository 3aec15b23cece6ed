//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{DayplanError, Result},
    parser::{ParseOptions, PlanParser},
    vocabulary::Vocabulary,
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    vocabulary: Vocabulary,
    options: ParseOptions,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/dayplan/dayplan.db` or `~/.local/share/dayplan/dayplan.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the marker vocabulary documents are written in.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Sets the repeat cycle used to pick the base day of a range.
    pub fn with_repeat_cycle(mut self, repeat_cycle: u32) -> Self {
        self.options.repeat_cycle = repeat_cycle;
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `DayplanError::Configuration` if the vocabulary does not compile
    /// Returns `DayplanError::FileSystem` if the database path is invalid
    /// Returns `DayplanError::Database` if database initialization fails
    pub async fn build(self) -> Result<Tracker> {
        if self.options.repeat_cycle == 0 {
            return Err(DayplanError::invalid_input("repeat_cycle")
                .with_reason("Repeat cycle must be at least one day"));
        }
        let parser = PlanParser::new(&self.vocabulary, self.options)?;

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| DayplanError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), DayplanError>(())
        })
        .await
        .map_err(DayplanError::join)??;

        info!("Using database at {}", db_path.display());
        Ok(Tracker::new(db_path, parser))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("dayplan")
            .place_data_file("dayplan.db")
            .map_err(|e| DayplanError::XdgDirectory(e.to_string()))
    }
}
