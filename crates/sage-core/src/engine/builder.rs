//! Builder for creating and configuring Engine instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

use super::Engine;
use crate::{
    db::Database,
    error::{EngineError, Result},
    generator::{OfflineGenerator, ScheduleGenerator},
    materials::{MaterialSearch, NullSearch},
};

/// Builder for creating and configuring Engine instances.
#[derive(Default)]
pub struct EngineBuilder {
    database_path: Option<PathBuf>,
    generator: Option<Arc<dyn ScheduleGenerator>>,
    search: Option<Arc<dyn MaterialSearch>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/sage/sage.db` or `~/.local/share/sage/sage.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the generative collaborator. Defaults to [`OfflineGenerator`],
    /// which routes every generation onto the fallback path.
    pub fn with_generator(mut self, generator: Arc<dyn ScheduleGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Sets the material-search collaborator. Defaults to [`NullSearch`],
    /// which yields synthesized search links for every topic.
    pub fn with_search(mut self, search: Arc<dyn MaterialSearch>) -> Self {
        self.search = Some(search);
        self
    }

    /// Builds the configured engine instance.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::FileSystem` if the database path is invalid
    /// Returns `EngineError::Database` if database initialization fails
    pub async fn build(self) -> Result<Engine> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| EngineError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), EngineError>(())
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let generator = self
            .generator
            .unwrap_or_else(|| Arc::new(OfflineGenerator));
        let search = self.search.unwrap_or_else(|| Arc::new(NullSearch));

        Ok(Engine::new(db_path, generator, search))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("sage")
            .place_data_file("sage.db")
            .map_err(|e| EngineError::XdgDirectory(e.to_string()))
    }
}
