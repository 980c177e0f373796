use std::env;
use std::path::PathBuf;

use calcutel_norms::Catalog;

/// Environment variable naming a JSON catalog that replaces the built-in one.
pub const CATALOG_PATH_VAR: &str = "CALCUTEL_CATALOG_PATH";

#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub catalog_path: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = lookup(CATALOG_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Self { catalog_path }
    }

    pub fn load_catalog(&self) -> eyre::Result<Catalog> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::builtin()?);
        };

        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read catalog at {}: {e}", path.display()))?;
        let catalog = Catalog::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            tests = catalog.list_tests().len(),
            "loaded catalog from file"
        );
        Ok(catalog)
    }
}
