use detour_core::conf::{ConfigError, LoadOptions, LoadedRedirects, load_redirects};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway site directory holding redirects files and a config document.
pub struct TestSite {
    dir: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `rel`, creating parent directories as needed.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture dir");
        }
        fs::write(&path, contents).expect("failed to write fixture");
        path
    }

    pub fn options(&self, patterns: &[&str], config: Option<&str>) -> LoadOptions {
        let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        LoadOptions::discover(self.root(), &patterns, config.map(PathBuf::from))
            .expect("failed to discover redirects files")
    }

    pub fn load(
        &self,
        patterns: &[&str],
        config: Option<&str>,
    ) -> Result<LoadedRedirects, ConfigError> {
        load_redirects(&self.options(patterns, config))
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}
