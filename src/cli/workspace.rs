use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use anyhow::Context;
use bookspark::{Config, FavoritesStore, FileStore, Templates};

/// The name of the state directory under the root.
pub const STATE_DIR: &str = ".bookspark";

/// The configuration file inside the state directory.
pub const CONFIG_FILE: &str = "config.toml";

/// The state shared by every command: the root directory and its
/// configuration.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    config: Config,
}

impl Workspace {
    /// Opens the workspace at `root`.
    ///
    /// A missing configuration file falls back to defaults, so every command
    /// works in a directory that was never initialised. A configuration file
    /// that exists but cannot be loaded also falls back, with a warning.
    pub fn open(root: PathBuf) -> Self {
        let config = load_config(&config_path(&root));
        Self { root, config }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub fn state_dir(&self) -> PathBuf {
        self.root.join(STATE_DIR)
    }

    /// The favourites store backed by the state directory.
    pub fn favorites(&self) -> FavoritesStore<FileStore> {
        FavoritesStore::new(FileStore::new(self.state_dir()))
            .with_key(self.config.storage_key())
            .with_capacity(self.config.capacity())
    }

    /// The file holding the favourites.
    pub fn favorites_path(&self) -> PathBuf {
        FileStore::new(self.state_dir()).path_for(self.config.storage_key())
    }

    /// The configured templates, or the built-in ones.
    ///
    /// Relative template paths are resolved against the root.
    pub fn templates(&self) -> anyhow::Result<Cow<'static, Templates>> {
        let Some(path) = self.config.templates() else {
            return Ok(Cow::Borrowed(Templates::builtin()));
        };

        let path = self.root.join(path);
        let templates = Templates::load(&path)
            .with_context(|| format!("Failed to load templates from {}", path.display()))?;
        Ok(Cow::Owned(templates))
    }
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(STATE_DIR).join(CONFIG_FILE)
}

fn load_config(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config at {}; using defaults", path.display());
        return Config::default();
    }

    Config::load(path).unwrap_or_else(|e| {
        tracing::warn!("Ignoring {}: {e}; using defaults", path.display());
        Config::default()
    })
}
