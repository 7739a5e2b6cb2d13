use std::{fs, path::Path};

use bookspark::Config;
use tracing::instrument;

use super::workspace::{CONFIG_FILE, STATE_DIR, config_path};

#[derive(Debug, clap::Parser)]
pub struct Init {}

impl Init {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let state_dir = root.join(STATE_DIR);
        if state_dir.exists() {
            anyhow::bail!("Already initialized (found existing {STATE_DIR} directory)");
        }

        fs::create_dir_all(&state_dir)
            .map_err(|e| anyhow::anyhow!("Failed to create {STATE_DIR} directory: {e}"))?;

        Config::default()
            .save(&config_path(root))
            .map_err(|e| anyhow::anyhow!("Failed to create {CONFIG_FILE}: {e}"))?;

        println!("Initialized BookSpark in {}", root.display());
        println!("  Created: {STATE_DIR}/{CONFIG_FILE}");
        println!();
        println!("Next steps:");
        println!("  bookspark generate --genre mystery --save");

        Ok(())
    }
}
