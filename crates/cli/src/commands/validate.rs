//! Validate recipe definition files

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use shrine_content::{ContentFactory, RecipeLoader};

use crate::config::CliConfig;

/// Decode recipe files and report every failure
#[derive(Parser, Debug)]
pub struct Validate {
    /// Files to check (defaults to every recipe in the data directory)
    pub files: Vec<PathBuf>,
}

impl Validate {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let files = if self.files.is_empty() {
            let factory = ContentFactory::new(&config.data_dir);
            let engine = factory.load_config()?;
            let dir = factory.recipes_dir(&engine);
            if !dir.exists() {
                anyhow::bail!("Recipe directory not found: {}", dir.display());
            }
            RecipeLoader::list_files(&dir)?
        } else {
            self.files
        };

        let mut failed = 0;
        for file in &files {
            match RecipeLoader::load_file(file) {
                Ok(recipe) => println!(
                    "ok    {} ({}, priority {})",
                    file.display(),
                    recipe.trigger,
                    recipe.priority
                ),
                Err(e) => {
                    failed += 1;
                    println!("FAIL  {}: {e:#}", file.display());
                }
            }
        }

        if failed > 0 {
            anyhow::bail!("{failed} of {} recipe file(s) failed validation", files.len());
        }
        println!("{} recipe file(s) valid", files.len());
        Ok(())
    }
}
