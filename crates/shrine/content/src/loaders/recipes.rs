//! Recipe definition loader.

use std::path::{Path, PathBuf};

use anyhow::Context;
use shrine_core::{Recipe, RecipeId, ResourceId, ShrineError};
use tracing::{debug, info, warn};

use crate::loaders::{LoadResult, read_file};

/// Loader for JSON recipe definitions.
pub struct RecipeLoader;

impl RecipeLoader {
    /// Load a single recipe definition.
    pub fn load_file(path: &Path) -> LoadResult<Recipe> {
        let content = read_file(path)?;
        Recipe::from_json_str(&content).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse recipe {}: {} [{}]",
                path.display(),
                e,
                e.error_code()
            )
        })
    }

    /// Load every `*.json` file below `dir`, in path order.
    ///
    /// Ids are `<namespace>:<relative path without extension>`, so
    /// `recipes/fire/altar.json` becomes `kamigami:fire/altar`. Files that fail
    /// to read or decode are logged and skipped; a missing directory yields no
    /// recipes.
    pub fn load_dir(dir: &Path, namespace: &str) -> LoadResult<Vec<(RecipeId, Recipe)>> {
        if !dir.exists() {
            warn!(target: "shrine::content", dir = %dir.display(), "recipe directory not found");
            return Ok(Vec::new());
        }

        let files = Self::list_files(dir)?;
        let mut recipes = Vec::with_capacity(files.len());
        for path in files {
            let id = match Self::recipe_id(dir, &path, namespace) {
                Ok(id) => id,
                Err(e) => {
                    warn!(target: "shrine::content", file = %path.display(), error = %e, "skipping recipe with invalid name");
                    continue;
                }
            };

            match Self::load_file(&path) {
                Ok(recipe) => {
                    debug!(target: "shrine::content", %id, file = %path.display(), "loaded recipe");
                    recipes.push((id, recipe));
                }
                Err(e) => {
                    warn!(target: "shrine::content", %id, error = %e, "skipping invalid recipe");
                }
            }
        }

        info!(
            target: "shrine::content",
            dir = %dir.display(),
            count = recipes.len(),
            "loaded recipe definitions"
        );
        Ok(recipes)
    }

    /// Every `*.json` file below `dir`, sorted by path.
    pub fn list_files(dir: &Path) -> LoadResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        collect_json_files(dir, &mut files)?;
        files.sort();
        Ok(files)
    }

    /// Recipe id for `file` under the recipe root `root`.
    pub fn recipe_id(root: &Path, file: &Path, namespace: &str) -> LoadResult<RecipeId> {
        let relative = file
            .strip_prefix(root)
            .with_context(|| format!("{} is outside {}", file.display(), root.display()))?
            .with_extension("");

        let segments: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        let raw = format!("{}:{}", namespace, segments.join("/"));
        ResourceId::parse(&raw).map_err(|e| anyhow::anyhow!("{e}"))
    }
}

fn collect_json_files(dir: &Path, out: &mut Vec<PathBuf>) -> LoadResult<()> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read recipe directory {}", dir.display()))?;

    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();
        if path.is_dir() {
            collect_json_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use shrine_core::Trigger;

    use super::*;

    const DROP_RECIPE: &str = r#"{
        "trigger": "on_break",
        "actions": { "type": "drop_item", "item": "minecraft:diamond" }
    }"#;

    #[test]
    fn loads_nested_files_with_namespaced_ids() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("fire")).unwrap();
        fs::write(dir.path().join("b.json"), DROP_RECIPE).unwrap();
        fs::write(dir.path().join("fire").join("altar.json"), DROP_RECIPE).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let recipes = RecipeLoader::load_dir(dir.path(), "kamigami").unwrap();
        let ids: Vec<_> = recipes.iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, vec!["kamigami:b", "kamigami:fire/altar"]);
        assert_eq!(recipes[0].1.trigger, Trigger::OnBreak);
    }

    #[test]
    fn invalid_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.json"), DROP_RECIPE).unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(
            dir.path().join("unknown.json"),
            r#"{"trigger": "on_break", "actions": {"type": "summon_meteor"}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("Bad Name.json"), DROP_RECIPE).unwrap();

        let recipes = RecipeLoader::load_dir(dir.path(), "kamigami").unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].0.path(), "good");
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let recipes = RecipeLoader::load_dir(&dir.path().join("absent"), "kamigami").unwrap();
        assert!(recipes.is_empty());
    }

    #[test]
    fn load_file_reports_path() {
        let err = RecipeLoader::load_file(Path::new("/nonexistent/recipe.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/recipe.json"));
    }
}
