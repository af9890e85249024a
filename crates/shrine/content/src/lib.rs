//! Shrine content: built-in recipes and archetypes, plus loaders for recipe
//! definitions and engine configuration.
//!
//! Data directory layout:
//!
//! ```text
//! data_dir/
//! ├── config.toml
//! ├── tags/
//! │   ├── blocks.toml
//! │   └── items.toml
//! └── recipes/
//!     ├── swamp_deity_shrine_curse.json
//!     └── ...
//! ```
//!
//! Recipe files are JSON recipe definitions; the recipe id is
//! `<namespace>:<relative path>` with the namespace taken from `config.toml`.

pub mod defaults;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use defaults::{builtin_archetypes, default_recipes, register_default_recipes};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, RecipeDir, RecipeLoader, RecipeSource, TagLoader,
    build_store,
};
