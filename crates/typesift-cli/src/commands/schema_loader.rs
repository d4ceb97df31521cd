use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use typesift_core::{CollectionSchema, Registry, SchemaError, parse_collections};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid schema '{}': {source}", .path.display())]
    Schema { path: PathBuf, source: SchemaError },

    #[error("no .json files found in '{}'", .0.display())]
    Empty(PathBuf),

    #[error("collection '{0}' is not defined in the loaded schemas")]
    UnknownCollection(String),
}

/// Load every collection from a `.json` file, or from all `.json` files in a directory.
pub fn load_registry(path: &Path) -> Result<Registry, LoadError> {
    let files = if path.is_dir() {
        list_schema_files(path)?
    } else {
        vec![path.to_path_buf()]
    };

    let mut registry = Registry::new();
    for file in files {
        let collections = load_file(&file)?;
        tracing::debug!(path = %file.display(), count = collections.len(), "loaded schema file");
        registry.extend(collections);
    }
    Ok(registry)
}

pub fn collection<'r>(registry: &'r Registry, name: &str) -> Result<&'r CollectionSchema, LoadError> {
    registry
        .get(name)
        .ok_or_else(|| LoadError::UnknownCollection(name.to_owned()))
}

fn load_file(path: &Path) -> Result<Vec<CollectionSchema>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_collections(&content).map_err(|source| LoadError::Schema {
        path: path.to_path_buf(),
        source,
    })
}

fn list_schema_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();

    if files.is_empty() {
        return Err(LoadError::Empty(dir.to_path_buf()));
    }

    // Sort for deterministic ordering
    files.sort();
    Ok(files)
}
