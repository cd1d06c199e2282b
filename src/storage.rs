//! Package snapshots in, generated program out.
//!
//! Snapshots are serde renderings of [`Package`]; the format is picked by
//! file extension. Deserialization goes through `serde_path_to_error` so a
//! bad document names the offending path.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{LoadError, WriteError};
use crate::ir::Package;

/// File the generated program is written to inside the target directory.
pub const PROGRAM_FILE_NAME: &str = "main.pp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

pub fn load_package(path: &Path) -> Result<Package, LoadError> {
    let format = SnapshotFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat { path: path.to_path_buf() })?;
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let package = parse_package(&source, format, path)?;
    tracing::debug!(
        path = %path.display(),
        resources = package.resources.len(),
        functions = package.functions.len(),
        types = package.types.len(),
        "loaded package snapshot"
    );
    Ok(package)
}

pub fn parse_package(source: &str, format: SnapshotFormat, path: &Path) -> Result<Package, LoadError> {
    match format {
        SnapshotFormat::Json => from_json_with_path(source, path),
        SnapshotFormat::Yaml => from_yaml_with_path(source, path),
    }
}

/// Write `code` to `<dir>/main.pp`, creating `dir` if needed.
pub fn write_program(dir: &Path, code: &str) -> Result<PathBuf, WriteError> {
    let path = dir.join(PROGRAM_FILE_NAME);
    write_file(&path, code)?;
    Ok(path)
}

pub fn write_file(path: &Path, code: &str) -> Result<(), WriteError> {
    let wrap = |source| WriteError { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(wrap)?;
        }
    }
    std::fs::write(path, code).map_err(wrap)?;
    tracing::debug!(path = %path.display(), bytes = code.len(), "wrote generated program");
    Ok(())
}

fn from_json_with_path<T: DeserializeOwned>(src: &str, path: &Path) -> Result<T, LoadError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| LoadError::Parse {
        path: path.to_path_buf(),
        at: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}

fn from_yaml_with_path<T: DeserializeOwned>(src: &str, path: &Path) -> Result<T, LoadError> {
    let de = serde_yaml::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| LoadError::Parse {
        path: path.to_path_buf(),
        at: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}
