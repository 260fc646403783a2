use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Failures while reading or writing a document file.
#[derive(Debug, thiserror::Error)]
pub enum DocumentLoadError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub trait Serializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>, DocumentLoadError>;
    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, DocumentLoadError>;
}

pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>, DocumentLoadError> {
        serde_json::to_vec_pretty(data).map_err(Into::into)
    }

    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, DocumentLoadError> {
        serde_json::from_slice(data).map_err(Into::into)
    }
}

pub struct YamlSerializer;

impl Serializer for YamlSerializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>, DocumentLoadError> {
        serde_yaml::to_string(data)
            .map(String::into_bytes)
            .map_err(Into::into)
    }

    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, DocumentLoadError> {
        serde_yaml::from_slice(data).map_err(Into::into)
    }
}

/// On-disk encoding of a document, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` and `.yml` are YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }

    fn decode(self, data: &[u8]) -> Result<Value, DocumentLoadError> {
        match self {
            DocumentFormat::Json => JsonSerializer.deserialize(data),
            DocumentFormat::Yaml => YamlSerializer.deserialize(data),
        }
    }

    fn encode(self, document: &Value) -> Result<Vec<u8>, DocumentLoadError> {
        match self {
            DocumentFormat::Json => JsonSerializer.serialize(document),
            DocumentFormat::Yaml => YamlSerializer.serialize(document),
        }
    }
}

pub struct FileUtils;

impl FileUtils {
    /// Read and parse a document, picking the format from the extension.
    pub fn load_document(path: &Path) -> Result<Value, DocumentLoadError> {
        let content = fs::read(path).map_err(|source| DocumentLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        DocumentFormat::from_path(path).decode(&content)
    }

    /// Write a document, picking the format from the extension.
    pub fn save_document(path: &Path, document: &Value) -> Result<(), DocumentLoadError> {
        let content = DocumentFormat::from_path(path).encode(document)?;
        fs::write(path, content).map_err(|source| DocumentLoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
