//! Utility helpers: document (de)serialization and file loading.
pub mod serialization;

pub use serialization::DocumentLoadError;
pub use serialization::DocumentFormat;
pub use serialization::FileUtils;
pub use serialization::JsonSerializer;
pub use serialization::Serializer;
pub use serialization::YamlSerializer;
