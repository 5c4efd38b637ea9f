// src/storage/mod.rs
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::extractors::section::ExtractedUnit;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    // Each unit gets its own directory: /base_dir/unit_<major>_<minor>/
    fn unit_dir(&self, unit: &ExtractedUnit) -> PathBuf {
        self.base_dir
            .join(format!("unit_{}_{}", unit.unit.major, unit.unit.minor))
    }

    /// Saves the extracted unit body to a markdown file
    pub fn save_unit(&self, unit: &ExtractedUnit) -> Result<PathBuf, StorageError> {
        let target_dir = self.unit_dir(unit);

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let filename = format!("UNIT_{}_{}.md", unit.unit.major, unit.unit.minor);
        let file_path = target_dir.join(filename);

        let mut file = fs::File::create(&file_path).map_err(StorageError::IoError)?;
        file.write_all(unit.body.as_bytes())
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved unit to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about the unit in JSON format
    pub fn save_unit_metadata(&self, unit: &ExtractedUnit) -> Result<PathBuf, StorageError> {
        let target_dir = self.unit_dir(unit);

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let filename = format!("UNIT_{}_{}_meta.json", unit.unit.major, unit.unit.minor);
        let file_path = target_dir.join(filename);

        let subsection_titles: Vec<String> =
            unit.subsections().into_iter().map(|s| s.title).collect();

        let metadata = serde_json::json!({
            "major": unit.unit.major,
            "minor": unit.unit.minor,
            "title": unit.title,
            "body_length": unit.body.len(),
            "subsections": subsection_titles,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}
