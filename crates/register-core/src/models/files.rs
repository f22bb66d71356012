//! File-management settings: text extraction and vectorization of uploads.

use serde::{Deserialize, Serialize};

use crate::coerce::LooseInt;
use crate::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilesConfig {
    pub extraction_enabled: bool,
    pub vectorization_enabled: bool,
    pub ocr_enabled: bool,
    pub enabled_file_types: Vec<String>,
    pub max_file_size_mb: i64,
    pub chunk_size: i64,
    pub chunk_overlap: i64,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extraction_enabled: defaults::FILES_EXTRACTION_ENABLED,
            vectorization_enabled: defaults::FILES_VECTORIZATION_ENABLED,
            ocr_enabled: defaults::FILES_OCR_ENABLED,
            enabled_file_types: defaults::FILES_ENABLED_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_file_size_mb: defaults::FILES_MAX_SIZE_MB,
            chunk_size: defaults::FILES_CHUNK_SIZE,
            chunk_overlap: defaults::FILES_CHUNK_OVERLAP,
        }
    }
}

/// Partial file-management update; unset fields revert to hard defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesUpdate {
    pub extraction_enabled: Option<bool>,
    pub vectorization_enabled: Option<bool>,
    pub ocr_enabled: Option<bool>,
    pub enabled_file_types: Option<Vec<String>>,
    pub max_file_size_mb: Option<LooseInt>,
    pub chunk_size: Option<LooseInt>,
    pub chunk_overlap: Option<LooseInt>,
}

impl FilesUpdate {
    pub fn into_config(self) -> FilesConfig {
        let d = FilesConfig::default();
        FilesConfig {
            extraction_enabled: self.extraction_enabled.unwrap_or(d.extraction_enabled),
            vectorization_enabled: self
                .vectorization_enabled
                .unwrap_or(d.vectorization_enabled),
            ocr_enabled: self.ocr_enabled.unwrap_or(d.ocr_enabled),
            enabled_file_types: self.enabled_file_types.unwrap_or(d.enabled_file_types),
            max_file_size_mb: self
                .max_file_size_mb
                .map(LooseInt::into_inner)
                .unwrap_or(d.max_file_size_mb),
            chunk_size: self
                .chunk_size
                .map(LooseInt::into_inner)
                .unwrap_or(d.chunk_size),
            chunk_overlap: self
                .chunk_overlap
                .map(LooseInt::into_inner)
                .unwrap_or(d.chunk_overlap),
        }
    }
}
