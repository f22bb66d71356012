//! Object vectorization settings.

use serde::{Deserialize, Serialize};

use crate::coerce::LooseInt;
use crate::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectsConfig {
    pub auto_vectorize: bool,
    pub vectorize_relations: bool,
    pub batch_size: i64,
    pub max_text_length: i64,
    pub excluded_schemas: Vec<String>,
}

impl Default for ObjectsConfig {
    fn default() -> Self {
        Self {
            auto_vectorize: defaults::OBJECTS_AUTO_VECTORIZE,
            vectorize_relations: defaults::OBJECTS_VECTORIZE_RELATIONS,
            batch_size: defaults::OBJECTS_BATCH_SIZE,
            max_text_length: defaults::OBJECTS_MAX_TEXT_LENGTH,
            excluded_schemas: Vec::new(),
        }
    }
}

/// Partial object-vectorization update; unset fields revert to hard defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectsUpdate {
    pub auto_vectorize: Option<bool>,
    pub vectorize_relations: Option<bool>,
    pub batch_size: Option<LooseInt>,
    pub max_text_length: Option<LooseInt>,
    pub excluded_schemas: Option<Vec<String>>,
}

impl ObjectsUpdate {
    pub fn into_config(self) -> ObjectsConfig {
        let d = ObjectsConfig::default();
        ObjectsConfig {
            auto_vectorize: self.auto_vectorize.unwrap_or(d.auto_vectorize),
            vectorize_relations: self.vectorize_relations.unwrap_or(d.vectorize_relations),
            batch_size: self
                .batch_size
                .map(LooseInt::into_inner)
                .unwrap_or(d.batch_size),
            max_text_length: self
                .max_text_length
                .map(LooseInt::into_inner)
                .unwrap_or(d.max_text_length),
            excluded_schemas: self.excluded_schemas.unwrap_or(d.excluded_schemas),
        }
    }
}
