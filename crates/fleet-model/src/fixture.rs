//! Fixture decoding.
//!
//! The fixture is either `{ "assetType": ..., "assets": [...] }` or a bare
//! array of assets. Every decode failure maps to `FleetError::InvalidInput`.
//! Asset ids must be unique within a fixture.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::error::FleetError;

/// A decoded asset fixture document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFixture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    pub assets: Vec<Asset>,
}

impl AssetFixture {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { asset_type: None, assets }
    }

    /// Decode a fixture from JSON text.
    pub fn from_json(text: &str) -> Result<Self, FleetError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Decode a fixture from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, FleetError> {
        let fixture: Self = match value {
            serde_json::Value::Array(_) => {
                let assets: Vec<Asset> = serde_json::from_value(value)?;
                Self::new(assets)
            }
            serde_json::Value::Object(_) => serde_json::from_value(value)?,
            other => {
                return Err(FleetError::InvalidInput(format!(
                    "expected an asset list or fixture object, found {}",
                    json_kind(&other)
                )))
            }
        };
        fixture.check_unique_ids()?;
        Ok(fixture)
    }

    fn check_unique_ids(&self) -> Result<(), FleetError> {
        let mut seen = HashSet::new();
        for asset in &self.assets {
            if !seen.insert(asset.id.as_str()) {
                return Err(FleetError::InvalidInput(format!(
                    "duplicate asset id '{}'",
                    asset.id
                )));
            }
        }
        Ok(())
    }

    /// Read and decode a fixture file.
    pub fn load(path: &Path) -> Result<Self, FleetError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| FleetError::Io(format!("read {}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    pub fn find_asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
