use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Renderer, ShapeRecord};

use super::{BaseSeriesComponent, RadarChart, RadarOption};

pub const SHAPE_LIST_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeListJsonContractV1 {
    pub schema_version: u32,
    pub shapes: Vec<ShapeRecord>,
}

impl RadarOption {
    /// Parses a chart option; every field not present takes its default.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse radar option: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize radar option: {e}"))
        })
    }
}

impl ShapeListJsonContractV1 {
    #[must_use]
    pub fn new(shapes: Vec<ShapeRecord>) -> Self {
        Self {
            schema_version: SHAPE_LIST_JSON_SCHEMA_V1,
            shapes,
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize shape list contract v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse shape list json payload: {e}"))
        })?;
        if payload.schema_version != SHAPE_LIST_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported shape list schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}

impl<R: Renderer> RadarChart<R> {
    pub fn shapes_json_contract_v1_pretty(&self) -> ChartResult<String> {
        ShapeListJsonContractV1::new(self.shapes().to_vec()).to_json_pretty()
    }
}
