use serde::{Deserialize, Serialize};

/// Point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Position of a shape's backing item inside its series.
///
/// `Sentinel` marks shapes that are not bound to a data item (drop boxes).
/// On the wire it is encoded as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "isize", try_from = "isize")]
pub enum DataIndex {
    Item(usize),
    Sentinel,
}

impl DataIndex {
    pub const SENTINEL_RAW: isize = -1;

    #[must_use]
    pub fn item(self) -> Option<usize> {
        match self {
            Self::Item(index) => Some(index),
            Self::Sentinel => None,
        }
    }

    #[must_use]
    pub fn is_sentinel(self) -> bool {
        matches!(self, Self::Sentinel)
    }

    #[must_use]
    pub fn raw(self) -> isize {
        match self {
            Self::Item(index) => index as isize,
            Self::Sentinel => Self::SENTINEL_RAW,
        }
    }
}

impl From<DataIndex> for isize {
    fn from(value: DataIndex) -> Self {
        value.raw()
    }
}

impl TryFrom<isize> for DataIndex {
    type Error = String;

    fn try_from(value: isize) -> Result<Self, Self::Error> {
        match value {
            Self::SENTINEL_RAW => Ok(Self::Sentinel),
            index if index >= 0 => Ok(Self::Item(index as usize)),
            other => Err(format!("data index must be >= -1, got {other}")),
        }
    }
}

/// One spoke of a polar coordinate instance as exposed to shape metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub name: String,
    pub max: f64,
    #[serde(default)]
    pub min: f64,
}

impl Indicator {
    #[must_use]
    pub fn new(name: impl Into<String>, max: f64) -> Self {
        Self {
            name: name.into(),
            max,
            min: 0.0,
        }
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }
}
