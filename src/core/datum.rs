use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const DEFAULT_DATE_LABEL_FORMAT: &str = "%b %d";

/// Category of a row on the index axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexValue {
    Date(NaiveDate),
    Text(String),
}

impl IndexValue {
    #[must_use]
    pub fn label(&self) -> String {
        self.label_with(DEFAULT_DATE_LABEL_FORMAT)
    }

    /// Formats dates with a `chrono` format string; text is returned as-is.
    #[must_use]
    pub fn label_with(&self, date_format: &str) -> String {
        match self {
            Self::Date(date) => date.format(date_format).to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<&str> for IndexValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for IndexValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for IndexValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// One row of chart input: a category plus a value per series key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub index_value: IndexValue,
    pub values: IndexMap<String, f64>,
}

impl BarDatum {
    #[must_use]
    pub fn new(index_value: impl Into<IndexValue>) -> Self {
        Self {
            index_value: index_value.into(),
            values: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Value stored under `key`, or zero when the row has no such field.
    #[must_use]
    pub fn value(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (key, value) in &self.values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "value for `{key}` in row `{}` must be finite",
                    self.index_value.label()
                )));
            }
        }
        Ok(())
    }
}

/// One rendered bar segment: a series key at a row, with pixel geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSegment {
    /// Series key.
    pub id: String,
    /// Row position on the index axis.
    pub index: usize,
    pub index_value: IndexValue,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarSegment {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Caller-owned identity of a previously picked segment.
///
/// It does not depend on array position of the segment, so it survives data
/// refreshes as long as the key, row index or category still exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDatum {
    pub id: String,
    pub index: usize,
    pub index_value: IndexValue,
}

impl SelectedDatum {
    #[must_use]
    pub fn new(id: impl Into<String>, index: usize, index_value: impl Into<IndexValue>) -> Self {
        Self {
            id: id.into(),
            index,
            index_value: index_value.into(),
        }
    }

    /// Matches `segment` by `(id, index)` for multi-series charts and by
    /// `index_value` for single-series charts.
    #[must_use]
    pub fn matches(&self, segment: &BarSegment, multi_key: bool) -> bool {
        if multi_key {
            self.id == segment.id && self.index == segment.index
        } else {
            self.index_value == segment.index_value
        }
    }
}

impl From<&BarSegment> for SelectedDatum {
    fn from(segment: &BarSegment) -> Self {
        Self {
            id: segment.id.clone(),
            index: segment.index,
            index_value: segment.index_value.clone(),
        }
    }
}
