//! Validation rules for catalog assets.
//!
//! Pure functions: callers decide when to validate and what to do with a
//! failure (typically skip or reject before inserting into the catalog).

use super::{AssetBase, AssetError, Audience, Chart, Insight};

fn require(field: &str, err: AssetError) -> Result<(), AssetError> {
    if field.is_empty() {
        return Err(err);
    }
    Ok(())
}

impl AssetBase {
    /// Base rules shared by every kind: the name must be non-empty.
    pub fn validate(&self) -> Result<(), AssetError> {
        require(&self.name, AssetError::NameRequired)
    }
}

impl Chart {
    pub fn validate(&self) -> Result<(), AssetError> {
        self.base.validate()?;
        require(&self.chart_type, AssetError::ChartTypeRequired)
    }
}

impl Insight {
    pub fn validate(&self) -> Result<(), AssetError> {
        self.base.validate()?;
        require(&self.metric, AssetError::MetricRequired)?;
        require(&self.value, AssetError::ValueRequired)
    }
}

impl Audience {
    pub fn validate(&self) -> Result<(), AssetError> {
        self.base.validate()?;
        require(&self.segment, AssetError::SegmentRequired)?;
        if self.size < 0 {
            return Err(AssetError::NegativeSize(self.size));
        }
        Ok(())
    }
}
