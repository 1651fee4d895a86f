use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Unit text shown under the value, e.g. "months".
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct UnitLabel(String);

impl UnitLabel {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

/// Singular/plural pair for the unit label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitLabels {
    pub singular: UnitLabel,
    pub plural: UnitLabel,
}

impl Default for UnitLabels {
    fn default() -> Self {
        Self {
            singular: UnitLabel::new("month"),
            plural: UnitLabel::new("months"),
        }
    }
}

impl UnitLabels {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: UnitLabel::new(singular),
            plural: UnitLabel::new(plural),
        }
    }

    pub fn for_value(&self, value: u32) -> &UnitLabel {
        if value == 1 { &self.singular } else { &self.plural }
    }
}
