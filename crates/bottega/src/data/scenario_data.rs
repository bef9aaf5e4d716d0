//! On-disk scenario format
//!
//! ```yaml
//! name: reference
//! description: Five-day pasta bar with a café counter and a deli shop
//! parameters:
//!   days_open_per_week: 5
//!   weeks_per_month: 4.3
//!   # ... every field of the parameter set, none optional
//! sensitivity:
//!   - field: menus_per_day
//!     deltas: [-2.0, 0.0, 2.0]
//!   - field: shop_tickets_per_day
//!     deltas: [-2.0, 0.0, 2.0]
//! ```

use bottega_core::ParameterSet;
use bottega_core::analysis::{SweepConfig, SweepParameter};
use serde::{Deserialize, Serialize};

/// A named parameter set plus optional sensitivity dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: ParameterSet,
    /// Dimensions for `bottega sweep`; empty means the reference grid
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sensitivity: Vec<SweepParameter>,
}

impl ScenarioData {
    /// The reference scenario with its 3x3 menus/shop sensitivity grid
    pub fn reference() -> Self {
        Self {
            name: "reference".to_string(),
            description: Some(
                "Five-day pasta bar with a café counter and a deli shop".to_string(),
            ),
            parameters: ParameterSet::reference(),
            sensitivity: SweepConfig::reference().parameters,
        }
    }

    /// Sweep configuration for this scenario
    pub fn sweep_config(&self) -> SweepConfig {
        if self.sensitivity.is_empty() {
            SweepConfig::reference()
        } else {
            SweepConfig::new(self.sensitivity.clone())
        }
    }

    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }
}
