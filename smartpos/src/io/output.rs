use crate::config::SmartPosConfig;
use crate::session::{SessionAction, SessionReport};
use booth_layout::io::ext_repr::{ExtBoothRequest, ExtDesign, ExtPlacement, ExtPlacementRequest};
use serde::{Deserialize, Serialize};

/// Input of a design session. Starts from either `design` or `request`, then applies `actions` in order.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtSessionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<ExtDesign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<ExtBoothRequest>,
    #[serde(default)]
    pub actions: Vec<SessionAction>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SessionOutput {
    /// The design after all actions were applied
    pub design: ExtDesign,
    #[serde(flatten)]
    pub report: SessionReport,
    pub config: SmartPosConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlacementOutput {
    #[serde(flatten)]
    pub request: ExtPlacementRequest,
    pub placement: ExtPlacement,
    pub config: SmartPosConfig,
}
