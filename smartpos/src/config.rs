use booth_layout::entities::PricingRates;
use booth_layout::io::svg::SvgDrawOptions;
use booth_layout::placement::PlacementConfig;
use serde::{Deserialize, Serialize};

/// Configuration of a design session
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct SmartPosConfig {
    /// Margins, buffer and grid step of the placement engine
    #[serde(default)]
    pub placement: PlacementConfig,
    /// Per square meter rates used to price the designs
    #[serde(default)]
    pub pricing: PricingRates,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
