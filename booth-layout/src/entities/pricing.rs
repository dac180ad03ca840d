use serde::{Deserialize, Serialize};

/// Per square meter rates (SAR) used to price the floor of a booth.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PricingRates {
    pub materials_per_sqm: f64,
    pub lighting_per_sqm: f64,
    pub setup_per_sqm: f64,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            materials_per_sqm: 520.0,
            lighting_per_sqm: 280.0,
            setup_per_sqm: 375.0,
        }
    }
}

/// Cost breakdown of a booth design, in SAR.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Pricing {
    pub materials: u64,
    pub elements: u64,
    pub lighting: u64,
    pub setup: u64,
    pub total: u64,
}

impl Pricing {
    /// Prices a floor of `area` square meters furnished with elements costing `element_prices`.
    /// Area-based costs are rounded to whole SAR. Sums saturate at `u64::MAX`.
    pub fn compute(
        rates: &PricingRates,
        area: f64,
        element_prices: impl IntoIterator<Item = u64>,
    ) -> Self {
        let per_area = |rate: f64| (area * rate).round().max(0.0) as u64;
        let materials = per_area(rates.materials_per_sqm);
        let lighting = per_area(rates.lighting_per_sqm);
        let setup = per_area(rates.setup_per_sqm);
        let elements = element_prices.into_iter().fold(0, u64::saturating_add);
        Pricing {
            materials,
            elements,
            lighting,
            setup,
            total: [materials, elements, lighting, setup]
                .into_iter()
                .fold(0, u64::saturating_add),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_six_by_six_booth() {
        let p = Pricing::compute(&PricingRates::default(), 36.0, [11250, 3000]);
        assert_eq!(p.materials, 18720);
        assert_eq!(p.lighting, 10080);
        assert_eq!(p.setup, 13500);
        assert_eq!(p.elements, 14250);
        assert_eq!(p.total, 18720 + 10080 + 13500 + 14250);
    }

    #[test]
    fn area_costs_round_to_whole_sar() {
        // 2.5 * 375 = 937.5
        let p = Pricing::compute(&PricingRates::default(), 2.5, []);
        assert_eq!(p.setup, 938);
        assert_eq!(p.elements, 0);
    }

    #[test]
    fn huge_prices_saturate() {
        let p = Pricing::compute(&PricingRates::default(), 36.0, [u64::MAX, 3000]);
        assert_eq!(p.elements, u64::MAX);
        assert_eq!(p.total, u64::MAX);
    }
}
