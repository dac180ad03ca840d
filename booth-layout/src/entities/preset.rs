use crate::entities::{
    BoothDesign, Category, CeilingMaterial, DEFAULT_ELEMENT_MATERIAL, DesignElement, ElementKind,
    FloorMaterial, PricingRates, Room, Style, WallMaterial,
};
use crate::geometry::primitives::{Footprint, Position};
use anyhow::{Result, ensure};
use log::{debug, warn};

pub const INDUSTRY_TECH: &str = "Technology & IT";
pub const INDUSTRY_HEALTHCARE: &str = "Healthcare & Medical";

/// Color given to the elements of a generated design
const PRESET_ELEMENT_COLOR: &str = "#3B82F6";
/// Primary color of designs requested in the `tech` style
const TECH_PRIMARY_COLOR: &str = "#06B6D4";
/// Distance between a preset element's anchor and the walls
const PRESET_WALL_OFFSET: f64 = 0.5;

/// A submitted booth request, the starting point of a generated design.
#[derive(Clone, Debug, PartialEq)]
pub struct BoothRequest {
    pub company_name: String,
    pub event_name: String,
    pub booth_size_sqm: f64,
    /// Free-form style name, `modern` if absent
    pub preferred_style: Option<String>,
    pub industry: String,
    /// Budget in SAR, informative only
    pub budget: Option<f64>,
}

/// Generates an initial design for a booth request: a square room of the requested size,
/// furnished with a few elements typical for the requested industry.
pub fn generate_preset(request: &BoothRequest, rates: &PricingRates) -> Result<BoothDesign> {
    ensure!(
        request.booth_size_sqm.is_finite() && request.booth_size_sqm > 0.0,
        "booth size should be positive, got {} sqm",
        request.booth_size_sqm
    );

    let side = request.booth_size_sqm.sqrt();
    let (width, depth) = (side, side);
    let max_x = width / 2.0 - PRESET_WALL_OFFSET;
    let max_z = depth / 2.0 - PRESET_WALL_OFFSET;

    let style_name = request.preferred_style.as_deref().unwrap_or("modern");
    let room = Room::try_new(width.ceil(), depth.ceil(), 3.0)?;

    let mut design = BoothDesign::new(
        format!("{} - {}", request.company_name, request.event_name),
        room,
        *rates,
    );
    design.category = match request.industry.as_str() {
        INDUSTRY_TECH => Category::Tech,
        _ => Category::Custom,
    };
    design.style = parse_style(style_name);
    design.materials.floor = match style_name {
        "luxury" => FloorMaterial::Marble,
        _ => FloorMaterial::Wood,
    };
    design.materials.walls = match style_name {
        "tech" => WallMaterial::LedPanel,
        _ => WallMaterial::Drywall,
    };
    design.materials.ceiling = match style_name {
        "luxury" => CeilingMaterial::Suspended,
        _ => CeilingMaterial::Standard,
    };
    if style_name == "tech" {
        design.colors.primary = TECH_PRIMARY_COLOR.into();
    }

    // (kind, width override, anchor, label override)
    let template: [(ElementKind, Option<f64>, Position, Option<&str>); 3] =
        match request.industry.as_str() {
            INDUSTRY_TECH => [
                (ElementKind::InteractiveKiosk, None, Position::ORIGIN, None),
                (
                    ElementKind::VideoWall,
                    Some(f64::min(4.0, width)),
                    Position::on_floor(0.0, -max_z),
                    None,
                ),
                (
                    ElementKind::HologramProjector,
                    None,
                    Position::on_floor(max_x * 0.7, max_z * 0.7),
                    None,
                ),
            ],
            INDUSTRY_HEALTHCARE => [
                (
                    ElementKind::ProductDisplay,
                    None,
                    Position::ORIGIN,
                    Some("Medical Equipment Display"),
                ),
                (
                    ElementKind::Seating,
                    None,
                    Position::on_floor(max_x * 0.8, max_z * 0.8),
                    Some("Consultation Area"),
                ),
                (
                    ElementKind::ReceptionCounter,
                    Some(3.0),
                    Position::on_floor(0.0, max_z * 0.9),
                    Some("Information Counter"),
                ),
            ],
            _ => [
                (
                    ElementKind::ReceptionCounter,
                    Some(3.0),
                    Position::on_floor(0.0, -max_z * 0.8),
                    None,
                ),
                (
                    ElementKind::ProductDisplay,
                    None,
                    Position::on_floor(max_x * 0.6, 0.0),
                    None,
                ),
                (
                    ElementKind::Seating,
                    None,
                    Position::on_floor(-max_x * 0.6, max_z * 0.6),
                    Some("Meeting Area"),
                ),
            ],
        };

    for (i, (kind, size_x, position, label)) in template.into_iter().enumerate() {
        let spec = kind.spec(design.room());
        let footprint = match size_x {
            Some(size_x) => Footprint::try_new(size_x, spec.footprint.size_y, spec.footprint.size_z)?,
            None => spec.footprint,
        };
        design.insert_element(DesignElement {
            id: format!("preset-{i}"),
            kind,
            position,
            footprint,
            rotation: [0.0; 3],
            color: PRESET_ELEMENT_COLOR.into(),
            material: DEFAULT_ELEMENT_MATERIAL.into(),
            label: label.unwrap_or(spec.label).into(),
            price: spec.price,
            locked: false,
        })?;
    }

    design.set_billed_area(request.booth_size_sqm)?;
    let pricing = design.pricing();
    debug!(
        "generated preset '{}' for industry '{}': {} elements, total {} SAR",
        design.name,
        request.industry,
        design.elements().len(),
        pricing.total
    );
    if let Some(budget) = request.budget {
        if (pricing.total as f64) > budget {
            warn!(
                "preset '{}' costs {} SAR, over the requested budget of {budget} SAR",
                design.name, pricing.total
            );
        }
    }

    Ok(design)
}

fn parse_style(name: &str) -> Style {
    match name {
        "modern" => Style::Modern,
        "futuristic" => Style::Futuristic,
        "minimal" => Style::Minimal,
        "luxury" => Style::Luxury,
        "industrial" => Style::Industrial,
        "eco" => Style::Eco,
        other => {
            debug!("no style named '{other}', using modern");
            Style::Modern
        }
    }
}
