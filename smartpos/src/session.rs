use crate::config::SmartPosConfig;
use crate::io::output::ExtSessionInput;
use anyhow::{Context, Result, anyhow, bail};
use booth_layout::entities::{BoothDesign, ElementKind, generate_preset};
use booth_layout::io::export::export_placement;
use booth_layout::io::ext_repr::ExtPlacement;
use booth_layout::io::import::Importer;
use booth_layout::placement::PlacementEngine;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thousands::Separable;
use web_time::Instant;

/// A single edit of a booth design, as issued by the designer UI.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    /// Adds an element from the library, placed by the placement engine
    Add {
        #[serde(rename = "type")]
        kind: String,
    },
    Remove { id: String },
    /// Drags an element to (`x`, `z`), clamped to the floor
    Move { id: String, x: f64, z: f64 },
    /// Resizes the room, the height is kept if not specified
    Resize {
        width: f64,
        depth: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
    },
    Lock {
        id: String,
        #[serde(default = "default_locked")]
        locked: bool,
    },
}

fn default_locked() -> bool {
    true
}

/// Where an added element was placed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlacementRecord {
    pub element_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub placement: ExtPlacement,
}

/// Summary of the actions applied in a [`DesignSession`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SessionReport {
    /// Placements of all added elements, in order
    pub placements: Vec<PlacementRecord>,
    pub n_actions: usize,
    /// Number of added elements that could not be placed without overlapping
    pub n_fallbacks: usize,
    /// Number of actions that were rejected, e.g. moving a locked element
    pub n_rejected: usize,
    pub elapsed_ms: f64,
}

/// Owns a single [`BoothDesign`] and applies edits to it one at a time.
pub struct DesignSession {
    design: BoothDesign,
    engine: PlacementEngine,
    report: SessionReport,
    start: Instant,
}

impl DesignSession {
    pub fn new(design: BoothDesign, config: &SmartPosConfig) -> Result<Self> {
        config
            .placement
            .validate()
            .context("invalid placement config")?;
        let mut design = design;
        design.change_rates(config.pricing);
        Ok(DesignSession {
            design,
            engine: PlacementEngine::new(config.placement),
            report: SessionReport::default(),
            start: Instant::now(),
        })
    }

    /// Starts a session from an existing design or a booth request.
    /// Without either, the session starts from an empty default booth.
    pub fn from_input(input: &ExtSessionInput, config: &SmartPosConfig) -> Result<Self> {
        let importer = Importer::new(config.pricing);
        let design = match (&input.design, &input.request) {
            (Some(_), Some(_)) => bail!("session input has both a design and a booth request"),
            (Some(ext_design), None) => importer.import_design(ext_design)?,
            (None, Some(ext_request)) => {
                let request = importer.import_request(ext_request)?;
                generate_preset(&request, &config.pricing)?
            }
            (None, None) => {
                warn!("[SES] no design or booth request provided, starting from an empty booth");
                BoothDesign::default()
            }
        };
        DesignSession::new(design, config)
    }

    /// Applies a single action to the design.
    pub fn apply(&mut self, action: &SessionAction) -> Result<()> {
        self.report.n_actions += 1;
        match action {
            SessionAction::Add { kind } => {
                let element_kind = ElementKind::from_type_name(kind).unwrap_or_else(|| {
                    warn!(
                        "[SES] unknown element type '{kind}', adding a {} instead",
                        ElementKind::default()
                    );
                    ElementKind::default()
                });
                let (id, placement) = self.design.add_element(element_kind, &self.engine);
                if placement.is_fallback() {
                    self.report.n_fallbacks += 1;
                }
                info!(
                    "[SES] added {element_kind} {id} at {placement}, total: {} SAR",
                    self.design.pricing().total.separate_with_commas()
                );
                self.report.placements.push(PlacementRecord {
                    element_id: id,
                    kind: element_kind.type_name().to_string(),
                    placement: export_placement(&placement),
                });
            }
            SessionAction::Remove { id } => {
                let removed = self
                    .design
                    .remove_element(id)
                    .ok_or_else(|| anyhow!("no element with id {id}"))?;
                info!(
                    "[SES] removed {} {id}, total: {} SAR",
                    removed.kind,
                    self.design.pricing().total.separate_with_commas()
                );
            }
            SessionAction::Move { id, x, z } => {
                if !(x.is_finite() && z.is_finite()) {
                    bail!("cannot move {id} to non-finite position ({x}, {z})");
                }
                let position = self.design.move_element(id, *x, *z)?;
                info!("[SES] moved {id} to {position}");
            }
            SessionAction::Resize {
                width,
                depth,
                height,
            } => {
                let height = height.unwrap_or(self.design.room().height);
                if ![*width, *depth, height].iter().all(|d| d.is_finite()) {
                    bail!("cannot resize the room to {width}x{depth}x{height}");
                }
                let room = self.design.resize_room(*width, *depth, height);
                info!(
                    "[SES] resized room to {}x{}x{}, total: {} SAR",
                    room.width,
                    room.depth,
                    room.height,
                    self.design.pricing().total.separate_with_commas()
                );
            }
            SessionAction::Lock { id, locked } => {
                self.design.set_locked(id, *locked)?;
                info!("[SES] {} {id}", if *locked { "locked" } else { "unlocked" });
            }
        }
        Ok(())
    }

    /// Applies all actions in order. Rejected actions are logged and skipped.
    pub fn run(&mut self, actions: &[SessionAction]) -> &SessionReport {
        for action in actions {
            if let Err(e) = self.apply(action) {
                self.report.n_rejected += 1;
                warn!("[SES] rejected {action:?}: {e:#}");
            }
        }
        self.report.elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        info!(
            "[SES] {} actions applied ({} rejected), {} elements, {} fallbacks, total: {} SAR",
            self.report.n_actions,
            self.report.n_rejected,
            self.design.elements().len(),
            self.report.n_fallbacks,
            self.design.pricing().total.separate_with_commas()
        );
        &self.report
    }

    pub fn design(&self) -> &BoothDesign {
        &self.design
    }

    pub fn report(&self) -> &SessionReport {
        &self.report
    }

    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    pub fn into_parts(self) -> (BoothDesign, SessionReport) {
        (self.design, self.report)
    }
}
