#![cfg(target_arch = "wasm32")]

use crate::config::SmartPosConfig;
use crate::io::output::{ExtSessionInput, PlacementOutput, SessionOutput};
use crate::session::DesignSession;
use booth_layout::io::export::{export_design, export_placement};
use booth_layout::io::ext_repr::ExtPlacementRequest;
use booth_layout::io::import::Importer;
use booth_layout::io::svg::design_to_svg;
use booth_layout::placement::PlacementEngine;
use log::{Level, info, warn};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct SessionWasmResult {
    output: SessionOutput,
    svg: String,
}

#[wasm_bindgen]
pub fn init_logger_wasm() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(Level::Info).is_ok() {
        info!("[WASM] logger initialized");
    }
}

fn read_config(config_json: JsValue) -> SmartPosConfig {
    if config_json.is_null() || config_json.is_undefined() {
        return SmartPosConfig::default();
    }
    from_value(config_json).unwrap_or_else(|e| {
        warn!("[WASM] invalid config, using default. Reason: {e}");
        SmartPosConfig::default()
    })
}

/// Places a single element, input and output as [`ExtPlacementRequest`] and [`PlacementOutput`].
#[wasm_bindgen]
pub fn smart_position(request_json: JsValue, config_json: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let request: ExtPlacementRequest = from_value(request_json)
        .map_err(|e| JsValue::from_str(&format!("placement request decode error: {e}")))?;
    let config = read_config(config_json);
    config
        .placement
        .validate()
        .map_err(|e| JsValue::from_str(&format!("invalid placement config: {e:#}")))?;

    let (footprint, existing, room) = Importer::new(config.pricing)
        .import_placement_request(&request)
        .map_err(|e| JsValue::from_str(&format!("importer error: {e:#}")))?;
    let placement = PlacementEngine::new(config.placement).place(&footprint, &existing, &room);

    let output = PlacementOutput {
        request,
        placement: export_placement(&placement),
        config,
    };
    to_value(&output).map_err(|e| JsValue::from_str(&format!("result encode error: {e}")))
}

/// Runs a design session, returns the [`SessionOutput`] together with an SVG floor plan of the final design.
#[wasm_bindgen]
pub fn run_session(input_json: JsValue, config_json: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let input: ExtSessionInput = from_value(input_json)
        .map_err(|e| JsValue::from_str(&format!("session input decode error: {e}")))?;
    let config = read_config(config_json);

    let mut session = DesignSession::from_input(&input, &config)
        .map_err(|e| JsValue::from_str(&format!("session error: {e:#}")))?;
    session.run(&input.actions);

    let svg = design_to_svg(
        session.design(),
        session.engine().config(),
        config.svg_draw_options,
        "",
    )
    .to_string();

    let (design, report) = session.into_parts();
    let result = SessionWasmResult {
        output: SessionOutput {
            design: export_design(&design),
            report,
            config,
        },
        svg,
    };
    to_value(&result).map_err(|e| JsValue::from_str(&format!("result encode error: {e}")))
}
