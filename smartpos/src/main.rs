use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use booth_layout::io::export::{export_design, export_placement};
use booth_layout::io::ext_repr::ExtPlacementRequest;
use booth_layout::io::import::Importer;
use booth_layout::io::svg::design_to_svg;
use booth_layout::placement::PlacementEngine;
use clap::Parser as ClapParser;
use log::{info, warn};
use smartpos::config::SmartPosConfig;
use smartpos::io;
use smartpos::io::cli::{Cli, Mode};
use smartpos::io::output::{ExtSessionInput, PlacementOutput, SessionOutput};
use smartpos::session::DesignSession;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SmartPosConfig::default()
        }
        Some(config_file) => {
            io::read_json::<SmartPosConfig>(&config_file).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed SmartPosConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    match args.mode {
        Mode::Session => {
            let input = io::read_json::<ExtSessionInput>(&args.input_file)?;
            main_session(input, config, input_file_stem, &args.solution_folder)
        }
        Mode::Place => {
            let request = io::read_json::<ExtPlacementRequest>(&args.input_file)?;
            main_place(request, config, input_file_stem, &args.solution_folder)
        }
    }
}

fn main_session(
    input: ExtSessionInput,
    config: SmartPosConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<()> {
    let mut session = DesignSession::from_input(&input, &config)?;
    session.run(&input.actions);

    {
        let svg_path = output_folder.join(format!("sol_{input_stem}.svg"));
        let svg = design_to_svg(
            session.design(),
            session.engine().config(),
            config.svg_draw_options,
            input_stem,
        );

        io::write_svg(&svg, &svg_path)?;
    }

    {
        let (design, report) = session.into_parts();
        let output = SessionOutput {
            design: export_design(&design),
            report,
            config,
        };

        let solution_path = output_folder.join(format!("sol_{input_stem}.json"));

        io::write_json(&output, &solution_path)?;
    }

    Ok(())
}

fn main_place(
    request: ExtPlacementRequest,
    config: SmartPosConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<()> {
    config
        .placement
        .validate()
        .context("invalid placement config")?;
    let importer = Importer::new(config.pricing);
    let (footprint, existing, room) = importer.import_placement_request(&request)?;

    let placement = PlacementEngine::new(config.placement).place(&footprint, &existing, &room);
    info!("[MAIN] {footprint} placed at {placement}");

    let output = PlacementOutput {
        request,
        placement: export_placement(&placement),
        config,
    };

    let solution_path = output_folder.join(format!("sol_{input_stem}.json"));

    io::write_json(&output, &solution_path)
}
