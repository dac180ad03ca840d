#[cfg(test)]
mod tests {
    use std::path::Path;

    use booth_layout::entities::Occupant;
    use booth_layout::io::ext_repr::{ExtPlacementOutcome, ExtPlacementRequest};
    use booth_layout::io::import::Importer;
    use booth_layout::io::svg::design_to_svg;
    use booth_layout::placement::{PlacementEngine, occupants_collide};
    use booth_layout::util::assertions;
    use float_cmp::approx_eq;
    use smartpos::config::SmartPosConfig;
    use smartpos::io;
    use smartpos::io::output::ExtSessionInput;
    use smartpos::session::{DesignSession, SessionAction};
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    fn run(input_path: &str) -> DesignSession {
        init_logger();
        let input: ExtSessionInput = io::read_json(Path::new(input_path)).unwrap();
        let mut session = DesignSession::from_input(&input, &SmartPosConfig::default()).unwrap();
        session.run(&input.actions);
        session
    }

    #[test_case("../assets/tech_request.json"; "tech request")]
    #[test_case("../assets/healthcare_request.json"; "healthcare request")]
    #[test_case("../assets/saturated_room.json"; "saturated room")]
    #[test_case("../assets/design_session.json"; "design session")]
    fn test_session(input_path: &str) {
        let session = run(input_path);
        let design = session.design();
        let report = session.report();
        let buffer = session.engine().config().collision_buffer;

        assert!(assertions::design_ids_unique(design));
        assert_eq!(
            report.n_fallbacks,
            report
                .placements
                .iter()
                .filter(|p| matches!(p.placement.outcome, ExtPlacementOutcome::Fallback { .. }))
                .count()
        );

        let elements = design.elements();
        for record in &report.placements {
            let Some(index) = elements.iter().position(|e| e.id == record.element_id) else {
                // removed later in the session
                continue;
            };
            let element = &elements[index];
            assert_eq!(element.position.y(), 0.0);
            assert!(element.position.is_finite());
            if let ExtPlacementOutcome::Grid { .. } = record.placement.outcome {
                // the elements before it in the design were all there when it was placed
                assert!(!assertions::collides_with_any(
                    element.position(),
                    &element.footprint(),
                    &elements[..index],
                    buffer
                ));
            }
        }

        let svg = design_to_svg(
            design,
            session.engine().config(),
            Default::default(),
            input_path,
        )
        .to_string();
        for e in elements {
            assert!(svg.contains(&format!("element_{}", e.id)));
        }
    }

    #[test]
    fn saturated_room_falls_back_to_the_center() {
        let session = run("../assets/saturated_room.json");
        let report = session.report();
        assert_eq!(report.placements.len(), 5);
        assert_eq!(report.n_fallbacks, 4);
        for record in &report.placements[1..] {
            assert_eq!(record.placement.position, [0.0, 0.0, 0.0]);
        }
        assert_eq!(session.design().elements().len(), 5);
    }

    #[test]
    fn rejected_actions_are_skipped() {
        let session = run("../assets/design_session.json");
        let design = session.design();
        let report = session.report();

        assert_eq!(report.n_actions, 8);
        // moving a locked element twice and removing a missing one
        assert_eq!(report.n_rejected, 3);
        assert_eq!(design.elements().len(), 3);
        assert!(assertions::design_elements_on_floor(design));

        let wall = design.element("wall").unwrap();
        assert_eq!(wall.position.x(), 2.0);
        assert!(approx_eq!(f64, wall.position.z(), 2.9, epsilon = 1e-9));
        assert!(wall.locked);

        let counter = design.element("counter").unwrap();
        assert_eq!((counter.position.x(), counter.position.z()), (-2.5, 0.0));

        // the unknown photo booth was added as a kiosk
        let kiosk = &design.elements()[2];
        assert_eq!(kiosk.kind.type_name(), "interactive_kiosk");
        assert_eq!(report.placements[0].element_id, kiosk.id);
        assert!(approx_eq!(f64, kiosk.position.x(), -0.3, epsilon = 1e-9));
        assert!(approx_eq!(f64, kiosk.position.z(), -0.45, epsilon = 1e-9));

        // 48 sqm: 24960 + 13440 + 18000, elements: 7500 + 45000 + 11250
        assert_eq!(design.pricing().total, 120150);
    }

    #[test]
    fn tech_request_starts_from_a_preset() {
        let session = run("../assets/tech_request.json");
        let design = session.design();
        assert_eq!(design.name, "Nahla Systems - LEAP 2025");
        assert_eq!((design.room().width, design.room().depth), (7.0, 7.0));
        // 48 sqm were requested, but adding elements reprices the ceiled 7 x 7 room
        assert_eq!(design.billed_area(), 49.0);
        assert_eq!(design.pricing().materials, 49 * 520);
        assert!(design.element("preset-0").is_none());
        assert_eq!(design.elements().len(), 2 + 4);
    }

    #[test]
    fn resizing_keeps_the_height() {
        let session = run("../assets/healthcare_request.json");
        let room = session.design().room();
        assert_eq!((room.width, room.depth, room.height), (8.0, 5.0, 3.0));
        assert_eq!(session.design().billed_area(), 40.0);
    }

    #[test]
    fn single_placement_request() {
        init_logger();
        let request: ExtPlacementRequest =
            io::read_json(Path::new("../assets/placement_request.json")).unwrap();
        let (footprint, existing, room) = Importer::default()
            .import_placement_request(&request)
            .unwrap();
        let placement = PlacementEngine::default().place(&footprint, &existing, &room);

        assert!(!placement.is_fallback());
        assert!(!occupants_collide(
            placement.position,
            &footprint,
            existing[0].position,
            &existing[0].footprint,
            0.5
        ));
        assert!(approx_eq!(f64, placement.position.x(), -2.2, epsilon = 1e-9));
        assert!(approx_eq!(f64, placement.position.z(), -0.2, epsilon = 1e-9));
    }

    #[test]
    fn invalid_placement_config_is_rejected() {
        let mut config = SmartPosConfig::default();
        config.placement.grid_step = 0.0;
        let input = ExtSessionInput::default();
        assert!(DesignSession::from_input(&input, &config).is_err());
    }

    #[test]
    fn empty_config_file_gives_defaults() {
        let config: SmartPosConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SmartPosConfig::default());

        let actions: Vec<SessionAction> = serde_json::from_str(
            r#"[{"action": "add", "type": "seating"}, {"action": "resize", "width": 5, "depth": 4}]"#,
        )
        .unwrap();
        assert_eq!(
            actions[1],
            SessionAction::Resize {
                width: 5.0,
                depth: 4.0,
                height: None
            }
        );
    }
}
