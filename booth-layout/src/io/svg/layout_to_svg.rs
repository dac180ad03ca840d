use crate::entities::{BoothDesign, Occupant};
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::{Color, SvgDrawOptions};
use crate::placement::PlacementConfig;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws a top-down floor plan of `design`.
/// Clearance area and collision zones are derived from `config`, the way the placement engine sees the room.
pub fn design_to_svg(
    design: &BoothDesign,
    config: &PlacementConfig,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let room = design.room();
    let outline = room.outline();
    let theme = &options.theme;

    let vbox = outline
        .resize_by(outline.width() * 0.05, outline.depth() * 0.05 + 0.5)
        .unwrap_or(outline);

    let stroke_width = f64::min(vbox.width(), vbox.depth()) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the floor
        let font_size = f64::min(outline.width(), outline.depth()) * 0.025 + 0.1;
        let label_content = format!(
            "{} | width: {:.2} | depth: {:.2} | elements: {} | total: {} SAR | {}",
            design.name,
            room.width,
            room.depth,
            design.elements().len(),
            design.pricing().total,
            title,
        );
        Text::new(label_content)
            .set("x", outline.x_min)
            .set("y", outline.z_min - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw floor and walls
    let floor_group = {
        let title = Title::new(format!(
            "floor, {}x{}x{}, area: {:.2} sqm",
            room.width,
            room.depth,
            room.height,
            outline.area()
        ));
        let mut floor_group = Group::new().set("id", "floor").add(
            svg_util::data_to_path(
                svg_util::aa_rect_data(outline),
                &[
                    ("fill", &*format!("{}", theme.floor_fill)),
                    ("stroke", &*format!("{}", theme.wall_stroke)),
                    ("stroke-width", &*format!("{}", 4.0 * stroke_width)),
                ],
            )
            .add(title),
        );

        if options.clearance_area {
            if let Some(interior) = room.interior(config.wall_clearance) {
                floor_group = floor_group.add(
                    svg_util::data_to_path(
                        svg_util::aa_rect_data(interior),
                        &[
                            ("fill", "none"),
                            ("stroke", &*format!("{}", theme.wall_stroke)),
                            ("stroke-opacity", "0.4"),
                            ("stroke-width", &*format!("{}", stroke_width)),
                            (
                                "stroke-dasharray",
                                &*format!("{} {}", 4.0 * stroke_width, 4.0 * stroke_width),
                            ),
                        ],
                    )
                    .add(Title::new(format!(
                        "wall clearance: {}",
                        config.wall_clearance
                    ))),
                );
            }
        }
        floor_group
    };

    //draw elements, in design order so later elements are on top
    let elements_group = {
        let mut elements_group = Group::new().set("id", "elements");
        for e in design.elements() {
            let fill = e.color.parse::<Color>().unwrap_or(theme.element_fill);
            let stroke = svg_util::change_brightness(fill, 0.5);
            let rect = e.floor_rect();
            let title = Title::new(format!(
                "{}, id: {}, type: {}, pos: {}, size: {}, price: {} SAR{}",
                e.label,
                e.id,
                e.kind,
                e.position,
                e.footprint,
                e.price,
                if e.locked { ", locked" } else { "" }
            ));
            let mut element_group = Group::new()
                .set("id", format!("element_{}", e.id))
                .add(
                    svg_util::data_to_path(
                        svg_util::aa_rect_data(rect),
                        &[
                            ("fill", &*format!("{fill}")),
                            ("fill-opacity", &*format!("{}", theme.element_opacity)),
                            ("stroke", &*format!("{stroke}")),
                            ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                        ],
                    )
                    .add(title),
                );
            if options.labels {
                let font_size = f64::clamp(f64::min(rect.width(), rect.depth()) * 0.3, 0.08, 0.3);
                let center = rect.centroid();
                element_group = element_group.add(
                    Text::new(e.label.clone())
                        .set("x", center.x())
                        .set("y", center.z())
                        .set("font-size", font_size)
                        .set("font-family", "sans-serif")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            elements_group = elements_group.add(element_group);
        }
        elements_group
    };

    //zones in which no other element may be centered, buffer split over both elements
    let zones_group = match options.collision_zones {
        false => None,
        true => {
            let half_buffer = config.collision_buffer / 2.0;
            let zones_group = design
                .elements()
                .iter()
                .filter_map(|e| e.floor_rect().resize_by(half_buffer, half_buffer))
                .fold(Group::new().set("id", "collision_zones"), |g, zone| {
                    g.add(svg_util::data_to_path(
                        svg_util::aa_rect_data(zone),
                        &[
                            ("fill", "none"),
                            ("stroke", &*format!("{}", theme.collision_zone_color)),
                            ("stroke-width", &*format!("{}", stroke_width)),
                            (
                                "stroke-dasharray",
                                &*format!("{} {}", 2.0 * stroke_width, 2.0 * stroke_width),
                            ),
                        ],
                    ))
                });
            Some(zones_group)
        }
    };

    //highlight overlapping elements and elements crossing the walls (if enabled)
    let collision_group = match options.highlight_collisions {
        false => None,
        true => {
            let highlight = format!("{}", theme.collision_highlight_color);
            let mut collision_group = Group::new().set("id", "collision_lines");
            let elements = design.elements();
            for (i, a) in elements.iter().enumerate() {
                for b in &elements[i + 1..] {
                    if a.floor_rect().collides_with(&b.floor_rect()) {
                        collision_group = collision_group.add(
                            svg_util::data_to_path(
                                svg_util::line_data(a.position, b.position),
                                &[
                                    ("stroke", &*highlight),
                                    ("stroke-opacity", "0.75"),
                                    ("stroke-width", &*format!("{}", stroke_width * 4.0)),
                                    (
                                        "stroke-dasharray",
                                        &*format!("{} {}", 4.0 * stroke_width, 8.0 * stroke_width),
                                    ),
                                    ("stroke-linecap", "round"),
                                    ("stroke-linejoin", "round"),
                                ],
                            )
                            .add(Title::new(format!("{} overlaps {}", a.id, b.id))),
                        );
                    }
                }
                if !outline.contains_rect(&a.floor_rect()) {
                    collision_group = collision_group.add(svg_util::point(
                        a.position,
                        Some(&highlight),
                        Some(6.0 * stroke_width),
                    ));
                }
            }
            Some(collision_group)
        }
    };

    let vbox_svg = (vbox.x_min, vbox.z_min, vbox.width(), vbox.depth());

    let optionals = [zones_group, collision_group]
        .into_iter()
        .flatten()
        .fold(Group::new().set("id", "optionals"), |g, opt| g.add(opt));

    Document::new()
        .set("viewBox", vbox_svg)
        .add(floor_group)
        .add(elements_group)
        .add(optionals)
        .add(label)
}
