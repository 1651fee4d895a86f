//! Cairo rendering of the dial's render description.

use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use rondo_core::shapes::{self, Disc, Figure, Segment, Shape, Sweep};
use rondo_core::{Point, RenderFrame};
use std::f64::consts::TAU;

const PRESSED_HANDLE_SCALE: f64 = 0.93;

pub fn draw(cr: &Context, frame: &RenderFrame, colors: &ThemeColors) -> Result<(), cairo::Error> {
    fill_shape(cr, &shapes::ring(&frame.track), colors.track)?;
    fill_dots(cr, &shapes::tick_ring(&frame.ticks), colors.tick)?;

    if let Some(active) = &frame.active {
        fill_shape(cr, &shapes::donut_arc(active), colors.active)?;
    }

    fill_disc(cr, &frame.hub, colors.hub)?;
    draw_handle(cr, frame, colors)?;
    draw_value_text(cr, frame, colors)
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn fill_shape(cr: &Context, shape: &Shape, color: Srgba<f64>) -> Result<(), cairo::Error> {
    if shape.is_empty() {
        return Ok(());
    }

    cr.new_path();
    for figure in &shape.figures {
        trace_figure(cr, figure);
    }
    cr.set_fill_rule(cairo::FillRule::Winding);
    set_source(cr, color);
    cr.fill()
}

fn trace_figure(cr: &Context, figure: &Figure) {
    cr.new_sub_path();
    cr.move_to(figure.start.x, figure.start.y);

    let mut cursor = figure.start;
    for segment in &figure.segments {
        match *segment {
            Segment::Line { to } => {
                cr.line_to(to.x, to.y);
                cursor = to;
            }
            Segment::Arc {
                to,
                radius,
                large_arc,
                sweep,
            } => {
                trace_arc(cr, cursor, to, radius, large_arc, sweep);
                cursor = to;
            }
        }
    }

    if figure.closed {
        cr.close_path();
    }
}

/// Endpoint-parameterized circular arc: recover the circle center from
/// the chord, then let cairo sweep between the two endpoint angles.
fn trace_arc(cr: &Context, from: Point, to: Point, radius: f64, large_arc: bool, sweep: Sweep) {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let chord = dx.hypot(dy);
    if chord < f64::EPSILON {
        return;
    }

    // An undersized radius cannot span the chord; scale it up like an SVG
    // renderer would.
    let radius = radius.max(chord / 2.0);
    let apothem = (radius * radius - chord * chord / 4.0).max(0.0).sqrt();

    let clockwise = sweep == Sweep::Clockwise;
    let side = if large_arc == clockwise { -1.0 } else { 1.0 };
    let cx = (from.x + to.x) / 2.0 - dy / chord * apothem * side;
    let cy = (from.y + to.y) / 2.0 + dx / chord * apothem * side;

    let start_angle = (from.y - cy).atan2(from.x - cx);
    let end_angle = (to.y - cy).atan2(to.x - cx);

    if clockwise {
        cr.arc(cx, cy, radius, start_angle, end_angle);
    } else {
        cr.arc_negative(cx, cy, radius, start_angle, end_angle);
    }
}

fn fill_dots(cr: &Context, dots: &[Disc], color: Srgba<f64>) -> Result<(), cairo::Error> {
    if dots.is_empty() {
        return Ok(());
    }

    cr.new_path();
    for dot in dots {
        cr.new_sub_path();
        cr.arc(dot.center.x, dot.center.y, dot.radius, 0.0, TAU);
    }
    set_source(cr, color);
    cr.fill()
}

fn fill_disc(cr: &Context, disc: &Disc, color: Srgba<f64>) -> Result<(), cairo::Error> {
    cr.new_path();
    cr.arc(disc.center.x, disc.center.y, disc.radius, 0.0, TAU);
    set_source(cr, color);
    cr.fill()
}

fn draw_handle(cr: &Context, frame: &RenderFrame, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let handle = &frame.handle;
    let radius = if handle.pressed {
        handle.radius * PRESSED_HANDLE_SCALE
    } else {
        handle.radius
    };

    // Soft drop ring under the handle so it reads as raised.
    fill_disc(
        cr,
        &Disc {
            center: Point::new(handle.center.x, handle.center.y + 1.0 * frame.scale),
            radius: radius + 1.5 * frame.scale,
        },
        Srgba::new(0.0, 0.0, 0.0, 0.18),
    )?;

    fill_disc(
        cr,
        &Disc {
            center: handle.center,
            radius,
        },
        colors.handle,
    )
}

fn draw_value_text(
    cr: &Context,
    frame: &RenderFrame,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let center = frame.hub.center;
    set_source(cr, colors.text);

    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(80.0 * frame.scale);
    let number = frame.value.to_string();
    if let Ok(ext) = cr.text_extents(&number) {
        cr.move_to(
            center.x - ext.width() / 2.0,
            center.y + ext.height() / 2.0 - 12.0 * frame.scale,
        );
        cr.show_text(&number)?;
    }

    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(24.0 * frame.scale);
    let label = frame.label.as_str();
    if let Ok(ext) = cr.text_extents(label) {
        cr.move_to(
            center.x - ext.width() / 2.0,
            center.y + ext.height() + 40.0 * frame.scale,
        );
        cr.show_text(label)?;
    }

    Ok(())
}
