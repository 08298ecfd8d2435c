//! Drawing utilities for the board.

use egui::{Color32, Pos2, Rect, Stroke, Vec2};

/// Draw a background grid that scrolls with the board.
pub fn draw_grid(painter: &egui::Painter, rect: Rect, scroll: Vec2, color: Color32, spacing: f32) {
    if spacing <= 1.0 {
        return;
    }
    let start_x = rect.min.x - scroll.x.rem_euclid(spacing);
    let start_y = rect.min.y - scroll.y.rem_euclid(spacing);

    let mut x = start_x;
    while x < rect.max.x {
        painter.line_segment(
            [Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)],
            Stroke::new(1.0, color),
        );
        x += spacing;
    }

    let mut y = start_y;
    while y < rect.max.y {
        painter.line_segment(
            [Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)],
            Stroke::new(1.0, color),
        );
        y += spacing;
    }
}

const BEZIER_SEGMENTS: usize = 20;

/// Sample the horizontal-tangent cubic bezier between two points.
pub fn bezier_points(from: Pos2, to: Pos2) -> Vec<Pos2> {
    let dx = (to.x - from.x).abs() * 0.5;
    let cp1 = Pos2::new(from.x + dx, from.y);
    let cp2 = Pos2::new(to.x - dx, to.y);

    let mut points = Vec::with_capacity(BEZIER_SEGMENTS + 1);
    for i in 0..=BEZIER_SEGMENTS {
        let t = i as f32 / BEZIER_SEGMENTS as f32;
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = mt3 * from.x + 3.0 * mt2 * t * cp1.x + 3.0 * mt * t2 * cp2.x + t3 * to.x;
        let y = mt3 * from.y + 3.0 * mt2 * t * cp1.y + 3.0 * mt * t2 * cp2.y + t3 * to.y;
        points.push(Pos2::new(x, y));
    }
    points
}

/// Draw a cubic bezier connection between two points.
pub fn draw_bezier_connection(
    painter: &egui::Painter,
    from: Pos2,
    to: Pos2,
    color: Color32,
    width: f32,
) {
    let points = bezier_points(from, to);
    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], Stroke::new(width, color));
    }
}

/// Shortest distance from `pos` to the connection curve between two points.
pub fn distance_to_bezier(pos: Pos2, from: Pos2, to: Pos2) -> f32 {
    bezier_points(from, to)
        .windows(2)
        .map(|w| distance_to_segment(pos, w[0], w[1]))
        .fold(f32::INFINITY, f32::min)
}

fn distance_to_segment(pos: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return pos.distance(a);
    }
    let t = ((pos - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    pos.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bezier_starts_and_ends_on_endpoints() {
        let from = Pos2::new(0.0, 0.0);
        let to = Pos2::new(100.0, 50.0);
        let points = bezier_points(from, to);
        assert_eq!(points.len(), BEZIER_SEGMENTS + 1);
        assert_eq!(points[0], from);
        assert!(points[BEZIER_SEGMENTS].distance(to) < 1e-3);
    }

    #[test]
    fn distance_is_zero_on_the_curve_and_grows_away() {
        let from = Pos2::new(0.0, 0.0);
        let to = Pos2::new(100.0, 0.0);
        assert!(distance_to_bezier(Pos2::new(50.0, 0.0), from, to) < 1e-3);
        let d = distance_to_bezier(Pos2::new(50.0, 20.0), from, to);
        assert!((d - 20.0).abs() < 1e-3);
    }

    #[test]
    fn degenerate_segment_uses_point_distance() {
        let p = Pos2::new(3.0, 4.0);
        assert!((distance_to_segment(p, Pos2::ZERO, Pos2::ZERO) - 5.0).abs() < 1e-6);
    }
}
