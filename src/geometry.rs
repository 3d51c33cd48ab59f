//! Geometry kernel: point-in-polygon classification and grid-fill
//! segment extraction.
//!
//! Everything here is a pure function over vertex slices; the editor and
//! the overlay renderer both call into this module.

use crate::constants::MIN_ZONE_VERTICES;

/// A 2D point in reference-canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A line segment between two canvas points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}

/// Axis-aligned bounding box of a vertex list as `(min, max)` corners.
/// Returns `None` for an empty list.
pub fn bounding_box(points: &[Point]) -> Option<(Point, Point)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// Ray-casting parity test: is `point` inside the closed ring `polygon`?
///
/// The edge test toggles on a strict `y` crossing, so horizontal edges
/// never divide by zero and never toggle. The tie-break this produces
/// (left/top boundaries classify inside, right/bottom outside on
/// axis-aligned rings) is relied upon by the grid-fill visuals and must
/// not be altered. Rings with fewer than three vertices are never inside.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < MIN_ZONE_VERTICES {
        return false;
    }

    let x = point.x as f64;
    let y = point.y as f64;
    let mut inside = false;

    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i].x as f64, polygon[i].y as f64);
        let (xj, yj) = (polygon[j].x as f64, polygon[j].y as f64);

        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Extract the grid-fill texture for a polygon: sweep vertical lines at
/// `x = min_x, min_x + step, …` and horizontal lines at `y = min_y, …`
/// across the bounding box, classify each pixel along the swept line, and
/// coalesce maximal inside runs into segments.
///
/// A run starts at the first inside pixel, ends at `last_inside - 1` when
/// the scan leaves the polygon, and an open run is flushed at the box
/// edge. The sweep is intentionally pixel-granular to match the rendered
/// grid exactly.
pub fn grid_fill(polygon: &[Point], step: i32) -> Vec<Segment> {
    if polygon.len() < MIN_ZONE_VERTICES {
        return Vec::new();
    }
    let Some((min, max)) = bounding_box(polygon) else {
        return Vec::new();
    };
    let step = step.max(1);
    let mut segments = Vec::new();

    let mut x = min.x;
    while x <= max.x {
        let mut run_start: Option<i32> = None;
        for y in min.y..=max.y {
            if point_in_polygon(Point::new(x, y), polygon) {
                if run_start.is_none() {
                    run_start = Some(y);
                }
            } else if let Some(start) = run_start.take() {
                segments.push(Segment::new(Point::new(x, start), Point::new(x, y - 1)));
            }
        }
        if let Some(start) = run_start {
            segments.push(Segment::new(Point::new(x, start), Point::new(x, max.y)));
        }
        x += step;
    }

    let mut y = min.y;
    while y <= max.y {
        let mut run_start: Option<i32> = None;
        for x in min.x..=max.x {
            if point_in_polygon(Point::new(x, y), polygon) {
                if run_start.is_none() {
                    run_start = Some(x);
                }
            } else if let Some(start) = run_start.take() {
                segments.push(Segment::new(Point::new(start, y), Point::new(x - 1, y)));
            }
        }
        if let Some(start) = run_start {
            segments.push(Segment::new(Point::new(start, y), Point::new(max.x, y)));
        }
        y += step;
    }

    segments
}
