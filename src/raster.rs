//! CPU compositor for overlay frames.
//!
//! Paints a display list onto an RGBA canvas: background first, then per
//! zone the grid texture, the interior wash, the ring stroke and any
//! vertex handles, then the draft preview. Used by the CLI to produce
//! inspection images and by tests to pin the renderer's output.

use image::{imageops, Rgba, RgbaImage};

use crate::geometry::{bounding_box, point_in_polygon, Point};
use crate::overlay::OverlayFrame;
use crate::palette::{Color, HANDLE_FILL};

/// Composite a frame onto a fresh canvas of the frame's declared size.
pub fn composite(frame: &OverlayFrame<'_>) -> RgbaImage {
    let (width, height) = frame.canvas;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));

    if let Some(bg) = frame.background {
        if bg.dimensions() == (width, height) {
            imageops::replace(&mut canvas, bg, 0, 0);
        } else {
            let scaled = imageops::resize(bg, width, height, imageops::FilterType::Triangle);
            imageops::replace(&mut canvas, &scaled, 0, 0);
        }
    }

    for layer in &frame.zones {
        for seg in &layer.grid {
            draw_line(&mut canvas, seg.a, seg.b, layer.grid_stroke, layer.grid_stroke_width);
        }
        if layer.ring.len() >= 3 {
            fill_polygon(&mut canvas, &layer.ring, layer.fill);
        }
        stroke_ring(&mut canvas, &layer.ring, layer.stroke, layer.stroke_width);
        for handle in &layer.handles {
            draw_handle(&mut canvas, *handle, frame.handle_size);
        }
    }

    if let Some(preview) = &frame.preview {
        for pair in preview.points.windows(2) {
            draw_line(&mut canvas, pair[0], pair[1], preview.stroke, preview.stroke_width);
        }
    }

    canvas
}

/// Source-over blend of `color` onto an opaque canvas pixel.
fn blend(pixel: &mut Rgba<u8>, color: Color) {
    let a = color.a as u32;
    if a == 0 {
        return;
    }
    let inv = 255 - a;
    pixel.0[0] = ((color.r as u32 * a + pixel.0[0] as u32 * inv) / 255) as u8;
    pixel.0[1] = ((color.g as u32 * a + pixel.0[1] as u32 * inv) / 255) as u8;
    pixel.0[2] = ((color.b as u32 * a + pixel.0[2] as u32 * inv) / 255) as u8;
    pixel.0[3] = 255;
}

fn put(canvas: &mut RgbaImage, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }
    blend(canvas.get_pixel_mut(x, y), color);
}

/// Stamp a filled square of side `size` centered on `(x, y)`.
fn stamp(canvas: &mut RgbaImage, x: i32, y: i32, size: i32, color: Color) {
    if size <= 1 {
        put(canvas, x, y, color);
        return;
    }
    let half = size / 2;
    for oy in -half..size - half {
        for ox in -half..size - half {
            put(canvas, x + ox, y + oy, color);
        }
    }
}

/// Bresenham line; widths above one are stamped as squares along the run.
fn draw_line(canvas: &mut RgbaImage, a: Point, b: Point, color: Color, width: f32) {
    let size = width.round().max(1.0) as i32;
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (a.x, a.y);
    loop {
        stamp(canvas, x, y, size, color);
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Stroke a vertex list, closing it back to the first point once it forms
/// a ring.
fn stroke_ring(canvas: &mut RgbaImage, ring: &[Point], color: Color, width: f32) {
    for pair in ring.windows(2) {
        draw_line(canvas, pair[0], pair[1], color, width);
    }
    if ring.len() >= 3 {
        draw_line(canvas, ring[ring.len() - 1], ring[0], color, width);
    }
}

/// Pixel-classify the bounding box and wash every inside pixel.
fn fill_polygon(canvas: &mut RgbaImage, ring: &[Point], color: Color) {
    let Some((min, max)) = bounding_box(ring) else {
        return;
    };
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            if point_in_polygon(Point::new(x, y), ring) {
                put(canvas, x, y, color);
            }
        }
    }
}

fn draw_handle(canvas: &mut RgbaImage, center: Point, size: i32) {
    stamp(canvas, center.x, center.y, size.max(1), HANDLE_FILL);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::editor::EditorState;
    use crate::message::Message;
    use crate::overlay::Overlay;
    use crate::palette::{zone_color, ZONE_FILL};

    fn small_state() -> EditorState {
        let config = EditorConfig {
            canvas_width: 40,
            canvas_height: 40,
            grid_step: 5,
            ..EditorConfig::default()
        };
        let mut state = EditorState::with_config(config);
        state.zones.append(vec![
            Point::new(5, 5),
            Point::new(30, 5),
            Point::new(30, 30),
            Point::new(5, 30),
        ]);
        state
    }

    #[test]
    fn test_composite_paints_ring_and_wash() {
        let state = small_state();
        let mut overlay = Overlay::new();
        let canvas = composite(&overlay.frame(&state));
        assert_eq!(canvas.dimensions(), (40, 40));

        // Ring stroke is opaque palette color.
        let stroke = zone_color(0);
        assert_eq!(
            *canvas.get_pixel(5, 5),
            Rgba([stroke.r, stroke.g, stroke.b, 255])
        );

        // An interior pixel off the grid lines carries only the blue wash
        // blended over black.
        let washed_blue = (255u32 * ZONE_FILL.a as u32 / 255) as u8;
        assert_eq!(*canvas.get_pixel(17, 17), Rgba([0, 0, washed_blue, 255]));
    }

    #[test]
    fn test_composite_paints_grid_texture() {
        let state = small_state();
        let mut overlay = Overlay::new();
        let canvas = composite(&overlay.frame(&state));

        // A grid sweep line runs at x=10 (min_x=5 plus one step); pixels on
        // it stay brighter than wash-only neighbours even under the wash.
        let on_grid = canvas.get_pixel(10, 17);
        let off_grid = canvas.get_pixel(12, 17);
        assert!(on_grid.0[0] > off_grid.0[0]);
    }

    #[test]
    fn test_composite_draws_preview_and_handles() {
        let mut state = small_state();
        let id = state.zones.zones()[0].id;
        state.update(Message::BeginEdit(id));
        let mut overlay = Overlay::new();
        let canvas = composite(&overlay.frame(&state));
        // Handle squares are painted white over the ring corners.
        assert_eq!(*canvas.get_pixel(5, 5), Rgba([255, 255, 255, 255]));

        state.update(Message::CancelEdit);
        state.update(Message::PointerDown { x: 33.0, y: 33.0 });
        state.update(Message::PointerDown { x: 38.0, y: 33.0 });
        let canvas = composite(&overlay.frame(&state));
        let red = crate::palette::DRAFT_STROKE;
        assert_eq!(
            *canvas.get_pixel(35, 33),
            Rgba([red.r, red.g, red.b, 255])
        );
    }

    #[test]
    fn test_background_is_scaled_to_canvas() {
        let mut state = small_state();
        state.background = Some(RgbaImage::from_pixel(10, 10, Rgba([9, 9, 9, 255])));
        let mut overlay = Overlay::new();
        let canvas = composite(&overlay.frame(&state));
        assert_eq!(canvas.dimensions(), (40, 40));
        // A corner pixel outside every zone shows the background, not black.
        assert_eq!(*canvas.get_pixel(39, 0), Rgba([9, 9, 9, 255]));
    }
}
