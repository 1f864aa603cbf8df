use raylib::prelude::*;

use crate::motion::ConfettiTransform;
use crate::particle::Shape;
use crate::track::TilePlacement;

/// Draws one frame's confetti batch. Generic over the draw handle so the
/// same code serves the live window and the record framebuffer.
pub fn draw_confetti<D: RaylibDraw>(d: &mut D, transforms: &[ConfettiTransform]) {
    for t in transforms {
        match t.shape {
            Shape::Rectangle => {
                // Rotated around its center; confetti pieces are wider than tall.
                d.draw_rectangle_pro(
                    Rectangle::new(t.x, t.y, t.size, t.size * 0.6),
                    Vector2::new(t.size / 2.0, t.size * 0.3),
                    t.rotation,
                    t.color,
                );
            }
            Shape::Circle => {
                d.draw_circle_v(Vector2::new(t.x, t.y), t.size / 2.0, t.color);
            }
            Shape::Triangle => {
                let half = t.size / 2.0;
                let pts = [
                    rotated(0.0, -half, t.rotation),
                    rotated(-half, half, t.rotation),
                    rotated(half, half, t.rotation),
                ];
                let center = Vector2::new(t.x, t.y);
                d.draw_triangle(center + pts[0], center + pts[1], center + pts[2], t.color);
            }
            Shape::Star => {
                let points = star_fan(t.x, t.y, t.size / 2.0, t.rotation);
                d.draw_triangle_fan(&points, t.color);
            }
        }
    }
}

fn rotated(x: f32, y: f32, degrees: f32) -> Vector2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vector2::new(x * cos - y * sin, x * sin + y * cos)
}

/// Five-pointed star as a triangle fan: center first, then alternating
/// outer/inner vertices every 36 degrees, closed on the first vertex.
fn star_fan(x: f32, y: f32, radius: f32, rotation: f32) -> Vec<Vector2> {
    let center = Vector2::new(x, y);
    let mut points = Vec::with_capacity(12);
    points.push(center);
    for i in 0..=10 {
        let r = if i % 2 == 0 { radius } else { radius * 0.4 };
        let angle = ((i as f32) * 36.0 - 90.0 + rotation).to_radians();
        points.push(center + Vector2::new(r * angle.cos(), r * angle.sin()));
    }
    points
}

/// Draws one track column of image cards at `x`.
///
/// A card whose image never resolved keeps its placeholder; the motion model
/// cannot tell the difference.
pub fn draw_track<D: RaylibDraw>(
    d: &mut D,
    placements: &[TilePlacement],
    textures: &[Option<Texture2D>],
    x: f32,
    width: f32,
    tile_height: f32,
) {
    for p in placements {
        let rect = Rectangle::new(x, p.offset, width, tile_height);
        let texture = textures.get(p.image_index).and_then(|t| t.as_ref());
        draw_image_card(d, texture, rect);
    }
}

fn draw_image_card<D: RaylibDraw>(d: &mut D, texture: Option<&Texture2D>, rect: Rectangle) {
    d.draw_rectangle_rounded(rect, 0.25, 8, Color::new(255, 255, 255, 26));

    if let Some(tex) = texture {
        d.draw_texture_pro(
            tex,
            crop_to_fill(tex.width() as f32, tex.height() as f32, rect.width, rect.height),
            rect,
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
        // Glass overlay to blend the card with the backdrop.
        d.draw_rectangle_rounded(rect, 0.25, 8, Color::new(255, 255, 255, 26));
    } else {
        d.draw_circle_v(
            Vector2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0),
            rect.width * 0.3,
            Color::new(255, 255, 255, 40),
        );
    }

    d.draw_rectangle_lines_ex(rect, 2.0, Color::new(255, 255, 255, 100));
}

/// Largest centered source rectangle matching the destination aspect ratio.
fn crop_to_fill(tex_w: f32, tex_h: f32, dest_w: f32, dest_h: f32) -> Rectangle {
    let scale = (dest_w / tex_w).max(dest_h / tex_h);
    let src_w = dest_w / scale;
    let src_h = dest_h / scale;
    Rectangle::new((tex_w - src_w) / 2.0, (tex_h - src_h) / 2.0, src_w, src_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_to_fill_matches_destination_aspect() {
        // Wide texture into a tall card: full height, cropped width.
        let src = crop_to_fill(1600.0, 900.0, 80.0, 120.0);
        assert!((src.height - 900.0).abs() < 1e-3);
        assert!((src.width / src.height - 80.0 / 120.0).abs() < 1e-4);
        // Centered horizontally.
        assert!((src.x - (1600.0 - src.width) / 2.0).abs() < 1e-3);
        assert_eq!(src.y, 0.0);
    }

    #[test]
    fn star_fan_is_closed() {
        let points = star_fan(100.0, 100.0, 10.0, 0.0);
        assert_eq!(points.len(), 12);
        // Last perimeter vertex returns to the first.
        assert!((points[1].x - points[11].x).abs() < 1e-3);
        assert!((points[1].y - points[11].y).abs() < 1e-3);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = rotated(3.0, 4.0, 123.0);
        assert!((v.length() - 5.0).abs() < 1e-4);
    }
}
