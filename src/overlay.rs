use raylib::prelude::*;

/// Measures string width in pixels for the default font. raylib 5.5 removed
/// the free `measure_text` function in favor of a `RaylibHandle` method; this
/// shim keeps the same behavior without threading a handle through.
fn measure_text(text: &str, font_size: i32) -> i32 {
    let c_text = std::ffi::CString::new(text).unwrap();
    unsafe { raylib::ffi::MeasureText(c_text.as_ptr(), font_size) }
}

use crate::motion::Viewport;

const TITLE: &str = "Beyond Anime";
const BODY: [&str; 3] = [
    "Explore a universe where every story comes to life,",
    "from epic battles to heartfelt journeys. Discover",
    "series and movies that ignite your imagination.",
];
const BUTTON_LABEL: &str = "Get Started";

/// Static text/button overlay drawn on top of the animated layers. Pure
/// presentation; nothing here touches the motion model.
pub fn draw_overlay<D: RaylibDraw>(d: &mut D, viewport: Viewport) {
    if !viewport.is_renderable() {
        return;
    }

    let title_size = if viewport.width > 1200.0 { 40 } else { 32 };
    let body_size = if viewport.width > 1200.0 { 18 } else { 14 };
    let pad = 24.0;

    let panel_w = (viewport.width * 0.45).min(560.0);
    let panel_h = pad * 2.0 + title_size as f32 + 20.0 + BODY.len() as f32 * (body_size as f32 + 6.0) + 28.0 + 48.0;
    let panel = Rectangle::new(
        pad,
        (viewport.height - panel_h) / 2.0,
        panel_w,
        panel_h,
    );
    d.draw_rectangle_rounded(panel, 0.1, 8, Color::new(0, 0, 0, 102));

    // Title on a horizontal gradient chip.
    let title_w = measure_text(TITLE, title_size) as f32;
    let chip = Rectangle::new(panel.x + pad, panel.y + pad, title_w + 32.0, title_size as f32 + 16.0);
    d.draw_rectangle_gradient_h(
        chip.x as i32,
        chip.y as i32,
        chip.width as i32,
        chip.height as i32,
        Color::new(0x4f, 0xc3, 0xf7, 255),
        Color::new(0x81, 0xc7, 0x84, 255),
    );
    d.draw_text(
        TITLE,
        (chip.x + 16.0) as i32,
        (chip.y + 8.0) as i32,
        title_size,
        Color::WHITE,
    );

    let mut y = chip.y + chip.height + 20.0;
    for line in BODY {
        d.draw_text(
            line,
            (panel.x + pad) as i32,
            y as i32,
            body_size,
            Color::new(255, 255, 255, 230),
        );
        y += body_size as f32 + 6.0;
    }

    let button = Rectangle::new(panel.x + pad, y + 28.0, 160.0, 48.0);
    d.draw_rectangle_rounded(button, 0.5, 8, Color::new(0x4c, 0xaf, 0x50, 255));
    let label_w = measure_text(BUTTON_LABEL, body_size) as f32;
    d.draw_text(
        BUTTON_LABEL,
        (button.x + (button.width - label_w) / 2.0) as i32,
        (button.y + (button.height - body_size as f32) / 2.0) as i32,
        body_size,
        Color::WHITE,
    );
}
