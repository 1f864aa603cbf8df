pub const RENDER_WIDTH: i32 = 1920;           // Width of the export render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the export render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame when recording (seconds)

pub const DEFAULT_PARTICLE_COUNT: u32 = 50;   // Confetti pieces per field
pub const DEFAULT_SPEED: f32 = 100.0;         // Confetti speed parameter

pub const CYCLE_BASE: f32 = 1000.0;           // Sawtooth cycle = CYCLE_BASE / speed (seconds)
pub const WRAP_MARGIN: f32 = 100.0;           // Vertical slack so confetti exits fully before wrapping
pub const SCROLL_RATE_SCALE: f32 = 2.0;       // Track speed parameter -> scroll pixels per second

pub const TILE_HEIGHT: f32 = 120.0;           // Image tile height (px)
pub const TILE_SPACING: f32 = 12.0;           // Gap between tiles in a track (px)
pub const TRACK_COUNT: usize = 3;             // Vertical image tracks
pub const TRACK_WIDTH: f32 = 80.0;            // Track width (px)
pub const TRACK_GAP: f32 = 25.0;              // Horizontal gap between tracks (px)
pub const TRACK_RIGHT_PADDING: f32 = 20.0;    // Padding from the right screen edge (px)
pub const PLACEHOLDER_SLOTS: usize = 5;       // Tile modulus when a track has no images
