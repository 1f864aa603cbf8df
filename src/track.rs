use anyhow::{Result, bail};

use crate::constants::SCROLL_RATE_SCALE;

/// Vertical scroll direction of an image track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// One slot in a track's repeating tile sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackTile {
    pub tile_index: usize,
    /// Index into the track's image list (`tile_index % image_count`).
    pub image_index: usize,
    /// Unwrapped offset from the sequence origin (`tile_index * tile_extent`).
    pub base_offset: f32,
}

/// A tile that survived culling, ready to draw at `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub image_index: usize,
    pub offset: f32,
}

/// Tiles needed for a seamless loop at the given viewport height.
///
/// `ceil(height / extent) + 2` covers the screen with one tile of slack on
/// each side; doubling (floored at twice the image count) makes the buffer
/// long enough that tile N and tile N + total occupy visually adjacent
/// wrapped positions, so the loop never shows a reset seam.
pub fn required_tiles(viewport_height: f32, tile_extent: f32, image_count: usize) -> usize {
    if tile_extent <= 0.0 || viewport_height <= 0.0 {
        return 0;
    }
    let visible = (viewport_height / tile_extent).ceil() as usize + 2;
    (visible * 2).max(image_count * 2)
}

/// Reduces a tile's ever-growing signed offset to its rendered position.
///
/// The scroll distance itself never wraps; only this rendered offset does,
/// which is what keeps the motion free of visible jumps. Defined for all
/// inputs: a non-positive span parks the tile one extent above the origin,
/// where culling discards it.
pub fn wrapped_offset(
    base_offset: f32,
    scroll_distance: f32,
    tile_extent: f32,
    span: f32,
    direction: ScrollDirection,
) -> f32 {
    if span <= 0.0 {
        return -tile_extent;
    }
    let signed = match direction {
        ScrollDirection::Up => base_offset - scroll_distance,
        ScrollDirection::Down => scroll_distance - base_offset,
    };
    signed.rem_euclid(span) - tile_extent
}

/// One vertically scrolling image track: owns its tile list and maps the
/// unbounded time signal to per-tile wrapped offsets.
pub struct ImageTrack {
    direction: ScrollDirection,
    speed: f32,
    tile_height: f32,
    spacing: f32,
    image_count: usize,
    tiles: Vec<TrackTile>,
    built_for_height: f32,
}

impl ImageTrack {
    pub fn new(
        direction: ScrollDirection,
        speed: f32,
        tile_height: f32,
        spacing: f32,
        image_count: usize,
    ) -> Result<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            bail!("track speed must be a positive number, got {speed}");
        }
        if tile_height <= 0.0 {
            bail!("tile height must be positive, got {tile_height}");
        }
        if image_count == 0 {
            bail!("track needs at least one image slot");
        }
        Ok(Self {
            direction,
            speed,
            tile_height,
            spacing,
            image_count,
            tiles: Vec::new(),
            built_for_height: 0.0,
        })
    }

    pub fn tile_extent(&self) -> f32 {
        self.tile_height + self.spacing
    }

    pub fn tiles(&self) -> &[TrackTile] {
        &self.tiles
    }

    /// Monotonic scroll distance in pixels for elapsed seconds `t`.
    pub fn scroll_distance(&self, t: f32) -> f32 {
        self.speed * SCROLL_RATE_SCALE * t
    }

    fn rebuild(&mut self, viewport_height: f32) {
        let extent = self.tile_extent();
        let total = required_tiles(viewport_height, extent, self.image_count);
        self.tiles = (0..total)
            .map(|i| TrackTile {
                tile_index: i,
                image_index: i % self.image_count,
                base_offset: i as f32 * extent,
            })
            .collect();
        self.built_for_height = viewport_height;
    }

    /// Wrapped, culled tile placements for one frame.
    ///
    /// Rebuilds the tile list when the viewport height changes; otherwise the
    /// list is stable for the session. Culling keeps tiles within two extents
    /// of the screen band and only reduces draw calls, never visible output.
    pub fn placements(&mut self, t: f32, viewport_height: f32) -> Vec<TilePlacement> {
        if viewport_height <= 0.0 {
            return Vec::new();
        }
        if self.built_for_height != viewport_height {
            self.rebuild(viewport_height);
        }

        let extent = self.tile_extent();
        let span = extent * self.tiles.len() as f32;
        let scroll = self.scroll_distance(t);

        self.tiles
            .iter()
            .filter_map(|tile| {
                let offset =
                    wrapped_offset(tile.base_offset, scroll, extent, span, self.direction);
                let visible =
                    offset > -extent * 2.0 && offset < viewport_height + extent * 2.0;
                visible.then_some(TilePlacement {
                    image_index: tile.image_index,
                    offset,
                })
            })
            .collect()
    }
}
