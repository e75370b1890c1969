//! Tile animation frames.
//!
//! Turns the controller's in-flight [`Animation`] into a list of tiles with
//! fractional positions, display values, opacity and scale, ready to draw.
//!
//! - Travelling tiles ease out from their source to their target over
//!   [`SLIDE_ANIMATION_MS`], whatever the distance.
//! - A merge survivor shows the doubled value from [`MERGE_FLASH_AT_MS`].
//! - The absorbed tile of a merge fades out over [`FADE_OUT_MS`] from that point.
//! - A freshly spawned tile pops in over [`SPAWN_POP_MS`] after the move settles.

use arrayvec::ArrayVec;

use crate::core::{Animation, GameSnapshot, RecentSpawn};
use crate::types::{TileId, BOARD_SIZE, CELL_COUNT, FADE_OUT_MS, MERGE_FLASH_AT_MS, SLIDE_ANIMATION_MS, SPAWN_POP_MS};

/// One tile to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedTile {
    pub id: TileId,
    /// Fractional row (0.0 is the top row)
    pub row: f32,
    /// Fractional column (0.0 is the left column)
    pub col: f32,
    pub value: u32,
    /// 1.0 is fully visible
    pub opacity: f32,
    /// 1.0 is full size
    pub scale: f32,
    /// Survivor of a merge, already showing its new value
    pub merged: bool,
}

/// Tiles in draw order (later tiles are drawn on top)
pub type FrameTiles = ArrayVec<AnimatedTile, { CELL_COUNT * 2 }>;

/// Cubic ease-out on `[0, 1]`
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

fn lerp(from: usize, to: usize, t: f32) -> f32 {
    from as f32 + (to as f32 - from as f32) * t
}

/// Tiles for the current frame
///
/// `snap` holds the post-slide board, so tiles without a movement record are
/// drawn in place. Records are drawn on top, absorbed tiles underneath the
/// tiles they merge into.
pub fn frame_tiles(
    snap: &GameSnapshot,
    animation: Option<&Animation>,
    last_spawn: Option<RecentSpawn>,
) -> FrameTiles {
    let mut out = FrameTiles::new();
    let mut moving: ArrayVec<TileId, CELL_COUNT> = ArrayVec::new();
    if let Some(anim) = animation {
        moving.extend(
            anim.transition()
                .movements
                .iter()
                .filter(|r| !r.absorbed)
                .map(|r| r.id),
        );
    }

    let pop = last_spawn.filter(|s| s.popping());
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let value = snap.board[row][col];
            let Some(id) = snap.ids[row][col] else {
                continue;
            };
            if value == 0 || moving.contains(&id) {
                continue;
            }
            let scale = match pop {
                Some(s) if s.tile.id == id => ease_out(s.age_ms as f32 / SPAWN_POP_MS as f32),
                _ => 1.0,
            };
            out.push(AnimatedTile {
                id,
                row: row as f32,
                col: col as f32,
                value,
                opacity: 1.0,
                scale,
                merged: false,
            });
        }
    }

    let Some(anim) = animation else {
        return out;
    };

    let elapsed = anim.elapsed_ms();
    let t = ease_out(elapsed as f32 / SLIDE_ANIMATION_MS as f32);
    let flashed = elapsed >= MERGE_FLASH_AT_MS;
    let records = anim.transition().movements.iter();

    for rec in records.clone().filter(|r| r.absorbed) {
        let opacity = if flashed {
            1.0 - (elapsed - MERGE_FLASH_AT_MS) as f32 / FADE_OUT_MS as f32
        } else {
            1.0
        };
        if opacity <= 0.0 {
            continue;
        }
        out.push(AnimatedTile {
            id: rec.id,
            row: lerp(rec.from_row, rec.to_row, t),
            col: lerp(rec.from_col, rec.to_col, t),
            value: rec.value,
            opacity,
            scale: 1.0,
            merged: false,
        });
    }

    for rec in records.filter(|r| !r.absorbed) {
        let merged = rec.merged && flashed;
        out.push(AnimatedTile {
            id: rec.id,
            row: lerp(rec.from_row, rec.to_row, t),
            col: lerp(rec.from_col, rec.to_col, t),
            value: if merged { rec.settled_value() } else { rec.value },
            opacity: 1.0,
            scale: 1.0,
            merged,
        });
    }

    out
}
