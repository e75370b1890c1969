//! GameView: maps a [`GameSnapshot`] (plus animation frame tiles) into a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::animation::{frame_tiles, AnimatedTile};
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{MessageKind, BOARD_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Space between tiles and around the grid, in terminal cells
const GAP: u16 = 1;

/// Columns between the board border and the side panel
const PANEL_GAP: u16 = 2;
/// Narrowest side panel worth drawing
const PANEL_MIN_W: u16 = 10;
/// Width the layout reserves for the panel when centring
const PANEL_W: u16 = 12;

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const SLOT_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Colours for a tile value (classic palette)
pub fn tile_style(value: u32) -> CellStyle {
    let (bg, fg) = match value {
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg).bold()
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square and fits four digits with padding.
        Self::new(7, 3)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board `(width, height)`
    pub fn frame_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        let inner_w = GAP + n * (self.cell_w + GAP);
        let inner_h = GAP + n * (self.cell_h + GAP);
        (inner_w + 2, inner_h + 2)
    }

    /// The viewport leaves room for the side panel next to the board
    pub fn panel_fits(&self, viewport: Viewport) -> bool {
        let (frame_w, _) = self.frame_size();
        viewport.width >= frame_w + PANEL_GAP + PANEL_MIN_W
    }

    /// Top-left corner of the bordered board inside `viewport`
    ///
    /// When the side panel fits, board and panel are centred as one block.
    pub fn board_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let block_w = if self.panel_fits(viewport) {
            frame_w + PANEL_GAP + PANEL_W
        } else {
            frame_w
        };
        let x = viewport.width.saturating_sub(block_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render the settled state (no animation) into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let tiles = frame_tiles(snap, None, None);
        self.render_frame_into(snap, &tiles, viewport, fb);
    }

    /// Render one animation frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_frame_into(
        &self,
        snap: &GameSnapshot,
        tiles: &[AnimatedTile],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(LIGHT_TEXT, SCREEN_BG).cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.board_origin(viewport);

        let board = CellStyle::new(DARK_TEXT, BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, CellStyle::new(BOARD_BG, SCREEN_BG));

        let slot = CellStyle::new(DARK_TEXT, SLOT_BG);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let (x, y) = self.tile_origin(start_x, start_y, row as f32, col as f32);
                fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', slot);
            }
        }

        for tile in tiles {
            self.draw_tile(fb, start_x, start_y, tile);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if let Some(message) = snap.message {
            self.draw_banner(fb, start_x, start_y, frame_w, frame_h, message);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn tile_origin(&self, start_x: u16, start_y: u16, row: f32, col: f32) -> (u16, u16) {
        let x = start_x as f32 + 1.0 + GAP as f32 + col * (self.cell_w + GAP) as f32;
        let y = start_y as f32 + 1.0 + GAP as f32 + row * (self.cell_h + GAP) as f32;
        (x.round().max(0.0) as u16, y.round().max(0.0) as u16)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, tile: &AnimatedTile) {
        if tile.scale <= 0.0 || tile.opacity <= 0.0 {
            return;
        }

        let base = tile_style(tile.value);
        let fade = 1.0 - tile.opacity;
        let style = CellStyle {
            fg: base.fg.mix(SLOT_BG, fade),
            bg: base.bg.mix(SLOT_BG, fade),
            dim: fade > 0.5,
            ..base
        };

        // Scaled tiles shrink around the centre of their slot.
        let w = ((self.cell_w as f32 * tile.scale).round() as u16).clamp(1, self.cell_w);
        let h = ((self.cell_h as f32 * tile.scale).round() as u16).clamp(1, self.cell_h);
        let (x0, y0) = self.tile_origin(start_x, start_y, tile.row, tile.col);
        let x = x0 + (self.cell_w - w) / 2;
        let y = y0 + (self.cell_h - h) / 2;
        fb.fill_rect(x, y, w, h, ' ', style);

        let digits = decimal_width(tile.value);
        if digits <= w {
            let tx = x + (w - digits) / 2;
            fb.put_u32(tx, y + h / 2, tile.value, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        if !self.panel_fits(viewport) {
            return;
        }
        let panel_x = start_x.saturating_add(frame_w).saturating_add(PANEL_GAP);
        if viewport.width.saturating_sub(panel_x) < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let dim = value.dim();

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", snap.best_score),
            ("MOVES", snap.moves),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, v, value);
            y = y.saturating_add(2);
        }

        if snap.promo_triggered {
            let promo = CellStyle::new(Rgb::new(237, 194, 46), SCREEN_BG).bold();
            fb.put_str(panel_x, y, "BONUS", promo);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, "2 4 8 16!", promo);
            y = y.saturating_add(2);
        }

        for help in ["←↑→↓ / WASD", "R  restart", "Q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        message: MessageKind,
    ) {
        let style = match message {
            MessageKind::Won => CellStyle::new(LIGHT_TEXT, Rgb::new(237, 194, 46)).bold(),
            MessageKind::Lost => CellStyle::new(DARK_TEXT, Rgb::new(238, 228, 218)).bold(),
        };
        let mid_y = start_y.saturating_add(frame_h / 2);
        fb.fill_rect(start_x + 1, mid_y.saturating_sub(1), frame_w.saturating_sub(2), 3, ' ', style);

        let text = message.text();
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, style);
    }
}

fn decimal_width(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
