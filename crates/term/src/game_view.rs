//! GameView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a one-line header, then the tubes in rows of at most
//! [`TUBES_PER_ROW`]. Each tube slot is [`TUBE_W`] columns wide and
//! [`SLOT_H`] rows tall:
//!
//! ```text
//!  row 0      lift row (the selected tube is drawn one row higher)
//!  rows 1..=4 units, top unit first
//!  row 5      vessel bottom
//!  row 6      tube number
//!  row 7      cursor marker
//! ```

use crate::core::SessionSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, SessionStatus, TOTAL_LEVELS_PER_SEASON, TUBE_CAPACITY};

/// Maximum tubes drawn side by side.
pub const TUBES_PER_ROW: usize = 7;
/// Columns per tube, walls included.
pub const TUBE_W: u16 = 6;
/// Rows per tube slot.
pub const SLOT_H: u16 = TUBE_CAPACITY as u16 + 4;

const GAP_X: u16 = 2;
const GAP_Y: u16 = 1;
const HEADER_H: u16 = 2;

const BG: Rgb = Rgb::new(0, 0, 0);
const GLASS: CellStyle = CellStyle::new(Rgb::new(150, 150, 165), BG);
const GLASS_SELECTED: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(120, 120, 130), BG);
const HEADER: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
const CURSOR: CellStyle = CellStyle::new(Rgb::new(255, 210, 90), BG).bold();

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

/// Terminal renderer for a water sort board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where one tube slot lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TubeSlot {
    /// Left column of the vessel wall
    pub x: u16,
    /// Top row of the slot (the lift row)
    pub y: u16,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the tube grid for `tube_count` tubes, header excluded.
    pub fn grid_size(tube_count: usize) -> (u16, u16) {
        if tube_count == 0 {
            return (0, 0);
        }
        let cols = tube_count.min(TUBES_PER_ROW) as u16;
        let rows = tube_count.div_ceil(TUBES_PER_ROW) as u16;
        (
            cols * TUBE_W + (cols - 1) * GAP_X,
            rows * SLOT_H + (rows - 1) * GAP_Y,
        )
    }

    /// Screen position of every tube slot, in tube order.
    ///
    /// Rows are centered individually, so a short last row sits in the middle.
    pub fn tube_slots(&self, tube_count: usize, viewport: Viewport) -> Vec<TubeSlot> {
        let (_, grid_h) = Self::grid_size(tube_count);
        let total_h = grid_h + HEADER_H;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        } + HEADER_H;

        (0..tube_count)
            .map(|i| {
                let row = (i / TUBES_PER_ROW) as u16;
                let col = (i % TUBES_PER_ROW) as u16;
                let in_row = (tube_count - row as usize * TUBES_PER_ROW).min(TUBES_PER_ROW);
                let (row_w, _) = Self::grid_size(in_row);
                let left = viewport.width.saturating_sub(row_w) / 2;
                TubeSlot {
                    x: left + col * (TUBE_W + GAP_X),
                    y: top + row * (SLOT_H + GAP_Y),
                }
            })
            .collect()
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// `cursor` is the tube under the keyboard cursor, if shown.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let slots = self.tube_slots(snap.tubes.len(), viewport);
        let header_y = slots
            .first()
            .map(|s| s.y.saturating_sub(HEADER_H))
            .unwrap_or(0);
        self.draw_header(fb, snap, viewport, header_y);

        for (i, (units, slot)) in snap.tubes.iter().zip(&slots).enumerate() {
            let selected = snap.selected == Some(i);
            self.draw_tube(fb, *slot, i, units, selected);
            if cursor == Some(i) && snap.playable() {
                fb.put_char(slot.x + TUBE_W / 2, slot.y + SLOT_H - 1, '▲', CURSOR);
            }
        }

        match snap.status {
            SessionStatus::Won => self.draw_overlay(
                fb,
                viewport,
                "PERFECT!",
                "n next level · r new shuffle",
                Rgb::new(120, 230, 140),
            ),
            SessionStatus::Lost => self.draw_overlay(
                fb,
                viewport,
                "OUT OF MOVES",
                "r new shuffle · u same layout",
                Rgb::new(240, 110, 100),
            ),
            SessionStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, vp: Viewport, y: u16) {
        let title = format!(
            "{}  LEVEL {}/{}",
            snap.season.as_str().to_ascii_uppercase(),
            snap.level_number,
            TOTAL_LEVELS_PER_SEASON
        );
        let moves = format!("MOVES {}/{}", snap.moves_left, snap.move_limit);
        let line = format!("{}   {}", title, moves);
        fb.put_centered(0, vp.width, y, &line, HEADER);

        // Low move budget turns the counter red.
        if snap.moves_left <= 3 && snap.playable() {
            let start = vp.width.saturating_sub(line.chars().count() as u16) / 2;
            let x = start + (title.chars().count() + 3) as u16;
            let warn = CellStyle::new(Rgb::new(240, 110, 100), BG).bold();
            fb.put_str(x, y, &moves, warn);
        }
    }

    fn draw_tube(
        &self,
        fb: &mut FrameBuffer,
        slot: TubeSlot,
        index: usize,
        units: &[Color],
        selected: bool,
    ) {
        let lift = if selected { 0 } else { 1 };
        let top = slot.y + lift;
        let glass = if selected { GLASS_SELECTED } else { GLASS };

        // Vessel: capacity rows of walls plus the bottom.
        fb.draw_vessel(slot.x, top, TUBE_W, TUBE_CAPACITY as u16 + 1, glass);

        // Units bottom-up; the bottom unit sits right above the vessel bottom.
        let inner_w = TUBE_W - 2;
        let bottom_row = top + TUBE_CAPACITY as u16 - 1;
        for (k, color) in units.iter().enumerate() {
            let y = bottom_row - k as u16;
            let style = CellStyle::new(Rgb::from(*color), BG);
            fb.fill_rect(slot.x + 1, y, inner_w, 1, '█', style);
        }

        let label = format!("{}", index + 1);
        let label_style = if selected { GLASS_SELECTED } else { LABEL };
        fb.put_centered(slot.x, TUBE_W, slot.y + SLOT_H - 2, &label, label_style);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, vp: Viewport, title: &str, hint: &str, fg: Rgb) {
        let w = (hint.chars().count().max(title.chars().count()) as u16 + 4).min(vp.width);
        let h = 5u16.min(vp.height);
        let x = vp.width.saturating_sub(w) / 2;
        let y = vp.height.saturating_sub(h) / 2;

        let panel = CellStyle::new(fg, Rgb::new(20, 20, 28));
        fb.fill_rect(x, y, w, h, ' ', panel);
        fb.draw_box(x, y, w, h, panel);
        fb.put_centered(x, w, y + 1, title, panel.bold());
        fb.put_centered(
            x,
            w,
            y + 3,
            hint,
            CellStyle::new(Rgb::new(200, 200, 200), panel.bg).dim(),
        );
    }
}
