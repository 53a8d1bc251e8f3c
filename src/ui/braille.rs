use std::collections::HashMap;

use ratatui::prelude::*;

use crate::geometry;
use crate::sprite::Sprite;

/// Set dots per terminal cell, keyed by (column, row).
pub type DotMap = HashMap<(usize, usize), u8>;

/// One styled character per cell.
pub type CellGrid = Vec<Vec<(char, Style)>>;

/// A field of `w` x `h` cells, i.e. `2w` x `4h` dots.
pub struct Field {
    grid: CellGrid,
    w: usize,
    h: usize,
    bg: Color,
}

impl Field {
    pub fn new(w: usize, h: usize, bg: Color) -> Self {
        Self {
            grid: vec![vec![(' ', Style::default().bg(bg)); w]; h],
            w,
            h,
            bg,
        }
    }

    pub fn dot_width(&self) -> i32 {
        (self.w * 2) as i32
    }

    pub fn dot_height(&self) -> i32 {
        (self.h * 4) as i32
    }

    pub fn sprite_layer(&self, sprite: &Sprite, x: i32, y: i32, map: &mut DotMap) {
        let (bw, bh) = (self.dot_width(), self.dot_height());
        for (dx, dy) in sprite.dots() {
            set_dot(map, x + dx, y + dy, bw, bh);
        }
    }

    pub fn rect_layer(&self, rect: &geometry::Rect, map: &mut DotMap) {
        let (bw, bh) = (self.dot_width(), self.dot_height());
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                set_dot(map, x, y, bw, bh);
            }
        }
    }

    /// Later layers overwrite earlier ones cell by cell.
    pub fn write_layer(&mut self, map: &DotMap, color: Color, bold: bool) {
        for (&(cx, cy), &bits) in map {
            if cx < self.w && cy < self.h && bits != 0 {
                let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
                let mut style = Style::default().fg(color).bg(self.bg);
                if bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                self.grid[cy][cx] = (ch, style);
            }
        }
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.grid
            .into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|(ch, style)| Span::styled(String::from(ch), style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

pub fn set_dot(map: &mut DotMap, bx: i32, by: i32, bw: i32, bh: i32) {
    if bx < 0 || by < 0 || bx >= bw || by >= bh {
        return;
    }
    let cx = bx as usize / 2;
    let cy = by as usize / 4;
    let sx = bx as usize % 2;
    let sy = by as usize % 4;
    *map.entry((cx, cy)).or_insert(0) |= braille_bit(sx, sy);
}
