use ratatui::style::Color;

use crate::geometry::Rect;

pub const BUTTON_WIDTH: i32 = 40;
pub const BUTTON_HEIGHT: i32 = 12;
pub const BUTTON_COLOR: Color = Color::Rgb(0, 255, 0);

// Dots per terminal cell.
const CELL_DOTS_X: i32 = 2;
const CELL_DOTS_Y: i32 = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub color: Color,
    pub text_color: Color,
}

impl Button {
    /// A button centered on `screen`, snapped down-left onto terminal cell
    /// boundaries so the drawn cells and the clickable dots line up.
    pub fn new(screen: Rect, label: &str, text_color: Color) -> Self {
        let mut rect = Rect::new(0, 0, BUTTON_WIDTH, BUTTON_HEIGHT);
        rect.set_center(screen.center());
        rect.x -= rect.x.rem_euclid(CELL_DOTS_X);
        rect.y -= rect.y.rem_euclid(CELL_DOTS_Y);
        Self {
            rect,
            label: label.to_string(),
            color: BUTTON_COLOR,
            text_color,
        }
    }

    pub fn collide_point(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point(x, y)
    }
}
