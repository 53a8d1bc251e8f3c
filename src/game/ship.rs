use crate::geometry::Rect;

use super::settings::Settings;

#[derive(Clone, Debug)]
pub struct Ship {
    pub rect: Rect,
    /// Sub-dot horizontal position; `rect.x` is its truncation.
    pub x: f32,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    /// A ship of the given sprite size, centered at the bottom of `screen`.
    pub fn new((width, height): (i32, i32), screen: Rect) -> Self {
        let mut ship = Self {
            rect: Rect::new(0, 0, width, height),
            x: 0.0,
            moving_right: false,
            moving_left: false,
        };
        ship.center(screen);
        ship
    }

    /// Both intents are checked independently against the pre-move rect,
    /// so holding both keys moves right and then left in the same frame.
    pub fn update(&mut self, settings: &Settings, screen: Rect) {
        if self.moving_right && self.rect.right() < screen.right() {
            self.x += settings.ship_speed_factor;
        }
        if self.moving_left && self.rect.left() > 0 {
            self.x -= settings.ship_speed_factor;
        }
        self.rect.x = self.x as i32;
    }

    pub fn center(&mut self, screen: Rect) {
        self.rect.set_midbottom(screen.midbottom());
        self.x = self.rect.x as f32;
    }
}
