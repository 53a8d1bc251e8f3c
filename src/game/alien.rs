use crate::geometry::Rect;

use super::settings::Settings;

#[derive(Clone, Debug)]
pub struct Alien {
    pub rect: Rect,
    pub x: f32,
}

impl Alien {
    pub fn new((width, height): (i32, i32), x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            x: x as f32,
        }
    }

    pub fn check_edge(&self, screen: Rect) -> bool {
        self.rect.right() >= screen.right() || self.rect.left() <= 0
    }

    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed_factor * settings.fleet_direction;
        self.rect.x = self.x as i32;
    }

    /// Vertical step ordered by the fleet; aliens never move down on their own.
    pub fn drop_by(&mut self, dy: i32) {
        self.rect.y += dy;
    }
}
