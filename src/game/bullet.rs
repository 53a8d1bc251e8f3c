use crate::geometry::Rect;

use super::settings::Settings;
use super::ship::Ship;

#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rect,
    pub y: f32,
}

impl Bullet {
    /// Spawn with the bullet's top-center on the ship's top-center.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let mut rect = Rect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_midtop(ship.rect.midtop());
        Self { rect, y: rect.y as f32 }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed_factor;
        self.rect.y = self.y as i32;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}
