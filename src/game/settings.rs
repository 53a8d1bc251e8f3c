use ratatui::style::Color;

// ── Static settings ──────────────────────────────────────────────────────────
// Sizes and speeds are in screen dots (2 per cell across, 4 per cell down).

pub const BG_COLOR: Color = Color::Rgb(10, 29, 44);
pub const SHIP_LIMIT: u32 = 3;

pub const BULLET_WIDTH: i32 = 1;
pub const BULLET_HEIGHT: i32 = 4;
pub const BULLET_COLOR: Color = Color::Rgb(255, 99, 71);
pub const BULLETS_ALLOWED: usize = 5;

pub const FLEET_DROP_SPEED: i32 = 4;

/// Speed-up applied after every cleared fleet.
pub const SPEEDUP_SCALE: f32 = 1.1;
/// Alien point growth applied after every cleared fleet.
pub const SCORE_SCALE: f32 = 1.5;

/// Frames the simulation holds still after losing a ship (~1s at 16ms).
pub const SHIP_HIT_PAUSE_TICKS: u32 = 60;

// ── Dynamic baselines ────────────────────────────────────────────────────────

pub const BASE_SHIP_SPEED: f32 = 1.5;
pub const BASE_BULLET_SPEED: f32 = 3.0;
pub const BASE_ALIEN_SPEED: f32 = 0.6;
pub const BASE_ALIEN_POINTS: u32 = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Color,
    pub ship_limit: u32,

    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Color,
    pub bullets_allowed: usize,

    pub fleet_drop_speed: i32,
    pub speedup_scale: f32,
    pub score_scale: f32,
    pub ship_hit_pause_ticks: u32,

    pub ship_speed_factor: f32,
    pub bullet_speed_factor: f32,
    pub alien_speed_factor: f32,
    pub alien_points: u32,
    /// 1.0 = right, -1.0 = left
    pub fleet_direction: f32,
}

impl Settings {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        let mut settings = Self {
            screen_width,
            screen_height,
            bg_color: BG_COLOR,
            ship_limit: SHIP_LIMIT,
            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_color: BULLET_COLOR,
            bullets_allowed: BULLETS_ALLOWED,
            fleet_drop_speed: FLEET_DROP_SPEED,
            speedup_scale: SPEEDUP_SCALE,
            score_scale: SCORE_SCALE,
            ship_hit_pause_ticks: SHIP_HIT_PAUSE_TICKS,
            ship_speed_factor: 0.0,
            bullet_speed_factor: 0.0,
            alien_speed_factor: 0.0,
            alien_points: 0,
            fleet_direction: 1.0,
        };
        settings.reset_dynamic();
        settings
    }

    /// Screen size for a terminal of `cols` x `rows` cells.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols as i32 * 2, rows as i32 * 4)
    }

    pub fn reset_dynamic(&mut self) {
        self.ship_speed_factor = BASE_SHIP_SPEED;
        self.bullet_speed_factor = BASE_BULLET_SPEED;
        self.alien_speed_factor = BASE_ALIEN_SPEED;
        self.alien_points = BASE_ALIEN_POINTS;
        self.fleet_direction = 1.0;
    }

    /// Unbounded: a long session keeps getting faster.
    pub fn increase_speed(&mut self) {
        self.ship_speed_factor *= self.speedup_scale;
        self.bullet_speed_factor *= self.speedup_scale;
        self.alien_speed_factor *= self.speedup_scale;
        // float -> int casts saturate, so this cannot overflow
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }
}
