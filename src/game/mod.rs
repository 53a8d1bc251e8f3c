pub mod alien;
pub mod bullet;
pub mod button;
pub mod fleet;
pub mod scoreboard;
pub mod settings;
pub mod ship;
pub mod stats;

use log::{debug, info};

use crate::geometry::Rect;
use crate::sprite::Sprite;

use alien::Alien;
use bullet::Bullet;
use button::Button;
use scoreboard::Scoreboard;
use settings::Settings;
use ship::Ship;
use stats::GameStats;

/// Keys the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
    Q,
}

/// Input already translated from the terminal, in screen dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    MouseDown { x: i32, y: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Play button showing; nothing moves.
    Inactive,
    Active,
    /// A ship was just lost; the board holds still for `ticks_left` frames.
    Paused { ticks_left: u32 },
}

pub struct AlienInvasion {
    pub settings: Settings,
    pub stats: GameStats,
    pub scoreboard: Scoreboard,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub play_button: Button,
    alien_sprite: Sprite,
    ship_sprite: Sprite,
    screen: Rect,
    pause_ticks: u32,
    pointer_visible: bool,
    should_quit: bool,
}

impl AlienInvasion {
    pub fn new(settings: Settings, alien_sprite: Sprite) -> Self {
        let screen = Rect::new(0, 0, settings.screen_width, settings.screen_height);
        let ship_sprite = Sprite::ship();
        let stats = GameStats::new(&settings);
        let scoreboard = Scoreboard::new(&stats);
        let ship = Ship::new(ship_sprite.size(), screen);
        let play_button = Button::new(screen, "Play", settings.bg_color);

        let mut game = Self {
            settings,
            stats,
            scoreboard,
            ship,
            bullets: Vec::new(),
            aliens: Vec::new(),
            play_button,
            alien_sprite,
            ship_sprite,
            screen,
            pause_ticks: 0,
            pointer_visible: true,
            should_quit: false,
        };
        game.create_fleet();
        info!(
            "Screen {}x{} dots, fleet of {} aliens",
            screen.width,
            screen.height,
            game.aliens.len()
        );
        game
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn alien_sprite(&self) -> &Sprite {
        &self.alien_sprite
    }

    pub fn ship_sprite(&self) -> &Sprite {
        &self.ship_sprite
    }

    pub fn pointer_visible(&self) -> bool {
        self.pointer_visible
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn phase(&self) -> Phase {
        if !self.stats.game_active {
            Phase::Inactive
        } else if self.pause_ticks > 0 {
            Phase::Paused {
                ticks_left: self.pause_ticks,
            }
        } else {
            Phase::Active
        }
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: GameEvent) {
        if event == GameEvent::Quit || event == GameEvent::KeyDown(Key::Q) {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }
        // Releases still land during the pause, or a key let go mid-pause
        // would keep the ship moving afterwards.
        if self.pause_ticks > 0 && !matches!(event, GameEvent::KeyUp(_)) {
            debug!("Ignoring {:?} during ship-hit pause", event);
            return;
        }
        match event {
            GameEvent::KeyDown(Key::Right) => self.ship.moving_right = true,
            GameEvent::KeyDown(Key::Left) => self.ship.moving_left = true,
            GameEvent::KeyDown(Key::Space) => self.fire_bullet(),
            GameEvent::KeyUp(Key::Right) => self.ship.moving_right = false,
            GameEvent::KeyUp(Key::Left) => self.ship.moving_left = false,
            GameEvent::MouseDown { x, y } => self.check_play_button(x, y),
            _ => {}
        }
    }

    fn check_play_button(&mut self, x: i32, y: i32) {
        if self.play_button.collide_point(x, y) && !self.stats.game_active {
            self.start_game();
        }
    }

    fn start_game(&mut self) {
        self.settings.reset_dynamic();
        self.stats.reset(&self.settings);
        self.stats.game_active = true;
        self.pause_ticks = 0;

        self.aliens.clear();
        self.bullets.clear();
        self.create_fleet();
        self.ship.center(self.screen);

        self.scoreboard.prep_score(&self.stats);
        self.scoreboard.prep_level(&self.stats);
        self.scoreboard.prep_ships(&self.stats);

        self.pointer_visible = false;
        info!("New game started (high score {})", self.stats.high_score);
    }

    pub fn fire_bullet(&mut self) {
        if self.bullets.len() < self.settings.bullets_allowed {
            self.bullets.push(Bullet::new(&self.settings, &self.ship));
        }
    }

    // ── Simulation ───────────────────────────────────────────────────────────

    /// Advance one frame.
    pub fn update(&mut self) {
        if !self.stats.game_active {
            return;
        }
        if self.pause_ticks > 0 {
            self.pause_ticks -= 1;
            if self.pause_ticks == 0 {
                debug!("Resuming after ship hit");
            }
            return;
        }
        self.ship.update(&self.settings, self.screen);
        self.update_bullets();
        self.update_aliens();
    }

    pub fn create_fleet(&mut self) {
        let size = self.alien_sprite.size();
        let positions = fleet::layout(
            self.screen.width,
            self.screen.height,
            self.ship.rect.height,
            size,
        );
        self.aliens
            .extend(positions.into_iter().map(|(x, y)| Alien::new(size, x, y)));
        debug!("Fleet built with {} aliens", self.aliens.len());
    }

    pub fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|b| !b.is_off_screen());

        self.check_bullet_alien_collisions();
    }

    fn check_bullet_alien_collisions(&mut self) {
        let destroyed = collide_bullets_with_aliens(&mut self.bullets, &mut self.aliens);
        if destroyed > 0 {
            let gained = self.settings.alien_points.saturating_mul(destroyed);
            self.stats.score = self.stats.score.saturating_add(gained);
            self.scoreboard.prep_score(&self.stats);
            self.scoreboard.check_high_score(&mut self.stats);
        }

        if self.aliens.is_empty() {
            self.bullets.clear();
            self.create_fleet();
            self.settings.increase_speed();
            self.stats.level = self.stats.level.saturating_add(1);
            self.scoreboard.prep_level(&self.stats);
            info!(
                "Fleet cleared, level {} (alien points {})",
                self.stats.level, self.settings.alien_points
            );
        }
    }

    pub fn update_aliens(&mut self) {
        self.check_fleet_edges();
        for alien in &mut self.aliens {
            alien.update(&self.settings);
        }

        if self
            .aliens
            .iter()
            .any(|a| a.rect.collides_with(&self.ship.rect))
        {
            self.ship_hit();
        }

        self.check_aliens_bottom();
    }

    /// One drop and one direction flip per frame, however many aliens touch.
    fn check_fleet_edges(&mut self) {
        let screen = self.screen;
        if self.aliens.iter().any(|a| a.check_edge(screen)) {
            self.change_fleet_direction();
        }
    }

    fn change_fleet_direction(&mut self) {
        for alien in &mut self.aliens {
            alien.drop_by(self.settings.fleet_drop_speed);
        }
        self.settings.fleet_direction *= -1.0;
    }

    fn check_aliens_bottom(&mut self) {
        let bottom = self.screen.bottom();
        if self.aliens.iter().any(|a| a.rect.bottom() >= bottom) {
            self.ship_hit();
        }
    }

    pub fn ship_hit(&mut self) {
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);
        self.scoreboard.prep_ships(&self.stats);

        self.aliens.clear();
        self.bullets.clear();

        if self.stats.ships_left > 0 {
            self.create_fleet();
            self.ship.center(self.screen);
            self.pause_ticks = self.settings.ship_hit_pause_ticks;
            info!("Ship hit, {} left", self.stats.ships_left);
        } else {
            self.stats.game_active = false;
            self.pause_ticks = 0;
            self.pointer_visible = true;
            info!(
                "Game over: score {}, level {}, high score {}",
                self.stats.score, self.stats.level, self.stats.high_score
            );
        }
    }
}

/// Remove every overlapping bullet/alien pair; returns how many aliens went.
///
/// A bullet takes out at most one alien, and an alien already destroyed this
/// pass cannot absorb a second bullet.
pub fn collide_bullets_with_aliens(bullets: &mut Vec<Bullet>, aliens: &mut Vec<Alien>) -> u32 {
    let mut destroyed = 0;
    bullets.retain(|bullet| {
        match aliens.iter().position(|a| a.rect.collides_with(&bullet.rect)) {
            Some(idx) => {
                aliens.swap_remove(idx);
                destroyed += 1;
                false
            }
            None => true,
        }
    });
    destroyed
}
