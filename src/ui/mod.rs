pub mod braille;
pub mod hud;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::AlienInvasion;
use self::braille::{DotMap, Field};

const SHIP_COLOR: Color = Color::Rgb(230, 230, 230);
const ALIEN_COLOR: Color = Color::Rgb(80, 255, 150);
/// Gap between the spare-ship icons in the top-left corner.
const ICON_GAP: i32 = 2;

/// Draw one frame: background, ship, bullets, aliens, scoreboard, and the
/// Play button while no game is running.
pub fn render(frame: &mut Frame, game: &AlienInvasion) {
    let area = frame.area();
    let bg = game.settings.bg_color;
    frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

    let w = area.width as usize;
    let h = area.height as usize;
    if w > 0 && h > 0 {
        let lines = render_field(game, w, h);
        frame.render_widget(Paragraph::new(lines), area);
    }

    hud::render_scoreboard(frame, area, &game.scoreboard, bg);

    if !game.stats.game_active {
        hud::render_button(frame, area, &game.play_button);
    }
}

fn render_field(game: &AlienInvasion, w: usize, h: usize) -> Vec<Line<'static>> {
    let mut field = Field::new(w, h, game.settings.bg_color);

    // ── Ship ───────────────────────────────────────────────────────────
    let mut ship_map = DotMap::new();
    field.sprite_layer(game.ship_sprite(), game.ship.rect.x, game.ship.rect.y, &mut ship_map);
    field.write_layer(&ship_map, SHIP_COLOR, true);

    // ── Bullets ────────────────────────────────────────────────────────
    let mut bullet_map = DotMap::new();
    for bullet in &game.bullets {
        field.rect_layer(&bullet.rect, &mut bullet_map);
    }
    field.write_layer(&bullet_map, game.settings.bullet_color, true);

    // ── Aliens ─────────────────────────────────────────────────────────
    let mut alien_map = DotMap::new();
    for alien in &game.aliens {
        field.sprite_layer(game.alien_sprite(), alien.rect.x, alien.rect.y, &mut alien_map);
    }
    field.write_layer(&alien_map, ALIEN_COLOR, false);

    // ── Spare ships ────────────────────────────────────────────────────
    let mut icon_map = DotMap::new();
    let icon = game.ship_sprite();
    for i in 0..game.scoreboard.ships_left as i32 {
        let x = ICON_GAP + i * (icon.width() + ICON_GAP);
        field.sprite_layer(icon, x, 0, &mut icon_map);
    }
    field.write_layer(&icon_map, SHIP_COLOR, false);

    field.into_lines()
}
