use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use alien_invasion::app::App;
use alien_invasion::game::settings::Settings;
use alien_invasion::game::{AlienInvasion, GameEvent, Key, Phase};
use alien_invasion::input::{mouse_event, KeyTracker, HOLD_WINDOW};
use alien_invasion::sprite::Sprite;

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
}

fn press(code: KeyCode) -> KeyEvent {
    key(code, KeyEventKind::Press)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn make_app(reports_release: bool) -> App {
    let sprite = Sprite::parse(include_str!("../assets/alien.txt")).unwrap();
    // 100x25 cells -> 200x100 dots, button centered on cell (50, 12).
    App::new(
        AlienInvasion::new(Settings::for_terminal(100, 25), sprite),
        reports_release,
    )
}

// ── KeyTracker with release reporting ────────────────────────────────────────

#[test]
fn press_and_release_map_to_down_and_up() {
    let mut keys = KeyTracker::new(true);
    assert_eq!(keys.on_key(press(KeyCode::Left)), vec![GameEvent::KeyDown(Key::Left)]);
    assert_eq!(
        keys.on_key(key(KeyCode::Left, KeyEventKind::Release)),
        vec![GameEvent::KeyUp(Key::Left)]
    );
}

#[test]
fn repeat_events_are_swallowed() {
    let mut keys = KeyTracker::new(true);
    keys.on_key(press(KeyCode::Char(' ')));
    assert!(keys.on_key(key(KeyCode::Char(' '), KeyEventKind::Repeat)).is_empty());
    assert!(keys.on_key(key(KeyCode::Right, KeyEventKind::Repeat)).is_empty());
}

#[test]
fn held_keys_never_time_out_when_releases_are_reported() {
    let mut keys = KeyTracker::new(true);
    keys.on_key(press(KeyCode::Right));
    for _ in 0..(HOLD_WINDOW * 10) {
        assert!(keys.on_tick().is_empty());
    }
}

#[test]
fn quit_keys() {
    let mut keys = KeyTracker::new(true);
    assert_eq!(keys.on_key(press(KeyCode::Char('q'))), vec![GameEvent::KeyDown(Key::Q)]);
    assert_eq!(keys.on_key(press(KeyCode::Char('Q'))), vec![GameEvent::KeyDown(Key::Q)]);
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(keys.on_key(ctrl_c), vec![GameEvent::Quit]);
}

#[test]
fn unmapped_keys_are_ignored() {
    let mut keys = KeyTracker::new(true);
    assert!(keys.on_key(press(KeyCode::Char('x'))).is_empty());
    assert!(keys.on_key(press(KeyCode::Up)).is_empty());
}

// ── KeyTracker on classic terminals ──────────────────────────────────────────

#[test]
fn quiet_arrow_gets_a_synthetic_release() {
    let mut keys = KeyTracker::new(false);
    assert_eq!(keys.on_key(press(KeyCode::Left)), vec![GameEvent::KeyDown(Key::Left)]);
    for _ in 0..HOLD_WINDOW {
        assert!(keys.on_tick().is_empty());
    }
    assert_eq!(keys.on_tick(), vec![GameEvent::KeyUp(Key::Left)]);
    assert!(keys.on_tick().is_empty());
}

#[test]
fn auto_repeat_keeps_an_arrow_held() {
    let mut keys = KeyTracker::new(false);
    keys.on_key(press(KeyCode::Right));
    for _ in 0..20 {
        keys.on_tick();
        keys.on_tick();
        // Repeats arrive as presses; no second KeyDown.
        assert!(keys.on_key(press(KeyCode::Right)).is_empty());
    }
}

#[test]
fn every_space_press_fires() {
    let mut keys = KeyTracker::new(false);
    assert_eq!(keys.on_key(press(KeyCode::Char(' '))), vec![GameEvent::KeyDown(Key::Space)]);
    assert_eq!(keys.on_key(press(KeyCode::Char(' '))), vec![GameEvent::KeyDown(Key::Space)]);
}

// ── Mouse ────────────────────────────────────────────────────────────────────

#[test]
fn mouse_down_maps_to_dots() {
    assert_eq!(
        mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5)),
        Some(GameEvent::MouseDown { x: 20, y: 20 })
    );
    assert_eq!(
        mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
        Some(GameEvent::MouseDown { x: 0, y: 0 })
    );
    assert_eq!(mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 10, 5)), None);
    assert_eq!(mouse_event(mouse(MouseEventKind::Moved, 10, 5)), None);
}

// ── App wiring ───────────────────────────────────────────────────────────────

#[test]
fn app_click_starts_and_key_steers() {
    let mut app = make_app(true);
    app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 12));
    assert_eq!(app.game.phase(), Phase::Active);

    app.on_key(press(KeyCode::Right));
    let before = app.game.ship.x;
    app.on_tick();
    assert!(app.game.ship.x > before);

    app.on_key(key(KeyCode::Right, KeyEventKind::Release));
    let stopped = app.game.ship.x;
    app.on_tick();
    assert_eq!(app.game.ship.x, stopped);
}

#[test]
fn synthetic_release_during_pause_stops_the_ship() {
    let mut app = make_app(false);
    app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 12));
    app.on_key(press(KeyCode::Right));
    app.game.ship_hit();

    // The hold window expires well inside the pause.
    for _ in 0..200 {
        app.on_tick();
    }
    assert!(!app.game.ship.moving_right);
    assert_eq!(app.game.ship.rect.centerx(), 100);
}

#[test]
fn app_quits_on_q() {
    let mut app = make_app(false);
    app.on_key(press(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn app_resize_keeps_the_screen() {
    let mut app = make_app(true);
    let screen = app.game.screen();
    app.on_resize(20, 10);
    assert_eq!(app.game.screen(), screen);
}
