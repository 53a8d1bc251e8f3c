use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use alien_invasion::game::settings::Settings;
use alien_invasion::game::{AlienInvasion, GameEvent};
use alien_invasion::sprite::Sprite;
use alien_invasion::ui;

const COLS: u16 = 80;
const ROWS: u16 = 24;

fn make_game() -> AlienInvasion {
    let sprite = Sprite::parse(include_str!("../assets/alien.txt")).unwrap();
    AlienInvasion::new(Settings::for_terminal(COLS, ROWS), sprite)
}

fn draw(game: &AlienInvasion) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(COLS, ROWS)).unwrap();
    terminal.draw(|frame| ui::render(frame, game)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

fn screen_text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| row_text(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn inactive_frame_shows_play_button() {
    let game = make_game();
    let buf = draw(&game);
    // 40x12 dot button -> 20x3 cells centered on an 80x24 terminal.
    assert!(row_text(&buf, 11).contains("Play"));
    assert_eq!(buf[(30, 10)].bg, game.play_button.color);
}

#[test]
fn every_drawn_button_cell_is_clickable() {
    let game = make_game();
    let buf = draw(&game);
    for row in 0..ROWS {
        for col in 0..COLS {
            let drawn = buf[(col, row)].bg == game.play_button.color;
            let mut clicked = make_game();
            clicked.handle_event(GameEvent::MouseDown {
                x: col as i32 * 2,
                y: row as i32 * 4,
            });
            assert_eq!(clicked.stats.game_active, drawn, "cell ({}, {})", col, row);
        }
    }
}

#[test]
fn clicking_the_top_row_of_the_button_starts_a_game() {
    let mut game = make_game();
    game.handle_event(GameEvent::MouseDown { x: 30 * 2, y: 10 * 4 });
    assert!(game.stats.game_active);
}

#[test]
fn active_frame_hides_play_button() {
    let mut game = make_game();
    let (x, y) = game.play_button.rect.center();
    game.handle_event(GameEvent::MouseDown { x, y });
    let buf = draw(&game);
    assert!(!screen_text(&buf).contains("Play"));
}

#[test]
fn scoreboard_text_is_drawn_top_right() {
    let mut game = make_game();
    game.stats.score = 1234;
    game.scoreboard.prep_score(&game.stats);
    let buf = draw(&game);
    assert!(row_text(&buf, 0).trim_end().ends_with("1,230"));
    assert!(row_text(&buf, 1).trim_end().ends_with('1'));
}

#[test]
fn field_uses_braille_cells() {
    let game = make_game();
    let buf = draw(&game);
    let braille = screen_text(&buf)
        .chars()
        .filter(|c| ('\u{2801}'..='\u{28FF}').contains(c))
        .count();
    assert!(braille > 0);
}

#[test]
fn tiny_terminal_renders_without_panicking() {
    let sprite = Sprite::parse(include_str!("../assets/alien.txt")).unwrap();
    let game = AlienInvasion::new(Settings::for_terminal(4, 2), sprite);
    let mut terminal = Terminal::new(TestBackend::new(4, 2)).unwrap();
    terminal.draw(|frame| ui::render(frame, &game)).unwrap();
}
