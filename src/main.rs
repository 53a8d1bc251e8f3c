use std::io::{self, Stdout};

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use log::{error, info};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use alien_invasion::app::App;
use alien_invasion::event::{Event, EventHandler};
use alien_invasion::game::settings::Settings;
use alien_invasion::game::AlienInvasion;
use alien_invasion::sprite::{Sprite, ALIEN_ASSET};
use alien_invasion::ui;

const LOG_FILE: &str = "alien-invasion.log";
const TICK_RATE_MS: u64 = 16; // ~60 FPS

fn main() -> io::Result<()> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;
    info!("Starting Alien Invasion");

    // Fail before touching the terminal so the message stays readable.
    let alien_sprite = Sprite::load(&Sprite::asset_path(ALIEN_ASSET)).map_err(|e| {
        error!("Failed to load alien sprite: {}", e);
        e
    })?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Key releases need the keyboard-enhancement protocol (kitty, Ghostty,
    // foot, ...). Without it the input layer times out held keys instead.
    let reports_release = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    info!("Key release reporting: {}", reports_release);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, alien_sprite, reports_release);
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    // Always restore the terminal
    if reports_release {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();
    info!("Terminal restored, exiting");

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    alien_sprite: Sprite,
    reports_release: bool,
) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let settings = Settings::for_terminal(cols, rows);
    let mut app = App::new(AlienInvasion::new(settings, alien_sprite), reports_release);
    let event_handler = EventHandler::new(TICK_RATE_MS);

    // The pointer is "visible" while the game listens for Play clicks.
    let mut mouse_captured = true;

    loop {
        terminal.draw(|frame| ui::render(frame, &app.game))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
            Event::Resize(cols, rows) => app.on_resize(cols, rows),
        }

        if app.should_quit {
            break;
        }

        let pointer_visible = app.game.pointer_visible();
        if pointer_visible != mouse_captured {
            if pointer_visible {
                execute!(terminal.backend_mut(), EnableMouseCapture)?;
            } else {
                execute!(terminal.backend_mut(), DisableMouseCapture)?;
            }
            mouse_captured = pointer_visible;
        }
    }

    Ok(())
}
