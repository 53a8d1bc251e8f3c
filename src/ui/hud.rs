use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::button::Button;
use crate::game::scoreboard::Scoreboard;

const TEXT_COLOR: Color = Color::Rgb(230, 230, 230);
const RIGHT_MARGIN: u16 = 2;

/// Score top-right, level under it, high score top-center.
pub fn render_scoreboard(frame: &mut Frame, area: Rect, sb: &Scoreboard, bg: Color) {
    let style = Style::default()
        .fg(TEXT_COLOR)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let score_x = right_aligned_x(area, &sb.score_text);
    put_text(frame, area, score_x, area.y, &sb.score_text, style);

    let high_x = centered_x(area, &sb.high_score_text);
    put_text(frame, area, high_x, area.y, &sb.high_score_text, style);

    let level_x = right_aligned_x(area, &sb.level_text);
    put_text(frame, area, level_x, area.y + 1, &sb.level_text, style);
}

pub fn render_button(frame: &mut Frame, area: Rect, button: &Button) {
    let cells = Rect::new(
        (button.rect.x.max(0) / 2) as u16,
        (button.rect.y.max(0) / 4) as u16,
        (button.rect.width / 2) as u16,
        (button.rect.height / 4) as u16,
    )
    .intersection(area);
    if cells.width == 0 || cells.height == 0 {
        return;
    }

    frame.render_widget(Clear, cells);
    frame.render_widget(
        Block::default().style(Style::default().bg(button.color)),
        cells,
    );

    let label_row = Rect::new(cells.x, cells.y + cells.height / 2, cells.width, 1);
    let label = Paragraph::new(Line::from(Span::styled(
        button.label.as_str(),
        Style::default()
            .fg(button.text_color)
            .bg(button.color)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(label, label_row);
}

fn text_width(text: &str) -> u16 {
    text.chars().count() as u16
}

fn right_aligned_x(area: Rect, text: &str) -> u16 {
    area.x + area.width.saturating_sub(text_width(text) + RIGHT_MARGIN)
}

fn centered_x(area: Rect, text: &str) -> u16 {
    area.x + area.width.saturating_sub(text_width(text)) / 2
}

/// Write `text` at (x, y), clipped to `area`, touching only the cells it covers.
fn put_text(frame: &mut Frame, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    let target = Rect::new(x, y, text_width(text), 1).intersection(area);
    if target.width == 0 || target.height == 0 {
        return;
    }
    frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), target);
}
