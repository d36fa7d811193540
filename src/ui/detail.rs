use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::detail::dex_number;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(detail) = &app.current_detail else {
        return;
    };

    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White);

    let stat = |name: &str, v: u32| {
        Line::from(vec![
            Span::styled(format!("{:<10}", name), label),
            Span::styled(v.to_string(), value),
        ])
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                &detail.name,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(dex_number(detail.national_id), Style::default().fg(Color::Cyan)),
        ]),
        Line::default(),
        stat("Attack", detail.attack),
        stat("Defense", detail.defense),
        stat("HP", detail.hp),
        stat("Sp. Atk", detail.sp_atk),
        stat("Sp. Def", detail.sp_def),
        stat("Speed", detail.speed),
        stat("Weight", detail.weight),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{:<10}", "Moves"), label),
            Span::styled(detail.move_count.to_string(), value),
        ]),
    ];

    if let Some(sprite) = &detail.sprite {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Sprite: ", label),
            Span::styled(sprite.as_str(), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Detail"));

    frame.render_widget(panel, area);
}
