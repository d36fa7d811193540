use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.pokemon.is_empty() && !app.loading_page {
        let block = Block::default().borders(Borders::ALL).title("Pokédex");
        let empty = Paragraph::new("No Pokémon loaded")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .pokemon
        .iter()
        .enumerate()
        .map(|(i, mon)| {
            let style = if i == app.selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let types = mon
                .types
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join("/");

            let sprite_marker = if mon.sprite.is_some() { "▣" } else { " " };

            let line = Line::from(vec![
                Span::styled(format!("{:<16}", mon.name), style),
                Span::raw(" "),
                Span::styled(format!("{:<20}", types), Style::default().fg(Color::Green)),
                Span::raw(" "),
                Span::styled(sprite_marker, Style::default().fg(Color::DarkGray)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let title = if app.end_of_catalog {
        format!("Pokédex ({}, end of catalog)", app.pokemon.len())
    } else {
        format!("Pokédex ({})", app.pokemon.len())
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
