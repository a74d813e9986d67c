//! Terminal UI rendering with ratatui

use crate::game::GameState;
use crate::settings::Settings;
use crate::snapshot::{Snapshot, SnapshotCell};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const EMPTY: &str = " ·";

/// Render the whole game window
pub fn render_game(frame: &mut Frame, snapshot: &Snapshot, settings: &Settings) {
    let area = frame.area();

    // Each cell is two columns wide, plus borders
    let board_width = (snapshot.width as u16) * 2 + 2;
    let board_height = snapshot.height as u16 + 2;
    let board_area = center_rect(area, board_width, board_height);

    render_board(frame, board_area, snapshot, settings);

    match snapshot.state {
        GameState::Idle => render_overlay(frame, board_area, "TETRIS", "Enter to play"),
        GameState::Paused => render_overlay(frame, board_area, "PAUSED", "P to resume"),
        GameState::Over => {
            let score = format!("Score: {}", snapshot.score);
            render_overlay_lines(
                frame,
                board_area,
                "Game Over!",
                &[score.as_str(), "Enter to play again"],
            );
        }
        GameState::Playing => {
            render_score(frame, board_area, snapshot);
            render_controls_hint(frame, board_area);
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Style and glyph for one snapshot cell
fn cell_span(cell: SnapshotCell, settings: &Settings) -> Span<'static> {
    let (block_char, falling_char) = settings.visual.block_chars();
    match cell {
        SnapshotCell::Empty => Span::styled(EMPTY, Style::default().fg(Color::DarkGray)),
        SnapshotCell::Settled(kind) => Span::styled(block_char, Style::default().fg(kind.color())),
        SnapshotCell::Falling(kind) => Span::styled(
            falling_char,
            Style::default()
                .fg(kind.color())
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// Render the game board
fn render_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, settings: &Settings) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = snapshot
        .cells
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&cell| cell_span(cell, settings))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Score in the top-left corner of the board border
fn render_score(frame: &mut Frame, board_area: Rect, snapshot: &Snapshot) {
    let text = format!(" Score: {} ", snapshot.score);
    let area = Rect {
        x: board_area.x + 1,
        y: board_area.y,
        width: (text.chars().count() as u16).min(board_area.width.saturating_sub(2)),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::styled(text, Style::default().fg(Color::White).bold())),
        area,
    );
}

/// Controls hint in the bottom-right corner of the board border
fn render_controls_hint(frame: &mut Frame, board_area: Rect) {
    let text = " ←→ ↓ ↑ ";
    let width = (text.chars().count() as u16).min(board_area.width.saturating_sub(2));
    let area = Rect {
        x: board_area.x + board_area.width.saturating_sub(width + 1),
        y: board_area.y + board_area.height.saturating_sub(1),
        width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::styled(text, Style::default().fg(Color::DarkGray))),
        area,
    );
}

/// Render an overlay (for idle/pause)
fn render_overlay(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    render_overlay_lines(frame, area, title, &[subtitle]);
}

fn render_overlay_lines(frame: &mut Frame, area: Rect, title: &str, body: &[&str]) {
    let popup_width = 22u16;
    let popup_height = 4 + body.len() as u16;
    let popup_area = center_rect(area, popup_width, popup_height);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut text = vec![
        Line::styled(title.to_string(), Style::default().fg(Color::White).bold()),
        Line::raw(""),
    ];
    text.extend(
        body.iter()
            .map(|line| Line::styled(line.to_string(), Style::default().fg(Color::Gray))),
    );

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
