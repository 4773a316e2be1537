use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::App;

const TRACKER_PANEL_WIDTH: u16 = 32;

pub fn render(frame: &mut Frame, app: &App) {
    let [header_area, body_area, timeline_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [script_area, tracker_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(TRACKER_PANEL_WIDTH)])
            .areas(body_area);

    render_header(frame, app, header_area);
    render_script(frame, app, script_area);
    render_tracker(frame, app, tracker_area);
    render_timeline(frame, app, timeline_area);
    render_hints(frame, hint_area);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let status = if app.paused {
        "⏸ PAUSED"
    } else {
        "▶ PLAYING"
    };
    let text = format!(
        " {} | {} | {}ms/event ",
        app.fixture_name, status, app.speed_ms
    );
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_script(frame: &mut Frame, app: &App, area: Rect) {
    let cursor = app.tracker.cursor();
    let mut spans: Vec<Span> = Vec::new();

    for word in app.tracker.script().words() {
        let index = word.index as usize;
        let style = if index < cursor {
            Style::default().fg(Color::White)
        } else if index == cursor {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        if index == cursor {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        spans.push(Span::styled(word.text.clone(), style));
        spans.push(Span::raw(" "));
    }

    let lines = if spans.is_empty() {
        vec![]
    } else {
        vec![Line::from(spans)]
    };

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default())
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_tracker(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " tracker ",
            Style::default().fg(Color::DarkGray),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = app.tracker.cursor();
    let total = app.tracker.script().len();
    let profile = app.tracker.profile();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("cursor ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{cursor}/{total}")),
        ]),
        Line::from(vec![
            Span::styled("look-ahead ", Style::default().fg(Color::DarkGray)),
            Span::raw(profile.look_ahead_words.to_string()),
        ]),
        Line::from(vec![
            Span::styled("backward ", Style::default().fg(Color::DarkGray)),
            Span::raw(if profile.allow_backward_match {
                "on"
            } else {
                "off"
            }),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "last event",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ];

    match app.last_event() {
        Some(event) => {
            let kind = if event.is_final { "final" } else { "interim" };
            lines.push(Line::from(vec![
                Span::styled(format!("{kind} "), Style::default().fg(Color::DarkGray)),
                Span::raw(format!("@{}ms", event.timestamp_ms)),
            ]));
            let width = inner.width.saturating_sub(2) as usize;
            lines.push(Line::from(Span::styled(
                truncate(&event.text, width).to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "none yet",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_timeline(frame: &mut Frame, app: &App, area: Rect) {
    let total = app.total();
    let ratio = if total == 0 {
        0.0
    } else {
        app.position as f64 / total as f64
    };
    let label = format!("{}/{}", app.position, total);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(
            " [Space] pause/resume  [←/→] seek  [↑/↓] speed  [Home/End] jump  [q] quit ",
        )
        .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn truncate(s: &str, max_chars: usize) -> &str {
    if s.chars().count() <= max_chars {
        return s;
    }
    let mut end = 0;
    for (i, _) in s.char_indices().take(max_chars) {
        end = i;
    }
    &s[..end]
}
