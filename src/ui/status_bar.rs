// Status bar rendering
//
// Bottom bar with keyboard shortcuts and live field indicators.

use crate::app::config::DEFAULT_FRAME_MS;
use crate::app::AppState;
use crate::theme::{palette, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let colors = palette(app.theme);
    let accent = colors.dot_color();
    let dim = colors.line_color(0.6);

    // Calculate available width for hints (subtract borders and padding)
    let available_width = area.width.saturating_sub(4);

    // Define all hints with priority levels; lower priority hints drop
    // first on narrow terminals
    struct Hint {
        priority: u8,
        key: &'static str,
        desc: &'static str,
    }

    let theme_hint = match app.theme {
        Theme::Dark => "Light | ",
        Theme::Light => "Dark | ",
    };

    let hints = [
        Hint {
            priority: 1,
            key: "Q:",
            desc: "Quit | ",
        },
        Hint {
            priority: 1,
            key: "T:",
            desc: theme_hint,
        },
        Hint {
            priority: 2,
            key: "Space:",
            desc: "Scatter | ",
        },
        Hint {
            priority: 2,
            key: "R:",
            desc: "Respawn | ",
        },
        Hint {
            priority: 3,
            key: "+/-:",
            desc: "Speed ",
        },
    ];

    // Build status text, adding hints until we run out of space
    let mut spans = vec![Span::styled(" ✦ ", Style::default().fg(accent))];
    let mut current_length = 3;

    for priority in 1..=3 {
        for hint in hints.iter().filter(|h| h.priority == priority) {
            let hint_length = hint.key.len() + hint.desc.len();
            if current_length + hint_length <= available_width as usize {
                spans.push(Span::styled(
                    hint.key,
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(hint.desc, Style::default().fg(dim)));
                current_length += hint_length;
            }
        }
    }

    spans.push(Span::raw(" "));
    spans.extend(build_indicators(app, accent, dim));

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent)),
        )
        .style(Style::default().bg(colors.background_color()))
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}

/// Build live indicator spans: particle count, link count (or OFF when the
/// link pass has been auto-disabled), and frame interval when it differs
/// from the default
fn build_indicators(app: &AppState, accent: Color, dim: Color) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    spans.push(Span::styled("[dots:", Style::default().fg(dim)));
    spans.push(Span::styled(
        format!("{}", app.field.len()),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("] ", Style::default().fg(dim)));

    spans.push(Span::styled("[links:", Style::default().fg(dim)));
    if app.links_reduced {
        spans.push(Span::styled(
            "OFF",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            format!("{}", app.link_count),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled("]", Style::default().fg(dim)));

    if app.frame_config.frame_ms != DEFAULT_FRAME_MS {
        spans.push(Span::styled(" [", Style::default().fg(dim)));
        spans.push(Span::styled(
            format!("{}ms", app.frame_config.frame_ms),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("]", Style::default().fg(dim)));
    }

    spans
}
