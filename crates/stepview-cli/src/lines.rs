//! Terminal rendering of the engine's view description.
//!
//! Stagger and fade timings are cosmetic and a terminal redraw has no tweening,
//! so only the highlight treatment changes how a block is drawn.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use stepview_engine::{SequenceView, StepBlock};

const ACCENT: Color = Color::Rgb(151, 71, 255);

pub fn view_lines(view: &SequenceView) -> Vec<Line<'static>> {
    match view {
        SequenceView::Placeholder { message, .. } => vec![
            Line::from(Span::styled(
                message.clone(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
            .centered(),
        ],
        SequenceView::Steps { blocks } => {
            let mut lines = Vec::new();
            for (i, block) in blocks.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::default());
                }
                lines.extend(block_lines(block));
            }
            lines
        }
    }
}

fn block_lines(block: &StepBlock) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    if block.is_highlighted() {
        lines.push(Line::from(vec![
            Span::styled(block.title.clone(), title_style),
            Span::styled(
                "  ● new",
                Style::default().fg(Color::Black).bg(ACCENT),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(block.title.clone(), title_style)));
    }

    let body_style = if block.is_highlighted() {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    for (i, paragraph) in block.paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        // Single newlines inside a paragraph are kept as line breaks
        for text in paragraph.text.split('\n') {
            lines.push(Line::from(Span::styled(text.to_string(), body_style)));
        }
    }

    lines
}
