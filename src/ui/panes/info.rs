//! Model information pane
//!
//! Lists the active model's grammar and the size of the last render.

use crate::lsystem::errors::LSystemError;
use crate::lsystem::model::{GrammarModel, RuleSet};
use crate::scene::Scene;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Everything the info pane shows
pub struct InfoRenderData<'a> {
    pub model: &'a GrammarModel,
    pub position: usize,
    pub total: usize,
    pub angle_step: f64,
    pub scene: &'a Result<Scene, LSystemError>,
}

fn label(text: &str) -> Span<'static> {
    Span::styled(
        format!("{:<10}", text),
        Style::default().fg(DEFAULT_THEME.comment),
    )
}

fn field<'a>(name: &str, value: String) -> Line<'a> {
    Line::from(vec![
        label(name),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// One line per rule, sorted by symbol so the order is stable between frames
fn rule_lines<'a>(rules: &'a RuleSet) -> Vec<Line<'a>> {
    let mut sorted: Vec<(&char, &String)> = rules.iter().collect();
    sorted.sort_by_key(|(from, _)| **from);

    sorted
        .into_iter()
        .map(|(from, to)| {
            let to = if to.is_empty() { "ε" } else { to.as_str() };
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    from.to_string(),
                    Style::default()
                        .fg(DEFAULT_THEME.symbol)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(to, Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect()
}

fn heading<'a>(text: &'a str) -> Line<'a> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Render the info pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, data: &InfoRenderData) {
    let block = Block::default()
        .title(" Model ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 1, 0, 0));

    let model = data.model;
    let start = model.initial_position();

    let mut lines = vec![
        field("Model", format!("{}/{}", data.position + 1, data.total)),
        field("Iter", model.iterations().to_string()),
        field(
            "Angle",
            format!("{:.1}° (default {:.1}°)", data.angle_step, model.default_angle_step()),
        ),
        field("Heading", format!("{:.1}°", model.initial_angle())),
        field("Start", format!("({:.3}, {:.3})", start.x, start.y)),
        field("Shrink", format!("÷{}", model.segments())),
        Line::raw(""),
        heading("Axiom"),
        Line::from(Span::styled(
            format!("  {}", model.initial_value()),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::raw(""),
        heading("Rules"),
    ];
    lines.extend(rule_lines(model.mapping()));

    if !model.final_mapping().is_empty() {
        lines.push(Line::raw(""));
        lines.push(heading("Final rules"));
        lines.extend(rule_lines(model.final_mapping()));
    }

    lines.push(Line::raw(""));
    match data.scene {
        Ok(scene) => {
            lines.push(field("Symbols", scene.pattern_len.to_string()));
            lines.push(field("Segments", scene.segments.len().to_string()));
        }
        Err(e) => lines.push(Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(DEFAULT_THEME.error),
        ))),
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
