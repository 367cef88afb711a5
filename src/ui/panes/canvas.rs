//! Fractal canvas pane
//!
//! Draws the scene's segments with braille markers. Scene coordinates have Y
//! pointing down while ratatui's canvas has Y pointing up, so every point is
//! flipped against the viewport height.

use crate::lsystem::errors::LSystemError;
use crate::scene::{Scene, Viewport};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

/// Braille dots per terminal column
pub const DOTS_PER_COLUMN: f64 = 2.0;
/// Braille dots per terminal row
pub const DOTS_PER_ROW: f64 = 4.0;
/// Blank border around the drawing, in dots
pub const CANVAS_MARGIN: f64 = 2.0;

/// Viewport matching the inside of a bordered pane at braille resolution
pub fn viewport_for(area: Rect) -> Viewport {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    Viewport::new(
        f64::from(inner.width) * DOTS_PER_COLUMN,
        f64::from(inner.height) * DOTS_PER_ROW,
        CANVAS_MARGIN,
    )
}

/// Render the canvas pane
pub fn render_canvas_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    scene: &Result<Scene, LSystemError>,
    viewport: &Viewport,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        );

    let scene = match scene {
        Ok(scene) => scene,
        Err(e) => {
            let paragraph = Paragraph::new(format!("Cannot draw this model:\n{}", e))
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(DEFAULT_THEME.error));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let height = viewport.height;
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, viewport.width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for segment in &scene.segments {
                ctx.draw(&CanvasLine {
                    x1: segment.start.x,
                    y1: height - segment.start.y,
                    x2: segment.end.x,
                    y2: height - segment.end.y,
                    color: DEFAULT_THEME.stroke,
                });
            }
        });

    frame.render_widget(canvas, area);
}
