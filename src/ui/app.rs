//! Main TUI application state and logic

use crate::bounded::{BoundMode, BoundedValue};
use crate::catalog::Catalog;
use crate::lsystem::errors::LSystemError;
use crate::lsystem::model::GrammarModel;
use crate::scene::{Scene, Viewport};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

/// Smallest user-selectable angle step, in degrees
pub const ANGLE_STEP_MIN: f64 = 5.0;
/// Largest user-selectable angle step, in degrees
pub const ANGLE_STEP_MAX: f64 = 120.0;
/// Angle change per Up/Down press
pub const ANGLE_INCREMENT: f64 = 0.5;
/// Multiplier applied to [`ANGLE_INCREMENT`] while Ctrl is held
pub const FAST_MULTIPLIER: f64 = 10.0;

/// Inputs that determine a scene; a new scene is rendered when any changes
#[derive(Debug, Clone, Copy, PartialEq)]
struct SceneKey {
    model_index: usize,
    angle_step: f64,
    viewport: Viewport,
}

/// The main application state
pub struct App {
    catalog: Catalog,

    /// Index of the active model
    model_index: BoundedValue<i64>,

    /// Current turn angle, reset to the model default on every switch
    angle_step: BoundedValue<f64>,

    /// Inputs the current scene was rendered for
    scene_key: Option<SceneKey>,

    /// Last rendered scene
    scene: Result<Scene, LSystemError>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create an app showing `start_index` of `catalog`
    ///
    /// With `wrap` set, stepping past either end of the catalog continues
    /// from the other end; otherwise selection stops at the first and last
    /// model.
    pub fn new(catalog: Catalog, start_index: usize, wrap: bool) -> Self {
        let len = catalog.len() as i64;
        let start = start_index as i64;
        let model_index = if wrap {
            BoundedValue::wrapping(0, len, start)
        } else {
            BoundedValue::clamped(0, len - 1, start)
        };

        let mut app = App {
            catalog,
            model_index,
            angle_step: BoundedValue::clamped(ANGLE_STEP_MIN, ANGLE_STEP_MAX, ANGLE_STEP_MIN),
            scene_key: None,
            scene: Ok(Scene::default()),
            should_quit: false,
            status_message: String::from("Ready!"),
        };
        app.reset_angle_step();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Position of the active model in the catalog
    pub fn model_index(&self) -> usize {
        usize::try_from(self.model_index.get()).unwrap_or(0)
    }

    pub fn current_model(&self) -> &GrammarModel {
        self.catalog.model(self.model_index())
    }

    pub fn angle_step(&self) -> f64 {
        self.angle_step.get()
    }

    /// Scene for the active model in `viewport`, re-rendered only when the
    /// model, angle step, or viewport changed since the last call
    pub fn scene(&mut self, viewport: Viewport) -> &Result<Scene, LSystemError> {
        let key = SceneKey {
            model_index: self.model_index(),
            angle_step: self.angle_step(),
            viewport,
        };

        if self.scene_key != Some(key) {
            let model = self.current_model();
            let result = Scene::render(model, key.angle_step, &viewport);
            if let Err(e) = &result {
                warn!(model = model.name(), error = %e, "render failed");
                self.status_message = e.to_string();
            }
            self.scene = result;
            self.scene_key = Some(key);
        }

        &self.scene
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Canvas + info side by side, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
            .split(main_chunks[0]);

        let viewport = super::panes::viewport_for(columns[0]);
        let angle_step = self.angle_step();
        let position = self.model_index();
        let total = self.catalog.len();
        let wraps = self.model_index.mode() == BoundMode::Wrap;

        // Render first so a failure can update the status message
        self.scene(viewport);

        let scene = &self.scene;
        let model = self.catalog.model(position);

        super::panes::render_canvas_pane(frame, columns[0], model.name(), scene, &viewport);

        super::panes::render_info_pane(
            frame,
            columns[1],
            &super::panes::InfoRenderData {
                model,
                position,
                total,
                angle_step,
                scene,
            },
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                angle_step,
                position,
                total,
                has_error: scene.is_err(),
                wraps,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let fast = key.modifiers.contains(KeyModifiers::CONTROL);
        let increment = if fast {
            ANGLE_INCREMENT * FAST_MULTIPLIER
        } else {
            ANGLE_INCREMENT
        };

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.shift_model(-1),
            KeyCode::Right => self.shift_model(1),
            KeyCode::Up => self.adjust_angle_step(increment),
            KeyCode::Down => self.adjust_angle_step(-increment),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let before = self.angle_step();
                self.reset_angle_step();
                self.report_angle(before, "Angle reset to");
            }
            _ => {}
        }
    }

    /// Move the selection by `delta` models and activate the result
    pub fn shift_model(&mut self, delta: i64) {
        let before = self.model_index();
        self.model_index.shift(delta);
        if self.model_index() == before && self.model_index.mode() != BoundMode::Wrap {
            self.status_message = if delta < 0 {
                "Already at the first model".to_string()
            } else {
                "Already at the last model".to_string()
            };
            return;
        }
        self.activate_model();
    }

    /// Jump straight to the model at `index`
    pub fn select_model(&mut self, index: usize) {
        self.model_index.set(index as i64);
        self.activate_model();
    }

    /// Change the angle step, staying within the allowed range
    pub fn adjust_angle_step(&mut self, delta: f64) {
        let before = self.angle_step();
        self.angle_step.shift(delta);
        self.report_angle(before, "Angle");
    }

    /// Return to the active model's default angle step
    pub fn reset_angle_step(&mut self) {
        let default = self.current_model().default_angle_step();
        self.angle_step.set(default);
    }

    // An unchanged angle does not re-render, so a render error stays on
    // the status bar next to the ERROR badge.
    fn report_angle(&mut self, before: f64, label: &str) {
        if self.scene.is_err() && self.angle_step() == before {
            return;
        }
        self.status_message = format!("{} {:.1}°", label, self.angle_step());
    }

    // Switching models discards any user-adjusted angle step.
    fn activate_model(&mut self) {
        self.reset_angle_step();
        let model = self.current_model();
        info!(
            model = model.name(),
            index = self.model_index(),
            angle_step = self.angle_step(),
            "switched model"
        );
        self.status_message = format!("Model: {}", model.name());
    }
}
