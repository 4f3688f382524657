//! Terminal demo: two radio groups bound to a small form.
//!
//! Usage: `formkit-demo [coverage-config.json]`
//!
//! Tab/Shift+Tab move between groups, arrows or Space pick an option,
//! Ctrl+S submits and q/Esc quits. Logs go to `formkit-demo.log`.

use std::error::Error;
use std::fs::File;
use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::execute;
use formkit::prelude::*;
use log::{error, info};
use ratatui::DefaultTerminal;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use serde_json::{Value, json};
use simplelog::{Config, LevelFilter, WriteLogger};

fn coverage_config() -> RadioConfig<Value> {
    RadioConfig::with_options(Vec::new())
        .label("Who is covered?")
        .display(DisplayMode::Stacked)
        .help_text("Choose the people this policy applies to")
        .option("Myself only", json!("MyselfOnly"))
        .option("All members on my account", json!("AllMembers"))
        .option("One specific member", json!("SpecificMember"))
}

struct Form {
    coverage_binding: FormBinding<Value>,
    coverage: RadioControl<Value>,
    smoker_binding: FormBinding<bool>,
    smoker: RadioControl<bool>,
    focus: usize,
    status: String,
}

impl Form {
    fn new(config: RadioConfig<Value>) -> Self {
        let coverage_binding = FormBinding::new(None).with_validator(Validators::required());
        let coverage = RadioControl::from_config(config, Some(&coverage_binding));

        let smoker_binding = FormBinding::new(None).with_validator(Validators::required());
        let smoker = RadioControl::yes_no(Some(&smoker_binding));
        smoker.set_label("Do you smoke?");

        coverage_binding
            .value_changes()
            .subscribe(|v: &Option<Value>| info!("Coverage model value: {v:?}"));
        smoker_binding
            .value_changes()
            .subscribe(|v: &Option<bool>| info!("Smoker model value: {v:?}"));

        Self {
            coverage_binding,
            coverage,
            smoker_binding,
            smoker,
            focus: 0,
            status: "Ctrl+S to submit, q to quit".to_string(),
        }
    }

    fn focused(&self) -> &dyn ControlEvents {
        if self.focus == 0 {
            &self.coverage
        } else {
            &self.smoker
        }
    }

    fn areas(&self, area: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(self.coverage.intrinsic_height()),
            Constraint::Length(self.smoker.intrinsic_height()),
            Constraint::Min(1),
        ])
        .spacing(1)
        .areas(area)
    }

    fn draw(&self, frame: &mut ratatui::Frame) {
        let [coverage, smoker, status] = self.areas(frame.area());
        render_radio_group(frame, &self.coverage, coverage, self.focus == 0);
        render_radio_group(frame, &self.smoker, smoker, self.focus == 1);
        frame.render_widget(
            Line::styled(self.status.as_str(), Style::default().fg(Color::Cyan)),
            status,
        );
    }

    fn click(&mut self, area: Rect, x: u16, y: u16) {
        let [coverage, smoker, _] = self.areas(area);
        let position = Position::new(x, y);
        if coverage.contains(position) {
            self.focus = 0;
            self.coverage.on_click(x - coverage.x, y - coverage.y);
        } else if smoker.contains(position) {
            self.focus = 1;
            self.smoker.on_click(x - smoker.x, y - smoker.y);
        }
    }

    fn submit(&mut self) {
        self.coverage_binding.mark_as_touched();
        self.smoker_binding.mark_as_touched();

        let result = Validator::new()
            .field(&self.coverage, "coverage")
            .required()
            .field(&self.smoker, "smoker")
            .required()
            .validate();

        match result.first_error() {
            Some(error) => {
                self.focus = if error.field_name == "coverage" { 0 } else { 1 };
                self.status = result.messages().join(" ");
            }
            None => {
                self.status = format!(
                    "Submitted: coverage={:?} smoker={:?}",
                    self.coverage_binding.value(),
                    self.smoker_binding.value()
                );
                info!("{}", self.status);
            }
        }
    }
}

fn run(terminal: &mut DefaultTerminal, form: &mut Form) -> io::Result<()> {
    loop {
        terminal.draw(|frame| form.draw(frame))?;

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }
                if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    form.submit();
                    continue;
                }
                let Some(combo) = KeyCombo::from_crossterm(key) else {
                    continue;
                };
                form.focused().on_key(&combo);
                if matches!(combo.key, Key::Tab | Key::BackTab) {
                    form.focus = (form.focus + 1) % 2;
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                form.click(area, mouse.column, mouse.row);
            }
            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_file = File::create("formkit-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let config = match std::env::args().nth(1) {
        Some(path) => RadioConfig::<Value>::from_path(&path).inspect_err(|e| error!("{e}"))?,
        None => coverage_config(),
    };
    let mut form = Form::new(config);

    let mut terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture)
        .and_then(|()| run(&mut terminal, &mut form));
    // Restore the terminal whatever happened above
    let cleanup = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    if let Err(e) = result.and(cleanup) {
        eprintln!("Error: {e}");
    }
    Ok(())
}
