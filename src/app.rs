//! Application state for the terminal jog panel.
//!
//! Every key press is turned into an `InputEvent` and delivered to the
//! installed listeners first. Only keys whose default behaviour was not
//! suppressed fall through to the panel's own key handling.

use std::collections::BTreeMap;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::commands::{CommandId, TargetLookup};
use crate::config::{self, Settings};
use crate::dispatcher::{self, BindingTable, Dispatcher, InstallGuard};
use crate::events::{
    key_token, ElementKind, Event, EventDefault, FocusTarget, InputEvent, InputListener,
    ListenerSet,
};
use crate::tray::{next_step, GcodeLog, JogPanel};

/// Which part of the screen has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The jog panel itself.
    #[default]
    Panel,
    /// The notes text field.
    Notes,
}

impl Focus {
    /// The focus target reported with input events.
    pub fn target(&self) -> FocusTarget {
        match self {
            Focus::Panel => FocusTarget::body(),
            Focus::Notes => FocusTarget::new(ElementKind::TextInput),
        }
    }
}

/// The main application struct that holds all state.
pub struct App {
    listeners: ListenerSet,
    panel: Rc<JogPanel>,
    log: Rc<GcodeLog>,
    bindings: BindingTable,
    focus: Focus,
    notes: String,
    status: String,
    should_quit: bool,
}

impl App {
    /// Create the application, installing the key dispatcher once per process.
    pub fn new(settings: &Settings) -> config::Result<Self> {
        Self::build(settings, |source, d| dispatcher::install(source, d))
    }

    /// Create the application, installing the key dispatcher through `guard`.
    pub fn with_guard(settings: &Settings, guard: &InstallGuard) -> config::Result<Self> {
        Self::build(settings, |source, d| {
            guard.install(source, move || Box::new(d) as Box<dyn InputListener>);
        })
    }

    fn build<F>(settings: &Settings, install: F) -> config::Result<Self>
    where
        F: FnOnce(&mut ListenerSet, Dispatcher<Rc<JogPanel>>),
    {
        let bindings = settings.binding_table()?;
        let log = Rc::new(GcodeLog::new());
        let panel = Rc::new(JogPanel::new(settings.jog_settings(), log.clone()));
        panel.mount_all();
        panel.set_edit_mode(settings.start_in_edit_mode);

        let mut listeners = ListenerSet::new();
        install(
            &mut listeners,
            Dispatcher::new(bindings.clone(), panel.clone()),
        );

        Ok(Self {
            listeners,
            panel,
            log,
            bindings,
            focus: Focus::Panel,
            notes: String::new(),
            status: "Ready".to_string(),
            should_quit: false,
        })
    }

    /// Handle an event from the terminal.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            Event::Tick => {}
        }
    }

    /// Handle one key press.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let Some(token) = key_token(&key) else {
            return;
        };

        let event = InputEvent::new(token, Some(self.focus.target()));
        let clicks_before = self.clicks();
        let mut default = EventDefault::new();
        self.listeners.emit(&event, &mut default);

        if default.is_suppressed() {
            self.report_jog(&event.key, &clicks_before);
        } else {
            self.apply_default(key);
        }
    }

    fn clicks(&self) -> BTreeMap<CommandId, u32> {
        self.panel
            .buttons()
            .iter()
            .map(|b| (b.id(), b.clicks()))
            .collect()
    }

    fn report_jog(&mut self, token: &str, before: &BTreeMap<CommandId, u32>) {
        let moved = self
            .panel
            .buttons()
            .into_iter()
            .find(|b| before.get(&b.id()).copied().unwrap_or(0) != b.clicks());

        self.status = match (moved, self.bindings.get(token)) {
            (Some(button), _) => format!(
                "Moved {} {} mm",
                button.id().label(),
                self.panel.step_mm()
            ),
            (None, Some(id)) if self.panel.button(id).is_none() => {
                format!("Jog ignored: no {} button on the panel", id.label())
            }
            (None, _) => "Jog ignored: press [e] to enter edit mode".to_string(),
        };
    }

    fn apply_default(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Panel => match key.code {
                KeyCode::Tab | KeyCode::BackTab => self.focus = Focus::Notes,
                KeyCode::Char('e') => self.toggle_edit_mode(),
                KeyCode::Char('[') => self.change_step(false),
                KeyCode::Char(']') => self.change_step(true),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Focus::Notes => match key.code {
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => self.focus = Focus::Panel,
                KeyCode::Backspace => {
                    self.notes.pop();
                }
                KeyCode::Enter => self.submit_note(),
                KeyCode::Char(c) => self.notes.push(c),
                _ => {}
            },
        }
    }

    fn toggle_edit_mode(&mut self) {
        let on = !self.panel.edit_mode();
        self.panel.set_edit_mode(on);
        self.status = if on {
            "Edit mode active: use the arrow keys and -/= to jog".to_string()
        } else {
            "Edit mode off: jog buttons disabled".to_string()
        };
    }

    fn change_step(&mut self, up: bool) {
        let step = next_step(self.panel.step_mm(), up);
        self.panel.set_step_mm(step);
        self.status = format!("Step: {} mm", step);
    }

    fn submit_note(&mut self) {
        if self.notes.trim().is_empty() {
            return;
        }
        info!(note = %self.notes, "Operator note");
        self.status = "Note logged".to_string();
        self.notes.clear();
    }

    /// Whether the application should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The jog panel.
    pub fn panel(&self) -> &JogPanel {
        &self.panel
    }

    /// Whether a button is mounted for `id`.
    pub fn has_button(&self, id: CommandId) -> bool {
        self.panel.find(id).is_some()
    }

    /// G-code sent so far.
    pub fn gcode(&self) -> &GcodeLog {
        &self.log
    }

    /// The active binding table.
    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Current focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Text typed into the notes field.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// The status line.
    pub fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(edit_mode: bool) -> App {
        let settings = Settings {
            start_in_edit_mode: edit_mode,
            ..Settings::default()
        };
        App::with_guard(&settings, &InstallGuard::new()).unwrap()
    }

    #[test]
    fn test_new_app() {
        let app = app(false);
        assert_eq!(app.focus(), Focus::Panel);
        assert!(!app.should_quit());
        assert!(app.gcode().is_empty());
        for id in CommandId::ALL {
            assert!(app.has_button(id));
        }
    }

    #[test]
    fn test_arrow_jogs_in_edit_mode() {
        let mut app = app(true);

        app.on_key(key(KeyCode::Up));

        assert_eq!(app.gcode().lines(), vec!["G91", "G0 Y10.0 F3000", "G90"]);
        assert_eq!(app.status(), "Moved Y+ 10 mm");
    }

    #[test]
    fn test_arrow_ignored_outside_edit_mode() {
        let mut app = app(false);

        app.on_key(key(KeyCode::Char('=')));

        assert!(app.gcode().is_empty());
        assert!(app.status().contains("edit mode"));
    }

    #[test]
    fn test_edit_mode_toggle() {
        let mut app = app(false);

        app.on_key(key(KeyCode::Char('e')));
        assert!(app.panel().edit_mode());

        app.on_key(key(KeyCode::Char('-')));
        assert_eq!(app.gcode().tail(2)[0], "G0 Z-10.0 F3000");
    }

    #[test]
    fn test_typing_into_notes_does_not_jog() {
        let mut app = app(true);

        app.on_key(key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Notes);

        app.on_key(key(KeyCode::Char('=')));
        app.on_key(key(KeyCode::Char('-')));
        app.on_key(key(KeyCode::Char('e')));

        assert!(app.gcode().is_empty());
        assert_eq!(app.notes(), "=-e");
        assert!(app.panel().edit_mode());
    }

    #[test]
    fn test_notes_editing() {
        let mut app = app(false);
        app.on_key(key(KeyCode::Tab));

        app.on_key(key(KeyCode::Char('o')));
        app.on_key(key(KeyCode::Char('k')));
        app.on_key(key(KeyCode::Backspace));
        assert_eq!(app.notes(), "o");

        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.notes(), "");
        assert_eq!(app.status(), "Note logged");

        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.focus(), Focus::Panel);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_step_keys() {
        let mut app = app(true);

        app.on_key(key(KeyCode::Char(']')));
        assert_eq!(app.panel().step_mm(), 25.0);

        app.on_key(key(KeyCode::Char('[')));
        app.on_key(key(KeyCode::Char('[')));
        assert_eq!(app.panel().step_mm(), 5.0);

        app.on_key(key(KeyCode::Right));
        assert_eq!(app.gcode().tail(2)[0], "G0 X5.0 F3000");
    }

    #[test]
    fn test_quit_key() {
        let mut app = app(false);
        app.on_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_from_notes() {
        let mut app = app(false);
        app.on_key(key(KeyCode::Tab));
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_unmounted_button_is_dropped() {
        let mut app = app(true);
        app.panel().unmount(CommandId::MoveNegativeZ);

        app.on_key(key(KeyCode::Char('-')));

        assert!(app.gcode().is_empty());
        assert!(!app.should_quit());
        assert_eq!(app.status(), "Jog ignored: no Z- button on the panel");
    }

    #[test]
    fn test_disabled_button_status_mentions_edit_mode() {
        let mut app = app(false);

        app.on_key(key(KeyCode::Char('-')));

        assert_eq!(app.status(), "Jog ignored: press [e] to enter edit mode");
    }

    #[test]
    fn test_custom_bindings() {
        let mut bindings = BTreeMap::new();
        bindings.insert("w".to_string(), CommandId::MovePositiveY);
        let settings = Settings {
            start_in_edit_mode: true,
            bindings: Some(bindings),
            ..Settings::default()
        };
        let mut app = App::with_guard(&settings, &InstallGuard::new()).unwrap();

        app.on_key(key(KeyCode::Up));
        assert!(app.gcode().is_empty());

        app.on_key(key(KeyCode::Char('w')));
        assert_eq!(app.gcode().tail(2)[0], "G0 Y10.0 F3000");
    }

    #[test]
    fn test_resize_and_tick_are_harmless() {
        let mut app = app(true);
        app.handle_event(Event::Resize(80, 24));
        app.handle_event(Event::Tick);
        assert!(app.gcode().is_empty());
        assert!(!app.should_quit());
    }
}
