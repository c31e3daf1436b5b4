//! Jog panel buttons.

use std::cell::Cell;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::{debug, info};

use super::gcode::{jog_gcode, usable_step, JogSettings, MotionSink};
use crate::commands::{CommandId, CommandTarget, TargetLookup};

/// Shared jog parameters and output for every button on a panel.
struct Jogger {
    step_mm: Cell<f64>,
    feed_rate: u32,
    sink: Rc<dyn MotionSink>,
}

impl Jogger {
    fn jog(&self, command: CommandId) {
        for line in jog_gcode(command, self.step_mm.get(), self.feed_rate) {
            self.sink.send(&line);
        }
    }
}

/// A directional button on the jog panel.
pub struct JogButton {
    id: CommandId,
    enabled: Cell<bool>,
    clicks: Cell<u32>,
    jogger: Rc<Jogger>,
}

impl JogButton {
    /// The command this button performs.
    pub fn id(&self) -> CommandId {
        self.id
    }

    /// Enable or disable this button.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    /// How many times the button has been activated.
    pub fn clicks(&self) -> u32 {
        self.clicks.get()
    }
}

impl CommandTarget for JogButton {
    fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn activate(&self) {
        self.jogger.jog(self.id);
        self.clicks.set(self.clicks.get().saturating_add(1));
        info!(
            button = self.id.label(),
            step_mm = self.jogger.step_mm.get(),
            clicks = self.clicks.get(),
            "Button: {}",
            self.id.label()
        );
    }
}

/// The set of jog buttons currently on screen.
///
/// Directional buttons are only enabled while the panel is in edit mode.
/// Buttons can be mounted and unmounted at any time; the keyboard
/// dispatcher only sees what is mounted.
pub struct JogPanel {
    buttons: RefCell<BTreeMap<CommandId, Rc<JogButton>>>,
    jogger: Rc<Jogger>,
    edit_mode: Cell<bool>,
}

impl JogPanel {
    /// Create an empty panel sending jogs to `sink`.
    pub fn new(settings: JogSettings, sink: Rc<dyn MotionSink>) -> Self {
        Self {
            buttons: RefCell::new(BTreeMap::new()),
            jogger: Rc::new(Jogger {
                step_mm: Cell::new(settings.effective_step()),
                feed_rate: settings.feed_rate,
                sink,
            }),
            edit_mode: Cell::new(false),
        }
    }

    /// Mount the button for `id`, replacing any existing one.
    ///
    /// A new button starts enabled only if the panel is in edit mode.
    pub fn mount(&self, id: CommandId) -> Rc<JogButton> {
        let button = Rc::new(JogButton {
            id,
            enabled: Cell::new(self.edit_mode.get()),
            clicks: Cell::new(0),
            jogger: self.jogger.clone(),
        });
        self.buttons.borrow_mut().insert(id, button.clone());
        debug!(button = id.label(), "Mounted button");
        button
    }

    /// Mount all six directional buttons.
    pub fn mount_all(&self) {
        for id in CommandId::ALL {
            self.mount(id);
        }
    }

    /// Remove the button for `id`. Returns whether one was mounted.
    pub fn unmount(&self, id: CommandId) -> bool {
        let removed = self.buttons.borrow_mut().remove(&id).is_some();
        if removed {
            debug!(button = id.label(), "Unmounted button");
        }
        removed
    }

    /// The mounted button for `id`.
    pub fn button(&self, id: CommandId) -> Option<Rc<JogButton>> {
        self.buttons.borrow().get(&id).cloned()
    }

    /// Every mounted button, in command order.
    pub fn buttons(&self) -> Vec<Rc<JogButton>> {
        self.buttons.borrow().values().cloned().collect()
    }

    /// Whether the panel is in edit mode.
    pub fn edit_mode(&self) -> bool {
        self.edit_mode.get()
    }

    /// Enter or leave edit mode, enabling or disabling every mounted button.
    pub fn set_edit_mode(&self, on: bool) {
        self.edit_mode.set(on);
        for button in self.buttons.borrow().values() {
            button.set_enabled(on);
        }
        info!(edit_mode = on, "Edit mode changed");
    }

    /// Current jog distance in millimetres.
    pub fn step_mm(&self) -> f64 {
        self.jogger.step_mm.get()
    }

    /// Change the jog distance. Returns `false` and keeps the current step
    /// if `step_mm` is outside `MIN_STEP_MM..=MAX_STEP_MM`.
    pub fn set_step_mm(&self, step_mm: f64) -> bool {
        match usable_step(step_mm) {
            Some(step) => {
                self.jogger.step_mm.set(step);
                debug!(step_mm = step, "Step size changed");
                true
            }
            None => false,
        }
    }

    /// Jog feed rate in mm/min.
    pub fn feed_rate(&self) -> u32 {
        self.jogger.feed_rate
    }
}

impl TargetLookup for JogPanel {
    fn find(&self, id: CommandId) -> Option<Rc<dyn CommandTarget>> {
        self.button(id).map(|b| b as Rc<dyn CommandTarget>)
    }
}
