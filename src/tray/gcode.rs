//! G-code generation for relative jogs.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::commands::CommandId;

/// Jog distance used when none (or an unusable one) is configured.
pub const DEFAULT_STEP_MM: f64 = 10.0;

/// Smallest jog distance the panel accepts, in millimetres.
pub const MIN_STEP_MM: f64 = 0.1;

/// Largest jog distance the panel accepts, in millimetres.
pub const MAX_STEP_MM: f64 = 50.0;

/// Feed rate for jog moves, in mm/min.
pub const DEFAULT_FEED_RATE: u32 = 3000;

/// Step sizes offered by the panel's step selector.
pub const STEP_PRESETS_MM: [f64; 6] = [0.1, 1.0, 5.0, 10.0, 25.0, 50.0];

/// How far and how fast a single jog moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JogSettings {
    /// Distance per jog in millimetres.
    pub step_mm: f64,
    /// Feed rate in mm/min.
    pub feed_rate: u32,
}

impl JogSettings {
    /// The step to actually use. Steps outside `MIN_STEP_MM..=MAX_STEP_MM`
    /// fall back to the default.
    pub fn effective_step(&self) -> f64 {
        usable_step(self.step_mm).unwrap_or(DEFAULT_STEP_MM)
    }
}

impl Default for JogSettings {
    fn default() -> Self {
        Self {
            step_mm: DEFAULT_STEP_MM,
            feed_rate: DEFAULT_FEED_RATE,
        }
    }
}

/// `step_mm` if it lies within `MIN_STEP_MM..=MAX_STEP_MM`.
pub fn usable_step(step_mm: f64) -> Option<f64> {
    (MIN_STEP_MM..=MAX_STEP_MM).contains(&step_mm).then_some(step_mm)
}

/// Build the G-code for one relative jog.
///
/// Switches to relative positioning, moves, and switches back to absolute.
pub fn jog_gcode(command: CommandId, step_mm: f64, feed_rate: u32) -> [String; 3] {
    let distance = if command.is_positive() {
        step_mm
    } else {
        -step_mm
    };

    [
        "G91".to_string(),
        format!(
            "G0 {}{} F{}",
            command.axis().letter(),
            format_mm(distance),
            feed_rate
        ),
        "G90".to_string(),
    ]
}

/// Millimetre values always carry a fractional part (`10.0`, `2.5`).
fn format_mm(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// The preset after (or before) `current`.
///
/// Stops at either end of `STEP_PRESETS_MM`. A value between presets moves
/// to the nearest preset in the requested direction.
pub fn next_step(current: f64, up: bool) -> f64 {
    let found = if up {
        STEP_PRESETS_MM.iter().copied().find(|p| *p > current)
    } else {
        STEP_PRESETS_MM.iter().rev().copied().find(|p| *p < current)
    };

    found.unwrap_or(if up {
        STEP_PRESETS_MM[STEP_PRESETS_MM.len() - 1]
    } else {
        STEP_PRESETS_MM[0]
    })
}

/// Receives G-code lines for the machine.
pub trait MotionSink {
    /// Send one line of G-code.
    fn send(&self, line: &str);
}

/// An in-memory sink keeping the most recent lines.
pub struct GcodeLog {
    lines: RefCell<VecDeque<String>>,
    capacity: usize,
}

impl GcodeLog {
    /// Default number of lines kept.
    pub const DEFAULT_CAPACITY: usize = 200;

    /// Create a log keeping the default number of lines.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a log keeping at most `capacity` lines (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: RefCell::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Lines kept so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().iter().cloned().collect()
    }

    /// The last `n` lines, oldest first.
    pub fn tail(&self, n: usize) -> Vec<String> {
        let lines = self.lines.borrow();
        let skip = lines.len().saturating_sub(n);
        lines.iter().skip(skip).cloned().collect()
    }

    /// Number of lines kept.
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    /// Whether nothing has been sent yet.
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl Default for GcodeLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionSink for GcodeLog {
    fn send(&self, line: &str) {
        let mut lines = self.lines.borrow_mut();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line.to_string());
    }
}
