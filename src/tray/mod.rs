//! The Robotray jog panel.
//!
//! Panel buttons are the command targets the keyboard dispatcher activates.
//! Activating a button emits a relative G-code jog to a motion sink.

mod gcode;
mod panel;

pub use gcode::{
    jog_gcode, next_step, usable_step, GcodeLog, JogSettings, MotionSink, DEFAULT_FEED_RATE,
    DEFAULT_STEP_MM, MAX_STEP_MM, MIN_STEP_MM, STEP_PRESETS_MM,
};
pub use panel::{JogButton, JogPanel};
