//! Command identifiers and the target capability they resolve to.
//!
//! This module provides:
//! - The fixed set of jog command identifiers
//! - The `CommandTarget` capability (enabled read, activate invoke)
//! - The `TargetLookup` capability used to find a target by identifier

mod id;
mod target;

pub use id::{Axis, CommandId, ParseCommandError};
pub use target::{CommandTarget, TargetLookup};
