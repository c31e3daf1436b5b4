//! Command target capabilities.
//!
//! Targets are owned by the surrounding application. The dispatcher only
//! ever sees them through `TargetLookup`, reads their enabled flag and
//! invokes `activate`.

use std::rc::Rc;

use super::CommandId;

/// Something input can activate, such as a panel button.
pub trait CommandTarget {
    /// Whether the target currently accepts activation.
    fn is_enabled(&self) -> bool;

    /// Perform the target's action.
    fn activate(&self);
}

/// Finds the target currently registered for a command.
pub trait TargetLookup {
    /// Returns `None` when no target exists for `id` (e.g. not yet rendered).
    fn find(&self, id: CommandId) -> Option<Rc<dyn CommandTarget>>;
}

impl<T: TargetLookup + ?Sized> TargetLookup for Rc<T> {
    fn find(&self, id: CommandId) -> Option<Rc<dyn CommandTarget>> {
        (**self).find(id)
    }
}

impl<T: TargetLookup + ?Sized> TargetLookup for &T {
    fn find(&self, id: CommandId) -> Option<Rc<dyn CommandTarget>> {
        (**self).find(id)
    }
}
