//! The input dispatcher.

use tracing::{debug, trace};

use super::BindingTable;
use crate::commands::{CommandId, TargetLookup};
use crate::events::{InputEvent, InputListener, SuppressDefault};

/// What happened to a dispatched event.
///
/// None of these are errors. Everything other than `Activated` means
/// nothing happened, which is the intended reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The key is not in the binding table.
    UnrecognizedInput,
    /// Focus was on a typing context, so the key was left alone.
    TypingContextSuppressed,
    /// No target is registered for the command.
    TargetNotFound(CommandId),
    /// The target exists but is disabled.
    TargetDisabled(CommandId),
    /// The target was activated.
    Activated(CommandId),
}

impl Outcome {
    /// Whether a target was activated.
    pub fn is_activated(&self) -> bool {
        matches!(self, Outcome::Activated(_))
    }

    /// The resolved command, if the key was bound and not typed.
    pub fn command(&self) -> Option<CommandId> {
        match self {
            Outcome::TargetNotFound(id) | Outcome::TargetDisabled(id) | Outcome::Activated(id) => {
                Some(*id)
            }
            Outcome::UnrecognizedInput | Outcome::TypingContextSuppressed => None,
        }
    }
}

/// Converts input events into at most one command activation each.
///
/// The dispatcher keeps no per-event state; every event is handled
/// independently of the ones before it.
pub struct Dispatcher<L> {
    bindings: BindingTable,
    targets: L,
}

impl<L: TargetLookup> Dispatcher<L> {
    /// Create a dispatcher over `bindings` that finds targets through `targets`.
    pub fn new(bindings: BindingTable, targets: L) -> Self {
        Self { bindings, targets }
    }

    /// The binding table in use.
    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Handle one input event.
    ///
    /// Unbound keys and keys typed into a typing context are ignored and keep
    /// their default behaviour. Any other event has its default suppressed
    /// exactly once, before the target is looked up; a missing or disabled
    /// target then drops the event silently.
    pub fn handle_event(&self, event: &InputEvent, default: &mut dyn SuppressDefault) -> Outcome {
        let Some(command) = self.bindings.get(&event.key) else {
            trace!(key = %event.key, "Ignoring unbound key");
            return Outcome::UnrecognizedInput;
        };

        if event.is_typing() {
            trace!(key = %event.key, "Ignoring key typed into an input");
            return Outcome::TypingContextSuppressed;
        }

        default.suppress();

        let Some(target) = self.targets.find(command) else {
            debug!(key = %event.key, %command, "No target for command");
            return Outcome::TargetNotFound(command);
        };

        if !target.is_enabled() {
            debug!(key = %event.key, %command, "Target is disabled");
            return Outcome::TargetDisabled(command);
        }

        debug!(key = %event.key, %command, "Activating target");
        target.activate();
        Outcome::Activated(command)
    }
}

impl<L: TargetLookup> InputListener for Dispatcher<L> {
    fn on_event(&mut self, event: &InputEvent, default: &mut dyn SuppressDefault) {
        self.handle_event(event, default);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;
    use crate::commands::CommandTarget;
    use crate::events::{ElementKind, EventDefault, FocusTarget};

    struct FakeButton {
        enabled: bool,
        activations: Cell<usize>,
    }

    impl FakeButton {
        fn new(enabled: bool) -> Rc<Self> {
            Rc::new(Self {
                enabled,
                activations: Cell::new(0),
            })
        }
    }

    impl CommandTarget for FakeButton {
        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn activate(&self) {
            self.activations.set(self.activations.get() + 1);
        }
    }

    #[derive(Default)]
    struct FakePage {
        buttons: HashMap<CommandId, Rc<FakeButton>>,
    }

    impl FakePage {
        fn with(mut self, id: CommandId, button: &Rc<FakeButton>) -> Self {
            self.buttons.insert(id, button.clone());
            self
        }
    }

    impl TargetLookup for FakePage {
        fn find(&self, id: CommandId) -> Option<Rc<dyn CommandTarget>> {
            self.buttons
                .get(&id)
                .map(|b| b.clone() as Rc<dyn CommandTarget>)
        }
    }

    fn all_enabled() -> (FakePage, Vec<Rc<FakeButton>>) {
        let mut page = FakePage::default();
        let mut buttons = Vec::new();
        for id in CommandId::ALL {
            let button = FakeButton::new(true);
            page = page.with(id, &button);
            buttons.push(button);
        }
        (page, buttons)
    }

    fn total_activations(buttons: &[Rc<FakeButton>]) -> usize {
        buttons.iter().map(|b| b.activations.get()).sum()
    }

    fn body(key: &str) -> InputEvent {
        InputEvent::new(key, Some(FocusTarget::body()))
    }

    #[test]
    fn test_arrow_up_on_body_activates() {
        let button = FakeButton::new(true);
        let page = FakePage::default().with(CommandId::MovePositiveY, &button);
        let dispatcher = Dispatcher::new(BindingTable::robotray(), page);
        let mut default = EventDefault::new();

        let outcome = dispatcher.handle_event(&body("ArrowUp"), &mut default);

        assert_eq!(outcome, Outcome::Activated(CommandId::MovePositiveY));
        assert_eq!(button.activations.get(), 1);
        assert_eq!(default.times_suppressed(), 1);
    }

    #[test]
    fn test_arrow_up_in_text_input_is_ignored() {
        let button = FakeButton::new(true);
        let page = FakePage::default().with(CommandId::MovePositiveY, &button);
        let dispatcher = Dispatcher::new(BindingTable::robotray(), page);
        let mut default = EventDefault::new();
        let event = InputEvent::new("ArrowUp", Some(FocusTarget::new(ElementKind::TextInput)));

        let outcome = dispatcher.handle_event(&event, &mut default);

        assert_eq!(outcome, Outcome::TypingContextSuppressed);
        assert_eq!(button.activations.get(), 0);
        assert!(!default.is_suppressed());
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let (page, buttons) = all_enabled();
        let dispatcher = Dispatcher::new(BindingTable::robotray(), page);
        let mut default = EventDefault::new();

        let outcome = dispatcher.handle_event(&body("PageDown"), &mut default);

        assert_eq!(outcome, Outcome::UnrecognizedInput);
        assert_eq!(total_activations(&buttons), 0);
        assert!(!default.is_suppressed());
    }

    #[test]
    fn test_disabled_target_still_suppresses() {
        let button = FakeButton::new(false);
        let page = FakePage::default().with(CommandId::MovePositiveZ, &button);
        let dispatcher = Dispatcher::new(BindingTable::robotray(), page);
        let mut default = EventDefault::new();

        let outcome = dispatcher.handle_event(&body("="), &mut default);

        assert_eq!(outcome, Outcome::TargetDisabled(CommandId::MovePositiveZ));
        assert_eq!(button.activations.get(), 0);
        assert_eq!(default.times_suppressed(), 1);
    }

    #[test]
    fn test_missing_target_still_suppresses() {
        let other = FakeButton::new(true);
        let page = FakePage::default().with(CommandId::MovePositiveZ, &other);
        let dispatcher = Dispatcher::new(BindingTable::robotray(), page);
        let mut default = EventDefault::new();

        let outcome = dispatcher.handle_event(&body("-"), &mut default);

        assert_eq!(outcome, Outcome::TargetNotFound(CommandId::MoveNegativeZ));
        assert_eq!(other.activations.get(), 0);
        assert_eq!(default.times_suppressed(), 1);
    }

    #[test]
    fn test_every_bound_key_activates_exactly_one_target() {
        let (page, buttons) = all_enabled();
        let table = BindingTable::robotray();
        let dispatcher = Dispatcher::new(table.clone(), page);

        for (token, command) in table.entries() {
            let before: Vec<usize> = buttons.iter().map(|b| b.activations.get()).collect();
            let mut default = EventDefault::new();

            let outcome = dispatcher.handle_event(&body(token), &mut default);

            assert_eq!(outcome, Outcome::Activated(command));
            assert_eq!(default.times_suppressed(), 1);
            let changed = buttons
                .iter()
                .zip(before)
                .filter(|(b, n)| b.activations.get() != *n)
                .count();
            assert_eq!(changed, 1, "key {} activated {} targets", token, changed);
        }
        assert_eq!(total_activations(&buttons), table.len());
    }

    #[test]
    fn test_every_typing_context_blocks_every_bound_key() {
        let (page, buttons) = all_enabled();
        let table = BindingTable::robotray();
        let dispatcher = Dispatcher::new(table.clone(), page);
        let typing = [
            FocusTarget::new(ElementKind::TextInput),
            FocusTarget::new(ElementKind::TextArea),
            FocusTarget::new(ElementKind::Select),
            FocusTarget::new(ElementKind::Other).editable(),
        ];

        for focus in typing {
            for (token, _) in table.entries() {
                let mut default = EventDefault::new();
                let event = InputEvent::new(token, Some(focus));
                assert_eq!(
                    dispatcher.handle_event(&event, &mut default),
                    Outcome::TypingContextSuppressed
                );
                assert!(!default.is_suppressed());
            }
        }
        assert_eq!(total_activations(&buttons), 0);
    }

    #[test]
    fn test_unbound_key_in_text_input_reports_unrecognized() {
        let (page, _buttons) = all_enabled();
        let dispatcher = Dispatcher::new(BindingTable::robotray(), page);
        let mut default = EventDefault::new();
        let event = InputEvent::new("a", Some(FocusTarget::new(ElementKind::TextInput)));

        assert_eq!(
            dispatcher.handle_event(&event, &mut default),
            Outcome::UnrecognizedInput
        );
    }

    #[test]
    fn test_no_focus_dispatches() {
        let button = FakeButton::new(true);
        let page = FakePage::default().with(CommandId::MoveNegativeX, &button);
        let dispatcher = Dispatcher::new(BindingTable::robotray(), page);
        let mut default = EventDefault::new();

        let outcome = dispatcher.handle_event(&InputEvent::new("ArrowLeft", None), &mut default);

        assert!(outcome.is_activated());
        assert_eq!(button.activations.get(), 1);
    }

    #[test]
    fn test_events_are_independent() {
        let button = FakeButton::new(true);
        let page = FakePage::default().with(CommandId::MovePositiveX, &button);
        let dispatcher = Dispatcher::new(BindingTable::robotray(), page);

        for _ in 0..3 {
            let mut default = EventDefault::new();
            dispatcher.handle_event(&body("ArrowRight"), &mut default);
            assert_eq!(default.times_suppressed(), 1);
        }
        assert_eq!(button.activations.get(), 3);
    }

    #[test]
    fn test_listener_delegates_to_dispatch() {
        let button = FakeButton::new(true);
        let page = FakePage::default().with(CommandId::MoveNegativeY, &button);
        let mut dispatcher = Dispatcher::new(BindingTable::robotray(), page);
        let mut default = EventDefault::new();

        dispatcher.on_event(&body("ArrowDown"), &mut default);

        assert_eq!(button.activations.get(), 1);
        assert!(default.is_suppressed());
    }

    #[test]
    fn test_suppressed_events_always_carry_a_command() {
        let (page, _buttons) = all_enabled();
        let dispatcher = Dispatcher::new(BindingTable::robotray(), page);
        let keys = ["ArrowUp", "=", "-", "PageDown", "a", ""];

        for key in keys {
            let mut default = EventDefault::new();
            let outcome = dispatcher.handle_event(&body(key), &mut default);
            assert_eq!(
                default.is_suppressed(),
                outcome.command().is_some(),
                "key {:?} gave {:?}",
                key,
                outcome
            );
        }
    }

    #[test]
    fn test_outcome_command() {
        assert_eq!(Outcome::UnrecognizedInput.command(), None);
        assert_eq!(Outcome::TypingContextSuppressed.command(), None);
        assert_eq!(
            Outcome::TargetDisabled(CommandId::MovePositiveY).command(),
            Some(CommandId::MovePositiveY)
        );
        assert!(!Outcome::TargetNotFound(CommandId::MovePositiveY).is_activated());
    }
}
