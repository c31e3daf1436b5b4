//! Input events, focus targets and default-behaviour suppression.

/// The kind of UI element that holds input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// The document body, i.e. nothing in particular is focused.
    Body,
    /// A push button.
    Button,
    /// A single-line text entry field.
    TextInput,
    /// A multi-line text entry field.
    TextArea,
    /// A selection control (drop-down, list box).
    Select,
    /// Anything else.
    Other,
}

/// The element that had input focus when an event occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTarget {
    /// What kind of element it is.
    pub kind: ElementKind,
    /// Whether the element is explicitly marked editable.
    pub editable: bool,
}

impl FocusTarget {
    /// A focus target of the given kind that is not marked editable.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            editable: false,
        }
    }

    /// The document body.
    pub fn body() -> Self {
        Self::new(ElementKind::Body)
    }

    /// Mark the element as editable.
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Whether keystrokes on this element are the user typing.
    ///
    /// Text entry fields, selection controls and anything marked editable
    /// count as typing contexts.
    pub fn is_typing_context(&self) -> bool {
        self.editable
            || matches!(
                self.kind,
                ElementKind::TextInput | ElementKind::TextArea | ElementKind::Select
            )
    }
}

/// A discrete input event. Lives only for the duration of dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// The raw key token, e.g. `ArrowUp` or `=`.
    pub key: String,
    /// The focused element, if any.
    pub focus: Option<FocusTarget>,
}

impl InputEvent {
    /// Create an event for `key` with the given focus.
    pub fn new(key: impl Into<String>, focus: Option<FocusTarget>) -> Self {
        Self {
            key: key.into(),
            focus,
        }
    }

    /// Whether the focused element is a typing context.
    ///
    /// An event without focus information is never treated as typing.
    pub fn is_typing(&self) -> bool {
        self.focus.is_some_and(|f| f.is_typing_context())
    }
}

/// Capability to suppress an event's default platform behaviour.
pub trait SuppressDefault {
    /// Suppress the default behaviour of the event being dispatched.
    fn suppress(&mut self);
}

/// Per-event record of default-behaviour suppression.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventDefault {
    suppressed: usize,
}

impl EventDefault {
    /// A fresh record with nothing suppressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any listener suppressed the default behaviour.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed > 0
    }

    /// How many times suppression was requested.
    pub fn times_suppressed(&self) -> usize {
        self.suppressed
    }
}

impl SuppressDefault for EventDefault {
    fn suppress(&mut self) {
        self.suppressed += 1;
    }
}
