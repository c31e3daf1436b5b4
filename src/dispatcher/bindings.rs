//! Binding table from raw key tokens to commands.

use std::collections::HashMap;

use thiserror::Error;

use crate::commands::CommandId;

/// Errors raised while building a binding table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// A binding had an empty key token.
    #[error("key token cannot be empty")]
    EmptyToken,

    /// The same key token was bound twice.
    #[error("key '{0}' is bound more than once")]
    DuplicateToken(String),
}

/// Immutable mapping from raw key token to command.
///
/// Every token resolves to exactly one command. Several tokens may share a
/// command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingTable {
    bindings: HashMap<String, CommandId>,
}

impl BindingTable {
    /// Build a table from `(token, command)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `BindingError::EmptyToken` for an empty token and
    /// `BindingError::DuplicateToken` when a token appears twice.
    pub fn new<I, K>(pairs: I) -> Result<Self, BindingError>
    where
        I: IntoIterator<Item = (K, CommandId)>,
        K: Into<String>,
    {
        let mut bindings = HashMap::new();
        for (token, command) in pairs {
            let token = token.into();
            if token.is_empty() {
                return Err(BindingError::EmptyToken);
            }
            if bindings.contains_key(&token) {
                return Err(BindingError::DuplicateToken(token));
            }
            bindings.insert(token, command);
        }
        Ok(Self { bindings })
    }

    /// The Robotray jog panel bindings: arrows move X/Y, `-`/`=` move Z.
    pub fn robotray() -> Self {
        let bindings = [
            ("ArrowUp", CommandId::MovePositiveY),
            ("ArrowDown", CommandId::MoveNegativeY),
            ("ArrowLeft", CommandId::MoveNegativeX),
            ("ArrowRight", CommandId::MovePositiveX),
            ("-", CommandId::MoveNegativeZ),
            ("=", CommandId::MovePositiveZ),
        ]
        .into_iter()
        .map(|(token, id)| (token.to_string(), id))
        .collect();

        Self { bindings }
    }

    /// Whether `token` is bound.
    pub fn contains(&self, token: &str) -> bool {
        self.bindings.contains_key(token)
    }

    /// The command bound to `token`.
    pub fn get(&self, token: &str) -> Option<CommandId> {
        self.bindings.get(token).copied()
    }

    /// Tokens bound to `command`, sorted.
    pub fn tokens_for(&self, command: CommandId) -> Vec<&str> {
        let mut tokens: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, id)| **id == command)
            .map(|(token, _)| token.as_str())
            .collect();
        tokens.sort_unstable();
        tokens
    }

    /// All bindings, ordered by command then token.
    pub fn entries(&self) -> Vec<(&str, CommandId)> {
        let mut entries: Vec<(&str, CommandId)> = self
            .bindings
            .iter()
            .map(|(token, id)| (token.as_str(), *id))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Number of bound tokens.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::robotray()
    }
}
