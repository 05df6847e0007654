use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "BindingTable", into = "BindingTable")]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"ArrowUp"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    key_to_action: HashMap<String, KeyAction>,
}

/// On-disk shape: only the forward map is persisted.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct BindingTable {
    bindings: HashMap<KeyAction, String>,
}

impl Default for BindingTable {
    fn default() -> Self {
        Self {
            bindings: KeybindingOptions::default().bindings,
        }
    }
}

impl From<BindingTable> for KeybindingOptions {
    fn from(table: BindingTable) -> Self {
        Self::with_bindings(table.bindings)
    }
}

impl From<KeybindingOptions> for BindingTable {
    fn from(options: KeybindingOptions) -> Self {
        Self {
            bindings: options.bindings,
        }
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self::with_bindings(HashMap::from([
            (KeyAction::MoveForward, "ArrowUp".into()),
            (KeyAction::MoveBackward, "ArrowDown".into()),
            (KeyAction::MoveLeft, "ArrowLeft".into()),
            (KeyAction::MoveRight, "ArrowRight".into()),
            (KeyAction::ToggleMode, "KeyF".into()),
        ]))
    }
}

impl KeybindingOptions {
    /// Build options from an action → key map.
    #[must_use]
    pub fn with_bindings(bindings: HashMap<KeyAction, String>) -> Self {
        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }

    /// Rebind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
