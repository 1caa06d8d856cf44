// Input configuration and remapping system

use super::action::{Action, InputSource};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while resolving input configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputConfigError {
    /// The requested binding profile does not exist
    #[error("unknown binding profile '{0}'")]
    UnknownProfile(String),

    /// An action the game relies on has no binding in the profile
    #[error("action {0:?} has no binding in profile '{1}'")]
    UnboundAction(Action, String),
}

/// Name of the standard first-person binding profile
pub const PLAYER_PROFILE: &str = "player";

/// Actions that must be bound for the game to be playable
const REQUIRED_ACTIONS: &[Action] = &[
    Action::MoveForward,
    Action::MoveBackward,
    Action::MoveLeft,
    Action::MoveRight,
    Action::Jump,
    Action::Interact,
];

/// Input configuration for the player
/// Maps input sources (keys/buttons) to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Profile name this config was resolved from
    profile: String,

    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Reverse mapping for quick lookups (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new(profile: &str) -> Self {
        Self {
            profile: profile.to_string(),
            bindings: HashMap::new(),
            action_to_sources: HashMap::new(),
        }
    }

    /// Resolve a named binding profile
    ///
    /// Fails when the profile name is unknown or the profile is missing a
    /// binding for an action the game cannot run without. This is checked
    /// once at startup so a broken profile surfaces immediately instead of
    /// as a dead key mid-game.
    pub fn from_profile(profile: &str) -> Result<Self, InputConfigError> {
        let bindings = match profile {
            PLAYER_PROFILE => super::action::default_player_bindings(),
            _ => return Err(InputConfigError::UnknownProfile(profile.to_string())),
        };

        let mut config = Self::new(profile);
        for (source, action) in bindings {
            config.bind(source, action);
        }
        for (source, action) in super::action::global_bindings() {
            config.bind(source, action);
        }

        for action in REQUIRED_ACTIONS {
            if !config.has_binding(*action) {
                return Err(InputConfigError::UnboundAction(
                    *action,
                    profile.to_string(),
                ));
            }
        }

        Ok(config)
    }

    /// Get the profile name
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Bind an input source to an action
    pub fn bind(&mut self, source: InputSource, action: Action) {
        // Remove any existing binding for this source
        self.unbind_source(source);

        self.bindings.insert(source, action);

        self.action_to_sources
            .entry(action)
            .or_insert_with(Vec::new)
            .push(source);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(sources) = self.action_to_sources.remove(&action) {
            for source in sources {
                self.bindings.remove(&source);
            }
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.action_to_sources
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if an input source is bound to any action
    pub fn is_bound(&self, source: InputSource) -> bool {
        self.bindings.contains_key(&source)
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_sources.contains_key(&action)
    }

    /// Get all bindings as a list
    pub fn get_all_bindings(&self) -> Vec<(InputSource, Action)> {
        self.bindings.iter().map(|(s, a)| (*s, *a)).collect()
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_sources.clear();
    }
}
