// The interaction contract

/// Identifies a registered interactable within the scene
pub type InteractableId = u32;

/// Anything the player can aim at and activate
///
/// Implementors report whether they are currently usable, what the crosshair
/// prompt should say, and perform the activation itself.
pub trait Interactable {
    /// Whether an interaction request would succeed right now
    fn can_interact(&self) -> bool;

    /// Text shown in the prompt while this object is targeted
    fn interaction_prompt(&self) -> &str;

    /// Perform the interaction; returns true if it was carried out
    fn interact(&mut self) -> bool;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Minimal interactable for exercising the detection state machine
    pub struct TestSwitch {
        pub prompt: String,
        pub enabled: bool,
        pub activations: u32,
    }

    impl TestSwitch {
        pub fn new(prompt: &str) -> Self {
            Self {
                prompt: prompt.to_string(),
                enabled: true,
                activations: 0,
            }
        }
    }

    impl Interactable for TestSwitch {
        fn can_interact(&self) -> bool {
            self.enabled
        }

        fn interaction_prompt(&self) -> &str {
            &self.prompt
        }

        fn interact(&mut self) -> bool {
            if !self.enabled {
                return false;
            }
            self.activations += 1;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::TestSwitch;
    use super::*;

    #[test]
    fn test_switch_activates() {
        let mut switch = TestSwitch::new("(F) to Flip");
        assert!(switch.can_interact());
        assert!(switch.interact());
        assert_eq!(switch.activations, 1);
    }

    #[test]
    fn test_disabled_switch_refuses() {
        let mut switch = TestSwitch::new("(F) to Flip");
        switch.enabled = false;
        assert!(!switch.can_interact());
        assert!(!switch.interact());
        assert_eq!(switch.activations, 0);
    }
}
