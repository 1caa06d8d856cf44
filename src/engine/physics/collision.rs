use rapier3d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
///
/// Gameplay needs different collision behaviors for the player, the static
/// level, and interactable objects, and the interaction raycast must be able
/// to single out what it is allowed to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// The player character
    Player = 0b0000_0010,

    /// Static level geometry (floors, walls, ceilings)
    Level = 0b0000_0100,

    /// Objects exposing the interaction contract (doors, switches)
    Interactable = 0b0000_1000,

    /// Trigger zones - don't cause physical collision
    Sensor = 0b0001_0000,
}

impl CollisionGroups {
    /// Convert to rapier3d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        // Define what each group can interact with
        let filter = match self {
            // The player collides with the level and interactables
            CollisionGroups::Player => Group::from_bits_truncate(
                CollisionGroups::Level as u32
                    | CollisionGroups::Interactable as u32
                    | CollisionGroups::Sensor as u32,
            ),

            // Level geometry blocks everything
            CollisionGroups::Level => Group::ALL,

            // Interactables block the player and occlude rays
            CollisionGroups::Interactable => Group::ALL,

            // Sensors interact with everything but don't cause physical collision
            CollisionGroups::Sensor => Group::ALL,

            // Default interacts with everything
            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }

    /// Groups for the line-of-sight interaction ray
    ///
    /// The ray hits level geometry and interactables, so a wall in front of
    /// a door occludes its prompt; the player capsule never blocks its own
    /// ray because Player is excluded from the filter.
    pub fn interaction_ray() -> InteractionGroups {
        InteractionGroups::new(
            Group::from_bits_truncate(CollisionGroups::Default as u32),
            Group::from_bits_truncate(
                CollisionGroups::Level as u32 | CollisionGroups::Interactable as u32,
            ),
        )
    }
}
