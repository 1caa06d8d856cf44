// Physics system using rapier3d

pub mod body;
mod collision;
mod world;

pub use body::RigidBodyHandle;
pub use collision::CollisionGroups;
pub use world::{CharacterMovement, PhysicsWorld};

// Re-export commonly used rapier types for convenience
#[allow(unused_imports)]
pub use rapier3d::prelude::{
    nalgebra, ColliderBuilder, Isometry, QueryFilter, Real, RigidBodyType, Vector,
};

// Re-export for internal use and future expansion
#[allow(unused_imports)]
pub use body::{BodyBuilder, ColliderHandle};
