// Shared utility modules

pub mod math;
