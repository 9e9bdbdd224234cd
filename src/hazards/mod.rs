//! Hazards domain: spikes, fire, saws, trampolines and falling platforms.

mod components;
mod falling_platform;
mod fire;
mod saw;
mod trampoline;


pub use components::{Hazard, HazardEffect, HazardId, HazardKind, apply_hazard_damage};
pub use falling_platform::{FallingPlatform, PlatformPhase};
pub use fire::Fire;
pub use saw::{Saw, SawAxis, SawMotion, path_offset};
pub use trampoline::Trampoline;
