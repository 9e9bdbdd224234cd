//! Movement domain: per-tick locomotion steps.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod jump;
pub(crate) mod movement;

pub use collisions::{CONTACT_PROBE, Contacts, overlaps, probe_contacts, resolve_collisions};
pub use jump::{JumpKind, update_jump_state};
pub use movement::{apply_movement, tick_actor_timers};

pub(crate) use input::sample_input;
