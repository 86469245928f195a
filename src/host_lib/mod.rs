// src/host_lib/mod.rs

pub mod host_types;
pub mod memory_scene;
pub mod replay;
pub mod session;

pub use host_types::{BodyId, CommandInputs, HostError, PatternHost};
pub use memory_scene::{MemoryScene, SceneBody};
pub use replay::replay_placements;
pub use session::{CommandEvent, CommandSession, SessionState};
