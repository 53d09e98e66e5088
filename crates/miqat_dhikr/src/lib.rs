//! Tasbih counting, dhikr presets, and the supplication table.

pub mod counter;
pub mod dua;
pub mod presets;

pub use counter::{TallyStep, TasbihCounter};
pub use dua::{DUAS, Dua, DuaDeck};
pub use presets::{DHIKR_PRESETS, DhikrPreset};
