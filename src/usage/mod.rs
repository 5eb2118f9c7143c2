pub mod hideout_usage;
pub mod production_usage;
pub mod quest_usage;

pub use hideout_usage::hideout_info;
pub use production_usage::{crafting_material_info, gpu_time, production_info};
pub use quest_usage::quest_info;
