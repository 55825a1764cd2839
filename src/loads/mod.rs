//! Load types, load cases and load combinations

mod distributed;
mod load_case;
mod load_combo;
mod node_load;
mod point_load;

pub use distributed::BarDistributedLoad;
pub use load_case::{LoadCase, LoadRecord};
pub use load_combo::LoadCombination;
pub use node_load::NodeLoad;
pub use point_load::{BarPointLoad, CoordinateSystem, LoadComponent};
