pub mod common;
pub mod community;
pub mod pathfinding;

pub use common::{GraphView, NodeIndex};
pub use community::{connected_components, ComponentsResult};
pub use pathfinding::{bfs, PathResult};
