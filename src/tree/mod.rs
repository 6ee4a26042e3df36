//! Hierarchical view of a flat list of relative file paths.

mod builder;
mod node;

pub use builder::{build, build_with_root_label, path_segments, ROOT_LABEL};
pub use node::{NodeKind, TreeNode};
