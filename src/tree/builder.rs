use std::collections::{HashMap, HashSet};
use std::path::{Component, Path, PathBuf};

use super::node::{NodeKind, TreeNode};

/// Label of the synthetic root node.
pub const ROOT_LABEL: &str = "Markdown Files";

/// Separator used when accumulating lookup keys.
const KEY_SEPARATOR: char = '/';

/// Node under construction. Children are arena indices so lookups can hand
/// out stable handles while the tree grows.
#[derive(Debug)]
struct PendingNode {
    label: String,
    reference: Option<PathBuf>,
    children: Vec<usize>,
}

impl PendingNode {
    fn new(label: String) -> Self {
        Self {
            label,
            reference: None,
            children: Vec::new(),
        }
    }
}

/// Split a relative path into its normal segments.
///
/// `.` components and root/prefix markers are dropped, so an empty path (or
/// one made only of those) yields no segments.
pub fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .filter(|part| !part.is_empty())
        .collect()
}

/// Build the browsable tree with the default root label.
pub fn build<I, P>(paths: I, ignore: &HashSet<String>) -> TreeNode
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    build_with_root_label(ROOT_LABEL, paths, ignore)
}

/// Turn a flat, ordered list of relative paths into a tree of segments.
///
/// Paths sharing leading segments share ancestor nodes. Sharing is decided
/// by the cumulative path-so-far, so equal labels under different parents
/// stay distinct. Sibling order is first-seen order. Paths whose file name
/// is in `ignore` and paths with no segments are skipped. A repeated path
/// lands on the node it created the first time.
pub fn build_with_root_label<I, P>(root_label: &str, paths: I, ignore: &HashSet<String>) -> TreeNode
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut arena = vec![PendingNode::new(root_label.to_string())];
    let mut by_key: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for path in paths {
        let path = path.as_ref();
        let segments = path_segments(path);

        let Some(file_name) = segments.last() else {
            skipped += 1;
            continue;
        };

        if ignore.contains(file_name) {
            skipped += 1;
            continue;
        }

        let mut current = 0;
        let mut key = String::new();

        for segment in &segments {
            key.push(KEY_SEPARATOR);
            key.push_str(segment);

            current = match by_key.get(&key) {
                Some(&idx) => idx,
                None => {
                    let idx = arena.len();
                    arena.push(PendingNode::new(segment.clone()));
                    arena[current].children.push(idx);
                    by_key.insert(key.clone(), idx);
                    idx
                }
            };
        }

        arena[current].reference = Some(path.to_path_buf());
    }

    tracing::debug!(nodes = arena.len(), skipped, "Built path tree");

    finish(&mut arena, 0)
}

/// Move the arena node at `idx` (and its subtree) into an owned `TreeNode`.
fn finish(arena: &mut [PendingNode], idx: usize) -> TreeNode {
    let label = std::mem::take(&mut arena[idx].label);
    let reference = arena[idx].reference.take();
    let child_indices = std::mem::take(&mut arena[idx].children);

    let children = child_indices
        .into_iter()
        .map(|child| finish(arena, child))
        .collect();

    TreeNode {
        label,
        kind: match reference {
            Some(path) => NodeKind::File(path),
            None => NodeKind::Directory,
        },
        children,
    }
}
