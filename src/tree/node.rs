use std::path::{Path, PathBuf};

/// What a tree node stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// An intermediate path segment.
    Directory,
    /// A file, carrying its path relative to the browsed root.
    File(PathBuf),
}

/// One path segment in the browsable tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Display text: the segment itself
    pub label: String,

    pub kind: NodeKind,

    /// Children in first-seen order
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a directory node with no children.
    pub fn directory(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: NodeKind::Directory,
            children: Vec::new(),
        }
    }

    /// Create a file node referring to `path`.
    pub fn file(label: impl Into<String>, path: PathBuf) -> Self {
        Self {
            label: label.into(),
            kind: NodeKind::File(path),
            children: Vec::new(),
        }
    }

    /// The relative path this node refers to, for file nodes.
    pub fn reference(&self) -> Option<&Path> {
        match &self.kind {
            NodeKind::File(path) => Some(path),
            NodeKind::Directory => None,
        }
    }

    /// Only nodes that refer to a file can be opened.
    pub fn is_selectable(&self) -> bool {
        matches!(self.kind, NodeKind::File(_))
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Direct child with the given label.
    pub fn child(&self, label: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.label == label)
    }

    /// Descend through children by label, e.g. `["guides", "setup.md"]`.
    pub fn find<'a, I>(&self, labels: I) -> Option<&TreeNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels
            .into_iter()
            .try_fold(self, |node, label| node.child(label))
    }

    /// Follow a sequence of child indices from this node.
    pub fn get(&self, index_path: &[usize]) -> Option<&TreeNode> {
        index_path
            .iter()
            .try_fold(self, |node, &idx| node.children.get(idx))
    }

    /// All file references below this node, in depth-first order.
    pub fn references(&self) -> Vec<&Path> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a Path>) {
        if let Some(path) = self.reference() {
            out.push(path);
        }
        for child in &self.children {
            child.collect_references(out);
        }
    }

    /// Number of selectable nodes below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        let own = usize::from(self.is_selectable());
        own + self.children.iter().map(TreeNode::leaf_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        let mut root = TreeNode::directory("root");
        let mut guides = TreeNode::directory("guides");
        guides
            .children
            .push(TreeNode::file("setup.md", PathBuf::from("guides/setup.md")));
        root.children.push(guides);
        root.children
            .push(TreeNode::file("index.md", PathBuf::from("index.md")));
        root
    }

    #[test]
    fn test_directory_is_not_selectable() {
        let node = TreeNode::directory("guides");
        assert!(!node.is_selectable());
        assert!(node.reference().is_none());
        assert!(!node.has_children());
    }

    #[test]
    fn test_file_is_selectable() {
        let node = TreeNode::file("a.md", PathBuf::from("x/a.md"));
        assert!(node.is_selectable());
        assert_eq!(node.reference(), Some(Path::new("x/a.md")));
    }

    #[test]
    fn test_find_by_labels() {
        let root = sample();
        let setup = root.find(["guides", "setup.md"]).unwrap();
        assert_eq!(setup.reference(), Some(Path::new("guides/setup.md")));
        assert!(root.find(["guides", "missing.md"]).is_none());
        assert_eq!(root.find(Vec::<&str>::new()).unwrap().label, "root");
    }

    #[test]
    fn test_get_by_index_path() {
        let root = sample();
        assert_eq!(root.get(&[0, 0]).unwrap().label, "setup.md");
        assert_eq!(root.get(&[1]).unwrap().label, "index.md");
        assert!(root.get(&[2]).is_none());
    }

    #[test]
    fn test_references_and_leaf_count() {
        let root = sample();
        assert_eq!(
            root.references(),
            vec![Path::new("guides/setup.md"), Path::new("index.md")]
        );
        assert_eq!(root.leaf_count(), 2);
    }
}
