//! Application state for the TUI.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::markdown::{apply_styling, StyledLine};
use crate::scanner::{format_size, read_file};
use crate::tree::TreeNode;

use super::event::AppEvent;

/// Rows moved by a page key.
pub const PAGE_SIZE: isize = 20;

/// Which view fills the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The tree alone.
    #[default]
    Tree,
    /// Tree and preview side by side, preview focused.
    Preview,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Tree => View::Preview,
            View::Preview => View::Tree,
        }
    }
}

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal navigation mode.
    #[default]
    Normal,
    /// Help overlay mode.
    Help,
}

/// A visible row in the flattened tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub label: String,
    /// Depth in the tree (0 = root).
    pub depth: usize,
    /// Child indices leading from the root to this node.
    pub index_path: Vec<usize>,
    pub has_children: bool,
    pub is_expanded: bool,
    /// Relative path for file rows.
    pub reference: Option<PathBuf>,
}

/// A file opened in the preview pane.
#[derive(Debug, Clone)]
pub struct Preview {
    /// Path relative to the browsed root.
    pub path: PathBuf,
    pub title: String,
    pub lines: Vec<StyledLine>,
    /// First visible row of the wrapped text.
    pub scroll: u16,
    /// Last valid `scroll`, measured against the pane at render time.
    pub max_scroll: u16,
}

impl Preview {
    /// Build a preview from already-read text.
    pub fn new(path: PathBuf, title: String, text: &str) -> Self {
        Self {
            path,
            title,
            lines: apply_styling(text),
            scroll: 0,
            max_scroll: u16::MAX,
        }
    }

    /// Record how many wrapped rows the text takes in a pane `height` rows
    /// tall, and pull `scroll` back inside the new bounds.
    pub fn fit_to_viewport(&mut self, wrapped_rows: usize, height: u16) {
        let overflow = wrapped_rows.saturating_sub(usize::from(height));
        self.max_scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(self.max_scroll);
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = (self.scroll as isize).saturating_add(delta);
        self.scroll = target.clamp(0, self.max_scroll as isize) as u16;
    }
}

/// Browsing session: the tree, what is visible, and what is open.
pub struct App {
    /// Directory the tree's relative paths are resolved against.
    pub root: PathBuf,

    pub tree: TreeNode,

    /// Flattened visible rows (for rendering).
    pub visible_rows: Vec<VisibleRow>,

    /// Currently selected index in visible_rows.
    pub selected: usize,

    /// Index paths of collapsed nodes. Everything else starts expanded.
    pub collapsed: HashSet<Vec<usize>>,

    pub view: View,

    pub mode: Mode,

    pub preview: Option<Preview>,

    /// Status message to display.
    pub status_message: Option<String>,

    /// Application should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new App over an already built tree.
    pub fn new(root: PathBuf, tree: TreeNode) -> Self {
        let mut app = Self {
            root,
            tree,
            visible_rows: Vec::new(),
            selected: 0,
            collapsed: HashSet::new(),
            view: View::default(),
            mode: Mode::default(),
            preview: None,
            status_message: None,
            should_quit: false,
        };
        app.rebuild_visible_rows();
        app
    }

    /// Get the currently selected row, if any.
    pub fn selected_row(&self) -> Option<&VisibleRow> {
        self.visible_rows.get(self.selected)
    }

    /// Apply one event to the session.
    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::NodeSelected(path) => self.open_preview(&path),
            AppEvent::ToggleView => self.view = self.view.toggled(),
            AppEvent::MoveSelection(delta) => self.move_selection(delta),
            AppEvent::SelectFirst => self.selected = 0,
            AppEvent::SelectLast => self.selected = self.visible_rows.len().saturating_sub(1),
            AppEvent::Expand => self.expand_selected(),
            AppEvent::Collapse => self.collapse_selected(),
            AppEvent::ToggleNode => self.toggle_selected(),
            AppEvent::ScrollPreview(delta) => {
                if let Some(preview) = self.preview.as_mut() {
                    preview.scroll_by(delta);
                }
            }
            AppEvent::ShowHelp => self.mode = Mode::Help,
            AppEvent::CloseHelp => self.mode = Mode::Normal,
            AppEvent::Quit => self.should_quit = true,
        }
    }

    /// Read `path` (relative to the root), style it and show it.
    ///
    /// A failed read is shown in the preview as an error line; the session
    /// carries on.
    pub fn open_preview(&mut self, path: &Path) {
        let full_path = self.root.join(path);

        let (text, title, status) = match read_file(&full_path) {
            Ok(contents) => (
                contents.text,
                format!(" {} ({}) ", path.display(), format_size(contents.size)),
                None,
            ),
            Err(err) => {
                tracing::debug!(path = %full_path.display(), error = %err, "Preview read failed");
                (
                    format!("Error: {}", err),
                    format!(" {} ", path.display()),
                    Some(format!("Could not read {}", path.display())),
                )
            }
        };

        tracing::debug!(path = %path.display(), "Opening preview");

        self.preview = Some(Preview::new(path.to_path_buf(), title, &text));
        self.view = View::Preview;
        self.status_message = status;
    }

    /// Move the selection by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.visible_rows.is_empty() {
            return;
        }
        let last = self.visible_rows.len() - 1;
        let target = (self.selected as isize).saturating_add(delta);
        self.selected = target.clamp(0, last as isize) as usize;
    }

    pub fn expand_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };

        if row.has_children && !row.is_expanded {
            let key = row.index_path.clone();
            self.collapsed.remove(&key);
            self.rebuild_visible_rows();
        }
    }

    /// Collapse the selected node, or jump to its parent if it is already
    /// collapsed or has no children.
    pub fn collapse_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let mut index_path = row.index_path.clone();

        if row.has_children && row.is_expanded {
            self.collapsed.insert(index_path);
            self.rebuild_visible_rows();
            return;
        }

        if index_path.pop().is_some() {
            if let Some(idx) = self
                .visible_rows
                .iter()
                .position(|r| r.index_path == index_path)
            {
                self.selected = idx;
            }
        }
    }

    pub fn toggle_selected(&mut self) {
        let (has_children, is_expanded) = match self.selected_row() {
            Some(row) => (row.has_children, row.is_expanded),
            None => return,
        };

        if !has_children {
            return;
        }
        if is_expanded {
            self.collapse_selected();
        } else {
            self.expand_selected();
        }
    }

    /// Recompute `visible_rows` from the tree and the collapsed set.
    pub fn rebuild_visible_rows(&mut self) {
        let mut rows = Vec::new();
        let mut index_path = Vec::new();
        push_rows(&self.tree, 0, &mut index_path, &self.collapsed, &mut rows);
        self.visible_rows = rows;

        if self.selected >= self.visible_rows.len() {
            self.selected = self.visible_rows.len().saturating_sub(1);
        }
    }

    /// Number of files reachable in the tree.
    pub fn file_count(&self) -> usize {
        self.tree.leaf_count()
    }
}

fn push_rows(
    node: &TreeNode,
    depth: usize,
    index_path: &mut Vec<usize>,
    collapsed: &HashSet<Vec<usize>>,
    rows: &mut Vec<VisibleRow>,
) {
    let is_expanded = !collapsed.contains(index_path.as_slice());

    rows.push(VisibleRow {
        label: node.label.clone(),
        depth,
        index_path: index_path.clone(),
        has_children: node.has_children(),
        is_expanded,
        reference: node.reference().map(Path::to_path_buf),
    });

    if !is_expanded {
        return;
    }

    for (i, child) in node.children.iter().enumerate() {
        index_path.push(i);
        push_rows(child, depth + 1, index_path, collapsed, rows);
        index_path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use std::fs;
    use tempfile::TempDir;

    fn sample_app() -> App {
        let tree = build(["guides/setup.md", "guides/advanced.md", "index.md"], &HashSet::new());
        App::new(PathBuf::from("/notes"), tree)
    }

    fn labels(app: &App) -> Vec<&str> {
        app.visible_rows.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn test_app_new() {
        let app = sample_app();
        assert_eq!(app.root, PathBuf::from("/notes"));
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.view, View::Tree);
        assert_eq!(app.selected, 0);
        assert!(!app.should_quit);
        assert!(app.preview.is_none());
        assert_eq!(app.file_count(), 3);
    }

    #[test]
    fn test_everything_starts_expanded() {
        let app = sample_app();
        assert_eq!(
            labels(&app),
            vec!["Markdown Files", "guides", "setup.md", "advanced.md", "index.md"]
        );
        assert_eq!(app.visible_rows[2].depth, 2);
        assert_eq!(
            app.visible_rows[2].reference,
            Some(PathBuf::from("guides/setup.md"))
        );
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut app = sample_app();
        app.move_selection(-5);
        assert_eq!(app.selected, 0);
        app.move_selection(100);
        assert_eq!(app.selected, 4);
        app.move_selection(-1);
        assert_eq!(app.selected, 3);
    }

    #[test]
    fn test_collapse_and_expand() {
        let mut app = sample_app();
        app.selected = 1;

        app.collapse_selected();
        assert_eq!(labels(&app), vec!["Markdown Files", "guides", "index.md"]);
        assert!(!app.visible_rows[1].is_expanded);

        app.expand_selected();
        assert_eq!(app.visible_rows.len(), 5);
    }

    #[test]
    fn test_collapse_on_file_jumps_to_parent() {
        let mut app = sample_app();
        app.selected = 3;
        app.collapse_selected();
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = sample_app();
        app.selected = 1;
        app.toggle_selected();
        assert_eq!(app.visible_rows.len(), 3);
        app.toggle_selected();
        assert_eq!(app.visible_rows.len(), 5);
    }

    #[test]
    fn test_collapse_root_clamps_selection() {
        let mut app = sample_app();
        app.selected = 4;
        app.collapsed.insert(Vec::new());
        app.rebuild_visible_rows();
        assert_eq!(app.visible_rows.len(), 1);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_toggle_view_event() {
        let mut app = sample_app();
        app.dispatch(AppEvent::ToggleView);
        assert_eq!(app.view, View::Preview);
        app.dispatch(AppEvent::ToggleView);
        assert_eq!(app.view, View::Tree);
    }

    #[test]
    fn test_node_selected_opens_preview() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("note.md"), "# Hello\nworld\n").unwrap();
        let tree = build(["note.md"], &HashSet::new());
        let mut app = App::new(dir.path().to_path_buf(), tree);

        app.dispatch(AppEvent::NodeSelected(PathBuf::from("note.md")));

        assert_eq!(app.view, View::Preview);
        let preview = app.preview.as_ref().unwrap();
        assert_eq!(preview.path, PathBuf::from("note.md"));
        assert!(preview.title.contains("note.md"));
        assert_eq!(preview.lines.len(), 2);
        assert_eq!(preview.lines[0].text(), "Hello");
    }

    #[test]
    fn test_unreadable_file_shows_error() {
        let dir = TempDir::new().unwrap();
        let tree = build(["gone.md"], &HashSet::new());
        let mut app = App::new(dir.path().to_path_buf(), tree);

        app.dispatch(AppEvent::NodeSelected(PathBuf::from("gone.md")));

        assert_eq!(app.view, View::Preview);
        let preview = app.preview.as_ref().unwrap();
        assert!(preview.lines[0].text().starts_with("Error: "));
        assert_eq!(app.status_message.as_deref(), Some("Could not read gone.md"));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_successful_open_clears_status() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("here.md"), "text\n").unwrap();
        let tree = build(["gone.md", "here.md"], &HashSet::new());
        let mut app = App::new(dir.path().to_path_buf(), tree);

        app.dispatch(AppEvent::NodeSelected(PathBuf::from("gone.md")));
        assert!(app.status_message.is_some());

        app.dispatch(AppEvent::NodeSelected(PathBuf::from("here.md")));
        assert!(app.status_message.is_none());
        assert_eq!(app.preview.as_ref().unwrap().lines[0].text(), "text");
    }

    #[test]
    fn test_non_utf8_file_still_previews() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("n.md"), b"# Caf\xe9\nbody\n").unwrap();
        let tree = build(["n.md"], &HashSet::new());
        let mut app = App::new(dir.path().to_path_buf(), tree);

        app.dispatch(AppEvent::NodeSelected(PathBuf::from("n.md")));

        let preview = app.preview.as_ref().unwrap();
        assert_eq!(preview.lines[0].text(), "Caf\u{FFFD}");
        assert_eq!(preview.lines[1].text(), "body");
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_preview_scroll_clamps() {
        let mut preview = Preview::new(PathBuf::from("a.md"), String::new(), "1\n2\n3");
        preview.fit_to_viewport(3, 1);
        preview.scroll_by(-1);
        assert_eq!(preview.scroll, 0);
        preview.scroll_by(10);
        assert_eq!(preview.scroll, 2);
        preview.scroll_by(-1);
        assert_eq!(preview.scroll, 1);
    }

    #[test]
    fn test_unmeasured_preview_scrolls_freely() {
        let mut preview = Preview::new(PathBuf::from("a.md"), String::new(), "one line");
        preview.scroll_by(isize::MAX);
        assert_eq!(preview.scroll, u16::MAX);

        preview.fit_to_viewport(40, 10);
        assert_eq!(preview.max_scroll, 30);
        assert_eq!(preview.scroll, 30);
    }

    #[test]
    fn test_short_preview_does_not_scroll() {
        let mut preview = Preview::new(PathBuf::from("a.md"), String::new(), "1\n2");
        preview.fit_to_viewport(2, 10);
        preview.scroll_by(5);
        assert_eq!(preview.scroll, 0);
    }

    #[test]
    fn test_view_toggled() {
        assert_eq!(View::Tree.toggled(), View::Preview);
        assert_eq!(View::Preview.toggled(), View::Tree);
    }
}
