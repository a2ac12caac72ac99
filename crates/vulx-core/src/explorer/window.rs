// Explorer window state: history plus the listing currently on screen

use std::path::{Path, PathBuf};
use tracing::debug;

use super::navigation::History;
use super::types::{Child, Filesystem, HostFs, Listing};

/// Drive roots seeded into a fresh explorer on Windows
const WINDOWS_ROOTS: [&str; 2] = ["C:/", "D:/"];

/// Outcome of activating (double-clicking) a listed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A directory was entered
    Entered(PathBuf),
    /// A file should be handed to the system opener
    File(PathBuf),
    /// Nothing by that name is listed, or it vanished
    Missing,
}

/// A file explorer window with back/forward history
pub struct Explorer<F: Filesystem = HostFs> {
    fs: F,
    history: History,
    entries: Vec<Child>,
}

impl Explorer<HostFs> {
    pub fn new() -> Self {
        Self::with_fs(HostFs)
    }

    /// Open at the platform's starting point: drive roots on Windows,
    /// the home directory elsewhere
    pub fn open_default() -> Self {
        let mut explorer = Self::new();
        if cfg!(windows) {
            let roots = WINDOWS_ROOTS
                .into_iter()
                .map(PathBuf::from)
                .filter(|p| explorer.fs.exists(p))
                .collect();
            explorer.seed(roots);
        } else if let Some(home) = dirs::home_dir() {
            explorer.navigate(home);
        }
        explorer
    }
}

impl Default for Explorer<HostFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Filesystem> Explorer<F> {
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            history: History::new(),
            entries: Vec::new(),
        }
    }

    /// Replace the history with `roots`, the first one current
    pub fn seed(&mut self, roots: Vec<PathBuf>) {
        self.history = History::seeded(roots);
        self.refresh();
    }

    /// Visit `path`. Returns false (and changes nothing) if it does not exist.
    pub fn navigate(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if !self.fs.exists(&path) {
            debug!("Ignoring navigation to missing path {:?}", path);
            return false;
        }
        self.history.push(path);
        self.refresh();
        true
    }

    pub fn back(&mut self) -> bool {
        if self.history.back().is_none() {
            return false;
        }
        self.refresh();
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.history.forward().is_none() {
            return false;
        }
        self.refresh();
        true
    }

    /// Children of any directory, through this window's filesystem
    pub fn listing(&self, path: impl Into<PathBuf>) -> Listing<'_, F> {
        Listing::new(&self.fs, path)
    }

    /// Re-read the current location
    pub fn refresh(&mut self) {
        self.entries = match self.history.current() {
            Some(path) => Listing::new(&self.fs, path).iter().collect(),
            None => Vec::new(),
        };
    }

    /// Navigate to whatever was typed into the path bar
    pub fn go_to(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.navigate(PathBuf::from(text))
    }

    /// Enter a listed directory, or report a listed file for opening
    pub fn activate(&mut self, name: &str) -> Activation {
        let Some(child) = self.entries.iter().find(|c| c.name.as_str() == name) else {
            return Activation::Missing;
        };
        let is_dir = child.is_dir;
        let Some(path) = self.history.current().map(|cur| cur.join(&child.file_name)) else {
            return Activation::Missing;
        };

        if !is_dir {
            return Activation::File(path);
        }
        if self.navigate(path.clone()) {
            Activation::Entered(path)
        } else {
            Activation::Missing
        }
    }

    pub fn current(&self) -> Option<&Path> {
        self.history.current()
    }

    /// Text shown in the path bar
    pub fn path_text(&self) -> String {
        self.current()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }

    pub fn entries(&self) -> &[Child] {
        &self.entries
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::io;

    /// In-memory tree; directories in `denied` fail to list
    #[derive(Default)]
    struct MemFs {
        dirs: HashMap<PathBuf, Vec<Child>>,
        denied: HashSet<PathBuf>,
    }

    impl MemFs {
        fn with_dirs(paths: &[&str]) -> Self {
            let mut fs = Self::default();
            for p in paths {
                fs.dirs.insert(PathBuf::from(p), Vec::new());
            }
            fs
        }

        fn add(&mut self, dir: &str, name: &str, is_dir: bool) {
            self.dirs
                .entry(PathBuf::from(dir))
                .or_default()
                .push(Child::new(name, is_dir));
            if is_dir {
                self.dirs.entry(Path::new(dir).join(name)).or_default();
            }
        }
    }

    impl Filesystem for MemFs {
        fn exists(&self, path: &Path) -> bool {
            self.dirs.contains_key(path)
        }

        fn read_children(&self, path: &Path) -> io::Result<Vec<Child>> {
            if self.denied.contains(path) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            self.dirs
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
        }
    }

    fn names<F: Filesystem>(explorer: &Explorer<F>) -> Vec<&str> {
        explorer.entries().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_navigate_then_back() {
        let mut explorer = Explorer::with_fs(MemFs::with_dirs(&["/a", "/b"]));
        assert!(explorer.navigate("/a"));
        assert!(explorer.navigate("/b"));
        assert!(explorer.back());
        assert_eq!(explorer.current(), Some(Path::new("/a")));
    }

    #[test]
    fn test_forward_after_back_restores_location() {
        let mut explorer = Explorer::with_fs(MemFs::with_dirs(&["/a", "/b"]));
        explorer.navigate("/a");
        explorer.navigate("/b");
        explorer.back();
        assert!(explorer.forward());
        assert_eq!(explorer.current(), Some(Path::new("/b")));
    }

    #[test]
    fn test_back_at_start_then_forward_is_noop() {
        let mut explorer = Explorer::with_fs(MemFs::with_dirs(&["/a"]));
        explorer.navigate("/a");
        assert!(!explorer.back());
        assert!(!explorer.forward());
        assert_eq!(explorer.current(), Some(Path::new("/a")));
    }

    #[test]
    fn test_navigate_after_back_discards_forward() {
        let mut explorer = Explorer::with_fs(MemFs::with_dirs(&["/a", "/b", "/c"]));
        explorer.navigate("/a");
        explorer.navigate("/b");
        explorer.back();
        explorer.navigate("/c");

        assert!(!explorer.forward());
        assert_eq!(explorer.current(), Some(Path::new("/c")));
        assert_eq!(
            explorer.history().entries(),
            &[PathBuf::from("/a"), PathBuf::from("/c")]
        );
    }

    #[test]
    fn test_back_on_empty_history() {
        let mut explorer = Explorer::with_fs(MemFs::default());
        assert!(!explorer.back());
        assert!(!explorer.forward());
        assert_eq!(explorer.current(), None);
        assert!(explorer.entries().is_empty());
    }

    #[test]
    fn test_navigate_to_missing_path_changes_nothing() {
        let mut explorer = Explorer::with_fs(MemFs::with_dirs(&["/a"]));
        explorer.navigate("/a");
        assert!(!explorer.navigate("/nowhere"));
        assert_eq!(explorer.history().len(), 1);
        assert_eq!(explorer.history().index(), Some(0));

        let mut empty = Explorer::with_fs(MemFs::default());
        assert!(!empty.navigate("/nowhere"));
        assert_eq!(empty.history().index(), None);
    }

    #[test]
    fn test_navigation_refreshes_sorted_entries() {
        let mut fs = MemFs::with_dirs(&["/home"]);
        fs.add("/home", "b.txt", false);
        fs.add("/home", "a.txt", false);
        fs.add("/", "home", true);

        let mut explorer = Explorer::with_fs(fs);
        explorer.navigate("/home");
        assert_eq!(names(&explorer), vec!["a.txt", "b.txt"]);

        explorer.navigate("/");
        assert_eq!(names(&explorer), vec!["home"]);

        explorer.back();
        assert_eq!(names(&explorer), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_denied_directory_lists_empty() {
        let mut fs = MemFs::with_dirs(&["/secret"]);
        fs.add("/secret", "key", false);
        fs.denied.insert(PathBuf::from("/secret"));

        let mut explorer = Explorer::with_fs(fs);
        assert!(explorer.navigate("/secret"));
        assert!(explorer.entries().is_empty());
        assert_eq!(explorer.listing("/secret").iter().count(), 0);
    }

    #[test]
    fn test_activate_enters_directories_and_reports_files() {
        let mut fs = MemFs::with_dirs(&["/root"]);
        fs.add("/root", "docs", true);
        fs.add("/root", "readme.md", false);

        let mut explorer = Explorer::with_fs(fs);
        explorer.navigate("/root");

        assert_eq!(
            explorer.activate("readme.md"),
            Activation::File(PathBuf::from("/root/readme.md"))
        );
        assert_eq!(explorer.current(), Some(Path::new("/root")));

        assert_eq!(
            explorer.activate("docs"),
            Activation::Entered(PathBuf::from("/root/docs"))
        );
        assert_eq!(explorer.current(), Some(Path::new("/root/docs")));
        assert_eq!(explorer.activate("ghost"), Activation::Missing);
    }

    #[test]
    fn test_go_to_uses_path_bar_text() {
        let mut explorer = Explorer::with_fs(MemFs::with_dirs(&["/a", "/b"]));
        explorer.navigate("/a");
        assert!(explorer.go_to("  /b  "));
        assert_eq!(explorer.path_text(), "/b");
        assert!(!explorer.go_to("   "));
        assert_eq!(explorer.history().len(), 2);
    }

    #[test]
    fn test_seed_lists_first_root() {
        let mut fs = MemFs::with_dirs(&["C:/", "D:/"]);
        fs.add("C:/", "Windows", true);

        let mut explorer = Explorer::with_fs(fs);
        explorer.seed(vec![PathBuf::from("C:/"), PathBuf::from("D:/")]);
        assert_eq!(names(&explorer), vec!["Windows"]);
        assert!(explorer.can_go_forward());
        assert!(!explorer.can_go_back());
    }

    #[test]
    fn test_host_explorer_on_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("file.txt"), "").unwrap();

        let mut explorer = Explorer::new();
        assert!(explorer.navigate(dir.path()));
        assert_eq!(names(&explorer), vec!["file.txt", "sub"]);
        assert_eq!(
            explorer.activate("sub"),
            Activation::Entered(dir.path().join("sub"))
        );
        assert!(explorer.entries().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_activate_enters_non_utf8_directory() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let raw = OsStr::from_bytes(b"bad\xffdir");
        std::fs::create_dir(dir.path().join(raw)).unwrap();

        let mut explorer = Explorer::new();
        assert!(explorer.navigate(dir.path()));
        let shown = explorer.entries()[0].name.to_string();
        assert_eq!(shown, "bad\u{fffd}dir");

        assert_eq!(
            explorer.activate(&shown),
            Activation::Entered(dir.path().join(raw))
        );
    }
}
