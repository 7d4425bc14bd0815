use std::path::PathBuf;

/// Where the current puzzle came from, and whether entries changed since the last check.
#[derive(Clone, Debug, Default)]
pub struct FileState {
    pub current_path: Option<PathBuf>,
    pub is_dirty: bool,
}

impl FileState {
    pub fn new(current_path: Option<PathBuf>) -> Self {
        Self {
            current_path,
            is_dirty: false,
        }
    }

    pub fn file_name(&self) -> String {
        self.current_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| "[Sample]".to_string())
    }

    pub fn mark_dirty(&mut self) {
        self.is_dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }
}
