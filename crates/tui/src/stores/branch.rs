//! Branch store: the list of branch names.

use crate::stores::Remote;

/// State container for branch data.
#[derive(Debug, Default)]
pub struct BranchStore {
    pub branches: Remote<Vec<String>>,
}

impl BranchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn branches_loaded(&mut self, result: Result<Vec<String>, String>) {
        self.branches.resolve(result);
    }
}
