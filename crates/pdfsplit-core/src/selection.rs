//! Checked page tracking

/// Distinct 1-based page numbers in the order they were first checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSelection {
    pages: Vec<u32>,
}

impl PageSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the page if absent, remove it if present.
    /// Returns whether the page is selected afterwards.
    pub fn toggle(&mut self, page: u32) -> bool {
        if let Some(pos) = self.pages.iter().position(|&p| p == page) {
            self.pages.remove(pos);
            false
        } else {
            self.pages.push(page);
            true
        }
    }

    pub fn contains(&self, page: u32) -> bool {
        self.pages.contains(&page)
    }

    /// Drop pages beyond `page_count`, returning how many were removed
    pub fn retain_within(&mut self, page_count: u32) -> usize {
        let before = self.pages.len();
        self.pages.retain(|&p| p >= 1 && p <= page_count);
        before - self.pages.len()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.pages
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.pages.clone()
    }
}
