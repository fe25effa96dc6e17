use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone)]
struct Region {
    id: String,
    html: String,
}

/// In-memory document the views render into.
///
/// Regions keep their mount order, so the full document can be reproduced
/// at any point by concatenating them.
pub struct Page {
    regions: Mutex<Vec<Region>>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            regions: Mutex::new(Vec::new()),
        }
    }

    /// Add a region at the end of the document.
    pub fn mount(&self, id: impl Into<String>, html: impl Into<String>) {
        self.regions().push(Region {
            id: id.into(),
            html: html.into(),
        });
    }

    /// Replace the contents of a mounted region. An update for an unknown
    /// id is dropped with a warning.
    pub fn update(&self, id: &str, html: impl Into<String>) {
        let mut regions = self.regions();
        match regions.iter_mut().find(|region| region.id == id) {
            Some(region) => region.html = html.into(),
            None => tracing::warn!(region = id, "update for unmounted region dropped"),
        }
    }

    /// Current contents of one region.
    pub fn region(&self, id: &str) -> Option<String> {
        self.regions()
            .iter()
            .find(|region| region.id == id)
            .map(|region| region.html.clone())
    }

    /// The whole document, regions in mount order.
    pub fn render(&self) -> String {
        self.regions()
            .iter()
            .map(|region| region.html.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn regions(&self) -> MutexGuard<'_, Vec<Region>> {
        self.regions.lock().expect("page mutex poisoned")
    }
}
