/// A section's id and vertical extent, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// The section whose extent contains `probe`. Overlaps resolve to the last one in document order.
pub fn active_section(sections: &[SectionBounds], probe: f64) -> Option<&str> {
    sections.iter().rev().find(|section| section.contains(probe)).map(|section| section.id.as_str())
}
