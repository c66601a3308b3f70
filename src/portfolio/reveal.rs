use dioxus::logger::tracing::debug;

/// Whether an element whose top edge sits at `top` (relative to the viewport)
/// has scrolled far enough into view.
pub fn should_reveal(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

/// Tracks which reveal targets have been shown. Once shown, a target stays shown.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    shown: Vec<bool>,
    offset: f64,
}

impl RevealTracker {
    pub fn new(targets: usize, offset: f64) -> Self {
        Self {
            shown: vec![false; targets],
            offset,
        }
    }

    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.get(index).copied().unwrap_or(false)
    }

    pub fn shown_count(&self) -> usize {
        self.shown.iter().filter(|shown| **shown).count()
    }

    /// Apply one measurement pass. `tops` holds the current top edge of every
    /// target in document order. Returns the targets revealed by this pass.
    pub fn update(&mut self, tops: &[f64], viewport_height: f64) -> Vec<usize> {
        if tops.len() > self.shown.len() {
            self.shown.resize(tops.len(), false);
        }

        let mut revealed = Vec::new();
        for (index, top) in tops.iter().enumerate() {
            if self.shown[index] || !top.is_finite() {
                continue;
            }
            if should_reveal(*top, viewport_height, self.offset) {
                self.shown[index] = true;
                revealed.push(index);
            }
        }

        if !revealed.is_empty() {
            debug!(?revealed, shown = self.shown_count(), "reveal targets shown");
        }
        revealed
    }
}
