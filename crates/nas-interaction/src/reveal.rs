//! One-shot reveal of cards and sections entering the viewport.

use std::collections::HashSet;

pub const REVEAL_SELECTOR: &str = ".service-card, .gallery-item, .pricing-card, .stat-card";
pub const REVEALED_CLASS: &str = "fade-in";

/// Tracks which observed elements have already been revealed.
#[derive(Debug, Default)]
pub struct RevealTracker {
    observed: usize,
    revealed: HashSet<usize>,
}

impl RevealTracker {
    /// Registers a new element and returns its id.
    pub fn register(&mut self) -> usize {
        let id = self.observed;
        self.observed += 1;
        id
    }

    /// `true` exactly once per element: the first time it intersects.
    /// The caller stops observing the element when this returns `true`.
    pub fn on_intersection(&mut self, id: usize, is_intersecting: bool) -> bool {
        if !is_intersecting || id >= self.observed {
            return false;
        }
        self.revealed.insert(id)
    }

    /// Elements still waiting for their first intersection. Once this hits
    /// zero the observer can be disconnected.
    pub fn pending(&self) -> usize {
        self.observed - self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_on_first_intersection_only() {
        let mut tracker = RevealTracker::default();
        let card = tracker.register();

        assert!(!tracker.on_intersection(card, false));
        assert!(tracker.on_intersection(card, true));

        // Scrolled out and back in.
        assert!(!tracker.on_intersection(card, false));
        assert!(!tracker.on_intersection(card, true));
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn elements_are_independent() {
        let mut tracker = RevealTracker::default();
        let a = tracker.register();
        let b = tracker.register();
        assert_eq!(tracker.pending(), 2);

        assert!(tracker.on_intersection(b, true));
        assert_eq!(tracker.pending(), 1);
        assert!(tracker.on_intersection(a, true));
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.on_intersection(3, true));
        assert_eq!(tracker.pending(), 0);
    }
}
