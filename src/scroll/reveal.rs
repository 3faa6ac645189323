use std::collections::HashSet;

use super::IntersectionEntry;

pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Elements that have been seen at least once. Reveal is one-way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    /// Returns the ids revealed by this batch, in entry order.
    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) -> Vec<String> {
        entries
            .iter()
            .filter(|e| e.is_intersecting)
            .filter(|e| self.revealed.insert(e.target.clone()))
            .map(|e| e.target.clone())
            .collect()
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_sticky() {
        let mut reveal = RevealTracker::default();
        let fresh = reveal.on_intersection(&[
            IntersectionEntry::new("intro", true),
            IntersectionEntry::new("adn", false),
        ]);
        assert_eq!(fresh, vec!["intro".to_string()]);

        let fresh = reveal.on_intersection(&[IntersectionEntry::new("intro", false)]);
        assert!(fresh.is_empty());
        assert!(reveal.is_revealed("intro"));
        assert!(!reveal.is_revealed("adn"));
    }
}
