use super::IntersectionEntry;

/// Shrinks the observed band to a thin strip just above the middle of the
/// viewport.
pub const SPY_ROOT_MARGIN: &str = "-40% 0px -55% 0px";
pub const SPY_THRESHOLD: f64 = 0.01;

/// Tracks which table-of-contents link is active. Links map one-to-one to
/// section ids; the last section reported as intersecting wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TocSpy {
    sections: Vec<String>,
    active: Option<usize>,
}

impl TocSpy {
    /// Links whose section does not exist on the page are dropped.
    pub fn new<I, S>(links: I, exists: impl Fn(&str) -> bool) -> Self
        where I: IntoIterator<Item = S>, S: Into<String>
    {
        let sections = links
            .into_iter()
            .map(Into::into)
            .filter(|id: &String| exists(id))
            .collect();
        Self {
            sections,
            active: None,
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) {
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            if let Some(idx) = self.sections.iter().position(|s| *s == entry.target) {
                self.active = Some(idx);
            }
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|idx| self.sections[idx].as_str())
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active() == Some(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> TocSpy {
        TocSpy::new(["intro", "adn", "quiz"], |_| true)
    }

    #[test]
    fn test_single_active_link() {
        let mut spy = spy();
        spy.on_intersection(&[IntersectionEntry::new("intro", true)]);
        assert_eq!(spy.active(), Some("intro"));

        spy.on_intersection(&[
            IntersectionEntry::new("intro", false),
            IntersectionEntry::new("adn", true),
        ]);
        assert_eq!(spy.active(), Some("adn"));
        assert!(!spy.is_active("intro"));
    }

    #[test]
    fn test_last_writer_wins() {
        let mut spy = spy();
        spy.on_intersection(&[
            IntersectionEntry::new("quiz", true),
            IntersectionEntry::new("adn", true),
        ]);
        assert_eq!(spy.active(), Some("adn"));
    }

    #[test]
    fn test_leaving_does_not_clear() {
        let mut spy = spy();
        spy.on_intersection(&[IntersectionEntry::new("adn", true)]);
        spy.on_intersection(&[IntersectionEntry::new("adn", false)]);
        assert_eq!(spy.active(), Some("adn"));
    }

    #[test]
    fn test_missing_sections_are_filtered() {
        let mut spy = TocSpy::new(["intro", "ghost"], |id| id != "ghost");
        assert_eq!(spy.sections(), ["intro".to_string()]);
        spy.on_intersection(&[IntersectionEntry::new("ghost", true)]);
        assert_eq!(spy.active(), None);
    }
}
