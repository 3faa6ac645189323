use super::ObserverKind;

/// Element ids each observer is still watching.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BindingTargets {
    pub spy: Vec<String>,
    pub reveal: Vec<String>,
    pub counters: Vec<String>,
}

impl BindingTargets {
    pub fn ids(&self, observer: ObserverKind) -> &[String] {
        match observer {
            ObserverKind::Spy => &self.spy,
            ObserverKind::Reveal => &self.reveal,
            ObserverKind::Counters => &self.counters,
        }
    }

    /// Drops `ids` from one observer's list. The other lists are left
    /// alone even when they hold the same ids.
    pub fn unobserve(&mut self, observer: ObserverKind, ids: &[String]) {
        let list = match observer {
            ObserverKind::Spy => &mut self.spy,
            ObserverKind::Reveal => &mut self.reveal,
            ObserverKind::Counters => &mut self.counters,
        };
        list.retain(|id| !ids.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> BindingTargets {
        let sections = vec!["adn".to_string(), "cycle".to_string()];
        BindingTargets {
            spy: sections.clone(),
            reveal: sections,
            counters: vec!["stat-0".to_string()],
        }
    }

    #[test]
    fn test_unobserve_touches_one_list() {
        let mut targets = targets();
        targets.unobserve(ObserverKind::Reveal, &["adn".to_string()]);

        assert_eq!(targets.ids(ObserverKind::Reveal), ["cycle".to_string()]);
        assert_eq!(targets.ids(ObserverKind::Spy).len(), 2);
        assert_eq!(targets.ids(ObserverKind::Counters), ["stat-0".to_string()]);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let before = targets();
        let mut after = before.clone();
        after.unobserve(ObserverKind::Counters, &["stat-9".to_string()]);
        assert_eq!(after, before);
    }
}
