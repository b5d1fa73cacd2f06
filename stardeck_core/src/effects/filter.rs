//! Portfolio project filter.
//!
//! Category buttons with exactly one active; non-matching cards hide and
//! matching ones re-enter with the fade-in-up style.

/// How a card should render under the current filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Shown,
    /// Freshly matched by a filter change; the front-end plays the
    /// fade-in-up entrance once.
    Entering,
    Hidden,
}

pub struct ProjectFilter {
    categories: Vec<String>,
    active: usize,
}

impl ProjectFilter {
    /// `categories[0]` is the catch-all ("all") filter and starts active.
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            categories,
            active: 0,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_category(&self) -> &str {
        self.categories
            .get(self.active)
            .map(String::as_str)
            .unwrap_or("all")
    }

    /// Activate a filter button. Returns true if the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.categories.len() || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    /// State of a card with the given category under the current filter.
    /// `changed` is whether the filter just switched this frame.
    pub fn card_state(&self, category: &str, changed: bool) -> CardState {
        let matches = self.active == 0 || self.active_category() == category;
        match (matches, changed) {
            (false, _) => CardState::Hidden,
            (true, true) => CardState::Entering,
            (true, false) => CardState::Shown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filter() -> ProjectFilter {
        ProjectFilter::new(vec![
            "all".to_string(),
            "web".to_string(),
            "mobile".to_string(),
        ])
    }

    #[test]
    fn test_all_filter_shows_everything() {
        let f = filter();
        assert_eq!(f.card_state("web", false), CardState::Shown);
        assert_eq!(f.card_state("mobile", false), CardState::Shown);
    }

    #[test]
    fn test_category_filter_hides_mismatches() {
        let mut f = filter();
        assert!(f.select(1));
        assert_eq!(f.card_state("web", true), CardState::Entering);
        assert_eq!(f.card_state("mobile", true), CardState::Hidden);
    }

    #[test]
    fn test_reselecting_active_is_a_noop() {
        let mut f = filter();
        f.select(1);
        assert!(!f.select(1));
        assert!(!f.select(99));
    }

    #[test]
    fn test_exactly_one_active_button() {
        let mut f = filter();
        f.select(2);
        let actives = (0..f.categories().len())
            .filter(|i| *i == f.active())
            .count();
        assert_eq!(actives, 1);
        assert_eq!(f.active_category(), "mobile");
    }
}
