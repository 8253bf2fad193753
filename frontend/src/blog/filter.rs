use crate::components::notification::Notice;

pub const ALL_CATEGORIES: &str = "all";

/// Which blog posts stay on screen for a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostVisibility {
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView {
    pub posts: PostVisibility,
    pub notice: Notice,
}

/// Tracks the single active category button, by its position among the buttons.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    active: Option<usize>,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Posts have no category data yet, so every selection keeps every post visible.
    pub fn select(&mut self, index: usize, category: Option<&str>) -> FilterView {
        self.active = Some(index);
        let category = category.filter(|c| !c.is_empty()).unwrap_or(ALL_CATEGORIES);
        FilterView {
            posts: PostVisibility::All,
            notice: Notice::info(format!("Showing {} articles", category)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_click_moves_active_marker() {
        let mut filter = CategoryFilter::new();
        filter.select(0, Some("all"));
        assert!(filter.is_active(0));

        filter.select(2, Some("cardiology"));
        assert!(!filter.is_active(0));
        assert!(filter.is_active(2));
        assert_eq!((0..4).filter(|i| filter.is_active(*i)).count(), 1);
    }

    #[test]
    fn reports_selected_category() {
        let mut filter = CategoryFilter::new();
        assert_eq!(filter.select(1, Some("nutrition")).notice, Notice::info("Showing nutrition articles"));
        assert_eq!(filter.select(0, Some("all")).notice.message, "Showing all articles");
        assert_eq!(filter.select(0, None).notice.message, "Showing all articles");
    }

    #[test]
    fn every_post_stays_visible() {
        let mut filter = CategoryFilter::new();
        assert_eq!(filter.select(3, Some("pediatrics")).posts, PostVisibility::All);
    }
}
