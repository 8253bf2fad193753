/// A set of cards that fade and slide in once they scroll into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealGroup {
    pub classes: &'static [&'static str],
    /// Subset of `classes` whose entry is delayed by sibling position.
    pub staggered: &'static [&'static str],
    pub offset_px: u32,
    pub duration_s: f32,
}

pub const CARD_GROUP: RevealGroup = RevealGroup {
    classes: &["specialty-card", "doctor-card", "blog-card", "stat-card"],
    staggered: &[],
    offset_px: 20,
    duration_s: 0.6,
};

pub const PROFESSIONAL_GROUP: RevealGroup = RevealGroup {
    classes: &[
        "doctor-professional-card",
        "blog-post-professional",
        "department-card",
        "featured-blog-post",
        "blog-newsletter-card",
    ],
    staggered: &["doctor-professional-card", "blog-post-professional", "department-card"],
    offset_px: 30,
    duration_s: 0.8,
};

pub const STAGGER_STEP_MS: u32 = 100;

pub const REVEALED: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

impl RevealGroup {
    pub fn selector(&self) -> String {
        self.classes.iter().map(|c| format!(".{}", c)).collect::<Vec<_>>().join(", ")
    }

    pub fn hidden_styles(&self) -> [(&'static str, String); 3] {
        [
            ("opacity", "0".to_string()),
            ("transform", format!("translateY({}px)", self.offset_px)),
            (
                "transition",
                format!("opacity {0}s ease, transform {0}s ease", self.duration_s),
            ),
        ]
    }

    /// `transition-delay` for an element carrying `element_classes` at `sibling_index`.
    pub fn stagger_delay<'a, I>(&self, element_classes: I, sibling_index: usize) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        element_classes
            .into_iter()
            .any(|class| self.staggered.iter().any(|s| *s == class))
            .then(|| format!("{}ms", sibling_index as u32 * STAGGER_STEP_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_cover_group_classes() {
        assert_eq!(CARD_GROUP.selector(), ".specialty-card, .doctor-card, .blog-card, .stat-card");
        assert!(PROFESSIONAL_GROUP.selector().ends_with(".blog-newsletter-card"));
    }

    #[test]
    fn hidden_styles_follow_group_settings() {
        let card = CARD_GROUP.hidden_styles();
        assert_eq!(card[1], ("transform", "translateY(20px)".to_string()));
        assert_eq!(card[2].1, "opacity 0.6s ease, transform 0.6s ease");

        let pro = PROFESSIONAL_GROUP.hidden_styles();
        assert_eq!(pro[0], ("opacity", "0".to_string()));
        assert_eq!(pro[1].1, "translateY(30px)");
        assert_eq!(pro[2].1, "opacity 0.8s ease, transform 0.8s ease");
    }

    #[test]
    fn stagger_is_proportional_to_sibling_index() {
        let delay = PROFESSIONAL_GROUP.stagger_delay(["card", "department-card"], 3);
        assert_eq!(delay.as_deref(), Some("300ms"));
        assert_eq!(
            PROFESSIONAL_GROUP.stagger_delay(["blog-post-professional"], 0).as_deref(),
            Some("0ms")
        );
    }

    #[test]
    fn only_listed_classes_are_staggered() {
        assert_eq!(PROFESSIONAL_GROUP.stagger_delay(["featured-blog-post"], 2), None);
        assert_eq!(CARD_GROUP.stagger_delay(["doctor-card"], 5), None);
    }
}
