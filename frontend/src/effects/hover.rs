/// Pointer-hover lift for cards and call-to-action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverLift {
    pub selector: &'static str,
    pub lift_px: u32,
    pub transition: Option<&'static str>,
}

pub const LIFTS: [HoverLift; 3] = [
    HoverLift {
        selector: ".specialty-card, .doctor-card, .blog-card",
        lift_px: 4,
        transition: None,
    },
    HoverLift {
        selector: ".doctor-professional-card, .blog-post-professional, .department-card",
        lift_px: 8,
        transition: Some("transform 0.3s ease"),
    },
    HoverLift {
        selector: ".btn-appointment, .btn-profile, .btn-read-more, .btn-read-featured",
        lift_px: 2,
        transition: Some("transform 0.2s ease"),
    },
];

impl HoverLift {
    pub fn enter_styles(&self) -> Vec<(&'static str, String)> {
        let mut styles = vec![("transform", format!("translateY(-{}px)", self.lift_px))];
        if let Some(transition) = self.transition {
            styles.push(("transition", transition.to_string()));
        }
        styles
    }

    pub fn leave_styles(&self) -> [(&'static str, &'static str); 1] {
        [("transform", "translateY(0)")]
    }
}
