use crate::config::MOBILE_BREAKPOINT_PX;

/// Inline overrides that turn the nav list into a dropdown below the header.
const NAV_LIST_OPEN: [(&str, &str); 11] = [
    ("display", "flex"),
    ("flex-direction", "column"),
    ("position", "absolute"),
    ("top", "100%"),
    ("left", "0"),
    ("right", "0"),
    ("background", "white"),
    ("box-shadow", "var(--shadow-lg)"),
    ("padding", "var(--space-16)"),
    ("gap", "var(--space-16)"),
    ("z-index", "1001"),
];

/// One override per hamburger bar, top to bottom, forming an X.
const BARS_OPEN: [(&str, &str); 3] = [
    ("transform", "rotate(45deg) translate(5px, 5px)"),
    ("opacity", "0"),
    ("transform", "rotate(-45deg) translate(7px, -6px)"),
];

/// Style writes for the nav list and the toggle's bars. An empty value clears the property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStyles {
    pub nav_list: Vec<(&'static str, &'static str)>,
    pub bars: Vec<(&'static str, &'static str)>,
}

impl MenuStyles {
    fn opened() -> Self {
        Self { nav_list: NAV_LIST_OPEN.to_vec(), bars: BARS_OPEN.to_vec() }
    }

    fn closed() -> Self {
        Self {
            nav_list: NAV_LIST_OPEN.iter().map(|(prop, _)| (*prop, "")).collect(),
            bars: BARS_OPEN.iter().map(|(prop, _)| (*prop, "")).collect(),
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.nav_list.iter().chain(self.bars.iter()).all(|(_, value)| value.is_empty())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> MenuStyles {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }

    pub fn open(&mut self) -> MenuStyles {
        self.open = true;
        MenuStyles::opened()
    }

    /// Safe to call when already closed; the clearing writes are harmless.
    pub fn close(&mut self) -> MenuStyles {
        self.open = false;
        MenuStyles::closed()
    }

    pub fn on_resize(&mut self, viewport_width: f64) -> Option<MenuStyles> {
        (self.open && viewport_width > MOBILE_BREAKPOINT_PX).then(|| self.close())
    }

    /// `inside` is true when the click landed in the nav region or on the toggle.
    pub fn on_document_click(&mut self, inside: bool) -> Option<MenuStyles> {
        (self.open && !inside).then(|| self.close())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_clears_every_override() {
        let mut menu = MobileMenu::new();
        let opened = menu.toggle();
        assert!(menu.is_open());
        assert_eq!(opened.nav_list.len(), 11);
        assert!(opened.nav_list.contains(&("z-index", "1001")));
        assert_eq!(opened.bars[1], ("opacity", "0"));

        let closed = menu.toggle();
        assert!(!menu.is_open());
        assert!(closed.is_cleared());
        let props: Vec<_> = closed.nav_list.iter().map(|(p, _)| *p).collect();
        let opened_props: Vec<_> = opened.nav_list.iter().map(|(p, _)| *p).collect();
        assert_eq!(props, opened_props);
    }

    #[test]
    fn closing_closed_menu_is_harmless() {
        let mut menu = MobileMenu::new();
        assert!(menu.close().is_cleared());
        assert!(!menu.is_open());
    }

    #[test]
    fn open_is_idempotent() {
        let mut menu = MobileMenu::new();
        assert_eq!(menu.open(), menu.open());
        assert!(menu.is_open());
    }

    #[test]
    fn wide_resize_closes_open_menu() {
        let mut menu = MobileMenu::new();
        assert!(menu.on_resize(1024.0).is_none());

        menu.open();
        assert!(menu.on_resize(768.0).is_none());
        assert!(menu.is_open());
        assert!(menu.on_resize(769.0).unwrap().is_cleared());
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_closes() {
        let mut menu = MobileMenu::new();
        menu.open();
        assert!(menu.on_document_click(true).is_none());
        assert!(menu.is_open());
        assert!(menu.on_document_click(false).is_some());
        assert!(!menu.is_open());
        assert!(menu.on_document_click(false).is_none());
    }
}
