use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;
use yew::AppHandle;

use crate::config::{NOTIFICATION_DISPLAY_MS, NOTIFICATION_ENTER_DELAY_MS, NOTIFICATION_EXIT_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Anything that isn't a known severity name falls back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Severity::Success => "var(--color-success)",
            Severity::Error => "var(--color-error)",
            Severity::Warning => "var(--color-warning)",
            Severity::Info => "var(--hospital-teal)",
        }
    }
}

/// A request to show a message to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self { message: message.into(), severity }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone)]
struct Entry {
    id: u32,
    notice: Notice,
    phase: Phase,
}

/// Live notifications and where each one is on its enter/shown/leave timeline.
///
/// Phases only move when a timer or a click says so; nothing here reads a clock.
#[derive(Debug, Default)]
pub struct NotificationStack {
    next_id: u32,
    entries: Vec<Entry>,
}

impl NotificationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Entry { id, notice, phase: Phase::Entering });
        id
    }

    fn entry_mut(&mut self, id: u32) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Slides an entering notification into view. Anything further along is left alone.
    pub fn enter(&mut self, id: u32) -> bool {
        match self.entry_mut(id) {
            Some(entry) if entry.phase == Phase::Entering => {
                entry.phase = Phase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Starts the exit transition. False when it is already leaving or gone.
    pub fn leave(&mut self, id: u32) -> bool {
        match self.entry_mut(id) {
            Some(entry) if entry.phase != Phase::Leaving => {
                entry.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// A second removal of the same id finds nothing and returns false.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

#[cfg(test)]
impl NotificationStack {
    fn phase(&self, id: u32) -> Option<Phase> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.phase)
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn notification_style(severity: Severity, phase: Phase) -> String {
    let offset = match phase {
        Phase::Shown => "translateX(0)",
        Phase::Entering | Phase::Leaving => "translateX(100%)",
    };
    format!(
        "position: fixed; top: 100px; right: 20px; \
         padding: var(--space-16) var(--space-24); border-radius: var(--radius-base); \
         box-shadow: var(--shadow-lg); z-index: 10000; font-size: var(--font-size-sm); \
         font-weight: var(--font-weight-medium); max-width: 400px; word-wrap: break-word; \
         background-color: {}; color: white; transform: {}; \
         transition: transform var(--duration-normal) var(--ease-standard);",
        severity.background(),
        offset,
    )
}

pub enum NotificationMsg {
    Show(Notice),
    Enter(u32),
    Dismiss(u32),
    Leave(u32),
    Remove(u32),
}

pub struct NotificationCenter {
    stack: NotificationStack,
}

impl NotificationCenter {
    fn schedule(ctx: &Context<Self>, delay: u32, msg: NotificationMsg) {
        let link = ctx.link().clone();
        // Nothing cancels these; a timer that fires for a finished entry is a no-op.
        Timeout::new(delay, move || link.send_message(msg)).forget();
    }
}

impl Component for NotificationCenter {
    type Message = NotificationMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { stack: NotificationStack::new() }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NotificationMsg::Show(notice) => {
                debug!("Showing {} notification: {}", notice.severity.as_str(), notice.message);
                let id = self.stack.push(notice);
                Self::schedule(ctx, NOTIFICATION_ENTER_DELAY_MS, NotificationMsg::Enter(id));
                Self::schedule(ctx, NOTIFICATION_DISPLAY_MS, NotificationMsg::Leave(id));
                Self::schedule(
                    ctx,
                    NOTIFICATION_DISPLAY_MS + NOTIFICATION_EXIT_MS,
                    NotificationMsg::Remove(id),
                );
                true
            }
            NotificationMsg::Enter(id) => self.stack.enter(id),
            NotificationMsg::Dismiss(id) => {
                let started = self.stack.leave(id);
                if started {
                    Self::schedule(ctx, NOTIFICATION_EXIT_MS, NotificationMsg::Remove(id));
                }
                started
            }
            NotificationMsg::Leave(id) => self.stack.leave(id),
            NotificationMsg::Remove(id) => {
                let removed = self.stack.remove(id);
                if removed {
                    debug!("Removed notification {}, {} still shown", id, self.stack.len());
                }
                removed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                { for self.stack.iter().map(|entry| {
                    let id = entry.id;
                    let onclick = ctx.link().callback(move |_: MouseEvent| NotificationMsg::Dismiss(id));
                    html! {
                        <div
                            key={id}
                            class={classes!("notification", format!("notification--{}", entry.notice.severity.as_str()))}
                            style={notification_style(entry.notice.severity, entry.phase)}
                            {onclick}
                        >
                            { &entry.notice.message }
                        </div>
                    }
                }) }
            </>
        }
    }
}

thread_local! {
    static CENTER: RefCell<Option<AppHandle<NotificationCenter>>> = RefCell::new(None);
}

/// Mounts the notification center into `root`. Call once at start-up.
pub fn mount(root: web_sys::Element) {
    let handle = yew::Renderer::<NotificationCenter>::with_root(root).render();
    CENTER.with(|center| *center.borrow_mut() = Some(handle));
}

pub fn notify(notice: Notice) {
    CENTER.with(|center| match center.borrow().as_ref() {
        Some(handle) => handle.send_message(NotificationMsg::Show(notice)),
        None => warn!("Notification center not mounted, dropping: {}", notice.message),
    });
}

pub fn show(message: &str, severity: Severity) {
    notify(Notice::new(message, severity));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_walk_the_full_lifetime_without_dismissal() {
        let mut stack = NotificationStack::new();
        let id = stack.push(Notice::info("Hello"));
        assert_eq!(stack.phase(id), Some(Phase::Entering));

        // enter timer, display timer, removal timer
        assert!(stack.enter(id));
        assert_eq!(stack.phase(id), Some(Phase::Shown));
        assert!(stack.leave(id));
        assert_eq!(stack.phase(id), Some(Phase::Leaving));
        assert!(stack.remove(id));
        assert!(stack.is_empty());
    }

    #[test]
    fn removal_timer_alone_removes_the_notification() {
        // Even if the earlier timers were lost or ran late, the last one still removes it.
        let mut stack = NotificationStack::new();
        let id = stack.push(Notice::new("Slow clock", Severity::Warning));
        assert!(stack.remove(id));
        assert_eq!(stack.phase(id), None);
        assert!(!stack.enter(id));
        assert!(!stack.leave(id));
    }

    #[test]
    fn click_dismissal_then_late_auto_timers_are_harmless() {
        let mut stack = NotificationStack::new();
        let id = stack.push(Notice::success("Saved"));
        stack.enter(id);

        assert!(stack.leave(id));
        assert!(stack.remove(id));

        // The auto-dismiss and removal timers fire later and find nothing.
        assert!(!stack.leave(id));
        assert!(!stack.remove(id));
    }

    #[test]
    fn second_dismissal_does_not_restart_exit() {
        let mut stack = NotificationStack::new();
        let id = stack.push(Notice::error("Oops"));
        assert!(stack.leave(id));
        assert!(!stack.leave(id));
        assert_eq!(stack.phase(id), Some(Phase::Leaving));
    }

    #[test]
    fn late_enter_timer_never_pulls_back_a_leaving_notification() {
        let mut stack = NotificationStack::new();
        let id = stack.push(Notice::info("Quick"));
        stack.leave(id);
        assert!(!stack.enter(id));
        assert_eq!(stack.phase(id), Some(Phase::Leaving));
    }

    #[test]
    fn notifications_stack_independently() {
        let mut stack = NotificationStack::new();
        let first = stack.push(Notice::info("one"));
        let second = stack.push(Notice::info("two"));
        assert_ne!(first, second);
        assert_eq!(stack.len(), 2);

        stack.remove(first);
        assert_eq!(stack.phase(first), None);
        assert_eq!(stack.phase(second), Some(Phase::Entering));
    }

    #[test]
    fn unknown_severity_uses_info_palette() {
        assert_eq!(Severity::from_name("debug"), Severity::Info);
        assert_eq!(Severity::from_name("warning"), Severity::Warning);
        assert_eq!(Severity::Info.background(), "var(--hospital-teal)");
    }

    #[test]
    fn style_slides_by_phase() {
        let shown = notification_style(Severity::Error, Phase::Shown);
        assert!(shown.contains("translateX(0)"));
        assert!(shown.contains("var(--color-error)"));
        let leaving = notification_style(Severity::Error, Phase::Leaving);
        assert!(leaving.contains("translateX(100%)"));
    }
}
