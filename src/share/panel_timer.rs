//! src/share/panel_timer.rs
//!
//! Two-stage show/fade timer for the share-links panel.
//!
//! A show request makes the panel visible with the fade-in class, keeps it
//! there for [`DWELL`], switches to the fade-out class for [`FADE`], then hides
//! it. Every request cancels whatever is still pending before re-arming, so at
//! most one chain is ever live and a late request always gets a full cycle.

use std::time::Duration;

use tracing::debug;

use crate::timer::{Scheduler, TaskHandle};

/// How long the panel stays fully shown before it starts fading.
pub const DWELL: Duration = Duration::from_millis(3_000);

/// How long the fade-out presentation lasts before the panel is hidden.
pub const FADE: Duration = Duration::from_millis(500);

/// Mutually exclusive presentation classes driving the fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationClass {
    FadeIn,
    FadeOut,
}

impl PresentationClass {
    pub fn as_str(self) -> &'static str {
        match self {
            PresentationClass::FadeIn => "share_links_fade_in",
            PresentationClass::FadeOut => "share_links_fade_out",
        }
    }
}

/// The UI element the timer drives. It never creates or destroys it.
pub trait PanelSurface {
    fn set_display(&mut self, visible: bool);
    fn set_presentation_class(&mut self, class: PresentationClass, enabled: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    FadingIn,
    FadingOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PanelTask {
    BeginFadeOut,
    FinishHide,
}

/// A task the timer has armed, with the deadline it was armed for.
#[derive(Clone, Copy, Debug)]
struct Armed {
    handle: TaskHandle,
    deadline: Duration,
}

/// Visibility state of one panel plus its two pending-task slots.
#[derive(Debug)]
pub struct PanelTimer {
    visibility: Visibility,
    fade_out: Option<Armed>,
    hide: Option<Armed>,
    scheduler: Scheduler<PanelTask>,
}

impl PanelTimer {
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Hidden,
            fade_out: None,
            hide: None,
            scheduler: Scheduler::new(),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Deadline of the armed "begin fade-out" task, if any.
    pub fn pending_fade_out(&self) -> Option<Duration> {
        self.fade_out.map(|a| a.deadline)
    }

    /// Deadline of the armed "finish hide" task, if any.
    pub fn pending_hide(&self) -> Option<Duration> {
        self.hide.map(|a| a.deadline)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Show the panel now and restart the dwell/fade cycle from `now`.
    pub fn request_show<S: PanelSurface + ?Sized>(&mut self, now: Duration, surface: &mut S) {
        self.cancel_pending();

        surface.set_display(true);
        surface.set_presentation_class(PresentationClass::FadeOut, false);
        surface.set_presentation_class(PresentationClass::FadeIn, true);
        self.visibility = Visibility::FadingIn;

        let deadline = now + DWELL;
        self.fade_out = Some(self.arm(deadline, PanelTask::BeginFadeOut));
        debug!(now_ms = now.as_millis() as u64, fade_at_ms = deadline.as_millis() as u64, "share panel shown");
    }

    /// Run every task due at or before `now`. Returns how many fired.
    pub fn advance<S: PanelSurface + ?Sized>(&mut self, now: Duration, surface: &mut S) -> usize {
        let mut fired = 0;
        while let Some(due) = self.scheduler.pop_due(now) {
            fired += 1;
            match due.task {
                PanelTask::BeginFadeOut => {
                    self.fade_out = None;
                    surface.set_presentation_class(PresentationClass::FadeIn, false);
                    surface.set_presentation_class(PresentationClass::FadeOut, true);
                    self.visibility = Visibility::FadingOut;

                    if let Some(a) = self.hide.take() {
                        self.scheduler.cancel(a.handle);
                    }
                    // measured from the deadline, not from when we were polled
                    let deadline = due.deadline + FADE;
                    self.hide = Some(self.arm(deadline, PanelTask::FinishHide));
                    debug!(hide_at_ms = deadline.as_millis() as u64, "share panel fading out");
                }
                PanelTask::FinishHide => {
                    self.hide = None;
                    surface.set_display(false);
                    self.visibility = Visibility::Hidden;
                    debug!(at_ms = due.deadline.as_millis() as u64, "share panel hidden");
                }
            }
        }
        fired
    }

    /// Cancel both pending tasks. A no-op when neither is armed.
    pub fn cancel_pending(&mut self) {
        for armed in [self.fade_out.take(), self.hide.take()].into_iter().flatten() {
            self.scheduler.cancel(armed.handle);
        }
    }

    fn arm(&mut self, deadline: Duration, task: PanelTask) -> Armed {
        Armed {
            handle: self.scheduler.schedule_at(deadline, task),
            deadline,
        }
    }
}

impl Default for PanelTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the surface state and checks class exclusivity on every call.
    #[derive(Default, Debug)]
    struct FakeSurface {
        visible: bool,
        fade_in: bool,
        fade_out: bool,
        calls: usize,
    }

    impl PanelSurface for FakeSurface {
        fn set_display(&mut self, visible: bool) {
            self.visible = visible;
            self.calls += 1;
        }

        fn set_presentation_class(&mut self, class: PresentationClass, enabled: bool) {
            match class {
                PresentationClass::FadeIn => self.fade_in = enabled,
                PresentationClass::FadeOut => self.fade_out = enabled,
            }
            self.calls += 1;
            assert!(!(self.fade_in && self.fade_out), "both fade classes active");
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn armed(t: &PanelTimer) -> usize {
        t.fade_out.is_some() as usize + t.hide.is_some() as usize
    }

    #[test]
    fn starts_hidden_with_nothing_armed() {
        let t = PanelTimer::new();
        assert_eq!(t.visibility(), Visibility::Hidden);
        assert_eq!(t.next_deadline(), None);
        assert_eq!(armed(&t), 0);
    }

    #[test]
    fn full_cycle_timing() {
        let mut t = PanelTimer::new();
        let mut s = FakeSurface::default();

        t.request_show(ms(0), &mut s);
        assert!(s.visible && s.fade_in && !s.fade_out);
        assert_eq!(t.pending_fade_out(), Some(ms(3_000)));

        assert_eq!(t.advance(ms(2_999), &mut s), 0);
        assert_eq!(t.visibility(), Visibility::FadingIn);

        assert_eq!(t.advance(ms(3_000), &mut s), 1);
        assert_eq!(t.visibility(), Visibility::FadingOut);
        assert!(s.visible && !s.fade_in && s.fade_out);
        assert_eq!(t.pending_hide(), Some(ms(3_500)));
        assert_eq!(t.pending_fade_out(), None);

        assert_eq!(t.advance(ms(3_499), &mut s), 0);
        assert!(s.visible);

        assert_eq!(t.advance(ms(3_500), &mut s), 1);
        assert_eq!(t.visibility(), Visibility::Hidden);
        assert!(!s.visible);
        assert_eq!(t.next_deadline(), None);
    }

    #[test]
    fn coarse_advance_runs_whole_chain() {
        let mut t = PanelTimer::new();
        let mut s = FakeSurface::default();

        t.request_show(ms(0), &mut s);
        assert_eq!(t.advance(ms(10_000), &mut s), 2);
        assert_eq!(t.visibility(), Visibility::Hidden);
        assert!(!s.visible);
    }

    #[test]
    fn late_poll_does_not_stretch_fade() {
        let mut t = PanelTimer::new();
        let mut s = FakeSurface::default();

        t.request_show(ms(0), &mut s);
        t.advance(ms(3_200), &mut s);
        assert_eq!(t.pending_hide(), Some(ms(3_500)));
    }

    #[test]
    fn restart_resets_the_clock() {
        let mut t = PanelTimer::new();
        let mut s = FakeSurface::default();

        t.request_show(ms(0), &mut s);
        t.advance(ms(1_000), &mut s);
        t.request_show(ms(1_000), &mut s);

        // the original 3000/3500 deadlines are gone
        assert_eq!(t.advance(ms(3_500), &mut s), 0);
        assert_eq!(t.visibility(), Visibility::FadingIn);
        assert!(s.visible);

        assert_eq!(t.advance(ms(3_999), &mut s), 0);
        assert_eq!(t.advance(ms(4_000), &mut s), 1);
        assert_eq!(t.visibility(), Visibility::FadingOut);

        assert_eq!(t.advance(ms(4_499), &mut s), 0);
        assert!(s.visible);
        assert_eq!(t.advance(ms(4_500), &mut s), 1);
        assert!(!s.visible);
    }

    #[test]
    fn request_during_fade_out_cancels_pending_hide() {
        let mut t = PanelTimer::new();
        let mut s = FakeSurface::default();

        t.request_show(ms(0), &mut s);
        t.advance(ms(3_100), &mut s);
        assert_eq!(t.visibility(), Visibility::FadingOut);

        t.request_show(ms(3_200), &mut s);
        assert_eq!(t.visibility(), Visibility::FadingIn);
        assert!(s.fade_in && !s.fade_out);
        assert_eq!(t.pending_hide(), None);

        // the stale hide at 3500 must not fire
        assert_eq!(t.advance(ms(3_600), &mut s), 0);
        assert!(s.visible);

        t.advance(ms(6_200), &mut s);
        assert_eq!(t.visibility(), Visibility::FadingOut);
        t.advance(ms(6_700), &mut s);
        assert_eq!(t.visibility(), Visibility::Hidden);
    }

    #[test]
    fn request_after_hidden_starts_fresh_cycle() {
        let mut t = PanelTimer::new();
        let mut s = FakeSurface::default();

        t.request_show(ms(0), &mut s);
        t.advance(ms(4_000), &mut s);
        assert!(!s.visible);

        t.request_show(ms(5_000), &mut s);
        assert!(s.visible && s.fade_in && !s.fade_out);
        assert_eq!(t.pending_fade_out(), Some(ms(8_000)));
    }

    #[test]
    fn at_most_one_task_armed_under_request_storm() {
        let mut t = PanelTimer::new();
        let mut s = FakeSurface::default();

        let mut now = 0;
        for step in 0..200u64 {
            now += (step * 37) % 900;
            if step % 3 == 0 {
                t.request_show(ms(now), &mut s);
            }
            t.advance(ms(now), &mut s);
            assert!(armed(&t) <= 1, "step {step}: {} tasks armed", armed(&t));
            assert!(t.scheduler.len() <= 1);
        }
    }

    #[test]
    fn cancel_with_nothing_armed_is_a_noop() {
        let mut t = PanelTimer::new();
        let mut s = FakeSurface::default();

        t.request_show(ms(0), &mut s);
        t.advance(ms(3_500), &mut s);
        assert_eq!(t.visibility(), Visibility::Hidden);
        assert!(t.scheduler.is_empty());
        let calls = s.calls;

        t.cancel_pending();
        t.cancel_pending();
        assert_eq!(t.visibility(), Visibility::Hidden);
        assert!(t.scheduler.is_empty());
        assert_eq!(armed(&t), 0);
        assert_eq!(s.calls, calls);
        assert!(!s.visible);

        t.request_show(ms(5_000), &mut s);
        assert_eq!(t.pending_fade_out(), Some(ms(5_000) + DWELL));
        assert_eq!(t.scheduler.len(), 1);
    }

    #[test]
    fn pending_observers_report_their_own_task() {
        let mut t = PanelTimer::new();
        let mut s = FakeSurface::default();

        t.request_show(ms(200), &mut s);
        assert_eq!(t.pending_fade_out(), Some(ms(3_200)));
        assert_eq!(t.pending_hide(), None);

        t.advance(ms(3_200), &mut s);
        assert_eq!(t.pending_fade_out(), None);
        assert_eq!(t.pending_hide(), Some(ms(3_700)));

        // an unrelated deadline in the queue must not leak into either observer
        t.scheduler.schedule_at(ms(100), PanelTask::FinishHide);
        assert_eq!(t.next_deadline(), Some(ms(100)));
        assert_eq!(t.pending_hide(), Some(ms(3_700)));
        assert_eq!(t.pending_fade_out(), None);
    }

    #[test]
    fn independent_timers_do_not_interfere() {
        let mut a = PanelTimer::new();
        let mut b = PanelTimer::new();
        let mut sa = FakeSurface::default();
        let mut sb = FakeSurface::default();

        a.request_show(ms(0), &mut sa);
        b.request_show(ms(2_000), &mut sb);

        a.advance(ms(3_500), &mut sa);
        b.advance(ms(3_500), &mut sb);
        assert!(!sa.visible);
        assert!(sb.visible && sb.fade_in);
    }
}
