//! Engine-neutral description of the page's scroll and entrance animations.
//!
//! Sections describe *what* should move with a [`Tween`] and *when* with a
//! [`Trigger`]; a [`VisibilityAnimator`] turns that into real motion. The
//! browser implementation lives in `frontend::motion`.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Pose {
    pub const REST: Self = Self {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        ..Self::REST
    };

    pub const fn offset(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub const fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            trim_float(self.x),
            trim_float(self.y),
            trim_float(self.scale)
        )
    }

    pub fn opacity_css(&self) -> String {
        trim_float(self.opacity.clamp(0.0, 1.0))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Easing {
    Power2InOut,
    Power3Out,
    BackOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Self::Power2InOut => "cubic-bezier(0.45, 0, 0.55, 1)",
            Self::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Self::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Fires when the top of `anchor` (or of the targets themselves) crosses the
/// line `viewport_fraction` of the way down the viewport.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Trigger {
    pub anchor: Option<&'static str>,
    pub viewport_fraction: f64,
}

impl Trigger {
    pub const fn top_at(viewport_fraction: f64) -> Self {
        Self {
            anchor: None,
            viewport_fraction,
        }
    }

    pub const fn on(mut self, anchor: &'static str) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Root margin that shrinks the observed viewport to the trigger line.
    pub fn root_margin(&self) -> String {
        let fraction = self.viewport_fraction.clamp(0.0, 1.0);
        let inset = ((1.0 - fraction) * 100.0).round();
        format!("0px 0px -{}% 0px", trim_float(inset))
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: u32,
    pub easing: Easing,
    pub delay_ms: u32,
    pub stagger_ms: u32,
    pub once: bool,
}

impl Tween {
    pub const fn new(from: Pose, to: Pose, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing: Easing::Power3Out,
            delay_ms: 0,
            stagger_ms: 0,
            once: true,
        }
    }

    /// Fade in while sliding from the given offset back to rest.
    pub const fn slide_in(x: f64, y: f64, duration_ms: u32) -> Self {
        Self::new(Pose::HIDDEN.offset(x, y), Pose::REST, duration_ms)
    }

    pub const fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn staggered(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub const fn from_scale(mut self, scale: f64) -> Self {
        self.from.scale = scale;
        self
    }

    pub const fn repeating(mut self) -> Self {
        self.once = false;
        self
    }

    pub fn start_delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_ms
            .saturating_add(self.stagger_ms.saturating_mul(index))
    }

    pub fn transition_css(&self) -> String {
        let ease = self.easing.css();
        let duration = self.duration_ms;
        format!("transform {duration}ms {ease}, opacity {duration}ms {ease}")
    }
}

/// Decides whether an intersection change should play the tween.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct VisibilityLatch {
    once: bool,
    fired: bool,
}

impl VisibilityLatch {
    pub const fn once() -> Self {
        Self {
            once: true,
            fired: false,
        }
    }

    pub const fn repeating() -> Self {
        Self {
            once: false,
            fired: false,
        }
    }

    pub fn for_tween(tween: &Tween) -> Self {
        if tween.once {
            Self::once()
        } else {
            Self::repeating()
        }
    }

    pub fn observe(&mut self, intersecting: bool) -> bool {
        if !intersecting || (self.once && self.fired) {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn is_spent(&self) -> bool {
        self.once && self.fired
    }
}

/// Undoes a registration when dropped or explicitly unregistered.
pub struct Registration {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Registration {
    pub fn noop() -> Self {
        Self { teardown: None }
    }

    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn unregister(mut self) {
        self.run_teardown();
    }

    fn run_teardown(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.run_teardown();
    }
}

pub trait VisibilityAnimator {
    /// Missing targets yield a no-op registration.
    fn register(&self, targets: &str, trigger: Trigger, tween: Tween) -> Registration;

    /// Plays the tween on the targets right away.
    fn play(&self, targets: &str, tween: Tween);
}

fn trim_float(value: f64) -> String {
    let rounded = (value * 1_000.0).round() / 1_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn pose_renders_transform_and_opacity() {
        let pose = Pose::HIDDEN.offset(-100.0, 0.0).scaled(0.8);
        assert_eq!(pose.transform(), "translate3d(-100px, 0px, 0) scale(0.8)");
        assert_eq!(pose.opacity_css(), "0");
        assert_eq!(Pose::REST.opacity_css(), "1");
    }

    #[test]
    fn trigger_line_becomes_bottom_root_margin() {
        assert_eq!(Trigger::top_at(0.8).root_margin(), "0px 0px -20% 0px");
        assert_eq!(Trigger::top_at(0.85).root_margin(), "0px 0px -15% 0px");
        assert_eq!(Trigger::top_at(1.0).root_margin(), "0px 0px -0% 0px");
    }

    #[test]
    fn trigger_anchor_is_optional() {
        let trigger = Trigger::top_at(0.8).on(".about-section");
        assert_eq!(trigger.anchor, Some(".about-section"));
        assert_eq!(Trigger::top_at(0.8).anchor, None);
    }

    #[test]
    fn stagger_offsets_each_target() {
        let tween = Tween::slide_in(0.0, 50.0, 800).delayed(400).staggered(100);
        assert_eq!(tween.start_delay_ms(0), 400);
        assert_eq!(tween.start_delay_ms(3), 700);
    }

    #[test]
    fn transition_uses_duration_and_easing() {
        let tween = Tween::slide_in(0.0, 30.0, 800).eased(Easing::BackOut);
        assert_eq!(
            tween.transition_css(),
            "transform 800ms cubic-bezier(0.34, 1.56, 0.64, 1), opacity 800ms cubic-bezier(0.34, 1.56, 0.64, 1)"
        );
    }

    #[test]
    fn one_shot_latch_does_not_refire_on_scroll_back() {
        let mut latch = VisibilityLatch::once();

        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_spent());
    }

    #[test]
    fn repeating_latch_fires_on_every_entry() {
        let tween = Tween::slide_in(0.0, 10.0, 100).repeating();
        let mut latch = VisibilityLatch::for_tween(&tween);

        assert!(latch.observe(true));
        assert!(latch.observe(true));
        assert!(!latch.is_spent());
    }

    #[test]
    fn registration_tears_down_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let registration = Registration::new(move || counter.set(counter.get() + 1));

        registration.unregister();
        assert_eq!(calls.get(), 1);

        let counter = calls.clone();
        drop(Registration::new(move || counter.set(counter.get() + 1)));
        assert_eq!(calls.get(), 2);

        drop(Registration::noop());
        assert_eq!(calls.get(), 2);
    }
}
