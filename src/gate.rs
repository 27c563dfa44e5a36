use crate::config::SiteConfig;
use crate::motion::{Easing, Tween, VisibilityLatch};

/// Elements animated by the post-loading entrance pass.
pub const ENTRANCE_TARGETS: &str = ".fade-in-up";

pub const ENTRANCE_TWEEN: Tween = Tween::slide_in(0.0, 100.0, 1_000)
    .eased(Easing::Power3Out)
    .staggered(200);

/// Delays below count from the first mount after the gate opens.
pub const HEADER_TWEEN: Tween = Tween::slide_in(0.0, -100.0, 1_000).delayed(2_200);

/// The hero timeline waits for the header to settle before it starts.
pub const HERO_TIMELINE_START_MS: u32 = 2_500;

pub const HERO_TITLE_TWEEN: Tween =
    Tween::slide_in(0.0, 100.0, 1_200).delayed(HERO_TIMELINE_START_MS);
pub const HERO_SUBTITLE_TWEEN: Tween =
    Tween::slide_in(0.0, 50.0, 1_000).delayed(HERO_TIMELINE_START_MS + 600);
pub const HERO_CTA_TWEEN: Tween =
    Tween::slide_in(0.0, 30.0, 800).delayed(HERO_TIMELINE_START_MS + 1_200);
pub const HERO_SOCIAL_TWEEN: Tween = Tween::slide_in(0.0, 20.0, 600)
    .delayed(HERO_TIMELINE_START_MS + 1_800)
    .staggered(100);
pub const HERO_PORTRAIT_TWEEN: Tween = Tween::slide_in(50.0, 0.0, 1_000)
    .from_scale(0.8)
    .eased(Easing::BackOut)
    .delayed(HERO_TIMELINE_START_MS + 1_700);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GatePhase {
    #[default]
    Loading,
    Ready,
}

/// Boot gate: the loading view stays up until the timer finishes it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LoadingGate {
    phase: GatePhase,
}

impl LoadingGate {
    pub fn phase(self) -> GatePhase {
        self.phase
    }

    pub fn is_ready(self) -> bool {
        self.phase == GatePhase::Ready
    }

    /// Time left on the loading view; `None` once the gate is open.
    pub fn delay_ms(self, config: &SiteConfig) -> Option<u32> {
        (!self.is_ready()).then_some(config.loading_gate_ms)
    }

    /// One-way; finishing twice keeps the gate ready.
    pub fn finish(self) -> Self {
        Self {
            phase: GatePhase::Ready,
        }
    }
}

/// Lets the entrance pass run once per page load, however often the root re-renders.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EntrancePass {
    latch: VisibilityLatch,
}

impl Default for EntrancePass {
    fn default() -> Self {
        Self {
            latch: VisibilityLatch::once(),
        }
    }
}

impl EntrancePass {
    pub fn claim(&mut self, gate: LoadingGate) -> bool {
        self.latch.observe(gate.is_ready())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_starts_loading_and_finishes_once() {
        let gate = LoadingGate::default();
        assert_eq!(gate.phase(), GatePhase::Loading);

        let ready = gate.finish();
        assert!(ready.is_ready());
        assert!(ready.finish().is_ready());
    }

    fn advance(gate: LoadingGate, config: &SiteConfig, elapsed_ms: u32) -> LoadingGate {
        match gate.delay_ms(config) {
            Some(delay) if elapsed_ms >= delay => gate.finish(),
            _ => gate,
        }
    }

    #[test]
    fn gate_opens_after_configured_loading_time() {
        let config = SiteConfig::default();
        let gate = LoadingGate::default();

        assert_eq!(gate.delay_ms(&config), Some(2_000));
        assert!(!advance(gate, &config, 1_999).is_ready());

        let ready = advance(gate, &config, 2_000);
        assert!(ready.is_ready());
        assert_eq!(ready.delay_ms(&config), None);
    }

    #[test]
    fn zero_loading_time_opens_immediately() {
        let config = SiteConfig::from_lookup(|name| {
            (name == "PORTFOLIO_LOADING_MS").then(|| "0".to_string())
        });
        assert!(advance(LoadingGate::default(), &config, 0).is_ready());
    }

    #[test]
    fn entrance_waits_for_ready_and_never_repeats() {
        let mut pass = EntrancePass::default();
        let mut gate = LoadingGate::default();

        // renders while loading
        assert!(!pass.claim(gate));
        assert!(!pass.claim(gate));

        gate = gate.finish();
        let plays: usize = (0..5).filter(|_| pass.claim(gate)).count();
        assert_eq!(plays, 1);
    }

    #[test]
    fn header_and_hero_wait_for_their_timeline() {
        assert_eq!(HEADER_TWEEN.start_delay_ms(0), 2_200);
        assert_eq!(HEADER_TWEEN.from.y, -100.0);

        let starts: Vec<u32> = [
            HERO_TITLE_TWEEN,
            HERO_SUBTITLE_TWEEN,
            HERO_CTA_TWEEN,
            HERO_PORTRAIT_TWEEN,
            HERO_SOCIAL_TWEEN,
        ]
        .iter()
        .map(|tween| tween.start_delay_ms(0))
        .collect();
        assert_eq!(starts, vec![2_500, 3_100, 3_700, 4_200, 4_300]);
        assert!(starts.iter().all(|start| *start > HEADER_TWEEN.delay_ms));

        assert_eq!(HERO_SOCIAL_TWEEN.start_delay_ms(2), 4_500);
        assert_eq!(HERO_PORTRAIT_TWEEN.from.scale, 0.8);
    }

    #[test]
    fn entrance_tween_rises_from_below_with_stagger() {
        assert_eq!(ENTRANCE_TWEEN.from.y, 100.0);
        assert_eq!(ENTRANCE_TWEEN.from.opacity, 0.0);
        assert_eq!(ENTRANCE_TWEEN.start_delay_ms(2), 400);
    }
}
