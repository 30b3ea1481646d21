/// Fraction of a section that has to be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// This observation flipped the latch; the caller should stop observing.
    Revealed,
    Unchanged,
}

/// What a section should look like right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Nothing observed yet, e.g. server-rendered or not hydrated. Shown as is.
    #[default]
    Unobserved,
    /// Observed off screen, waiting to fade in.
    Hidden,
    Revealed,
}

/// One-way visibility latch for a single page section.
///
/// Flips to visible the first time the section is seen intersecting the
/// viewport by at least `threshold`. Once visible it stays visible no matter
/// what later observations say. Until the first observation the section is
/// left visible so a page that never hydrates still shows its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    observed: bool,
    revealed: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            observed: false,
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn phase(&self) -> RevealPhase {
        match (self.revealed, self.observed) {
            (true, _) => RevealPhase::Revealed,
            (false, true) => RevealPhase::Hidden,
            (false, false) => RevealPhase::Unobserved,
        }
    }

    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> Reveal {
        if self.revealed || ratio.is_nan() {
            return Reveal::Unchanged;
        }
        self.observed = true;
        if !intersecting || ratio < self.threshold {
            return Reveal::Unchanged;
        }
        self.revealed = true;
        Reveal::Revealed
    }

    /// Shows the section without an observation, for when the viewport can't
    /// be observed at all.
    pub fn fail_open(&mut self) -> Reveal {
        if self.revealed {
            Reveal::Unchanged
        } else {
            self.revealed = true;
            Reveal::Revealed
        }
    }
}

/// Class list fragment for a section's fade-in state.
pub fn reveal_class(phase: RevealPhase) -> &'static str {
    match phase {
        RevealPhase::Unobserved => "opacity-100",
        RevealPhase::Hidden => "opacity-0",
        RevealPhase::Revealed => "opacity-100 animate-fadeIn",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_starts_hidden() {
        let latch = RevealLatch::default();
        assert!(!latch.is_revealed());
        assert_eq!(latch.threshold(), REVEAL_THRESHOLD);
    }

    #[test]
    fn test_latch_needs_threshold() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.observe(true, 0.05), Reveal::Unchanged);
        assert_eq!(latch.observe(false, 0.5), Reveal::Unchanged);
        assert!(!latch.is_revealed());

        assert_eq!(latch.observe(true, 0.1), Reveal::Revealed);
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_never_hides_again() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.observe(true, 0.4), Reveal::Revealed);
        assert_eq!(latch.observe(false, 0.0), Reveal::Unchanged);
        assert!(latch.is_revealed());
        assert_eq!(latch.observe(true, 0.9), Reveal::Unchanged);
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_nan_ratio_is_ignored() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.observe(true, f64::NAN), Reveal::Unchanged);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_fail_open() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.fail_open(), Reveal::Revealed);
        assert_eq!(latch.fail_open(), Reveal::Unchanged);
        assert_eq!(latch.observe(true, 1.0), Reveal::Unchanged);
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealLatch::new(3.0).threshold(), 1.0);
        assert_eq!(RevealLatch::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn test_unobserved_section_stays_visible() {
        let latch = RevealLatch::default();
        assert_eq!(latch.phase(), RevealPhase::Unobserved);
        assert_eq!(reveal_class(latch.phase()), "opacity-100");
    }

    #[test]
    fn test_phase_follows_observations() {
        let mut latch = RevealLatch::default();
        latch.observe(true, f64::NAN);
        assert_eq!(latch.phase(), RevealPhase::Unobserved);

        latch.observe(false, 0.0);
        assert_eq!(latch.phase(), RevealPhase::Hidden);
        assert_eq!(reveal_class(latch.phase()), "opacity-0");

        latch.observe(true, 0.5);
        assert_eq!(latch.phase(), RevealPhase::Revealed);
        assert!(reveal_class(latch.phase()).contains("animate-fadeIn"));
    }
}
