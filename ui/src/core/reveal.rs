//! One-shot "reveal on first sight" state machine.
//!
//! `Hidden -> Revealed` happens at most once per instance; later intersection
//! readings, including the element leaving and re-entering the viewport, are
//! ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    state: RevealState,
    threshold: f64,
}

impl Reveal {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: RevealState::Hidden,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feed one intersection ratio. Returns `true` only for the reading that
    /// performs the transition.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.is_revealed() || ratio.is_nan() {
            return false;
        }
        let crossed = if self.threshold == 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        };
        if crossed {
            self.state = RevealState::Revealed;
        }
        crossed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let reveal = Reveal::new(0.2);
        assert_eq!(reveal.state(), RevealState::Hidden);
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut reveal = Reveal::new(0.3);
        assert!(!reveal.observe(0.1));
        assert!(!reveal.observe(0.29));
        assert!(!reveal.is_revealed());
    }

    #[test]
    fn fires_at_most_once() {
        let mut reveal = Reveal::new(0.2);
        let fired: Vec<bool> = [0.0, 0.5, 0.0, 0.9, 0.0, 1.0]
            .into_iter()
            .map(|ratio| reveal.observe(ratio))
            .collect();
        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(fired[1]);
        assert!(reveal.is_revealed());
    }

    #[test]
    fn zero_threshold_needs_some_overlap() {
        let mut reveal = Reveal::new(0.0);
        assert!(!reveal.observe(0.0));
        assert!(reveal.observe(0.01));
    }

    #[test]
    fn nan_reading_is_ignored() {
        let mut reveal = Reveal::new(0.2);
        assert!(!reveal.observe(f64::NAN));
        assert!(!reveal.is_revealed());
    }
}
