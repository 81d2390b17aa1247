/// One-shot fade/slide-in: becomes visible the first time enough of the
/// element intersects the viewport, and stays visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollReveal {
    threshold: f64,
    visible: bool,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl ScrollReveal {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed an intersection ratio; returns whether the element is revealed.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if !self.visible && intersection_ratio >= self.threshold && intersection_ratio > 0.0 {
            self.visible = true;
        }
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_once_threshold_is_crossed() {
        let mut r = ScrollReveal::new(0.25);
        assert!(!r.observe(0.1));
        assert!(r.observe(0.3));
    }

    #[test]
    fn never_reverts() {
        let mut r = ScrollReveal::default();
        r.observe(0.5);
        assert!(r.observe(0.0));
        assert!(r.is_visible());
    }

    #[test]
    fn zero_threshold_still_needs_an_intersection() {
        let mut r = ScrollReveal::new(0.0);
        assert!(!r.observe(0.0));
        assert!(r.observe(0.01));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(ScrollReveal::new(3.0).threshold(), 1.0);
    }
}
