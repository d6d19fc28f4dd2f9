//! Inline style computation for entrance animations.

/// How a revealable region should currently be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Shown,
    /// No visibility observation available: show the content, skip the animation.
    Static,
}

impl Phase {
    pub fn from_flags(visible: bool, supported: bool) -> Phase {
        match (supported, visible) {
            (false, _) => Phase::Static,
            (true, true) => Phase::Shown,
            (true, false) => Phase::Hidden,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub offset_px: u32,
    pub duration_s: f64,
    pub delay_s: f64,
    /// Added to the delay once per list index. Unbounded for long lists.
    pub stagger_s: f64,
}

pub const PROJECT_CARD: RevealStyle = RevealStyle {
    offset_px: 32,
    duration_s: 0.6,
    delay_s: 0.0,
    stagger_s: 0.12,
};

pub const EXPERIENCE_CARD: RevealStyle = RevealStyle {
    offset_px: 32,
    duration_s: 0.6,
    delay_s: 0.0,
    stagger_s: 0.1,
};

pub const SECTION: RevealStyle = RevealStyle {
    offset_px: 28,
    duration_s: 0.7,
    delay_s: 0.0,
    stagger_s: 0.0,
};

pub const FOOTER: RevealStyle = RevealStyle {
    offset_px: 24,
    duration_s: 0.7,
    delay_s: 0.0,
    stagger_s: 0.0,
};

pub const HERO: RevealStyle = RevealStyle {
    offset_px: 24,
    duration_s: 0.9,
    delay_s: 0.2,
    stagger_s: 0.0,
};

impl RevealStyle {
    pub fn css(&self, phase: Phase, index: usize) -> String {
        let (opacity, transform) = match phase {
            Phase::Hidden => ("0".to_string(), format!("translateY({}px)", self.offset_px)),
            Phase::Shown => ("1".to_string(), "translateY(0)".to_string()),
            Phase::Static => return "opacity: 1; transform: none;".to_string(),
        };
        format!(
            "opacity: {}; transform: {}; transition: {};",
            opacity,
            transform,
            self.transition(index)
        )
    }

    pub fn transition(&self, index: usize) -> String {
        let duration = seconds(self.duration_s);
        let delay = self.delay_s + self.stagger_s * index as f64;
        if delay > 0.0 {
            let delay = seconds(delay);
            format!(
                "opacity {}s ease {}s, transform {}s ease {}s",
                duration, delay, duration, delay
            )
        } else {
            format!("opacity {}s ease, transform {}s ease", duration, duration)
        }
    }
}

// Millisecond precision keeps 3 * 0.1 from printing as 0.30000000000000004.
fn seconds(value: f64) -> String {
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_from_flags() {
        assert_eq!(Phase::from_flags(false, true), Phase::Hidden);
        assert_eq!(Phase::from_flags(true, true), Phase::Shown);
        assert_eq!(Phase::from_flags(false, false), Phase::Static);
        assert_eq!(Phase::from_flags(true, false), Phase::Static);
    }

    #[test]
    fn hidden_card_is_offset_and_transparent() {
        assert_eq!(
            PROJECT_CARD.css(Phase::Hidden, 0),
            "opacity: 0; transform: translateY(32px); transition: opacity 0.6s ease, transform 0.6s ease;"
        );
    }

    #[test]
    fn shown_card_staggers_by_index() {
        assert_eq!(
            PROJECT_CARD.css(Phase::Shown, 1),
            "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease 0.12s, transform 0.6s ease 0.12s;"
        );
        assert_eq!(
            EXPERIENCE_CARD.transition(3),
            "opacity 0.6s ease 0.3s, transform 0.6s ease 0.3s"
        );
    }

    #[test]
    fn hero_has_fixed_delay() {
        assert_eq!(
            HERO.transition(0),
            "opacity 0.9s ease 0.2s, transform 0.9s ease 0.2s"
        );
    }

    #[test]
    fn static_phase_has_no_transition() {
        let css = SECTION.css(Phase::Static, 4);
        assert_eq!(css, "opacity: 1; transform: none;");
        assert!(!css.contains("transition"));
    }

    #[test]
    fn stagger_grows_without_cap() {
        assert_eq!(
            PROJECT_CARD.transition(100),
            "opacity 0.6s ease 12s, transform 0.6s ease 12s"
        );
    }

    #[test]
    fn seconds_trims_trailing_zeros() {
        assert_eq!(seconds(0.7), "0.7");
        assert_eq!(seconds(0.0), "0");
        assert_eq!(seconds(1.25), "1.25");
    }
}
