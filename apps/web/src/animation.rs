#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkyTheme {
    Day,
    Night,
}

impl SkyTheme {
    pub const fn gradient(self) -> &'static str {
        match self {
            Self::Day => "linear-gradient(to bottom, #93c5fd, #3b82f6, #2563eb)",
            Self::Night => "linear-gradient(to bottom, #0f172a, #1e1b4b, #312e81)",
        }
    }
}

pub const SKY_TRANSITION: &str = "background 1s ease-in-out";
pub const FADE_TRANSITION: &str = "opacity 1s ease, transform 1s ease";
pub const FADE_START_TRANSFORM: &str = "translateY(20px)";
pub const FADE_END_TRANSFORM: &str = "translateY(0)";

const STAR_FADE_START: f64 = 0.3;
const STAR_FADE_RATE: f64 = 2.0;

/// Position of the viewport within the scrollable range, in `[0, 1]`.
///
/// A page that cannot scroll reports 0.
pub fn scroll_fraction(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if !range.is_finite() || range <= 0.0 {
        return 0.0;
    }

    let fraction = scroll_y / range;
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn sky_theme(fraction: f64, night_threshold: f64) -> SkyTheme {
    if fraction > night_threshold {
        SkyTheme::Night
    } else {
        SkyTheme::Day
    }
}

pub fn starfield_opacity(fraction: f64) -> f64 {
    ((fraction - STAR_FADE_START) * STAR_FADE_RATE).clamp(0.0, 1.0)
}

/// Sky and starfield styling for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyFrame {
    pub theme: SkyTheme,
    pub star_opacity: f64,
}

impl SkyFrame {
    pub fn at(fraction: f64, night_threshold: f64) -> Self {
        Self {
            theme: sky_theme(fraction, night_threshold),
            star_opacity: starfield_opacity(fraction),
        }
    }
}

/// Per-element reveal state. Once visible an element never hides again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    visible: bool,
}

impl Reveal {
    pub const fn new(visible: bool) -> Self {
        Self { visible }
    }

    /// Elements marked visible in markup are left alone.
    pub const fn needs_observation(self) -> bool {
        !self.visible
    }

    /// Returns true only on the transition from hidden to visible.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }

    pub const fn is_visible(self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::{scroll_fraction, sky_theme, starfield_opacity, Reveal, SkyFrame, SkyTheme};

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    #[test]
    fn top_of_page_is_day_without_stars() {
        let fraction = scroll_fraction(0.0, 3000.0, 800.0);
        assert_close(fraction, 0.0);
        assert_eq!(sky_theme(fraction, 0.4), SkyTheme::Day);
        assert_close(starfield_opacity(fraction), 0.0);
    }

    #[test]
    fn bottom_of_page_is_night_with_full_stars() {
        let fraction = scroll_fraction(2200.0, 3000.0, 800.0);
        assert_close(fraction, 1.0);
        assert_eq!(sky_theme(fraction, 0.4), SkyTheme::Night);
        assert_close(starfield_opacity(fraction), 1.0);
    }

    #[test]
    fn threshold_itself_is_still_day() {
        assert_eq!(sky_theme(0.4, 0.4), SkyTheme::Day);
        assert_eq!(sky_theme(0.41, 0.4), SkyTheme::Night);
    }

    #[test]
    fn stars_fade_in_linearly_after_start() {
        assert_close(starfield_opacity(0.3), 0.0);
        assert_close(starfield_opacity(0.5), 0.4);
        assert_close(starfield_opacity(0.8), 1.0);
    }

    #[test]
    fn unscrollable_page_is_clamped_to_zero() {
        assert_close(scroll_fraction(0.0, 800.0, 800.0), 0.0);
        assert_close(scroll_fraction(10.0, 600.0, 800.0), 0.0);
        assert_close(scroll_fraction(f64::NAN, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_close(scroll_fraction(5000.0, 3000.0, 800.0), 1.0);
        assert_close(scroll_fraction(-40.0, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn reveal_fires_once_and_sticks() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(false));
        assert!(reveal.observe(true));
        assert!(reveal.is_visible());
        assert!(!reveal.observe(false));
        assert!(!reveal.observe(true));
        assert!(reveal.is_visible());
    }

    #[test]
    fn already_visible_element_is_not_revealed_again() {
        let mut reveal = Reveal::new(true);
        assert!(!reveal.observe(true));
    }

    #[test]
    fn only_hidden_elements_are_observed() {
        assert!(Reveal::new(false).needs_observation());
        assert!(!Reveal::new(true).needs_observation());

        let mut reveal = Reveal::default();
        reveal.observe(true);
        assert!(!reveal.needs_observation());
    }

    #[test]
    fn sky_frame_combines_theme_and_star_opacity() {
        let top = SkyFrame::at(0.0, 0.4);
        assert_eq!(top.theme, SkyTheme::Day);
        assert_close(top.star_opacity, 0.0);

        let middle = SkyFrame::at(0.5, 0.4);
        assert_eq!(middle.theme, SkyTheme::Night);
        assert_close(middle.star_opacity, 0.4);

        let bottom = SkyFrame::at(1.0, 0.4);
        assert_eq!(bottom.theme, SkyTheme::Night);
        assert_close(bottom.star_opacity, 1.0);
    }
}
