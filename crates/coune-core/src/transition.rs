//! Entrance animations as data: a table of tweens that any rendering layer
//! can sample at a given time.

/// CSS-style easing curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn control_points(self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Easing::Linear => None,
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
        }
    }

    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, progress: f32) -> f32 {
        let x = progress.clamp(0.0, 1.0);
        match self.control_points() {
            None => x,
            Some((x1, y1, x2, y2)) => {
                let t = solve_bezier_t(x, x1, x2);
                bezier(t, y1, y2)
            }
        }
    }
}

// One axis of a cubic bezier with end points fixed at 0 and 1.
#[inline]
fn bezier(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

#[inline]
fn bezier_slope(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

fn solve_bezier_t(x: f32, x1: f32, x2: f32) -> f32 {
    // Newton first, bisection if the slope flattens out.
    let mut t = x;
    for _ in 0..8 {
        let err = bezier(t, x1, x2) - x;
        if err.abs() < 1e-6 {
            return t;
        }
        let d = bezier_slope(t, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    t = x;
    for _ in 0..32 {
        let v = bezier(t, x1, x2);
        if (v - x).abs() < 1e-6 {
            break;
        }
        if v < x {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }
    t
}

/// The animatable properties of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualProps {
    pub opacity: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl VisualProps {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            opacity: self.opacity + (other.opacity - self.opacity) * t,
            translate_y: self.translate_y + (other.translate_y - self.translate_y) * t,
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

impl Default for VisualProps {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: VisualProps,
    pub to: VisualProps,
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn end(&self) -> f32 {
        self.delay + self.duration
    }

    /// Props at `elapsed` seconds after the tween's origin.
    pub fn sample(&self, elapsed: f32) -> VisualProps {
        if elapsed <= self.delay {
            return self.from;
        }
        if self.duration <= 0.0 || elapsed >= self.end() {
            return self.to;
        }
        let p = (elapsed - self.delay) / self.duration;
        self.from.lerp(&self.to, self.easing.apply(p))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    Hero,
    /// A word of the hero title, by position.
    HeroWord(usize),
    /// Letter `index` within word `word`.
    HeroLetter { word: usize, index: usize },
    Navigation,
    Background,
}

pub const HERO_TWEEN: Tween = Tween {
    from: VisualProps {
        opacity: 0.0,
        translate_y: 0.0,
        scale: 0.5,
    },
    to: VisualProps::IDENTITY,
    delay: 0.0,
    duration: 1.2,
    easing: Easing::EaseOut,
};

pub const NAV_TWEEN: Tween = Tween {
    from: VisualProps {
        opacity: 0.0,
        translate_y: -24.0,
        scale: 1.0,
    },
    to: VisualProps::IDENTITY,
    delay: 0.1,
    duration: 0.8,
    easing: Easing::EaseOut,
};

pub const BACKGROUND_TWEEN: Tween = Tween {
    from: VisualProps {
        opacity: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    },
    to: VisualProps::IDENTITY,
    delay: 0.0,
    duration: 0.6,
    easing: Easing::EaseOut,
};

const WORD_DELAY_BASE: f32 = 0.1;
const WORD_STAGGER: f32 = 0.2;
const LETTER_STAGGER: f32 = 0.05;

/// Start of word `word`'s entrance; letters stagger from here.
#[inline]
pub fn hero_word_delay(word: usize) -> f32 {
    WORD_DELAY_BASE + word as f32 * WORD_STAGGER
}

pub fn hero_word_tween(word: usize) -> Tween {
    Tween {
        from: VisualProps {
            opacity: 0.0,
            translate_y: 50.0,
            scale: 0.8,
        },
        to: VisualProps::IDENTITY,
        delay: hero_word_delay(word),
        duration: 0.8,
        easing: Easing::EaseOut,
    }
}

pub fn hero_letter_tween(word: usize, index: usize) -> Tween {
    Tween {
        from: VisualProps {
            opacity: 0.0,
            translate_y: 30.0,
            scale: 1.0,
        },
        to: VisualProps::IDENTITY,
        delay: hero_word_delay(word) + index as f32 * LETTER_STAGGER,
        duration: 0.6,
        easing: Easing::EaseOut,
    }
}

/// Mount-relative entrance schedule. Hero tracks run from mount; navigation
/// and background hold their initial props until the reveal is marked.
#[derive(Clone, Debug, Default)]
pub struct EntranceTimeline {
    revealed_at: Option<f32>,
}

impl EntranceTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revealed_at(&self) -> Option<f32> {
        self.revealed_at
    }

    /// Record the reveal time (seconds since mount). Later calls are ignored.
    pub fn mark_revealed(&mut self, at: f32) {
        if self.revealed_at.is_none() {
            self.revealed_at = Some(at);
        }
    }

    pub fn sample(&self, element: Element, now: f32) -> VisualProps {
        match element {
            Element::Hero => HERO_TWEEN.sample(now),
            Element::HeroWord(w) => hero_word_tween(w).sample(now),
            Element::HeroLetter { word, index } => hero_letter_tween(word, index).sample(now),
            Element::Navigation => self.after_reveal(&NAV_TWEEN, now),
            Element::Background => self.after_reveal(&BACKGROUND_TWEEN, now),
        }
    }

    fn after_reveal(&self, tween: &Tween, now: f32) -> VisualProps {
        match self.revealed_at {
            Some(t0) => tween.sample(now - t0),
            None => tween.from,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easings_hit_end_points_and_are_monotonic() {
        for e in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!(e.apply(0.0).abs() < 1e-4, "{e:?}");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-4, "{e:?}");
            let mut prev = 0.0;
            for i in 1..=50 {
                let v = e.apply(i as f32 / 50.0);
                assert!(v + 1e-5 >= prev, "{e:?} not monotonic at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn ease_out_leads_linear_and_ease_in_lags() {
        assert!(Easing::EaseOut.apply(0.3) > 0.3);
        assert!(Easing::EaseIn.apply(0.3) < 0.3);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn hero_scales_up_over_first_1_2_seconds() {
        let tl = EntranceTimeline::new();
        assert_eq!(tl.sample(Element::Hero, 0.0).scale, 0.5);
        let mid = tl.sample(Element::Hero, 0.6);
        assert!(mid.scale > 0.5 && mid.scale < 1.0);
        assert_eq!(tl.sample(Element::Hero, 1.2), VisualProps::IDENTITY);
    }

    #[test]
    fn navigation_holds_until_reveal() {
        let mut tl = EntranceTimeline::new();
        let hidden = tl.sample(Element::Navigation, 5.0);
        assert_eq!(hidden.translate_y, -24.0);
        assert_eq!(hidden.opacity, 0.0);

        tl.mark_revealed(1.3);
        // still inside the 0.1 s delay
        assert_eq!(tl.sample(Element::Navigation, 1.35).translate_y, -24.0);
        assert_eq!(tl.sample(Element::Navigation, 2.3), VisualProps::IDENTITY);
        assert_eq!(tl.sample(Element::Background, 2.0), VisualProps::IDENTITY);
    }

    #[test]
    fn letters_stagger_within_each_word() {
        let tl = EntranceTimeline::new();
        let first = |word, index| tl.sample(Element::HeroLetter { word, index }, 0.3).opacity;
        assert!(first(0, 0) > first(0, 4));
        // the second word starts 0.2 s later and its first letter restarts the stagger
        assert_eq!(
            hero_letter_tween(1, 0).delay,
            hero_word_tween(1).delay
        );
        assert!((hero_letter_tween(1, 0).delay - 0.3).abs() < 1e-6);
        assert!((hero_letter_tween(1, 7).delay - 0.65).abs() < 1e-6);
        assert!(first(0, 0) > first(1, 0));
    }

    #[test]
    fn words_slide_and_scale_in() {
        let tl = EntranceTimeline::new();
        let start = tl.sample(Element::HeroWord(0), 0.0);
        assert_eq!(start.translate_y, 50.0);
        assert_eq!(start.scale, 0.8);
        assert_eq!(start.opacity, 0.0);
        let mid = tl.sample(Element::HeroWord(1), 0.7);
        assert!(mid.translate_y > 0.0 && mid.translate_y < 50.0);
        assert_eq!(tl.sample(Element::HeroWord(1), 1.2), VisualProps::IDENTITY);
    }

    #[test]
    fn first_reveal_time_wins() {
        let mut tl = EntranceTimeline::new();
        tl.mark_revealed(1.3);
        tl.mark_revealed(3.0);
        assert_eq!(tl.revealed_at(), Some(1.3));
    }
}
