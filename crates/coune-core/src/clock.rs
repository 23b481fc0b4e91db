use crate::constants::CLOCK_STEP;

/// Frame-stepped animation time. Advances by a fixed amount per rendered
/// frame rather than by wall time, so a throttled tab simply shimmers slower.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    time: f32,
}

impl AnimationClock {
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    pub fn advance(&mut self) {
        self.time += CLOCK_STEP;
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}
