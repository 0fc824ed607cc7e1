//! Display zoom, quantized to steps of a tenth so repeated stepping can't drift

use crate::error::ValidationError;

const STEPS_PER_UNIT: u8 = 10;

pub const MIN_ZOOM: f32 = 0.3;
pub const MAX_ZOOM: f32 = 3.0;
pub const ZOOM_STEP: f32 = 1.0 / STEPS_PER_UNIT as f32;

const MIN_STEPS: u8 = 3;
const MAX_STEPS: u8 = 30;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Zoom(u8);

impl Zoom {
    pub const BASE: Self = Self(STEPS_PER_UNIT);
    pub const MIN: Self = Self(MIN_STEPS);
    pub const MAX: Self = Self(MAX_STEPS);

    /// Snap a ratio to the nearest step, rejecting anything outside of the range
    pub fn from_ratio(ratio: f32) -> Result<Self, ValidationError> {
        let steps = (ratio * f32::from(STEPS_PER_UNIT)).round();
        if !steps.is_finite() || steps < f32::from(MIN_STEPS) || steps > f32::from(MAX_STEPS) {
            return Err(ValidationError::Zoom(ratio));
        }

        Ok(Self(steps as u8))
    }

    pub fn ratio(self) -> f32 {
        f32::from(self.0) / f32::from(STEPS_PER_UNIT)
    }

    /// One step closer, or `None` when already at the maximum
    pub fn step_in(self) -> Option<Self> {
        (self.0 < MAX_STEPS).then(|| Self(self.0 + 1))
    }

    /// One step further, or `None` when already at the minimum
    pub fn step_out(self) -> Option<Self> {
        (self.0 > MIN_STEPS).then(|| Self(self.0 - 1))
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::BASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_steps() {
        assert_eq!(Zoom::from_ratio(1.0), Ok(Zoom::BASE));
        assert_eq!(Zoom::from_ratio(1.04).map(Zoom::ratio), Ok(1.0));
        assert_eq!(Zoom::from_ratio(0.3), Ok(Zoom::MIN));
        assert_eq!(Zoom::from_ratio(3.0), Ok(Zoom::MAX));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Zoom::from_ratio(0.2), Err(ValidationError::Zoom(0.2)));
        assert!(Zoom::from_ratio(3.2).is_err());
        assert!(Zoom::from_ratio(f32::NAN).is_err());
    }

    #[test]
    fn stops_at_bounds() {
        assert_eq!(Zoom::MAX.step_in(), None);
        assert_eq!(Zoom::MIN.step_out(), None);
        assert_eq!(Zoom::BASE.step_in().map(Zoom::ratio), Some(1.1));
    }
}
