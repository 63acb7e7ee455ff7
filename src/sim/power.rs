//! Power meter front-ends
//!
//! Both meters report a level in `0.0..=1.0` (fraction of the club's
//! max power) plus an accuracy in `0.0..=1.0` when released. Which one
//! the player gets is a settings choice.

use std::fmt::Debug;

use crate::settings::PerfectZone;

/// Meter state at the moment the player commits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerReading {
    pub level: f32,
    pub accuracy: f32,
}

/// A way of turning player timing into power and accuracy
pub trait PowerInput: Debug {
    /// Begin a new charge from zero
    fn start(&mut self);
    /// Advance the meter by one tick
    fn advance(&mut self);
    /// Current level
    fn level(&self) -> f32;
    /// Lock in the current level and stop the meter
    fn release(&mut self) -> PowerReading;
    /// Whether the meter is running
    fn is_active(&self) -> bool;
}

/// Hold the button to fill the meter; it wraps to empty past full
#[derive(Debug, Clone)]
pub struct HoldToCharge {
    rate: f32,
    level: f32,
    active: bool,
}

impl HoldToCharge {
    pub fn new(rate: f32) -> Self {
        Self {
            rate,
            level: 0.0,
            active: false,
        }
    }
}

impl PowerInput for HoldToCharge {
    fn start(&mut self) {
        self.level = 0.0;
        self.active = true;
    }

    fn advance(&mut self) {
        if !self.active {
            return;
        }
        self.level += self.rate;
        if self.level > 1.0 {
            self.level = 0.0;
        }
    }

    fn level(&self) -> f32 {
        self.level
    }

    fn release(&mut self) -> PowerReading {
        self.active = false;
        PowerReading {
            level: self.level,
            accuracy: 1.0,
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// A bar bouncing between empty and full; stopping it inside the
/// perfect zone gives a dead-straight shot
#[derive(Debug, Clone)]
pub struct OscillatingBar {
    speed: f32,
    zone: PerfectZone,
    falloff: f32,
    level: f32,
    rising: bool,
    active: bool,
}

impl OscillatingBar {
    pub fn new(speed: f32, zone: PerfectZone, falloff: f32) -> Self {
        Self {
            speed,
            zone,
            falloff,
            level: 0.0,
            rising: true,
            active: false,
        }
    }

    /// Accuracy for stopping the bar at `level`
    pub fn accuracy_at(&self, level: f32) -> f32 {
        let miss = self.zone.distance(level);
        if miss == 0.0 {
            1.0
        } else if self.falloff <= 0.0 {
            0.0
        } else {
            (1.0 - miss / self.falloff).clamp(0.0, 1.0)
        }
    }
}

impl PowerInput for OscillatingBar {
    fn start(&mut self) {
        self.level = 0.0;
        self.rising = true;
        self.active = true;
    }

    fn advance(&mut self) {
        if !self.active {
            return;
        }
        if self.rising {
            self.level += self.speed;
            if self.level >= 1.0 {
                self.level = 1.0;
                self.rising = false;
            }
        } else {
            self.level -= self.speed;
            if self.level <= 0.0 {
                self.level = 0.0;
                self.rising = true;
            }
        }
    }

    fn level(&self) -> f32 {
        self.level
    }

    fn release(&mut self) -> PowerReading {
        self.active = false;
        PowerReading {
            level: self.level,
            accuracy: self.accuracy_at(self.level),
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> PerfectZone {
        PerfectZone {
            start: 0.8,
            end: 0.9,
        }
    }

    #[test]
    fn test_hold_charge_fills_and_wraps() {
        let mut meter = HoldToCharge::new(0.25);
        meter.advance();
        assert_eq!(meter.level(), 0.0, "inactive meter does not move");

        meter.start();
        for _ in 0..4 {
            meter.advance();
        }
        assert_eq!(meter.level(), 1.0);
        meter.advance();
        assert_eq!(meter.level(), 0.0);

        meter.advance();
        let reading = meter.release();
        assert_eq!(reading.level, 0.25);
        assert_eq!(reading.accuracy, 1.0);
        assert!(!meter.is_active());
    }

    #[test]
    fn test_bar_bounces() {
        let mut bar = OscillatingBar::new(0.5, zone(), 0.5);
        bar.start();
        bar.advance();
        assert_eq!(bar.level(), 0.5);
        bar.advance();
        assert_eq!(bar.level(), 1.0);
        bar.advance();
        assert_eq!(bar.level(), 0.5);
        bar.advance();
        bar.advance();
        assert_eq!(bar.level(), 0.5);
    }

    #[test]
    fn test_bar_accuracy() {
        let bar = OscillatingBar::new(0.1, zone(), 0.5);
        assert_eq!(bar.accuracy_at(0.85), 1.0);
        assert!((bar.accuracy_at(0.55) - 0.5).abs() < 1e-5);
        assert_eq!(bar.accuracy_at(0.0), 0.0);

        let strict = OscillatingBar::new(0.1, zone(), 0.0);
        assert_eq!(strict.accuracy_at(0.79), 0.0);
        assert_eq!(strict.accuracy_at(0.8), 1.0);
    }

    #[test]
    fn test_bar_release_in_zone() {
        let mut bar = OscillatingBar::new(0.2125, zone(), 0.5);
        bar.start();
        for _ in 0..4 {
            bar.advance();
        }
        let reading = bar.release();
        assert!((reading.level - 0.85).abs() < 1e-5);
        assert_eq!(reading.accuracy, 1.0);
    }
}
