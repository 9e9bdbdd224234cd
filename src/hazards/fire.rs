//! Hazards domain: fire jets on a 50% duty cycle.

/// Dangerous for the first half of every cycle, idle for the second.
#[derive(Debug, Clone, PartialEq)]
pub struct Fire {
    pub cycle_period_ms: f32,
    pub elapsed_ms: f32,
}

impl Fire {
    /// `phase_offset_ms` desynchronizes neighbouring jets.
    pub fn new(cycle_period_ms: f32, phase_offset_ms: f32) -> Self {
        let mut fire = Self {
            cycle_period_ms,
            elapsed_ms: 0.0,
        };
        fire.update(phase_offset_ms);
        fire
    }

    pub fn update(&mut self, dt_ms: f32) {
        if self.cycle_period_ms <= 0.0 {
            return;
        }
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)) % self.cycle_period_ms;
    }

    pub fn is_dangerous(&self) -> bool {
        if self.cycle_period_ms <= 0.0 {
            return false;
        }
        self.elapsed_ms % self.cycle_period_ms < self.cycle_period_ms / 2.0
    }
}
