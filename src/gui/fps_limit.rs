use super::GuiConfig;
use crate::Config;
use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the frame loop: one engine tick per frame, at most `max_fps` frames
/// per second.
pub struct FpsLimiter {
    frame_budget: Duration,
    frame_start: Instant,
    frametime_avg: f64, // Exponential moving average of the frame time in seconds.
}

impl FpsLimiter {
    /// Rates outside of [`Config::FPS_RANGE`] are clamped into it.
    pub fn new(max_fps: f64) -> Self {
        let (lo, hi) = (*Config::FPS_RANGE.start(), *Config::FPS_RANGE.end());
        let fps = if max_fps.is_nan() { hi } else { max_fps.clamp(lo, hi) };
        if fps != max_fps {
            log::warn!("Max FPS {max_fps} is out of range, using {fps}");
        }
        let frame_budget = Duration::from_secs_f64(fps.recip());
        Self {
            frame_budget,
            frame_start: Instant::now(),
            frametime_avg: frame_budget.as_secs_f64(),
        }
    }

    pub fn fps(&self) -> f64 {
        self.frametime_avg.recip()
    }

    /// Average frame time in milliseconds.
    pub fn frametime_ms(&self) -> f64 {
        self.frametime_avg * 1e3
    }

    /// Sleeps away the rest of the frame budget and starts the next frame.
    pub fn delay(&mut self) {
        if let Some(rest) = self.frame_budget.checked_sub(self.frame_start.elapsed()) {
            sleep(rest);
        }

        let frametime = self.frame_start.elapsed().as_secs_f64();
        self.frametime_avg += (frametime - self.frametime_avg) * GuiConfig::FPS_SMOOTHING;
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_not_shorter_than_target() {
        let mut limiter = FpsLimiter::new(200.);
        let timer = Instant::now();
        for _ in 0..3 {
            limiter.delay();
        }
        assert!(timer.elapsed() >= Duration::from_millis(15));
        assert!(limiter.fps() < 201.);
        assert!(limiter.frametime_ms() > 4.9);
    }

    #[test]
    fn out_of_range_rates_are_clamped() {
        let slow = FpsLimiter::new(1e-20);
        assert_eq!(slow.frame_budget, Duration::from_secs(10));

        for fps in [f64::INFINITY, f64::NAN, 1e9] {
            let fast = FpsLimiter::new(fps);
            assert_eq!(fast.frame_budget, Duration::from_millis(1), "{fps}");
        }
    }
}
