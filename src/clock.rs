/// Elapsed-time source for the render loop.
///
/// Fed with millisecond timestamps (`performance.now()` in the browser) so
/// the loop logic stays independent of the platform clock.
#[derive(Clone, Debug)]
pub struct Clock {
    start_ms: f64,
    last_s: f64,
}

impl Clock {
    pub fn start(now_ms: f64) -> Self {
        Self {
            start_ms: now_ms,
            last_s: 0.0,
        }
    }

    /// Seconds since start. Never decreases, even if `now_ms` goes backwards.
    pub fn elapsed(&mut self, now_ms: f64) -> f64 {
        let s = (now_ms - self.start_ms) / 1000.0;
        if s > self.last_s {
            self.last_s = s;
        }
        self.last_s
    }
}
