/// Lets a call through at most once per `delay_ms`.
#[derive(Clone, Debug)]
pub struct Throttle {
    delay_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            last_ms: None,
        }
    }

    pub fn ready(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_ms {
            if now_ms - last < self.delay_ms {
                return false;
            }
        }
        self.last_ms = Some(now_ms);
        true
    }
}
