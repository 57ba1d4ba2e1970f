use gloo_timers::callback::Timeout;

/// Cancellable delayed task: each `schedule` call drops the previously
/// pending callback, so only the last one within `delay_ms` runs.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(Timeout::new(self.delay_ms, callback));
    }

    /// Dropping a `Timeout` clears it
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
