use std::sync::atomic::{AtomicBool, Ordering};

/// Guards one handler against overlapping submissions.
///
/// A submission attempted while another is in flight is refused outright
/// instead of racing the first one to the status sink.
#[derive(Debug, Default)]
pub struct FlightGuard {
    busy: AtomicBool,
}

impl FlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the guard if it is free. The permit releases it on drop.
    pub fn try_acquire(&self) -> Option<FlightPermit<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| FlightPermit { guard: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Relaxed)
    }
}

pub struct FlightPermit<'a> {
    guard: &'a FlightGuard,
}

impl Drop for FlightPermit<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}
