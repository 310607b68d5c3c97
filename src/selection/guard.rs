use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::types::EmptyReason;

/// Caller-side cancellation, polled between pipeline stages.
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NeverCancelled;

impl Cancellation for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Coarse-grained interruption check: cancellation first, then the deadline.
pub struct StageGuard<'a> {
    deadline: Option<Instant>,
    cancel: &'a dyn Cancellation,
}

impl<'a> StageGuard<'a> {
    pub fn start(max_processing_ms: Option<u64>, cancel: &'a dyn Cancellation) -> Self {
        let deadline = max_processing_ms
            .and_then(|ms| Instant::now().checked_add(Duration::from_millis(ms)));
        Self { deadline, cancel }
    }

    pub fn interrupted(&self) -> Option<EmptyReason> {
        if self.cancel.is_cancelled() {
            return Some(EmptyReason::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(EmptyReason::DeadlineExceeded),
            _ => None,
        }
    }
}
