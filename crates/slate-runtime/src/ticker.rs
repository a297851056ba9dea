#![forbid(unsafe_code)]

//! Periodic status producer running on a background thread.
//!
//! A [`StatusTicker`] wakes up every `interval`, builds a status string,
//! and posts it to one editor through a [`TextPoster`]. It exits when
//! stopped, when the shell is gone, or when the ticker is dropped; drop
//! stops the thread and joins it.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use slate_widgets::WidgetId;

use crate::mailbox::TextPoster;

/// Stop flag the worker waits on.
#[derive(Debug, Clone)]
struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    fn new() -> Self {
        Self {
            inner: Arc::new((Mutex::new(false), Condvar::new())),
        }
    }

    fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        *lock.lock().unwrap_or_else(PoisonError::into_inner) = true;
        cvar.notify_all();
    }

    fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wait for a stop or for `duration` to pass. Returns `true` if stopped.
    ///
    /// Spurious wakeups are absorbed by waiting again for the remainder.
    fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let deadline = Instant::now() + duration;
        while !*stopped {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            stopped = cvar
                .wait_timeout(stopped, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
        true
    }
}

/// Handle to a running status thread.
#[derive(Debug)]
pub struct StatusTicker {
    signal: StopSignal,
    thread: Option<thread::JoinHandle<u64>>,
}

impl StatusTicker {
    /// Start posting `make_text(n)` to `target` every `interval`, with `n`
    /// counting posts from 1.
    pub fn spawn<F>(poster: TextPoster, target: WidgetId, interval: Duration, make_text: F) -> Self
    where
        F: Fn(u64) -> String + Send + 'static,
    {
        let signal = StopSignal::new();
        let worker = signal.clone();
        let thread = thread::spawn(move || {
            let mut sent = 0u64;
            tracing::debug!(widget = target.index(), ?interval, "status ticker started");
            while !worker.wait_timeout(interval) {
                sent += 1;
                if !poster.post(target, make_text(sent)) {
                    tracing::debug!(sent, "status ticker mailbox closed");
                    break;
                }
            }
            tracing::debug!(sent, "status ticker stopped");
            sent
        });
        Self {
            signal,
            thread: Some(thread),
        }
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.signal.is_stopped()
    }

    /// Whether the worker thread has exited on its own or been joined.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(thread::JoinHandle::is_finished)
    }

    /// Stop the thread and wait for it; returns the number of posts made.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        self.signal.stop();
        match self.thread.take().map(thread::JoinHandle::join) {
            Some(Ok(sent)) => sent,
            Some(Err(_)) => {
                tracing::warn!("status ticker thread panicked");
                0
            }
            None => 0,
        }
    }
}

impl Drop for StatusTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
