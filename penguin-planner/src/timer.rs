//! Scoped timers and the auto-advancing carousel.
//!
//! A [`ScopedTimer`] runs a callback after a delay, or repeatedly, on the
//! tokio runtime. The timer lives exactly as long as its handle: dropping
//! the handle cancels it. Views acquire one when they appear and drop it
//! when they go away.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// Smallest period a repeating timer will use.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running timer. Dropping it cancels the timer.
///
/// Must be created from within a tokio runtime.
#[derive(Debug)]
pub struct ScopedTimer {
    handle: JoinHandle<()>,
}

impl ScopedTimer {
    /// Run `f` once, after `delay`.
    pub fn after<F>(delay: Duration, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        });
        Self { handle }
    }

    /// Run `f` every `period`. The first call happens one period from now.
    pub fn every<F>(period: Duration, mut f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                f();
            }
        });
        Self { handle }
    }

    /// Cancel the timer now.
    pub fn cancel(self) {
        drop(self);
    }

    /// Returns true once a one-shot timer has fired or the timer was aborted.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// An index over a fixed number of items that wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// A carousel over `len` items, showing the first.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Index of the item currently shown.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next item, wrapping to the first.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Move to the previous item, wrapping to the last.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = self.index.checked_sub(1).unwrap_or(self.len - 1);
        }
    }
}

/// Advance a shared carousel every `period` until the returned timer is dropped.
pub fn auto_advance(carousel: Arc<Mutex<Carousel>>, period: Duration) -> ScopedTimer {
    ScopedTimer::every(period, move || {
        if let Ok(mut carousel) = carousel.lock() {
            carousel.advance();
            trace!(index = carousel.index(), "Carousel advanced");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (count, move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn advance_wraps() {
        let mut carousel = Carousel::new(3);
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.index(), 2);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn previous_wraps() {
        let mut carousel = Carousel::new(3);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
        carousel.previous();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn one_shot_fires_after_delay() {
        let (count, f) = counter();
        let timer = ScopedTimer::after(Duration::from_secs(2), f);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_one_shot_never_fires() {
        let (count, f) = counter();
        let timer = ScopedTimer::after(Duration::from_secs(2), f);

        tokio::time::sleep(Duration::from_secs(1)).await;
        timer.cancel();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn repeating_fires_each_period() {
        let (count, f) = counter();
        let timer = ScopedTimer::every(Duration::from_secs(5), f);

        tokio::time::sleep(Duration::from_secs(16)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        drop(timer);
        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn auto_advance_wraps_carousel() {
        let carousel = Arc::new(Mutex::new(Carousel::new(3)));
        let timer = auto_advance(carousel.clone(), Duration::from_secs(5));

        tokio::time::sleep(Duration::from_secs(21)).await;
        drop(timer);

        // Four advances over three items
        assert_eq!(carousel.lock().unwrap().index(), 1);
    }
}
