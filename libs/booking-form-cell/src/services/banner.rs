// libs/booking-form-cell/src/services/banner.rs
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use shared_dom::Notification;

/// Success-banner lifecycle: once shown it dismisses itself after a fixed
/// window, unless the user closes it first. The visual layer underneath only
/// knows show/hide.
pub struct SuccessBanner {
    inner: Arc<BannerInner>,
    auto_dismiss: Duration,
}

struct BannerInner {
    visual: Arc<dyn Notification>,
    visible: AtomicBool,
    // Bumped on every show; a pending auto-dismiss only fires if its
    // generation is still current, so re-showing re-arms the window.
    generation: AtomicU64,
    is_shutdown: AtomicBool,
}

impl SuccessBanner {
    pub fn new(visual: Arc<dyn Notification>, auto_dismiss: Duration) -> Self {
        Self {
            inner: Arc::new(BannerInner {
                visual,
                visible: AtomicBool::new(false),
                generation: AtomicU64::new(0),
                is_shutdown: AtomicBool::new(false),
            }),
            auto_dismiss,
        }
    }

    /// Makes the banner visible and schedules its auto-dismiss.
    pub fn show(&self) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.visible.store(true, Ordering::SeqCst);
        self.inner.visual.show();
        debug!("Success banner shown, auto-dismiss in {:?}", self.auto_dismiss);

        let inner = Arc::clone(&self.inner);
        // Anchor the deadline at show() time; computing it lazily inside the
        // spawned task would let the clock move before the timer is armed.
        let deadline = Instant::now() + self.auto_dismiss;
        tokio::spawn(async move {
            sleep_until(deadline).await;
            if inner.is_shutdown.load(Ordering::SeqCst) {
                return;
            }
            if inner.generation.load(Ordering::SeqCst) == generation {
                inner.dismiss();
            }
        });
    }

    /// Hides the banner. Safe to call when already hidden.
    pub fn dismiss(&self) {
        self.inner.dismiss();
    }

    pub fn is_visible(&self) -> bool {
        self.inner.visible.load(Ordering::SeqCst)
    }

    /// Stops any pending auto-dismiss from touching the page.
    pub fn shutdown(&self) {
        self.inner.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl BannerInner {
    fn dismiss(&self) {
        if self.visible.swap(false, Ordering::SeqCst) {
            self.visual.hide();
            debug!("Success banner dismissed");
        }
    }
}
