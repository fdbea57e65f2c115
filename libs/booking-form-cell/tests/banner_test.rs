use std::sync::Arc;
use std::time::Duration;

use tokio::task::yield_now;
use tokio::time::advance;

use booking_form_cell::SuccessBanner;
use shared_dom::stubs::StubBanner;
use shared_dom::Notification;

const DISMISS_WINDOW: Duration = Duration::from_millis(5000);

fn banner_fixture() -> (Arc<StubBanner>, Arc<SuccessBanner>) {
    let visual = Arc::new(StubBanner::new());
    let banner = Arc::new(SuccessBanner::new(
        Arc::clone(&visual) as Arc<dyn Notification>,
        DISMISS_WINDOW,
    ));
    (visual, banner)
}

#[tokio::test(start_paused = true)]
async fn banner_stays_visible_for_the_whole_window() {
    let (visual, banner) = banner_fixture();

    banner.show();
    assert!(banner.is_visible());
    assert!(visual.is_visible());

    advance(Duration::from_millis(4999)).await;
    yield_now().await;
    assert!(banner.is_visible());

    advance(Duration::from_millis(1)).await;
    yield_now().await;
    assert!(!banner.is_visible());
    assert!(!visual.is_visible());
    assert_eq!(visual.hide_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn dismissing_twice_only_hides_the_visual_once() {
    let (visual, banner) = banner_fixture();

    banner.show();
    banner.dismiss();
    banner.dismiss();

    assert_eq!(visual.hide_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn re_showing_re_arms_the_dismiss_window() {
    let (visual, banner) = banner_fixture();

    banner.show();
    advance(Duration::from_millis(3000)).await;
    yield_now().await;

    // Shown again mid-window: the stale timer at the 5000ms mark must not
    // fire; only the re-armed one at 8000ms does.
    banner.show();
    advance(Duration::from_millis(2001)).await;
    yield_now().await;
    assert!(banner.is_visible());

    advance(Duration::from_millis(2999)).await;
    yield_now().await;
    assert!(!banner.is_visible());
    assert_eq!(visual.hide_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_the_pending_auto_dismiss() {
    let (visual, banner) = banner_fixture();

    banner.show();
    banner.shutdown();

    advance(Duration::from_millis(5000)).await;
    yield_now().await;

    // The timer fired but did not touch the page.
    assert_eq!(visual.hide_count(), 0);
}
