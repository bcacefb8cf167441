use super::*;

use futures::stream;

async fn feed_closes(feed: &ScrollFeed) -> bool {
    for _ in 0..16 {
        if !feed.push(0) {
            return true;
        }
        tokio::task::yield_now().await;
    }
    false
}

fn visibility_after(offsets: &[u32]) -> bool {
    let mut state = ScrollState::default();
    offsets
        .iter()
        .fold(true, |_, offset| state.observe(*offset))
}

#[test]
fn near_top_always_shows_header() {
    assert!(visibility_after(&[500, 900, 9]));
    assert!(visibility_after(&[0]));
    assert!(visibility_after(&[20, 40, 60, 5]));
}

#[test]
fn scrolling_down_hides_and_stays_hidden() {
    let mut state = ScrollState::default();
    assert!(!state.observe(12));
    for offset in [40, 80, 200, 1_000] {
        assert!(!state.observe(offset), "offset {offset} should hide header");
    }
}

#[test]
fn scrolling_up_or_holding_still_shows_header() {
    let mut state = ScrollState::default();
    state.observe(300);
    state.observe(400);
    assert!(!state.header_visible);

    assert!(state.observe(400), "stationary offset shows header");
    state.observe(500);
    assert!(state.observe(350), "scrolling up shows header");
    assert_eq!(state.last_known_offset, 350);
}

#[tokio::test]
async fn subscription_applies_injected_offsets() {
    let controller = HeaderVisibilityController::new();
    let mut rx = controller.watch();

    controller.start(stream::iter(vec![50, 120, 300]));
    let state = rx
        .wait_for(|state| state.last_known_offset == 300)
        .await
        .map(|state| *state)
        .expect("state");
    assert!(!state.header_visible);
}

#[tokio::test]
async fn stop_detaches_scroll_source() {
    let controller = HeaderVisibilityController::new();
    let (feed, source) = scroll_feed();
    let mut rx = controller.watch();

    controller.start(source);
    assert!(controller.is_subscribed());
    assert!(feed.push(200));
    rx.wait_for(|state| state.last_known_offset == 200)
        .await
        .expect("first offset");

    controller.stop();
    assert!(!controller.is_subscribed());
    assert!(
        feed_closes(&feed).await,
        "feed must be closed once the subscription stops"
    );
    assert_eq!(controller.state().last_known_offset, 200);
}

#[tokio::test]
async fn dropping_controller_closes_feed() {
    let controller = HeaderVisibilityController::new();
    let (feed, source) = scroll_feed();
    controller.start(source);
    drop(controller);

    assert!(feed_closes(&feed).await);
}

#[tokio::test]
async fn restarting_replaces_previous_subscription() {
    let controller = HeaderVisibilityController::new();
    let (first_feed, first_source) = scroll_feed();
    let (second_feed, second_source) = scroll_feed();

    controller.start(first_source);
    controller.start(second_source);

    assert!(feed_closes(&first_feed).await);
    assert!(second_feed.push(100));
}

#[test]
fn synchronous_observe_updates_watchers() {
    let controller = HeaderVisibilityController::new();
    let rx = controller.watch();
    controller.observe(30);
    controller.observe(60);
    assert!(!rx.borrow().header_visible);
    controller.observe(3);
    assert!(rx.borrow().header_visible);
}
