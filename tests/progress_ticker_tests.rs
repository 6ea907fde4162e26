use buildsite::config::Config;
use buildsite::progress::{ProgressTicker, DEFAULT_TICK};
use buildsite::ui::Page;
use tokio::time::{sleep, Duration};

/// Half a period past the given tick count, so the comparison never races a tick
fn after_ticks(ticks: u32) -> Duration {
    DEFAULT_TICK * ticks + DEFAULT_TICK / 2
}

#[tokio::test(start_paused = true)]
async fn test_ticker_starts_at_zero_and_counts_up() {
    let ticker = ProgressTicker::start(DEFAULT_TICK);
    assert_eq!(ticker.progress(), 0);

    sleep(after_ticks(1)).await;
    assert_eq!(ticker.progress(), 1);

    sleep(DEFAULT_TICK * 9).await;
    assert_eq!(ticker.progress(), 10);
}

#[tokio::test(start_paused = true)]
async fn test_ticker_wraps_after_full_bar() {
    let ticker = ProgressTicker::start(DEFAULT_TICK);

    sleep(after_ticks(100)).await;
    assert_eq!(ticker.progress(), 100);

    sleep(DEFAULT_TICK).await;
    assert_eq!(ticker.progress(), 0);

    sleep(DEFAULT_TICK).await;
    assert_eq!(ticker.progress(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_no_ticks_after_stop() {
    let mut ticker = ProgressTicker::start(DEFAULT_TICK);
    let mut updates = ticker.subscribe();

    sleep(after_ticks(3)).await;
    assert_eq!(ticker.progress(), 3);

    assert!(ticker.stop());
    updates.borrow_and_update();

    sleep(Duration::from_secs(5)).await;
    assert_eq!(ticker.progress(), 3);
    assert!(!updates.has_changed().unwrap_or(false));
}

#[tokio::test(start_paused = true)]
async fn test_custom_period() {
    let ticker = ProgressTicker::start(Duration::from_millis(250));
    assert_eq!(ticker.period(), Duration::from_millis(250));

    sleep(Duration::from_millis(600)).await;
    assert_eq!(ticker.progress(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_page_progress_end_to_end() {
    let config = Config::default();
    let mut page = Page::mount(&config, None);
    assert_eq!(page.progress(), 0);

    sleep(after_ticks(1)).await;
    assert_eq!(page.progress(), 1);

    sleep(DEFAULT_TICK * 9).await;
    assert_eq!(page.progress(), 10);

    sleep(DEFAULT_TICK * 91).await;
    assert_eq!(page.progress(), 0, "101 ticks wrap the bar back to empty");

    page.unmount();
    let frozen = page.progress();
    sleep(Duration::from_secs(2)).await;
    assert_eq!(page.progress(), frozen);
    assert!(!page.is_mounted());
}
