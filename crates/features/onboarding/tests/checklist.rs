use std::time::Duration;
use tokio::time::advance;
use tsp_domain::progress::ItemStatus;
use tsp_onboarding::{ChecklistSimulator, default_board};

const WINDOW: Duration = Duration::from_millis(7_000);

fn simulator() -> ChecklistSimulator {
    // 7 items across the default sections, so the interval is exactly 1s.
    ChecklistSimulator::new(default_board(), WINDOW)
}

async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn items_flip_at_evenly_spaced_offsets() {
    let sim = simulator();
    let total = sim.board().total();
    assert_eq!(total, 7);

    sim.start();
    settle().await;

    let interval = WINDOW / u32::try_from(total).unwrap();
    for j in 1..=total {
        advance(interval).await;
        settle().await;
        assert_eq!(sim.board().completed(), j, "exactly {j} items at offset {j} * interval");
    }

    assert_eq!(sim.percent(), 100);
    assert!(sim.is_complete());
}

#[tokio::test(start_paused = true)]
async fn nothing_flips_before_the_first_offset() {
    let sim = simulator();
    sim.start();
    settle().await;

    advance(Duration::from_millis(999)).await;
    settle().await;
    assert_eq!(sim.board().completed(), 0);

    advance(Duration::from_millis(1)).await;
    settle().await;
    assert_eq!(sim.board().completed(), 1);
}

#[tokio::test(start_paused = true)]
async fn already_completed_items_are_skipped() {
    let sim = simulator();
    assert!(sim.set_status(0, 0, ItemStatus::Completed));
    assert_eq!(sim.board().completed(), 1);

    sim.start();
    settle().await;

    // 6 pending items over the same window.
    let interval = WINDOW / 6;
    advance(interval).await;
    settle().await;
    assert_eq!(sim.board().completed(), 2);

    advance(WINDOW).await;
    settle().await;
    assert!(sim.is_complete());
}

#[tokio::test(start_paused = true)]
async fn teardown_invalidates_scheduled_timers() {
    let sim = simulator();
    sim.start();
    settle().await;

    advance(Duration::from_millis(2_000)).await;
    settle().await;
    assert_eq!(sim.board().completed(), 2);

    sim.teardown();

    advance(WINDOW).await;
    settle().await;
    assert_eq!(sim.board().completed(), 2, "stale timers must apply nothing");
    assert!(!sim.is_complete());
}

#[tokio::test(start_paused = true)]
async fn restart_after_teardown_completes_the_remainder() {
    let sim = simulator();
    sim.start();
    settle().await;
    advance(Duration::from_millis(3_000)).await;
    settle().await;
    sim.teardown();

    sim.start();
    settle().await;
    advance(WINDOW).await;
    settle().await;

    assert!(sim.is_complete());
}

#[tokio::test(start_paused = true)]
async fn complete_board_start_is_a_noop() {
    let sim = simulator();
    for (si, ii) in sim.board().positions().collect::<Vec<_>>() {
        sim.set_status(si, ii, ItemStatus::Completed);
    }
    assert!(sim.is_complete());

    sim.start();
    settle().await;
    advance(WINDOW).await;
    settle().await;
    assert!(sim.is_complete());
}

#[tokio::test(start_paused = true)]
async fn watch_subscribers_observe_progress() {
    let sim = simulator();
    let mut rx = sim.subscribe();

    sim.start();
    settle().await;
    advance(WINDOW).await;
    settle().await;

    rx.changed().await.unwrap();
    assert!(rx.borrow().is_complete());
}

#[tokio::test(start_paused = true)]
async fn manual_status_set_is_unrestricted() {
    let sim = simulator();
    assert!(sim.set_status(0, 1, ItemStatus::Rejected));
    assert_eq!(sim.board().sections[0].items[1].status, ItemStatus::Rejected);

    // Manual regression is allowed; only the simulation is monotonic.
    assert!(sim.set_status(0, 1, ItemStatus::Pending));
    assert!(!sim.set_status(9, 9, ItemStatus::Completed));
}
