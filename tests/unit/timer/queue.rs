use super::*;

fn drain(q: &mut TimerQueue<&'static str>, now: u64) -> Vec<(u64, &'static str)> {
    let mut out = Vec::new();
    while let Some(f) = q.pop_due(Millis(now)) {
        out.push((f.due.0, f.event));
    }
    out
}

#[test]
fn fires_in_due_then_schedule_order() {
    let mut q = TimerQueue::new();
    q.schedule_once(Millis(30), "c");
    q.schedule_once(Millis(10), "a");
    q.schedule_once(Millis(30), "d");
    q.schedule_once(Millis(20), "b");

    assert_eq!(drain(&mut q, 25), vec![(10, "a"), (20, "b")]);
    assert_eq!(drain(&mut q, 30), vec![(30, "c"), (30, "d")]);
    assert!(q.is_empty());
}

#[test]
fn nothing_fires_before_due() {
    let mut q = TimerQueue::new();
    q.schedule_once(Millis(100), "x");
    assert!(q.pop_due(Millis(99)).is_none());
    assert_eq!(q.next_due(), Some(Millis(100)));
    assert!(q.pop_due(Millis(100)).is_some());
}

#[test]
fn periodic_timer_rearms_until_cancelled() {
    let mut q = TimerQueue::new();
    let id = q.schedule_every(Millis(320), 320, "tick");

    let fired = drain(&mut q, 1000);
    assert_eq!(fired, vec![(320, "tick"), (640, "tick"), (960, "tick")]);
    assert!(q.is_scheduled(id));
    assert_eq!(q.next_due(), Some(Millis(1280)));

    assert!(q.cancel(id));
    assert!(!q.cancel(id));
    assert!(drain(&mut q, 10_000).is_empty());
    assert_eq!(q.next_due(), None);
}

#[test]
fn periodic_interleaves_with_one_shots() {
    let mut q = TimerQueue::new();
    q.schedule_every(Millis(10), 10, "tick");
    q.schedule_once(Millis(20), "expire");

    // The one-shot was scheduled before the second tick was re-armed.
    assert_eq!(
        drain(&mut q, 30),
        vec![(10, "tick"), (20, "expire"), (20, "tick"), (30, "tick")]
    );
}

#[test]
fn fired_one_shot_is_no_longer_scheduled() {
    let mut q = TimerQueue::new();
    let id = q.schedule_once(Millis(5), "x");
    assert_eq!(q.len(), 1);
    q.pop_due(Millis(5)).unwrap();
    assert!(!q.is_scheduled(id));
    assert!(!q.cancel(id));
    assert_eq!(q.len(), 0);
}

#[test]
fn zero_period_still_advances() {
    let mut q = TimerQueue::new();
    q.schedule_every(Millis(0), 0, "spin");
    assert_eq!(drain(&mut q, 2), vec![(0, "spin"), (1, "spin"), (2, "spin")]);
}

#[test]
fn clear_drops_everything() {
    let mut q = TimerQueue::new();
    q.schedule_once(Millis(1), "a");
    q.schedule_every(Millis(1), 5, "b");
    q.clear();
    assert!(q.is_empty());
    assert!(q.pop_due(Millis(100)).is_none());
}

#[test]
fn periodic_timer_retires_at_end_of_clock() {
    let mut q = TimerQueue::new();
    let id = q.schedule_every(Millis(u64::MAX - 5), 10, "tick");

    let fired = q.pop_due(Millis(u64::MAX)).unwrap();
    assert_eq!(fired.due, Millis(u64::MAX - 5));
    assert!(q.pop_due(Millis(u64::MAX)).is_none());
    assert!(!q.is_scheduled(id));
    assert!(q.is_empty());
}
