//! Integration tests for the pomodoro session timer.

use tpbstudy_core::{Event, SessionMode, SessionRunner, SessionTimer, TimerConfig, ValidationError};

#[test]
fn test_default_work_session_rolls_into_short_break() {
    let mut timer = SessionTimer::new(TimerConfig::default());
    assert!(timer.start().is_some());

    let mut transitions = Vec::new();
    for _ in 0..1500 {
        if let Some(event) = timer.tick() {
            transitions.push(event);
        }
    }

    assert_eq!(transitions.len(), 1);
    assert!(transitions[0].is_transition());
    let state = timer.state();
    assert_eq!(state.mode, SessionMode::ShortBreak);
    assert_eq!(state.seconds_remaining, 300);
    assert!(state.running);
}

#[test]
fn test_invalid_configure_keeps_previous_config() {
    let mut timer = SessionTimer::default();
    let before = *timer.config();

    let err = timer.configure(-1, 5, 15).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidConfig { .. }));
    assert_eq!(*timer.config(), before);
    assert_eq!(timer.seconds_remaining(), 1500);
}

#[test]
fn test_full_manual_workflow() {
    let mut timer = SessionTimer::default();

    // User shortens the work block, starts, pauses half way.
    timer.configure(2, 1, 3).unwrap();
    assert_eq!(timer.display(), "02:00");
    timer.start();
    for _ in 0..60 {
        timer.tick();
    }
    timer.pause();
    assert_eq!(timer.display(), "01:00");

    // Paused time does not count.
    for _ in 0..30 {
        assert!(timer.tick().is_none());
    }
    assert_eq!(timer.seconds_remaining(), 60);

    // Picking the long break preset discards the work countdown.
    timer.switch_mode(SessionMode::LongBreak);
    assert_eq!(timer.display(), "03:00");
    assert!(!timer.is_running());

    timer.start();
    for _ in 0..180 {
        timer.tick();
    }
    assert_eq!(timer.mode(), SessionMode::Work);
    assert_eq!(timer.display(), "02:00");

    timer.reset();
    assert_eq!(timer.mode(), SessionMode::Work);
    assert!(!timer.is_running());
}

#[test]
fn test_events_serialize_with_type_tag() {
    let mut timer = SessionTimer::default();
    let event = timer.switch_mode(SessionMode::ShortBreak);
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "mode_switched");
    assert_eq!(json["to"], "short_break");
    assert_eq!(json["duration_secs"], 300);

    let back: Event = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}

#[tokio::test(start_paused = true)]
async fn test_runner_drives_a_work_block_on_the_clock() {
    let start = tokio::time::Instant::now();
    let mut alerts = 0;
    {
        let mut runner = SessionRunner::with_notifier(TimerConfig::default(), |_: &Event| alerts += 1);
        runner.start();

        let mut advanced = None;
        while advanced.is_none() {
            advanced = runner.next_tick().await;
        }

        assert_eq!(start.elapsed(), std::time::Duration::from_secs(1500));
        let state = runner.state();
        assert_eq!(state.mode, SessionMode::ShortBreak);
        assert_eq!(state.seconds_remaining, 300);
        assert!(state.running);
    }
    assert_eq!(alerts, 1);
}

#[tokio::test(start_paused = true)]
async fn test_runner_pause_holds_the_countdown() {
    let mut runner = SessionRunner::new(TimerConfig::default());
    runner.start();
    for _ in 0..10 {
        runner.next_tick().await;
    }
    runner.pause();

    tokio::time::sleep(std::time::Duration::from_secs(30)).await;
    assert!(runner.next_tick().await.is_none());
    assert_eq!(runner.state().seconds_remaining, 1490);

    let timer = runner.into_timer();
    assert!(!timer.is_running());
}
