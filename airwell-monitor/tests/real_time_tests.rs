// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airwell_core::{AirwellError, ConfigTable, ReadingStatus, SimulationSettings};
use airwell_monitor::SensorDataManager;
use airwell_test_utils::{
    assert_no_element_emitted, assert_within_ranges, expect_next_snapshot, faulty_settings,
    healthy_settings, ids_of, RecordingListener,
};
use std::time::Duration;
use tokio::time::sleep;

fn reference_manager() -> SensorDataManager {
    SensorDataManager::new(ConfigTable::default_table(), healthy_settings())
}

#[test]
fn start_outside_runtime_fails_and_leaves_nothing_running() {
    let manager = reference_manager();

    let err = manager
        .start_real_time_updates(Duration::from_millis(1000))
        .unwrap_err();

    assert!(matches!(err, AirwellError::NoRuntime));
    assert!(!manager.is_real_time_active());
}

#[tokio::test]
async fn zero_interval_is_rejected() {
    let manager = reference_manager();

    let err = manager.start_real_time_updates(Duration::ZERO).unwrap_err();

    assert!(matches!(err, AirwellError::InvalidInterval));
    assert!(!manager.is_real_time_active());
}

#[tokio::test(start_paused = true)]
async fn each_tick_notifies_once() {
    let manager = reference_manager();
    let listener = RecordingListener::new();
    let _subscription = manager.subscribe(listener.callback());

    manager
        .start_real_time_updates(Duration::from_millis(1000))
        .unwrap();
    sleep(Duration::from_millis(3500)).await;

    assert_eq!(listener.count(), 1 + 3);
    manager.stop_real_time_updates();
}

#[tokio::test(start_paused = true)]
async fn ticks_keep_ids_stable_and_values_in_range() {
    let manager = reference_manager();
    let listener = RecordingListener::new();
    let _subscription = manager.subscribe(listener.callback());
    let ids: Vec<String> = manager.config_table().ids().map(String::from).collect();

    manager
        .start_real_time_updates(Duration::from_millis(10))
        .unwrap();
    sleep(Duration::from_millis(2005)).await;
    manager.stop_real_time_updates();

    let snapshots = listener.snapshots();
    assert_eq!(snapshots.len(), 1 + 200);
    for snapshot in &snapshots {
        assert_eq!(ids_of(snapshot), ids);
        assert_within_ranges(manager.config_table(), snapshot);
    }
}

#[tokio::test(start_paused = true)]
async fn tick_changes_exactly_one_sensor_and_marks_it_active() {
    let manager = SensorDataManager::new(ConfigTable::default_table(), faulty_settings());
    let listener = RecordingListener::new();
    let _subscription = manager.subscribe(listener.callback());

    manager
        .start_real_time_updates(Duration::from_millis(500))
        .unwrap();
    sleep(Duration::from_millis(750)).await;
    manager.stop_real_time_updates();

    let snapshots = listener.snapshots();
    assert_eq!(snapshots.len(), 2);

    let changed: Vec<_> = snapshots[0]
        .iter()
        .zip(&snapshots[1])
        .filter(|(before, after)| before.timestamp != after.timestamp || before.status != after.status)
        .map(|(_, after)| after)
        .collect();

    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].status, ReadingStatus::Active);
    assert_eq!(snapshots[1].iter().filter(|r| r.is_error()).count(), 7);
}

#[tokio::test(start_paused = true)]
async fn stop_halts_updates_and_keeps_last_values() {
    let manager = reference_manager();
    let listener = RecordingListener::new();
    let _subscription = manager.subscribe(listener.callback());

    manager
        .start_real_time_updates(Duration::from_millis(100))
        .unwrap();
    sleep(Duration::from_millis(250)).await;
    manager.stop_real_time_updates();
    let frozen = manager.get_all_data();

    sleep(Duration::from_millis(1000)).await;

    assert_eq!(listener.count(), 1 + 2);
    assert_eq!(manager.get_all_data(), frozen);
    assert!(!manager.is_real_time_active());
}

#[tokio::test(start_paused = true)]
async fn stop_twice_is_harmless() {
    let manager = reference_manager();

    manager
        .start_real_time_updates(Duration::from_millis(100))
        .unwrap();
    manager.stop_real_time_updates();
    let before = manager.get_all_data();
    manager.stop_real_time_updates();

    sleep(Duration::from_millis(500)).await;
    assert_eq!(manager.get_all_data(), before);
}

#[tokio::test(start_paused = true)]
async fn restart_keeps_a_single_cycle_at_the_new_interval() {
    let manager = reference_manager();
    let listener = RecordingListener::new();
    let _subscription = manager.subscribe(listener.callback());

    manager
        .start_real_time_updates(Duration::from_millis(1000))
        .unwrap();
    manager
        .start_real_time_updates(Duration::from_millis(2000))
        .unwrap();

    assert_eq!(manager.real_time_interval(), Some(Duration::from_millis(2000)));

    sleep(Duration::from_millis(1500)).await;
    assert_eq!(listener.count(), 1, "old 1000ms cycle must not fire");

    sleep(Duration::from_millis(1000)).await;
    assert_eq!(listener.count(), 2);

    sleep(Duration::from_millis(2000)).await;
    assert_eq!(listener.count(), 3);

    manager.stop_real_time_updates();
}

#[tokio::test(start_paused = true)]
async fn default_start_uses_configured_interval() {
    let settings = SimulationSettings {
        update_interval_ms: 300,
        ..healthy_settings()
    };
    let manager = SensorDataManager::new(ConfigTable::default_table(), settings);

    manager.start_real_time_updates_default().unwrap();

    assert_eq!(manager.real_time_interval(), Some(Duration::from_millis(300)));
    manager.stop_real_time_updates();
}

#[tokio::test(start_paused = true)]
async fn unsubscribed_listener_misses_ticks() {
    let manager = reference_manager();
    let kept = RecordingListener::new();
    let dropped = RecordingListener::new();
    let _kept_subscription = manager.subscribe(kept.callback());
    let dropped_subscription = manager.subscribe(dropped.callback());

    manager
        .start_real_time_updates(Duration::from_millis(100))
        .unwrap();
    sleep(Duration::from_millis(150)).await;
    dropped_subscription.unsubscribe();
    sleep(Duration::from_millis(300)).await;
    manager.stop_real_time_updates();

    assert_eq!(dropped.count(), 2);
    assert_eq!(kept.count(), 1 + 4);
}

#[tokio::test(start_paused = true)]
async fn dropping_manager_stops_the_cycle() {
    let manager = reference_manager();
    let listener = RecordingListener::new();
    manager.subscribe(listener.callback()).detach();

    manager
        .start_real_time_updates(Duration::from_millis(100))
        .unwrap();
    sleep(Duration::from_millis(150)).await;
    drop(manager);

    sleep(Duration::from_millis(1000)).await;
    assert_eq!(listener.count(), 2);
}

#[tokio::test(start_paused = true)]
async fn update_stream_yields_current_set_then_changes() {
    let manager = reference_manager();
    let mut updates = manager.updates();

    let first = expect_next_snapshot(&mut updates).await;
    assert_eq!(first, manager.get_all_data());

    manager.update_sensor("SENS_002", 88.0);
    let second = expect_next_snapshot(&mut updates).await;
    assert_eq!(second[1].value, 88.0);

    manager.update_sensor("UNKNOWN", 1.0);
    assert_no_element_emitted(&mut updates, 100).await;
}

#[tokio::test(start_paused = true)]
async fn update_stream_follows_ticks() {
    let manager = reference_manager();
    let mut updates = manager.updates();
    let _initial = expect_next_snapshot(&mut updates).await;

    manager
        .start_real_time_updates(Duration::from_millis(100))
        .unwrap();

    for _ in 0..3 {
        let snapshot = expect_next_snapshot(&mut updates).await;
        assert_within_ranges(manager.config_table(), &snapshot);
    }
    manager.stop_real_time_updates();
}

#[tokio::test]
async fn closing_update_stream_unsubscribes() {
    let manager = reference_manager();
    let mut updates = manager.updates();
    assert_eq!(manager.subscriber_count(), 1);

    updates.close();
    assert_eq!(manager.subscriber_count(), 0);

    drop(updates);
    let _other = manager.updates();
    assert_eq!(manager.subscriber_count(), 1);
}
