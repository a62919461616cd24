// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airwell_core::{AirwellConfig, ConfigTable, QuantityType, ReadingStatus, SimulationSettings};
use airwell_monitor::SensorDataManager;
use airwell_test_utils::{
    assert_within_ranges, faulty_settings, healthy_settings, ids_of, sens_001_table,
    two_sensor_table, RecordingListener,
};
use parking_lot::Mutex;
use std::sync::Arc;

fn reference_manager() -> SensorDataManager {
    SensorDataManager::new(ConfigTable::default_table(), healthy_settings())
}

#[test]
fn initial_readings_cover_every_configured_sensor() {
    let manager = reference_manager();
    let readings = manager.get_all_data();

    assert_eq!(ids_of(&readings), manager.config_table().ids().map(String::from).collect::<Vec<_>>());
    assert_within_ranges(manager.config_table(), &readings);
}

#[test]
fn subscribe_delivers_current_set_immediately() {
    let manager = reference_manager();
    let listener = RecordingListener::new();

    let _subscription = manager.subscribe(listener.callback());

    assert_eq!(listener.count(), 1);
    assert_eq!(listener.last().unwrap(), manager.get_all_data());
}

#[test]
fn update_notifies_with_full_set() {
    let manager = SensorDataManager::new(two_sensor_table(), healthy_settings());
    let listener = RecordingListener::new();
    let _subscription = manager.subscribe(listener.callback());

    assert!(manager.update_sensor("SENS_007", 12.5));

    let snapshot = listener.last().unwrap();
    assert_eq!(listener.count(), 2);
    assert_eq!(ids_of(&snapshot), ["SENS_001", "SENS_007"]);
    assert_eq!(snapshot[1].value, 12.5);
}

#[test]
fn update_sets_value_and_forces_active() {
    let manager = SensorDataManager::new(sens_001_table(), faulty_settings());
    assert_eq!(manager.get_sensor_by_id("SENS_001").unwrap().status, ReadingStatus::Error);
    let before = manager.get_sensor_by_id("SENS_001").unwrap().timestamp;

    manager.update_sensor("SENS_001", 33.0);

    let reading = manager.get_sensor_by_id("SENS_001").unwrap();
    assert_eq!(reading.value, 33.0);
    assert_eq!(reading.status, ReadingStatus::Active);
    assert!(reading.timestamp >= before);
    assert_eq!(reading.quantity, QuantityType::Temperature);
}

#[test]
fn unknown_id_is_a_silent_no_op() {
    let manager = reference_manager();
    let listener = RecordingListener::new();
    let _subscription = manager.subscribe(listener.callback());
    let before = manager.get_all_data();

    assert!(!manager.update_sensor("NOT_A_REAL_ID", 42.0));

    assert_eq!(manager.get_all_data(), before);
    assert_eq!(listener.count(), 1);
}

#[test]
fn non_finite_value_is_ignored() {
    let manager = reference_manager();
    let listener = RecordingListener::new();
    let _subscription = manager.subscribe(listener.callback());
    let before = manager.get_all_data();

    assert!(!manager.update_sensor("SENS_001", f64::NAN));
    assert!(!manager.update_sensor("SENS_001", f64::INFINITY));

    assert_eq!(manager.get_all_data(), before);
    assert_eq!(listener.count(), 1);
}

#[test]
fn unsubscribe_stops_delivery() {
    let manager = reference_manager();
    let listener = RecordingListener::new();
    let subscription = manager.subscribe(listener.callback());

    subscription.unsubscribe();
    manager.update_sensor("SENS_001", 30.0);

    assert_eq!(listener.count(), 1);
    assert!(!subscription.is_active());
    assert_eq!(manager.subscriber_count(), 0);
}

#[test]
fn double_unsubscribe_removes_only_its_own_listener() {
    let manager = reference_manager();
    let first = RecordingListener::new();
    let second = RecordingListener::new();

    let first_subscription = manager.subscribe(first.callback());
    let _second_subscription = manager.subscribe(second.callback());

    first_subscription.unsubscribe();
    first_subscription.unsubscribe();
    manager.update_sensor("SENS_002", 80.0);

    assert_eq!(first.count(), 1);
    assert_eq!(second.count(), 2);
    assert_eq!(manager.subscriber_count(), 1);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let manager = reference_manager();
    let listener = RecordingListener::new();

    {
        let _subscription = manager.subscribe(listener.callback());
        assert_eq!(manager.subscriber_count(), 1);
    }

    manager.update_sensor("SENS_001", 30.0);
    assert_eq!(listener.count(), 1);
    assert_eq!(manager.subscriber_count(), 0);
}

#[test]
fn detached_subscription_keeps_listening() {
    let manager = reference_manager();
    let listener = RecordingListener::new();

    manager.subscribe(listener.callback()).detach();
    manager.update_sensor("SENS_001", 30.0);

    assert_eq!(listener.count(), 2);
    assert_eq!(manager.subscriber_count(), 1);
}

#[test]
fn subscribers_are_notified_in_registration_order() {
    let manager = reference_manager();
    let order = Arc::new(Mutex::new(Vec::new()));

    let subscriptions: Vec<_> = (0..4)
        .map(|index| {
            let order = order.clone();
            manager.subscribe(move |_readings| order.lock().push(index))
        })
        .collect();
    order.lock().clear();

    manager.update_sensor("SENS_003", 900.0);

    assert_eq!(*order.lock(), [0, 1, 2, 3]);
    drop(subscriptions);
}

#[test]
fn returned_data_is_a_copy() {
    let manager = reference_manager();

    let mut copy = manager.get_all_data();
    copy[0].value = -1000.0;
    copy.clear();

    assert_eq!(manager.get_all_data().len(), 8);
    assert_ne!(manager.get_sensor_by_id("SENS_001").unwrap().value, -1000.0);
}

#[test]
fn lookup_by_id_and_type() {
    let manager = reference_manager();

    assert_eq!(manager.get_sensor_by_id("SENS_005").unwrap().quantity, QuantityType::Pm10);
    assert!(manager.get_sensor_by_id("SENS_999").is_none());

    let water = manager.get_sensors_by_type(QuantityType::WaterLevel);
    assert_eq!(ids_of(&water), ["SENS_007"]);
}

#[test]
fn lookup_by_type_returns_all_matches() {
    let document = r#"
        [simulation]
        seed = 11

        [[sensors]]
        id = "T_INDOOR"
        quantity = "Temperature"
        name = "Indoor"
        unit = "°C"
        min_value = 15.0
        max_value = 30.0

        [[sensors]]
        id = "H_1"
        quantity = "Humidity"
        name = "Humidity"
        unit = "%"
        min_value = 0.0
        max_value = 100.0

        [[sensors]]
        id = "T_OUTDOOR"
        quantity = "Temperature"
        name = "Outdoor"
        unit = "°C"
        min_value = 10.0
        max_value = 45.0
    "#;
    let config = AirwellConfig::from_toml_str(document).unwrap();
    let manager = SensorDataManager::from_config(config).unwrap();

    let temperatures = manager.get_sensors_by_type(QuantityType::Temperature);

    assert_eq!(ids_of(&temperatures), ["T_INDOOR", "T_OUTDOOR"]);
    assert!(manager.get_sensors_by_type(QuantityType::SolarPower).is_empty());
}

#[test]
fn listener_may_call_back_into_manager() {
    let manager = Arc::new(reference_manager());
    let seen = Arc::new(Mutex::new(Vec::new()));

    let inner = Arc::downgrade(&manager);
    let record = seen.clone();
    let _subscription = manager.subscribe(move |readings| {
        record.lock().push(readings[0].value);
        if let Some(manager) = inner.upgrade() {
            // nested update on every notification about 33.0
            if readings[0].value == 33.0 {
                manager.update_sensor("SENS_001", 34.0);
            }
        }
    });

    manager.update_sensor("SENS_001", 33.0);

    let seen = seen.lock();
    assert_eq!(&seen[1..], [33.0, 34.0]);
    assert_eq!(manager.get_sensor_by_id("SENS_001").unwrap().value, 34.0);
}

#[test]
fn listener_may_unsubscribe_itself() {
    let manager = reference_manager();
    let slot: Arc<Mutex<Option<airwell_monitor::Subscription>>> = Arc::new(Mutex::new(None));
    let calls = Arc::new(Mutex::new(0));

    let own = slot.clone();
    let counter = calls.clone();
    let subscription = manager.subscribe(move |_readings| {
        *counter.lock() += 1;
        if let Some(subscription) = own.lock().as_ref() {
            subscription.unsubscribe();
        }
    });
    *slot.lock() = Some(subscription);

    manager.update_sensor("SENS_001", 30.0);
    manager.update_sensor("SENS_001", 31.0);

    assert_eq!(*calls.lock(), 2);
    assert_eq!(manager.subscriber_count(), 0);
}

#[test]
fn same_seed_same_initial_readings() {
    let values = |manager: &SensorDataManager| {
        manager
            .get_all_data()
            .into_iter()
            .map(|reading| (reading.value, reading.status))
            .collect::<Vec<_>>()
    };

    let first = SensorDataManager::new(ConfigTable::default_table(), SimulationSettings::seeded(3));
    let second = SensorDataManager::new(ConfigTable::default_table(), SimulationSettings::seeded(3));

    assert_eq!(values(&first), values(&second));
}

#[test]
fn default_manager_uses_reference_unit() {
    let manager = SensorDataManager::default();

    assert_eq!(manager.config_table(), &ConfigTable::default_table());
    assert_eq!(manager.settings().location, "Main Unit - Hyderabad");
    assert!(!manager.is_real_time_active());
}

#[test]
fn stop_without_start_is_a_no_op() {
    let manager = reference_manager();
    let before = manager.get_all_data();

    manager.stop_real_time_updates();
    manager.stop_real_time_updates();

    assert!(!manager.is_real_time_active());
    assert_eq!(manager.get_all_data(), before);
}
