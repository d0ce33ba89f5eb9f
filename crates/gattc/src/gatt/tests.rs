//! Scenario tests for the GATT client engine

use super::mock_transport::{MockTransport, TransportCall};
use super::*;
use crate::att::{AttErrorCode, ATT_DEFAULT_MTU};
use crate::bt_sig::{self, declarations, descriptors};
use crate::error::{GattcError, TransportError};
use crate::uuid::Uuid;
use futures::executor::block_on;
use std::sync::{Arc, Mutex};

const CONN: u16 = 0x0040;

fn battery_level(properties: CharacteristicProperties) -> DiscoveredCharacteristic {
    DiscoveredCharacteristic {
        uuid: Uuid::from_u16(0x2A19),
        properties,
        declaration_handle: 10,
        value_handle: 11,
        declaration_value: vec![properties.bits(), 0x0B, 0x00, 0x19, 0x2A],
        descriptors: vec![
            DiscoveredDescriptor {
                handle: 10,
                uuid: declarations::CHARACTERISTIC,
            },
            DiscoveredDescriptor {
                handle: 11,
                uuid: Uuid::from_u16(0x2A19),
            },
            DiscoveredDescriptor {
                handle: 12,
                uuid: descriptors::CCCD,
            },
        ],
    }
}

fn battery_service(characteristics: Vec<DiscoveredCharacteristic>) -> DiscoveredService {
    DiscoveredService {
        uuid: Uuid::from_u16(0x180F),
        service_type: ServiceType::Primary,
        start_handle: 9,
        end_handle: 12,
        characteristics,
    }
}

struct Fixture {
    transport: Arc<MockTransport>,
    database: GattcDatabase,
    characteristic: Arc<GattcCharacteristic>,
}

fn setup(properties: CharacteristicProperties) -> Fixture {
    let transport = MockTransport::new();
    let database = GattcDatabase::new(CONN, transport.clone());
    database
        .add_discovered_services(vec![battery_service(vec![battery_level(properties)])])
        .unwrap();
    let characteristic = database
        .find_characteristic(&bt_sig::characteristics::BATTERY_LEVEL)
        .unwrap();
    Fixture {
        transport,
        database,
        characteristic,
    }
}

type Received = Arc<Mutex<Vec<Notification>>>;

fn recorder() -> (Received, impl Fn(&Notification) + Send + Sync + 'static) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    (received, move |n: &Notification| sink.lock().unwrap().push(n.clone()))
}

fn cccd_write(data: [u8; 2]) -> TransportCall {
    TransportCall::Write {
        conn_handle: CONN,
        handle: 12,
        data: data.to_vec(),
        with_response: true,
    }
}

fn read_notify() -> CharacteristicProperties {
    CharacteristicProperties::READ | CharacteristicProperties::NOTIFY
}

#[test]
fn test_battery_level_read() {
    let f = setup(read_notify());

    let mut op = f.characteristic.read().unwrap();
    assert_eq!(
        f.transport.take_calls(),
        vec![TransportCall::Read {
            conn_handle: CONN,
            handle: 11
        }]
    );
    assert_eq!(f.characteristic.value_attribute().pending_read(), Some(op.id()));
    assert!(op.try_result().is_none());

    f.database.on_read_response(11, Ok(vec![85]));

    assert_eq!(op.try_result(), Some(Ok(vec![85])));
    assert_eq!(f.characteristic.value(), vec![85]);
    assert_eq!(f.characteristic.value_attribute().pending_read(), None);
}

#[test]
fn test_lookup_by_128_bit_uuid() {
    let f = setup(read_notify());

    let long = Uuid::from_u128(0x0000_2A19_0000_1000_8000_0080_5F9B_34FB);
    assert_eq!(long, Uuid::from_u16(0x2A19));
    let found = f.database.find_characteristic(&long).unwrap();
    assert!(Arc::ptr_eq(&found, &f.characteristic));

    let service = f.database.find_service(&"0000180f-0000-1000-8000-00805f9b34fb".parse().unwrap());
    assert_eq!(service.unwrap().start_handle(), 9);
}

#[test]
fn test_subscribe_notify_scenario() {
    let f = setup(read_notify());
    let (received, handler) = recorder();

    let op = f.characteristic.subscribe(handler, false).unwrap();
    assert_eq!(f.transport.take_calls(), vec![cccd_write([0x01, 0x00])]);
    // Not subscribed until the peer accepts the write
    assert_eq!(f.characteristic.subscription_state(), SubscriptionState::NotSubscribed);
    assert!(!f.characteristic.subscribed());

    f.database.on_write_response(12, Ok(()));
    assert_eq!(block_on(op), Ok(SubscriptionState::Notify));
    assert_eq!(f.characteristic.subscription_state(), SubscriptionState::Notify);
    assert!(f.characteristic.subscribed());
    assert_eq!(
        f.characteristic.cccd_attribute().unwrap().value(),
        vec![0x01, 0x00]
    );

    assert!(f.database.handle_value(11, &[60], false));
    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].value, vec![60]);
    assert!(!received[0].is_indication);
    assert_eq!(received[0].handle, 11);
    assert_eq!(f.characteristic.value(), vec![60]);
    assert!(f.transport.take_calls().is_empty());
}

#[test]
fn test_indicate_only_selects_indication() {
    let f = setup(CharacteristicProperties::READ | CharacteristicProperties::INDICATE);
    let (_received, handler) = recorder();

    let op = f.characteristic.subscribe(handler, false).unwrap();
    assert_eq!(f.transport.take_calls(), vec![cccd_write([0x02, 0x00])]);

    f.database.on_write_response(12, Ok(()));
    assert_eq!(block_on(op), Ok(SubscriptionState::Indication));
}

#[test]
fn test_prefer_indications_when_both_supported() {
    let f = setup(
        CharacteristicProperties::NOTIFY
            | CharacteristicProperties::INDICATE
            | CharacteristicProperties::READ,
    );

    f.characteristic.subscribe(|_: &Notification| {}, true).unwrap();
    assert_eq!(f.transport.take_calls(), vec![cccd_write([0x02, 0x00])]);
    f.database.on_write_response(12, Ok(()));

    f.characteristic.subscribe(|_: &Notification| {}, false).unwrap();
    assert_eq!(f.transport.take_calls(), vec![cccd_write([0x01, 0x00])]);
    f.database.on_write_response(12, Ok(()));
    assert_eq!(f.characteristic.subscription_state(), SubscriptionState::Notify);
}

#[test]
fn test_failed_cccd_write_keeps_prior_state() {
    let f = setup(read_notify());

    let op = f.characteristic.subscribe(|_: &Notification| {}, false).unwrap();
    f.database.on_write_response(12, Err(TransportError::Att(AttErrorCode::WriteNotPermitted)));
    let err = block_on(op).unwrap_err();
    assert_eq!(err.att_error(), Some(AttErrorCode::WriteNotPermitted));
    assert_eq!(f.characteristic.subscription_state(), SubscriptionState::NotSubscribed);

    let op = f.characteristic.subscribe(|_: &Notification| {}, false).unwrap();
    f.database.on_write_response(12, Ok(()));
    assert_eq!(block_on(op), Ok(SubscriptionState::Notify));

    let op = f.characteristic.unsubscribe().unwrap();
    f.database.on_write_response(
        12,
        Err(TransportError::Att(AttErrorCode::InsufficientAuthentication)),
    );
    assert!(matches!(
        block_on(op),
        Err(GattcError::TransportFailure { handle: 12, .. })
    ));
    assert_eq!(f.characteristic.subscription_state(), SubscriptionState::Notify);
}

#[test]
fn test_notification_racing_cccd_write_is_delivered() {
    let f = setup(read_notify());
    let (received, handler) = recorder();

    let mut op = f.characteristic.subscribe(handler, false).unwrap();
    assert!(f.database.handle_value(11, &[42], false));
    assert!(op.try_result().is_none());

    assert_eq!(received.lock().unwrap().len(), 1);
    assert_eq!(received.lock().unwrap()[0].value, vec![42]);
}

#[test]
fn test_unsubscribe_stops_dispatch_immediately() {
    let f = setup(read_notify());
    let (received, handler) = recorder();

    f.characteristic.subscribe(handler, false).unwrap();
    f.database.on_write_response(12, Ok(()));
    f.transport.take_calls();

    let op = f.characteristic.unsubscribe().unwrap();
    assert_eq!(f.transport.take_calls(), vec![cccd_write([0x00, 0x00])]);

    // CCCD write still outstanding
    f.database.handle_value(11, &[1], false);
    assert!(received.lock().unwrap().is_empty());
    assert_eq!(f.characteristic.value(), vec![1]);

    f.database.on_write_response(12, Ok(()));
    assert_eq!(block_on(op), Ok(SubscriptionState::NotSubscribed));
    assert!(!f.characteristic.subscribed());
}

#[test]
fn test_indication_confirmed_before_handlers() {
    let f = setup(CharacteristicProperties::INDICATE);
    let seen: Arc<Mutex<Vec<Vec<TransportCall>>>> = Arc::new(Mutex::new(Vec::new()));

    let handler = {
        let transport = f.transport.clone();
        let seen = seen.clone();
        move |n: &Notification| {
            assert!(n.is_indication);
            seen.lock().unwrap().push(transport.take_calls());
        }
    };
    f.characteristic.subscribe(handler, false).unwrap();
    f.database.on_write_response(12, Ok(()));
    f.transport.take_calls();

    f.database.handle_value(11, &[7], true);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![vec![TransportCall::Confirm {
            conn_handle: CONN,
            handle: 11
        }]]
    );
}

#[test]
fn test_indication_confirmed_without_handlers() {
    let f = setup(CharacteristicProperties::INDICATE);

    f.database.handle_value(11, &[7], true);
    assert_eq!(
        f.transport.take_calls(),
        vec![TransportCall::Confirm {
            conn_handle: CONN,
            handle: 11
        }]
    );

    f.database.set_config(GattcConfig {
        confirm_indications: false,
        ..GattcConfig::default()
    });
    f.database.handle_value(11, &[8], true);
    assert!(f.transport.take_calls().is_empty());
    assert_eq!(f.characteristic.value(), vec![8]);
}

#[test]
fn test_disconnect_fails_everything() {
    let f = setup(read_notify() | CharacteristicProperties::WRITE);

    let first = f.characteristic.read().unwrap();
    let second = f.characteristic.read().unwrap();
    let write = f.characteristic.write(&[1]).unwrap();
    let subscribe = f.characteristic.subscribe(|_: &Notification| {}, false).unwrap();
    assert_eq!(f.database.pending_operations(OperationKind::Read), 2);
    assert_eq!(f.database.pending_operations(OperationKind::Write), 2);

    f.database.disconnect(0x13);

    let disconnected = Err(GattcError::Disconnected { reason: 0x13 });
    assert_eq!(block_on(first), disconnected);
    assert_eq!(block_on(second), disconnected);
    assert_eq!(block_on(write), disconnected);
    assert_eq!(
        block_on(subscribe),
        Err(GattcError::Disconnected { reason: 0x13 })
    );
    assert_eq!(f.characteristic.subscription_state(), SubscriptionState::NotSubscribed);

    assert!(!f.database.is_connected());
    assert_eq!(f.database.disconnect_reason(), Some(0x13));
    assert!(f.characteristic.read().unwrap_err().is_disconnected());
    assert!(f
        .characteristic
        .subscribe(|_: &Notification| {}, false)
        .unwrap_err()
        .is_disconnected());
    assert!(!f.database.handle_value(11, &[1], false));
    assert!(f
        .database
        .add_discovered_services(Vec::new())
        .unwrap_err()
        .is_disconnected());
}

#[test]
fn test_dropping_database_fails_outstanding_operations() {
    let f = setup(read_notify());
    let characteristic = f.characteristic.clone();

    let op = characteristic.read().unwrap();
    drop(f);

    assert_eq!(block_on(op), Err(GattcError::Disconnected { reason: 0x16 }));
    assert!(characteristic.read().unwrap_err().is_disconnected());
}

#[test]
fn test_capability_gating() {
    let f = setup(CharacteristicProperties::READ);

    let invalid = |result: Result<(), GattcError>| {
        assert!(matches!(result, Err(GattcError::InvalidOperation(_))));
    };
    invalid(f.characteristic.write(&[1]).map(|_| ()));
    invalid(f.characteristic.write_without_response(&[1]).map(|_| ()));
    invalid(f.characteristic.subscribe(|_: &Notification| {}, false).map(|_| ()));
    invalid(f.characteristic.unsubscribe().map(|_| ()));
    assert!(f.transport.take_calls().is_empty());

    let f = setup(CharacteristicProperties::NOTIFY);
    invalid(f.characteristic.read().map(|_| ()));
}

#[test]
fn test_subscribe_requires_cccd() {
    let transport = MockTransport::new();
    let database = GattcDatabase::new(CONN, transport.clone());
    let mut characteristic = battery_level(read_notify());
    characteristic.descriptors.truncate(2);
    database
        .add_discovered_services(vec![battery_service(vec![characteristic])])
        .unwrap();

    let characteristic = database.characteristic_by_handle(11).unwrap();
    assert!(characteristic.subscribable());
    assert!(characteristic.cccd_attribute().is_none());
    assert!(matches!(
        characteristic.subscribe(|_: &Notification| {}, false),
        Err(GattcError::InvalidOperation(_))
    ));
    assert!(transport.take_calls().is_empty());
}

#[test]
fn test_write_updates_cache_on_confirmation() {
    let f = setup(CharacteristicProperties::READ | CharacteristicProperties::WRITE);

    let op = f.characteristic.write(&[1, 2]).unwrap();
    assert_eq!(
        f.transport.take_calls(),
        vec![TransportCall::Write {
            conn_handle: CONN,
            handle: 11,
            data: vec![1, 2],
            with_response: true,
        }]
    );
    assert!(f.characteristic.value().is_empty());

    f.database.on_write_response(11, Ok(()));
    assert_eq!(block_on(op), Ok(vec![1, 2]));
    assert_eq!(f.characteristic.value(), vec![1, 2]);

    let op = f.characteristic.write(&[3]).unwrap();
    f.database.on_write_response(11, Err(TransportError::Att(AttErrorCode::InvalidAttributeValueLength)));
    assert!(block_on(op).is_err());
    assert_eq!(f.characteristic.value(), vec![1, 2]);
}

#[test]
fn test_write_without_response_length() {
    let f = setup(CharacteristicProperties::WRITE_WITHOUT_RESPONSE);

    // Default MTU of 23 leaves 20 bytes; oversized payloads still go out
    f.characteristic.write_without_response(&[0u8; 21]).unwrap();
    assert_eq!(
        f.transport.take_calls(),
        vec![TransportCall::Write {
            conn_handle: CONN,
            handle: 11,
            data: vec![0u8; 21],
            with_response: false,
        }]
    );
    f.database.on_write_response(11, Ok(()));

    f.database.set_config(GattcConfig {
        enforce_write_command_length: true,
        ..GattcConfig::default()
    });
    assert!(matches!(
        f.characteristic.write_without_response(&[0u8; 21]),
        Err(GattcError::InvalidOperation(_))
    ));
    assert!(f.characteristic.write_without_response(&[0u8; 20]).is_ok());

    f.transport.set_mtu(247);
    assert_eq!(f.database.mtu(), 247);
    f.database.on_write_response(11, Ok(()));
    assert!(f.characteristic.write_without_response(&[0u8; 244]).is_ok());
}

#[test]
fn test_reads_complete_in_fifo_order() {
    let f = setup(read_notify() | CharacteristicProperties::WRITE);
    let cccd = f.characteristic.cccd_attribute().unwrap();

    let mut value_read = f.characteristic.read().unwrap();
    let mut cccd_read = cccd.read().unwrap();
    let mut write = f.characteristic.write(&[9]).unwrap();
    assert!(value_read.id() < cccd_read.id());

    // Only the head of each queue reaches the transport
    assert_eq!(f.transport.take_calls().len(), 2);

    // A completion for a request that is not in flight is ignored
    f.database.on_read_response(12, Ok(vec![1, 0]));
    assert!(cccd_read.try_result().is_none());

    f.database.on_write_response(11, Ok(()));
    assert_eq!(write.try_result(), Some(Ok(vec![9])));
    assert!(value_read.try_result().is_none());

    f.database.on_read_response(11, Ok(vec![50]));
    assert_eq!(value_read.try_result(), Some(Ok(vec![50])));
    assert_eq!(
        f.transport.take_calls(),
        vec![TransportCall::Read {
            conn_handle: CONN,
            handle: 12
        }]
    );

    f.database.on_read_response(12, Ok(vec![1, 0]));
    assert_eq!(cccd_read.try_result(), Some(Ok(vec![1, 0])));
    assert_eq!(cccd.value(), vec![1, 0]);
}

#[test]
fn test_refused_issue_completes_immediately() {
    let f = setup(read_notify());
    f.transport.reject_issues(true);

    let mut op = f.characteristic.read().unwrap();
    assert!(matches!(
        op.try_result(),
        Some(Err(GattcError::TransportFailure {
            handle: 11,
            source: TransportError::Rejected(_)
        }))
    ));
    assert_eq!(f.characteristic.value_attribute().pending_read(), None);

    f.transport.reject_issues(false);
    let op = f.characteristic.read().unwrap();
    f.database.on_read_response(11, Ok(vec![3]));
    assert_eq!(block_on(op), Ok(vec![3]));
}

#[test]
fn test_lookups_return_none() {
    let f = setup(read_notify());

    assert!(f.database.find_service(&Uuid::from_u16(0x1800)).is_none());
    assert!(f.database.find_characteristic(&Uuid::from_u16(0x2A00)).is_none());
    assert!(f.characteristic.find_descriptor(&Uuid::from_u16(0x2901)).is_none());
    assert!(f.database.characteristic_by_handle(12).is_none());

    let cccd = f.characteristic.find_descriptor(&descriptors::CCCD).unwrap();
    assert_eq!(cccd.handle(), 12);
}

#[test]
fn test_duplicate_services_are_kept() {
    let transport = MockTransport::new();
    let database = GattcDatabase::new(CONN, transport);

    let mut second = battery_service(vec![battery_level(read_notify())]);
    second.start_handle = 20;
    second.end_handle = 23;
    let mut characteristic = battery_level(read_notify());
    characteristic.declaration_handle = 21;
    characteristic.value_handle = 22;
    for (desc, handle) in characteristic.descriptors.iter_mut().zip(21..) {
        desc.handle = handle;
    }
    second.characteristics = vec![characteristic];

    database
        .add_discovered_services(vec![battery_service(vec![battery_level(read_notify())])])
        .unwrap();
    database.add_discovered_services(vec![second]).unwrap();

    assert_eq!(database.services().len(), 2);
    assert_eq!(database.characteristics().len(), 2);
    let service = database.find_service(&Uuid::from_u16(0x180F)).unwrap();
    assert_eq!(service.start_handle(), 9);
    let characteristic = database.find_characteristic(&Uuid::from_u16(0x2A19)).unwrap();
    assert_eq!(characteristic.value_attribute().handle(), 11);
    assert!(database.characteristic_by_handle(22).is_some());
}

#[test]
fn test_invalid_discovery_is_rejected() {
    let database = GattcDatabase::new(CONN, MockTransport::new());
    let invalid = |result: crate::error::GattcResult<()>| {
        assert!(matches!(result, Err(GattcError::InvalidDatabase(_))));
    };

    let mut outside = battery_service(vec![battery_level(read_notify())]);
    outside.end_handle = 11;
    invalid(database.add_discovered_services(vec![outside]));

    let mut backwards = battery_level(read_notify());
    backwards.value_handle = 10;
    invalid(database.add_discovered_services(vec![battery_service(vec![backwards])]));

    let mut reversed = battery_service(Vec::new());
    reversed.start_handle = 12;
    reversed.end_handle = 9;
    invalid(database.add_discovered_services(vec![reversed]));

    // The second service overlaps the first, so neither is added
    let mut overlapping = battery_service(Vec::new());
    overlapping.start_handle = 12;
    overlapping.end_handle = 15;
    invalid(database.add_discovered_services(vec![
        battery_service(vec![battery_level(read_notify())]),
        overlapping,
    ]));
    assert!(database.services().is_empty());

    // Second characteristic claims value handle 11 as well
    let mut duplicate = battery_level(read_notify());
    duplicate.declaration_handle = 6;
    duplicate.descriptors.clear();
    let mut service = battery_service(vec![battery_level(read_notify()), duplicate]);
    service.start_handle = 5;
    invalid(database.add_discovered_services(vec![service]));

    // First characteristic's CCCD sits on the second one's value handle
    let mut first = battery_level(read_notify());
    first.descriptors[2].handle = 14;
    let mut second = battery_level(read_notify());
    second.uuid = Uuid::from_u16(0x2A37);
    second.declaration_handle = 13;
    second.value_handle = 14;
    second.descriptors.clear();
    let mut service = battery_service(vec![first.clone(), second]);
    service.end_handle = 15;
    invalid(database.add_discovered_services(vec![service]));

    // Interleaved characteristics without a shared handle
    let mut second = battery_level(read_notify());
    second.uuid = Uuid::from_u16(0x2A37);
    second.declaration_handle = 12;
    second.value_handle = 13;
    second.descriptors.clear();
    let mut service = battery_service(vec![first, second]);
    service.end_handle = 15;
    invalid(database.add_discovered_services(vec![service]));

    assert!(database.characteristics().is_empty());
    assert!(database.characteristic_by_handle(14).is_none());
}

#[test]
fn test_adjacent_characteristics_are_accepted() {
    let database = GattcDatabase::new(CONN, MockTransport::new());
    let mut second = battery_level(read_notify());
    second.uuid = Uuid::from_u16(0x2A37);
    second.declaration_handle = 13;
    second.value_handle = 14;
    second.descriptors.clear();
    let mut service = battery_service(vec![battery_level(read_notify()), second]);
    service.end_handle = 15;
    database.add_discovered_services(vec![service]).unwrap();

    assert_eq!(database.characteristics().len(), 2);
    let heart_rate = database.characteristic_by_handle(14).unwrap();
    assert_eq!(heart_rate.handle_range(), (13, 14));
    assert!(heart_rate.cccd_attribute().is_none());
}

#[test]
fn test_missing_attributes_are_synthesized() {
    let database = GattcDatabase::new(CONN, MockTransport::new());
    let mut discovered = battery_level(read_notify());
    discovered.descriptors = vec![DiscoveredDescriptor {
        handle: 12,
        uuid: descriptors::CCCD,
    }];
    database
        .add_discovered_services(vec![battery_service(vec![discovered])])
        .unwrap();

    let characteristic = database.characteristic_by_handle(11).unwrap();
    let handles: Vec<u16> = characteristic.attributes().iter().map(|a| a.handle()).collect();
    assert_eq!(handles, vec![10, 11, 12]);
    assert_eq!(characteristic.handle_range(), (10, 12));

    let declaration = characteristic.declaration_attribute();
    assert_eq!(*declaration.uuid(), declarations::CHARACTERISTIC);
    assert_eq!(declaration.uuid().description(), Some("Characteristic Declaration"));
    assert_eq!(declaration.value(), vec![0x12, 0x0B, 0x00, 0x19, 0x2A]);
    assert_eq!(characteristic.value_attribute().handle(), 11);
    assert_eq!(characteristic.uuid().description(), Some("Battery Level"));
}

#[test]
fn test_dispatcher_routes_by_connection() {
    let transport = MockTransport::new();
    let dispatcher = EventDispatcher::new();
    for conn_handle in [1, 2] {
        let database = Arc::new(GattcDatabase::new(conn_handle, transport.clone()));
        database
            .add_discovered_services(vec![battery_service(vec![battery_level(read_notify())])])
            .unwrap();
        assert!(dispatcher.register(database).is_none());
    }
    assert_eq!(dispatcher.connections(), vec![1, 2]);

    let first = dispatcher.database(1).unwrap().characteristic_by_handle(11).unwrap();
    let second = dispatcher.database(2).unwrap().characteristic_by_handle(11).unwrap();
    let mut first_read = first.read().unwrap();
    let second_read = second.read().unwrap();

    assert!(dispatcher.dispatch(TransportEvent::ReadResponse {
        conn_handle: 2,
        attr_handle: 11,
        status: AttErrorCode::Success,
        data: vec![77],
    }));
    assert_eq!(block_on(second_read), Ok(vec![77]));
    assert!(first_read.try_result().is_none());

    assert!(dispatcher.dispatch(TransportEvent::ReadResponse {
        conn_handle: 1,
        attr_handle: 11,
        status: AttErrorCode::ReadNotPermitted,
        data: Vec::new(),
    }));
    let err = first_read.try_result().unwrap().unwrap_err();
    assert_eq!(err.att_error(), Some(AttErrorCode::ReadNotPermitted));

    let (received, handler) = recorder();
    second.subscribe(handler, false).unwrap();
    assert!(dispatcher.dispatch(TransportEvent::WriteResponse {
        conn_handle: 2,
        attr_handle: 12,
        status: AttErrorCode::Success,
    }));
    assert!(second.subscribed());
    assert!(dispatcher.dispatch(TransportEvent::HandleValue {
        conn_handle: 2,
        attr_handle: 11,
        data: vec![90],
        is_indication: false,
    }));
    assert_eq!(received.lock().unwrap().len(), 1);

    assert!(!dispatcher.dispatch(TransportEvent::HandleValue {
        conn_handle: 3,
        attr_handle: 11,
        data: vec![1],
        is_indication: false,
    }));
    assert!(!dispatcher.dispatch(TransportEvent::HandleValue {
        conn_handle: 2,
        attr_handle: 40,
        data: vec![1],
        is_indication: false,
    }));
}

#[test]
fn test_dispatcher_disconnect_tears_down_database() {
    let dispatcher = EventDispatcher::new();
    let database = Arc::new(GattcDatabase::new(1, MockTransport::new()));
    database
        .add_discovered_services(vec![battery_service(vec![battery_level(read_notify())])])
        .unwrap();
    dispatcher.register(database.clone());

    let op = database.characteristic_by_handle(11).unwrap().read().unwrap();
    assert!(dispatcher.dispatch(TransportEvent::Disconnected {
        conn_handle: 1,
        reason: 0x08,
    }));

    assert_eq!(block_on(op), Err(GattcError::Disconnected { reason: 0x08 }));
    assert!(dispatcher.database(1).is_none());
    assert!(!database.is_connected());
    assert!(!dispatcher.dispatch(TransportEvent::Disconnected {
        conn_handle: 1,
        reason: 0x08,
    }));
}

#[test]
fn test_latest_pending_read_survives_earlier_completion() {
    let f = setup(read_notify());
    let attribute = f.characteristic.value_attribute();

    let mut first = attribute.read().unwrap();
    let mut second = attribute.read().unwrap();
    assert_eq!(attribute.pending_read(), Some(second.id()));

    f.database.on_read_response(11, Ok(vec![1]));
    assert_eq!(first.try_result(), Some(Ok(vec![1])));
    assert!(second.try_result().is_none());
    assert_eq!(attribute.pending_read(), Some(second.id()));
    assert_eq!(attribute.value(), vec![1]);

    f.database.on_read_response(11, Ok(vec![2]));
    assert_eq!(second.try_result(), Some(Ok(vec![2])));
    assert_eq!(attribute.pending_read(), None);
    assert_eq!(attribute.value(), vec![2]);
}

#[test]
fn test_latest_pending_write_survives_earlier_completion() {
    let f = setup(CharacteristicProperties::WRITE);
    let attribute = f.characteristic.value_attribute();

    let mut first = attribute.write(&[1], true).unwrap();
    let mut second = attribute.write(&[2], true).unwrap();
    assert_eq!(attribute.pending_write(), Some(second.id()));
    assert_eq!(attribute.pending_read(), None);

    f.database.on_write_response(11, Ok(()));
    assert_eq!(first.try_result(), Some(Ok(vec![1])));
    assert_eq!(attribute.pending_write(), Some(second.id()));
    assert_eq!(attribute.value(), vec![1]);

    f.database.on_write_response(11, Err(TransportError::Att(AttErrorCode::WriteNotPermitted)));
    assert!(matches!(
        second.try_result(),
        Some(Err(GattcError::TransportFailure { handle: 11, .. }))
    ));
    assert_eq!(attribute.pending_write(), None);
    assert_eq!(attribute.value(), vec![1]);
}

#[test]
fn test_completion_observers_see_every_value_operation() {
    let f = setup(read_notify() | CharacteristicProperties::WRITE);
    let events: Arc<Mutex<Vec<CompletionEvent>>> = Arc::new(Mutex::new(Vec::new()));
    {
        let events = events.clone();
        f.characteristic
            .on_read_complete(move |e: &CompletionEvent| events.lock().unwrap().push(e.clone()));
    }
    {
        let events = events.clone();
        f.characteristic
            .on_write_complete(move |e: &CompletionEvent| events.lock().unwrap().push(e.clone()));
    }

    let direct = f.characteristic.value_attribute().read().unwrap();
    f.database.on_read_response(11, Ok(vec![5]));
    let failed = f.characteristic.read().unwrap();
    f.database.on_read_response(11, Err(TransportError::Att(AttErrorCode::ReadNotPermitted)));
    let write = f.characteristic.write(&[6]).unwrap();
    f.database.on_write_response(11, Ok(()));

    // CCCD writes belong to another attribute
    f.characteristic.subscribe(|_: &Notification| {}, false).unwrap();
    f.database.on_write_response(12, Ok(()));

    {
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            CompletionEvent {
                id: direct.id(),
                handle: 11,
                kind: OperationKind::Read,
                result: Ok(vec![5]),
            }
        );
        assert_eq!(events[1].id, failed.id());
        assert_eq!(
            events[1].result.as_ref().unwrap_err().att_error(),
            Some(AttErrorCode::ReadNotPermitted)
        );
        assert_eq!(
            events[2],
            CompletionEvent {
                id: write.id(),
                handle: 11,
                kind: OperationKind::Write,
                result: Ok(vec![6]),
            }
        );
    }

    // Observers do not consume the caller's result
    assert_eq!(block_on(direct), Ok(vec![5]));
    assert_eq!(block_on(write), Ok(vec![6]));
}

#[test]
fn test_notification_handler_without_subscribe() {
    let f = setup(read_notify());
    let (received, handler) = recorder();

    f.characteristic.on_notification_received(handler);
    assert!(f.transport.take_calls().is_empty());
    assert!(!f.characteristic.subscribed());

    assert!(f.database.handle_value(11, &[3], false));
    assert_eq!(received.lock().unwrap().len(), 1);
    assert_eq!(received.lock().unwrap()[0].value, vec![3]);

    f.characteristic.unsubscribe().unwrap();
    f.database.handle_value(11, &[4], false);
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[test]
fn test_mtu_never_below_att_minimum() {
    let f = setup(CharacteristicProperties::WRITE_WITHOUT_RESPONSE);
    f.database.set_config(GattcConfig {
        enforce_write_command_length: true,
        ..GattcConfig::default()
    });

    f.transport.set_mtu(0);
    assert_eq!(f.database.mtu(), ATT_DEFAULT_MTU);
    assert!(f.characteristic.write_without_response(&[0u8; 20]).is_ok());
}
