use chirper_core::db::open_db_in_memory;
use chirper_core::{
    Chirp, ChirpCollection, ChirpService, PersistenceDriver, ServiceError, SqlitePersistenceDriver,
    StorageFailure, StorageResult, TransformError,
};
use serde_json::Value;
use std::cell::RefCell;

/// Fake backend that records saves and serves a fixed timeline.
#[derive(Default)]
struct RecordingDriver {
    saved: RefCell<Vec<Chirp>>,
    timeline: Vec<Chirp>,
    fail_with: Option<String>,
}

impl PersistenceDriver for RecordingDriver {
    fn save(&self, chirp: &Chirp) -> StorageResult<bool> {
        if let Some(message) = &self.fail_with {
            return Err(StorageFailure::new(message.clone()));
        }
        self.saved.borrow_mut().push(chirp.clone());
        Ok(true)
    }

    fn get_all(&self) -> StorageResult<ChirpCollection> {
        if let Some(message) = &self.fail_with {
            return Err(StorageFailure::new(message.clone()));
        }
        Ok(ChirpCollection::new(self.timeline.clone()))
    }
}

const DOCUMENT: &str =
    r#"{"data":{"type":"chirp","id":"u1","attributes":{"text":"hi","author":"bob"}}}"#;

#[test]
fn publish_saves_decoded_chirp_and_echoes_it() {
    let driver = RecordingDriver::default();
    let service = ChirpService::new(&driver);

    let echoed: Value = serde_json::from_str(&service.publish(DOCUMENT).unwrap()).unwrap();

    let saved = driver.saved.borrow();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id(), "u1");
    assert_eq!(saved[0].text(), "hi");
    assert_eq!(saved[0].author(), "bob");
    assert_eq!(echoed["data"]["attributes"]["created_at"], saved[0].created_at());
}

#[test]
fn publish_does_not_reach_driver_on_decode_failure() {
    let driver = RecordingDriver::default();
    let service = ChirpService::new(&driver);

    let malformed = service.publish(r#"{"data":"}"#).unwrap_err();
    let invalid = service.publish("{}").unwrap_err();

    assert!(matches!(
        malformed,
        ServiceError::Transform(TransformError::MalformedDocument { .. })
    ));
    assert!(matches!(
        invalid,
        ServiceError::Transform(TransformError::InvalidDocumentShape { element: "data", .. })
    ));
    assert!(driver.saved.borrow().is_empty());
}

#[test]
fn publish_surfaces_storage_failure_unchanged() {
    let driver = RecordingDriver {
        fail_with: Some("disk full".to_string()),
        ..RecordingDriver::default()
    };
    let service = ChirpService::new(&driver);

    let err = service.publish(DOCUMENT).unwrap_err();

    assert_eq!(err, ServiceError::Storage(StorageFailure::new("disk full")));
    assert_eq!(err.to_string(), "storage failure: disk full");
}

#[test]
fn timeline_renders_driver_order() {
    let driver = RecordingDriver {
        timeline: vec![
            Chirp::new("b", "second", "bob", "2024-02-01 00:00:00").unwrap(),
            Chirp::new("a", "first", "amy", "2024-01-01 00:00:00").unwrap(),
        ],
        ..RecordingDriver::default()
    };
    let service = ChirpService::new(&driver);

    let document: Value = serde_json::from_str(&service.timeline().unwrap()).unwrap();

    let ids: Vec<&str> = document["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn service_over_sqlite_round_trips_published_chirps() {
    let conn = open_db_in_memory().unwrap();
    let service = ChirpService::new(SqlitePersistenceDriver::new(&conn));

    service.publish(DOCUMENT).unwrap();
    let duplicate = service.publish(DOCUMENT).unwrap_err();
    assert!(matches!(duplicate, ServiceError::Storage(_)));

    let document: Value = serde_json::from_str(&service.timeline().unwrap()).unwrap();
    assert_eq!(document["data"].as_array().unwrap().len(), 1);
    assert_eq!(document["data"][0]["attributes"]["author"], "bob");
}
