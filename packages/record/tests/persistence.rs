//! End-to-end persistence scenarios across record lifetimes.

use icebox_backend::{Backend, FileBackend, MemoryBackend};
use icebox_record::{ReactiveRecord, MANIFEST_KEY};
use icebox_store::Value;
use serde_json::json;

#[test]
fn a_second_record_restores_the_first_ones_state() {
    let backend = {
        let mut record = ReactiveRecord::new(
            "todo",
            [
                ("title", Value::from("buy milk")),
                ("qty", Value::from(3.0)),
                ("meta", Value::Structured(json!({"urgent": true}))),
            ],
            MemoryBackend::new(),
        )
        .unwrap();
        record.set("qty", 4.0).unwrap();
        record.into_backend()
    };

    let record = ReactiveRecord::open("todo", backend).unwrap();

    assert_eq!(record.tracked_keys().unwrap(), vec!["title", "qty", "meta"]);
    assert_eq!(record.get("title"), Some(&Value::from("buy milk")));
    assert_eq!(record.get("qty"), Some(&Value::Number(4.0)));
    assert_eq!(
        record.get("meta"),
        Some(&Value::Structured(json!({"urgent": true})))
    );
}

#[test]
fn define_vs_add_precedence_across_records() {
    let backend = {
        let record =
            ReactiveRecord::new("counter", [("x", Value::from(1.0))], MemoryBackend::new())
                .unwrap();
        record.into_backend()
    };

    // define: the stored 1 wins over the new default 2.
    let mut record = ReactiveRecord::open("counter", backend).unwrap();
    record.define([("x", Value::from(2.0))]).unwrap();
    assert_eq!(record.get("x"), Some(&Value::Number(1.0)));

    // add: the provided 2 overwrites the stored 1.
    record.add([("x", Value::from(2.0))]).unwrap();
    assert_eq!(record.get("x"), Some(&Value::Number(2.0)));

    let record = ReactiveRecord::open("counter", record.into_backend()).unwrap();
    assert_eq!(record.get("x"), Some(&Value::Number(2.0)));
}

#[test]
fn backing_layout_is_namespaced_with_type_slots_and_manifest() {
    let record = ReactiveRecord::new(
        "cart",
        [("qty", Value::from(3.0))],
        MemoryBackend::new(),
    )
    .unwrap();
    let backend = record.into_backend();

    assert_eq!(backend.get_item("cart:qty").unwrap(), Some("3".to_string()));
    assert_eq!(
        backend.get_item("cart:qty:type").unwrap(),
        Some("number".to_string())
    );
    assert_eq!(
        backend.get_item(&format!("cart:{}", MANIFEST_KEY)).unwrap(),
        Some("qty".to_string())
    );
}

#[test]
fn removal_survives_reconstruction_but_values_do_not_vanish() {
    let backend = {
        let mut record = ReactiveRecord::new(
            "todo",
            [("a", Value::from(1.0)), ("b", Value::from(2.0))],
            MemoryBackend::new(),
        )
        .unwrap();
        record.remove(["a"]).unwrap();
        record.into_backend()
    };

    // "a" is no longer tracked, so a plain reopen does not install it...
    let record = ReactiveRecord::open("todo", backend).unwrap();
    assert_eq!(record.tracked_keys().unwrap(), vec!["b"]);
    assert_eq!(record.get("a"), None);

    // ...but its store entry was never erased, so redeclaring restores it.
    let mut record = ReactiveRecord::open("todo", record.into_backend()).unwrap();
    record.define([("a", Value::from(9.0))]).unwrap();
    assert_eq!(record.get("a"), Some(&Value::Number(1.0)));
}

#[test]
fn corrupt_structured_state_degrades_to_absent() {
    let backend = {
        let record = ReactiveRecord::new(
            "todo",
            [("meta", Value::Structured(json!({"a": 1})))],
            MemoryBackend::new(),
        )
        .unwrap();
        let mut backend = record.into_backend();
        // Corrupt the stored string externally.
        backend.set_item("todo:meta", "{definitely not json").unwrap();
        backend
    };

    let record = ReactiveRecord::open("todo", backend).unwrap();
    assert_eq!(record.get("meta"), Some(&Value::Absent));
}

#[test]
fn records_persist_across_process_boundaries_via_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.json");

    {
        let mut record = ReactiveRecord::new(
            "todo",
            [("title", Value::from("water plants"))],
            FileBackend::open(&path).unwrap(),
        )
        .unwrap();
        record.set("title", "water plants twice").unwrap();
    }

    let record = ReactiveRecord::open("todo", FileBackend::open(&path).unwrap()).unwrap();
    assert_eq!(
        record.get("title"),
        Some(&Value::from("water plants twice"))
    );
}
