use chrono::{TimeZone, Utc};
use focuscore_core::db::open_db_in_memory;
use focuscore_core::{
    AppStore, Collection, Habit, HabitFrequency, KvRepository, Note, Priority, RepoError, Routine,
    RoutineKind, SqliteKvRepository, Task, Transaction, TransactionKind, WeekdaySet,
};
use rusqlite::Connection;
use serde_json::Value;

fn sample_task(id: &str) -> Task {
    Task {
        id: id.to_string(),
        title: format!("task {id}"),
        completed: false,
        priority: Priority::Low,
        due_date: Some("2025-04-10".to_string()),
    }
}

fn store<'c>(conn: &'c Connection, user: &str) -> AppStore<SqliteKvRepository<'c>> {
    AppStore::new(SqliteKvRepository::new(conn), user)
}

#[test]
fn missing_collections_load_as_empty() {
    let conn = open_db_in_memory().unwrap();
    let store = store(&conn, "ana");
    assert!(store.load_tasks().unwrap().is_empty());
    assert!(store.load_routines().unwrap().is_empty());
    assert!(store.load_habits().unwrap().is_empty());
    assert!(store.load_transactions().unwrap().is_empty());
    assert!(store.load_investments().unwrap().is_empty());
    assert!(store.load_notes().unwrap().is_empty());
}

#[test]
fn collections_roundtrip_under_user_scoped_keys() {
    let conn = open_db_in_memory().unwrap();
    let store = store(&conn, "ana");

    let tasks = vec![sample_task("1"), sample_task("2")];
    store.save_tasks(&tasks).unwrap();
    let routines = vec![Routine::new("Manhã", RoutineKind::Morning)];
    store.save_routines(&routines).unwrap();

    assert_eq!(store.load_tasks().unwrap(), tasks);
    assert_eq!(store.load_routines().unwrap(), routines);
    let notes = vec![Note::new("Ideias", Utc.with_ymd_and_hms(2025, 4, 10, 9, 0, 0).unwrap())];
    store.save_notes(&notes).unwrap();
    assert_eq!(store.load_notes().unwrap(), notes);
    assert_eq!(store.key(Collection::Notes), "focuscore-ana-notes");
    assert_eq!(store.key(Collection::Tasks), "focuscore-ana-tasks");

    let raw = SqliteKvRepository::new(&conn)
        .get("focuscore-ana-tasks")
        .unwrap()
        .unwrap();
    let json: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["dueDate"], "2025-04-10");
    assert_eq!(json[0]["priority"], "low");
}

#[test]
fn stored_routines_tolerate_out_of_range_weekdays() {
    let conn = open_db_in_memory().unwrap();
    SqliteKvRepository::new(&conn)
        .put(
            "focuscore-ana-routines",
            r#"[{"id":"r1","title":"Manhã","type":"morning","tasks":[
                {"id":"t1","title":"Alongar","days":[-1,1,300]}
            ]}]"#,
        )
        .unwrap();

    let routines = store(&conn, "ana").load_routines().unwrap();
    assert_eq!(routines[0].kind, RoutineKind::Morning);
    assert_eq!(routines[0].tasks[0].days, WeekdaySet::from_indices([1]));

    store(&conn, "ana").save_routines(&routines).unwrap();
    let raw = SqliteKvRepository::new(&conn)
        .get("focuscore-ana-routines")
        .unwrap()
        .unwrap();
    let json: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["type"], "morning");
    assert_eq!(json[0]["tasks"][0]["days"], serde_json::json!([1]));
}

#[test]
fn corrupt_collection_is_reported_not_masked() {
    let conn = open_db_in_memory().unwrap();
    SqliteKvRepository::new(&conn)
        .put("focuscore-ana-tasks", "{not json")
        .unwrap();

    let err = store(&conn, "ana").load_tasks().unwrap_err();
    match err {
        RepoError::InvalidData { key, .. } => assert_eq!(key, "focuscore-ana-tasks"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn export_contains_only_this_users_entries() {
    let conn = open_db_in_memory().unwrap();
    let ana = store(&conn, "ana");
    let bia = store(&conn, "bia");
    ana.save_tasks(&[sample_task("1")]).unwrap();
    ana.save_habits(&[Habit::new("Ler", HabitFrequency::Daily, "saúde")])
        .unwrap();
    bia.save_tasks(&[sample_task("2")]).unwrap();

    let snapshot: Value = serde_json::from_str(&ana.export_snapshot().unwrap()).unwrap();
    let object = snapshot.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["focuscore-ana-habits", "focuscore-ana-tasks"]);
    assert_eq!(object["focuscore-ana-tasks"][0]["id"], "1");
}

#[test]
fn restore_writes_matching_keys_and_skips_foreign_ones() {
    let source_conn = open_db_in_memory().unwrap();
    let source = store(&source_conn, "ana");
    source.save_tasks(&[sample_task("1")]).unwrap();
    source
        .save_transactions(&[Transaction {
            id: "tx".to_string(),
            kind: TransactionKind::Income,
            description: "salário".to_string(),
            amount: 1200.0,
            date: "2025-04-05".to_string(),
            category: None,
        }])
        .unwrap();
    let exported = source.export_snapshot().unwrap();
    let mut snapshot: Value = serde_json::from_str(&exported).unwrap();
    snapshot["focuscore-bia-tasks"] = serde_json::json!([]);
    snapshot["unrelated"] = serde_json::json!({"x": 1});

    let target_conn = open_db_in_memory().unwrap();
    let target = store(&target_conn, "ana");
    let written = target.restore_snapshot(&snapshot.to_string()).unwrap();

    assert_eq!(written, 2);
    assert_eq!(target.load_tasks().unwrap(), vec![sample_task("1")]);
    assert_eq!(target.load_transactions().unwrap().len(), 1);
    let foreign = SqliteKvRepository::new(&target_conn)
        .list_prefix("focuscore-bia-")
        .unwrap();
    assert!(foreign.is_empty());
}

#[test]
fn restore_rejects_invalid_snapshots_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let store = store(&conn, "ana");

    assert!(matches!(
        store.restore_snapshot("not json"),
        Err(RepoError::InvalidSnapshot(_))
    ));
    assert!(matches!(
        store.restore_snapshot("[1, 2]"),
        Err(RepoError::InvalidSnapshot(_))
    ));
    assert!(SqliteKvRepository::new(&conn)
        .list_prefix("")
        .unwrap()
        .is_empty());
}

#[test]
fn user_prefix_does_not_match_longer_user_ids() {
    let conn = open_db_in_memory().unwrap();
    store(&conn, "1").save_tasks(&[sample_task("a")]).unwrap();
    store(&conn, "12").save_tasks(&[sample_task("b")]).unwrap();

    let exported = store(&conn, "1").export_snapshot().unwrap();
    let snapshot: Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(snapshot.as_object().unwrap().len(), 1);

    assert_eq!(store(&conn, "1").clear().unwrap(), 1);
    assert_eq!(store(&conn, "12").load_tasks().unwrap().len(), 1);
}

#[test]
fn users_sharing_a_prefix_keep_their_data_apart() {
    let conn = open_db_in_memory().unwrap();
    let ana = store(&conn, "ana");
    let ana_maria = store(&conn, "ana-maria");
    ana.save_tasks(&[sample_task("mine")]).unwrap();
    ana_maria.save_tasks(&[sample_task("private")]).unwrap();

    let exported = ana.export_snapshot().unwrap();
    let snapshot: Value = serde_json::from_str(&exported).unwrap();
    let keys: Vec<&String> = snapshot.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["focuscore-ana-tasks"]);
    assert!(!ana.owns_key("focuscore-ana-maria-tasks"));
    assert!(ana_maria.owns_key("focuscore-ana-maria-tasks"));

    let mut foreign = serde_json::Map::new();
    foreign.insert(
        "focuscore-ana-maria-tasks".to_string(),
        serde_json::json!([]),
    );
    assert_eq!(ana.restore_snapshot(&Value::Object(foreign).to_string()).unwrap(), 0);

    assert_eq!(ana.clear().unwrap(), 1);
    assert!(ana.load_tasks().unwrap().is_empty());
    assert_eq!(ana_maria.load_tasks().unwrap(), vec![sample_task("private")]);
}

#[test]
fn kv_repository_put_overwrites_and_delete_reports_presence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKvRepository::new(&conn);

    repo.put("k", "1").unwrap();
    repo.put("k", "2").unwrap();
    assert_eq!(repo.get("k").unwrap().as_deref(), Some("2"));
    assert!(repo.delete("k").unwrap());
    assert!(!repo.delete("k").unwrap());
    assert_eq!(repo.get("k").unwrap(), None);
}

#[test]
fn kv_prefix_matching_treats_wildcards_literally() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKvRepository::new(&conn);
    repo.put("a%b-1", "1").unwrap();
    repo.put("axb-1", "2").unwrap();

    let found = repo.list_prefix("a%b").unwrap();
    assert_eq!(found, vec![("a%b-1".to_string(), "1".to_string())]);
}
