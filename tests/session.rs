use phonebook_cli::console::ScriptedConsole;
use phonebook_cli::search::{search, Criterion};
use phonebook_cli::ui::main_menu;
use phonebook_cli::{Config, Contact, ContactField, ContactStore};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn config(temp: &TempDir) -> Config {
    Config {
        saves_dir: temp.path().join("saves"),
        pause: Duration::ZERO,
        ..Config::default()
    }
}

/// Run a scripted session and return the console for inspection.
fn run(store: &mut ContactStore, config: &Config, script: &[&str]) -> ScriptedConsole {
    let mut console = ScriptedConsole::new(script.iter().copied());
    main_menu(&mut console, store, config).unwrap();
    assert_eq!(console.remaining(), 0, "script not fully consumed");
    console
}

fn add(last: &str, first: &str, phone: &str, org: &str) -> Vec<String> {
    ["add", last, first, "", phone, "", org]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn script(parts: &[Vec<String>]) -> Vec<String> {
    parts.concat()
}

fn run_owned(store: &mut ContactStore, config: &Config, script: &[String]) -> ScriptedConsole {
    let refs: Vec<&str> = script.iter().map(String::as_str).collect();
    run(store, config, &refs)
}

#[test]
fn test_add_normalizes_personal_phone() {
    let temp = TempDir::new().unwrap();
    let mut store = ContactStore::new();
    let console = run_owned(
        &mut store,
        &config(&temp),
        &script(&[
            add("Ivanov", "Ivan", "89161234567", ""),
            vec!["read".into(), "q".into(), "exit".into()],
        ]),
    );

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(1).unwrap().personal_phone, "8(916)123-45-67");
    let transcript = console.transcript();
    assert!(transcript.contains("Contact added"));
    assert!(transcript.contains("Current page: 1 of 1, found: 1"));
    assert!(console
        .output
        .iter()
        .any(|line| line.starts_with("1.") && line.contains("8(916)123-45-67")));
}

#[test]
fn test_save_and_load_default_round_trip() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);

    let mut store = ContactStore::new();
    run_owned(
        &mut store,
        &config,
        &script(&[
            add("Иванов", "Иван", "89161234567", "Acme"),
            add("Petrov", "", "+79031112233", ""),
            vec!["save".into(), "".into()],
        ]),
    );
    assert!(temp.path().join("saves").join("save_book.json").exists());

    let mut loaded = ContactStore::new();
    run(&mut loaded, &config, &["load", ""]);
    assert_eq!(loaded, store);
}

#[test]
fn test_load_by_number_lists_saves() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);

    let mut store = ContactStore::new();
    run_owned(
        &mut store,
        &config,
        &script(&[
            add("A", "", "89161234567", ""),
            vec!["save".into(), "alpha".into()],
            add("B", "", "89031112233", ""),
            vec!["save".into(), "beta".into()],
        ]),
    );

    let mut loaded = ContactStore::new();
    let console = run(&mut loaded, &config, &["load", "1"]);
    assert!(console.output.contains(&"1. alpha.json".to_string()));
    assert!(console.output.contains(&"2. beta.json".to_string()));
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get(1).unwrap().last_name, "A");
}

#[test]
fn test_find_by_organisation() {
    let temp = TempDir::new().unwrap();
    let mut store = ContactStore::new();
    let console = run_owned(
        &mut store,
        &config(&temp),
        &script(&[
            add("Ivanov", "Ivan", "89161234567", ""),
            add("Petrov", "Petr", "89031112233", "Acme"),
            vec!["find".into(), "организация".into(), "Acme".into(), "q".into()],
        ]),
    );

    assert!(console.transcript().contains("found: 1"));
    assert!(console
        .output
        .iter()
        .any(|line| line.starts_with("2.") && line.contains("Acme")));

    let hits = search(
        store.contacts(),
        &[Criterion::new(ContactField::Organisation, "Acme")],
    );
    assert_eq!(hits.len(), 1);
    assert_eq!((hits[0].index, hits[0].score), (1, 1));
}

#[test]
fn test_find_with_empty_personal_phone_warns() {
    let temp = TempDir::new().unwrap();
    let mut store = ContactStore::from_contacts(vec![Contact::new("89161234567")]);
    let console = run(
        &mut store,
        &config(&temp),
        &["find", "номер, email", "", "q"],
    );

    let transcript = console.transcript();
    assert!(transcript.contains("No such field: \"email\""));
    assert!(transcript.contains("Personal number must not be empty"));
    assert!(transcript.contains("found: 0"));
}

#[test]
fn test_update_surname_changes_one_field() {
    let temp = TempDir::new().unwrap();
    let mut store = ContactStore::from_contacts(vec![
        Contact::new("89161234567").with(ContactField::LastName, "Ivanov"),
        Contact::new("89031112233").with(ContactField::LastName, "Petrov"),
    ]);
    let before = store.clone();

    run(
        &mut store,
        &config(&temp),
        &["update", "", "1", "surname", "Ivanovich"],
    );

    let expected = before.contacts()[0]
        .clone()
        .with(ContactField::Surname, "Ivanovich");
    assert_eq!(store.contacts()[0], expected);
    assert_eq!(store.contacts()[1], before.contacts()[1]);
}

#[test]
fn test_update_after_browsing() {
    let temp = TempDir::new().unwrap();
    let mut store = ContactStore::from_contacts(vec![
        Contact::new("89161234567"),
        Contact::new("89031112233").with(ContactField::Organisation, "Acme"),
    ]);

    // Not sure of the index, search for it, then change the work phone.
    let console = run(
        &mut store,
        &config(&temp),
        &["update", "n", "y", "organisation", "Acme", "q", "2", "рабочий", "100"],
    );
    assert!(console.transcript().contains("found: 1"));
    assert_eq!(store.get(2).unwrap().work_phone, "100");

    // Not sure, no search: the full list is shown instead.
    let console = run(
        &mut store,
        &config(&temp),
        &["update", "n", "n", "q", "1", "телефон", "+79161234567"],
    );
    assert!(console.transcript().contains("found: 2"));
    assert_eq!(store.get(1).unwrap().personal_phone, "+7(916)123-45-67");
}

#[test]
fn test_errors_are_reported_and_loop_continues() {
    let temp = TempDir::new().unwrap();
    let mut store = ContactStore::from_contacts(vec![Contact::new("89161234567")]);
    let before = store.clone();

    let console = run(
        &mut store,
        &config(&temp),
        &[
            "dance",
            "update", "", "one",
            "update", "", "7",
            "update", "", "1", "email",
            "load", "3",
            "add", "", "", "", "", "", "",
            "add", "", "", "", "89161234567", "", "",
            "exit",
        ],
    );

    let transcript = console.transcript();
    assert!(transcript.contains("No such command: \"dance\""));
    assert!(transcript.contains("Not a valid number: \"one\""));
    assert!(transcript.contains("There is no entry number 7 (have 1)"));
    assert!(transcript.contains("No such field: \"email\""));
    assert!(transcript.contains("There is no entry number 3 (have 0)"));
    assert!(transcript.contains("Personal number must not be empty"));
    assert!(transcript.contains("already exists"));
    assert_eq!(store, before);
}

#[test]
fn test_load_missing_file_empties_store() {
    let temp = TempDir::new().unwrap();
    let mut store = ContactStore::from_contacts(vec![Contact::new("89161234567")]);
    let console = run(&mut store, &config(&temp), &["load", ""]);

    assert!(console.transcript().contains("No such file"));
    assert!(store.is_empty());
}

#[test]
fn test_load_malformed_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    fs::create_dir_all(&config.saves_dir).unwrap();
    fs::write(config.saves_dir.join("save_book.json"), "not json").unwrap();

    let mut store = ContactStore::new();
    let console = run(&mut store, &config, &["load", ""]);
    assert!(console.transcript().contains("Cannot read"));
    assert!(store.is_empty());
}

#[test]
fn test_read_pages_through_large_book() {
    let temp = TempDir::new().unwrap();
    let contacts = (0..25)
        .map(|i| Contact::new(&format!("8916{:07}", i)))
        .collect();
    let mut store = ContactStore::from_contacts(contacts);

    let console = run(&mut store, &config(&temp), &["read", ">", ">", ">", "e"]);
    let transcript = console.transcript();
    assert!(transcript.contains("Current page: 1 of 3, found: 25"));
    assert!(transcript.contains("Current page: 3 of 3, found: 25"));
    assert!(!transcript.contains("Current page: 4"));
    assert!(console.output.iter().any(|l| l.starts_with("25.")));
}

#[test]
fn test_save_into_unusable_directory_keeps_session_alive() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    fs::write(&config.saves_dir, "not a directory").unwrap();

    let mut store = ContactStore::from_contacts(vec![Contact::new("89161234567")]);
    let console = run(&mut store, &config, &["save", "", "read", "q", "exit"]);

    let transcript = console.transcript();
    assert!(transcript.contains("Cannot access"));
    assert!(transcript.contains("Current page: 1 of 1, found: 1"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_unlistable_saves_directory_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    fs::write(&config.saves_dir, "not a directory").unwrap();

    let mut store = ContactStore::from_contacts(vec![Contact::new("89161234567")]);
    let before = store.clone();
    let console = run(&mut store, &config, &["load", "exit"]);

    assert!(console.transcript().contains("Cannot access"));
    assert_eq!(store, before);
}

#[test]
fn test_load_non_utf8_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    fs::create_dir_all(&config.saves_dir).unwrap();
    fs::write(
        config.saves_dir.join("save_book.json"),
        [0xff, 0xfe, 0x7b, 0x7d],
    )
    .unwrap();

    let mut store = ContactStore::from_contacts(vec![Contact::new("89161234567")]);
    let console = run(&mut store, &config, &["load", "", "exit"]);

    assert!(console.transcript().contains("Cannot read"));
    assert!(store.is_empty());
}

#[test]
fn test_load_rejects_numbers_that_collide_after_normalizing() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    fs::create_dir_all(&config.saves_dir).unwrap();
    fs::write(
        config.saves_dir.join("save_book.json"),
        r#"{"89161234567": {"last_name": "A"}, "8(916)123-45-67": {"last_name": "B"}}"#,
    )
    .unwrap();

    let mut store = ContactStore::new();
    let console = run(&mut store, &config, &["load", "", "exit"]);

    assert!(console.transcript().contains("appears more than once"));
    assert!(store.is_empty());
}
