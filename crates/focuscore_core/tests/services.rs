use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use focuscore_core::service::finance_service::{financial_overview, recent_transactions};
use focuscore_core::service::habit_service::{
    add_habit, delete_habit, last_week_dates, toggle_habit, weekly_progress,
};
use focuscore_core::service::note_service::{create_note, delete_note, search_notes, update_note};
use focuscore_core::service::routine_service::{
    add_routine, add_routine_task, delete_routine, delete_routine_task, reset_routine,
    routine_progress, toggle_routine_task,
};
use focuscore_core::service::task_service::{
    add_task, cycle_priority, delete_task, filter_tasks, task_summary, toggle_task, TaskFilter,
};
use focuscore_core::{
    HabitFrequency, Investment, Priority, Routine, RoutineKind, Task, Transaction,
    TransactionKind, WeekdaySet,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 10, hour, 0, 0).unwrap()
}

fn transaction(id: &str, kind: TransactionKind, amount: f64, day: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind,
        description: id.to_string(),
        amount,
        date: day.to_string(),
        category: None,
    }
}

#[test]
fn task_list_operations() {
    let mut tasks: Vec<Task> = Vec::new();
    assert!(add_task(&mut tasks, "   ").is_none());

    let first = add_task(&mut tasks, "  Revisar orçamento ").unwrap().clone();
    assert_eq!(first.title, "Revisar orçamento");
    assert_eq!(first.priority, Priority::Medium);
    assert!(!first.completed);
    let second = add_task(&mut tasks, "Ligar para banco").unwrap().id.clone();

    assert!(toggle_task(&mut tasks, &first.id));
    assert!(cycle_priority(&mut tasks, &second));
    assert_eq!(tasks[1].priority, Priority::High);
    assert!(!toggle_task(&mut tasks, "missing"));

    assert_eq!(filter_tasks(&tasks, TaskFilter::All).len(), 2);
    assert_eq!(filter_tasks(&tasks, TaskFilter::Completed)[0].id, first.id);
    assert_eq!(filter_tasks(&tasks, TaskFilter::Active)[0].id, second);

    let summary = task_summary(&tasks);
    assert_eq!((summary.completed, summary.total), (1, 2));

    assert!(delete_task(&mut tasks, &first.id));
    assert!(!delete_task(&mut tasks, &first.id));
    assert_eq!(tasks.len(), 1);
}

#[test]
fn routine_operations_and_progress() {
    let mut routines: Vec<Routine> = vec![Routine::new("Manhã", RoutineKind::Morning)];
    let routine_id = routines[0].id.clone();
    assert_eq!(routine_progress(&routines[0]), 0.0);

    let water = add_routine_task(
        &mut routines,
        &routine_id,
        "Beber água",
        WeekdaySet::from_indices([1, 2, 3, 4, 5]),
        Some("06:00".to_string()),
    )
    .unwrap();
    let meditate = add_routine_task(
        &mut routines,
        &routine_id,
        "Meditar",
        WeekdaySet::EMPTY,
        None,
    )
    .unwrap();
    assert!(add_routine_task(&mut routines, "missing", "x", WeekdaySet::EMPTY, None).is_none());

    assert!(toggle_routine_task(&mut routines, &routine_id, &water));
    assert_eq!(routine_progress(&routines[0]), 50.0);

    assert!(reset_routine(&mut routines, &routine_id));
    assert_eq!(routine_progress(&routines[0]), 0.0);

    assert!(delete_routine_task(&mut routines, &routine_id, &meditate));
    assert_eq!(routines[0].tasks.len(), 1);

    let custom_id = add_routine(&mut routines, "Estudos").unwrap().id.clone();
    assert_eq!(routines[1].kind, RoutineKind::Custom);
    assert!(delete_routine(&mut routines, &custom_id));
    assert!(add_routine(&mut routines, "").is_none());
}

#[test]
fn habit_toggle_adjusts_streak_without_underflow() {
    let mut habits = Vec::new();
    let id = add_habit(&mut habits, "Ler", HabitFrequency::Daily, "estudo")
        .unwrap()
        .id
        .clone();
    let today = date(2025, 4, 10);

    assert_eq!(toggle_habit(&mut habits, &id, today), Some(true));
    assert_eq!(habits[0].streak, 1);
    assert_eq!(toggle_habit(&mut habits, &id, today), Some(false));
    assert_eq!(habits[0].streak, 0);
    assert_eq!(toggle_habit(&mut habits, &id, date(2025, 4, 9)), Some(true));
    assert_eq!(toggle_habit(&mut habits, &id, date(2025, 4, 9)), Some(false));
    assert_eq!(toggle_habit(&mut habits, &id, date(2025, 4, 9)), Some(true));
    assert_eq!(habits[0].streak, 1);

    habits[0].streak = 0;
    assert_eq!(toggle_habit(&mut habits, &id, date(2025, 4, 9)), Some(false));
    assert_eq!(habits[0].streak, 0);

    assert_eq!(toggle_habit(&mut habits, "missing", today), None);
    assert!(delete_habit(&mut habits, &id));
}

#[test]
fn weekly_progress_counts_the_last_seven_days() {
    let today = date(2025, 3, 2);
    let week = last_week_dates(today);
    assert_eq!(week.len(), 7);
    assert_eq!(week[0], date(2025, 2, 24));
    assert_eq!(week[6], today);

    let mut habits = Vec::new();
    let id = add_habit(&mut habits, "Correr", HabitFrequency::Weekly, "")
        .unwrap()
        .id
        .clone();
    toggle_habit(&mut habits, &id, date(2025, 2, 24));
    toggle_habit(&mut habits, &id, date(2025, 3, 1));
    toggle_habit(&mut habits, &id, date(2025, 2, 10));

    let progress = weekly_progress(&habits[0], &week);
    assert!((progress - 200.0 / 7.0).abs() < 1e-9);
    assert_eq!(weekly_progress(&habits[0], &[]), 0.0);
}

#[test]
fn financial_overview_groups_fixed_and_variable_entries() {
    let transactions = vec![
        transaction("salary", TransactionKind::FixedIncome, 5000.0, "2025-04-05"),
        transaction("freela", TransactionKind::Income, 800.0, "2025-04-12"),
        transaction("rent", TransactionKind::FixedExpense, 1500.0, "2025-04-01"),
        transaction("market", TransactionKind::Expense, 450.5, "2025-04-08"),
        transaction("cdb", TransactionKind::Investment, 1000.0, "2025-04-09"),
    ];
    let investments = vec![Investment {
        id: "inv".to_string(),
        name: "Tesouro".to_string(),
        amount: 2500.0,
        interest_rate: 10.5,
        start_date: "2025-01-01".to_string(),
        end_date: None,
        notes: None,
    }];

    let overview = financial_overview(&transactions, &investments);
    assert_eq!(overview.total_income, 5800.0);
    assert_eq!(overview.total_expenses, 1950.5);
    assert_eq!(overview.balance, 3849.5);
    assert_eq!(overview.total_invested, 2500.0);

    let recent: Vec<&str> = recent_transactions(
        &transactions,
        &[TransactionKind::Income, TransactionKind::Expense],
    )
    .into_iter()
    .map(|transaction| transaction.id.as_str())
    .collect();
    assert_eq!(recent, vec!["freela", "market"]);
}

#[test]
fn transaction_kinds_use_kebab_case_on_the_wire() {
    let json = serde_json::to_value(transaction(
        "rent",
        TransactionKind::FixedExpense,
        10.0,
        "2025-04-01",
    ))
    .unwrap();
    assert_eq!(json["type"], "fixed-expense");
}

#[test]
fn notes_are_created_newest_first_and_updated_in_place() {
    let mut notes = Vec::new();
    assert!(create_note(&mut notes, "  ", at(8)).is_none());

    let first = create_note(&mut notes, " Compras ", at(8)).unwrap().id.clone();
    let second = create_note(&mut notes, "Ideias", at(9)).unwrap().id.clone();
    assert_eq!(notes[0].id, second);
    assert_eq!(notes[1].title, "Compras");
    assert_eq!(notes[1].content, "");
    assert_eq!(notes[1].created_at, at(8));

    assert!(update_note(&mut notes, &first, "<p>Pão e Café</p>", at(11)));
    assert_eq!(notes[1].updated_at, at(11));
    assert_eq!(notes[1].created_at, at(8));
    assert!(!update_note(&mut notes, "missing", "x", at(12)));

    assert!(delete_note(&mut notes, &second));
    assert!(!delete_note(&mut notes, &second));
    assert_eq!(notes.len(), 1);
}

#[test]
fn note_search_ignores_case_across_title_and_content() {
    let mut notes = Vec::new();
    let shopping = create_note(&mut notes, "Compras", at(8)).unwrap().id.clone();
    update_note(&mut notes, &shopping, "Pão e CAFÉ", at(9));
    create_note(&mut notes, "Reunião", at(10));

    let found: Vec<&str> = search_notes(&notes, "café")
        .into_iter()
        .map(|note| note.title.as_str())
        .collect();
    assert_eq!(found, vec!["Compras"]);
    assert_eq!(search_notes(&notes, "REUNI")[0].title, "Reunião");
    assert_eq!(search_notes(&notes, "").len(), 2);
    assert!(search_notes(&notes, "agenda").is_empty());
}
