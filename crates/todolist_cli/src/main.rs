//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `todolist_core` linkage without the Flutter/FFI runtime.
//! - Run one scripted list session and print each render.
//!
//! Seed mode comes from `TODOLIST_SEED` (`demo` by default).

use std::process::ExitCode;
use todolist_core::{StoreConfig, SystemClock, TaskDraft, TaskStore};

fn main() -> ExitCode {
    println!("todolist_core ping={}", todolist_core::ping());
    println!("todolist_core version={}", todolist_core::core_version());

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut store = match TaskStore::with_config(&config, SystemClock) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("store init failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    store.subscribe(|change, tasks| println!("change={change:?} total={}", tasks.len()));
    print_list(&store);

    let mut draft = TaskDraft::new();
    draft.set_text("   ");
    if let Err(err) = draft.submit(&mut store) {
        println!("rejected: {} - {}", err.title(), err.message());
    }

    draft.set_text("  Water the plants ");
    match draft.submit(&mut store) {
        Ok(id) => {
            store.toggle(id);
        }
        Err(err) => println!("rejected: {} - {}", err.title(), err.message()),
    }
    if let Some(first) = store.tasks().first().map(|task| task.id()) {
        store.remove(first);
    }

    print_list(&store);
    ExitCode::SUCCESS
}

fn print_list(store: &TaskStore) {
    let stats = store.stats();
    println!("{} ({}%)", stats.summary(), stats.percent_complete);
    if store.is_empty() {
        println!("  No tasks yet");
    }
    for task in store.tasks() {
        let mark = if task.is_done() { 'x' } else { ' ' };
        println!("  [{mark}] #{} {}", task.id(), task.text());
    }
}
