//! Interactive task-list session.
//!
//! Drives the state holder from stdin: every accepted command is applied
//! synchronously and the list re-rendered from the published state, so
//! what is printed is always what a subscriber would observe.

mod command;
mod render;

use command::{Command, CommandError, parse};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tasklist_core::{SampleTasks, TaskEnvironment};
use tasklist_runtime::TaskListStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Commands:
  add <title..> <dd/MM/yyyy>   create a task (the last word is the due date)
  toggle <id>                  invert a task's done flag
  remove <id>                  delete a task
  done                         keep only completed tasks
  pending                      keep only open tasks
  sort                         order by due date (text order)
  all                          reset to the sample set
  list                         print the current list
  json                         print the current list as JSON
  help                         print this text
  quit                         leave the session";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=info,tasklist_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = TaskListStore::new(TaskEnvironment::new(Arc::new(SampleTasks)));
    let rx = store.subscribe();

    println!("=== Task List ===\n");
    print!("{}", render::screen(&rx.borrow()));
    println!("\nType `help` for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::List) => print!("{}", render::screen(&rx.borrow())),
            Ok(Command::Json) => print_json(&store),
            Ok(Command::Add { title, due_date }) => {
                let id = store.create_task(title, due_date);
                tracing::debug!(%id, "task created");
                print!("{}", render::screen(&rx.borrow()));
            }
            Ok(Command::Toggle { id }) => {
                store.toggle_done(id);
                print!("{}", render::screen(&rx.borrow()));
            }
            Ok(Command::Remove { id }) => {
                store.remove_task(id);
                print!("{}", render::screen(&rx.borrow()));
            }
            Ok(Command::ShowDone) => {
                store.filter_by_done(true);
                print!("{}", render::screen(&rx.borrow()));
            }
            Ok(Command::ShowPending) => {
                store.filter_by_done(false);
                print!("{}", render::screen(&rx.borrow()));
            }
            Ok(Command::SortByDue) => {
                store.sort_by_due_date();
                print!("{}", render::screen(&rx.borrow()));
            }
            Ok(Command::ShowAll) => {
                store.show_all();
                print!("{}", render::screen(&rx.borrow()));
            }
            Err(CommandError::Empty) => {}
            Err(error) => println!("{error}"),
        }
    }

    println!("bye");
    Ok(())
}

fn print_json(store: &TaskListStore) {
    match serde_json::to_string_pretty(&store.tasks()) {
        Ok(json) => println!("{json}"),
        Err(error) => println!("could not render JSON: {error}"),
    }
}
