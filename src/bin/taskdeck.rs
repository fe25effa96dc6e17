//! Terminal front end for the task list.
//!
//! Stands in for button wiring: one command per line, and the bus-driven
//! view refresh repaints the document after every mutation.

use std::io::{self, BufRead, Write};

use taskdeck::app::App;
use taskdeck::commands;
use taskdeck::store::TaskSeed;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdeck=info".parse().expect("valid env filter")),
        )
        .init();

    let app = App::new(TaskSeed::default());
    print_lists(&app);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!("failed to read input: {e}");
                break;
            }
        }

        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((head, tail)) => (head, tail.trim()),
            None => (line, ""),
        };

        let result = match command {
            "" => Ok(()),
            "add" => {
                commands::add_task(app.store(), rest);
                Ok(())
            }
            "done" => commands::mark_task_completed(app.store(), rest),
            "undo" => commands::mark_task_incomplete(app.store(), rest),
            "rm" => match rest.split_once(' ') {
                Some((status, index)) => commands::remove_task(app.store(), index.trim(), status),
                None => {
                    println!("usage: rm <status> <position>");
                    Ok(())
                }
            },
            "ls" => {
                print_lists(&app);
                Ok(())
            }
            "page" => {
                println!("{}", app.render());
                Ok(())
            }
            "help" => {
                print_help();
                Ok(())
            }
            "quit" | "exit" => break,
            other => {
                println!("unknown command: {other} (try 'help')");
                Ok(())
            }
        };

        match result {
            // An error aborts the action; the lists are untouched.
            Err(e) => println!("error: {e}"),
            Ok(()) => {
                if matches!(command, "add" | "done" | "undo" | "rm") {
                    print_lists(&app);
                }
            }
        }
    }
}

fn print_lists(app: &App) {
    println!("INCOMPLETE");
    for (index, task) in app.store().incomplete_tasks().iter().enumerate() {
        println!("  {index}. {}", task.name);
    }
    println!("COMPLETED");
    for (index, task) in app.store().completed_tasks().iter().enumerate() {
        println!("  {index}. {}", task.name);
    }
}

fn print_help() {
    println!("add <name>              append an incomplete task");
    println!("done <position>         mark an incomplete task completed");
    println!("undo <position>         mark a completed task incomplete");
    println!("rm <status> <position>  remove a task from the named list");
    println!("ls                      print both lists with positions");
    println!("page                    print the rendered document");
    println!("quit                    exit");
}
