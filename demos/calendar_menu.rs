//! # Example: calendar_menu
//!
//! Interactive console front end for a single calendar [`Event`].
//!
//! Shows how to:
//! - Construct an [`Event`] and manage its participants.
//! - Drive updates through [`EventUpdate`] (blank input leaves a field as is).
//! - Surface [`EventError`] conditions as warnings and keep going.
//!
//! ## Flow
//! ```text
//! stdin ──► menu loop
//!    ├─► add      → event.subscribe(Participant)
//!    ├─► remove   → event.unsubscribe(name)
//!    ├─► change   → event.apply(EventUpdate)  → every participant prints
//!    ├─► list     → event.subscriber_names()
//!    └─► details  → event.name()/date()/location()
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example calendar_menu
//! ```

use std::io::{self, Write};
use std::sync::Arc;

use eventcast::{Event, EventUpdate, Participant};

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_menu() {
    println!();
    println!("--- menu ---");
    println!("1. add participant");
    println!("2. remove participant");
    println!("3. change event date/location");
    println!("4. list participants");
    println!("5. show event details");
    println!("6. quit");
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let name = prompt("Event name")?;
    let date = prompt("Date (e.g. 2025-04-10)")?;
    let location = prompt("Location")?;
    let mut event = Event::new(name, date, location);

    loop {
        print_menu();
        match prompt("Pick an option")?.as_str() {
            "1" => {
                let who = prompt("Participant name")?;
                match event.subscribe(Arc::new(Participant::new(&who))) {
                    Ok(()) => println!("added: {who}"),
                    Err(err) => println!("warning: {} ({})", err, err.as_label()),
                }
            }
            "2" => {
                let who = prompt("Participant to remove")?;
                match event.unsubscribe(&who) {
                    Ok(_) => println!("removed: {who}"),
                    Err(err) => println!("warning: {err}"),
                }
            }
            "3" => {
                let new_date = prompt("New date (Enter to keep)")?;
                let new_location = prompt("New location (Enter to keep)")?;
                let mut update = EventUpdate::new();
                if !new_date.is_empty() {
                    update = update.with_date(new_date);
                }
                if !new_location.is_empty() {
                    update = update.with_location(new_location);
                }
                println!("event '{}' updated.", event.name());
                event.apply(update);
            }
            "4" => {
                let names = event.subscriber_names();
                if names.is_empty() {
                    println!("no participants registered.");
                } else {
                    println!("participants:");
                    for n in names {
                        println!(" - {n}");
                    }
                }
            }
            "5" => {
                println!("event:    {}", event.name());
                println!("date:     {}", event.date());
                println!("location: {}", event.location());
            }
            "6" => {
                println!("bye!");
                break;
            }
            other => println!("invalid option: {other}"),
        }
    }

    Ok(())
}
