//! Name Printer Example
//!
//! Reads person ids from stdin, one per line, and prints the matching active
//! person. Every captured failure is printed by the failure hook, so the
//! chain itself never has to look at errors.
//!
//! ```text
//! echo -e "123\n567\nabc\n9999" | cargo run --example name_printer
//! ```

use std::io::{self, BufRead, Write};

use outcome::hook;
use outcome::prelude::*;

#[derive(Debug, Clone)]
struct Person {
    id: i64,
    first_name: &'static str,
    last_name: &'static str,
    active: bool,
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid Input.")]
struct InvalidInput(#[source] BoxError);

#[derive(Debug, thiserror::Error)]
#[error("The system is down.")]
struct SystemDown;

const PEOPLE: &[Person] = &[
    Person { id: 123, first_name: "Jack", last_name: "O'Neill", active: true },
    Person { id: 234, first_name: "Samantha", last_name: "Carter", active: true },
    Person { id: 345, first_name: "Teal'C", last_name: "of Chulak", active: true },
    Person { id: 456, first_name: "Daniel", last_name: "Jackson", active: true },
    Person { id: 567, first_name: "Janet", last_name: "Fraiser", active: false },
];

/// Stand-in for a database lookup that can be down.
fn find_person(id: i64) -> Result<Option<Person>, SystemDown> {
    if id < 0 || id == 9999 {
        return Err(SystemDown);
    }
    Ok(PEOPLE.iter().find(|p| p.id == id).cloned())
}

fn parse_input(input: String) -> Outcome<i64> {
    Outcome::wrap_with(|| input.trim().parse::<i64>(), InvalidInput)
}

fn message(person_id: i64) -> String {
    let person: Outcome<Person> = wrap(|| find_person(person_id));
    person
        .filter(|p| p.active)
        .fold("Person Not Found".to_string(), |_, p| {
            format!("Person Id {}: {} {}", p.id, p.first_name, p.last_name)
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(io::stderr)
        .init();

    hook::set_hook(|failure: &Failure| {
        println!("{failure}");
        tracing::debug!(details = ?failure.error(), "failure captured");
    });

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter Active Person Id: ");
        io::stdout().flush()?;

        let input: Outcome<String> = wrap(|| lines.next().transpose());
        if input.is_none() {
            break;
        }

        input
            .bind(parse_input)
            .map(i64::saturating_abs)
            .map(message)
            .for_each(|m| println!("{m}"));
        println!();
    }

    hook::reset_hook();
    Ok(())
}
