use anyhow::Result;
use std::io::{self, BufRead, Write};

use gradebook::{GradeBook, ReportCard, GRADE_NOT_FOUND, VERSION};

// Interactive host for the gradebook container. Stands in for the UI layer
// that would normally map button presses to these operations.

fn main() -> Result<()> {
    println!("📒 Gradebook v{}", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Type 'help' for the list of commands.\n");

    let mut book = GradeBook::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (command, args) = match tokens.split_first() {
            Some((command, args)) => (*command, args),
            None => continue,
        };

        match command {
            "add" | "modify" => run_grade_command(&mut book, command, args),
            "delete" => match args {
                [] => usage(),
                subject => {
                    let subject = subject.join(" ");
                    if book.delete(&subject) {
                        println!("✓ Deleted \"{}\"", subject);
                    } else {
                        println!("✗ No subject \"{}\"", subject);
                    }
                }
            },
            "lookup" => match args {
                [] => usage(),
                subject => {
                    let subject = subject.join(" ");
                    let grade = book.lookup(&subject);
                    if grade == GRADE_NOT_FOUND {
                        println!("✗ No subject \"{}\" (sentinel {})", subject, grade);
                    } else {
                        println!("✓ Subject \"{}\": grade {}", subject, grade);
                    }
                }
            },
            "rename" => match args {
                [old, new] => {
                    if book.rename(old, new) {
                        println!("✓ Renamed \"{}\" to \"{}\"", old, new);
                    } else {
                        println!("✗ Cannot rename \"{}\" to \"{}\"", old, new);
                    }
                }
                _ => usage(),
            },
            "count" => println!("{} subject(s)", book.count()),
            "list" => {
                if book.is_empty() {
                    println!("(empty)");
                } else {
                    println!("{}", book.render());
                }
            }
            "report" => {
                let card = ReportCard::from_book(&book);
                println!("{}", card.to_json()?);
            }
            "help" => usage(),
            "quit" | "exit" => break,
            other => {
                println!("✗ Unknown command: {}", other);
                usage();
            }
        }
    }

    println!("\n✅ Goodbye");
    Ok(())
}

/// `add` and `modify` share a shape: <subject...> <grade>, where the last
/// token is the grade and everything before it is the subject.
fn run_grade_command(book: &mut GradeBook, command: &str, args: &[&str]) {
    let (grade, subject) = match args.split_last() {
        Some((last, rest)) if !rest.is_empty() => match last.parse::<f64>() {
            Ok(grade) => (grade, rest.join(" ")),
            Err(_) => {
                println!("✗ Not a number: {}", last);
                return;
            }
        },
        _ => {
            usage();
            return;
        }
    };

    match command {
        "add" => {
            if book.add(&subject, grade) {
                println!("✓ Added \"{}\": grade {}", subject, grade);
            } else {
                println!("✗ Subject \"{}\" already exists", subject);
            }
        }
        "modify" => {
            if book.modify(&subject, grade) {
                println!("✓ Modified \"{}\": grade {}", subject, grade);
            } else {
                println!("✗ No subject \"{}\"", subject);
            }
        }
        _ => unreachable!(),
    }
}

fn usage() {
    println!("Commands:");
    println!("  add <subject...> <grade>     add a new subject");
    println!("  modify <subject...> <grade>  change an existing grade");
    println!("  delete <subject...>          remove a subject");
    println!("  lookup <subject...>          show a subject's grade");
    println!("  rename <old> <new>           rename a subject (single words)");
    println!("  count                        number of subjects");
    println!("  list                         render the grade book");
    println!("  report                       JSON report card");
    println!("  quit                         exit");
}
