use super::{render_rows, Desk, InsertForm};
use crate::errors::AppError;
use colored::Colorize;
use dialoguer::{Input, Select};
use log::error;

#[derive(Clone, Copy)]
enum Action {
    Refresh,
    Insert,
    DeleteSelected,
    Quit,
}

impl Action {
    const ALL: [Action; 4] = [
        Action::Refresh,
        Action::Insert,
        Action::DeleteSelected,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Refresh => "Refresh",
            Action::Insert => "Insert",
            Action::DeleteSelected => "Delete Selected",
            Action::Quit => "Quit",
        }
    }
}

fn interaction(err: dialoguer::Error) -> AppError {
    AppError::Interaction(err.to_string())
}

fn print_table(desk: &Desk) {
    let (header, lines) = render_rows(desk.rows());
    println!();
    println!("{}", header.bold().yellow().on_blue());
    if lines.is_empty() {
        println!("{}", "(no associates)".dimmed());
    }
    for line in lines {
        println!("{}", line);
    }
    println!();
}

fn report(err: &AppError) {
    error!("{}", err);
    eprintln!("{}", err.to_string().red());
}

fn prompt(label: &str) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(interaction)
}

fn read_insert_form() -> Result<InsertForm, AppError> {
    Ok(InsertForm {
        id: prompt("ID (blank to auto-assign)")?,
        name: prompt("Name")?,
        hire_date: prompt("Hire Date (YYYY-MM-DD)")?,
        manager: prompt("Manager")?,
        department: prompt("Department")?,
    })
}

fn select_row(desk: &Desk) -> Result<Option<usize>, AppError> {
    if desk.rows().is_empty() {
        println!("{}", "Nothing to delete".dimmed());
        return Ok(None);
    }
    let (header, lines) = render_rows(desk.rows());
    Select::new()
        .with_prompt(header)
        .items(&lines)
        .default(0)
        .interact_opt()
        .map_err(interaction)
}

/// Runs the menu loop until the user quits. Store failures are shown and the
/// loop continues; only terminal I/O failures end it. A change that was saved
/// but could not be reloaded is reported as saved, followed by the reload error.
pub fn run(desk: &mut Desk) -> Result<(), AppError> {
    if let Err(err) = desk.refresh() {
        report(&err);
    }
    print_table(desk);

    let labels: Vec<_> = Action::ALL.iter().map(Action::label).collect();
    loop {
        let choice = Select::new()
            .with_prompt("Associates Data")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(interaction)?;

        let outcome = match Action::ALL[choice] {
            Action::Refresh => desk.refresh(),
            Action::Insert => {
                let form = read_insert_form()?;
                desk.insert(&form).and_then(|applied| {
                    println!("{}", format!("Inserted associate {}", applied.value.id).green());
                    applied.refresh
                })
            }
            Action::DeleteSelected => match select_row(desk)? {
                Some(index) => desk.delete_selected(index).and_then(|applied| {
                    println!("{}", format!("Deleted associate {}", applied.value).green());
                    applied.refresh
                }),
                None => Ok(()),
            },
            Action::Quit => return Ok(()),
        };

        if let Err(err) = outcome {
            report(&err);
        }
        print_table(desk);
    }
}
