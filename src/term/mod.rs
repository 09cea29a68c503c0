extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::Error;
use crate::mach::{generate_line, Memory, Opcode, Program, Runtime, Store};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let command = Interface::new("calc")?;
    command.set_prompt("> ")?;
    command.set_report_signal(Signal::Interrupt, true);
    let input = Arc::new(Interface::new("input")?);
    input.set_report_signal(Signal::Interrupt, true);

    let prompt_input = input.clone();
    let mut store = Memory::new(move |name| read_value(&prompt_input, name));
    let mut runtime = Runtime::new();

    loop {
        if interrupted.load(Ordering::SeqCst) {
            interrupted.store(false, Ordering::SeqCst);
        }
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                command.set_buffer("")?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        match enter(&string, &mut runtime, &mut store) {
            Ok(Some((name, value))) => {
                command.write_fmt(format_args!("{} = {}\n", name, value))?;
                command.add_history_unique(string);
            }
            Ok(None) => {}
            Err(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
        }
    }
    Ok(())
}

/// Compiles and runs one line. A blank line is `Ok(None)`; a statement
/// yields the assigned name and its value.
fn enter(
    line: &str,
    runtime: &mut Runtime,
    store: &mut Memory,
) -> Result<Option<(Rc<str>, f64)>, Error> {
    let code = match generate_line(line, store) {
        Ok(code) => code,
        Err(Error::EmptyExpression) => return Ok(None),
        Err(error) => return Err(error),
    };
    let target = match code.last() {
        Some(Opcode::Set(name)) => name.clone(),
        _ => return Err(Error::Internal("MISSING TARGET")),
    };
    runtime.execute(&Program::from(code), store)?;
    match store.get(&target) {
        Some(value) => Ok(Some((target, value))),
        None => Err(Error::UndefinedVariable(target)),
    }
}

/// Asks the user for the value of an unassigned variable, retrying
/// until the reply parses as a number. End of input answers zero.
fn read_value(input: &Interface<DefaultTerminal>, name: &str) -> f64 {
    if input.set_prompt(&format!("{}? ", name)).is_err() {
        return 0.0;
    }
    loop {
        match input.read_line() {
            Ok(ReadResult::Input(string)) => match string.trim().parse::<f64>() {
                Ok(value) => return value,
                Err(_) => continue,
            },
            _ => return 0.0,
        }
    }
}
