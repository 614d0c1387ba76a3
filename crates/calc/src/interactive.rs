//! Interactive mode
use std::{
    error::Error,
    io::{stdin, stdout, Write},
};

use calc::{calculate, render_with, Token, TokenCategory};
use colored::Colorize;

pub fn interactive() -> Result<(), Box<dyn Error>> {
    println!("{}", "Calculator".bold().yellow());
    loop {
        show_prompt();
        stdout().flush()?;
        let Some(line) = read_line()? else {
            // stdin closed
            break;
        };
        if line.trim_end() == "exit" {
            break;
        } else if line.trim().is_empty() {
            println!("{}", "Nothing to calculate, try again.".red());
            continue;
        }
        match calculate(&line) {
            Ok(calculation) => {
                println!("{}", render_postfix(&calculation.postfix));
                print_result(calculation.value);
            }
            Err(e) => print_error(&e),
        }
    }
    Ok(())
}

pub fn render_postfix(postfix: &[Token]) -> String {
    render_with(postfix, |category, lexeme| {
        let lexeme = lexeme.as_str();
        match category {
            TokenCategory::Number => lexeme.green(),
            TokenCategory::Brace => lexeme.cyan(),
            TokenCategory::Operator => lexeme.yellow(),
        }
        .to_string()
    })
}

pub fn print_result(value: i64) {
    println!("{}", format!("Result: {value}").bold().green());
}

pub fn print_error(error: &dyn Error) {
    println!("{}", format!("Error: {error}").red());
}

fn show_prompt() {
    print!("{}", "Enter an expression (or 'exit'): ".cyan());
}

fn read_line() -> Result<Option<String>, Box<dyn Error>> {
    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer))
}
