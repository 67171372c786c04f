//! Interactive phonebook console.
//!
//! Loads `last first number` records from a text file (default
//! `phonebook.text`, overridable by the first argument) and serves name and
//! number queries until `q` is entered.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tandem::phonebook::Phonebook;

/// Reads the next whitespace-delimited token from the input, skipping blank
/// lines. `None` means end of input.
fn next_token<I>(lines: &mut I) -> Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    for line in lines {
        let line = line.context("reading standard input")?;
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_owned()));
        }
    }
    Ok(None)
}

fn prompt<I>(text: &str, lines: &mut I) -> Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{text}");
    io::stdout().flush().context("flushing prompt")?;
    next_token(lines)
}

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("phonebook.text"));
    let phonebook = Phonebook::load(&path)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut lookups = 0u32;
    let mut reverse_lookups = 0u32;

    loop {
        let option = match prompt("lookup, reverse-lookup, quit (l/r/q)? ", &mut lines)? {
            Some(option) => option,
            None => break, // end of input quits like 'q'
        };
        match option.as_str() {
            "q" => break,
            "l" => {
                let Some(last) = prompt("last name? ", &mut lines)? else {
                    break;
                };
                let Some(first) = prompt("first name? ", &mut lines)? else {
                    break;
                };
                lookups += 1;
                let mut found = false;
                for entry in phonebook.lookup(&first, &last) {
                    println!("{entry}");
                    found = true;
                }
                if !found {
                    println!("-- Name not found");
                }
            }
            "r" => {
                let Some(number) = prompt("phone number (nnn-nnn-nnnn)? ", &mut lines)? else {
                    break;
                };
                reverse_lookups += 1;
                let mut found = false;
                for entry in phonebook.reverse_lookup(&number) {
                    println!(
                        "{} belongs to {}",
                        number,
                        entry.name().formal()
                    );
                    found = true;
                }
                if !found {
                    println!("-- Phone number not found");
                }
            }
            _ => {}
        }
        println!();
    }

    println!();
    println!("{lookups} lookups performed");
    println!("{reverse_lookups} reverse lookups performed");
    Ok(())
}
