//! Interactive console front end for `fixvec`.
//!
//! Purely interactive: reads menu choices and values from standard input,
//! writes prompts and results to standard output. All input validation
//! happens here; the core library only ever sees parsed values.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Result};
use fixvec::prelude::*;

/// Dimension of the interactively built vector.
const DIM: usize = 5;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("starting interactive session");

    let mut input = io::stdin().lock();
    println!("=== fixvec interactive vector playground ===");
    let choice = prompt_choice(
        &mut input,
        "Select the element type:\n  1. integer\n  2. floating-point\nEnter 1 or 2: ",
        &[1, 2],
    )?;
    match choice {
        1 => run_session::<i32>(&mut input),
        _ => run_session::<f32>(&mut input),
    }
}

/// One full menu session over a vector of element type `T`.
fn run_session<T>(input: &mut impl BufRead) -> Result<()>
where
    T: Scalar + FromStr,
{
    println!("Enter {DIM} vector elements:");
    let values = read_values::<T>(input, DIM)?;
    let vector = FixedVector::<T, DIM>::from_values(&values);

    loop {
        println!();
        println!("Vector operations:");
        println!("  1. add a scalar");
        println!("  2. subtract a scalar");
        println!("  3. multiply by a scalar");
        println!("  4. divide by a scalar");
        println!("  5. print the vector");
        println!("  6. quit");
        let op: u32 = prompt_parse(input, "Your choice: ")?;

        match op {
            1 => {
                let s: T = prompt_parse(input, "Scalar to add: ")?;
                println!("Result: {}", vector.add_scalar(s));
            }
            2 => {
                let s: T = prompt_parse(input, "Scalar to subtract: ")?;
                println!("Result: {}", vector.sub_scalar(s));
            }
            3 => {
                let s: T = prompt_parse(input, "Scalar to multiply by: ")?;
                println!("Result: {}", vector.mul_scalar(s));
            }
            4 => {
                let s: T = prompt_parse(input, "Scalar to divide by: ")?;
                // Pre-validate here; the core still guards integer division
                // on its own.
                if s == T::zero() {
                    println!("Division by zero is not allowed.");
                    continue;
                }
                match vector.div_scalar(s) {
                    Ok(result) => println!("Result: {result}"),
                    Err(err) => println!("Error: {err}"),
                }
            }
            5 => println!("Your vector: {vector}"),
            6 => {
                log::debug!(
                    "exiting; live vectors: {}, total created: {}",
                    live_instances(),
                    total_created()
                );
                println!("Bye.");
                return Ok(());
            }
            _ => println!("Unknown operation."),
        }
    }
}

/// Prompt until the line parses as a `T`. Retries indefinitely on invalid
/// input; only an exhausted input stream is an error.
fn prompt_parse<T: FromStr>(input: &mut impl BufRead, prompt: &str) -> Result<T> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input stream closed");
        }
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Try again."),
        }
    }
}

/// Prompt until the user picks one of `allowed`.
fn prompt_choice(input: &mut impl BufRead, prompt: &str, allowed: &[u32]) -> Result<u32> {
    loop {
        let value = prompt_parse::<u32>(input, prompt)?;
        if allowed.contains(&value) {
            return Ok(value);
        }
        println!("Invalid choice. Try again.");
    }
}

/// Read `n` values one per prompt, each validated with indefinite retry.
fn read_values<T: FromStr>(input: &mut impl BufRead, n: usize) -> Result<Vec<T>> {
    (0..n)
        .map(|i| prompt_parse(input, &format!("element {i}: ")))
        .collect()
}
