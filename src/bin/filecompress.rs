//! Interactive front end: build, load, and apply Huffman code tables.

use ascii_huffman::{Error, Session};
use std::io::{self, BufRead, Write};

fn print_commands() {
    println!();
    println!("Operations are given by digits 1 through 5");
    println!();
    println!("  1 <filename> - create a new Huffman Information file from an original file");
    println!("  2 <filename> - load a Huffman Information file");
    println!("  3 <filename> - compress a file using the current Huffman Information file");
    println!("  4 <filename> - decompress a file using the current Huffman Information file");
    println!("  5            - quit the program");
    println!();
}

fn report(err: Error) {
    match err {
        Error::MissingTree => println!(
            "Error: Huffman Information file not loaded. Please load a .hi file using operation 2."
        ),
        other => println!("Error: {}", other),
    }
}

fn run(session: &mut Session, command: &str, file: Option<&str>) -> Result<(), Error> {
    if !matches!(command, "1" | "2" | "3" | "4") {
        println!("Unknown operation: {}", command);
        return Ok(());
    }
    let Some(file) = file else {
        println!("Error: operation {} needs a file name", command);
        return Ok(());
    };
    match command {
        "1" => {
            let built = session.build_code_table(file)?;
            if built.frequencies.non_ascii > 0 {
                println!(
                    "Skipped {} non-ASCII bytes",
                    built.frequencies.non_ascii
                );
            }
            println!(
                "Huffman Information file created: {}",
                built.table_path.display()
            );
        }
        "2" => {
            session.load_code_table(file)?;
            println!("Huffman Information file loaded: {}", file);
        }
        "3" => {
            let stats = session.compress(file)?;
            println!("{}", stats);
        }
        "4" => {
            let stats = session.decompress(file)?;
            if let Some(path) = stats.output_path {
                println!("Decompressed file: {}", path.display());
            }
        }
        _ => {}
    }
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    println!("Welcome to File Compression program");
    print_commands();

    let mut session = Session::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("cmd> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        if command == "5" || command == "q" {
            break;
        }
        if let Err(err) = run(&mut session, command, words.next()) {
            report(err);
        }
    }
    Ok(())
}
