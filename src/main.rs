use std::{env, fs::read_to_string, process::ExitCode, rc::Rc, time::Instant};

use log::info;
use minilang::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!(
            "usage: {} <file>",
            args.first().map(String::as_str).unwrap_or("minilang")
        );
        return ExitCode::FAILURE;
    }

    let file_path: &str = &args[1];
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let start = Instant::now();

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            return ExitCode::FAILURE;
        }
    };

    let tokens = match tokenize(file_contents.clone(), Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &file_contents);
            return ExitCode::FAILURE;
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let nodes = match parse(tokens, Rc::new(String::from(file_name))) {
        Ok(nodes) => nodes,
        Err(error) => {
            display_error(&error, &file_contents);
            return ExitCode::FAILURE;
        }
    };

    info!("Parsed in {:?}", parse_start.elapsed());

    for node in &nodes {
        println!("{}", node);
    }

    ExitCode::SUCCESS
}
