use std::{env, path::PathBuf, process, time::Instant};

use tokenizer::{default_output_path, tokenize_file};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: tokenizer <input_file> [output_file]");
        process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let output = if args.len() == 3 {
        PathBuf::from(&args[2])
    } else {
        default_output_path(&input)
    };

    let start = Instant::now();

    match tokenize_file(&input, &output) {
        Ok(summary) => {
            for diagnostic in &summary.diagnostics {
                eprint!("{}", diagnostic.render(&input));
            }

            println!(
                "Tokenized {} lines ({} tokens) in {:?}",
                summary.lines,
                summary.tokens,
                start.elapsed()
            );
            println!("Tokenization complete. Output written to {}", output.display());
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}
