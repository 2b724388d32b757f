use {
    anyhow::{Context, Result},
    range_summary::NumberSet,
    std::io::{self, BufRead, Write},
    structopt::StructOpt,
};

#[derive(Debug, StructOpt)]
struct Opt {
    /// Comma separated numbers. Example: 1,3,6,7,8,12,13,14,15 (default: read
    /// a line from stdin).
    input: Option<String>,

    /// Treat the input as a range summary (e.g. 1, 3, 6-8) and print the
    /// numbers it covers.
    #[structopt(short = "e", long)]
    expand: bool,

    /// Only print the result line.
    #[structopt(short = "q", long)]
    quiet: bool,

    /// Be verbose (debug messages). You can also set the RUST_LOG env var for
    /// finer control.
    #[structopt(short = "v", long)]
    verbose: bool,
}

fn prompt() -> Result<()> {
    println!("=== Number Range Summarizer ===");
    println!("Please enter numbers separated by commas:");
    println!("Example: 1,3,6,7,8,12,13,14,15,21,22,23,24,31");
    print!("Input: ");
    io::stdout().flush().context("Failed to flush stdout")
}

fn read_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    let count = reader
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if count == 0 {
        anyhow::bail!("No input line found on stdin");
    }
    Ok(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_owned())
}

fn run(opt: &Opt) -> Result<()> {
    let input = match &opt.input {
        Some(input) => input.clone(),
        None => {
            if !opt.quiet {
                prompt()?;
            }
            read_line(io::stdin().lock())?
        }
    };
    log::debug!("Processing input {:?}", input);

    if opt.expand {
        let numbers = range_summary::expand(&input).context("Failed to expand summary")?;
        if opt.quiet {
            println!("{}", numbers);
        } else {
            println!("\n--- Results ---");
            println!("Original summary: {}", input);
            println!("Expanded numbers: {}", numbers);
        }
        return Ok(());
    }

    let numbers: NumberSet = input.parse().context("Failed to parse numbers")?;
    let summary = numbers.summary();
    if opt.quiet {
        println!("{}", summary);
    } else {
        println!("\n--- Results ---");
        println!("Original input: {}", input);
        println!("Parsed numbers: {:?}", numbers.to_vec());
        println!("Range summary: {}", summary);
    }
    Ok(())
}

fn main() {
    let opt = Opt::from_args();

    if opt.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    if let Err(e) = run(&opt) {
        eprintln!("Error processing input: {:#}", e);
        if opt.expand {
            eprintln!("Please make sure you entered single values or ranges separated by commas.");
        } else {
            eprintln!("Please make sure you entered valid numbers separated by commas.");
        }
        std::process::exit(1);
    }
}
