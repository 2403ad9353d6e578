use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use levenshtein_trio::align::align_quadratic_with_tables;
use levenshtein_trio::matrix::{read_labeled_csv, DistanceMatrix, MatrixConfig};
use levenshtein_trio::report::{render_alignment, render_tables, render_threshold};
use levenshtein_trio::spelling::{spell_check, Dictionary, SpellConfig};
use levenshtein_trio::{distance_within_threshold, replay, symbols, Strategy, Threshold};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "levenshtein-trio",
    about = "Edit distance and replayable edit scripts"
)]
struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Print the wall time spent computing the distance.
    #[arg(long, global = true)]
    time: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Full-matrix alignment with an edit log.
    Wagner {
        /// Source string.
        #[arg(long)]
        a: String,
        /// Target string.
        #[arg(long)]
        b: String,
        /// Also print the cost and trace matrices.
        #[arg(long)]
        show_matrix: bool,
    },
    /// Linear-space divide-and-conquer alignment with an edit log.
    Hirschberg {
        /// Source string.
        #[arg(long)]
        a: String,
        /// Target string.
        #[arg(long)]
        b: String,
    },
    /// Bounded distance: exits with status 1 when the distance exceeds k.
    Ukkonen {
        /// First string.
        #[arg(long)]
        a: String,
        /// Second string.
        #[arg(long)]
        b: String,
        /// Non-negative threshold.
        #[arg(short, long, allow_negative_numbers = true)]
        k: i64,
    },
    /// Suggest corrections for words missing from a dictionary.
    Spell {
        /// Word list, one word per line.
        #[arg(long)]
        dictionary: PathBuf,
        /// Largest distance a suggestion may have.
        #[arg(long, default_value_t = SpellConfig::default().max_distance)]
        max_distance: usize,
        /// Text to check.
        text: String,
    },
    /// Pairwise distance matrix over a `label,sequence` CSV table.
    Matrix {
        /// Input table with a header row.
        input: PathBuf,
        /// Output CSV path (stdout when omitted).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Report raw distances instead of length-normalised ones.
        #[arg(long)]
        raw: bool,
    },
    /// Interactive menu (default).
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let timed = cli.time;
    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Wagner { a, b, show_matrix } => run_wagner(&a, &b, show_matrix, timed),
        Commands::Hirschberg { a, b } => run_strategy(Strategy::DivideAndConquer, &a, &b, timed),
        Commands::Ukkonen { a, b, k } => {
            let k = Threshold::new(k)?;
            if run_ukkonen(&a, &b, k, timed).is_none() {
                std::process::exit(1);
            }
        }
        Commands::Spell {
            dictionary,
            max_distance,
            text,
        } => run_spell(dictionary, max_distance, &text)?,
        Commands::Matrix { input, output, raw } => run_matrix(input, output, raw)?,
        Commands::Menu => interactive_menu(timed)?,
    }

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run_wagner(a: &str, b: &str, show_matrix: bool, timed: bool) {
    let (source, target) = (symbols(a), symbols(b));
    let start = Instant::now();
    let (alignment, tables) = align_quadratic_with_tables(&source, &target);
    let elapsed = start.elapsed();

    let trace = replay(&source, &alignment.script);
    println!(
        "\n{}",
        render_alignment(Strategy::Quadratic.name(), alignment.distance, &trace)
    );
    if show_matrix {
        println!("{}", render_tables(&tables, &source, &target));
    }
    if timed {
        println!("Runtime: {:.4} seconds", elapsed.as_secs_f64());
    }
}

fn run_strategy(strategy: Strategy, a: &str, b: &str, timed: bool) {
    let (source, target) = (symbols(a), symbols(b));
    let start = Instant::now();
    let alignment = strategy.align(&source, &target);
    let elapsed = start.elapsed();

    let trace = replay(&source, &alignment.script);
    println!(
        "\n{}",
        render_alignment(strategy.name(), alignment.distance, &trace)
    );
    if timed {
        println!("Runtime: {:.4} seconds", elapsed.as_secs_f64());
    }
}

fn run_ukkonen(a: &str, b: &str, k: Threshold, timed: bool) -> Option<usize> {
    let start = Instant::now();
    let result = distance_within_threshold(&symbols(a), &symbols(b), k.get());
    let elapsed = start.elapsed();

    println!("\n==== Ukkonen (bounded Levenshtein) ====");
    println!("{}", render_threshold(k.get(), result));
    if timed {
        println!("Runtime: {:.4} seconds", elapsed.as_secs_f64());
    }
    result
}

fn run_spell(path: PathBuf, max_distance: usize, text: &str) -> Result<()> {
    let file = File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
    let dictionary = Dictionary::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to load dictionary {}", path.display()))?;
    let config = SpellConfig::default().with_max_distance(max_distance);

    let corrections = spell_check(text, &dictionary, &config);
    if corrections.is_empty() {
        println!("No spelling mistakes detected!");
    } else {
        println!("Possible corrections:");
        for correction in corrections {
            println!(
                "  {} -> {} (distance {})",
                correction.original,
                correction.suggestion.word,
                correction.suggestion.distance
            );
        }
    }
    Ok(())
}

fn run_matrix(input: PathBuf, output: Option<PathBuf>, raw: bool) -> Result<()> {
    let file = File::open(&input)
        .with_context(|| format!("failed to open input table {}", input.display()))?;
    let sequences = read_labeled_csv(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let config = MatrixConfig::default().with_normalize(!raw);
    let matrix = DistanceMatrix::compute(&sequences, &config);

    match output {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            matrix.write_csv(&mut file)?;
            println!(
                "Wrote {}x{} matrix to {}",
                matrix.len(),
                matrix.len(),
                path.display()
            );
        }
        None => matrix.write_csv(&mut io::stdout().lock())?,
    }
    Ok(())
}

fn interactive_menu(timed: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n=== Edit Distance Algorithms ===");
        println!("1) Wagner–Fischer (full DP, logs)");
        println!("2) Hirschberg (divide & conquer, logs)");
        println!("3) Ukkonen (bounded Levenshtein)");
        println!("4) Exit");

        let Some(choice) = prompt(&mut lines, "Choose [1-4]: ")? else {
            return Ok(());
        };
        match choice.trim() {
            "4" => {
                println!("Goodbye!");
                return Ok(());
            }
            "1" | "2" | "3" => {}
            _ => {
                println!("Invalid choice, try again.");
                continue;
            }
        }

        let Some(a) = prompt(&mut lines, "Enter first string: ")? else {
            return Ok(());
        };
        let Some(b) = prompt(&mut lines, "Enter second string: ")? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => run_wagner(&a, &b, false, timed),
            "2" => run_strategy(Strategy::DivideAndConquer, &a, &b, timed),
            _ => {
                let Some(raw) = prompt(&mut lines, "Enter threshold k (>= 0): ")? else {
                    return Ok(());
                };
                let parsed = raw.trim().parse::<i64>().map_err(anyhow::Error::from);
                match parsed.and_then(|k| Ok(Threshold::new(k)?)) {
                    Ok(k) => {
                        run_ukkonen(&a, &b, k, timed);
                    }
                    Err(err) => println!("Invalid k ({err}). Returning to menu."),
                }
            }
        }
    }
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    lines
        .next()
        .transpose()
        .context("failed to read from stdin")
}
