use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use regex::Regex;
use spellcore::cli::output::{self, OutputFormat, ReportedError};
use spellcore::{Config, SpellChecker};

#[derive(Parser, Debug)]
#[command(name = "spellcore")]
#[command(version, about = "An embeddable spell checker with a CLI front end", long_about = None)]
struct Cli {
    /// Files to check
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Main dictionary file (one word per line)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Personal dictionary file
    #[arg(long)]
    personal_dict: Option<PathBuf>,

    /// Add words to the personal dictionary and save it
    #[arg(long)]
    add_to_dict: Vec<String>,

    /// Pattern to ignore (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Maximum number of suggestions per misspelling
    #[arg(long)]
    max_suggestions: Option<usize>,

    /// Edit-distance threshold for suggestions
    #[arg(long)]
    max_distance: Option<usize>,

    /// Report misspellings without computing suggestions
    #[arg(long)]
    no_suggestions: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if errors are found
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print ranked suggestions for a single word
    Suggest {
        word: String,

        /// Maximum number of suggestions
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellcore", &mut io::stdout());
        return Ok(());
    }

    let mut config = Config::load(
        cli.dictionary.clone(),
        cli.personal_dict.clone(),
        cli.ignore_pattern.clone(),
    )?;
    if let Some(n) = cli.max_suggestions {
        config.max_suggestions = n;
    }
    if let Some(n) = cli.max_distance {
        config.max_edit_distance = n;
    }

    let mut checker = SpellChecker::from_config(&config);
    checker.set_suggestions_enabled(!cli.no_suggestions);

    // Vocabulary mutations first; plain `--add-to-dict foo` with no files
    // is a complete invocation.
    if !cli.add_to_dict.is_empty() {
        for word in &cli.add_to_dict {
            checker.add_to_user_dictionary(word);
        }
        let path = config
            .personal_dictionary
            .as_ref()
            .context("No personal dictionary path configured")?;
        checker
            .save_user_dictionary(path)
            .with_context(|| format!("Failed to save personal dictionary: {}", path.display()))?;
    }

    if let Some(command) = cli.command {
        return handle_command(command, &checker, &config, !cli.no_color);
    }

    if cli.files.is_empty() {
        if cli.add_to_dict.is_empty() {
            anyhow::bail!("No files specified. Use --help for usage information.");
        }
        return Ok(());
    }

    if !checker.is_enabled() {
        anyhow::bail!(
            "No usable main dictionary; point --dictionary at a word list (one word per line)."
        );
    }

    let skip_patterns = compile_patterns(&config.ignore_patterns);

    let mut total_errors = 0;
    for file_path in &cli.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            continue;
        }

        let text = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        checker.check(&text);

        let errors: Vec<ReportedError> = checker
            .misspelled_words()
            .iter()
            .filter(|entry| !skip_patterns.iter().any(|re| re.is_match(&entry.word)))
            .map(|entry| {
                let (line, column) = output::line_col(&text, entry.start);
                ReportedError {
                    line,
                    column,
                    word: entry.word.clone(),
                    suggestions: checker.suggestions(&entry.word, config.max_suggestions),
                    context: output::context_line(&text, entry.start, entry.end),
                }
            })
            .collect();

        total_errors += errors.len();
        output::print_errors(file_path, &errors, !cli.no_color, &cli.format);
    }

    if matches!(cli.format, OutputFormat::Text) {
        output::print_check_summary(total_errors, &cli.files, !cli.no_color);
    }

    if total_errors > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn handle_command(
    command: Commands,
    checker: &SpellChecker,
    config: &Config,
    colored: bool,
) -> Result<()> {
    match command {
        Commands::Suggest { word, limit } => {
            if !checker.is_enabled() {
                anyhow::bail!(
                    "No usable main dictionary; point --dictionary at a word list (one word per line)."
                );
            }
            let limit = limit.unwrap_or(config.max_suggestions);
            let suggestions = checker.suggestions(&word, limit);
            output::print_suggestions(&word, &suggestions, colored);
        }
    }
    Ok(())
}

fn compile_patterns(patterns: &[String]) -> Vec<Regex> {
    let mut compiled = Vec::new();
    for pattern in patterns {
        match Regex::new(pattern) {
            Ok(re) => compiled.push(re),
            Err(e) => eprintln!("Warning: Invalid regex pattern '{}': {}", pattern, e),
        }
    }
    compiled
}
