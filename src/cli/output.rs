use std::fmt;
use std::path::Path;
use std::str::FromStr;

use colored::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One misspelling, decorated for display. The engine reports byte
/// offsets; line/column and context are computed here because they are a
/// presentation concern.
#[derive(Debug, Clone)]
pub struct ReportedError {
    pub line: usize,
    pub column: usize,
    pub word: String,
    pub suggestions: Vec<String>,
    pub context: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonError {
    file: String,
    line: usize,
    column: usize,
    word: String,
    suggestions: Vec<String>,
    context: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    files_checked: usize,
    total_errors: usize,
    errors: Vec<JsonError>,
}

/// 1-indexed line and character column for a byte offset.
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset.min(text.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// The line containing the span, trimmed to a window around the word.
pub fn context_line(text: &str, start: usize, end: usize) -> String {
    let line_start = text[..start.min(text.len())]
        .rfind('\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let line_end = text[end.min(text.len())..]
        .find('\n')
        .map(|i| end + i)
        .unwrap_or(text.len());
    let line = &text[line_start..line_end];

    let word_offset = start - line_start;
    let window_start = line[..word_offset]
        .char_indices()
        .rev()
        .nth(19)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let window_end = line[end - line_start..]
        .char_indices()
        .nth(20)
        .map(|(i, _)| end - line_start + i)
        .unwrap_or(line.len());
    let window = &line[window_start..window_end];

    match (window_start > 0, window_end < line.len()) {
        (true, true) => format!("...{}...", window),
        (true, false) => format!("...{}", window),
        (false, true) => format!("{}...", window),
        (false, false) => window.to_string(),
    }
}

pub fn print_errors(
    file_path: &Path,
    errors: &[ReportedError],
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_errors(file_path, errors, colored_output),
        OutputFormat::Json => print_json_errors(file_path, errors),
    }
}

fn print_text_errors(file_path: &Path, errors: &[ReportedError], colored_output: bool) {
    if errors.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for error in errors {
        let line_info = format!("{}:{}", error.line, error.column);

        if colored_output {
            println!(
                "  {} {} {}",
                line_info.blue().bold(),
                error.word.red().bold(),
                format_context(&error.context, &error.word, colored_output)
            );

            if !error.suggestions.is_empty() {
                let suggestions = error
                    .suggestions
                    .iter()
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(&", ".dimmed().to_string());
                println!("    {} {}", "→".dimmed(), suggestions);
            }
        } else {
            println!("  {} {} {}", line_info, error.word, &error.context);

            if !error.suggestions.is_empty() {
                println!("    → {}", error.suggestions.join(", "));
            }
        }
    }
}

fn print_json_errors(file_path: &Path, errors: &[ReportedError]) {
    let json_errors: Vec<JsonError> = errors
        .iter()
        .map(|e| JsonError {
            file: file_path.display().to_string(),
            line: e.line,
            column: e.column,
            word: e.word.clone(),
            suggestions: e.suggestions.clone(),
            context: e.context.clone(),
        })
        .collect();

    let output = JsonOutput {
        files_checked: 1,
        total_errors: errors.len(),
        errors: json_errors,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("Failed to serialize output: {}", err),
    }
}

fn format_context(context: &str, word: &str, colored: bool) -> String {
    if colored {
        context.replace(word, &word.red().bold().to_string())
    } else {
        context.to_string()
    }
}

pub fn print_check_summary(total_errors: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        } else {
            println!(
                "✗ {} {} found in {} {}",
                total_errors,
                error_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        }
    }
}

pub fn print_suggestions(word: &str, suggestions: &[String], colored: bool) {
    if suggestions.is_empty() {
        if colored {
            println!("{} {}", "No suggestions for".yellow(), word.bold());
        } else {
            println!("No suggestions for {}", word);
        }
        return;
    }

    for suggestion in suggestions {
        if colored {
            println!("{}", suggestion.green());
        } else {
            println!("{}", suggestion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col() {
        let text = "one two\nthree four\n";
        assert_eq!(line_col(text, 0), (1, 1));
        assert_eq!(line_col(text, 4), (1, 5));
        assert_eq!(line_col(text, 8), (2, 1));
        assert_eq!(line_col(text, 14), (2, 7));
    }

    #[test]
    fn test_line_col_multibyte() {
        // "é" is two bytes but one column
        let text = "café x";
        assert_eq!(line_col(text, 5), (1, 5));
    }

    #[test]
    fn test_context_line_short() {
        let text = "the wrk queue";
        assert_eq!(context_line(text, 4, 7), "the wrk queue");
    }

    #[test]
    fn test_context_line_windows_long_lines() {
        let pad = "x".repeat(50);
        let text = format!("{pad} wrk {pad}");
        let ctx = context_line(&text, 51, 54);
        assert!(ctx.starts_with("..."));
        assert!(ctx.ends_with("..."));
        assert!(ctx.contains("wrk"));
    }

    #[test]
    fn test_output_format_parse() {
        assert!(matches!("text".parse(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
