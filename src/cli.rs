use std::{io, path::PathBuf};

use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::{
    clipboard,
    domain::{AddOutcome, Category, CustomCatalog, builtin_moods, normalize_mood},
    storage::{self, FileStore},
};

#[derive(Parser, Debug)]
#[command(name = "whimsy")]
#[command(about = "Random mood picker for your terminal", long_about = None)]
pub enum Cli {
    #[command(about = "Print one random mood")]
    Pick {
        #[arg(long, short, help = "Category name (All, Calm, Hype, Focus)")]
        category: Option<String>,

        #[arg(long, help = "Copy the picked mood to the clipboard")]
        copy: bool,
    },

    #[command(about = "Add a custom mood to a category")]
    Add {
        #[arg(help = "Mood text")]
        text: String,

        #[arg(long, short, help = "Category name (Calm, Hype, Focus)")]
        category: String,
    },

    #[command(about = "Remove a custom mood by position")]
    Remove {
        #[arg(help = "Position in the custom list (see `list`)")]
        index: usize,

        #[arg(long, short, help = "Category name (Calm, Hype, Focus)")]
        category: String,
    },

    #[command(about = "List built-in and custom moods")]
    List {
        #[arg(long, short, help = "Category name (defaults to the saved category)")]
        category: Option<String>,
    },

    #[command(about = "Export moods and session state")]
    Export {
        #[arg(long, value_enum, help = "Export format")]
        format: ExportFormat,

        #[arg(long, short, help = "Output path")]
        out: Option<PathBuf>,
    },

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(help = "Shell type (bash, zsh, fish)")]
        shell: String,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExportFormat {
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataExport {
    pub schema_version: u32,
    pub exported_at: DateTime<Utc>,
    pub category: String,
    pub last_mood: Option<String>,
    pub custom_moods: CustomCatalog,
}

fn parse_category(name: &str) -> Result<Category, String> {
    Category::from_name(name)
        .ok_or_else(|| format!("Unknown category '{}'. Use All, Calm, Hype, or Focus.", name))
}

pub fn pick(category_name: Option<String>, copy: bool) -> Result<(), String> {
    let mut store = FileStore::new();
    let mut picker = storage::load_picker(&store);

    if let Some(name) = category_name {
        picker.current_category = parse_category(&name)?;
        storage::save_category(&mut store, picker.current_category).map_err(|e| e.to_string())?;
    }

    let mood = picker.pick();
    storage::save_last_mood(&mut store, &mood).map_err(|e| e.to_string())?;
    println!("{}", mood);

    if copy && let Err(e) = clipboard::copy(&mood) {
        eprintln!("Warning: {}", e);
    }

    Ok(())
}

pub fn add(text: String, category_name: String) -> Result<(), String> {
    let category = parse_category(&category_name)?;
    let mut store = FileStore::new();
    let mut picker = storage::load_picker(&store);

    match picker.add_custom(category, &text) {
        AddOutcome::Added => {
            storage::save_custom_moods(&mut store, &picker.customs).map_err(|e| e.to_string())?;
            let added = picker
                .customs
                .list(category)
                .and_then(|list| list.last().cloned())
                .unwrap_or_default();
            println!("Added '{}' to {}", added, category.name());
            Ok(())
        }
        AddOutcome::Duplicate => Err(format!(
            "'{}' is already in {} (case-insensitive)",
            normalize_mood(&text),
            category.name()
        )),
        AddOutcome::Empty => Err("Mood text is empty after trimming".to_string()),
        AddOutcome::ReadOnly => {
            Err("'All' is view-only. Add to Calm, Hype, or Focus.".to_string())
        }
    }
}

pub fn remove(index: usize, category_name: String) -> Result<(), String> {
    let category = parse_category(&category_name)?;
    let mut store = FileStore::new();
    let mut picker = storage::load_picker(&store);

    if !category.is_concrete() {
        return Err("'All' is view-only. Remove from Calm, Hype, or Focus.".to_string());
    }

    let removed = picker
        .customs
        .list(category)
        .and_then(|list| list.get(index).cloned());

    if picker.remove_custom(category, index) {
        storage::save_custom_moods(&mut store, &picker.customs).map_err(|e| e.to_string())?;
        println!(
            "Removed '{}' from {}",
            removed.unwrap_or_default(),
            category.name()
        );
        Ok(())
    } else {
        Err(format!(
            "No custom mood at position {} in {}",
            index,
            category.name()
        ))
    }
}

pub fn list(category_name: Option<String>) -> Result<(), String> {
    let store = FileStore::new();
    let picker = storage::load_picker(&store);

    let category = match category_name {
        Some(name) => parse_category(&name)?,
        None => picker.current_category,
    };

    println!("{}", category.name());
    println!("{}", "-".repeat(40));

    match category {
        Category::All => {
            for mood in picker.pool(Category::All) {
                println!("  {}", mood);
            }
        }
        concrete => {
            for mood in builtin_moods(concrete) {
                println!("  {}", mood);
            }
            if let Some(customs) = picker.customs.list(concrete) {
                for (i, mood) in customs.iter().enumerate() {
                    println!("{:>3} {}", i, mood);
                }
            }
        }
    }

    Ok(())
}

pub fn export_data(format: ExportFormat, out_path: Option<PathBuf>) -> Result<(), String> {
    let store = FileStore::new();
    let picker = storage::load_picker(&store);

    let export = DataExport {
        schema_version: 1,
        exported_at: Utc::now(),
        category: picker.current_category.name().to_string(),
        last_mood: picker.last_mood.clone(),
        custom_moods: picker.customs.clone(),
    };

    match format {
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(&export).map_err(|e| e.to_string())?;
            if let Some(path) = out_path {
                storage::write_text_file(&path, &json).map_err(|e| e.to_string())?;
                println!("Exported to {}", path.display());
            } else {
                println!("{}", json);
            }
        }
    }

    Ok(())
}

pub fn print_completions(shell: &str) -> Result<(), String> {
    use clap_complete::Shell;
    match shell {
        "bash" => {
            clap_complete::generate(
                Shell::Bash,
                &mut Cli::command(),
                "whimsy",
                &mut io::stdout(),
            );
        }
        "zsh" => {
            clap_complete::generate(Shell::Zsh, &mut Cli::command(), "whimsy", &mut io::stdout());
        }
        "fish" => {
            clap_complete::generate(
                Shell::Fish,
                &mut Cli::command(),
                "whimsy",
                &mut io::stdout(),
            );
        }
        _ => {
            return Err(format!(
                "Unsupported shell: {}. Use bash, zsh, or fish.",
                shell
            ));
        }
    }
    Ok(())
}

pub fn run_cli() {
    let cli = Cli::parse();
    match cli {
        Cli::Pick { category, copy } => {
            if let Err(e) = pick(category, copy) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Cli::Add { text, category } => {
            if let Err(e) = add(text, category) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Cli::Remove { index, category } => {
            if let Err(e) = remove(index, category) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Cli::List { category } => {
            if let Err(e) = list(category) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Cli::Export { format, out } => {
            if let Err(e) = export_data(format, out) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Cli::Completions { shell } => {
            if let Err(e) = print_completions(&shell) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
