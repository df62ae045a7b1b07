/// Mad Libs — interactive story shell.
///
/// Usage: madlibs [--words <file>] [--templates <file>]... [--seed <n>] [--once]
///
/// Commands:
///   noun|verb|adj <text>  — fill a field (no text clears it)
///   mood <text>           — pick a mood (no text unsets it)
///   generate              — generate a story from the current fields
///   trace                 — generate and show template and slot sources
///   reset                 — clear all fields
///   bulk <n>              — generate n stories with variety stats
///   help                  — show the game help and commands
///   quit                  — exit

use anyhow::{Context, Result};
use clap::Parser;
use mad_libs::core::form::{StoryForm, HELP_TITLE};
use mad_libs::core::generator::StoryGenerator;
use mad_libs::schema::fields::FieldInput;
use mad_libs::schema::slot::Slot;
use mad_libs::schema::story::{Source, Story};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "madlibs")]
#[command(version)]
#[command(about = "Fill in a noun, verb, adjective and mood, get a story", long_about = None)]
struct Cli {
    /// Word bank RON file (defaults to the built-in word lists)
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Template RON file; repeat to merge several (defaults to the built-in templates)
    #[arg(short, long)]
    templates: Vec<PathBuf>,

    /// Initial RNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Print one story from the slot flags below and exit
    #[arg(long, default_value_t = false, help_heading = "One-shot")]
    once: bool,

    #[arg(long, help_heading = "One-shot")]
    noun: Option<String>,

    #[arg(long, help_heading = "One-shot")]
    verb: Option<String>,

    #[arg(long, help_heading = "One-shot")]
    adj: Option<String>,

    #[arg(long, help_heading = "One-shot")]
    mood: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = StoryGenerator::builder();
    if let Some(ref path) = cli.words {
        builder = builder.word_bank_path(path);
    }
    for path in &cli.templates {
        builder = builder.template_path(path);
    }
    let generator = builder
        .build()
        .context("failed to load word bank and templates")?;

    let mut rng = StdRng::seed_from_u64(cli.seed);

    if cli.once {
        let input = FieldInput::from_parts(
            cli.noun.as_deref(),
            cli.verb.as_deref(),
            cli.adj.as_deref(),
            cli.mood.as_deref(),
        );
        println!("{}", generator.generate(&input, &mut rng)?);
        return Ok(());
    }

    println!(
        "Loaded {} templates, {} words",
        generator.templates().len(),
        generator.word_bank().total_words()
    );
    println!("Seed: {}", cli.seed);
    println!("Type 'help' for commands.\n");

    let mut form = StoryForm::new();
    let mut current_seed = cli.seed;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("madlibs> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
            None => (line.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                println!("--- {} ---", HELP_TITLE);
                println!("{}\n", StoryForm::help());
                print_commands();
            }
            "noun" | "verb" | "adj" => {
                let slot = match cmd.as_str() {
                    "noun" => Slot::Noun,
                    "verb" => Slot::Verb,
                    _ => Slot::Adjective,
                };
                form.set_field(slot, rest);
                if rest.is_empty() {
                    println!("{} cleared.", slot.label());
                } else {
                    println!("{} set to '{}'.", slot.label(), rest);
                }
            }
            "mood" => {
                if rest.is_empty() {
                    form.reset_mood();
                    println!("Mood unset.");
                } else {
                    form.select_mood(rest);
                    println!("Mood set to '{}'.", rest);
                }
            }
            "moods" => {
                println!("Moods: {}", StoryForm::mood_options(&generator).join(", "));
            }
            "show" => {
                print_form(&form);
            }
            "generate" | "g" => match form.generate(&generator, &mut rng) {
                Ok(story) => println!("\n{}\n", story),
                Err(e) => println!("ERROR: {}", e),
            },
            "trace" => match generator.generate_detailed(&form.field_input(), &mut rng) {
                Ok(story) => {
                    println!("\n{}\n", story.text);
                    print_trace(&story);
                }
                Err(e) => println!("ERROR: {}", e),
            },
            "reset" => {
                form.reset();
                println!("{}", form.display());
            }
            "seed" => {
                if rest.is_empty() {
                    println!("Current seed: {}", current_seed);
                    continue;
                }
                match rest.parse::<u64>() {
                    Ok(s) => {
                        current_seed = s;
                        rng = StdRng::seed_from_u64(current_seed);
                        println!("Seed set to {}", current_seed);
                    }
                    Err(_) => println!("Invalid seed: {}", rest),
                }
            }
            "bulk" => {
                let count: usize = match rest.parse() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        println!("Usage: bulk <n>");
                        continue;
                    }
                };
                run_bulk(&generator, &form.field_input(), count, current_seed);
            }
            _ => {
                println!("Unknown command: '{}'. Type 'help' for available commands.", cmd);
            }
        }
    }

    Ok(())
}

fn print_commands() {
    println!("Commands:");
    println!("  noun <text>     Set the noun (no text clears it)");
    println!("  verb <text>     Set the verb");
    println!("  adj <text>      Set the adjective");
    println!("  mood <text>     Pick a mood (no text unsets it)");
    println!("  moods           List the predefined moods");
    println!("  show            Show the current fields and story");
    println!("  generate        Generate a story (alias: g)");
    println!("  trace           Generate and show how each slot was filled");
    println!("  reset           Clear all fields");
    println!("  seed <n>        Reseed the RNG");
    println!("  bulk <n>        Generate n stories with variety statistics");
    println!("  help            Show this help");
    println!("  quit            Exit");
}

fn print_form(form: &StoryForm) {
    let blank = |s: &str| if s.trim().is_empty() { "(random)".to_string() } else { s.to_string() };
    println!("  Noun:      {}", blank(&form.noun));
    println!("  Verb:      {}", blank(&form.verb));
    println!("  Adjective: {}", blank(&form.adjective));
    println!("  Mood:      {}", form.mood);
    println!("  Story:     {}", form.display());
}

fn print_trace(story: &Story) {
    println!("[Trace] template #{}", story.template_index);
    for slot in Slot::ALL {
        let resolved = story.values.get(slot);
        let source = match resolved.source {
            Source::Supplied => "supplied",
            Source::Fallback => "random",
        };
        println!("[Trace] {{{}}} = '{}' ({})", slot.placeholder(), resolved.value, source);
    }
}

fn run_bulk(generator: &StoryGenerator, input: &FieldInput, count: usize, seed: u64) {
    // Fresh RNG so bulk runs are repeatable for a given seed
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stories = Vec::with_capacity(count);
    let mut errors = 0;
    let mut template_usage = vec![0usize; generator.templates().len()];

    for _ in 0..count {
        match generator.generate_detailed(input, &mut rng) {
            Ok(story) => {
                template_usage[story.template_index] += 1;
                stories.push(story.text);
            }
            Err(_) => errors += 1,
        }
    }

    println!("\n=== Bulk Generation: {} stories ({} errors) ===\n", stories.len(), errors);

    let unique: FxHashSet<&String> = stories.iter().collect();
    println!("Unique stories: {} / {}", unique.len(), stories.len());

    let avg_len: f64 = if stories.is_empty() {
        0.0
    } else {
        stories.iter().map(|s| s.len() as f64).sum::<f64>() / stories.len() as f64
    };
    println!("Average length: {:.0} chars", avg_len);

    println!("\nTemplate usage:");
    for (index, uses) in template_usage.iter().enumerate() {
        println!("  #{}: {}", index, uses);
    }

    if let Some(first) = stories.first() {
        println!("\nSample story:");
        println!("  {}", first);
    }
    println!();
}
