use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{ArgAction, Parser};
use settings::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utilities::{input, next_arg, optional_arg};
use wordbank::{tier_config, WordBank, WordSource, WordWithDetails, HARD_WORD_LEVEL};

mod settings;
mod utilities;
mod word_list;

#[derive(Debug, Parser)]
#[command(name = "spelling-bee", version, about = "Fetch playable words for a spelling game")]
struct Cli {
    /// Extra configuration file, layered over ./spelling-bee.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog bearer token, overrides the configured one
    #[arg(long, env = "SPELLING_BEE_TOKEN")]
    token: Option<String>,

    /// -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut settings = Settings::load(cli.config.as_deref())
        .map_err(|error| anyhow::anyhow!("failed to load configuration: {error}"))?;
    if cli.token.is_some() {
        settings.token = cli.token;
    }
    info!(endpoints = ?settings.endpoints, "starting");

    let bank = WordBank::new(settings.endpoints.clone());
    loop {
        let line = input(">> ")?;
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            match command {
                "exit" | "quit" | "e" | "q" => {
                    break;
                }
                "level" => match next_arg::<i64>(&mut command_parts) {
                    Some(level) => play_level(&bank, &settings, level).await,
                    None => println!("Usage: level <number>"),
                },
                "random" => {
                    let count = next_arg::<usize>(&mut command_parts);
                    let length = next_arg::<usize>(&mut command_parts);
                    match (count, length) {
                        (Some(count), Some(length)) => {
                            let words = bank.fetch_random_words_with_details(count, length).await;
                            print_result(words);
                        }
                        _ => println!("Usage: random <count> <length>"),
                    }
                }
                "hard" => {
                    let count = next_arg::<usize>(&mut command_parts);
                    let level = optional_arg(&mut command_parts, HARD_WORD_LEVEL);
                    match (count, level) {
                        (Some(count), Some(level)) => {
                            let words = bank
                                .fetch_hard_words_with_details(
                                    count,
                                    settings.token.as_deref(),
                                    level,
                                )
                                .await;
                            print_result(words);
                        }
                        _ => println!("Usage: hard <count> [level]"),
                    }
                }
                "define" => {
                    let word = command_parts.collect::<Vec<&str>>().join(" ");
                    match bank.fetch_single_word_details(&word).await {
                        Some(details) => print_word(&details),
                        None => println!("Couldn't find the word you were looking for."),
                    }
                }
                "screen" => match (command_parts.next(), command_parts.next()) {
                    (Some(new_words), Some(accepted)) => {
                        screen(&bank, &settings, Path::new(new_words), Path::new(accepted))
                            .await?;
                    }
                    _ => println!("Usage: screen <new-words-file> <accepted-words-file>"),
                },
                _ => {
                    println!("Unknown command {command}.");
                }
            }
        }
    }
    Ok(())
}

async fn play_level(bank: &WordBank, settings: &Settings, level: i64) {
    let config = tier_config(level);
    let source = match config.source {
        WordSource::Random {
            min_length,
            max_length,
        } => format!("random words of {min_length}-{max_length} letters"),
        WordSource::Catalog {
            min_level,
            max_level,
        } => format!("catalog levels {min_level}-{max_level}"),
    };
    println!(
        "Level {level} ({:?}): streak of {}, {}s per word, {source}",
        config.tier,
        config.required_streak,
        config.time_limit.as_secs()
    );
    let words = bank
        .fetch_words_for_level(&config, settings.token.as_deref())
        .await;
    print_result(words);
}

async fn screen(
    bank: &WordBank,
    settings: &Settings,
    new_words: &Path,
    accepted: &Path,
) -> anyhow::Result<()> {
    let delay = Duration::from_millis(settings.delay_ms);
    let report = word_list::screen_words(bank, new_words, accepted, delay).await?;
    println!(
        "Checked {} new words, {} with audio.",
        report.checked,
        report.accepted.len()
    );
    if let Some(total) = report.total {
        println!(
            "Appended {} words to {}, {total} in total.",
            report.accepted.len(),
            accepted.display()
        );
    }
    Ok(())
}

fn print_result(words: wordbank::Result<Vec<WordWithDetails>>) {
    match words {
        Ok(words) => {
            println!("{} words:", words.len());
            for word in &words {
                print_word(word);
            }
        }
        Err(error) => {
            println!("Couldn't fetch words: {error}");
        }
    }
}

fn print_word(word: &WordWithDetails) {
    println!("    {}", word.word);
    if let Some(definition) = &word.definition {
        println!("        {definition}");
    }
    if let Some(example) = &word.example_sentence {
        println!("          example: {example}");
    }
    if let Some(audio) = &word.audio_url {
        println!("          audio: {audio}");
    }
}
