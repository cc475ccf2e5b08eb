use std::collections::HashSet;
use std::io::{self, ErrorKind};
use std::path::Path;
use std::time::Duration;

use wordbank::WordBank;

/// Splits a comma-delimited list, lower-casing entries and dropping blanks.
pub fn parse_list(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Reads a comma-delimited list, `None` when the file does not exist.
pub fn read_list(path: &Path) -> io::Result<Option<Vec<String>>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(parse_list(&content))),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error),
    }
}

/// Words from `candidates` not already in `accepted`, first occurrence kept.
pub fn unseen(candidates: Vec<String>, accepted: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = accepted.iter().cloned().collect();
    candidates
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Appends `words` to the list at `path`, creating it if needed. Existing
/// entries keep their spelling. Returns the new total.
pub fn append_words(path: &Path, words: &[String]) -> io::Result<usize> {
    let mut all: Vec<String> = match std::fs::read_to_string(path) {
        Ok(content) => content
            .split(',')
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_owned)
            .collect(),
        Err(error) if error.kind() == ErrorKind::NotFound => Vec::new(),
        Err(error) => return Err(error),
    };
    all.extend(words.iter().cloned());
    std::fs::write(path, all.join(", "))?;
    Ok(all.len())
}

#[derive(Debug, Default)]
pub struct ScreenReport {
    pub checked: usize,
    pub accepted: Vec<String>,
    pub total: Option<usize>,
}

/// Checks every new candidate for pronunciation audio, one request at a
/// time, and appends the ones that have it to the accepted list.
pub async fn screen_words(
    bank: &WordBank,
    new_words: &Path,
    accepted: &Path,
    delay: Duration,
) -> anyhow::Result<ScreenReport> {
    let Some(candidates) = read_list(new_words)? else {
        println!("{} does not exist, nothing to screen.", new_words.display());
        return Ok(ScreenReport::default());
    };
    let existing = read_list(accepted)?.unwrap_or_default();
    println!(
        "Read {} candidates, {} words already accepted.",
        candidates.len(),
        existing.len()
    );

    let to_check = unseen(candidates, &existing);
    let mut report = ScreenReport {
        checked: to_check.len(),
        ..ScreenReport::default()
    };
    for (index, word) in to_check.iter().enumerate() {
        if index != 0 {
            tokio::time::sleep(delay).await;
        }
        let has_audio = bank.has_audio(word).await;
        if has_audio {
            report.accepted.push(word.clone());
        }
        println!(
            "[{}/{}] {word}: {}",
            index + 1,
            to_check.len(),
            if has_audio { "has audio" } else { "no audio" }
        );
    }

    if !report.accepted.is_empty() {
        report.total = Some(append_words(accepted, &report.accepted)?);
    }
    Ok(report)
}
