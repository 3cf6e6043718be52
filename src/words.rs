use crate::logger;
use crate::models::TranslationPair;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordOrigin {
    Bundled(PathBuf),
    File(PathBuf),
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    pub pairs: Vec<TranslationPair>,
    pub origin: WordOrigin,
}

impl WordList {
    pub fn sample() -> Self {
        WordList {
            pairs: sample_words(),
            origin: WordOrigin::Sample,
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn label(&self) -> String {
        match &self.origin {
            WordOrigin::Bundled(_) => "default list".to_string(),
            WordOrigin::File(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            WordOrigin::Sample => "built-in sample".to_string(),
        }
    }
}

pub fn sample_words() -> Vec<TranslationPair> {
    vec![
        TranslationPair::new("pencil", "עיפרון"),
        TranslationPair::new("book", "ספר"),
        TranslationPair::new("teacher", "מורה"),
        TranslationPair::new("train", "רכבת"),
        TranslationPair::new("happy", "שמח"),
    ]
}

/// `english,hebrew` rows under a header line. No quoting: anything after the
/// second comma is ignored.
pub fn parse_word_csv(text: &str) -> Vec<TranslationPair> {
    text.trim()
        .lines()
        .skip(1)
        .filter_map(parse_word_row)
        .collect()
}

fn parse_word_row(line: &str) -> Option<TranslationPair> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let mut parts = line.split(',');
    let source = parts.next()?.trim();
    let target = parts.next()?.trim();
    if source.is_empty() || target.is_empty() {
        return None;
    }
    Some(TranslationPair::new(source, target))
}

/// Bundled list, or the sample words when it is missing or yields nothing.
pub fn load_default_words(path: &Path) -> WordList {
    match fs::read_to_string(path) {
        Ok(text) => {
            let pairs = parse_word_csv(&text);
            if !pairs.is_empty() {
                logger::info(&format!(
                    "Loaded {} words from {}",
                    pairs.len(),
                    path.display()
                ));
                return WordList {
                    pairs,
                    origin: WordOrigin::Bundled(path.to_path_buf()),
                };
            }
            logger::warn(&format!("No words in {}, using sample words", path.display()));
        }
        Err(e) => {
            logger::warn(&format!(
                "Could not load {} ({}), using sample words",
                path.display(),
                e
            ));
        }
    }
    WordList::sample()
}

pub fn load_word_file(path: &Path) -> io::Result<WordList> {
    let text = fs::read_to_string(path)?;
    Ok(WordList {
        pairs: parse_word_csv(&text),
        origin: WordOrigin::File(path.to_path_buf()),
    })
}

pub fn get_csv_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}
