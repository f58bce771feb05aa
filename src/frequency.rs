use std::collections::{HashMap, HashSet};

use crate::error::{CloudError, CloudResult};

/// Split `text` into normalized tokens: lowercase, ASCII-alphabetic runs
/// only, longer than one character, and not in the exclusion set.
///
/// Non-ASCII letters split a word just like punctuation does ("café"
/// yields "caf"), keeping the token stream byte-for-byte comparable with
/// reports produced by the `[a-zA-Z]+` extraction this replaces.
///
/// Pure and deterministic; the output order follows the source text.
pub fn tokenize(text: &str, exclusion: &HashSet<String>) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            word.push(ch.to_ascii_lowercase());
        } else if !word.is_empty() {
            push_token(&mut tokens, std::mem::take(&mut word), exclusion);
        }
    }
    if !word.is_empty() {
        push_token(&mut tokens, word, exclusion);
    }
    tokens
}

fn push_token(tokens: &mut Vec<String>, word: String, exclusion: &HashSet<String>) {
    if word.chars().count() > 1 && !exclusion.contains(&word) {
        tokens.push(word);
    }
}

/// Word counts in first-occurrence order.
///
/// Insertion order is kept so the frequency report and equal-count tie-breaks
/// are reproducible across runs.
#[derive(Clone, Debug)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    /// Count token occurrences. Fails when no tokens survive filtering;
    /// layout over an empty table would silently produce a blank image.
    pub fn build<I, S>(tokens: I) -> CloudResult<FrequencyTable>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, u64)> = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            match index.get(token) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(token.to_string(), entries.len());
                    entries.push((token.to_string(), 1));
                }
            }
        }
        if entries.is_empty() {
            return Err(CloudError::corpus("no words left after filtering"));
        }
        Ok(FrequencyTable { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, word: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|&(_, c)| c)
    }

    /// Entries in first-occurrence (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Entries ordered by count descending; equal counts keep their
    /// first-occurrence order (stable sort), which fixes the placement order
    /// for a given corpus.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// One "word: count" line per entry, insertion order preserved.
    pub fn report(&self) -> String {
        let mut out = String::new();
        for (word, count) in self.iter() {
            out.push_str(word);
            out.push_str(": ");
            out.push_str(&count.to_string());
            out.push('\n');
        }
        out
    }
}
