//! Optional casing of parsed name parts.

use serde::{Deserialize, Serialize};

use mambo_model::ParsedName;
use mambo_standards::{NameLexicon, normalize_token};

/// How name parts are cased in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCasing {
    /// Keep the casing found in the input.
    #[default]
    Preserve,
    /// Capitalize each word of first, middle and last name; particles stay
    /// lowercase.
    Title,
}

/// Apply `casing` to the first, middle and last name of `name`.
///
/// Prefixes and suffixes are left alone (`PhD`, `III`).
pub fn apply_name_casing(name: &mut ParsedName, casing: NameCasing, lexicon: &NameLexicon) {
    if casing == NameCasing::Preserve {
        return;
    }
    for part in [&mut name.first, &mut name.middle, &mut name.last] {
        *part = title_case_part(part, lexicon);
    }
}

/// Title-case one name part word by word.
///
/// Particles keep lowercase unless they reach the final word of the part.
/// Multi-word phrases (`van der`, `de los`) are matched before single
/// particles. Letters after `-` and `'` are capitalized: `o'brien-smith`
/// becomes `O'Brien-Smith`.
pub fn title_case_part(part: &str, lexicon: &NameLexicon) -> String {
    let words: Vec<&str> = part.split_whitespace().collect();
    let lowered = particle_words(&words, lexicon);
    words
        .iter()
        .zip(lowered)
        .map(|(word, particle)| {
            if particle {
                word.to_lowercase()
            } else {
                capitalize_word(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Marks the words of `words` that belong to a particle, never the last one.
fn particle_words(words: &[&str], lexicon: &NameLexicon) -> Vec<bool> {
    let mut marked = vec![false; words.len()];
    let last = words.len().saturating_sub(1);
    let mut idx = 0;
    while idx < last {
        let phrase_width = lexicon
            .particle_phrases()
            .iter()
            .find(|phrase| {
                idx + phrase.len() <= last
                    && words[idx..idx + phrase.len()]
                        .iter()
                        .zip(phrase.iter())
                        .all(|(word, expected)| normalize_token(word) == *expected)
            })
            .map(Vec::len);
        let width = match phrase_width {
            Some(width) => width,
            None if lexicon.is_particle(words[idx]) => 1,
            None => {
                idx += 1;
                continue;
            }
        };
        marked[idx..idx + width].fill(true);
        idx += width;
    }
    marked
}

fn capitalize_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_start = true;
    for ch in word.chars() {
        if at_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        at_start = matches!(ch, '-' | '\'' | '\u{2019}');
    }
    out
}
