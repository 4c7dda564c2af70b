//! Full-name decomposition.

use mambo_model::ParsedName;
use mambo_standards::{NameLexicon, normalize_token};

/// Splits full names into their five parts using a [`NameLexicon`].
///
/// Parsing is total: every input yields a `ParsedName`, possibly all empty.
/// Output tokens keep their original spelling (`"Dr."` stays `"Dr."`); only
/// the lexicon comparison is normalized.
#[derive(Debug, Clone, Copy)]
pub struct NameParser<'a> {
    lexicon: &'a NameLexicon,
}

impl<'a> NameParser<'a> {
    pub fn new(lexicon: &'a NameLexicon) -> Self {
        Self { lexicon }
    }

    pub fn parse(&self, full_name: &str) -> ParsedName {
        let collapsed = full_name.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            return ParsedName::default();
        }
        if collapsed.contains(',') {
            return self.parse_comma_form(&collapsed);
        }
        let tokens = tokenize(&collapsed);
        self.parse_tokens(&tokens, Vec::new())
    }

    /// `"Last, First Middle"` and its variants.
    ///
    /// Falls back to plain `"First Middle Last"` order when the surname
    /// segment or the given-name segments are empty.
    fn parse_comma_form(&self, collapsed: &str) -> ParsedName {
        let mut segments: Vec<&str> = collapsed.split(',').map(str::trim).collect();

        // Peel trailing segments made only of suffixes: "John Smith, Jr., PhD".
        let mut peeled: Vec<&str> = Vec::new();
        while segments.len() > 1 {
            let Some(&last) = segments.last() else {
                break;
            };
            let tokens = tokenize(last);
            if tokens.is_empty() {
                segments.pop();
                continue;
            }
            if !tokens.iter().all(|token| self.lexicon.is_suffix(token)) {
                break;
            }
            segments.pop();
            peeled.splice(0..0, tokens);
        }

        let surname = segments.first().copied().unwrap_or_default();
        let given: Vec<&str> = segments
            .iter()
            .skip(1)
            .copied()
            .flat_map(tokenize)
            .collect();
        if surname.is_empty() || given.is_empty() {
            let tokens: Vec<&str> = segments.iter().copied().flat_map(tokenize).collect();
            return self.parse_tokens(&tokens, peeled);
        }

        let mut surname_tokens = tokenize(surname);
        let mut prefix = take_leading(&mut surname_tokens, |t| self.lexicon.is_prefix(t));
        let mut suffix = take_trailing(&mut surname_tokens, |t| self.lexicon.is_suffix(t));

        // "Jr., John Smith": the leading segment held only titles.
        if surname_tokens.is_empty() {
            suffix.extend(peeled);
            let mut name = self.parse_tokens(&given, suffix);
            if !prefix.is_empty() {
                let mut joined = prefix.join(" ");
                if !name.prefix.is_empty() {
                    joined.push(' ');
                    joined.push_str(&name.prefix);
                }
                name.prefix = joined;
            }
            return name;
        }

        let mut given_tokens = given;
        prefix.extend(take_leading(&mut given_tokens, |t| self.lexicon.is_prefix(t)));
        suffix.extend(take_trailing(&mut given_tokens, |t| self.lexicon.is_suffix(t)));
        suffix.extend(peeled);

        let (first, middle) = match given_tokens.split_first() {
            Some((first, middle)) => (first.to_string(), middle.join(" ")),
            None => (String::new(), String::new()),
        };
        ParsedName {
            prefix: prefix.join(" "),
            first,
            middle,
            last: surname_tokens.join(" "),
            suffix: suffix.join(" "),
        }
    }

    /// `"Prefix First Middle Last Suffix"` order.
    fn parse_tokens(&self, tokens: &[&str], extra_suffixes: Vec<&str>) -> ParsedName {
        let mut rest: Vec<&str> = tokens.to_vec();
        let prefix = take_leading(&mut rest, |t| self.lexicon.is_prefix(t));
        let mut suffix = take_trailing(&mut rest, |t| self.lexicon.is_suffix(t));
        suffix.extend(extra_suffixes);

        let mut name = ParsedName {
            prefix: prefix.join(" "),
            suffix: suffix.join(" "),
            ..ParsedName::default()
        };
        match rest.len() {
            0 => {}
            1 => name.first = rest[0].to_string(),
            len => {
                let start = self.surname_start(&rest);
                name.first = rest[0].to_string();
                name.middle = rest[1..start].join(" ");
                name.last = rest[start..len].join(" ");
            }
        }
        name
    }

    /// Index of the first surname token in `tokens` (at least two tokens).
    ///
    /// The last token is always part of the surname. Particles immediately
    /// before it extend the surname backwards, multi-token phrases first.
    /// Index 0 is never consumed: it is the first name.
    fn surname_start(&self, tokens: &[&str]) -> usize {
        let mut start = tokens.len() - 1;
        'extend: while start > 1 {
            for phrase in self.lexicon.particle_phrases() {
                let width = phrase.len();
                if start <= width {
                    continue;
                }
                let candidate = &tokens[start - width..start];
                let matches = candidate
                    .iter()
                    .zip(phrase)
                    .all(|(token, expected)| normalize_token(token) == *expected);
                if matches {
                    start -= width;
                    continue 'extend;
                }
            }
            if self.lexicon.is_particle(tokens[start - 1]) {
                start -= 1;
                continue;
            }
            break;
        }
        start
    }
}

/// Parse `full_name` with `lexicon`.
pub fn parse_name(full_name: &str, lexicon: &NameLexicon) -> ParsedName {
    NameParser::new(lexicon).parse(full_name)
}

/// Split on whitespace and commas, dropping empty pieces.
fn tokenize(text: &str) -> Vec<&str> {
    text.split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|token| !token.is_empty())
        .collect()
}

fn take_leading<'t>(tokens: &mut Vec<&'t str>, pred: impl Fn(&str) -> bool) -> Vec<&'t str> {
    let count = tokens.iter().take_while(|&&token| pred(token)).count();
    tokens.drain(..count).collect()
}

fn take_trailing<'t>(tokens: &mut Vec<&'t str>, pred: impl Fn(&str) -> bool) -> Vec<&'t str> {
    let count = tokens.iter().rev().take_while(|&&token| pred(token)).count();
    let at = tokens.len() - count;
    tokens.split_off(at)
}
