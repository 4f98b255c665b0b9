//! Display labels from URL path segments.
//!
//! Route segments are written in kebab-case (`claims-history`), camelCase
//! (`memberId`) or snake_case (`plan_docs`). [`title_case`] splits them into
//! words and capitalizes each one:
//!
//! - `settings` → "Settings"
//! - `claims-history` → "Claims History"
//! - `memberId` → "Member ID"
//! - `faq-page` → "FAQ Page"
//! - `hsa-fsa-faq` → "HSA FSA FAQ"
//! - `dependent-ids` → "Dependent IDs"
//!
//! - `FAQids` → "FAQ IDs"
//!
//! Words on the acronym allow-list are fully uppercased wherever they appear.
//! Each word is checked on its own, so a segment with several acronyms gets
//! each of them replaced.

/// Acronyms recognised when no configuration overrides them.
pub const DEFAULT_ACRONYMS: &[&str] = &["FAQ", "HSA", "FSA", "ID", "SSN"];

/// Case-insensitive acronym allow-list. Entries are stored uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acronyms {
    words: Vec<String>,
}

impl Default for Acronyms {
    fn default() -> Self {
        Self::new(DEFAULT_ACRONYMS)
    }
}

impl Acronyms {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort();
        words.dedup();
        Self { words }
    }

    /// The uppercase acronym `word` spells, ignoring case.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|a| a.eq_ignore_ascii_case(word))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// Split a segment into words on separators and case changes.
///
/// A new word starts at a lower→upper transition (`memberId`). An uppercase
/// run followed by lowercase splits after an allow-listed acronym that ends
/// the run (`FAQids` → `FAQ`, `ids`), and otherwise before the run's last
/// capital (`HSAAccount` → `HSA`, `Account`). Digits stay attached to their
/// word.
pub fn split_words<'a>(segment: &'a str, acronyms: &Acronyms) -> Vec<&'a str> {
    let mut words = Vec::new();
    for part in segment.split(is_separator).filter(|p| !p.is_empty()) {
        let chars: Vec<(usize, char)> = part.char_indices().collect();
        let mut start = 0;
        for i in 1..chars.len() {
            let (idx, c) = chars[i];
            let prev = chars[i - 1].1;
            let next = chars.get(i + 1).map(|&(_, n)| n);
            if (prev.is_lowercase() || prev.is_ascii_digit()) && c.is_uppercase() {
                words.push(&part[start..idx]);
                start = idx;
                continue;
            }
            let run_ends =
                prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase);
            // `FAQs` keeps its plural `s` instead of splitting into `FA` + `Qs`
            let plural_tail = next == Some('s') && i + 2 == chars.len();
            if !run_ends || plural_tail {
                continue;
            }
            let after = chars[i + 1].0;
            let through_c = acronyms.lookup(&part[start..after]).is_some();
            let before_c = acronyms.lookup(&part[start..idx]).is_some();
            if through_c && !before_c {
                words.push(&part[start..after]);
                start = after;
            } else {
                words.push(&part[start..idx]);
                start = idx;
            }
        }
        words.push(&part[start..]);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Label for a single word: acronym, pluralised acronym, or capitalized.
fn label_word(word: &str, acronyms: &Acronyms) -> String {
    if let Some(acronym) = acronyms.lookup(word) {
        return acronym.to_string();
    }
    let plural = word
        .strip_suffix(['s', 'S'])
        .filter(|stem| !stem.is_empty())
        .and_then(|stem| acronyms.lookup(stem));
    if let Some(acronym) = plural {
        return format!("{acronym}s");
    }
    capitalize(word)
}

/// Title-case a path segment, keeping allow-listed acronyms uppercase.
pub fn title_case(segment: &str, acronyms: &Acronyms) -> String {
    split_words(segment, acronyms)
        .into_iter()
        .map(|w| label_word(w, acronyms))
        .collect::<Vec<_>>()
        .join(" ")
}
