//! Sentence boundary detection.
//!
//! A sentence ends at a run of `.`, `?` or `!` (plus any closing quotes or
//! brackets) that is followed by whitespace and an uppercase letter, a digit,
//! an opening quote, or the end of the text. Known abbreviations never end a
//! sentence; a blank line always does.

/// Splits prose into sentences.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    /// Lowercase abbreviations, without their trailing period.
    abbreviations: Vec<&'static str>,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’' | '»')
}

fn is_opener(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '“' | '‘' | '«')
}

impl SentenceSplitter {
    pub fn new() -> Self {
        Self {
            abbreviations: vec![
                "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd",
                "co", "corp", "gen", "col", "lt", "sgt", "capt", "rev", "hon", "mt", "ft",
                "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
                "dec", "i.e", "e.g", "cf", "al", "vol", "no", "fig", "pp", "ph.d", "m.d",
            ],
        }
    }

    /// Split `text` into trimmed sentences with internal whitespace collapsed.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut sentences = Vec::new();
        let mut current = String::new();

        let mut i = 0;
        while i < len {
            let c = chars[i];

            if c == '\n' && blank_line_ahead(&chars, i + 1) {
                flush(&mut current, &mut sentences);
                i += 1;
                continue;
            }

            current.push(c);

            if is_terminal(c) {
                // keep "?!", "..." and closing quotes with the sentence
                while i + 1 < len && (is_terminal(chars[i + 1]) || is_closer(chars[i + 1])) {
                    i += 1;
                    current.push(chars[i]);
                }
                let is_end = boundary_follows(&chars, i + 1);
                let is_abbrev = c == '.' && self.is_abbreviation(&current);
                if is_end && !is_abbrev {
                    flush(&mut current, &mut sentences);
                }
            }
            i += 1;
        }

        flush(&mut current, &mut sentences);
        sentences
    }

    fn is_abbreviation(&self, text: &str) -> bool {
        let text = text.trim_end_matches(|c: char| is_terminal(c) || is_closer(c));
        let last_word = text.split_whitespace().last().unwrap_or("");
        let lower = last_word
            .trim_start_matches(is_opener)
            .to_lowercase();
        self.abbreviations.contains(&lower.as_str())
    }
}

/// True when only spaces separate position `from` from another newline.
fn blank_line_ahead(chars: &[char], from: usize) -> bool {
    for &c in &chars[from.min(chars.len())..] {
        match c {
            '\n' => return true,
            ' ' | '\t' | '\r' => continue,
            _ => return false,
        }
    }
    false
}

fn boundary_follows(chars: &[char], from: usize) -> bool {
    let Some(&next) = chars.get(from) else {
        return true;
    };
    if !next.is_whitespace() {
        return false;
    }
    match chars[from..].iter().find(|c| !c.is_whitespace()) {
        None => true,
        Some(&c) => c.is_uppercase() || c.is_ascii_digit() || is_opener(c),
    }
}

fn flush(current: &mut String, sentences: &mut Vec<String>) {
    let collapsed = current.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        sentences.push(collapsed);
    }
    current.clear();
}
