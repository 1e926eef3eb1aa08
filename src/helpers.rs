use unicode_normalization::UnicodeNormalization;

/// Normalize ligatures: "scientiﬁc" "ﬁelds" "ﬁnal"
pub fn unicode_normalization_form_kc(input: &str) -> String {
    input.nfkc().collect::<String>()
}

/// Transfer the letter case char-wise from source to target string.
pub fn transfer_case(source: &str, target: &str) -> String {
    // source = "HeLLo WoRLd!";
    // target = "rustacean community!";
    // result = "RuSTacEaN community!";

    let mut result = String::new();

    use itertools::EitherOrBoth;
    use itertools::Itertools;

    // the last observed source case carries over to exceeding target chars
    let mut last_uppercase = false;

    for pair in source.chars().zip_longest(target.chars()) {
        match pair {
            EitherOrBoth::Both(s, t) => {
                if s.is_uppercase() {
                    last_uppercase = true;
                    result.push_str(&t.to_string().to_uppercase());
                } else if s.is_lowercase() {
                    // dictionary words are already lowercased
                    last_uppercase = false;
                    result.push(t);
                } else {
                    result.push(t);
                }
            }
            // only the source has characters left, nothing to case
            EitherOrBoth::Left(_) => (),
            // only the target has characters left
            EitherOrBoth::Right(t) => {
                if last_uppercase {
                    result.push_str(&t.to_string().to_uppercase());
                } else {
                    result.push(t);
                }
            }
        }
    }
    result
}

/// Parse a string into words, splitting at non-alphanumeric characters, except for underscore and apostrophes.
pub fn parse_words(text: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    let text_normalized = text.to_lowercase();
    let mut start = false;
    let mut start_pos = 0;

    for char in text_normalized.char_indices() {
        start = match char.1 {
            //start of term
            token if token.is_alphanumeric() => {
                if !start {
                    start_pos = char.0;
                }
                true
            }

            // allows underscore and apostrophes as part of the word
            '_' | '\'' | '’' => true,

            //end of term
            _ => {
                if start {
                    terms.push(text_normalized[start_pos..char.0].to_string());
                }
                false
            }
        };
    }

    if start {
        terms.push(text_normalized[start_pos..text_normalized.len()].to_string());
    }

    terms
}

pub(crate) fn len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn remove(s: &str, index: usize) -> String {
    s.chars()
        .enumerate()
        .filter(|(ii, _)| ii != &index)
        .map(|(_, ch)| ch)
        .collect()
}

pub(crate) fn slice(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end - start).collect()
}

pub(crate) fn suffix(s: &str, start: usize) -> String {
    s.chars().skip(start).collect::<String>()
}

pub(crate) fn at(s: &str, i: isize) -> Option<char> {
    if i < 0 || i >= s.len() as isize {
        return None;
    }

    s.chars().nth(i as usize)
}
