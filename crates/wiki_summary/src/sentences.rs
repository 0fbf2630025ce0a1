use wiki_core::SENTENCE_COUNT;

fn ends_sentence(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text at whitespace that directly follows `.`, `!` or `?`.
///
/// The punctuation stays with the sentence it closes and the whole
/// whitespace run is dropped. Abbreviations, decimals and quotes are not
/// treated specially. Blank pieces are discarded.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && prev.is_some_and(ends_sentence) {
            parts.push(&text[start..i]);
            let mut end = i + c.len_utf8();
            while let Some(&(j, w)) = chars.peek() {
                if !w.is_whitespace() {
                    break;
                }
                end = j + w.len_utf8();
                chars.next();
            }
            start = end;
        }
        prev = Some(c);
    }
    parts.push(&text[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Reshape free text into exactly five sentences: extra sentences are
/// dropped, missing ones are filled by repeating the last. Returns `None`
/// when the text holds no sentence at all.
pub fn normalize_to_five(text: &str) -> Option<[String; SENTENCE_COUNT]> {
    let mut parts = split_sentences(text);
    let last = *parts.last()?;
    parts.truncate(SENTENCE_COUNT);
    parts.resize(SENTENCE_COUNT, last);
    Some(std::array::from_fn(|i| parts[i].to_string()))
}
