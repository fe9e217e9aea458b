/// Default per-message ceiling, in characters.
pub const DEFAULT_MAX_LENGTH: usize = telegram::MAX_MESSAGE_LENGTH;

/// Split a message into chunks of at most `max_length` characters.
///
/// Lines are packed greedily and never broken, so `chunks.join("\n")` always
/// reproduces `text`. A single line longer than `max_length` is emitted as
/// its own oversized chunk.
pub fn split_message(text: &str, max_length: usize) -> Vec<String> {
    if text.chars().count() <= max_length {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current: Option<(String, usize)> = None;

    for line in text.split('\n') {
        let line_len = line.chars().count();
        current = Some(match current.take() {
            None => (line.to_string(), line_len),
            Some((chunk, len)) if len + 1 + line_len > max_length => {
                chunks.push(chunk);
                (line.to_string(), line_len)
            }
            Some((mut chunk, len)) => {
                chunk.push('\n');
                chunk.push_str(line);
                (chunk, len + 1 + line_len)
            }
        });
    }

    if let Some((chunk, _)) = current {
        chunks.push(chunk);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(split_message("hello\nworld", 4096), vec!["hello\nworld"]);
        assert_eq!(split_message("", 10), vec![""]);
    }

    #[test]
    fn test_packs_lines_greedily() {
        let chunks = split_message("aaaa\nbbbb\ncccc", 9);
        assert_eq!(chunks, vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn test_exact_fit_stays_together() {
        // 4 + 1 + 4 = 9
        assert_eq!(split_message("aaaa\nbbbb\nc", 9), vec!["aaaa\nbbbb", "c"]);
    }

    #[test]
    fn test_long_line_is_not_broken() {
        let chunks = split_message("ab\nxxxxxxxxxxxx\ncd", 5);
        assert_eq!(chunks, vec!["ab", "xxxxxxxxxxxx", "cd"]);
    }

    #[test]
    fn test_blank_lines_survive_chunk_boundaries() {
        let text = "aaaa\n\n\nbbbb\n\ncccc";
        let chunks = split_message(text, 6);
        assert!(chunks.iter().all(|c| c.chars().count() <= 6));
        assert_eq!(chunks.join("\n"), text);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 5 chars, 10 bytes
        assert_eq!(split_message("ééééé", 5), vec!["ééééé"]);
    }
}
