use crate::models::GenerationOptions;

#[derive(Debug, Clone, Copy)]
pub struct ChunkingConfig {
    pub max_chars: usize,
}

impl From<&GenerationOptions> for ChunkingConfig {
    fn from(value: &GenerationOptions) -> Self {
        Self {
            max_chars: value.chunk_size,
        }
    }
}

/// Splits `text` into trimmed, non-empty chunks of at most `chunk_size` characters.
///
/// Each window is cut at its last whitespace character. A window without any
/// whitespace is cut hard at `chunk_size`, possibly mid-word. Sizes count
/// `char`s, so a cut never lands inside a UTF-8 sequence. A size of zero is
/// treated as one.
pub fn split_into_chunks(text: &str, chunk_size: usize) -> Vec<String> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::new();
    let mut remaining = text.trim();

    while remaining.chars().nth(chunk_size).is_some() {
        let window_end = char_boundary(remaining, chunk_size);
        let window = &remaining[..window_end];

        // `remaining` is trimmed, so a whitespace match is never at offset 0.
        let cut = window
            .rfind(char::is_whitespace)
            .filter(|offset| *offset > 0)
            .unwrap_or(window_end);

        let chunk = remaining[..cut].trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
        remaining = remaining[cut..].trim();
    }

    if !remaining.is_empty() {
        chunks.push(remaining.to_string());
    }

    chunks
}

pub fn chunk_text(text: &str, config: ChunkingConfig) -> Vec<String> {
    split_into_chunks(text, config.max_chars)
}

fn char_boundary(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_whitespace(text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn empty_text_produces_no_chunks() {
        assert!(split_into_chunks("", 10).is_empty());
        assert!(split_into_chunks("   \n\t ", 10).is_empty());
    }

    #[test]
    fn short_text_is_a_single_trimmed_chunk() {
        let chunks = split_into_chunks("  hello world \n", 1_500);
        assert_eq!(chunks, vec!["hello world".to_string()]);
    }

    #[test]
    fn four_thousand_chars_at_fifteen_hundred_yield_three_chunks() {
        let text = "abcd ".repeat(800);
        assert_eq!(text.chars().count(), 4_000);

        let chunks = split_into_chunks(&text, 1_500);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|chunk| chunk.chars().count() <= 1_500));
    }

    #[test]
    fn cuts_happen_on_whitespace() {
        let chunks = split_into_chunks("alpha beta gamma delta", 12);
        assert_eq!(chunks, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn newlines_and_tabs_count_as_cut_points() {
        let chunks = split_into_chunks("alpha\nbeta\tgamma", 11);
        assert_eq!(chunks, vec!["alpha\nbeta", "gamma"]);
    }

    #[test]
    fn window_without_whitespace_is_hard_cut_at_size() {
        let chunks = split_into_chunks("abcdefghijklmnop qr", 5);
        assert_eq!(chunks[0], "abcde");
        assert_eq!(chunks[1], "fghij");
        assert_eq!(chunks[2], "klmno");
        assert_eq!(chunks[3], "p qr");
    }

    #[test]
    fn chunks_cover_all_non_whitespace_content_in_order() {
        let text = "The pump  shall deliver 40 bar.\n\nValves\tare checked weekly; \
                    supercalifragilisticexpialidocious words get split too.";

        for size in [1, 3, 7, 16, 50, 500] {
            let chunks = split_into_chunks(text, size);
            assert_eq!(non_whitespace(&chunks.concat()), non_whitespace(text));
            assert!(chunks.iter().all(|chunk| !chunk.is_empty()));
            assert!(chunks.iter().all(|chunk| chunk.trim() == chunk));
            assert!(chunks.iter().all(|chunk| chunk.chars().count() <= size));
        }
    }

    #[test]
    fn multibyte_characters_are_never_split() {
        let text = "ünïcödé wörds ärë fïnë ✓✓✓✓✓✓";
        let chunks = split_into_chunks(text, 4);
        assert!(chunks.iter().all(|chunk| chunk.chars().count() <= 4));
        assert_eq!(non_whitespace(&chunks.concat()), non_whitespace(text));
    }

    #[test]
    fn text_of_exactly_chunk_size_is_not_split() {
        let chunks = split_into_chunks("abcde", 5);
        assert_eq!(chunks, vec!["abcde"]);

        let chunks = split_into_chunks("abcdef", 5);
        assert_eq!(chunks, vec!["abcde", "f"]);
    }

    #[test]
    fn long_documents_split_into_bounded_chunks() {
        let text = "lorem ipsum dolor ".repeat(100_000);
        let chunks = split_into_chunks(&text, 1_500);
        assert!(chunks.len() > 1_000);
        assert!(chunks.iter().all(|chunk| chunk.chars().count() <= 1_500));
    }

    #[test]
    fn zero_size_still_terminates() {
        let chunks = split_into_chunks("ab c", 0);
        assert_eq!(chunks, vec!["a", "b", "c"]);
    }

    #[test]
    fn config_follows_generation_options() {
        let options = GenerationOptions {
            chunk_size: 6,
            ..GenerationOptions::default()
        };
        let chunks = chunk_text("one two three", ChunkingConfig::from(&options));
        assert_eq!(chunks, vec!["one", "two", "three"]);
    }
}
