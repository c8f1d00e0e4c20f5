/// Truncates to at most `max_chars` characters, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// A window of up to `width_chars` characters centered on the character at
/// `match_byte_pos`. The position may come from a search over a lowercased
/// copy of `text`, so it is treated as approximate and clamped to character
/// boundaries rather than trusted byte-for-byte.
pub fn window_around(text: &str, match_byte_pos: usize, width_chars: usize) -> String {
    let half = width_chars / 2;
    let chars_before = text
        .char_indices()
        .take_while(|(index, _)| *index < match_byte_pos)
        .count();
    let start = chars_before.saturating_sub(half);
    text.chars().skip(start).take(width_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings_whole() {
        assert_eq!(truncate_chars("syllabus", 20), "syllabus");
        assert_eq!(truncate_chars("syllabus", 4), "syll");
    }

    #[test]
    fn truncate_is_char_safe_on_multibyte_text() {
        let text = "réseaux — couche transport";
        let truncated = truncate_chars(text, 7);
        assert_eq!(truncated, "réseaux");
    }

    #[test]
    fn window_is_centered_and_bounded() {
        let text = "a".repeat(100) + "midterm" + &"b".repeat(100);
        let pos = text.find("midterm").unwrap();

        let window = window_around(&text, pos, 20);
        assert!(window.contains("midterm"));
        assert!(window.chars().count() <= 20);
    }

    #[test]
    fn window_clamps_near_the_start() {
        let window = window_around("midterm is soon", 0, 10);
        assert_eq!(window, "midterm is");
    }

    #[test]
    fn window_survives_multibyte_prefixes() {
        let text = "héllo wörld midterm after";
        let pos = text.find("midterm").unwrap();

        let window = window_around(text, pos, 20);
        assert!(window.contains("midterm"));
        assert!(window.chars().count() <= 20);
    }
}
