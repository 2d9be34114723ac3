use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Find the next occurrence of `search` in `text` at or after `start_pos`.
///
/// Returns the match's byte range in `text`, or None if not found. Both
/// ends of the range are char boundaries of the original string, which
/// matters for case-insensitive matching: lowercasing can change byte
/// lengths ('İ' lowercases to "i\u{307}"), so offsets found in a
/// lowercased copy would mis-index the original.
pub fn find_in_text(
    text: &str,
    search: &str,
    start_pos: usize,
    case_sensitive: bool,
) -> Option<(usize, usize)> {
    if search.is_empty() || start_pos >= text.len() {
        return None;
    }

    if case_sensitive {
        return text
            .get(start_pos..)
            .and_then(|tail| tail.find(search))
            .map(|pos| (start_pos + pos, start_pos + pos + search.len()));
    }

    let needle: Vec<char> = search.chars().flat_map(char::to_lowercase).collect();
    for (start, _) in text.char_indices() {
        if start < start_pos {
            continue;
        }
        if let Some(len) = match_len_at(&text[start..], &needle) {
            return Some((start, start + len));
        }
    }
    None
}

/// Length in bytes of a case-insensitive match of `needle` at the start of
/// `slice`, or None. A match must cover whole characters of `slice`; a
/// needle that ends partway through one character's lowercase expansion
/// does not count.
fn match_len_at(slice: &str, needle: &[char]) -> Option<usize> {
    let mut remaining = needle;
    let mut len = 0;
    for c in slice.chars() {
        for lc in c.to_lowercase() {
            match remaining.split_first() {
                Some((&want, rest)) if want == lc => remaining = rest,
                _ => return None,
            }
        }
        len += c.len_utf8();
        if remaining.is_empty() {
            return Some(len);
        }
    }
    None
}

/// Find next occurrence, wrapping to the start of the text when no match
/// remains after `start_pos`. Returns None only if the text has no match
/// at all.
pub fn find_in_text_wrapping(
    text: &str,
    search: &str,
    start_pos: usize,
    case_sensitive: bool,
) -> Option<(usize, usize)> {
    find_in_text(text, search, start_pos, case_sensitive)
        .or_else(|| find_in_text(text, search, 0, case_sensitive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename("/home/user/test.txt"), "test.txt");
        assert_eq!(extract_filename("/home/user/document.md"), "document.md");
        assert_eq!(extract_filename("relative.md"), "relative.md");
        assert_eq!(extract_filename(""), "Unknown");
    }

    #[test]
    fn test_find_in_text_basic() {
        assert_eq!(find_in_text("hello world", "world", 0, true), Some((6, 11)));
        assert_eq!(find_in_text("hello world", "World", 0, true), None);
        assert_eq!(find_in_text("hello world", "World", 0, false), Some((6, 11)));
    }

    #[test]
    fn test_find_in_text_from_position() {
        let text = "abc abc abc";
        assert_eq!(find_in_text(text, "abc", 1, true), Some((4, 7)));
        assert_eq!(find_in_text(text, "abc", 5, true), Some((8, 11)));
        assert_eq!(find_in_text(text, "abc", 9, true), None);
    }

    #[test]
    fn test_find_in_text_empty_query() {
        assert_eq!(find_in_text("hello", "", 0, true), None);
    }

    #[test]
    fn test_find_wrapping() {
        let text = "abc abc";
        // Past the last match, wraps to the first.
        assert_eq!(find_in_text_wrapping(text, "abc", 5, true), Some((0, 3)));
        // No match anywhere.
        assert_eq!(find_in_text_wrapping(text, "xyz", 0, true), None);
        // Normal forward match still wins.
        assert_eq!(find_in_text_wrapping(text, "abc", 1, true), Some((4, 7)));
    }

    #[test]
    fn test_case_insensitive_offsets_with_length_changing_lowercase() {
        // 'İ' (U+0130) lowercases to two chars ("i\u{307}"), so offsets
        // found in a lowercased copy would be shifted by one byte.
        assert_eq!(find_in_text("İabc", "abc", 0, false), Some((2, 5)));
        assert_eq!(find_in_text("İabc", "ABC", 0, false), Some((2, 5)));
    }

    #[test]
    fn test_case_insensitive_positions_stay_on_char_boundaries() {
        // Chained like the find bar: each search resumes at the previous
        // match's end. Every position must be a valid boundary of the
        // original text.
        let text = "İéé";
        let first = find_in_text_wrapping(text, "é", 0, false);
        assert_eq!(first, Some((2, 4)));
        let second = find_in_text_wrapping(text, "é", 4, false);
        assert_eq!(second, Some((4, 6)));
        // Past the end, wraps back to the first match.
        let third = find_in_text_wrapping(text, "é", 6, false);
        assert_eq!(third, Some((2, 4)));
    }

    #[test]
    fn test_no_partial_character_match() {
        // "i" matches only the first half of 'İ''s lowercase expansion;
        // a match can't split a character of the original text.
        assert_eq!(find_in_text("İx", "i", 0, false), None);
        // The full expansion does match the single character.
        assert_eq!(find_in_text("İx", "i\u{307}", 0, false), Some((0, 2)));
    }

    #[test]
    fn test_start_pos_off_boundary_does_not_panic() {
        // 'é' occupies bytes 0..2; starting inside it skips to the next
        // character instead of slicing mid-char.
        assert_eq!(find_in_text("éab", "ab", 1, false), Some((2, 4)));
        assert_eq!(find_in_text("éab", "ab", 1, true), None);
    }
}
