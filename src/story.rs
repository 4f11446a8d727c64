//! Story segmentation helpers
//!
//! Turns completion output into the ordered list of panel descriptions.

/// Split completion text into panel segments.
///
/// Lines are separated on `\n`, trimmed, and blank lines dropped. Order and
/// duplicates are preserved.
pub fn split_segments(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_segments_basic() {
        let segments = split_segments("A hero rises.\nThe hero falls.\nThe hero returns.");
        assert_eq!(
            segments,
            vec!["A hero rises.", "The hero falls.", "The hero returns."]
        );
    }

    #[test]
    fn test_split_segments_drops_blank_and_trims() {
        let text = "\n\n  1. The village sleeps.  \r\n\t\n   \n2. A dragon lands.\r\n\n";
        let segments = split_segments(text);
        assert_eq!(segments, vec!["1. The village sleeps.", "2. A dragon lands."]);
    }

    #[test]
    fn test_split_segments_keeps_duplicates_in_order() {
        let segments = split_segments("Boom.\nSilence.\nBoom.");
        assert_eq!(segments, vec!["Boom.", "Silence.", "Boom."]);
    }

    #[test]
    fn test_split_segments_empty_input() {
        assert!(split_segments("").is_empty());
        assert!(split_segments(" \n\t\n \r\n").is_empty());
    }

    #[test]
    fn test_split_segments_entries_are_trimmed_and_non_blank() {
        let inputs = [
            "one",
            "  leading",
            "trailing  \n\n",
            "\u{a0}nbsp\u{a0}\nplain",
            "a\n \n b \n\tc\t",
        ];
        for input in inputs {
            for segment in split_segments(input) {
                assert!(!segment.trim().is_empty(), "blank segment from {:?}", input);
                assert_eq!(segment, segment.trim(), "untrimmed segment from {:?}", input);
            }
        }
    }
}
