//! Property-based tests for the locator parser.

#[cfg(test)]
mod proptest_tests {
    use crate::locator::{parse_line, parse_lines};
    use proptest::prelude::*;

    proptest! {
        /// Property: a line starting with an http(s) URL yields exactly that URL
        #[test]
        fn leading_url_is_extracted(
            scheme in "https?",
            host in "[a-z]{1,12}\\.(com|org|io)",
            path in "(/[A-Za-z0-9_.-]{1,10}){0,3}",
            tail in "([ \t][^\n]{0,20})?",
        ) {
            let url = format!("{}://{}{}", scheme, host, path);
            let descriptor = parse_line(&format!("{}{}", url, tail));
            prop_assert_eq!(descriptor.url, Some(url));
            prop_assert!(descriptor.error.is_none());
        }

        /// Property: lines not starting with http(s):// never yield a URL
        #[test]
        fn other_lines_never_yield_url(line in "[a-gi-zA-GI-Z0-9#:/][^\n]{0,40}") {
            let descriptor = parse_line(&line);
            prop_assert!(descriptor.url.is_none());
            prop_assert!(descriptor.error.is_some());
        }

        /// Property: exactly one descriptor per line, blank lines included
        #[test]
        fn one_descriptor_per_line(lines in prop::collection::vec("[^\n\r]{0,30}", 0..20)) {
            let content: String = lines.iter().map(|l| format!("{}\n", l)).collect();
            let descriptors = parse_lines(&content);
            prop_assert_eq!(descriptors.len(), lines.len());
            for (line, descriptor) in lines.iter().zip(&descriptors) {
                if line.trim().is_empty() {
                    prop_assert!(descriptor.url.is_none());
                }
            }
        }
    }
}
