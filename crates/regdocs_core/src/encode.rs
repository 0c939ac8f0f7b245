use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except alphanumerics and `- _ . ! ~ * ' ( )` is
/// percent-encoded, matching the coverage GitHub's raw wiki host expects
/// for page-name path segments.
const PAGE_NAME_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// URL-safe path segment for fetching a page: encoded spaces become hyphens
/// (the raw wiki host names files that way) and parentheses are encoded
/// explicitly since the base set leaves them literal.
pub fn page_url_segment(name: &str) -> String {
    utf8_percent_encode(name, PAGE_NAME_SET)
        .to_string()
        .replace("%20", "-")
        .replace('(', "%28")
        .replace(')', "%29")
}

/// Filesystem-safe file stem for writing a page: same encoding, but
/// parentheses and apostrophes are dropped outright to keep names simple.
pub fn page_file_name(name: &str) -> String {
    utf8_percent_encode(name, PAGE_NAME_SET)
        .to_string()
        .replace("%20", "-")
        .replace('(', "")
        .replace(')', "")
        .replace('\'', "")
}

#[cfg(test)]
mod tests {
    use super::{page_file_name, page_url_segment};

    #[test]
    fn url_segment_hyphenates_spaces_and_encodes_parens() {
        assert_eq!(
            page_url_segment("How to prepare an entry for the registry (NA policy script)"),
            "How-to-prepare-an-entry-for-the-registry-%28NA-policy-script%29"
        );
    }

    #[test]
    fn url_segment_never_contains_bare_space_or_paren() {
        for input in ["a b (c)", "(((", " ) ", "plain", "x (y) z's ?"] {
            let segment = page_url_segment(input);
            assert!(!segment.contains(' '), "space in {segment}");
            assert!(!segment.contains('('), "paren in {segment}");
            assert!(!segment.contains(')'), "paren in {segment}");
        }
    }

    #[test]
    fn file_name_drops_parens_and_apostrophes() {
        assert_eq!(
            page_file_name("How to prepare an entry for the registry (NA policy script)"),
            "How-to-prepare-an-entry-for-the-registry-NA-policy-script"
        );
        assert_eq!(page_file_name("What's new?"), "Whats-new%3F");
    }

    #[test]
    fn file_name_never_contains_encoded_parens_or_apostrophe() {
        for input in ["a (b) c", "it's (fine)", "(')", "x ' y"] {
            let stem = page_file_name(input);
            assert!(!stem.contains("%28"), "encoded paren in {stem}");
            assert!(!stem.contains("%29"), "encoded paren in {stem}");
            assert!(!stem.contains('\''), "apostrophe in {stem}");
        }
    }

    #[test]
    fn non_ascii_names_are_percent_encoded() {
        assert_eq!(page_url_segment("Café"), "Caf%C3%A9");
        assert_eq!(page_file_name("Café"), "Caf%C3%A9");
    }

    #[test]
    fn question_mark_is_encoded_in_file_names() {
        assert_eq!(page_file_name("FAQ?"), "FAQ%3F");
    }
}
