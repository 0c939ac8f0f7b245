use std::collections::HashSet;

/// Extract the unique set of page names referenced from the wiki home page
/// via `[[Name]]` link markup, in first-occurrence order. A link must close
/// on the line it opens; an unclosed `[[` never swallows later lines.
pub fn discover_page_names(home_body: &str) -> Vec<String> {
    let chars = home_body.chars().collect::<Vec<_>>();
    let mut names = Vec::new();
    let mut seen = HashSet::new();
    let mut index = 0usize;
    while index < chars.len() {
        if index + 1 < chars.len() && chars[index] == '[' && chars[index + 1] == '[' {
            let mut cursor = index + 2;
            let mut found = None::<usize>;
            while cursor + 1 < chars.len() && chars[cursor] != '\n' {
                if chars[cursor] == ']' && chars[cursor + 1] == ']' {
                    found = Some(cursor);
                    break;
                }
                cursor += 1;
            }
            if let Some(end) = found {
                let inner = chars[index + 2..end].iter().collect::<String>();
                if !inner.trim().is_empty() && seen.insert(inner.clone()) {
                    names.push(inner);
                }
                index = end + 2;
                continue;
            }
        }
        index += 1;
    }
    names
}
