use crate::config::RegistryConfig;

/// Pages pinned to an explicit sidebar slot; everything else is ordered
/// alphabetically by the site generator. Keyed on the raw wiki page name.
const SIDEBAR_POSITIONS: &[(&str, &str)] = &[
    (
        "How to prepare an entry for the registry (NA policy script)",
        "sidebar_position: 2\n",
    ),
    (
        "How to prepare an entry for the registry (Plutus script)",
        "sidebar_position: 3\n",
    ),
    (
        "How to submit an entry to the registry",
        "sidebar_position: 4\n",
    ),
];

pub fn sidebar_position(raw_name: &str) -> &'static str {
    for (name, position) in SIDEBAR_POSITIONS {
        if *name == raw_name {
            return position;
        }
    }
    ""
}

/// Prepend the Docusaurus front-matter block: sidebar label (hyphens in the
/// raw name become spaces), optional edit URL, title, and the fixed sidebar
/// position when the page has one. A pre-existing leading `---` delimiter is
/// stripped so the block is not doubled.
pub fn inject_doc_tags(content: &str, raw_name: &str, config: &RegistryConfig) -> String {
    let body = content.strip_prefix("---").unwrap_or(content);
    let label = raw_name.replace('-', " ");
    let edit_line = match config.custom_edit_url() {
        Some(url) => format!("custom_edit_url: {url}\n"),
        None => String::new(),
    };
    format!(
        "--- \nsidebar_label: {label}\n{edit_line}title: {raw_name}\n{}--- \n{body}",
        sidebar_position(raw_name)
    )
}
