use crate::config::RegistryConfig;

/// Known-problematic link targets in the upstream wiki, applied to every
/// fetched page. The parenthesised NA-policy-script name breaks Docusaurus
/// link resolution, so links are pointed at the parenthesis-free file name
/// the writer actually produces. Kept as a table so drift from upstream
/// content stays visible in one place.
pub const LINK_REWRITES: &[(&str, &str)] = &[(
    "How-to-prepare-an-entry-for-the-registry-(NA-policy-script)",
    "How-to-prepare-an-entry-for-the-registry-NA-policy-script",
)];

/// Everything from this heading onward is dropped from the overview page.
pub const OVERVIEW_SECTION_CUTOFF: &str = "## Step-by-Step";

const OVERVIEW_TITLE_HEADING: &str = "# cardano-token-registry";

const OVERVIEW_HEADER: &str = "--- \nid: cardano-token-registry \ntitle: Cardano Token Registry \nsidebar_label: Overview \ndescription: The Cardano Token Registry provides a means to register off-chain token metadata that can map to on-chain identifiers. \nimage: /img/og/og-developer-portal.png \nsidebar_position: 1 \n--- \nThe [Cardano Token Registry](https://github.com/cardano-foundation/cardano-token-registry) provides a means to register off-chain token metadata to map to on-chain identifiers (typically hashes representing asset IDs, output locking scripts, or token forging policies).\n\n";

/// Rewrite a generic wiki page: apply the link-rewrite table, then append
/// the provenance footer linking back to the canonical wiki page.
/// `encoded_name` is the URL path segment the page was fetched under.
pub fn rewrite_page(content: &str, encoded_name: &str, config: &RegistryConfig) -> String {
    let mut output = content.to_string();
    for (from, to) in LINK_REWRITES {
        output = output.replace(from, to);
    }
    let wiki_url = config.wiki_url();
    output.push_str(&format!(
        "\n## Token Registry Information  \nThis page was generated automatically from: [{wiki_url}]({wiki_url}/{encoded_name})."
    ));
    output
}

/// Rewrite the overview (README) page: prepend the site metadata header,
/// drop the repository title heading, truncate at the step-by-step section,
/// absolutize the two terms-of-use links and `(mappings` targets, and append
/// the README provenance footer. Hard-coded to the known upstream shape.
pub fn rewrite_overview(content: &str, config: &RegistryConfig) -> String {
    let mut output = format!("{OVERVIEW_HEADER}{content}");
    output = output.replace(OVERVIEW_TITLE_HEADING, "");
    if let Some(index) = output.find(OVERVIEW_SECTION_CUTOFF) {
        output.truncate(index);
    }

    let repo_url = config.repo_url();
    output = output.replace(
        "Registry_Terms_of_Use.md",
        &format!("{repo_url}Registry_Terms_of_Use.md"),
    );
    output = output.replace(
        "API_Terms_of_Use.md",
        &format!("{repo_url}API_Terms_of_Use.md"),
    );
    output = output.replace("(mappings", &format!("({repo_url}mappings"));

    output.push_str(&format!(
        "  \n## Token Registry Information  \nThis page was generated automatically from: [{repo_url}]({repo_url}/README.md)."
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::{rewrite_overview, rewrite_page};
    use crate::config::RegistryConfig;

    fn config() -> RegistryConfig {
        let mut config = RegistryConfig::default();
        config.registry.wiki_url = Some("https://example.org/wiki".to_string());
        config.registry.repo_url = Some("https://example.org/blob/master/".to_string());
        config
    }

    #[test]
    fn page_rewrite_sanitizes_known_parenthesised_link() {
        let body = "See [policy](How-to-prepare-an-entry-for-the-registry-(NA-policy-script)).";
        let output = rewrite_page(body, "FAQ", &config());
        assert!(output.contains("How-to-prepare-an-entry-for-the-registry-NA-policy-script"));
        assert!(!output.contains("(NA-policy-script)"));
    }

    #[test]
    fn page_rewrite_appends_provenance_footer() {
        let output = rewrite_page("Body.", "Some-Page", &config());
        assert!(output.ends_with(
            "\n## Token Registry Information  \nThis page was generated automatically from: [https://example.org/wiki](https://example.org/wiki/Some-Page)."
        ));
        assert!(output.starts_with("Body."));
    }

    #[test]
    fn overview_drops_title_heading_and_step_by_step_tail() {
        let body = "# cardano-token-registry\n\nIntro text.\n\n## Step-by-Step\n1. do things\n";
        let output = rewrite_overview(body, &config());
        assert!(!output.contains("# cardano-token-registry\n"));
        assert!(!output.contains("## Step-by-Step"));
        assert!(!output.contains("do things"));
        assert!(output.contains("Intro text."));
    }

    #[test]
    fn overview_absolutizes_known_relative_links() {
        let body = "See [terms](Registry_Terms_of_Use.md) and [api](API_Terms_of_Use.md) and [m](mappings/foo.json).";
        let output = rewrite_overview(body, &config());
        assert!(output.contains("(https://example.org/blob/master/Registry_Terms_of_Use.md)"));
        assert!(output.contains("(https://example.org/blob/master/API_Terms_of_Use.md)"));
        assert!(output.contains("(https://example.org/blob/master/mappings/foo.json)"));
    }

    #[test]
    fn overview_prepends_metadata_header_and_appends_readme_footer() {
        let output = rewrite_overview("Intro.", &config());
        assert!(output.starts_with("--- \nid: cardano-token-registry \n"));
        assert!(output.contains("sidebar_label: Overview"));
        assert!(output.contains("sidebar_position: 1"));
        assert!(output.ends_with(
            "This page was generated automatically from: [https://example.org/blob/master/](https://example.org/blob/master//README.md)."
        ));
    }
}
