use std::thread;

use anyhow::{Result, anyhow};

use crate::config::RegistryConfig;
use crate::encode::{page_file_name, page_url_segment};
use crate::fetch::PageClient;
use crate::frontmatter::inject_doc_tags;
use crate::links::discover_page_names;
use crate::output::{reset_docs_dir, write_page};
use crate::transform::{rewrite_overview, rewrite_page};

/// One full mirror run: fetch the wiki home page, discover the linked pages,
/// reset the docs directory, write the overview, then fetch/transform/write
/// every page concurrently. The first failure aborts the run; files already
/// written stay on disk.
pub fn run(config: &RegistryConfig) -> Result<()> {
    println!("Token Registry Content Downloading...");

    let client = PageClient::new()?;
    let raw_wiki_url = config.raw_wiki_url();

    let home_body = client.get_text(&format!("{raw_wiki_url}Home.md"))?;
    let overview = rewrite_overview(&client.get_text(&config.overview_url())?, config);
    let page_names = discover_page_names(&home_body);

    let docs_dir = config.docs_dir();
    reset_docs_dir(&docs_dir)?;
    write_page(&docs_dir, "Overview", &overview)?;

    // Pages are independent: distinct fetch URLs, distinct file names. One
    // scoped worker per page, joined before the run completes.
    thread::scope(|scope| {
        let mut workers = Vec::with_capacity(page_names.len());
        for name in &page_names {
            let client = &client;
            let docs_dir = &docs_dir;
            let raw_wiki_url = &raw_wiki_url;
            workers.push(scope.spawn(move || -> Result<()> {
                let segment = page_url_segment(name);
                let file_stem = page_file_name(name);
                let body = client.get_text(&format!("{raw_wiki_url}{segment}.md"))?;
                let rewritten = rewrite_page(&body, &segment, config);
                let tagged = inject_doc_tags(&rewritten, name, config);
                write_page(docs_dir, &file_stem, &tagged)?;
                Ok(())
            }));
        }
        for worker in workers {
            worker
                .join()
                .map_err(|_| anyhow!("page worker panicked"))??;
        }
        Ok::<_, anyhow::Error>(())
    })?;

    println!("Token Registry Content Downloaded");
    Ok(())
}
