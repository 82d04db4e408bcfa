// src/runner.rs
//
// Headless driver: pull a fixed number of pages through a Catalog, the way the
// CLI does. The GUI drives the same controller one ticket at a time instead.

use crate::{
    controller::{Catalog, LoadOutcome},
    core::net::CatalogSource,
    error::LoadError,
    progress::Progress,
    render::RenderTarget,
};

/// Reset-load page 0, then incremental loads until `pages` pages are in or the
/// controller's guard stops early (short page, small dataset).
/// Returns the number of pages actually merged.
pub fn load_pages<R, S>(
    catalog: &mut Catalog<R>,
    source: &S,
    pages: u32,
    mut progress: Option<&mut dyn Progress>,
) -> Result<u32, LoadError>
where
    R: RenderTarget,
    S: CatalogSource + ?Sized,
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages as usize);
    }

    let mut merged = 0u32;
    let result = loop {
        if merged >= pages {
            break Ok(merged);
        }
        let Some(ticket) = catalog.begin_load(merged == 0) else {
            if let Some(p) = progress.as_deref_mut() {
                p.log("No more books to load");
            }
            break Ok(merged);
        };
        let page = ticket.page();

        match catalog.run_ticket(ticket, source) {
            LoadOutcome::Failed(e) => break Err(e),
            LoadOutcome::Stale => break Ok(merged),
            ok => {
                merged += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(page, catalog.books().len());
                }
                if ok.added() == 0 {
                    break Ok(merged);
                }
            }
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}
