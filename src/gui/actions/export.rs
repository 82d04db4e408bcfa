// src/gui/actions/export.rs
use crate::{error::ExportError, file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_dir first (mutates app) before any &app borrows
    if app.state.gui.out_dir_dirty {
        app.state.options.export.set_dir(&app.state.gui.out_dir_text);
        logf!(
            "Export: Out dir set → {}",
            app.state.options.export.out_dir().display()
        );
        app.state.gui.out_dir_dirty = false;
    }

    let books = app.catalog.books();
    logf!("Export: Begin rows={}", books.len());

    let status_msg = match file::write_export_today(&app.state.options.export, books) {
        Ok(path) => {
            logf!("Export: OK path={}", path.display());
            format!("Exported {} books to {}", books.len(), path.display())
        }
        Err(ExportError::NoData) => {
            logd!("Export: Clicked, but there's nothing to export");
            app.notice = Some(ExportError::NoData.to_string());
            s!("Nothing to export")
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
