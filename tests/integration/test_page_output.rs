//! Integration tests for writing rendered pages

#[cfg(test)]
mod tests {
    use recview::cli::output::PageFileSink;
    use recview::io::page::write_page;
    use recview::page::ContainerId;
    use recview::runtime::FrameSink;
    use recview::Page;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_page_replaces_previous_frame() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("dashboard.html");
        let mut page = Page::new();

        page.set_text(ContainerId::ServerUptime, "1 s");
        write_page(&target, &page).unwrap();
        page.set_text(ContainerId::ServerUptime, "2 s");
        write_page(&target, &page).unwrap();

        let html = fs::read_to_string(&target).unwrap();
        assert!(html.contains("<div id=\"serverUptime\">2 s</div>"));
        assert!(!html.contains("1 s"));
        // Only the page itself remains; no staging file left behind.
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_file_sink_writes_document() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("page.html");
        let mut sink = PageFileSink::new(&target);

        sink.emit(&Page::new()).unwrap();

        let html = fs::read_to_string(&target).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"fileList\""));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("nope/page.html");
        assert!(write_page(&target, &Page::new()).is_err());
    }
}
