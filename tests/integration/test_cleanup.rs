//! Integration tests for the age-based cleanup command

#[cfg(test)]
mod tests {
    use crate::fixtures::FakeBackend;
    use recview::controllers::dashboard::INVALID_DAYS_MESSAGE;
    use recview::page::{ContainerId, Control};
    use recview::{Dashboard, Error, Page};
    use std::sync::Arc;

    fn page_with_days(days: &str) -> Page {
        let mut page = Page::new();
        page.set_days_input(days);
        page
    }

    #[test]
    fn test_invalid_inputs_never_reach_the_network() {
        let backend = Arc::new(FakeBackend::new());
        let dashboard = Dashboard::new(backend.clone());

        for input in ["-1", "", "abc", "1.5", "  ", "+3", "4294967296"] {
            let mut page = page_with_days(input);
            let err = dashboard.send_cleanup(&mut page).unwrap_err();

            assert!(matches!(err, Error::InvalidInput(_)), "input {input:?}");
            assert_eq!(page.text(ContainerId::CleanupStatus), Some(INVALID_DAYS_MESSAGE));
            assert!(!page.is_disabled(Control::DeleteButton));
        }
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_success_shows_plain_text_reply() {
        let backend = Arc::new(FakeBackend::new());
        backend.push_delete(Ok("3 Files Deleted".to_string()));
        let dashboard = Dashboard::new(backend.clone());
        let mut page = page_with_days(" 7 ");

        let body = dashboard.send_cleanup(&mut page).unwrap();

        assert_eq!(body, "3 Files Deleted");
        assert_eq!(backend.calls(), vec!["delete:7"]);
        assert_eq!(page.text(ContainerId::CleanupStatus), Some("Status: 3 Files Deleted"));
        assert!(!page.is_disabled(Control::DeleteButton));
    }

    #[test]
    fn test_zero_days_is_accepted() {
        let backend = Arc::new(FakeBackend::new());
        backend.push_delete(Ok("0 Files Deleted".to_string()));
        let dashboard = Dashboard::new(backend.clone());
        let mut page = page_with_days("0");

        dashboard.send_cleanup(&mut page).unwrap();

        assert_eq!(backend.calls(), vec!["delete:0"]);
    }

    #[test]
    fn test_api_error_shows_status_and_body() {
        let backend = Arc::new(FakeBackend::new());
        backend.push_delete(Err(Error::Api {
            status: 500,
            message: "{\"detail\":\"Error during deletion: disk busy\"}".to_string(),
        }));
        let dashboard = Dashboard::new(backend);
        let mut page = page_with_days("3");

        dashboard.send_cleanup(&mut page).unwrap_err();

        assert_eq!(
            page.text(ContainerId::CleanupStatus),
            Some("Status: Error (500) - {\"detail\":\"Error during deletion: disk busy\"}")
        );
        assert!(!page.is_disabled(Control::DeleteButton));
    }

    #[test]
    fn test_transport_error_shows_network_error() {
        let backend = Arc::new(FakeBackend::new());
        backend.push_delete(Err(Error::Transport("connection reset".to_string())));
        let dashboard = Dashboard::new(backend);
        let mut page = page_with_days("3");

        dashboard.send_cleanup(&mut page).unwrap_err();

        assert_eq!(
            page.text(ContainerId::CleanupStatus),
            Some("Status: Network Error - connection reset")
        );
        assert!(!page.is_disabled(Control::DeleteButton));
    }

    #[test]
    fn test_disabled_control_refuses_duplicate_submission() {
        let backend = Arc::new(FakeBackend::new());
        let dashboard = Dashboard::new(backend.clone());
        let mut page = page_with_days("3");
        page.set_disabled(Control::DeleteButton, true);
        page.set_text(ContainerId::CleanupStatus, "Deletion Status: Deleting files older than 3 days...");

        let err = dashboard.send_cleanup(&mut page).unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(backend.calls().is_empty());
        assert_eq!(
            page.text(ContainerId::CleanupStatus),
            Some("Deletion Status: Deleting files older than 3 days...")
        );
    }
}
