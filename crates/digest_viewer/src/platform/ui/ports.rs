use std::path::PathBuf;

use digest_core::{DateOptionView, Tab};
use digest_engine::{PagePublisher, PersistError};
use viewer_logging::viewer_debug;

use super::layout::{page_html, PageShell};

/// The fixed set of page elements the controller writes to.
pub trait ViewPorts {
    fn set_content(&mut self, html: &str);
    fn set_date_options(&mut self, options: &[DateOptionView]);
    fn set_last_updated(&mut self, text: &str);
    fn set_active_tab(&mut self, tab: Tab);
    /// Makes the writes since the last flush visible.
    fn flush(&mut self) -> Result<(), PersistError>;
}

/// Ports backed by a static page that is republished on every flush.
pub struct PagePorts {
    shell: PageShell,
    publisher: PagePublisher,
}

impl PagePorts {
    pub fn new(publisher: PagePublisher) -> Self {
        Self {
            shell: PageShell::default(),
            publisher,
        }
    }

    pub fn target(&self) -> PathBuf {
        self.publisher.target()
    }
}

impl ViewPorts for PagePorts {
    fn set_content(&mut self, html: &str) {
        self.shell.content_html = html.to_string();
    }

    fn set_date_options(&mut self, options: &[DateOptionView]) {
        self.shell.date_options = options.to_vec();
    }

    fn set_last_updated(&mut self, text: &str) {
        self.shell.last_updated = text.to_string();
    }

    fn set_active_tab(&mut self, tab: Tab) {
        self.shell.active_tab = tab;
    }

    fn flush(&mut self) -> Result<(), PersistError> {
        let path = self.publisher.publish(&page_html(&self.shell))?;
        viewer_debug!("Published page to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_publishes_current_shell() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut ports = PagePorts::new(PagePublisher::new(temp.path().to_path_buf()));

        ports.set_content("<p>first</p>");
        ports.flush().unwrap();
        ports.set_content("<p>second</p>");
        ports.set_active_tab(Tab::Apps);
        ports.flush().unwrap();

        let page = std::fs::read_to_string(ports.target()).unwrap();
        assert!(page.contains(r#"<main id="content"><p>second</p></main>"#));
        assert!(page.contains(r#"id="tab-apps" class="tab active""#));
        assert!(!page.contains("first"));
    }
}
