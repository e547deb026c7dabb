use digest_core::AppViewModel;
use digest_engine::PersistError;

use super::ports::ViewPorts;

/// Pushes a whole view model into the ports. Every region is replaced on
/// every render; nothing is patched incrementally.
pub fn render(view: &AppViewModel, ports: &mut dyn ViewPorts) -> Result<(), PersistError> {
    ports.set_active_tab(view.active_tab);
    ports.set_date_options(&view.date_options);
    ports.set_last_updated(&view.last_updated);
    ports.set_content(&view.content_html);
    ports.flush()
}
