use crate::Tab;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub active_tab: Tab,
    pub date_options: Vec<DateOptionView>,
    /// Text for the "last updated" element; empty clears it.
    pub last_updated: String,
    /// Full replacement for the content region.
    pub content_html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}
