use crate::format::{date_option_label, date_time};
use crate::labels::{LAST_UPDATED_PREFIX, LOADING_PLACEHOLDER, LOAD_FAILED_PLACEHOLDER};
use crate::render::render_tab;
use crate::view_model::{AppViewModel, DateOptionView};
use crate::{DigestDocument, Tab};

/// Where the one-shot document load stands; `Failed` keeps the reported reason.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed {
        message: String,
    },
}

/// Selection state for one viewing session.
///
/// Invariant: `selected_date`, when set, is one of `data.dates`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    data: Option<DigestDocument>,
    selected_tab: Tab,
    selected_date: Option<String>,
    load: LoadStatus,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&DigestDocument> {
        self.data.as_ref()
    }

    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            active_tab: self.selected_tab,
            date_options: self.date_options(),
            last_updated: self.last_updated(),
            content_html: self.render_content(),
        }
    }

    /// The single top-level render: loading, failure, or the selected day.
    pub fn render_content(&self) -> String {
        if let LoadStatus::Failed { .. } = self.load {
            return LOAD_FAILED_PLACEHOLDER.to_string();
        }
        match (&self.data, &self.selected_date) {
            (Some(document), Some(date)) => render_tab(document, self.selected_tab, date),
            _ => LOADING_PLACEHOLDER.to_string(),
        }
    }

    fn date_options(&self) -> Vec<DateOptionView> {
        let Some(document) = &self.data else {
            return Vec::new();
        };
        document
            .dates
            .iter()
            .enumerate()
            .map(|(index, date)| DateOptionView {
                value: date.clone(),
                label: date_option_label(date, index),
                selected: self.selected_date.as_deref() == Some(date.as_str()),
            })
            .collect()
    }

    fn last_updated(&self) -> String {
        match self.data.as_ref().and_then(|d| d.generated_at.as_deref()) {
            Some(generated_at) if !generated_at.is_empty() => {
                format!("{LAST_UPDATED_PREFIX}{}", date_time(Some(generated_at)))
            }
            _ => String::new(),
        }
    }

    pub(crate) fn begin_load(&mut self) {
        self.load = LoadStatus::Loading;
        self.mark_dirty();
    }

    /// Stores the document and selects its newest date.
    pub(crate) fn store_document(&mut self, document: DigestDocument) {
        self.selected_date = document.first_date().map(ToOwned::to_owned);
        self.data = Some(document);
        self.load = LoadStatus::Loaded;
        self.mark_dirty();
    }

    pub(crate) fn fail_load(&mut self, message: String) {
        self.load = LoadStatus::Failed { message };
        self.mark_dirty();
    }

    pub(crate) fn select_tab(&mut self, tab: Tab) {
        self.selected_tab = tab;
        self.mark_dirty();
    }

    /// Returns `false` when the value is not a date of the loaded document.
    pub(crate) fn select_date(&mut self, raw: &str) -> bool {
        let Some(document) = &self.data else {
            return false;
        };
        let raw = raw.trim();
        let next = if raw.is_empty() {
            document.first_date().map(ToOwned::to_owned)
        } else if document.contains_date(raw) {
            Some(raw.to_string())
        } else {
            return false;
        };
        self.selected_date = next;
        self.mark_dirty();
        true
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
