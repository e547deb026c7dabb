//! Digest core: document model, pure renderers and the selection state machine.
mod effect;
pub mod format;
pub mod labels;
mod model;
mod msg;
pub mod render;
mod state;
mod tab;
mod update;
mod view_model;

pub use effect::Effect;
pub use format::{date_label, date_option_label, date_time, escape_text, multiline_to_blocks};
pub use model::{
    AccountCount, AppsDay, AppsTab, AppsTransparency, Category, CategoryItem, DigestDocument,
    FeedCount, Tabs, VideoItem, YoutubeDay, YoutubeTab, YoutubeTransparency,
};
pub use msg::Msg;
pub use render::render_tab;
pub use state::{AppState, LoadStatus};
pub use tab::{Tab, UnknownTab};
pub use update::update;
pub use view_model::{AppViewModel, DateOptionView};
