//! Element ids of the page shell. Styles and any script on the hosted page
//! address the same ids.

pub const CONTENT: &str = "content";
pub const DATE_SELECT: &str = "date-select";
pub const LAST_UPDATED: &str = "last-updated";
pub const TAB_YOUTUBE: &str = "tab-youtube";
pub const TAB_APPS: &str = "tab-apps";

pub const PAGE_TITLE: &str = "每日摘要";
pub const TAB_YOUTUBE_LABEL: &str = "YouTube";
pub const TAB_APPS_LABEL: &str = "X 资讯";
