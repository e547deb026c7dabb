//! Fixed display strings. The digest is produced for a Chinese-reading
//! audience, so the viewer chrome matches it.

pub const TODAY: &str = "今天";
pub const UNTITLED: &str = "未命名";
pub const UNCATEGORIZED: &str = "未分类";
pub const RELEVANCE_PREFIX: &str = "启发：";
pub const OPEN_SOURCE_LINK: &str = "打开原文 ↗";
pub const LAST_UPDATED_PREFIX: &str = "更新时间：";
pub const TRANSPARENCY_TITLE: &str = "📊 数据透明度";
/// `byBlock` key for posts dropped as off-topic; reported through `nonAICount` instead.
pub const NON_AI_BLOCK: &str = "非 AI";
pub const LIST_SEPARATOR: &str = "；";
pub const META_SEPARATOR: &str = " · ";

pub const LOADING_PLACEHOLDER: &str = r#"<div class="loading">加载中...</div>"#;
pub const LOAD_FAILED_PLACEHOLDER: &str =
    r#"<div class="empty">数据加载失败，请稍后重试（或检查 data/digest.json 是否存在）。</div>"#;
pub const YOUTUBE_EMPTY_PLACEHOLDER: &str = r#"<div class="empty">这一天暂无 YouTube 内容。</div>"#;
pub const APPS_EMPTY_PLACEHOLDER: &str = r#"<div class="empty">这一天暂无 X 资讯 内容。</div>"#;
