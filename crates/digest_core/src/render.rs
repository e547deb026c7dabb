//! HTML fragments for one day of one tab.
//!
//! Everything here is a pure function of its arguments. Optional fields follow
//! one rule: an absent or empty value omits its element entirely, with two
//! exceptions kept on purpose: a missing title falls back to a placeholder, and
//! `coreInsights: []` still renders an (empty) list because the field is present.
use serde_json::Value;

use crate::format::{date_time, escape_text, multiline_to_blocks};
use crate::labels::*;
use crate::model::{
    AccountCount, AppsTransparency, Category, CategoryItem, DigestDocument, FeedCount, VideoItem,
    YoutubeTransparency,
};
use crate::Tab;

/// Renders the content region for `date` on `tab`.
pub fn render_tab(document: &DigestDocument, tab: Tab, date: &str) -> String {
    match tab {
        Tab::Youtube => render_youtube(document, date),
        Tab::Apps => render_apps(document, date),
    }
}

pub fn render_youtube(document: &DigestDocument, date: &str) -> String {
    let day = document.tabs.youtube.days.get(date);
    let items = day.map(|d| d.items.as_slice()).unwrap_or_default();
    let transparency = day.and_then(|d| d.transparency.as_ref());

    if items.is_empty() && transparency.is_none() {
        return YOUTUBE_EMPTY_PLACEHOLDER.to_string();
    }

    let cards: String = items.iter().map(render_video_card).collect();
    let transparency_html = transparency
        .map(render_youtube_transparency)
        .unwrap_or_default();
    format!(r#"<section class="youtube-list">{cards}</section>{transparency_html}"#)
}

pub fn render_apps(document: &DigestDocument, date: &str) -> String {
    let day = document.tabs.apps.days.get(date);
    let categories = day.map(|d| d.categories.as_slice()).unwrap_or_default();
    let transparency = day.and_then(|d| d.transparency.as_ref());

    if categories.is_empty() && transparency.is_none() {
        return APPS_EMPTY_PLACEHOLDER.to_string();
    }

    let sections: String = categories.iter().map(render_category).collect();
    let transparency_html = transparency
        .map(render_apps_transparency)
        .unwrap_or_default();
    format!("<section>{sections}</section>{transparency_html}")
}

fn render_video_card(item: &VideoItem) -> String {
    let meta = meta_line(
        non_empty(&item.source_name).map(escape_text),
        non_empty(&item.published_at).map(|iso| date_time(Some(iso))),
    );
    let title = escape_text(non_empty(&item.title).unwrap_or(UNTITLED));
    let summary = multiline_to_blocks(item.brief_summary.as_deref());

    let insights = item
        .core_insights
        .as_ref()
        .map(|insights| {
            let entries: String = insights
                .iter()
                .map(|insight| format!("<li>{}</li>", escape_text(insight)))
                .collect();
            format!("<ul>{entries}</ul>")
        })
        .unwrap_or_default();

    let relevance = non_empty(&item.personal_relevance)
        .map(|text| {
            format!(
                r#"<div class="summary"><p><strong>{RELEVANCE_PREFIX}</strong></p>{}</div>"#,
                multiline_to_blocks(Some(text))
            )
        })
        .unwrap_or_default();

    let link = non_empty(&item.source_url)
        .map(|url| {
            format!(
                r#"<p><a href="{}" target="_blank" rel="noopener noreferrer">{OPEN_SOURCE_LINK}</a></p>"#,
                escape_text(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="card"><div class="meta">{meta}</div><h3 class="title">{title}</h3><div class="summary">{summary}</div>{insights}{relevance}{link}</article>"#
    )
}

fn render_category(category: &Category) -> String {
    let name = escape_text(non_empty(&category.category).unwrap_or(UNCATEGORIZED));
    let summary = non_empty(&category.summary)
        .map(|text| {
            format!(
                r#"<div class="category-summary">{}</div>"#,
                multiline_to_blocks(Some(text))
            )
        })
        .unwrap_or_default();
    let items: String = category.items.iter().map(render_category_item).collect();

    format!(
        r#"<section class="category"><h3>{name}</h3>{summary}<div class="apps-list">{items}</div></section>"#
    )
}

fn render_category_item(item: &CategoryItem) -> String {
    format!(
        r#"<article class="card"><h4 class="title">{}</h4><div class="summary">{}</div></article>"#,
        escape_text(non_empty(&item.title).unwrap_or(UNTITLED)),
        multiline_to_blocks(item.summary.as_deref())
    )
}

pub fn render_youtube_transparency(transparency: &YoutubeTransparency) -> String {
    let mut summary = format!(
        "配置 Feed {} 个{META_SEPARATOR}抓取视频 {} 条{META_SEPARATOR}有字幕 {} 条{META_SEPARATOR}入选 {} 条",
        transparency.feeds_configured,
        transparency.total_videos_fetched,
        transparency.with_transcript,
        transparency.included_in_report,
    );
    if let Some(high) = transparency.high_priority_count {
        summary.push_str(&format!("{META_SEPARATOR}高优先级 {high}"));
    }
    if let Some(low) = transparency.low_priority_count {
        summary.push_str(&format!("{META_SEPARATOR}低优先级 {low}"));
    }

    let by_source = non_empty_slice(&transparency.by_source)
        .map(|sources| {
            let pairs = sources
                .iter()
                .map(|FeedCount { feed_name, count }| format!("{} {count}", escape_text(feed_name)))
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR);
            transparency_line(&format!("按 Feed：{pairs}"))
        })
        .unwrap_or_default();

    transparency_section(&[transparency_line(&summary), by_source])
}

pub fn render_apps_transparency(transparency: &AppsTransparency) -> String {
    let mut summary = format!(
        "配置账号 {} 个{META_SEPARATOR}抓取推文 {} 条{META_SEPARATOR}入选摘要 {} 条",
        transparency.accounts_configured,
        transparency.total_tweets_fetched,
        transparency.included_in_report,
    );
    if transparency.non_ai_count > 0 {
        summary.push_str(&format!(
            "{META_SEPARATOR}非 AI 已剔除 {} 条",
            transparency.non_ai_count
        ));
    }

    let by_block = transparency
        .by_block
        .as_ref()
        .map(|blocks| {
            blocks
                .iter()
                .filter(|(label, _)| label.as_str() != NON_AI_BLOCK)
                .map(|(label, count)| format!("{label} {}", display_count(count)))
                .collect::<Vec<_>>()
        })
        .filter(|parts| !parts.is_empty())
        .map(|parts| {
            transparency_line(&format!(
                "按块分布：{}",
                escape_text(&parts.join(LIST_SEPARATOR))
            ))
        })
        .unwrap_or_default();

    let by_account = non_empty_slice(&transparency.by_configured_account)
        .map(|accounts| {
            let entries = accounts
                .iter()
                .map(account_entry)
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR);
            transparency_line(&format!("信息源：{entries}"))
        })
        .unwrap_or_default();

    transparency_section(&[transparency_line(&summary), by_block, by_account])
}

fn account_entry(account: &AccountCount) -> String {
    format!(
        "@{}（原创 {} / 转发 {} / 引用 {} / 入选 {}）",
        escape_text(&account.handle),
        account.original_count,
        account.retweet_count,
        account.quote_count,
        account.included_count
    )
}

fn transparency_section(lines: &[String]) -> String {
    format!(
        r#"<section class="transparency-block"><h3 class="transparency-title">{TRANSPARENCY_TITLE}</h3>{}</section>"#,
        lines.concat()
    )
}

fn transparency_line(text: &str) -> String {
    format!(r#"<p class="transparency-line">{text}</p>"#)
}

/// Joins the present parts with the meta separator; never leaves a dangling one.
fn meta_line(source: Option<String>, published: Option<String>) -> String {
    [source, published]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(META_SEPARATOR)
}

fn display_count(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn non_empty_slice<T>(field: &Option<Vec<T>>) -> Option<&[T]> {
    field.as_deref().filter(|values| !values.is_empty())
}
