use digest_core::{escape_text, DateOptionView, Tab};

use super::constants::*;

/// Everything the page shell shows; the ports fill it, `page_html` prints it.
/// Text fields come from the view model and are already HTML-safe.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageShell {
    pub content_html: String,
    pub date_options: Vec<DateOptionView>,
    pub last_updated: String,
    pub active_tab: Tab,
}

pub fn page_html(shell: &PageShell) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{PAGE_TITLE}</title>
<link rel="stylesheet" href="styles.css">
</head>
<body>
<header>
<h1>{PAGE_TITLE}</h1>
<nav class="tabs">{youtube}{apps}</nav>
<select id="{DATE_SELECT}">{options}</select>
<span id="{LAST_UPDATED}">{last_updated}</span>
</header>
<main id="{CONTENT}">{content}</main>
</body>
</html>
"#,
        youtube = tab_button(TAB_YOUTUBE, Tab::Youtube, TAB_YOUTUBE_LABEL, shell.active_tab),
        apps = tab_button(TAB_APPS, Tab::Apps, TAB_APPS_LABEL, shell.active_tab),
        options = date_options_html(&shell.date_options),
        last_updated = shell.last_updated,
        content = shell.content_html,
    )
}

fn tab_button(id: &str, tab: Tab, label: &str, active: Tab) -> String {
    let class = if tab == active { "tab active" } else { "tab" };
    format!(r#"<button id="{id}" class="{class}" data-tab="{tab}">{label}</button>"#)
}

/// Option labels arrive already escaped from the view model.
pub fn date_options_html(options: &[DateOptionView]) -> String {
    options
        .iter()
        .map(|option| {
            let selected = if option.selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                escape_text(&option.value),
                option.label
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn option(value: &str, label: &str, selected: bool) -> DateOptionView {
        DateOptionView {
            value: value.to_string(),
            label: label.to_string(),
            selected,
        }
    }

    #[test]
    fn options_mark_selected_entry() {
        let html = date_options_html(&[
            option("2024-01-02", "今天 (2024-01-02)", true),
            option("2024-01-01", "2024-01-01 (1/1)", false),
        ]);
        assert_eq!(
            html,
            concat!(
                r#"<option value="2024-01-02" selected>今天 (2024-01-02)</option>"#,
                r#"<option value="2024-01-01">2024-01-01 (1/1)</option>"#
            )
        );
    }

    #[test]
    fn shell_marks_active_tab_and_embeds_content() {
        let shell = PageShell {
            content_html: "<p>hi</p>".to_string(),
            date_options: Vec::new(),
            last_updated: "更新时间：2024/1/2 08:00:00".to_string(),
            active_tab: Tab::Apps,
        };
        let html = page_html(&shell);
        assert!(html.contains(
            r#"<button id="tab-youtube" class="tab" data-tab="youtube">YouTube</button>"#
        ));
        assert!(html.contains(
            r#"<button id="tab-apps" class="tab active" data-tab="apps">X 资讯</button>"#
        ));
        assert!(html.contains(r#"<main id="content"><p>hi</p></main>"#));
        assert!(html.contains(r#"<span id="last-updated">更新时间：2024/1/2 08:00:00</span>"#));
        assert!(html.contains(r#"<select id="date-select"></select>"#));
    }
}
