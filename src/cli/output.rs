//! Output formatting utilities

use crate::application::{ArticleDetail, StatsReport};
use crate::domain::{Theme, ThemeFilter, ViewModel};
use crate::infrastructure::Config;

/// Markers placed around highlighted matches
#[derive(Debug, Clone, Copy)]
pub struct Markers<'a> {
    pub open: &'a str,
    pub close: &'a str,
}

impl<'a> From<&'a Config> for Markers<'a> {
    fn from(config: &'a Config) -> Self {
        Markers {
            open: &config.highlight_open,
            close: &config.highlight_close,
        }
    }
}

fn push_indented(output: &mut String, text: &str) {
    for line in text.lines() {
        output.push_str("    ");
        output.push_str(line);
        output.push('\n');
    }
}

/// Format a browse or search view for display
pub fn format_view(view: &ViewModel<'_>, markers: Markers<'_>, full: bool) -> String {
    let mut output = String::new();

    match view {
        ViewModel::Browse {
            filter,
            heading,
            articles,
        } => {
            if articles.is_empty() {
                return match filter {
                    ThemeFilter::All => "表示できる記事がありません。\n".to_string(),
                    ThemeFilter::Only(_) => {
                        "選択されたテーマの記事が見つかりませんでした。\n".to_string()
                    }
                };
            }

            output.push_str(&format!("{} ({}件)\n", heading, articles.len()));
            for card in articles {
                output.push('\n');
                match card.theme {
                    Some(theme) => {
                        output.push_str(&format!("{}  [{}]\n", card.display_date, theme))
                    }
                    None => output.push_str(&format!("{}\n", card.display_date)),
                }
                output.push_str(&format!("  {}\n", card.record.title));
                if let Some(guide) = &card.guide {
                    output.push_str(&format!("  ◆ {}\n", guide.label));
                    push_indented(&mut output, &guide.preview);
                }
                if full {
                    output.push('\n');
                    push_indented(&mut output, &card.record.readable_body());
                }
            }
        }
        ViewModel::Search { query, results } => {
            if results.is_empty() {
                return format!(
                    "「{}」に関する情報が見つかりませんでした。別のキーワードをお試しください。\n",
                    query
                );
            }

            output.push_str(&format!("「{}」の検索結果 ({}件)\n", query, results.len()));
            for result in results {
                output.push('\n');
                output.push_str(&format!(
                    "{} - {}\n",
                    result.record.display_date(),
                    result.theme_label
                ));
                push_indented(
                    &mut output,
                    &result.highlighted.render(markers.open, markers.close),
                );
                if full {
                    output.push_str(&format!("\n  {}\n", result.record.title));
                    push_indented(&mut output, &result.record.readable_body());
                }
            }
        }
    }

    output
}

/// Format one full article
pub fn format_article(detail: &ArticleDetail<'_>) -> String {
    let record = detail.record;
    let mut output = format!("{}\n{}\n", record.display_date(), record.title);

    if let Some(theme) = record.theme() {
        output.push_str(&format!("テーマ: {}\n", theme));
    }
    if let Some(guide) = &detail.guide {
        output.push_str(&format!("学校案内: {} ({})\n", guide.label, detail.topic));
    }
    output.push('\n');
    output.push_str(&detail.body);
    output.push('\n');
    output
}

/// Format the statistics view
pub fn format_stats(report: &StatsReport) -> String {
    let stats = &report.stats;
    let mut output = format!("総配信数: {}件\n", stats.total);

    if let Some(period) = stats.period_label() {
        output.push_str(&format!("配信期間: {}\n", period));
    }
    if let Some((query, hits)) = &report.search {
        output.push_str(&format!("検索結果: 「{}」 {}件\n", query, hits));
    }

    output.push_str("テーマ別記事数:\n");
    for (theme, count) in &stats.per_theme {
        output.push_str(&format!("  {}: {}件\n", theme, count));
    }
    output
}

/// Format a numbered keyword list
pub fn format_keyword_list(keywords: &[&str]) -> String {
    if keywords.is_empty() {
        return "キーワードがありません。\n".to_string();
    }

    let mut output = String::new();
    for (i, keyword) in keywords.iter().enumerate() {
        output.push_str(&format!("{:>2}. {}\n", i + 1, keyword));
    }
    output
}

/// Format the weekday themes
pub fn format_theme_list() -> String {
    let mut output = String::new();
    for theme in Theme::ALL {
        output.push_str(&format!("{}  {}\n", theme.weekday(), theme));
    }
    output
}
