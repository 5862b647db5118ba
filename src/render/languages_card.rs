use super::{card, escape_xml, Theme, FONT};
use crate::models::LanguageShare;

pub const DEFAULT_MAX_LANGUAGES: usize = 8;

const BAR_X: f64 = 25.0;
const BAR_Y: u32 = 55;
const BAR_WIDTH: f64 = 350.0;
const BASE_HEIGHT: u32 = 120;
const ENTRY_HEIGHT: u32 = 28;
const FIRST_LEGEND_Y: u32 = 85;
const LEGEND_STEP: u32 = 25;

const NO_DATA: &str = "No data";

pub fn card_height(entries: usize) -> u32 {
    BASE_HEIGHT + entries as u32 * ENTRY_HEIGHT
}

/// Top `max_languages` entries of `distribution`, or a single "No data"
/// entry at 100% when there is nothing to show.
fn visible_entries(distribution: &[LanguageShare], max_languages: usize) -> Vec<(&str, f64)> {
    let entries: Vec<(&str, f64)> = distribution
        .iter()
        .take(max_languages)
        .map(|share| (share.language.as_str(), share.percentage))
        .collect();

    if entries.is_empty() {
        vec![(NO_DATA, 100.0)]
    } else {
        entries
    }
}

pub fn render_languages_card(
    distribution: &[LanguageShare],
    max_languages: usize,
    theme: &Theme,
) -> String {
    let entries = visible_entries(distribution, max_languages);
    let height = card_height(entries.len());

    let mut bar_svg = String::new();
    let mut offset = 0.0;
    for (i, (language, pct)) in entries.iter().enumerate() {
        let width = pct / 100.0 * BAR_WIDTH;
        bar_svg.push_str(&format!(
            "  <rect x=\"{x:.2}\" y=\"{y}\" width=\"{w:.2}\" height=\"8\" rx=\"2\" fill=\"{color}\"/>\n",
            x = BAR_X + offset,
            y = BAR_Y,
            w = width,
            color = theme.language_color(language, i),
        ));
        offset += width;
    }

    let mut legend_svg = String::new();
    for (i, (language, pct)) in entries.iter().enumerate() {
        let y = FIRST_LEGEND_Y + i as u32 * LEGEND_STEP;
        legend_svg.push_str(&format!(
            r#"  <g transform="translate(25, {y})">
    <circle cx="6" cy="-4" r="6" fill="{color}"/>
    <text x="18" y="0" class="lang-name">{name}</text>
    <text x="355" y="0" class="lang-pct">{pct:.1}%</text>
  </g>
"#,
            y = y,
            color = theme.language_color(language, i),
            name = escape_xml(language),
            pct = pct,
        ));
    }

    let styles = format!(
        r#"      .lang-name {{ font: 400 13px {font}; fill: {text}; }}
      .lang-pct {{ font: 600 13px {font}; fill: {text}; text-anchor: end; }}"#,
        font = FONT,
        text = theme.text,
    );

    let body = format!(
        "  <text x=\"25\" y=\"38\" class=\"title\">Most Used Languages</text>\n{}{}",
        bar_svg,
        legend_svg.trim_end(),
    );

    card(height, &styles, &body, theme)
}
