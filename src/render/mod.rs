//! SVG cards.
//!
//! Both cards are plain strings assembled with `format!`. Every piece of
//! text that comes from the API goes through [`escape_xml`] first.

pub mod languages_card;
pub mod stats_card;
pub mod theme;

pub use languages_card::{render_languages_card, DEFAULT_MAX_LANGUAGES};
pub use stats_card::render_stats_card;
pub use theme::{palette_color, Theme};

pub const CARD_WIDTH: u32 = 400;

const FONT: &str = "'Segoe UI', Ubuntu, Sans-Serif";

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Outer `<svg>` element with the shared background card and a style block.
fn card(height: u32, styles: &str, body: &str, theme: &Theme) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <defs>
    <style>
      .card-bg {{ fill: {bg}; stroke: {ring}; stroke-width: 1; rx: 10; }}
      .title {{ font: 600 18px {font}; fill: {title}; }}
{styles}
    </style>
  </defs>
  <rect class="card-bg" x="0.5" y="0.5" width="{inner_w}" height="{inner_h}" rx="10"/>
{body}
</svg>
"#,
        w = CARD_WIDTH,
        h = height,
        inner_w = CARD_WIDTH - 1,
        inner_h = height.saturating_sub(1),
        bg = theme.bg,
        ring = theme.ring,
        title = theme.title,
        font = FONT,
        styles = styles,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
