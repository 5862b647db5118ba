use super::{card, escape_xml, Theme, FONT};
use crate::models::{RepoAggregateStats, UserProfile};

const ROW_HEIGHT: u32 = 30;
const FIRST_ROW_Y: u32 = 80;
const BASE_HEIGHT: u32 = 120;

struct StatRow {
    icon: &'static str,
    label: &'static str,
    value: String,
}

fn stat_rows(user: &UserProfile, stats: &RepoAggregateStats) -> Vec<StatRow> {
    vec![
        StatRow {
            icon: "\u{2b50}",
            label: "Total Stars",
            value: stats.total_stars.to_string(),
        },
        StatRow {
            icon: "\u{1f500}",
            label: "Total Forks",
            value: stats.total_forks.to_string(),
        },
        StatRow {
            icon: "\u{1f4c1}",
            label: "Public Repos",
            value: user.public_repo_count.to_string(),
        },
        StatRow {
            icon: "\u{1f41b}",
            label: "Open Issues",
            value: stats.total_open_issues.to_string(),
        },
        StatRow {
            icon: "\u{1f465}",
            label: "Followers",
            value: user.follower_count.to_string(),
        },
    ]
}

pub fn card_height(rows: usize) -> u32 {
    BASE_HEIGHT + rows as u32 * ROW_HEIGHT
}

pub fn render_stats_card(user: &UserProfile, stats: &RepoAggregateStats, theme: &Theme) -> String {
    let rows = stat_rows(user, stats);
    let height = card_height(rows.len());

    let mut rows_svg = String::new();
    for (i, row) in rows.iter().enumerate() {
        let y = FIRST_ROW_Y + i as u32 * ROW_HEIGHT;
        rows_svg.push_str(&format!(
            r#"  <g transform="translate(25, {y})">
    <text x="0" y="0" class="icon">{icon}</text>
    <text x="28" y="0" class="stat-label">{label}:</text>
    <text x="260" y="0" class="stat-value">{value}</text>
  </g>
"#,
            y = y,
            icon = row.icon,
            label = escape_xml(row.label),
            value = escape_xml(&row.value),
        ));
    }

    let styles = format!(
        r#"      .stat-label {{ font: 400 14px {font}; fill: {text}; }}
      .stat-value {{ font: 700 14px {font}; fill: {title}; text-anchor: end; }}
      .icon {{ font-size: 16px; fill: {icon}; }}"#,
        font = FONT,
        text = theme.text,
        title = theme.title,
        icon = theme.icon,
    );

    let body = format!(
        r#"  <text x="25" y="40" class="title">{name}'s GitHub Stats</text>
  <line x1="25" y1="55" x2="375" y2="55" stroke="{ring}" stroke-width="0.5" opacity="0.5"/>
{rows}"#,
        name = escape_xml(&user.display_name),
        ring = theme.ring,
        rows = rows_svg.trim_end(),
    );

    card(height, &styles, &body, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserProfile {
        UserProfile {
            display_name: name.to_string(),
            public_repo_count: 42,
            follower_count: 7,
            following_count: 3,
        }
    }

    fn stats() -> RepoAggregateStats {
        RepoAggregateStats {
            total_stars: 120,
            total_forks: 15,
            total_open_issues: 4,
        }
    }

    #[test]
    fn test_renders_all_rows_in_order() {
        let svg = render_stats_card(&user("Octo Cat"), &stats(), &Theme::default());

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Octo Cat's GitHub Stats"));
        let labels = ["Total Stars", "Total Forks", "Public Repos", "Open Issues", "Followers"];
        let positions: Vec<usize> = labels.iter().map(|l| svg.find(l).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(svg.contains(r#"class="stat-value">120<"#));
        assert!(svg.contains(r#"class="stat-value">15<"#));
        assert!(svg.contains(r#"class="stat-value">42<"#));
        assert!(svg.contains(r#"class="stat-value">4<"#));
        assert!(svg.contains(r#"class="stat-value">7<"#));
    }

    #[test]
    fn test_height_follows_row_count() {
        assert_eq!(card_height(5), 270);
        let svg = render_stats_card(&user("x"), &stats(), &Theme::default());
        assert!(svg.contains(r#"width="400" height="270" viewBox="0 0 400 270""#));
        assert!(svg.contains(r#"translate(25, 200)"#));
    }

    #[test]
    fn test_display_name_is_escaped() {
        let svg = render_stats_card(&user("<b>Tom & Jerry</b>"), &stats(), &Theme::default());
        assert!(svg.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;'s GitHub Stats"));
        assert!(!svg.contains("<b>"));
    }
}
