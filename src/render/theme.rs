use std::collections::HashMap;

/// Fallback colours for languages missing from the colour table, cycled by
/// position on the card.
pub const PALETTE: [&str; 10] = [
    "#f1e05a", "#3178c6", "#3572A5", "#b07219", "#e34c26", "#563d7c", "#00ADD8", "#dea584",
    "#178600", "#dc3545",
];

/// GitHub linguist colours for the languages that show up most often.
const LANGUAGE_COLORS: [(&str, &str); 26] = [
    ("Python", "#3572A5"),
    ("TypeScript", "#3178c6"),
    ("JavaScript", "#f1e05a"),
    ("Java", "#b07219"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Go", "#00ADD8"),
    ("Rust", "#dea584"),
    ("Shell", "#89e051"),
    ("C++", "#f34b7d"),
    ("C", "#555555"),
    ("C#", "#178600"),
    ("Ruby", "#701516"),
    ("PHP", "#4F5D95"),
    ("Kotlin", "#A97BFF"),
    ("Swift", "#F05138"),
    ("Dart", "#00B4AB"),
    ("Lua", "#000080"),
    ("Haskell", "#5e5086"),
    ("Jupyter Notebook", "#DA5B0B"),
    ("SCSS", "#c6538c"),
    ("Vue", "#41b883"),
    ("Svelte", "#ff3e00"),
    ("Dockerfile", "#384d54"),
    ("Makefile", "#427819"),
    ("SQL", "#e38c00"),
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: String,
    pub title: String,
    pub text: String,
    pub icon: String,
    pub ring: String,
    pub border: String,
    pub language_colors: HashMap<String, String>,
}

impl Default for Theme {
    /// TokyoNight-style dark card.
    fn default() -> Self {
        Self {
            bg: "#0D1117".to_string(),
            title: "#70a5fd".to_string(),
            text: "#a9b1d6".to_string(),
            icon: "#bf91f3".to_string(),
            ring: "#70a5fd".to_string(),
            border: "#1a1b27".to_string(),
            language_colors: LANGUAGE_COLORS
                .iter()
                .map(|(lang, color)| (lang.to_string(), color.to_string()))
                .collect(),
        }
    }
}

impl Theme {
    /// Colour for `language`, drawn at `position` among the rendered entries.
    pub fn language_color(&self, language: &str, position: usize) -> &str {
        self.language_colors
            .get(language)
            .map(String::as_str)
            .unwrap_or_else(|| palette_color(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), "#f1e05a");
        assert_eq!(palette_color(9), "#dc3545");
        assert_eq!(palette_color(10), palette_color(0));
        assert_eq!(palette_color(23), palette_color(3));
    }

    #[test]
    fn test_known_language_uses_table() {
        let theme = Theme::default();
        assert_eq!(theme.language_color("Rust", 5), "#dea584");
        assert_eq!(theme.language_color("Shell", 0), "#89e051");
    }

    #[test]
    fn test_unknown_language_uses_palette_position() {
        let theme = Theme::default();
        assert_eq!(theme.language_color("Brainfuck", 1), "#3178c6");
        assert_eq!(theme.language_color("Brainfuck", 11), "#3178c6");
    }
}
