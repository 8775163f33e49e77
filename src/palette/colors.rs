/// Display color for any language not in the table.
pub const FALLBACK_COLOR: &str = "#8b949e";

// GitHub's linguist colors for the languages that show up most often.
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#2b7489"),
    ("Python", "#3572A5"),
    ("Java", "#b07219"),
    ("Go", "#00ADD8"),
    ("Rust", "#dea584"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Ruby", "#701516"),
    ("PHP", "#4F5D95"),
    ("C++", "#f34b7d"),
    ("C", "#555555"),
    ("C#", "#178600"),
    ("Swift", "#ffac45"),
    ("Kotlin", "#F18E33"),
    ("Shell", "#89e051"),
    ("Dockerfile", "#384d54"),
];

/// Look up the display color for a language name.
///
/// Total: unknown languages map to [`FALLBACK_COLOR`].
pub fn language_color(name: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(lang, _)| *lang == name)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}
