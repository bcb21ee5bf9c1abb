//! Fixed story templates. The theme is substituted verbatim: no trimming,
//! escaping, or case change.

const STORY_PREFIX: &str = "Once upon a time in a magical land, a ";
const STORY_SUFFIX: &str = " started an adventure...";

/// Lines of the tale that follow the themed opening line.
const TALE_CONTINUATION: &[&str] = &[
    "Every day, Alex would explore the wonders of this magical place, discovering new friends and adventures.",
    "One day, something extraordinary happened that would change everything...",
    "",
    "Alex found a glowing key that opened a door to another dimension! Through this door,",
    "incredible creatures and landscapes awaited. It was the beginning of the greatest adventure ever!",
];

/// The one-sentence story returned by `POST /generate-story`.
pub fn story_for(theme: &str) -> String {
    let mut story = String::with_capacity(STORY_PREFIX.len() + theme.len() + STORY_SUFFIX.len());
    story.push_str(STORY_PREFIX);
    story.push_str(theme);
    story.push_str(STORY_SUFFIX);
    story
}

/// The multi-line tale, one paragraph break after the third line.
pub fn tale_for(theme: &str) -> String {
    let opening =
        format!("Once upon a time in a {theme} world, there lived a curious child named Alex.");

    std::iter::once(opening.as_str())
        .chain(TALE_CONTINUATION.iter().copied())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_embeds_theme_between_prefix_and_suffix() {
        assert_eq!(
            story_for("dragon"),
            "Once upon a time in a magical land, a dragon started an adventure..."
        );
    }

    #[test]
    fn test_empty_theme_is_not_special_cased() {
        assert_eq!(
            story_for(""),
            "Once upon a time in a magical land, a  started an adventure..."
        );
    }

    #[test]
    fn test_unicode_passes_through_unmodified() {
        let story = story_for("🐉dragon");
        assert_eq!(
            story,
            "Once upon a time in a magical land, a 🐉dragon started an adventure..."
        );
    }

    #[test]
    fn test_theme_is_not_trimmed_or_escaped() {
        let theme = "  <b>\"wizard\"</b>\n";
        assert_eq!(story_for(theme), format!("{STORY_PREFIX}{theme}{STORY_SUFFIX}"));
    }

    #[test]
    fn test_braces_in_theme_are_literal() {
        assert!(story_for("{theme}").contains("a {theme} started"));
        assert!(tale_for("{}").starts_with("Once upon a time in a {} world"));
    }

    #[test]
    fn test_story_is_deterministic() {
        assert_eq!(story_for("knight"), story_for("knight"));
        assert_eq!(tale_for("knight"), tale_for("knight"));
    }

    #[test]
    fn test_tale_opening_and_shape() {
        let tale = tale_for("Space Adventure");
        let lines: Vec<&str> = tale.lines().collect();

        assert_eq!(
            lines[0],
            "Once upon a time in a Space Adventure world, there lived a curious child named Alex."
        );
        assert_eq!(lines.len(), TALE_CONTINUATION.len() + 1);
        assert_eq!(lines[3], "", "paragraph break expected after the third line");
        assert!(tale.ends_with("the greatest adventure ever!"));
    }
}
