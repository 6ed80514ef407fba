use handlebars::Handlebars;

use crate::error::{CoachError, Result};
use crate::reference::{group_mention, user_mention};
use crate::selector::Picker;

/// Announcement templates compiled into the binary.
pub const DEFAULT_PHRASES: &str = include_str!("../phrases.txt");

/// Pool of announcement templates, compiled once at startup.
///
/// Templates use `{{From}}`, `{{To}}` and `{{Group}}`. Rendering runs in
/// strict mode, so any other placeholder fails the render instead of
/// producing a blank.
pub struct PhrasePool {
    registry: Handlebars<'static>,
    names: Vec<String>,
}

impl std::fmt::Debug for PhrasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhrasePool")
            .field("templates", &self.names.len())
            .finish()
    }
}

impl PhrasePool {
    /// Build a pool from newline-separated templates. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        let mut names = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let name = format!("phrase-{}", line_no + 1);
            registry
                .register_template_string(&name, line)
                .map_err(|e| CoachError::Template(format!("line {}: {e}", line_no + 1)))?;
            names.push(name);
        }

        if names.is_empty() {
            return Err(CoachError::NoPhrases);
        }
        Ok(Self { registry, names })
    }

    pub fn builtin() -> Result<Self> {
        Self::parse(DEFAULT_PHRASES)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render a randomly chosen template for a hand-over.
    pub fn render<P>(&self, from: &str, to: &str, group: &str, picker: &mut P) -> Result<String>
    where
        P: Picker + ?Sized,
    {
        let index = picker.pick(self.names.len());
        self.render_nth(index, from, to, group)
    }

    /// Render every template once, collecting the failures.
    ///
    /// Used to vet a phrase file before deploying it.
    pub fn check_all(&self, from: &str, to: &str, group: &str) -> Vec<CoachError> {
        (0..self.names.len())
            .filter_map(|i| self.render_nth(i, from, to, group).err())
            .collect()
    }

    fn render_nth(&self, index: usize, from: &str, to: &str, group: &str) -> Result<String> {
        let name = self.names.get(index).ok_or(CoachError::NoPhrases)?;
        let data = serde_json::json!({
            "From": user_mention(from),
            "To": user_mention(to),
            "Group": group_mention(group),
        });
        self.registry
            .render(name, &data)
            .map_err(|e| CoachError::Template(format!("{name}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedPicker;

    #[test]
    fn substitutes_mentions_without_escaping() {
        let pool = PhrasePool::parse("{{From}} passes {{Group}} to {{To}}").unwrap();
        let text = pool.render("U1", "U2", "SABC", &mut FixedPicker(0)).unwrap();
        assert_eq!(text, "<@U1> passes <!subteam^SABC> to <@U2>");
    }

    #[test]
    fn blank_lines_are_ignored() {
        let pool = PhrasePool::parse("\nfirst {{To}}\n\n   \nsecond {{To}}\n").unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(
            pool.render("U1", "U2", "S1", &mut FixedPicker(1)).unwrap(),
            "second <@U2>"
        );
    }

    #[test]
    fn unknown_placeholder_fails_the_render() {
        let pool = PhrasePool::parse("{{From}} hands over to {{Nobody}}").unwrap();
        let err = pool.render("U1", "U2", "S1", &mut FixedPicker(0)).unwrap_err();
        assert!(matches!(err, CoachError::Template(_)));
    }

    #[test]
    fn broken_syntax_fails_loading() {
        let err = PhrasePool::parse("{{#if From}} never closed").unwrap_err();
        assert!(matches!(err, CoachError::Template(_)));
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(matches!(
            PhrasePool::parse("\n  \n"),
            Err(CoachError::NoPhrases)
        ));
    }

    #[test]
    fn builtin_pool_renders_cleanly() {
        let pool = PhrasePool::builtin().unwrap();
        assert!(!pool.is_empty());
        assert!(pool.check_all("U1", "U2", "S1").is_empty());
    }

    #[test]
    fn check_all_reports_each_bad_template() {
        let pool = PhrasePool::parse("ok {{To}}\nbad {{Who}}\nworse {{What}}").unwrap();
        assert_eq!(pool.check_all("U1", "U2", "S1").len(), 2);
    }
}
