//! Naming templates for generated events.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 1-based position among the filtered offsets.
pub const TOKEN_SEQUENCE: &str = "{n}";
/// The day offset itself.
pub const TOKEN_DAY: &str = "{day}";
/// Study week of the offset (`offset / 7 + 1`).
pub const TOKEN_WEEK: &str = "{week}";
/// Calendar month (1-12) of the event date.
pub const TOKEN_MONTH: &str = "{month}";

/// Values substituted into a template for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateContext {
    pub sequence: usize,
    pub day: u32,
    pub week: u32,
    pub month: u32,
}

/// Template string with `{n}`, `{day}`, `{week}` and `{month}` placeholders.
///
/// Tokens are matched exactly and case-sensitively; any other braced text is
/// left as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamingTemplate(String);

impl NamingTemplate {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Returns `true` if rendering needs the calendar month.
    #[must_use]
    pub fn uses_month(&self) -> bool {
        self.0.contains(TOKEN_MONTH)
    }

    /// ## Summary
    /// Replaces every occurrence of each recognized token.
    #[must_use]
    pub fn render(&self, context: &TemplateContext) -> String {
        self.0
            .replace(TOKEN_SEQUENCE, &context.sequence.to_string())
            .replace(TOKEN_DAY, &context.day.to_string())
            .replace(TOKEN_WEEK, &context.week.to_string())
            .replace(TOKEN_MONTH, &context.month.to_string())
    }
}

impl From<&str> for NamingTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for NamingTemplate {
    fn from(template: String) -> Self {
        Self(template)
    }
}

impl fmt::Display for NamingTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTEXT: TemplateContext = TemplateContext {
        sequence: 3,
        day: 14,
        week: 3,
        month: 1,
    };

    #[test]
    fn test_render_all_tokens() {
        let template = NamingTemplate::new("#{n} d{day} w{week} m{month}");
        assert_eq!(template.render(&CONTEXT), "#3 d14 w3 m1");
    }

    #[test]
    fn test_render_repeated_tokens() {
        let template = NamingTemplate::new("{n}/{n} at {day}");
        assert_eq!(template.render(&CONTEXT), "3/3 at 14");
    }

    #[test]
    fn test_unknown_and_miscased_tokens_pass_through() {
        let template = NamingTemplate::new("{N} {Day} {date} { n } {}");
        assert_eq!(template.render(&CONTEXT), "{N} {Day} {date} { n } {}");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let template = NamingTemplate::new("Blood draw");
        assert_eq!(template.render(&CONTEXT), "Blood draw");
        assert!(!template.uses_month());
    }
}
