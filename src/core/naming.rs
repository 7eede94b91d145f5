use regex::Regex;

/// Rule deriving the display name of a result from its target.
#[derive(Debug, Clone, Default)]
pub struct NameRule {
    /// Literal name, wins over everything else when non-empty
    pub explicit: Option<String>,
    /// Extraction pattern applied to the target string
    pub pattern: Option<Regex>,
}

impl NameRule {
    pub fn new(explicit: Option<String>, pattern: Option<Regex>) -> Self {
        Self { explicit, pattern }
    }

    /// The explicit name, if one was configured and is non-empty
    pub fn explicit(&self) -> Option<&str> {
        self.explicit.as_deref().filter(|name| !name.is_empty())
    }

    /// Derive the display name for `target`.
    ///
    /// With capture groups, the captured parts are joined with `.`; without
    /// groups the whole match is used. A target the pattern does not match
    /// keeps its raw name.
    pub fn resolve(&self, target: &str) -> String {
        if let Some(name) = self.explicit() {
            return name.to_string();
        }

        let Some(pattern) = &self.pattern else {
            return target.to_string();
        };

        let Some(captures) = pattern.captures(target) else {
            return target.to_string();
        };

        if captures.len() > 1 {
            captures
                .iter()
                .skip(1)
                .map(|group| group.map_or("", |m| m.as_str()))
                .collect::<Vec<_>>()
                .join(".")
        } else {
            captures[0].to_string()
        }
    }
}
