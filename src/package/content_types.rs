//! The `[Content_Types].xml` table.

/// Default (by extension) and override (by part name) content types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypes {
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
}

impl ContentTypes {
    /// Table with the `rels` and `xml` defaults every package needs.
    pub fn new() -> Self {
        let mut types = Self {
            defaults: Vec::new(),
            overrides: Vec::new(),
        };
        types.ensure_default(
            "rels",
            "application/vnd.openxmlformats-package.relationships+xml",
        );
        types.ensure_default("xml", "application/xml");
        types
    }

    /// Declare `extension` as `media_type` unless it is already declared.
    ///
    /// Returns `true` if an entry was added. Extensions compare
    /// case-insensitively, and an existing entry is never replaced.
    pub fn ensure_default(&mut self, extension: &str, media_type: &str) -> bool {
        if self.default_for(extension).is_some() {
            return false;
        }
        self.defaults
            .push((extension.to_ascii_lowercase(), media_type.to_string()));
        true
    }

    /// Set the content type of a specific part, replacing any previous override.
    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        let part_name = if part_name.starts_with('/') {
            part_name.to_string()
        } else {
            format!("/{}", part_name)
        };
        match self.overrides.iter_mut().find(|(name, _)| *name == part_name) {
            Some(entry) => entry.1 = content_type.to_string(),
            None => self.overrides.push((part_name, content_type.to_string())),
        }
    }

    pub fn default_for(&self, extension: &str) -> Option<&str> {
        self.defaults
            .iter()
            .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
            .map(|(_, media_type)| media_type.as_str())
    }

    pub fn override_for(&self, part_name: &str) -> Option<&str> {
        let part_name = part_name.trim_start_matches('/');
        self.overrides
            .iter()
            .find(|(name, _)| name.trim_start_matches('/') == part_name)
            .map(|(_, content_type)| content_type.as_str())
    }

    /// `(extension, media type)` pairs in declaration order.
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &str)> {
        self.defaults.iter().map(|(e, m)| (e.as_str(), m.as_str()))
    }

    /// `(part name, content type)` pairs in declaration order.
    pub fn overrides(&self) -> impl Iterator<Item = (&str, &str)> {
        self.overrides.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_package_defaults() {
        let types = ContentTypes::new();
        assert!(types.default_for("rels").is_some());
        assert_eq!(types.default_for("xml"), Some("application/xml"));
    }

    #[test]
    fn test_ensure_default_is_idempotent() {
        let mut types = ContentTypes::new();
        assert!(types.ensure_default("svg", "image/svg+xml"));
        assert!(!types.ensure_default("svg", "image/svg+xml"));
        assert!(!types.ensure_default("SVG", "image/other"));
        assert_eq!(types.defaults().filter(|(e, _)| *e == "svg").count(), 1);
        assert_eq!(types.default_for("svg"), Some("image/svg+xml"));
    }

    #[test]
    fn test_override_normalizes_part_name() {
        let mut types = ContentTypes::new();
        types.add_override("word/document.xml", "a");
        types.add_override("/word/document.xml", "b");
        assert_eq!(types.overrides().count(), 1);
        assert_eq!(types.override_for("word/document.xml"), Some("b"));
        assert_eq!(types.overrides().next(), Some(("/word/document.xml", "b")));
    }
}
