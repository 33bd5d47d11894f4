use crate::error::Error;
use crate::result::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// On-disk form of a scaffold definition file
#[derive(Debug, Deserialize, Serialize)]
pub struct DefinitionToml {
    #[serde(default)]
    pub root: Option<String>,

    #[serde(default, rename = "entry")]
    pub entries: Vec<EntryToml>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct EntryToml {
    pub path: String,
    pub content: String,
}

/// A single file of the scaffold: a relative archive path and its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: String,
    pub content: String,
}

impl Entry {
    pub fn new<P: Into<String>, C: Into<String>>(path: P, content: C) -> Result<Self> {
        let path = path.into();
        validate_entry_path(&path)?;
        Ok(Self {
            path,
            content: content.into(),
        })
    }
}

/// Ordered set of entries, unique by path
#[derive(Debug, Clone, Default)]
pub struct ScaffoldDefinition {
    entries: Vec<Entry>,
    /// Root name suggested by a definition file, if any
    pub root: Option<String>,
}

impl ScaffoldDefinition {
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(Error::DuplicateEntry(entry.path.clone()));
            }
        }

        Ok(Self {
            entries,
            root: None,
        })
    }

    /// Build a definition from `(path, content)` pairs
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(path, content)| Entry::new(path, content))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Load and validate a definition from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::DefinitionNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let raw: DefinitionToml = toml::from_str(content)?;

        if let Some(root) = &raw.root {
            validate_root(root)?;
        }

        let entries = raw
            .entries
            .into_iter()
            .map(|e| Entry::new(e.path, e.content))
            .collect::<Result<Vec<_>>>()?;

        let mut definition = Self::new(entries)?;
        definition.root = raw.root;
        Ok(definition)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Archive member paths are `/`-separated, relative, and free of `.`/`..` segments.
pub fn validate_entry_path(path: &str) -> Result<()> {
    let invalid = path.is_empty()
        || path.contains('\\')
        || path.starts_with('/')
        || path
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");

    if invalid {
        return Err(Error::InvalidEntryPath(path.to_string()));
    }
    Ok(())
}

/// The root becomes a single directory level, so it may not contain separators.
pub fn validate_root(root: &str) -> Result<()> {
    if root.is_empty() || root == "." || root == ".." || root.contains(['/', '\\']) {
        return Err(Error::InvalidRoot(root.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry_paths() {
        for path in ["README.md", ".gitignore", "docs/decisions/0001-adr.md"] {
            assert!(validate_entry_path(path).is_ok(), "{path}");
        }
    }

    #[test]
    fn test_invalid_entry_paths() {
        for path in [
            "",
            "/etc/passwd",
            "../escape.md",
            "docs/../../escape.md",
            "docs/./a.md",
            "docs//a.md",
            "docs/",
            "docs\\a.md",
        ] {
            assert!(
                matches!(validate_entry_path(path), Err(Error::InvalidEntryPath(_))),
                "{path}"
            );
        }
    }

    #[test]
    fn test_invalid_roots() {
        for root in ["", ".", "..", "a/b", "a\\b"] {
            assert!(matches!(validate_root(root), Err(Error::InvalidRoot(_))), "{root}");
        }
        assert!(validate_root("software-architecture-scaffold").is_ok());
    }

    #[test]
    fn test_duplicate_paths_rejected() {
        let result = ScaffoldDefinition::from_pairs([("a.md", "one"), ("b.md", "two"), ("a.md", "three")]);
        assert!(matches!(result, Err(Error::DuplicateEntry(p)) if p == "a.md"));
    }

    #[test]
    fn test_parse_preserves_order() {
        let definition = ScaffoldDefinition::parse(
            r#"
root = "my-docs"

[[entry]]
path = "z.md"
content = "last letter"

[[entry]]
path = "a/b.md"
content = "first letter"
"#,
        )
        .unwrap();

        assert_eq!(definition.root.as_deref(), Some("my-docs"));
        let paths: Vec<_> = definition.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["z.md", "a/b.md"]);
        assert_eq!(definition.entries()[1].content, "first letter");
    }

    #[test]
    fn test_parse_rejects_traversal() {
        let result = ScaffoldDefinition::parse(
            r#"
[[entry]]
path = "../outside.md"
content = ""
"#,
        );
        assert!(matches!(result, Err(Error::InvalidEntryPath(_))));
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        assert!(matches!(
            ScaffoldDefinition::parse("[[entry]]\npath = 1"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScaffoldDefinition::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::DefinitionNotFound(_))));
    }

    #[test]
    fn test_empty_definition() {
        let definition = ScaffoldDefinition::parse("").unwrap();
        assert!(definition.is_empty());
        assert!(definition.root.is_none());
    }
}
