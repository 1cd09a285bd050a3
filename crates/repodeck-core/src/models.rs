use serde::{Deserialize, Serialize};

/// Repository model - one row of the results table.
///
/// Fields come straight from the listing endpoint; nothing is validated or
/// normalized beyond null-checking at display time. `updated_at` stays a raw
/// string - parsing happens where it is needed (sorting, date formatting).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub language: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub updated_at: String,
    pub license: Option<License>,
}

/// License metadata. The object can be present with a null name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct License {
    pub name: Option<String>,
}

impl Repository {
    /// Language column / detail pane text, with a placeholder glyph when absent.
    pub fn language_display(&self) -> &str {
        self.language.as_deref().unwrap_or("--")
    }

    /// License line for the detail pane. Distinguishes a missing license from
    /// a license object that carries no name.
    pub fn license_display(&self) -> &str {
        match &self.license {
            None => "No license",
            Some(license) => license.name.as_deref().unwrap_or("License not specified"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(language: Option<&str>, license: Option<Option<&str>>) -> Repository {
        Repository {
            id: 1,
            name: "demo".to_string(),
            language: language.map(String::from),
            stars: 0,
            forks: 0,
            updated_at: "2023-03-05T00:00:00Z".to_string(),
            license: license.map(|name| License {
                name: name.map(String::from),
            }),
        }
    }

    #[test]
    fn language_placeholder_when_absent() {
        assert_eq!(repo(None, None).language_display(), "--");
        assert_eq!(repo(Some("Rust"), None).language_display(), "Rust");
    }

    #[test]
    fn license_display_covers_all_three_shapes() {
        assert_eq!(repo(None, None).license_display(), "No license");
        assert_eq!(
            repo(None, Some(None)).license_display(),
            "License not specified"
        );
        assert_eq!(repo(None, Some(Some("MIT License"))).license_display(), "MIT License");
    }
}
