//! Portfolio project record

use crate::year::YearLabel;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Separator placed between field values when building the search text
pub const SEARCH_SEPARATOR: char = '\n';

/// One portfolio entry
///
/// Field names follow the site's `projects.json`. Fields the site does not
/// know about are kept in [`Project::extra`] in document order so full-record
/// search still sees them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Display title, non-empty
    pub title: String,

    /// Free text, may be empty; `null` reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    /// Grouping key; absent or `null` means the project has no year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<YearLabel>,

    /// Image path, opaque to filtering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// CSS class for the image, opaque to filtering
    #[serde(default, rename = "imageClass", skip_serializing_if = "Option::is_none")]
    pub image_class: Option<String>,

    /// Remaining fields in source order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Create a project with a title and everything else empty
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            year: None,
            image: None,
            image_class: None,
            extra: Map::new(),
        }
    }

    /// With description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With year
    #[must_use]
    pub fn with_year(mut self, year: impl Into<YearLabel>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// With image and its CSS class
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>, class: Option<&str>) -> Self {
        self.image = Some(image.into());
        self.image_class = class.map(str::to_string);
        self
    }

    /// Year usable for grouping: present and not an empty string
    #[inline]
    #[must_use]
    pub fn group_year(&self) -> Option<&YearLabel> {
        self.year.as_ref().filter(|y| !y.is_empty())
    }

    /// All field values joined by [`SEARCH_SEPARATOR`], in field order
    #[must_use]
    pub fn search_text(&self) -> String {
        let mut parts: Vec<String> = vec![self.title.clone(), self.description.clone()];
        if let Some(year) = &self.year {
            parts.push(year.to_string());
        }
        if let Some(image) = &self.image {
            parts.push(image.clone());
        }
        if let Some(class) = &self.image_class {
            parts.push(class.clone());
        }
        parts.extend(self.extra.values().map(value_text));

        let mut sep = [0u8; 4];
        parts.join(SEARCH_SEPARATOR.encode_utf8(&mut sep))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_site_record() {
        let json = r#"{
            "title": "Lorem",
            "image": "images/a.png",
            "imageClass": "wide",
            "year": "2024",
            "description": "Ipsum"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.title, "Lorem");
        assert_eq!(project.year, Some(YearLabel::Text("2024".into())));
        assert_eq!(project.image_class.as_deref(), Some("wide"));
        assert!(project.extra.is_empty());
    }

    #[test]
    fn keeps_unknown_fields_for_search() {
        let json = r#"{"title": "T", "year": 2022, "tags": ["rust", "d3"], "url": "x.io"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.extra.len(), 2);
        let text = project.search_text();
        assert!(text.contains("rust,d3"));
        assert!(text.contains("x.io"));
    }

    #[test]
    fn missing_and_null_year_decode_as_none() {
        let a: Project = serde_json::from_str(r#"{"title": "A"}"#).unwrap();
        let b: Project = serde_json::from_str(r#"{"title": "B", "year": null}"#).unwrap();
        assert!(a.year.is_none());
        assert!(b.year.is_none());
        assert_eq!(a.description, "");
    }

    #[test]
    fn null_description_reads_as_empty() {
        let p: Project = serde_json::from_str(r#"{"title": "B", "description": null}"#).unwrap();
        assert_eq!(p.description, "");
        assert_eq!(p.search_text(), "B\n");
    }

    #[test]
    fn empty_year_is_not_a_group_year() {
        let p = Project::new("A").with_year("");
        assert!(p.year.is_some());
        assert!(p.group_year().is_none());
    }

    #[test]
    fn search_text_joins_values() {
        let p = Project::new("Title")
            .with_description("Desc")
            .with_year(2023)
            .with_image("img.png", Some("cls"));
        assert_eq!(p.search_text(), "Title\nDesc\n2023\nimg.png\ncls");
    }
}
