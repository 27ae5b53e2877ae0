use serde::Deserialize;

/// Body of a `search/advanced` response.
///
/// Only `items` is read; quota and paging fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<Question>,
}

impl SearchResponse {
    pub fn new(items: Vec<Question>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single Stack Overflow question as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub title: String,
    pub owner: Owner,
    /// Seconds since the Unix epoch
    pub creation_date: i64,
    pub link: String,
}

/// The user who posted a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Owner {
    /// Missing for some deleted or migrated accounts
    #[serde(default)]
    pub display_name: String,
}

impl Question {
    pub fn new(
        title: impl Into<String>,
        owner_display_name: impl Into<String>,
        creation_date: i64,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            owner: Owner {
                display_name: owner_display_name.into(),
            },
            creation_date,
            link: link.into(),
        }
    }

    pub fn owner_display_name(&self) -> &str {
        &self.owner.display_name
    }

    /// Creation date rendered as `dd/mm/yyyy` in local time.
    pub fn created_on(&self) -> String {
        super::format_creation_date(self.creation_date)
    }
}
