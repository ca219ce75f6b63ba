use serde::{Deserialize, Serialize};

/// Which product listing a feed view shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "slug")]
pub enum FeedFilter {
    #[default]
    All,
    Today,
    /// Top of the current week.
    Top,
    Category(String),
}

impl FeedFilter {
    /// `all`, `today`, `top`; any other non-empty value is a category slug.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.to_ascii_lowercase().as_str() {
            "" | "all" => Self::All,
            "today" => Self::Today,
            "top" => Self::Top,
            _ => Self::Category(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_and_category_filters() {
        assert_eq!(FeedFilter::parse(""), FeedFilter::All);
        assert_eq!(FeedFilter::parse("Today"), FeedFilter::Today);
        assert_eq!(FeedFilter::parse("top"), FeedFilter::Top);
        assert_eq!(FeedFilter::parse("ai"), FeedFilter::Category("ai".into()));
    }
}
