use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub type ProductId = u64;

/// Upper bound on gallery images per product.
pub const MAX_IMAGES: usize = 5;

/// Image used when a submission arrives without any.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1606868306217-dbf5046868d2?w=400&h=300&fit=crop";

/// A launched product.
///
/// `category` holds the category *name* as free text; it is not checked
/// against the category list. `vote_count`/`has_voted` only change together
/// through [`Product::toggle_vote`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub url: String,
    pub category: String,
    pub maker_name: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub launch_date: DateTime<Utc>,
    pub vote_count: u32,
    #[serde(default)]
    pub has_voted: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Result of a vote toggle, from the viewer's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteOutcome {
    Voted,
    Removed,
}

impl Product {
    /// Flip the viewer's vote. Unvoting floors the count at zero.
    pub fn toggle_vote(&mut self) -> VoteOutcome {
        if self.has_voted {
            self.vote_count = self.vote_count.saturating_sub(1);
            self.has_voted = false;
            VoteOutcome::Removed
        } else {
            self.vote_count = self.vote_count.saturating_add(1);
            self.has_voted = true;
            VoteOutcome::Voted
        }
    }

    pub fn vote_state(&self) -> (u32, bool) {
        (self.vote_count, self.has_voted)
    }

    /// Restore a `(vote_count, has_voted)` pair captured with [`Product::vote_state`].
    pub fn restore_vote_state(&mut self, (vote_count, has_voted): (u32, bool)) {
        self.vote_count = vote_count;
        self.has_voted = has_voted;
    }

    /// Calendar-day comparison on the UTC launch date.
    pub fn launched_on(&self, day: NaiveDate) -> bool {
        self.launch_date.date_naive() == day
    }

    /// Case-insensitive comparison of `slug` against the category *name*.
    ///
    /// Multi-word names ("Developer Tools") never equal their slug
    /// ("developer-tools"), so those categories filter to nothing.
    pub fn in_category(&self, slug: &str) -> bool {
        self.category.to_lowercase() == slug.to_lowercase()
    }

    /// `needle` must already be lowercased.
    pub fn matches_query(&self, needle: &str) -> bool {
        [&self.title, &self.tagline, &self.description, &self.maker_name]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    pub fn apply_patch(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        let ProductPatch { title, tagline, description, url, category, maker_name, images } = patch;
        if let Some(v) = title {
            self.title = v;
        }
        if let Some(v) = tagline {
            self.tagline = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = url {
            self.url = v;
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = maker_name {
            self.maker_name = v;
        }
        if let Some(mut v) = images {
            v.truncate(MAX_IMAGES);
            self.images = v;
        }
        self.updated_at = Some(now);
    }
}

/// Next id for a product table: max existing id + 1, or 1 when empty.
/// `None` once the id space is used up (a row already holds `u64::MAX`).
pub fn next_product_id(products: &[Product]) -> Option<ProductId> {
    match products.iter().map(|p| p.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Sort descending by vote count. `sort_by` is stable, so ties keep input order.
pub fn sort_by_votes(products: &mut [Product]) {
    products.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));
}

/// Caller-supplied fields for a new product. Server-owned fields (`id`,
/// `launchDate`, `voteCount`, ...) are rejected when deserializing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewProduct {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub url: String,
    pub category: String,
    pub maker_name: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl NewProduct {
    /// Submission form rules: every text field required, url must be http(s).
    pub fn validate(&self) -> Result<(), ModelError> {
        let required = [
            ("title", &self.title),
            ("tagline", &self.tagline),
            ("description", &self.description),
            ("url", &self.url),
            ("category", &self.category),
            ("makerName", &self.maker_name),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ModelError::Validation(format!("{name} is required")));
            }
        }
        if !is_valid_url(self.url.trim()) {
            return Err(ModelError::Validation("url must be a valid http(s) URL".into()));
        }
        Ok(())
    }

    /// Trim text, cap the gallery, and fall back to the placeholder image.
    pub fn normalize(mut self) -> Self {
        for field in [
            &mut self.title,
            &mut self.tagline,
            &mut self.description,
            &mut self.url,
            &mut self.category,
            &mut self.maker_name,
        ] {
            *field = field.trim().to_string();
        }
        self.images.truncate(MAX_IMAGES);
        if self.images.is_empty() {
            self.images.push(PLACEHOLDER_IMAGE.to_string());
        }
        self
    }

    /// Build the stored record. The creator counts as the first voter.
    pub fn into_product(self, id: ProductId, now: DateTime<Utc>) -> Product {
        let mut images = self.images;
        images.truncate(MAX_IMAGES);
        Product {
            id,
            title: self.title,
            tagline: self.tagline,
            description: self.description,
            url: self.url,
            category: self.category,
            maker_name: self.maker_name,
            images,
            launch_date: now,
            vote_count: 1,
            has_voted: true,
            created_at: now,
            updated_at: None,
        }
    }
}

fn is_valid_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
            !host.is_empty() && !url.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Mutable product fields only. Unknown or server-owned keys fail to deserialize.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maker_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl ProductPatch {
    /// Parse a JSON patch, mapping unknown/forbidden fields to a validation error.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::Validation(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
