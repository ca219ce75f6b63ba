use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{category::Category, errors::ModelError, product::Product, vote::Vote};

const PRODUCTS_JSON: &str = include_str!("../data/products.json");
const CATEGORIES_JSON: &str = include_str!("../data/categories.json");
const VOTES_JSON: &str = include_str!("../data/votes.json");

static BUILTIN: Lazy<Result<Seed, ModelError>> =
    Lazy::new(|| Seed::from_json_parts(PRODUCTS_JSON, CATEGORIES_JSON, VOTES_JSON));

/// Records a fresh process starts from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub votes: Vec<Vote>,
}

impl Seed {
    /// The dataset compiled into the crate.
    pub fn builtin() -> Result<Self, ModelError> {
        (*BUILTIN).clone()
    }

    pub fn from_json_parts(products: &str, categories: &str, votes: &str) -> Result<Self, ModelError> {
        Ok(Self {
            products: parse_part("products", products)?,
            categories: parse_part("categories", categories)?,
            votes: parse_part("votes", votes)?,
        })
    }
}

fn parse_part<T: serde::de::DeserializeOwned>(name: &str, json: &str) -> Result<Vec<T>, ModelError> {
    serde_json::from_str(json).map_err(|e| ModelError::Parse(format!("{name}: {e}")))
}
