use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Menu document keyed by category name, in document order
///
/// A category whose value is not an object (`null`, a number, a string,
/// an array) is kept as a key but never rendered.
#[derive(Debug, Clone, Default)]
pub struct MenuData {
    categories: IndexMap<String, Option<Category>>,
}

impl<'de> Deserialize<'de> for MenuData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;

        let categories: IndexMap<String, Option<Category>> = raw
            .into_iter()
            .map(|(name, value)| category_from_value(value).map(|category| (name, category)))
            .collect::<serde_json::Result<_>>()
            .map_err(de::Error::custom)?;

        Ok(Self { categories })
    }
}

fn category_from_value(value: Value) -> serde_json::Result<Option<Category>> {
    if !value.is_object() {
        return Ok(None);
    }

    Category::deserialize(value).map(Some)
}

impl MenuData {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name).and_then(Option::as_ref)
    }

    /// Category names exactly as they appear in the document
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn total_items(&self) -> usize {
        self.categories
            .values()
            .flatten()
            .map(|category| category.items().len())
            .sum()
    }
}

impl FromIterator<(String, Category)> for MenuData {
    fn from_iter<T: IntoIterator<Item = (String, Category)>>(iter: T) -> Self {
        Self {
            categories: iter
                .into_iter()
                .map(|(name, category)| (name, Some(category)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "items_or_empty")]
    items: Vec<MenuItem>,
}

/// `null`, `false`, `0` and `""` mean "no items"; any other non-list is an error
fn items_or_empty<'de, D>(deserializer: D) -> Result<Vec<MenuItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if is_falsy(&value) {
        return Ok(Vec::new());
    }

    Vec::<MenuItem>::deserialize(value).map_err(de::Error::custom)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

impl Category {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

/// One dish as stored in the menu document
///
/// Every field is optional. Price is display text and never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "food-title", default)]
    pub title: Option<String>,
    #[serde(rename = "food-price", default)]
    pub price: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "img-url", default)]
    pub image_url: Option<String>,
}

impl MenuItem {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}
