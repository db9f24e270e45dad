use async_trait::async_trait;

use crate::error::{MenuError, Result};
use crate::model::MenuData;

/// Raw response for the menu document
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub status: u16,
    pub body: String,
}

impl FetchedDocument {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where the menu document comes from
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait MenuSource {
    /// Resolve with whatever status the server answered; reject only when
    /// no response arrived at all
    async fn fetch(&self, url: &str) -> Result<FetchedDocument>;
}

/// Fetch and parse the menu document
///
/// A non-2xx status is an error before the body is looked at.
pub async fn fetch_menu_data<S>(source: &S, url: &str) -> Result<MenuData>
where
    S: MenuSource + ?Sized,
{
    tracing::debug!(url, "Fetching menu data");

    let document = source.fetch(url).await?;

    if !document.is_success() {
        return Err(MenuError::Http {
            status: document.status,
        });
    }

    Ok(MenuData::from_json(&document.body)?)
}
