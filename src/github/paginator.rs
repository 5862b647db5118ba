use std::marker::PhantomData;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::github::client::get_json;

pub const DEFAULT_PER_PAGE: u32 = 100;

/// Page-numbered listing that ends at the first page shorter than
/// `per_page`.
pub struct Paginator<'a, T> {
    client: &'a Client,
    base_url: String,
    per_page: u32,
    page: u32,
    done: bool,
    _item: PhantomData<T>,
}

impl<'a, T: DeserializeOwned> Paginator<'a, T> {
    pub fn new(client: &'a Client, base_url: &str, per_page: u32) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            per_page: per_page.max(1),
            page: 1,
            done: false,
            _item: PhantomData,
        }
    }

    /// Fetches the next page, or `None` once a short page has been seen.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>> {
        if self.done {
            return Ok(None);
        }

        let separator = if self.base_url.contains('?') { "&" } else { "?" };
        let url = format!(
            "{}{}per_page={}&page={}",
            self.base_url, separator, self.per_page, self.page
        );

        tracing::debug!("Fetching: {}", url);
        let items: Vec<T> = get_json(self.client, &url).await?;

        if items.len() < self.per_page as usize {
            self.done = true;
        } else {
            self.page += 1;
        }

        Ok(Some(items))
    }

    pub async fn fetch_all(mut self) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        while let Some(items) = self.next_page().await? {
            all_items.extend(items);
        }
        Ok(all_items)
    }
}
