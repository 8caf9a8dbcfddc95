//! HTTP client for a microCMS-style REST API

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

use super::{
    BlogPost, CategoryRecord, CmsClient, CmsError, ListResponse, PostQuery, Result, TagRecord,
};
use crate::config::CmsConfig;

const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

/// CMS client over HTTP
pub struct HttpClient {
    client: Client,
    api_base: Url,
    api_key: String,
    blog_endpoint: String,
    category_endpoint: String,
    tag_endpoint: String,
    page_size: usize,
}

impl HttpClient {
    /// Create a client from the `cms` config section
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let origin = config.origin().ok_or_else(|| {
            CmsError::Config("cms.service_domain or cms.base_url must be set".to_string())
        })?;
        let api_key = config.resolve_api_key().ok_or_else(|| {
            CmsError::Config(format!(
                "no API key: set cms.api_key or the {} environment variable",
                config.api_key_env
            ))
        })?;

        let api_base = Url::parse(&format!("{}/api/v1", origin))
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| CmsError::Config(format!("invalid CMS origin {:?}", origin)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base,
            api_key,
            blog_endpoint: config.blog_endpoint.clone(),
            category_endpoint: config.category_endpoint.clone(),
            tag_endpoint: config.tag_endpoint.clone(),
            page_size: config.page_size.clamp(1, 100),
        })
    }

    /// API URL with each segment appended and percent-encoded
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| CmsError::Config(format!("invalid CMS origin {}", self.api_base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        pairs: &[(&'static str, String)],
    ) -> Result<T> {
        tracing::debug!("GET {} {:?}", url, pairs);
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(pairs)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CmsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &PostQuery,
    ) -> Result<ListResponse<T>> {
        let url = self.endpoint_url(&[endpoint])?;
        if query.limit.is_some() {
            return self.get_json(url, &query.to_pairs()).await;
        }

        collect_pages(query, self.page_size, |page| {
            let url = url.clone();
            async move { self.get_json(url, &page.to_pairs()).await }
        })
        .await
    }
}

/// Fetch consecutive pages until `total_count` records are collected
pub(crate) async fn collect_pages<T, F, Fut>(
    query: &PostQuery,
    page_size: usize,
    mut fetch: F,
) -> Result<ListResponse<T>>
where
    F: FnMut(PostQuery) -> Fut,
    Fut: Future<Output = Result<ListResponse<T>>>,
{
    let start = query.offset.unwrap_or(0);
    let mut contents = Vec::new();
    let mut total_count = 0;

    loop {
        let page = fetch(query.page(start + contents.len(), page_size)).await?;
        total_count = page.total_count;
        let received = page.contents.len();
        contents.extend(page.contents);

        if received == 0 || start + contents.len() >= total_count {
            break;
        }
    }

    Ok(ListResponse {
        total_count,
        offset: start,
        limit: contents.len(),
        contents,
    })
}

#[async_trait]
impl CmsClient for HttpClient {
    async fn get_blog_posts(&self, query: &PostQuery) -> Result<ListResponse<BlogPost>> {
        let list = self.get_list(&self.blog_endpoint, query).await?;
        tracing::debug!("Fetched {} of {} posts", list.contents.len(), list.total_count);
        Ok(list)
    }

    async fn get_blog_post(&self, id: &str) -> Result<BlogPost> {
        let url = self.endpoint_url(&[self.blog_endpoint.as_str(), id])?;
        match self.get_json::<BlogPost>(url, &[]).await {
            Err(CmsError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(CmsError::NotFound(id.to_string()))
            }
            other => other,
        }
    }

    async fn get_categories(&self) -> Result<Vec<CategoryRecord>> {
        let list = self
            .get_list(&self.category_endpoint, &PostQuery::default())
            .await?;
        Ok(list.contents)
    }

    async fn get_tags(&self) -> Result<Vec<TagRecord>> {
        let list = self
            .get_list(&self.tag_endpoint, &PostQuery::default())
            .await?;
        Ok(list.contents)
    }
}
