//! List query parameters

use serde::Serialize;

/// Filter expression that hides drafts
pub const PUBLISHED_ONLY: &str = "draft[equals]false";

/// Order expression for newest-first listings
pub const NEWEST_FIRST: &str = "-publishedAt";

/// Post fields needed by listings that skip the body
pub const SUMMARY_FIELDS: &str = "id,title,description,publishedAt,updatedAt,image,tags,category,draft";

/// Options for a post list request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl PostQuery {
    /// Query used by listings: optionally newest first, drafts hidden in production
    pub fn listing(newest_first: bool, production: bool) -> Self {
        Self {
            orders: newest_first.then(|| NEWEST_FIRST.to_string()),
            filters: draft_filter(production),
            ..Default::default()
        }
    }

    /// Same query, asking only for the fields listings use
    pub fn without_body(self) -> Self {
        Self {
            fields: Some(SUMMARY_FIELDS.to_string()),
            ..self
        }
    }

    /// Whether records returned for this query carry the post body
    pub fn includes_body(&self) -> bool {
        match &self.fields {
            Some(fields) => fields.split(',').any(|f| f.trim() == "content"),
            None => true,
        }
    }

    /// Same query for a single page of results
    pub fn page(&self, offset: usize, limit: usize) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
            ..self.clone()
        }
    }

    /// Key/value pairs for the request URL
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(orders) = &self.orders {
            pairs.push(("orders", orders.clone()));
        }
        if let Some(filters) = &self.filters {
            pairs.push(("filters", filters.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(fields) = &self.fields {
            pairs.push(("fields", fields.clone()));
        }
        pairs
    }
}

/// Filter expression passed downstream for the given mode
pub fn draft_filter(production: bool) -> Option<String> {
    production.then(|| PUBLISHED_ONLY.to_string())
}
