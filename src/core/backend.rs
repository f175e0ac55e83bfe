//! Data access layer.
//!
//! [`Backend`] is the seam to the remote record store. The free functions
//! on top of it implement the feed-level query rules: company filters are
//! resolved to product id sets, and detail pages page through every post.

use crate::config::PAGE_SIZE;
use crate::core::error::DataError;
use crate::models::{Category, Company, FilterSelection, Post, PostType, Product};

/// Which products a post query is restricted to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProductScope {
    /// No product restriction.
    #[default]
    All,
    /// Posts of one product.
    One(i64),
    /// Posts of any of these products (a company's catalog).
    AnyOf(Vec<i64>),
}

/// One page of a post listing.
///
/// Results are ordered by date descending, then id descending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostQuery {
    pub scope: ProductScope,
    pub category: Option<Category>,
    pub post_type: Option<PostType>,
    pub offset: usize,
    pub limit: usize,
}

impl PostQuery {
    pub fn new(scope: ProductScope) -> Self {
        Self {
            scope,
            category: None,
            post_type: None,
            offset: 0,
            limit: PAGE_SIZE,
        }
    }

    pub fn page(mut self, offset: usize, limit: usize) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }
}

/// Read operations offered by the remote record store.
///
/// Listings are ordered by the store: posts newest first (ties by id,
/// descending), companies and products by name ascending. Single-record
/// lookups fail with [`DataError::NotFound`] when nothing matches.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, DataError>;

    async fn list_companies(&self) -> Result<Vec<Company>, DataError>;

    /// All products, or only those of `company_id`.
    async fn list_products(&self, company_id: Option<i64>) -> Result<Vec<Product>, DataError>;

    async fn company_by_slug(&self, slug: &str) -> Result<Company, DataError>;

    async fn company_by_id(&self, id: i64) -> Result<Company, DataError>;

    async fn product_by_slug(&self, slug: &str) -> Result<Product, DataError>;
}

/// Resolve the product scope of a filter selection.
///
/// A product filter wins over a company filter. Returns `None` when no post
/// can match: the selected company has no products, or a control holds an
/// unknown value.
pub async fn resolve_scope<B: Backend>(
    backend: &B,
    filters: &FilterSelection,
) -> Result<Option<ProductScope>, DataError> {
    if filters.unmatchable {
        return Ok(None);
    }
    match (filters.product_id, filters.company_id) {
        (Some(product_id), _) => Ok(Some(ProductScope::One(product_id))),
        (None, Some(company_id)) => {
            let products = backend.list_products(Some(company_id)).await?;
            if products.is_empty() {
                Ok(None)
            } else {
                Ok(Some(ProductScope::AnyOf(
                    products.iter().map(|p| p.id).collect(),
                )))
            }
        }
        (None, None) => Ok(Some(ProductScope::All)),
    }
}

/// Fetch one feed page for a filter selection.
pub async fn fetch_posts<B: Backend>(
    backend: &B,
    filters: &FilterSelection,
    offset: usize,
    limit: usize,
) -> Result<Vec<Post>, DataError> {
    let Some(scope) = resolve_scope(backend, filters).await? else {
        return Ok(Vec::new());
    };

    let query = PostQuery {
        category: filters.category,
        post_type: filters.post_type,
        ..PostQuery::new(scope)
    }
    .page(offset, limit);
    backend.list_posts(&query).await
}

/// Fetch every post of a scope by requesting full pages until a short one.
pub async fn fetch_all_posts<B: Backend>(
    backend: &B,
    scope: ProductScope,
) -> Result<Vec<Post>, DataError> {
    if matches!(&scope, ProductScope::AnyOf(ids) if ids.is_empty()) {
        return Ok(Vec::new());
    }

    let mut query = PostQuery::new(scope);
    let mut posts = Vec::new();
    loop {
        let page = backend.list_posts(&query).await?;
        let len = page.len();
        posts.extend(page);
        if len < query.limit {
            return Ok(posts);
        }
        query.offset += len;
    }
}
