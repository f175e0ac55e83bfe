//! PostgREST client for the hosted feed database.
//!
//! Every read is a `GET /rest/v1/<table>` with `select`, `order` and filter
//! query parameters. Query construction is kept separate from transport so
//! the parameters can be checked without a browser.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{BACKEND_KEY, BACKEND_URL, REST_PREFIX};
use crate::core::backend::{Backend, PostQuery, ProductScope};
use crate::core::error::DataError;
use crate::models::{Category, Company, Post, PostType, Product};
use crate::utils::fetch_json;

/// Columns of a company row.
const COMPANY_COLUMNS: &str = "id,slug,name,logo_url,summary";

/// Columns of a product row.
const PRODUCT_COLUMNS: &str = "id,slug,name,company_id";

/// Posts joined with their product and the product's company.
const POST_SELECT: &str = "*,products!inner(id,slug,name,company_id,\
                           companies!inner(id,slug,name,logo_url,summary))";

/// Query parameters of one request.
type Params = Vec<(&'static str, String)>;

/// Client for the hosted REST interface.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
}

impl Default for SupabaseClient {
    fn default() -> Self {
        Self::new(BACKEND_URL, BACKEND_KEY)
    }
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Full request URL for a table read.
    pub fn table_url(&self, table: &str, params: &[(&'static str, String)]) -> Result<Url, DataError> {
        let base = format!(
            "{}{}/{}",
            self.base_url.trim_end_matches('/'),
            REST_PREFIX,
            table
        );
        let mut url = Url::parse(&base).map_err(|e| DataError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        Ok(url)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(&'static str, String)],
    ) -> Result<Vec<T>, DataError> {
        let url = self.table_url(table, params)?;
        let bearer = format!("Bearer {}", self.api_key);
        let headers = [
            ("apikey", self.api_key.as_str()),
            ("Authorization", bearer.as_str()),
            ("Accept", "application/json"),
        ];
        Ok(fetch_json(url.as_str(), &headers).await?)
    }

    /// First row of a filtered read, or `NotFound`.
    async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        mut params: Params,
        kind: &'static str,
        key: String,
    ) -> Result<T, DataError> {
        params.push(("limit", "1".to_string()));
        self.select::<T>(table, &params)
            .await?
            .into_iter()
            .next()
            .ok_or(DataError::NotFound { kind, key })
    }
}

// =============================================================================
// Query Parameters
// =============================================================================

fn eq(value: impl ToString) -> String {
    format!("eq.{}", value.to_string())
}

/// Parameters of a post listing.
pub fn post_params(query: &PostQuery) -> Params {
    let mut params: Params = vec![
        ("select", POST_SELECT.to_string()),
        ("order", "date.desc,id.desc".to_string()),
        ("offset", query.offset.to_string()),
        ("limit", query.limit.to_string()),
    ];

    match &query.scope {
        ProductScope::All => {}
        ProductScope::One(id) => params.push(("product_id", eq(id))),
        ProductScope::AnyOf(ids) => {
            let list = ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            params.push(("product_id", format!("in.({})", list)));
        }
    }
    if let Some(category) = query.category {
        params.push(("category", eq(category)));
    }
    if let Some(post_type) = query.post_type {
        params.push(("post_type", eq(post_type)));
    }
    params
}

/// Parameters of a company listing, optionally filtered on one column.
pub fn company_params(filter: Option<(&'static str, String)>) -> Params {
    let mut params: Params = vec![
        ("select", COMPANY_COLUMNS.to_string()),
        ("order", "name.asc".to_string()),
    ];
    params.extend(filter);
    params
}

/// Parameters of a product listing, optionally filtered on one column.
pub fn product_params(filter: Option<(&'static str, String)>) -> Params {
    let mut params: Params = vec![
        ("select", PRODUCT_COLUMNS.to_string()),
        ("order", "name.asc".to_string()),
    ];
    params.extend(filter);
    params
}

// =============================================================================
// Row Types
// =============================================================================

/// A post row with its embedded product.
#[derive(Debug, Deserialize)]
struct PostRow {
    id: i64,
    title: String,
    post_url: String,
    #[serde(default)]
    summary: Option<String>,
    category: Category,
    post_type: PostType,
    date: String,
    product_id: i64,
    products: ProductRow,
}

/// Embedded product with its embedded company.
#[derive(Debug, Deserialize)]
struct ProductRow {
    id: i64,
    slug: String,
    name: String,
    company_id: i64,
    companies: Company,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        let ProductRow {
            id,
            slug,
            name,
            company_id,
            companies,
        } = row.products;

        Self {
            id: row.id,
            title: row.title,
            post_url: row.post_url,
            summary: row.summary,
            category: row.category,
            post_type: row.post_type,
            date: row.date,
            product_id: row.product_id,
            product: Product {
                id,
                slug,
                name,
                company_id,
            },
            company: companies,
        }
    }
}

// =============================================================================
// Backend Implementation
// =============================================================================

impl Backend for SupabaseClient {
    async fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, DataError> {
        let rows: Vec<PostRow> = self.select("posts", &post_params(query)).await?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn list_companies(&self) -> Result<Vec<Company>, DataError> {
        self.select("companies", &company_params(None)).await
    }

    async fn list_products(&self, company_id: Option<i64>) -> Result<Vec<Product>, DataError> {
        let filter = company_id.map(|id| ("company_id", eq(id)));
        self.select("products", &product_params(filter)).await
    }

    async fn company_by_slug(&self, slug: &str) -> Result<Company, DataError> {
        let params = company_params(Some(("slug", eq(slug))));
        self.select_one("companies", params, "company", slug.to_string())
            .await
    }

    async fn company_by_id(&self, id: i64) -> Result<Company, DataError> {
        let params = company_params(Some(("id", eq(id))));
        self.select_one("companies", params, "company", id.to_string())
            .await
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Product, DataError> {
        let params = product_params(Some(("slug", eq(slug))));
        self.select_one("products", params, "product", slug.to_string())
            .await
    }
}
