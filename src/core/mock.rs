//! In-memory backend for tests.
//!
//! Filters, orders and paginates like the remote store. Failures can be
//! injected, and post listings can be held back for a number of polls to
//! reproduce overlapping loads.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use chrono::{Days, NaiveDate};

use crate::core::backend::{Backend, PostQuery, ProductScope};
use crate::core::error::{DataError, FetchError};
use crate::models::{Category, Company, Post, PostType, Product};

/// Number of posts in [`MockBackend::seeded`].
pub const SEEDED_POSTS: i64 = 130;

#[derive(Default)]
pub struct MockBackend {
    companies: Vec<Company>,
    products: Vec<Product>,
    posts: Vec<Post>,
    fail_posts: Cell<bool>,
    fail_catalog: Cell<bool>,
    fail_products: Cell<bool>,
    post_delays: RefCell<VecDeque<u32>>,
    post_listings: Cell<usize>,
    product_listings: Cell<usize>,
}

impl MockBackend {
    pub fn new(companies: Vec<Company>, products: Vec<Product>, posts: Vec<Post>) -> Self {
        Self {
            companies,
            products,
            posts,
            ..Default::default()
        }
    }

    /// Fixture catalog:
    ///
    /// - Acme (1, `acme`): Rocket (10), Anvil (11)
    /// - Globex (2, `globex`): Hammock (12)
    /// - Initech (3, `initech`): no products
    ///
    /// Posts 1..=130: every third post belongs to Hammock, the rest
    /// alternate between Rocket and Anvil. Consecutive pairs share a date.
    pub fn seeded() -> Self {
        let companies = vec![
            Company {
                id: 1,
                slug: "acme".to_string(),
                name: "Acme".to_string(),
                logo_url: Some("https://example.com/acme.png".to_string()),
                summary: Some("Makers of everything.".to_string()),
            },
            Company {
                id: 2,
                slug: "globex".to_string(),
                name: "Globex".to_string(),
                logo_url: None,
                summary: None,
            },
            Company {
                id: 3,
                slug: "initech".to_string(),
                name: "Initech".to_string(),
                logo_url: None,
                summary: Some("No products yet.".to_string()),
            },
        ];
        let products = vec![
            product(10, "rocket", "Rocket", 1),
            product(11, "anvil", "Anvil", 1),
            product(12, "hammock", "Hammock", 2),
        ];

        let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid fixture date");
        let posts = (1..=SEEDED_POSTS)
            .map(|id| {
                let product_id = match id {
                    _ if id % 3 == 0 => 12,
                    _ if id % 2 == 0 => 10,
                    _ => 11,
                };
                let day = start + Days::new((id as u64 + 1) / 2);
                let product = products
                    .iter()
                    .find(|p| p.id == product_id)
                    .cloned()
                    .unwrap_or_else(|| products[0].clone());
                let company = companies
                    .iter()
                    .find(|c| c.id == product.company_id)
                    .cloned()
                    .unwrap_or_else(|| companies[0].clone());
                Post {
                    id,
                    title: format!("Post {}", id),
                    post_url: format!("https://example.com/posts/{}", id),
                    summary: (id % 4 != 0).then(|| format!("Summary of post {}", id)),
                    category: Category::ALL[id as usize % Category::ALL.len()],
                    post_type: PostType::ALL[id as usize % PostType::ALL.len()],
                    date: day.format("%Y-%m-%d").to_string(),
                    product_id,
                    product,
                    company,
                }
            })
            .collect();

        Self::new(companies, products, posts)
    }

    /// Make post listings fail until reset.
    pub fn fail_posts(&self, fail: bool) {
        self.fail_posts.set(fail);
    }

    /// Make company/product listings and lookups fail until reset.
    pub fn fail_catalog(&self, fail: bool) {
        self.fail_catalog.set(fail);
    }

    /// Make product listings alone fail until reset.
    pub fn fail_products(&self, fail: bool) {
        self.fail_products.set(fail);
    }

    /// Hold the next post listing back for `polls` polls before it resolves.
    pub fn delay_next_posts(&self, polls: u32) {
        self.post_delays.borrow_mut().push_back(polls);
    }

    /// Number of post listings served so far.
    pub fn post_listings(&self) -> usize {
        self.post_listings.get()
    }

    /// Number of product listings served so far.
    pub fn product_listings(&self) -> usize {
        self.product_listings.get()
    }

    /// Number of posts belonging to a company.
    pub fn posts_of_company(&self, company_id: i64) -> usize {
        self.posts
            .iter()
            .filter(|p| p.company.id == company_id)
            .count()
    }

    /// Number of posts matching a predicate.
    pub fn count_posts(&self, predicate: impl Fn(&Post) -> bool) -> usize {
        self.posts.iter().filter(|p| predicate(p)).count()
    }

    fn check_catalog(&self) -> Result<(), DataError> {
        if self.fail_catalog.get() {
            Err(FetchError::HttpError(500).into())
        } else {
            Ok(())
        }
    }
}

fn product(id: i64, slug: &str, name: &str, company_id: i64) -> Product {
    Product {
        id,
        slug: slug.to_string(),
        name: name.to_string(),
        company_id,
    }
}

impl Backend for MockBackend {
    async fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, DataError> {
        self.post_listings.set(self.post_listings.get() + 1);
        let delay = self.post_delays.borrow_mut().pop_front().unwrap_or(0);
        Yield(delay).await;

        if self.fail_posts.get() {
            return Err(FetchError::NetworkError("connection reset".to_string()).into());
        }

        let mut matching: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| match &query.scope {
                ProductScope::All => true,
                ProductScope::One(id) => p.product_id == *id,
                ProductScope::AnyOf(ids) => ids.contains(&p.product_id),
            })
            .filter(|p| query.category.is_none_or(|c| p.category == c))
            .filter(|p| query.post_type.is_none_or(|t| p.post_type == t))
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        Ok(matching
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect())
    }

    async fn list_companies(&self) -> Result<Vec<Company>, DataError> {
        self.check_catalog()?;
        let mut companies = self.companies.clone();
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    async fn list_products(&self, company_id: Option<i64>) -> Result<Vec<Product>, DataError> {
        self.product_listings.set(self.product_listings.get() + 1);
        self.check_catalog()?;
        if self.fail_products.get() {
            return Err(FetchError::Timeout.into());
        }
        let mut products: Vec<Product> = self
            .products
            .iter()
            .filter(|p| company_id.is_none_or(|id| p.company_id == id))
            .cloned()
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn company_by_slug(&self, slug: &str) -> Result<Company, DataError> {
        self.check_catalog()?;
        self.companies
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
            .ok_or_else(|| DataError::not_found("company", slug))
    }

    async fn company_by_id(&self, id: i64) -> Result<Company, DataError> {
        self.check_catalog()?;
        self.companies
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| DataError::not_found("company", id))
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Product, DataError> {
        self.check_catalog()?;
        self.products
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or_else(|| DataError::not_found("product", slug))
    }
}

/// Future that stays pending for a number of polls.
struct Yield(u32);

impl Future for Yield {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            Poll::Ready(())
        } else {
            self.0 -= 1;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_ordering() {
        let backend = MockBackend::seeded();
        let posts = backend
            .list_posts(&PostQuery::new(ProductScope::All))
            .await
            .unwrap();
        assert_eq!(posts.len(), 50);
        assert_eq!(posts[0].id, SEEDED_POSTS);
        assert!(posts.windows(2).all(|w| {
            w[0].date > w[1].date || (w[0].date == w[1].date && w[0].id > w[1].id)
        }));
    }

    #[tokio::test]
    async fn test_lookups() {
        let backend = MockBackend::seeded();
        assert_eq!(backend.company_by_slug("acme").await.unwrap().id, 1);
        assert!(backend.product_by_slug("widget").await.unwrap_err().is_not_found());
        let names: Vec<String> = backend
            .list_products(None)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Anvil", "Hammock", "Rocket"]);
    }
}
