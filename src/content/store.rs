//! In-memory post store and its TOML catalog format.
//!
//! ```toml
//! [[category]]
//! title = "Heart Health"
//! description = "Cardiovascular health after 40"
//!
//! [[post]]
//! title = "Understanding Heart Health After 40"
//! slug = "understanding-heart-health-after-40"
//! excerpt = "Learn about the key factors..."
//! category = "Heart Health"
//! date = "March 15, 2025"
//! ```
//!
//! Categories referenced by posts but not declared are derived from the
//! post's category title.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use super::{Category, Post, PostDetail, PostSource, RELATED_LIMIT};
use crate::utils::date::DateTimeUtc;
use crate::utils::slug::slugify;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read post catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid post catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("post '{slug}' has an unrecognized date '{date}'")]
    InvalidDate { slug: String, date: String },

    #[error("duplicate post slug '{0}'")]
    DuplicateSlug(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCatalog {
    #[serde(rename = "post")]
    posts: Vec<RawPost>,
    #[serde(rename = "category")]
    categories: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawPost {
    id: Option<String>,
    title: String,
    slug: String,
    #[serde(default)]
    excerpt: String,
    body: Option<String>,
    category: String,
    date: String,
    #[serde(alias = "main-image")]
    image: Option<String>,
    author: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    id: Option<String>,
    title: String,
    slug: Option<String>,
    description: Option<String>,
}

impl RawPost {
    fn into_post(self) -> Result<Post, CatalogError> {
        let Some(published) = DateTimeUtc::parse(&self.date) else {
            return Err(CatalogError::InvalidDate {
                slug: self.slug,
                date: self.date,
            });
        };
        Ok(Post {
            id: self.id.unwrap_or_else(|| self.slug.clone()),
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            body: self.body,
            category: self.category,
            category_slug: String::new(),
            published,
            main_image: self.image,
            author: self.author,
        })
    }
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        let slug = raw.slug.unwrap_or_else(|| slugify(&raw.title));
        Self {
            id: raw.id.unwrap_or_else(|| slug.clone()),
            title: raw.title,
            slug,
            description: raw.description,
        }
    }
}

/// Posts indexed by slug, kept newest first.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    by_slug: FxHashMap<String, usize>,
    categories: Vec<Category>,
}

impl PostStore {
    /// Build a store, deriving missing categories and filling in each
    /// post's category slug.
    pub fn new(mut posts: Vec<Post>, mut categories: Vec<Category>) -> Result<Self, CatalogError> {
        for post in &posts {
            if !categories.iter().any(|c| c.title == post.category) {
                let slug = slugify(&post.category);
                categories.push(Category {
                    id: slug.clone(),
                    title: post.category.clone(),
                    slug,
                    description: None,
                });
            }
        }
        categories.sort_by(|a, b| a.title.cmp(&b.title));

        let slugs: FxHashMap<&str, &str> = categories
            .iter()
            .map(|c| (c.title.as_str(), c.slug.as_str()))
            .collect();
        for post in &mut posts {
            if let Some(slug) = slugs.get(post.category.as_str()) {
                post.category_slug = (*slug).to_owned();
            }
        }

        // Stable sort: equal dates keep catalog order.
        posts.sort_by(|a, b| b.published.cmp(&a.published));

        let mut by_slug = FxHashMap::default();
        for (i, post) in posts.iter().enumerate() {
            if by_slug.insert(post.slug.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSlug(post.slug.clone()));
            }
        }

        Ok(Self {
            posts,
            by_slug,
            categories,
        })
    }

    /// Parse a TOML catalog.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(content)?;
        let posts = raw
            .posts
            .into_iter()
            .map(RawPost::into_post)
            .collect::<Result<Vec<_>, _>>()?;
        let categories = raw.categories.into_iter().map(Category::from).collect();
        Self::new(posts, categories)
    }

    /// Load a TOML catalog from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn get(&self, slug: &str) -> Option<&Post> {
        self.by_slug.get(slug).map(|&i| &self.posts[i])
    }
}

/// A post as listings carry it, without the body.
fn listing(post: &Post) -> Post {
    Post {
        body: None,
        ..post.clone()
    }
}

impl PostSource for PostStore {
    fn all_posts(&self) -> Vec<Post> {
        self.posts.iter().map(listing).collect()
    }

    fn post_by_slug(&self, slug: &str) -> Option<PostDetail> {
        let post = self.get(slug)?;
        let related = self
            .posts
            .iter()
            .filter(|p| p.category_slug == post.category_slug && p.slug != post.slug)
            .take(RELATED_LIMIT)
            .map(listing)
            .collect();
        Some(PostDetail {
            post: post.clone(),
            related,
        })
    }

    fn posts_by_category(&self, category_slug: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.category_slug == category_slug)
            .map(listing)
            .collect()
    }

    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }
}
