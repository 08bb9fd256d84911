use std::{collections::HashMap, error::Error, fmt, sync::Arc};

/// A capability that resolves a URL to its content and outgoing links.
///
/// The crawler only ever talks to this interface and performs no I/O of its own. An
/// implementation backed by a real transport may block in [`Fetcher::fetch`] for as
/// long as it needs to, since every fetch runs on its own task.
pub trait Fetcher {
    /// Resolves `url`, returning its payload and the URLs discovered in it.
    fn fetch(&self, url: &str) -> Result<Page, NotFound>;
}

impl<F: Fetcher> Fetcher for Arc<F> {
    fn fetch(&self, url: &str) -> Result<Page, NotFound> {
        (**self).fetch(url)
    }
}

/// The result of successfully fetching one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The fetched payload.
    pub body: String,
    /// The URLs discovered in the page, in document order.
    pub links: Vec<String>,
}

/// An error returned by [`Fetcher::fetch`] for a URL the fetcher cannot resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    url: String,
}

impl NotFound {
    /// Creates a `NotFound` error for `url`.
    pub fn new<U: Into<String>>(url: U) -> Self {
        Self { url: url.into() }
    }

    /// Returns the URL that could not be resolved.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Error for NotFound {}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not found: {}", self.url)
    }
}

/// A [`Fetcher`] serving a fixed set of pages from memory.
///
/// ```
/// use wander::{Fetcher, StaticFetcher};
///
/// let fetcher = StaticFetcher::new()
///     .page("/", "index", &["/about"])
///     .page("/about", "about us", &[]);
///
/// assert_eq!(fetcher.fetch("/").unwrap().links, ["/about"]);
/// assert!(fetcher.fetch("/missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, Page>,
}

impl StaticFetcher {
    /// Creates a fetcher with no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page, replacing any previous page under the same URL.
    pub fn page(mut self, url: &str, body: &str, links: &[&str]) -> Self {
        self.pages.insert(
            url.to_string(),
            Page {
                body: body.to_string(),
                links: links.iter().map(|link| link.to_string()).collect(),
            },
        );
        self
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<Page, NotFound> {
        self.pages.get(url).cloned().ok_or_else(|| NotFound::new(url))
    }
}
