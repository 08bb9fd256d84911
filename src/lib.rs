//! Concurrent walkers for ordered trees and link graphs.
//!
//! (if you're looking for homogeneous data parallelism, check out [`rayon`] instead;
//! if you're looking for crawling real websites over HTTP, bring your own transport:
//! this library performs no I/O)
//!
//! # Overview
//!
//! This library features two halves that share one concern: coordinating
//! concurrently running tasks safely.
//!
//! ## Streaming and comparing trees
//!
//! [`stream`] walks a [`Tree`] in-order and sends every value into a channel as it is
//! produced. [`same`] runs two such walks concurrently and decides whether two trees
//! contain the same value sequence by pairing up the streams value-by-value
//! ([`lockstep`]), exiting on the first mismatch without ever materializing either
//! sequence.
//!
//! ## Exploring link graphs
//!
//! [`crawl`] starts from one URL and fans out one concurrent task per discovered
//! link, up to a fixed depth. A shared [`VisitedSet`] guarantees that every URL is
//! fetched at most once even when many branches discover it simultaneously, and a
//! counting [`TaskGroup`] detects when the whole dynamically-sized exploration has
//! finished. Pages are resolved through the [`Fetcher`] capability, and progress is
//! observable through the [`Report`] sink.
//!
//! # Usage
//!
//! Comparing two trees that hold the same values in different shapes:
//!
//! ```
//! use wander::{same, Tree};
//!
//! let mut a = Tree::leaf(8);
//! for value in [3, 13, 5, 21] {
//!     a.insert(value);
//! }
//! let mut b = Tree::leaf(21);
//! for value in [13, 3, 8, 5] {
//!     b.insert(value);
//! }
//!
//! assert!(same(&a, &b));
//! ```
//!
//! Exploring a small in-memory site:
//!
//! ```
//! use std::sync::Arc;
//! use wander::{crawl, Collector, Event, StaticFetcher};
//!
//! let site = StaticFetcher::new()
//!     .page("/", "index", &["/a", "/b"])
//!     .page("/a", "page a", &["/", "/b"])
//!     .page("/b", "page b", &[]);
//!
//! let report = Arc::new(Collector::new());
//! crawl("/", 8, site, report.clone());
//!
//! let mut urls: Vec<String> = report
//!     .events()
//!     .into_iter()
//!     .map(|event| match event {
//!         Event::Page { url, .. } => url,
//!         Event::Failed { url, .. } => url,
//!     })
//!     .collect();
//! urls.sort();
//! assert_eq!(urls, ["/", "/a", "/b"]);
//! ```
//!
//! [`rayon`]: https://crates.io/crates/rayon

mod crawl;
mod fetch;
mod join;
mod report;
mod tree;
mod visited;
mod walk;

pub use crate::crawl::crawl;
pub use crate::fetch::{Fetcher, NotFound, Page, StaticFetcher};
pub use crate::join::{Task, TaskGroup};
pub use crate::report::{Collector, Event, Report};
pub use crate::tree::Tree;
pub use crate::visited::VisitedSet;
pub use crate::walk::{lockstep, same, stream};
