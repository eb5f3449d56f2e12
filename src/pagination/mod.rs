//! Pagination
//!
//! A [`Paginator`] looks at one parsed page and decides whether another page
//! exists and where it lives. The page stream follows that decision and never
//! builds page URLs itself.

mod strategies;
mod types;

pub use strategies::{HasMorePaginator, NoPaginator};
pub use types::{NextPage, PaginationState, Paginator};
