// Public job browsing: listing/search, detail, filter facets, skills directory.

pub mod handlers;
pub mod search;
