//! Networking: REST calls to the catalog API.

pub mod api;
