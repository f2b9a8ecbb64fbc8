// src/specs/mod.rs
//! Page-specific extraction. A spec knows where the ground truth lives in
//! one page's markup and how to pull it out with the `core::html` helpers;
//! fetching and cross-player merging live elsewhere.

pub mod tasks;
