//! # Utsav Common Library
//!
//! Shared code for the festival archive front end including:
//! - Year record data model and boundary normalization
//! - Financial aggregation (contributions, expenses, remaining balance)
//! - Media flattening for the unified modal viewer
//! - Home-page cross-year media feed
//! - Media viewer state machine
//! - Gallery paging rules
//! - Backend REST client and wire types
//! - Configuration loading

pub mod api;
pub mod config;
pub mod error;
pub mod finance;
pub mod flatten;
pub mod home;
pub mod media;
pub mod model;
pub mod paging;
pub mod viewer;

pub use error::{Error, Result};
pub use media::MediaKind;
pub use model::{normalize, YearRecord};
