//! UI Components for the sentiment analysis client.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Views
//! - [`LoginView`] - Login / registration form (anonymous sessions)
//! - [`Dashboard`] - Upload and results (authenticated sessions)
//!
//! # Feature Components
//! - [`Header`] - Dashboard navigation with logout
//! - [`UploadSection`] - CSV file upload with drag & drop
//! - [`ResultsSection`] - Sentiment chart and detailed results table
//! - [`ScrollChrome`] - Scroll progress bar and scroll-to-top button

mod dashboard;
mod header;
mod login;
mod results;
mod scroll;
mod upload;

pub use dashboard::*;
pub use header::*;
pub use login::*;
pub use results::*;
pub use scroll::*;
pub use upload::*;
