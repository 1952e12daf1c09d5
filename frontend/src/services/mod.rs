//! Auth & Analysis service communication.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`api`] - Collaborator traits, the `gloo-net` client and response parsing
//! - [`auth`] - Login / registration workflow
//! - [`upload`] - CSV analysis workflow
//!
//! # Endpoints
//!
//! | Method | Path        | Body                         |
//! |--------|-------------|------------------------------|
//! | POST   | `/token`    | form-encoded username/password |
//! | POST   | `/register` | JSON username/password       |
//! | POST   | `/analyze`  | multipart `file`, bearer auth |

pub mod api;
pub mod auth;
pub mod upload;

pub use api::*;
pub use auth::*;
pub use upload::*;
