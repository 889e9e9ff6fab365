//! steady-auth
//!
//! Cognito session authentication: sign-up, sign-in, token refresh, and JWT
//! validation for the API middleware.

pub mod client;
pub mod error;
pub mod flows;
pub mod jwt;
