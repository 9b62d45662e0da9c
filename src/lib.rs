//! Stateless utilities backing user signup flows: random user-facing
//! identifiers and signed, time-bounded email verification tokens.
//!
//! The web layer, persistence, and mail delivery live elsewhere; this
//! crate only generates identifiers, issues tokens, and answers whether
//! a presented token has expired.

pub mod config;
pub mod errors;
pub mod service;
pub mod token;
pub mod userid;

pub use crate::{
    config::Config,
    errors::Error,
    service::VerificationService,
    userid::generate_user_id
};
