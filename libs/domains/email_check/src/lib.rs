//! Email Check Domain
//!
//! Two independent checks on an email address:
//! - a local length and syntax check ([`format::check_format`])
//! - a single MX lookup for the address's domain ([`EmailCheckService::check_dns`])
//!
//! DNS outcomes such as a missing domain, a domain without MX records or a
//! timeout are returned as data. Only unclassified resolver failures become
//! errors.
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::dns::DnsConfig;
//! use domain_email_check::{handlers, EmailCheckService, HickoryMxResolver};
//!
//! let resolver = HickoryMxResolver::new(&DnsConfig::default());
//! let router: axum::Router = handlers::router(EmailCheckService::new(resolver));
//! ```

pub mod error;
pub mod format;
pub mod handlers;
pub mod models;
pub mod resolver;
pub mod service;

pub use error::{EmailCheckError, EmailCheckResult};
pub use format::check_format;
pub use handlers::ApiDoc;
pub use models::{DnsCheckRequest, DnsCheckResult, EmailFormatRequest, EmailFormatResult, MxRecord};
pub use resolver::{HickoryMxResolver, MxLookupFailure, MxResolver};
pub use service::EmailCheckService;
