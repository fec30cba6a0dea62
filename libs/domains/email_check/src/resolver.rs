//! MX lookup seam and its hickory-backed implementation.

use async_trait::async_trait;
use core_config::dns::DnsConfig;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use std::time::Duration;
use thiserror::Error;

use crate::models::MxRecord;

/// Why an MX lookup produced no records
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MxLookupFailure {
    /// NXDOMAIN
    #[error("domain does not exist")]
    NxDomain,

    /// The name resolves but carries no MX records
    #[error("no MX records")]
    NoRecords,

    #[error("query timed out")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

/// A single MX query for a domain
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MxResolver: Send + Sync {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, MxLookupFailure>;
}

/// [`MxResolver`] over hickory's tokio resolver.
///
/// Every call issues exactly one query bounded by the configured timeout,
/// see [`resolver_opts`].
#[derive(Clone)]
pub struct HickoryMxResolver {
    resolver: TokioAsyncResolver,
    timeout: Duration,
}

impl HickoryMxResolver {
    /// Uses the system resolver configuration, falling back to hickory's
    /// defaults when it cannot be read.
    pub fn new(config: &DnsConfig) -> Self {
        let (resolver_config, system_opts) = match hickory_resolver::system_conf::read_system_conf()
        {
            Ok(conf) => conf,
            Err(e) => {
                tracing::warn!(error = %e, "Unable to read system DNS configuration, using defaults");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };

        Self {
            resolver: TokioAsyncResolver::tokio(
                resolver_config,
                resolver_opts(system_opts, config),
            ),
            timeout: config.timeout,
        }
    }
}

/// Options for a single query: one attempt, one name server at a time, no
/// cache, and the configured per-query timeout.
pub fn resolver_opts(mut opts: ResolverOpts, config: &DnsConfig) -> ResolverOpts {
    opts.timeout = config.timeout;
    opts.attempts = 1;
    opts.num_concurrent_reqs = 1;
    opts.cache_size = 0;
    opts
}

#[async_trait]
impl MxResolver for HickoryMxResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, MxLookupFailure> {
        // Fully qualified, so the search list never adds extra queries
        let name = if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{domain}.")
        };

        let lookup = tokio::time::timeout(self.timeout, self.resolver.mx_lookup(name))
            .await
            .map_err(|_| MxLookupFailure::Timeout)?
            .map_err(|e| classify(&e))?;

        Ok(lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), mx.exchange().to_string()))
            .collect())
    }
}

fn classify(err: &ResolveError) -> MxLookupFailure {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                MxLookupFailure::NxDomain
            } else {
                MxLookupFailure::NoRecords
            }
        }
        ResolveErrorKind::Timeout => MxLookupFailure::Timeout,
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            MxLookupFailure::Timeout
        }
        _ => MxLookupFailure::Other(err.to_string()),
    }
}
