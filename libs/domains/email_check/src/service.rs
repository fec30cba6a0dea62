//! Email check service - format check and MX lookup

use std::sync::Arc;
use tracing::instrument;

use crate::error::{EmailCheckError, EmailCheckResult};
use crate::format;
use crate::models::{DnsCheckResult, EmailFormatResult};
use crate::resolver::{MxLookupFailure, MxResolver};

pub struct EmailCheckService<R: MxResolver> {
    resolver: Arc<R>,
}

impl<R: MxResolver> EmailCheckService<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Local syntax check; never touches the resolver
    pub fn check_format(&self, email: &str) -> EmailCheckResult<EmailFormatResult> {
        format::check_format(email)
    }

    /// One MX query for the address's domain.
    ///
    /// Missing domains, domains without MX records, timeouts and malformed
    /// addresses are reported in the returned message. Only other resolver
    /// failures surface as [`EmailCheckError::Unexpected`].
    #[instrument(skip(self))]
    pub async fn check_dns(&self, email: &str) -> EmailCheckResult<DnsCheckResult> {
        let domain = match format::split_address(email) {
            Some((_, domain)) if !domain.is_empty() && !domain.contains('@') => domain,
            _ => {
                tracing::debug!("Malformed address, skipping DNS lookup");
                return Ok(DnsCheckResult::new(
                    email,
                    format!("An issue exists with the email `{email}`. Please check the email."),
                ));
            }
        };

        match self.resolver.lookup_mx(domain).await {
            Ok(records) => {
                let preferred = records.into_iter().min_by_key(|mx| mx.preference);
                Ok(match preferred {
                    Some(mx) => DnsCheckResult::new(
                        email,
                        format!("The domain `{domain}` has valid MX records."),
                    )
                    .with_smtp_server(mx.exchange),
                    None => no_mx_records(email, domain),
                })
            }
            Err(MxLookupFailure::NxDomain) => Ok(DnsCheckResult::new(
                email,
                format!("The domain `{domain}` does not exist."),
            )),
            Err(MxLookupFailure::NoRecords) => Ok(no_mx_records(email, domain)),
            Err(MxLookupFailure::Timeout) => {
                tracing::warn!(domain, "MX lookup timed out");
                Ok(DnsCheckResult::new(
                    email,
                    format!("The DNS query for domain `{domain}` timed out."),
                ))
            }
            Err(MxLookupFailure::Other(reason)) => {
                tracing::error!(domain, %reason, "MX lookup failed");
                Err(EmailCheckError::Unexpected(reason))
            }
        }
    }
}

fn no_mx_records(email: &str, domain: &str) -> DnsCheckResult {
    DnsCheckResult::new(email, format!("The domain `{domain}` has no MX records."))
}

impl<R: MxResolver> Clone for EmailCheckService<R> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
        }
    }
}
