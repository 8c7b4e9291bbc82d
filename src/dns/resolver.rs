use std::future::Future;

use trust_dns_resolver::{
    TokioAsyncResolver,
    error::{ResolveError, ResolveErrorKind},
    lookup::TxtLookup,
    proto::op::ResponseCode,
};

use super::DnsError;

/// The DNS capability consumed by the probes.
///
/// Implementations return the raw record data in answer order. A
/// successful answer that simply has no records of the requested type is
/// an empty `Vec`, not an error.
pub trait LookupRecords {
    /// Mail exchange host names, exactly as returned (trailing dot included).
    fn lookup_mx(&self, name: &str) -> impl Future<Output = Result<Vec<String>, DnsError>> + Send;

    /// One string per TXT record, character-strings concatenated.
    fn lookup_txt(&self, name: &str)
    -> impl Future<Output = Result<Vec<String>, DnsError>> + Send;

    /// SRV target host names.
    fn lookup_srv(&self, name: &str)
    -> impl Future<Output = Result<Vec<String>, DnsError>> + Send;
}

/// [`LookupRecords`] backed by the system resolver configuration.
pub struct SystemResolver {
    inner: TokioAsyncResolver,
}

impl SystemResolver {
    pub fn from_system_conf() -> Result<Self, DnsError> {
        let inner = TokioAsyncResolver::tokio_from_system_conf()?;
        Ok(Self { inner })
    }
}

impl LookupRecords for SystemResolver {
    async fn lookup_mx(&self, name: &str) -> Result<Vec<String>, DnsError> {
        match self.inner.mx_lookup(absolute(name)).await {
            Ok(lookup) => Ok(lookup.iter().map(|mx| mx.exchange().to_utf8()).collect()),
            Err(err) if is_empty_answer(&err) => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        match self.inner.txt_lookup(absolute(name)).await {
            Ok(lookup) => collect_txt_records(name, &lookup),
            Err(err) if is_empty_answer(&err) => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn lookup_srv(&self, name: &str) -> Result<Vec<String>, DnsError> {
        match self.inner.srv_lookup(absolute(name)).await {
            Ok(lookup) => Ok(lookup.iter().map(|srv| srv.target().to_utf8()).collect()),
            Err(err) if is_empty_answer(&err) => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Trailing dot so resolver search domains never apply.
pub(crate) fn absolute(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

fn collect_txt_records(name: &str, lookup: &TxtLookup) -> Result<Vec<String>, DnsError> {
    let mut records = Vec::new();
    for txt in lookup.iter() {
        let mut record = String::new();
        for piece in txt.txt_data().iter() {
            let segment = std::str::from_utf8(&piece[..])
                .map_err(|err| DnsError::txt_data_utf8(name, err))?;
            record.push_str(segment);
        }
        records.push(record);
    }
    Ok(records)
}

// NOERROR sans données: le nom existe, pas d'enregistrement du type demandé
fn is_empty_answer(err: &ResolveError) -> bool {
    matches!(
        err.kind(),
        ResolveErrorKind::NoRecordsFound {
            response_code: ResponseCode::NoError,
            ..
        }
    )
}
