use std::collections::HashMap;

use super::{DnsError, DnsErrorKind, LookupRecords};

type Answers = HashMap<String, Result<Vec<String>, DnsError>>;

/// In-memory resolver for tests. Unknown names answer NXDOMAIN.
#[derive(Default)]
pub(crate) struct StubResolver {
    mx: Answers,
    txt: Answers,
    srv: Answers,
}

impl StubResolver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_mx<I, S>(mut self, name: &str, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mx.insert(normalize_name(name), Ok(collect(hosts)));
        self
    }

    pub(crate) fn with_mx_error(mut self, name: &str, err: DnsError) -> Self {
        self.mx.insert(normalize_name(name), Err(err));
        self
    }

    pub(crate) fn with_txt<I, S>(mut self, name: &str, records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.txt.insert(normalize_name(name), Ok(collect(records)));
        self
    }

    pub(crate) fn with_txt_error(mut self, name: &str, err: DnsError) -> Self {
        self.txt.insert(normalize_name(name), Err(err));
        self
    }

    pub(crate) fn with_srv<I, S>(mut self, name: &str, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.srv.insert(normalize_name(name), Ok(collect(targets)));
        self
    }

    fn answer(answers: &Answers, name: &str) -> Result<Vec<String>, DnsError> {
        answers
            .get(&normalize_name(name))
            .cloned()
            .unwrap_or_else(|| Err(nxdomain(name)))
    }
}

impl LookupRecords for StubResolver {
    async fn lookup_mx(&self, name: &str) -> Result<Vec<String>, DnsError> {
        Self::answer(&self.mx, name)
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        Self::answer(&self.txt, name)
    }

    async fn lookup_srv(&self, name: &str) -> Result<Vec<String>, DnsError> {
        Self::answer(&self.srv, name)
    }
}

pub(crate) fn nxdomain(name: &str) -> DnsError {
    DnsError::new(
        DnsErrorKind::NxDomain,
        format!("no record found for {}", normalize_name(name)),
    )
}

fn collect<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

fn normalize_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}
