use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::{Evidence, LookupError, LookupOptions, lookup_with};
use crate::discovery::{HttpEvidence, SrvFinding, autoconfig_urls, webfinger_url};
use crate::dns::stub::StubResolver;
use crate::dns::{DnsError, DnsErrorKind};
use crate::http::stub::StubFetcher;
use crate::provider::{Provider, Signal};
use crate::validator::{Domain, validate_and_extract_domain};

fn domain(name: &str) -> Domain {
    validate_and_extract_domain(name).unwrap()
}

fn google_resolver() -> StubResolver {
    StubResolver::new()
        .with_mx(
            "example.com",
            ["aspmx.l.google.com.", "alt1.aspmx.l.google.com."],
        )
        .with_txt(
            "example.com",
            ["v=spf1 include:_spf.google.com ~all", "other=1"],
        )
        .with_txt(
            "_dmarc.example.com",
            ["v=DMARC1; p=none; rua=mailto:dmarc@example.com"],
        )
        .with_srv("_imaps._tcp.example.com", ["imap.gmail.com."])
}

fn google_fetcher(d: &Domain) -> StubFetcher {
    let [_, well_known, _] = autoconfig_urls(d);
    StubFetcher::new()
        .with_body(
            &well_known,
            200,
            "<clientConfig><incomingServer><hostname>imap.GOOGLE.com</hostname>",
        )
        .with_error(&webfinger_url(d), crate::http::FetchError::Timeout)
}

#[tokio::test]
async fn aggregates_every_signal_in_display_order() {
    let d = domain("user@example.com");
    let report = lookup_with(
        &google_resolver(),
        &google_fetcher(&d),
        &d,
        &LookupOptions::default(),
        &CancellationToken::new(),
    )
    .await
    .expect("lookup succeeds");

    let order: Vec<Signal> = report.iter().map(|(signal, _)| signal).collect();
    assert_eq!(order, Signal::ALL.to_vec());
    assert!(!report.is_partial());

    let mx = report.get(Signal::Mx).unwrap();
    assert_eq!(mx.guess.label, "Google Workspace");
    assert_eq!(
        mx.evidence,
        Evidence::Mx {
            hosts: vec![
                "alt1.aspmx.l.google.com".to_string(),
                "aspmx.l.google.com".to_string(),
            ]
        }
    );

    assert_eq!(
        report.guess(Signal::Spf).unwrap().label,
        "Google Workspace (SPF)"
    );
    assert_eq!(
        report.guess(Signal::Dmarc).unwrap().label,
        "Unknown or Custom Provider (DMARC)"
    );

    let autoconfig = report.guess(Signal::Autoconfig).unwrap();
    assert_eq!(autoconfig.provider, Some(Provider::Google));
    assert!(autoconfig.label.starts_with("Google Workspace (autoconfig: https://example.com/"));

    assert_eq!(
        report.get(Signal::Srv).unwrap().evidence,
        Evidence::Srv {
            entries: vec![SrvFinding::new("_imaps._tcp.example.com", "imap.gmail.com")]
        }
    );
    assert!(
        report
            .guess(Signal::Srv)
            .unwrap()
            .label
            .starts_with("Mail-related SRV record(s) found, provider unknown:")
    );

    assert_eq!(
        report.guess(Signal::WebFinger).unwrap().label,
        "No response from WebFinger endpoint: timed out"
    );
}

#[tokio::test]
async fn mx_failure_aborts_lookup() {
    let d = domain("nosuchdomain.invalid");
    let resolver = StubResolver::new().with_mx_error(
        "nosuchdomain.invalid",
        DnsError::new(
            DnsErrorKind::NxDomain,
            "no record found for nosuchdomain.invalid",
        ),
    );

    let err = lookup_with(
        &resolver,
        &StubFetcher::new(),
        &d,
        &LookupOptions::default(),
        &CancellationToken::new(),
    )
    .await
    .expect_err("MX failure is fatal");

    assert!(matches!(err, LookupError::Mx(_)));
    assert_eq!(
        err.to_string(),
        "Failed to resolve MX records for nosuchdomain.invalid: no record found for nosuchdomain.invalid"
    );
}

#[tokio::test]
async fn soft_failures_do_not_abort() {
    let d = domain("example.org");
    // MX answers, everything else is missing
    let resolver = StubResolver::new().with_mx("example.org", Vec::<String>::new());

    let report = lookup_with(
        &resolver,
        &StubFetcher::new(),
        &d,
        &LookupOptions::default(),
        &CancellationToken::new(),
    )
    .await
    .expect("soft failures are absorbed");

    assert_eq!(
        report.guess(Signal::Mx).unwrap().label,
        "Unknown or Custom Provider"
    );
    match &report.get(Signal::Spf).unwrap().evidence {
        Evidence::Txt { records } => {
            assert_eq!(records.len(), 1);
            assert!(records[0].starts_with("Error: "));
        }
        other => panic!("unexpected SPF evidence: {other:?}"),
    }
    assert_eq!(
        report.guess(Signal::Autoconfig).unwrap().label,
        "No response from autoconfig/autodiscover endpoints"
    );
    assert_eq!(
        report.guess(Signal::Srv).unwrap().label,
        "No mail-related SRV records found"
    );
    assert!(matches!(
        report.get(Signal::WebFinger).unwrap().evidence,
        Evidence::Http(HttpEvidence::Unavailable { .. })
    ));
}

#[tokio::test]
async fn identical_responses_give_identical_reports() {
    let d = domain("example.com");
    let resolver = google_resolver();
    let fetcher = google_fetcher(&d);
    let options = LookupOptions::default();

    let first = lookup_with(&resolver, &fetcher, &d, &options, &CancellationToken::new())
        .await
        .unwrap();
    let second = lookup_with(&resolver, &fetcher, &d, &options, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn pre_cancelled_token_marks_every_signal_cancelled() {
    let d = domain("example.com");
    let cancel = CancellationToken::new();
    cancel.cancel();

    let report = lookup_with(
        &google_resolver(),
        &google_fetcher(&d),
        &d,
        &LookupOptions::default(),
        &cancel,
    )
    .await
    .expect("cancellation is not an error");

    assert!(report.is_partial());
    for (signal, entry) in report.iter() {
        assert!(entry.is_cancelled(), "{signal} not cancelled");
        assert!(entry.guess.label.starts_with("Lookup cancelled"));
    }
}

#[tokio::test(start_paused = true)]
async fn deadline_cancels_hung_probes_only() {
    let d = domain("example.com");
    let [autoconfig, well_known, autodiscover] = autoconfig_urls(&d);
    let fetcher = StubFetcher::new()
        .with_error(&autoconfig, crate::http::FetchError::Timeout)
        .with_hang(&well_known)
        .with_hang(&autodiscover)
        .with_body(&webfinger_url(&d), 200, "{\"links\":[]}");
    let options = LookupOptions::default().with_deadline_ms(Some(2_000));

    let started = tokio::time::Instant::now();
    let report = lookup_with(
        &google_resolver(),
        &fetcher,
        &d,
        &options,
        &CancellationToken::new(),
    )
    .await
    .expect("partial report");

    assert!(started.elapsed() >= Duration::from_millis(2_000));
    assert!(report.is_partial());
    assert!(report.get(Signal::Autoconfig).unwrap().is_cancelled());
    assert_eq!(
        report.guess(Signal::Mx).unwrap().label,
        "Google Workspace"
    );
    assert_eq!(
        report.guess(Signal::WebFinger).unwrap().label,
        "WebFinger present but provider unknown"
    );
    // a hung autoconfig endpoint stops the walk: the last URL is never tried
    assert_eq!(fetcher.requested().iter().filter(|u| **u == autodiscover).count(), 0);
}

#[tokio::test(start_paused = true)]
async fn mx_failure_does_not_wait_for_hung_http_probes() {
    let d = domain("nosuchdomain.invalid");
    let [autoconfig, well_known, autodiscover] = autoconfig_urls(&d);
    let fetcher = StubFetcher::new()
        .with_hang(&autoconfig)
        .with_hang(&well_known)
        .with_hang(&autodiscover)
        .with_hang(&webfinger_url(&d));

    let started = tokio::time::Instant::now();
    let outcome = tokio::time::timeout(
        Duration::from_secs(3_600),
        lookup_with(
            &StubResolver::new(),
            &fetcher,
            &d,
            &LookupOptions::default(),
            &CancellationToken::new(),
        ),
    )
    .await
    .expect("MX error returned without waiting on HTTP");

    assert!(matches!(outcome, Err(LookupError::Mx(_))));
    assert_eq!(started.elapsed(), Duration::ZERO);
}
