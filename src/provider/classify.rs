use crate::discovery::{HttpEvidence, SrvFinding};

use super::table::match_provider;
use super::{Provider, ProviderGuess, Signal};

const UNKNOWN: &str = "Unknown or Custom Provider";

/// MX hosts, in the order given (the probe sorts them).
pub fn classify_mx(hosts: &[String]) -> ProviderGuess {
    classify_records(Signal::Mx, hosts)
}

/// SPF records in DNS answer order.
pub fn classify_spf(records: &[String]) -> ProviderGuess {
    classify_records(Signal::Spf, records)
}

/// `_dmarc` TXT records in DNS answer order.
pub fn classify_dmarc(records: &[String]) -> ProviderGuess {
    classify_records(Signal::Dmarc, records)
}

// premier couple (élément, règle) trouvé
fn classify_records(signal: Signal, items: &[String]) -> ProviderGuess {
    for item in items {
        if let Some(provider) = match_provider(signal, item) {
            return ProviderGuess::matched(signal, provider, record_label(signal, provider), item);
        }
    }
    ProviderGuess::unknown(signal, unknown_record_label(signal))
}

fn record_label(signal: Signal, provider: Provider) -> String {
    match signal {
        Signal::Mx => provider.name().to_string(),
        _ => format!("{} ({})", provider.name(), signal.tag()),
    }
}

fn unknown_record_label(signal: Signal) -> String {
    match signal {
        Signal::Mx => UNKNOWN.to_string(),
        _ => format!("{UNKNOWN} ({})", signal.tag()),
    }
}

/// Body is expected lower-cased already.
pub fn classify_autoconfig(evidence: &HttpEvidence) -> ProviderGuess {
    let signal = Signal::Autoconfig;
    match evidence {
        HttpEvidence::Response { url, body_snippet } => match match_provider(signal, body_snippet)
        {
            Some(provider) => {
                let kind = if provider == Provider::Microsoft {
                    "autodiscover"
                } else {
                    "autoconfig"
                };
                let label = format!("{} ({kind}: {url})", provider.name());
                ProviderGuess::matched(signal, provider, label, url)
            }
            None => ProviderGuess::unknown(
                signal,
                format!("Autoconfig present but provider unknown: {url}"),
            )
            .with_detail(url),
        },
        HttpEvidence::Unavailable { .. } => ProviderGuess::unknown(
            signal,
            "No response from autoconfig/autodiscover endpoints",
        ),
    }
}

/// Findings are scanned in discovery order. Keywords are matched against
/// the whole `service → target` entry, so the service name counts too.
pub fn classify_srv(findings: &[SrvFinding]) -> ProviderGuess {
    let signal = Signal::Srv;
    if findings.is_empty() {
        return ProviderGuess::unknown(signal, "No mail-related SRV records found");
    }

    for finding in findings {
        let entry = finding.to_string();
        if let Some(provider) = match_provider(signal, &entry) {
            let label = format!("{} (SRV: {entry})", provider.name());
            return ProviderGuess::matched(signal, provider, label, entry);
        }
    }

    let listing = findings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n  ");
    ProviderGuess::unknown(
        signal,
        format!("Mail-related SRV record(s) found, provider unknown:\n  {listing}"),
    )
}

/// Body is expected lower-cased already.
pub fn classify_webfinger(evidence: &HttpEvidence) -> ProviderGuess {
    let signal = Signal::WebFinger;
    match evidence {
        HttpEvidence::Response { url, body_snippet } => match match_provider(signal, body_snippet)
        {
            Some(provider) => ProviderGuess::matched(
                signal,
                provider,
                format!("{} (WebFinger)", provider.vendor()),
                url,
            ),
            None => ProviderGuess::unknown(signal, "WebFinger present but provider unknown")
                .with_detail(url),
        },
        HttpEvidence::Unavailable { reason } => ProviderGuess::unknown(
            signal,
            format!("No response from WebFinger endpoint: {reason}"),
        )
        .with_detail(reason),
    }
}
