use super::{Provider, Signal};

/// Keywords that identify one provider, per signal. Matching is plain
/// substring containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderEntry {
    pub provider: Provider,
    pub mx_keywords: &'static [&'static str],
    pub spf_keywords: &'static [&'static str],
    pub dmarc_keywords: &'static [&'static str],
    pub autoconfig_keywords: &'static [&'static str],
    pub srv_keywords: &'static [&'static str],
    pub webfinger_keywords: &'static [&'static str],
}

impl ProviderEntry {
    pub fn keywords(&self, signal: Signal) -> &'static [&'static str] {
        match signal {
            Signal::Mx => self.mx_keywords,
            Signal::Spf => self.spf_keywords,
            Signal::Dmarc => self.dmarc_keywords,
            Signal::Autoconfig => self.autoconfig_keywords,
            Signal::Srv => self.srv_keywords,
            Signal::WebFinger => self.webfinger_keywords,
        }
    }

    pub fn matches(&self, signal: Signal, text: &str) -> bool {
        self.keywords(signal)
            .iter()
            .any(|keyword| text.contains(keyword))
    }
}

pub static PROVIDERS: [ProviderEntry; 6] = [
    ProviderEntry {
        provider: Provider::Google,
        mx_keywords: &["google.com", "googlemail.com"],
        spf_keywords: &["include:_spf.google.com"],
        dmarc_keywords: &["google.com"],
        autoconfig_keywords: &["google.com"],
        srv_keywords: &["google.com"],
        webfinger_keywords: &["google"],
    },
    ProviderEntry {
        provider: Provider::Microsoft,
        mx_keywords: &["outlook.com", "protection.outlook.com"],
        spf_keywords: &["include:spf.protection.outlook.com"],
        dmarc_keywords: &["outlook.com"],
        autoconfig_keywords: &["outlook.com", "office365.com"],
        srv_keywords: &["outlook.com", "office365.com"],
        webfinger_keywords: &["microsoft", "outlook"],
    },
    ProviderEntry {
        provider: Provider::Yahoo,
        mx_keywords: &["yahoodns.net"],
        spf_keywords: &["include:spf.mail.yahoo.com"],
        dmarc_keywords: &["yahoo.com"],
        autoconfig_keywords: &[],
        srv_keywords: &[],
        webfinger_keywords: &[],
    },
    ProviderEntry {
        provider: Provider::Zoho,
        mx_keywords: &["zoho.com"],
        spf_keywords: &["include:zoho.com"],
        dmarc_keywords: &["zoho.com"],
        autoconfig_keywords: &["zoho.com"],
        srv_keywords: &["zoho.com"],
        webfinger_keywords: &["zoho"],
    },
    ProviderEntry {
        provider: Provider::ProtonMail,
        mx_keywords: &["protonmail", "proton.ch"],
        spf_keywords: &["include:_spf.protonmail.ch"],
        dmarc_keywords: &["protonmail"],
        autoconfig_keywords: &["protonmail", "proton.ch"],
        srv_keywords: &[],
        webfinger_keywords: &[],
    },
    ProviderEntry {
        provider: Provider::Fastmail,
        mx_keywords: &["fastmail", "messagingengine.com"],
        spf_keywords: &["include:spf.messagingengine.com"],
        dmarc_keywords: &["fastmail"],
        autoconfig_keywords: &["fastmail.com", "messagingengine.com"],
        srv_keywords: &[],
        webfinger_keywords: &[],
    },
];

/// Rule priority per signal: the first provider in this list whose keywords
/// match wins. MX follows the table order; the TXT and HTTP signals test
/// Zoho ahead of Yahoo, and autoconfig tests Fastmail ahead of ProtonMail.
pub fn priority(signal: Signal) -> &'static [Provider] {
    use Provider::*;
    match signal {
        Signal::Mx => &[Google, Microsoft, Yahoo, Zoho, ProtonMail, Fastmail],
        Signal::Spf | Signal::Dmarc => &[Google, Microsoft, Zoho, Yahoo, ProtonMail, Fastmail],
        Signal::Autoconfig => &[Google, Microsoft, Zoho, Fastmail, ProtonMail],
        Signal::Srv | Signal::WebFinger => &[Google, Microsoft, Zoho],
    }
}

pub fn entry(provider: Provider) -> &'static ProviderEntry {
    match provider {
        Provider::Google => &PROVIDERS[0],
        Provider::Microsoft => &PROVIDERS[1],
        Provider::Yahoo => &PROVIDERS[2],
        Provider::Zoho => &PROVIDERS[3],
        Provider::ProtonMail => &PROVIDERS[4],
        Provider::Fastmail => &PROVIDERS[5],
    }
}

/// First provider, in `signal` priority order, with a keyword found in `text`.
pub fn match_provider(signal: Signal, text: &str) -> Option<Provider> {
    priority(signal)
        .iter()
        .copied()
        .find(|provider| entry(*provider).matches(signal, text))
}
