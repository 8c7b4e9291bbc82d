use std::fmt;

/// One detection signal; the declaration order is the report display order.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Signal {
    Mx,
    Spf,
    Dmarc,
    Autoconfig,
    Srv,
    WebFinger,
}

impl Signal {
    pub const ALL: [Signal; 6] = [
        Signal::Mx,
        Signal::Spf,
        Signal::Dmarc,
        Signal::Autoconfig,
        Signal::Srv,
        Signal::WebFinger,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Mx => "MX",
            Self::Spf => "SPF",
            Self::Dmarc => "DMARC",
            Self::Autoconfig => "Autoconfig",
            Self::Srv => "SRV",
            Self::WebFinger => "WebFinger",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Mx => "MX Record Based",
            Self::Spf => "SPF Record Based",
            Self::Dmarc => "DMARC Record Based",
            Self::Autoconfig => "Autoconfig/Autodiscover Based",
            Self::Srv => "SRV Record Based",
            Self::WebFinger => "WebFinger Based",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Google,
    Microsoft,
    Yahoo,
    Zoho,
    ProtonMail,
    Fastmail,
}

impl Provider {
    /// Product name used by the DNS and autoconfig verdicts.
    pub fn name(self) -> &'static str {
        match self {
            Self::Google => "Google Workspace",
            Self::Microsoft => "Microsoft 365",
            Self::Yahoo => "Yahoo Mail",
            Self::Zoho => "Zoho Mail",
            Self::ProtonMail => "ProtonMail",
            Self::Fastmail => "Fastmail",
        }
    }

    /// Vendor name used by the WebFinger verdict.
    pub fn vendor(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Microsoft => "Microsoft",
            Self::Yahoo => "Yahoo",
            Self::Zoho => "Zoho",
            Self::ProtonMail => "Proton",
            Self::Fastmail => "Fastmail",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of classifying one signal's evidence.
///
/// `label` is the human-readable verdict shown to the user. `provider` is
/// set only when a knowledge-table rule matched; `detail` carries the
/// evidence item or URL behind the verdict.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderGuess {
    pub signal: Signal,
    pub provider: Option<Provider>,
    pub label: String,
    pub detail: Option<String>,
}

impl ProviderGuess {
    pub(crate) fn matched(
        signal: Signal,
        provider: Provider,
        label: String,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            signal,
            provider: Some(provider),
            label,
            detail: Some(detail.into()),
        }
    }

    pub(crate) fn unknown(signal: Signal, label: impl Into<String>) -> Self {
        Self {
            signal,
            provider: None,
            label: label.into(),
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub(crate) fn cancelled(signal: Signal) -> Self {
        Self::unknown(
            signal,
            format!("Lookup cancelled before the {} probe completed", signal.tag()),
        )
    }

    pub fn is_known(&self) -> bool {
        self.provider.is_some()
    }
}
