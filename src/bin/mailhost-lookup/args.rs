use clap::Parser;
use mailhost_lookup::{InputMode, LookupOptions};

#[derive(Parser, Debug)]
#[command(name = "mailhost-lookup", version, about)]
pub struct Cli {
    /// adresse e-mail ou domaine à analyser
    pub target: Option<String>,

    /// refuse un domaine nu : l'entrée doit être une adresse e-mail
    #[arg(long)]
    pub require_email: bool,

    /// timeout par requête HTTP, en millisecondes (0 = 30 s)
    #[arg(long, default_value_t = 5_000)]
    pub timeout: u64,

    /// budget global de la recherche, en millisecondes
    #[arg(long)]
    pub deadline: Option<u64>,

    /// format: human|json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// ouvre l'interface terminal (feature `with-tui`)
    #[cfg(feature = "with-tui")]
    #[arg(long)]
    pub tui: bool,
}

impl Cli {
    pub fn input_mode(&self) -> InputMode {
        if self.require_email {
            InputMode::Email
        } else {
            InputMode::Auto
        }
    }

    pub fn lookup_options(&self) -> LookupOptions {
        LookupOptions::default()
            .with_http_timeout_ms(self.timeout)
            .with_deadline_ms(self.deadline)
    }
}
