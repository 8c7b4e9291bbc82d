//! Terminal UI (`--tui`)
//!
//! One screen: prompt, e-mail input, `[ Lookup ]` button and a scrolling
//! output log. Lookups run on spawned tasks and report back over a channel.

pub mod app;
pub mod events;
pub mod input;
pub mod log;
pub mod ui;

use anyhow::Result;
use mailhost_lookup::{InputMode, LookupOptions};

pub use app::{App, TuiRunner};

pub async fn run(mode: InputMode, options: LookupOptions) -> Result<()> {
    let mut runner = TuiRunner::new(App::new(mode, options))?;
    runner.run().await
}
