//! Streamside Reveal Demo
//!
//! Plays the bundled poem's word-level preset onto an in-memory surface,
//! word by word with the configured pacing, then prints the revealed text.
//!
//! Run with: cargo run -p strophe_player --example streamside

use strophe_core::RevealPreset;
use strophe_player::play;
use strophe_surface::BufferSurface;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut surface = BufferSurface::new();
    runtime.block_on(play(&RevealPreset::first_stanza_words(), &mut surface))?;

    println!("{}", surface.text());
    Ok(())
}
