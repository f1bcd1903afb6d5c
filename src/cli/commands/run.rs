use anyhow::{Result, bail};
use std::path::Path;

use super::{ComposeOptions, compose};
use crate::input::InputReader;
use crate::panel::Panel;
use crate::status;
use crate::ui::{Spinner, Style};

pub struct RunOptions {
    pub file: Option<String>,
    pub to: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub speed: Option<f32>,
    pub glossary: Option<String>,
    pub offline: bool,
    pub out: Option<String>,
    pub play: bool,
}

/// Runs the full pipeline once on the given input and renders the result
/// panel to stdout.
pub async fn run_once(options: RunOptions) -> Result<()> {
    let source_text = InputReader::read(options.file.as_deref())?;

    if source_text.trim().is_empty() {
        bail!("Error: Input is empty");
    }

    let composition = compose(&ComposeOptions {
        to: options.to,
        provider: options.provider,
        model: options.model,
        speed: options.speed,
        glossary: options.glossary,
        offline: options.offline,
    })?;

    let mut panel = Panel::new(composition.pipeline, composition.language)
        .with_speed(composition.speed)
        .with_autoplay(options.play);

    let spinner = Spinner::pipeline_run();
    panel.run(&source_text).await;
    spinner.stop();

    // All-or-nothing: a failed run surfaces only the error
    if let Some(error) = &panel.state().error {
        bail!("{error}");
    }

    print!("{}", panel.render());

    if let Some(out) = options.out.as_deref() {
        if let Some(audio) = &panel.state().audio {
            audio.save_to(Path::new(out))?;
            status!(
                "{} Audio saved to {}",
                Style::success("✓"),
                Style::secondary(out)
            );
        }
    }

    if options.play {
        panel.wait_for_playback();
    }

    panel.close();

    Ok(())
}
