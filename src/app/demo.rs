//! The demonstration scripts the binary runs.

use crate::behavioral::responsibility::{ChainError, Dispatch, LoggerChain};
use crate::creational::factory::ShapeFactory;
use crate::domain::Severity;
use crate::sink::LineSink;
use crate::structural::adapter::{AudioPlayer, MediaPlayer, PlayOutcome};
use std::io;
use std::sync::Arc;
use tracing::{info, warn};

/// One request per severity, lowest first.
pub const CHAIN_REQUESTS: [(Severity, &str); 3] = [
    (Severity::Info, "This is an info information."),
    (Severity::Debug, "This is a debug information."),
    (Severity::Error, "This is an error information."),
];

pub const SHAPE_REQUESTS: [&str; 4] = ["CIRCLE", "RECTANGLE", "SQUARE", "triangle"];

pub const MEDIA_REQUESTS: [(&str, &str); 4] = [
    ("mp3", "beyond the horizon.mp3"),
    ("mp4", "alone.mp4"),
    ("vlc", "far far away.vlc"),
    ("avi", "mind me.avi"),
];

/// Send every request through `chain`, even after one of them fails. The
/// first failure is returned once all requests have been sent.
pub fn run_chain(
    chain: &LoggerChain,
    requests: &[(Severity, &str)],
) -> Result<Vec<Dispatch>, ChainError> {
    let mut dispatches = Vec::with_capacity(requests.len());
    let mut first_failure = None;

    for &(severity, message) in requests {
        match chain.handle(severity, message) {
            Ok(dispatch) => {
                info!(
                    %severity,
                    visited = dispatch.visited,
                    written = dispatch.written.len(),
                    "Chain request dispatched"
                );
                dispatches.push(dispatch);
            }
            Err(e) => {
                warn!(%severity, error = %e, "Chain request had failed writes");
                if first_failure.is_none() {
                    first_failure = Some(e);
                }
            }
        }
    }

    match first_failure {
        Some(e) => Err(e),
        None => Ok(dispatches),
    }
}

/// Draw every shape the factory knows from `SHAPE_REQUESTS`. Returns how many
/// names produced a shape.
pub fn run_factory(sink: &dyn LineSink) -> io::Result<usize> {
    let factory = ShapeFactory::new();
    let mut drawn = 0;

    for name in SHAPE_REQUESTS {
        match factory.create(name) {
            Some(shape) => {
                shape.draw(sink)?;
                drawn += 1;
            }
            None => info!(name, "Factory has no shape for name"),
        }
    }

    Ok(drawn)
}

pub fn run_adapter(sink: Arc<dyn LineSink>) -> io::Result<Vec<PlayOutcome>> {
    let player = AudioPlayer::new(sink);
    MEDIA_REQUESTS
        .iter()
        .map(|(media_type, file_name)| player.play(media_type, file_name))
        .collect()
}
