//! Adapter: advanced media players behind a single `play` call.
//!
//! `VlcPlayer` and `Mp4Player` expose a wide interface (`play_vlc` and
//! `play_mp4`) but each only does something for its own format. `MediaAdapter`
//! narrows that to `MediaPlayer::play(media_type, file_name)`, and
//! `AudioPlayer` is the client that plays mp3 itself and hands everything else
//! to an adapter.
//!
//! Unsupported formats produce no output. Every call reports whether it played
//! through [`PlayOutcome`] so callers can tell the two apart.

use crate::domain::PatternError;
use crate::sink::LineSink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    /// The player does not handle this format; nothing was written.
    Unsupported,
}

impl PlayOutcome {
    pub fn is_played(self) -> bool {
        self == PlayOutcome::Played
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    Mp3,
    Mp4,
    Vlc,
}

impl MediaFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Mp4 => "mp4",
            MediaFormat::Vlc => "vlc",
        }
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaFormat {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, PatternError> {
        [MediaFormat::Mp3, MediaFormat::Mp4, MediaFormat::Vlc]
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PatternError::UnknownMediaFormat(s.to_string()))
    }
}

fn playing_line(format: MediaFormat, file_name: &str) -> String {
    format!("Playing {format} file. Name: {file_name}")
}

/// The narrow interface clients call.
pub trait MediaPlayer: Send + Sync {
    fn play(&self, media_type: &str, file_name: &str) -> io::Result<PlayOutcome>;
}

/// The wide interface the concrete players implement.
pub trait AdvancedMediaPlayer: Send + Sync {
    fn play_vlc(&self, file_name: &str) -> io::Result<PlayOutcome>;
    fn play_mp4(&self, file_name: &str) -> io::Result<PlayOutcome>;
}

pub struct VlcPlayer {
    sink: Arc<dyn LineSink>,
}

impl VlcPlayer {
    pub fn new(sink: Arc<dyn LineSink>) -> Self {
        Self { sink }
    }
}

impl AdvancedMediaPlayer for VlcPlayer {
    fn play_vlc(&self, file_name: &str) -> io::Result<PlayOutcome> {
        self.sink
            .write_line(&playing_line(MediaFormat::Vlc, file_name))?;
        Ok(PlayOutcome::Played)
    }

    fn play_mp4(&self, _file_name: &str) -> io::Result<PlayOutcome> {
        Ok(PlayOutcome::Unsupported)
    }
}

pub struct Mp4Player {
    sink: Arc<dyn LineSink>,
}

impl Mp4Player {
    pub fn new(sink: Arc<dyn LineSink>) -> Self {
        Self { sink }
    }
}

impl AdvancedMediaPlayer for Mp4Player {
    fn play_vlc(&self, _file_name: &str) -> io::Result<PlayOutcome> {
        Ok(PlayOutcome::Unsupported)
    }

    fn play_mp4(&self, file_name: &str) -> io::Result<PlayOutcome> {
        self.sink
            .write_line(&playing_line(MediaFormat::Mp4, file_name))?;
        Ok(PlayOutcome::Played)
    }
}

/// Presents an [`AdvancedMediaPlayer`] as a [`MediaPlayer`].
pub struct MediaAdapter {
    format: MediaFormat,
    player: Box<dyn AdvancedMediaPlayer>,
}

impl MediaAdapter {
    /// Adapter for the player that handles `media_type`, if there is one.
    pub fn new(media_type: &str, sink: Arc<dyn LineSink>) -> Option<Self> {
        match media_type.parse::<MediaFormat>().ok()? {
            MediaFormat::Vlc => Some(Self::wrap(MediaFormat::Vlc, Box::new(VlcPlayer::new(sink)))),
            MediaFormat::Mp4 => Some(Self::wrap(MediaFormat::Mp4, Box::new(Mp4Player::new(sink)))),
            MediaFormat::Mp3 => None,
        }
    }

    /// Adapt an arbitrary advanced player. Only requests for `format` reach it;
    /// every other media type is unsupported.
    pub fn wrap(format: MediaFormat, player: Box<dyn AdvancedMediaPlayer>) -> Self {
        Self { format, player }
    }

    pub fn format(&self) -> MediaFormat {
        self.format
    }
}

impl MediaPlayer for MediaAdapter {
    fn play(&self, media_type: &str, file_name: &str) -> io::Result<PlayOutcome> {
        match media_type.parse::<MediaFormat>() {
            Ok(requested) if requested == self.format => match self.format {
                MediaFormat::Vlc => self.player.play_vlc(file_name),
                MediaFormat::Mp4 => self.player.play_mp4(file_name),
                MediaFormat::Mp3 => Ok(PlayOutcome::Unsupported),
            },
            _ => Ok(PlayOutcome::Unsupported),
        }
    }
}

impl fmt::Debug for MediaAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaAdapter")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

/// Plays mp3 natively and the advanced formats through a [`MediaAdapter`].
pub struct AudioPlayer {
    sink: Arc<dyn LineSink>,
}

impl AudioPlayer {
    pub fn new(sink: Arc<dyn LineSink>) -> Self {
        Self { sink }
    }
}

impl MediaPlayer for AudioPlayer {
    fn play(&self, media_type: &str, file_name: &str) -> io::Result<PlayOutcome> {
        if matches!(media_type.parse::<MediaFormat>(), Ok(MediaFormat::Mp3)) {
            self.sink
                .write_line(&playing_line(MediaFormat::Mp3, file_name))?;
            return Ok(PlayOutcome::Played);
        }

        let Some(adapter) = MediaAdapter::new(media_type, Arc::clone(&self.sink)) else {
            debug!(media_type, file_name, "Media format not supported");
            return Ok(PlayOutcome::Unsupported);
        };

        adapter.play(media_type, file_name)
    }
}
