//! Best-effort audio cues.
//!
//! A dedicated playback thread owns the rodio output stream; the stream is
//! opened lazily on the first cue so headless machines without an audio
//! device pay nothing. Cues are fire-and-forget: every failure is logged
//! and swallowed, never surfaced to game logic.

use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

/// Named audio events the session engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneCue {
    Correct,
    Wrong,
    Completion,
}

impl ToneCue {
    /// Frequency/duration segments for this cue, played back to back.
    fn segments(self) -> &'static [(f32, u64)] {
        match self {
            ToneCue::Correct => &[(880.0, 120)],
            ToneCue::Wrong => &[(220.0, 350)],
            ToneCue::Completion => &[(523.25, 150), (659.25, 150), (783.99, 220)],
        }
    }
}

/// Handle to the playback thread.
///
/// Constructed once by the application shell and passed by handle into the
/// renderer; dropping every handle shuts the thread down.
#[derive(Debug, Clone)]
pub struct ToneService {
    sender: Option<Sender<ToneCue>>,
}

impl ToneService {
    /// Spawn the playback thread.
    #[must_use]
    pub fn spawn() -> Self {
        let (sender, receiver) = mpsc::channel::<ToneCue>();
        thread::Builder::new()
            .name("drill-tones".into())
            .spawn(move || {
                let mut output: Option<(OutputStream, OutputStreamHandle)> = None;
                let mut output_failed = false;
                while let Ok(cue) = receiver.recv() {
                    if output.is_none() && !output_failed {
                        match OutputStream::try_default() {
                            Ok(opened) => output = Some(opened),
                            Err(err) => {
                                warn!(%err, "audio output unavailable, muting tone cues");
                                output_failed = true;
                            }
                        }
                    }
                    let Some((_stream, handle)) = output.as_ref() else {
                        continue;
                    };
                    if let Err(err) = play_cue(handle, cue) {
                        debug!(%err, ?cue, "tone playback failed");
                    }
                }
            })
            .map_or_else(
                |err| {
                    warn!(%err, "could not start audio thread, tone cues disabled");
                    Self { sender: None }
                },
                |_| Self { sender: Some(sender) },
            )
    }

    /// A service that drops every cue. For tests and headless runs.
    #[must_use]
    pub fn muted() -> Self {
        Self { sender: None }
    }

    /// Queue a cue for playback. Best-effort; never blocks, never fails
    /// the caller.
    pub fn play(&self, cue: ToneCue) {
        let Some(sender) = self.sender.as_ref() else {
            return;
        };
        if sender.send(cue).is_err() {
            debug!(?cue, "tone channel closed, dropping cue");
        }
    }
}

fn play_cue(handle: &OutputStreamHandle, cue: ToneCue) -> Result<(), rodio::PlayError> {
    let sink = Sink::try_new(handle)?;
    for (frequency, millis) in cue.segments() {
        let segment = SineWave::new(*frequency)
            .take_duration(Duration::from_millis(*millis))
            .amplify(0.20);
        sink.append(segment);
    }
    sink.detach();
    Ok(())
}
