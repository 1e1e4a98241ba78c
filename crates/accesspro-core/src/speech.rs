#![forbid(unsafe_code)]

//! Read-page text-to-speech.
//!
//! Fire-and-forget: the controller issues cancel, then speak, and never
//! tracks playback. Cancelling first keeps at most one utterance active.

use tracing::{debug, warn};

use crate::error::PageError;
use crate::page::Page;

/// Notice shown when the runtime has no speech engine.
pub const SPEECH_UNSUPPORTED_MESSAGE: &str = "Speech synthesis not supported in this browser";

/// One request to the speech engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
}

/// Host speech engine.
pub trait SpeechSynth {
    /// Drop any queued or speaking utterance.
    fn cancel(&mut self) -> Result<(), PageError>;

    /// Queue `utterance` for playback.
    fn speak(&mut self, utterance: &Utterance) -> Result<(), PageError>;
}

/// What a read-page click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Speech was (re)started with this many characters of body text.
    Speaking { chars: usize },
    /// No speech capability; the user was notified.
    Unsupported,
}

/// Capture the body text and speak it, cancelling any utterance in flight.
pub fn read_page<P: Page + ?Sized>(page: &mut P, rate: f32) -> Result<ReadOutcome, PageError> {
    let text = page.body_text();
    let chars = text.chars().count();
    let spoken = match page.speech() {
        Some(synth) => {
            synth.cancel()?;
            synth.speak(&Utterance { text, rate })?;
            true
        }
        None => false,
    };

    if spoken {
        debug!(chars, rate, "read page started");
        Ok(ReadOutcome::Speaking { chars })
    } else {
        warn!("speech synthesis unavailable");
        page.alert(SPEECH_UNSUPPORTED_MESSAGE);
        Ok(ReadOutcome::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessPage;

    #[test]
    fn restart_cancels_previous_utterance() {
        let mut page = HeadlessPage::new().with_paragraph("hello   world");
        assert_eq!(
            read_page(&mut page, 0.8),
            Ok(ReadOutcome::Speaking { chars: 11 })
        );
        page.push_paragraph("again");
        read_page(&mut page, 0.8).unwrap();

        let engine = page.speech_engine().unwrap();
        assert_eq!(engine.queue().len(), 1);
        assert_eq!(engine.queue()[0].text, "hello world again");
        assert_eq!(engine.cancel_count(), 2);
    }

    #[test]
    fn missing_engine_alerts_once_per_click() {
        let mut page = HeadlessPage::new().without_speech();
        assert_eq!(read_page(&mut page, 0.8), Ok(ReadOutcome::Unsupported));
        assert_eq!(page.alerts(), [SPEECH_UNSUPPORTED_MESSAGE]);
    }
}
