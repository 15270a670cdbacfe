//! Speech sinks
//!
//! A sink accepts a words string and vocalizes it asynchronously. The
//! contract is latest-request-wins: a new utterance first cancels whatever
//! is still being spoken.
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;

use crate::error::{ConvertError, Result};
use crate::speech::voices::Voice;

#[async_trait]
pub trait SpeechSink: Send + Sync {
    /// Cancel any in-flight utterance, then speak this one.
    async fn speak(&self, words: &str, voice: Voice) -> Result<()>;

    /// Cancel the in-flight utterance without starting a new one.
    async fn cancel(&self);

    /// Wait for the in-flight utterance, if any, to finish naturally.
    async fn finish(&self) {}
}

/// Vocalizes through an external synthesizer command.
///
/// The command is invoked as `<program> -v <synth_voice> <words>` (the
/// espeak-ng convention). The child is killed when a newer utterance
/// arrives or the speaker is dropped.
pub struct CommandSpeaker {
    program: String,
    current: Mutex<Option<Child>>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            current: Mutex::new(None),
        }
    }

    /// Build a speaker from SPEECH_COMMAND, if set.
    pub fn from_env() -> Option<Self> {
        std::env::var("SPEECH_COMMAND")
            .ok()
            .filter(|program| !program.trim().is_empty())
            .map(Self::new)
    }

    /// Whether an utterance child is still running.
    pub async fn is_speaking(&self) -> bool {
        let mut current = self.current.lock().await;
        let running = match current.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        };
        // Exited or unobservable children have nothing left to cancel
        if !running {
            *current = None;
        }
        running
    }
}

#[async_trait]
impl SpeechSink for CommandSpeaker {
    async fn speak(&self, words: &str, voice: Voice) -> Result<()> {
        let mut current = self.current.lock().await;

        // Latest request wins: kill whatever is still talking
        if let Some(mut child) = current.take() {
            let _ = child.start_kill();
        }

        let child = Command::new(&self.program)
            .arg("-v")
            .arg(voice.config().synth_voice)
            .arg(words)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ConvertError::SpeechBackend(format!(
                    "failed to spawn '{}': {}",
                    self.program, e
                ))
            })?;

        tracing::debug!(
            "Speaking {} characters with voice '{}'",
            words.len(),
            voice.id()
        );

        *current = Some(child);
        Ok(())
    }

    async fn cancel(&self) {
        if let Some(mut child) = self.current.lock().await.take() {
            let _ = child.start_kill();
        }
    }

    async fn finish(&self) {
        let child = self.current.lock().await.take();
        if let Some(mut child) = child {
            let _ = child.wait().await;
        }
    }
}

/// Sink used when no synthesizer command is configured. Conversions still
/// work; utterances are logged and dropped.
#[derive(Debug, Default)]
pub struct NullSpeaker;

#[async_trait]
impl SpeechSink for NullSpeaker {
    async fn speak(&self, words: &str, voice: Voice) -> Result<()> {
        tracing::debug!(
            "Speech disabled, dropping utterance ({} characters, voice '{}')",
            words.len(),
            voice.id()
        );
        Ok(())
    }

    async fn cancel(&self) {}
}

/// The sink for this process: command-backed when SPEECH_COMMAND is set,
/// otherwise the null sink.
pub fn speaker_from_env() -> Arc<dyn SpeechSink> {
    match CommandSpeaker::from_env() {
        Some(speaker) => {
            tracing::info!("Speech output via external command");
            Arc::new(speaker)
        }
        None => {
            tracing::info!("SPEECH_COMMAND not set, speech output disabled");
            Arc::new(NullSpeaker)
        }
    }
}
