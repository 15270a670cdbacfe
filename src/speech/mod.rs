pub mod speaker;
pub mod voices;

pub use speaker::{speaker_from_env, CommandSpeaker, NullSpeaker, SpeechSink};
pub use voices::{Gender, Voice, VoiceConfig};
