/// Gender of the voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
}

/// Voice configuration with metadata
#[derive(Debug, Clone)]
pub struct VoiceConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub gender: Gender,
    /// Voice selector handed to the external synthesizer command
    pub synth_voice: &'static str,
    pub description: &'static str,
}

impl VoiceConfig {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        gender: Gender,
        synth_voice: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            gender,
            synth_voice,
            description,
        }
    }
}

/// Voice enum representing the available English voices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    BritishFemaleHeather,
    BritishMaleOliver,
    AmericanFemaleJune,
    AmericanMaleMiles,
}

impl Voice {
    /// Get the voice configuration for this voice
    pub const fn config(&self) -> VoiceConfig {
        match self {
            Voice::BritishFemaleHeather => VoiceConfig::new(
                "bf_heather",
                "Heather",
                Gender::Female,
                "en-gb+f3",
                "British female voice - Heather",
            ),
            Voice::BritishMaleOliver => VoiceConfig::new(
                "bm_oliver",
                "Oliver",
                Gender::Male,
                "en-gb+m3",
                "British male voice - Oliver",
            ),
            Voice::AmericanFemaleJune => VoiceConfig::new(
                "af_june",
                "June",
                Gender::Female,
                "en-us+f3",
                "American female voice - June",
            ),
            Voice::AmericanMaleMiles => VoiceConfig::new(
                "am_miles",
                "Miles",
                Gender::Male,
                "en-us+m3",
                "American male voice - Miles",
            ),
        }
    }

    /// Get the voice ID string
    pub const fn id(&self) -> &'static str {
        self.config().id
    }

    /// All available voices
    pub const fn all() -> &'static [Voice] {
        &[
            Voice::BritishFemaleHeather,
            Voice::BritishMaleOliver,
            Voice::AmericanFemaleJune,
            Voice::AmericanMaleMiles,
        ]
    }

    /// Look up a voice by its ID string
    pub fn from_id(id: &str) -> Option<Voice> {
        Voice::all().iter().copied().find(|voice| voice.id() == id)
    }

    /// The preferred voice: PREFERRED_VOICE from the environment when it
    /// names a known voice, otherwise the British female default.
    pub fn preferred() -> Voice {
        std::env::var("PREFERRED_VOICE")
            .ok()
            .and_then(|id| Voice::from_id(&id))
            .unwrap_or(Voice::BritishFemaleHeather)
    }

    /// Resolve a requested ID, falling back to the preferred voice for
    /// unknown IDs rather than erroring.
    pub fn resolve(id: &str) -> Voice {
        match Voice::from_id(id) {
            Some(voice) => voice,
            None => {
                let fallback = Voice::preferred();
                tracing::debug!(
                    "Unknown voice '{}', falling back to '{}'",
                    id,
                    fallback.id()
                );
                fallback
            }
        }
    }
}
