//! Outbound events for the audio collaborator.

/// A fire-and-forget sound cue. The core never plays audio itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    Click,
    Jump,
    Point,
    Death,
}

impl SoundEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Jump => "jump",
            Self::Point => "point",
            Self::Death => "death",
        }
    }
}
