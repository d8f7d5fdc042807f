//! Per-tick feedback collection with sound playback state.

use std::collections::BTreeMap;

use log::debug;

use seeker_ai::FeedbackEmitter;
use seeker_core::components::HomingAgent;
use seeker_core::constants::ACTIVE_SOUND_TICKS;
use seeker_core::enums::{SoundCue, TurnSide};
use seeker_core::events::FeedbackEvent;
use seeker_core::types::AgentId;

/// Collects feedback events raised during a tick and tracks which sounds
/// are still playing so looping cues are not restarted every tick.
#[derive(Debug, Default)]
pub struct FeedbackBuffer {
    events: Vec<FeedbackEvent>,
    playing: BTreeMap<(AgentId, SoundCue), u32>,
}

impl FeedbackBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand over this tick's events.
    pub fn take_events(&mut self) -> Vec<FeedbackEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance sound playback by one tick.
    pub fn advance(&mut self) {
        self.playing.retain(|_, remaining| {
            *remaining = remaining.saturating_sub(1);
            *remaining > 0
        });
    }

    /// Stop every sound belonging to an agent that is gone.
    pub fn forget(&mut self, agent: AgentId) {
        self.playing.retain(|(owner, _), _| *owner != agent);
    }
}

impl FeedbackEmitter for FeedbackBuffer {
    fn trail_ring(&mut self, agent: &HomingAgent) {
        self.events.trail_ring(agent);
    }

    fn dust_cone(&mut self, agent: &HomingAgent) {
        self.events.dust_cone(agent);
    }

    fn slip_spark(&mut self, agent: &HomingAgent, side: TurnSide) {
        self.events.slip_spark(agent, side);
    }

    fn speed_lines(&mut self, agent: &HomingAgent) {
        self.events.speed_lines(agent);
    }

    fn ghost(&mut self, agent: &HomingAgent, tint: Option<u16>) {
        self.events.ghost(agent, tint);
    }

    fn play_sound(&mut self, agent: &HomingAgent, cue: SoundCue) {
        debug!("agent {} plays {:?}", agent.id.0, cue);
        self.playing.insert((agent.id, cue), ACTIVE_SOUND_TICKS);
        self.events.play_sound(agent, cue);
    }

    fn is_sound_playing(&self, agent: &HomingAgent, cue: SoundCue) -> bool {
        self.playing.contains_key(&(agent.id, cue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seeker_core::fixed::FRACUNIT;
    use seeker_core::types::FixedVec3;

    fn agent(id: u32) -> HomingAgent {
        HomingAgent::launch(AgentId(id), None, FixedVec3::ZERO, 0, FRACUNIT)
    }

    #[test]
    fn test_sound_plays_for_its_duration() {
        let mut buffer = FeedbackBuffer::new();
        let a = agent(0);

        buffer.play_sound(&a, SoundCue::Active);
        assert!(buffer.is_sound_playing(&a, SoundCue::Active));
        assert!(!buffer.is_sound_playing(&a, SoundCue::Attack));
        assert!(!buffer.is_sound_playing(&agent(1), SoundCue::Active));

        for _ in 0..ACTIVE_SOUND_TICKS - 1 {
            buffer.advance();
        }
        assert!(buffer.is_sound_playing(&a, SoundCue::Active));
        buffer.advance();
        assert!(!buffer.is_sound_playing(&a, SoundCue::Active));
    }

    #[test]
    fn test_forget_stops_sounds_and_events_drain() {
        let mut buffer = FeedbackBuffer::new();
        let a = agent(3);

        buffer.play_sound(&a, SoundCue::Attack);
        buffer.ghost(&a, None);
        assert_eq!(buffer.take_events().len(), 2);
        assert!(buffer.take_events().is_empty());

        buffer.forget(a.id);
        assert!(!buffer.is_sound_playing(&a, SoundCue::Attack));
    }
}
