//! Feedback emitter seam.
//!
//! The controller decides when a cosmetic or sound fires; the emitter
//! decides how it looks and sounds.

use seeker_core::components::HomingAgent;
use seeker_core::enums::{SoundCue, TurnSide};
use seeker_core::events::FeedbackEvent;

pub trait FeedbackEmitter {
    fn trail_ring(&mut self, agent: &HomingAgent);
    fn dust_cone(&mut self, agent: &HomingAgent);
    fn slip_spark(&mut self, agent: &HomingAgent, side: TurnSide);
    fn speed_lines(&mut self, agent: &HomingAgent);
    fn ghost(&mut self, agent: &HomingAgent, tint: Option<u16>);
    fn play_sound(&mut self, agent: &HomingAgent, cue: SoundCue);
    fn is_sound_playing(&self, agent: &HomingAgent, cue: SoundCue) -> bool;
}

/// Records every request as a `FeedbackEvent`. Sounds are fire-and-forget,
/// so nothing is ever reported as still playing.
impl FeedbackEmitter for Vec<FeedbackEvent> {
    fn trail_ring(&mut self, agent: &HomingAgent) {
        self.push(FeedbackEvent::TrailRing {
            agent: agent.id,
            position: agent.position,
            momentum: agent.momentum,
        });
    }

    fn dust_cone(&mut self, agent: &HomingAgent) {
        self.push(FeedbackEvent::DustCone {
            agent: agent.id,
            position: agent.position,
            angle: agent.angle,
            floor_z: agent.floor_z,
            momentum: agent.momentum,
        });
    }

    fn slip_spark(&mut self, agent: &HomingAgent, side: TurnSide) {
        self.push(FeedbackEvent::SlipSpark {
            agent: agent.id,
            position: agent.position,
            side,
            floor_z: agent.floor_z,
            momentum: agent.momentum,
        });
    }

    fn speed_lines(&mut self, agent: &HomingAgent) {
        self.push(FeedbackEvent::SpeedLines {
            agent: agent.id,
            position: agent.position,
            momentum: agent.momentum,
        });
    }

    fn ghost(&mut self, agent: &HomingAgent, tint: Option<u16>) {
        self.push(FeedbackEvent::Ghost {
            agent: agent.id,
            position: agent.position,
            tint,
        });
    }

    fn play_sound(&mut self, agent: &HomingAgent, cue: SoundCue) {
        self.push(FeedbackEvent::Sound {
            agent: agent.id,
            cue,
        });
    }

    fn is_sound_playing(&self, _agent: &HomingAgent, _cue: SoundCue) -> bool {
        false
    }
}
