use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::{ActionContext, ActionFault, Outcome};
use crate::types::{ParticleId, SoundId, Vec3};

/// Plays a sound at the origin block and/or emits particles at
/// `origin + offset`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEffects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<SoundId>,
    #[serde(default = "unit")]
    pub sound_volume: f32,
    #[serde(default = "unit")]
    pub sound_pitch: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particle: Option<ParticleId>,
    #[serde(default = "one")]
    pub particle_count: u32,
    #[serde(default = "block_center")]
    pub offset: Vec3,
}

fn unit() -> f32 {
    1.0
}

fn one() -> u32 {
    1
}

fn block_center() -> Vec3 {
    Vec3::BLOCK_CENTER
}

impl Default for PlayEffects {
    fn default() -> Self {
        Self {
            sound: None,
            sound_volume: unit(),
            sound_pitch: unit(),
            particle: None,
            particle_count: one(),
            offset: block_center(),
        }
    }
}

impl PlayEffects {
    pub const TAG: &'static str = "play_effects";

    pub fn sound(mut self, sound: SoundId, volume: f32, pitch: f32) -> Self {
        self.sound = Some(sound);
        self.sound_volume = volume;
        self.sound_pitch = pitch;
        self
    }

    pub fn particle(mut self, particle: ParticleId, count: u32) -> Self {
        self.particle = Some(particle);
        self.particle_count = count;
        self
    }

    /// True if at least one of the two emissions happened.
    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> Outcome {
        let mut outcome = Outcome::skipped();

        if let Some(sound) = &self.sound {
            match ctx
                .world
                .play_sound(ctx.origin, sound, self.sound_volume, self.sound_pitch)
            {
                Ok(()) => {
                    debug!(target: "shrine::action", %sound, pos = %ctx.origin, "sound played");
                    outcome.applied = true;
                }
                Err(err) => outcome = outcome.with_fault(ActionFault::raise(Self::TAG, ctx, err)),
            }
        }

        if let Some(particle) = &self.particle {
            let at = ctx.origin.offset_by(self.offset);
            match ctx.world.spawn_particles(at, particle, self.particle_count) {
                Ok(()) => {
                    debug!(
                        target: "shrine::action",
                        %particle,
                        count = self.particle_count,
                        %at,
                        "particles emitted"
                    );
                    outcome.applied = true;
                }
                Err(err) => outcome = outcome.with_fault(ActionFault::raise(Self::TAG, ctx, err)),
            }
        }

        outcome
    }
}
