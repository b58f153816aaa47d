use crate::config::SceneConfig;
use crate::dynamics::{damp, is_settled, ProgressChannel};
use crate::error::ConfigError;
use crate::morph::{pose_ornament_with, sample_foliage_with, FoliageSample, OrnamentPose};
use crate::particle::{FoliageSet, OrnamentClass, OrnamentSet};
use crate::random::RandomSource;
use crate::shapes::{generate_foliage, generate_ornaments};
use crate::state::{MorphSignal, MorphState};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Everything the renderer needs for one frame, recomputed by each tick.
#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    /// One sample per foliage particle, in particle order.
    pub foliage: Vec<FoliageSample>,
    /// Per class, one pose per instance slot.
    pub ornaments: [Vec<OrnamentPose>; 3],
}

impl FrameOutput {
    pub fn ornaments(&self, class: OrnamentClass) -> &[OrnamentPose] {
        &self.ornaments[class.index()]
    }
}

/// Owns all mutable morph state: the shared foliage progress and one
/// progress value per ornament id.
pub struct MorphEngine {
    config: SceneConfig,
    foliage: FoliageSet,
    ornaments: OrnamentSet,
    shared: ProgressChannel,
    /// Indexed by ornament id, sized `max_id + 1`.
    progress: Vec<f32>,
    state: MorphState,
    time: f32,
    frame: FrameOutput,
}

impl MorphEngine {
    /// Wrap already generated populations. Everything starts scattered.
    pub fn new(
        config: SceneConfig,
        foliage: FoliageSet,
        ornaments: OrnamentSet,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let slots = ornaments.max_id().map_or(0, |id| id as usize + 1);
        let frame = FrameOutput {
            foliage: vec![FoliageSample::default(); foliage.count],
            ornaments: OrnamentClass::ALL
                .map(|class| vec![OrnamentPose::default(); ornaments.class_count(class)]),
        };

        log::info!(
            "Morph engine ready: {} foliage, {} ornaments",
            foliage.count,
            ornaments.len()
        );

        let mut engine = Self {
            shared: ProgressChannel::new(config.foliage_dynamics.rate),
            config,
            foliage,
            ornaments,
            progress: vec![0.0; slots],
            state: MorphState::Scattered,
            time: 0.0,
            frame,
        };
        engine.resample();
        Ok(engine)
    }

    /// Generate both populations from `rng` and build an engine around them.
    pub fn generate(config: SceneConfig, rng: &mut impl RandomSource) -> Result<Self, ConfigError> {
        let foliage = generate_foliage(&config, rng)?;
        let ornaments = generate_ornaments(&config, rng)?;
        Self::new(config, foliage, ornaments)
    }

    /// Advance one frame.
    ///
    /// `dt` is the elapsed wall time in seconds (zero, negative or NaN is
    /// treated as no time passing), `time` the monotonic clock used for
    /// secondary motion. `state` is applied to every entity this frame.
    pub fn tick(&mut self, dt: f32, time: f32, state: MorphState) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        if state != self.state {
            log::debug!(
                "Morph target {:?} -> {:?} at shared progress {:.3}",
                self.state,
                state,
                self.shared.value
            );
            self.state = state;
        }

        let target = state.target();
        self.shared.advance(target, dt);
        self.advance_ornaments(target, dt);
        self.time = time;
        self.resample();
    }

    /// Same as [`tick`](Self::tick), reading the state from `signal` once.
    pub fn tick_signal(&mut self, dt: f32, time: f32, signal: &MorphSignal) {
        let state = signal.snapshot();
        self.tick(dt, time, state);
    }

    fn advance_ornaments(&mut self, target: f32, dt: f32) {
        let records = self.ornaments.records();
        let config = &self.config;

        #[cfg(feature = "parallel")]
        {
            self.progress
                .par_iter_mut()
                .zip(records.par_iter())
                .for_each(|(p, record)| {
                    *p = damp(*p, target, config.dynamics(record.class).rate, dt);
                });
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (p, record) in self.progress.iter_mut().zip(records) {
                *p = damp(*p, target, config.dynamics(record.class).rate, dt);
            }
        }
    }

    /// Recompute the frame output from current progress and time.
    fn resample(&mut self) {
        let shared = self.shared.value;
        let time = self.time;
        let foliage = &self.foliage;
        let profile = self.config.foliage_dynamics;
        let sample = |i: usize| {
            sample_foliage_with(
                &profile,
                foliage.tree_position[i],
                foliage.scatter_position[i],
                foliage.phase[i],
                shared,
                time,
            )
        };

        #[cfg(feature = "parallel")]
        {
            self.frame
                .foliage
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, out)| *out = sample(i));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (i, out) in self.frame.foliage.iter_mut().enumerate() {
                *out = sample(i);
            }
        }

        let records = self.ornaments.records();
        let progress = &self.progress;
        for class in OrnamentClass::ALL {
            let profile = self.config.dynamics(class);
            let slots = self.ornaments.slots(class);
            let poses = &mut self.frame.ornaments[class.index()];
            for (pose, &id) in poses.iter_mut().zip(slots) {
                let id = id as usize;
                *pose = pose_ornament_with(&records[id], &profile, progress[id], time);
            }
        }
    }

    /// Progress of ornament `id`. Panics on an unknown id.
    pub fn progress(&self, id: u32) -> f32 {
        self.progress[id as usize]
    }

    pub fn try_progress(&self, id: u32) -> Option<f32> {
        self.progress.get(id as usize).copied()
    }

    /// Overwrite the progress of ornament `id`, clamped to [0,1].
    /// Panics on an unknown id. Takes effect from the next tick.
    pub fn set_progress(&mut self, id: u32, value: f32) {
        self.progress[id as usize] = value.clamp(0.0, 1.0);
    }

    /// Overwrite the shared foliage progress, clamped to [0,1].
    pub fn set_shared_progress(&mut self, value: f32) {
        self.shared.value = value.clamp(0.0, 1.0);
    }

    pub fn shared_progress(&self) -> f32 {
        self.shared.value
    }

    /// State applied by the most recent tick.
    pub fn state(&self) -> MorphState {
        self.state
    }

    /// Progress value every entity is currently pulled toward.
    pub fn target(&self) -> f32 {
        self.state.target()
    }

    /// Clock value of the most recent tick.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Whether every progress value has reached the current target.
    pub fn is_settled(&self) -> bool {
        let target = self.target();
        self.shared.is_settled(target) && self.progress.iter().all(|&p| is_settled(p, target))
    }

    pub fn frame(&self) -> &FrameOutput {
        &self.frame
    }

    pub fn foliage(&self) -> &FoliageSet {
        &self.foliage
    }

    pub fn ornaments(&self) -> &OrnamentSet {
        &self.ornaments
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}
