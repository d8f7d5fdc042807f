//! Simulation engine.
//!
//! `SimulationEngine` owns the hecs ECS world and the track, runs all
//! systems once per tick, and produces `GameSnapshot`s. Completely
//! headless, enabling deterministic testing.

use hecs::{Entity, World};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use seeker_core::angle::Angle;
use seeker_core::components::{Competitor, HomingAgent, RacerScript};
use seeker_core::events::FeedbackEvent;
use seeker_core::state::GameSnapshot;
use seeker_core::types::{AgentId, CompetitorId, FixedVec3};
use seeker_waypoints::WaypointGraph;

use crate::config::SimConfig;
use crate::feedback::FeedbackBuffer;
use crate::systems;
use crate::systems::homing::Broadcast;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    graph: WaypointGraph,
    config: SimConfig,
    /// Cosmetic jitter only; never feeds back into agent decisions.
    rng: ChaCha8Rng,
    level_time: u64,
    broadcast: Broadcast,
    next_agent_id: u32,
    feedback: FeedbackBuffer,
    despawn_buffer: Vec<Entity>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig, graph: WaypointGraph) -> Self {
        info!(
            "simulation started: seed {}, {} waypoints",
            config.seed,
            graph.len()
        );
        Self {
            world: World::new(),
            graph,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            level_time: 0,
            broadcast: Broadcast::default(),
            next_agent_id: 0,
            feedback: FeedbackBuffer::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Add a scripted competitor to the race.
    pub fn add_racer(&mut self, competitor: Competitor, script: RacerScript) -> Entity {
        world_setup::spawn_racer(&mut self.world, competitor, script)
    }

    /// Launch a homing agent. Ids are handed out in launch order.
    pub fn launch_agent(
        &mut self,
        owner: Option<CompetitorId>,
        position: FixedVec3,
        angle: Angle,
    ) -> AgentId {
        let id = AgentId(self.next_agent_id);
        self.next_agent_id += 1;
        world_setup::launch_agent(&mut self.world, &self.config, id, owner, position, angle);
        info!("agent {} launched at tick {}", id.0, self.level_time);
        id
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameSnapshot {
        let events = self.run_systems();
        self.level_time += 1;

        systems::snapshot::build_snapshot(&self.world, self.level_time, &self.broadcast, events)
    }

    /// Current state without advancing.
    pub fn snapshot(&self) -> GameSnapshot {
        systems::snapshot::build_snapshot(&self.world, self.level_time, &self.broadcast, Vec::new())
    }

    pub fn level_time(&self) -> u64 {
        self.level_time
    }

    pub fn chased_rank(&self) -> Option<u8> {
        self.broadcast.chased_rank
    }

    pub fn item_cooldown(&self) -> u32 {
        self.broadcast.item_cooldown
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn graph(&self) -> &WaypointGraph {
        &self.graph
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn agent(&self, id: AgentId) -> Option<HomingAgent> {
        self.world
            .query::<&HomingAgent>()
            .iter()
            .find(|(_, agent)| agent.id == id)
            .map(|(_, agent)| agent.clone())
    }

    pub fn racer(&self, id: CompetitorId) -> Option<Competitor> {
        self.world
            .query::<&Competitor>()
            .iter()
            .find(|(_, competitor)| competitor.id == id)
            .map(|(_, competitor)| competitor.clone())
    }

    /// Apply an external change to a competitor (a hit, a respawn, a
    /// finish). Returns false if no such competitor exists.
    pub fn update_racer(&mut self, id: CompetitorId, change: impl FnOnce(&mut Competitor)) -> bool {
        match self
            .world
            .query_mut::<&mut Competitor>()
            .into_iter()
            .find(|(_, competitor)| competitor.id == id)
        {
            Some((_, competitor)) => {
                change(competitor);
                true
            }
            None => false,
        }
    }

    /// Poke an agent's state directly (for tests).
    #[cfg(test)]
    pub fn update_agent(&mut self, id: AgentId, change: impl FnOnce(&mut HomingAgent)) {
        if let Some((_, agent)) = self
            .world
            .query_mut::<&mut HomingAgent>()
            .into_iter()
            .find(|(_, agent)| agent.id == id)
        {
            change(agent);
        }
    }

    /// Run all systems in order. Returns the feedback raised this tick.
    fn run_systems(&mut self) -> Vec<FeedbackEvent> {
        self.broadcast.item_cooldown = self.broadcast.item_cooldown.saturating_sub(1);

        systems::racers::run(&mut self.world, &self.graph, self.config.map_scale);
        systems::homing::run(
            &mut self.world,
            &self.graph,
            &self.config,
            self.level_time,
            &mut self.feedback,
            &mut self.broadcast,
        );
        systems::movement::run(&mut self.world);

        let events = self.feedback.take_events();
        systems::effects::run(&mut self.world, &events, &mut self.rng);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.feedback);
        self.feedback.advance();
        events
    }
}
