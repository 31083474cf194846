// crates/batarong_core/src/engine_loop.rs

use std::time::Instant;

use batarong_ecs::World;
use batarong_shared::{FrameInput, GameLogic, InputState};

/// Encapsulates fixed-timestep simulation bookkeeping (time, accumulator, limits).
pub struct EngineLoop {
    last_frame_time: Instant,
    sim_accumulator: f32,
    sim_dt: f32,
    max_steps_per_frame: u32,
    /// Input state the previous simulation step saw, for edge detection.
    prev_input: InputState,
}

impl EngineLoop {
    pub fn new(sim_dt: f32) -> Self {
        Self {
            last_frame_time: Instant::now(),
            sim_accumulator: 0.0,
            sim_dt,
            max_steps_per_frame: 5,
            prev_input: InputState::default(),
        }
    }

    /// Update the frame timer and return the clamped frame delta.
    /// Clamps to 0.25s to avoid giant spikes when dragging the window,
    /// hitting breakpoints, etc.
    pub fn tick_timer(&mut self) -> f32 {
        let now = Instant::now();
        let frame_dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        frame_dt.min(0.25)
    }

    /// Runs fixed-timestep simulation steps until the accumulator is caught up
    /// or we hit max_steps_per_frame. If the backlog still remains at the cap,
    /// we drop it, to avoid "chasing" an infinite backlog under heavy load.
    ///
    /// Edge detection happens per step: only the first step of a frame sees
    /// newly-pressed bits, catch-up steps see the keys as held.
    pub fn update_simulation(
        &mut self,
        frame_dt: f32,
        world: &mut World,
        game: &mut dyn GameLogic,
        input_state: InputState,
    ) {
        self.sim_accumulator += frame_dt;

        let mut steps = 0;
        while self.sim_accumulator >= self.sim_dt && steps < self.max_steps_per_frame {
            let frame_input = FrameInput::new(input_state, self.prev_input);
            game.update(world, &frame_input, self.sim_dt);
            self.prev_input = input_state;

            self.sim_accumulator -= self.sim_dt;
            steps += 1;
        }

        // Prevent unbounded backlog if we're constantly saturated.
        if steps == self.max_steps_per_frame && self.sim_accumulator >= self.sim_dt {
            self.sim_accumulator = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingGame {
        updates: u32,
        edge_updates: u32,
        probe: batarong_shared::ActionId,
    }

    impl GameLogic for CountingGame {
        fn on_load(&mut self, _world: &mut World, _host: &dyn batarong_shared::ActionLookup) {}

        fn update(&mut self, _world: &mut World, input: &FrameInput, _dt: f32) {
            self.updates += 1;
            if input.pressed(self.probe) {
                self.edge_updates += 1;
            }
        }

        fn draw_overlay(&self, _ctx: &egui::Context, _world: &World) {}
    }

    #[test]
    fn edge_fires_once_even_across_catchup_steps() {
        let mut world = World::new();
        let mut game = CountingGame {
            updates: 0,
            edge_updates: 0,
            probe: 3,
        };
        let mut engine_loop = EngineLoop::new(1.0 / 30.0);

        let held = InputState { digital_mask: 1 << 3 };
        // Enough backlog for three steps in one call. 3.5 (not 3.0) steps'
        // worth, so f32 residue from the subtractions can't starve the third.
        engine_loop.update_simulation(3.5 / 30.0, &mut world, &mut game, held);

        assert_eq!(game.updates, 3);
        assert_eq!(game.edge_updates, 1);
    }

    #[test]
    fn backlog_is_dropped_at_the_step_cap() {
        let mut world = World::new();
        let mut game = CountingGame {
            updates: 0,
            edge_updates: 0,
            probe: 0,
        };
        let mut engine_loop = EngineLoop::new(1.0 / 30.0);

        engine_loop.update_simulation(10.0, &mut world, &mut game, InputState::default());
        assert_eq!(game.updates, 5);

        // The dropped backlog must not replay on the next frame.
        engine_loop.update_simulation(0.0, &mut world, &mut game, InputState::default());
        assert_eq!(game.updates, 5);
    }
}
