// crates/batarong_core/src/app.rs

use batarong_shared::{ActionId, GameLogic, InputState};

use crate::gui::GuiSystem;
use crate::input::defaults::InputDefaults;
use crate::input::{ActionRegistry, InputMap};
use crate::platform_runner::PlatformRunner;

pub struct App {
    pub registry: ActionRegistry,
    pub input_map: InputMap,
    pub gui: GuiSystem,
    pub window_title: String,
    pub game: Box<dyn GameLogic>,

    // Engine-level actions, edge-triggered against last_input_state.
    pub engine_toggle_inspector: ActionId,
    pub last_input_state: InputState,
}

impl App {
    pub fn new(game: Box<dyn GameLogic>) -> Self {
        let mut registry = ActionRegistry::default();
        let mut input_map = InputMap::default();

        InputDefaults::setup(&mut registry, &mut input_map);

        // Engine actions live in the same registry but are consumed by the
        // host before the game ever sees them.
        let engine_toggle_inspector = registry.register("EngineToggleInspector");
        input_map.bind(winit::keyboard::KeyCode::F1, engine_toggle_inspector);

        Self {
            registry,
            input_map,
            gui: GuiSystem::new(),
            window_title: "Batarong".to_string(),
            game,
            engine_toggle_inspector,
            last_input_state: InputState::default(),
        }
    }

    pub fn run(self) {
        PlatformRunner::new(self).start();
    }
}
