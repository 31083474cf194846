// crates/batarong_core/src/inspector.rs
use egui::{Color32, Context};

use batarong_shared::{CCamera, CTransform, InputState};

use crate::input::ActionRegistry;

/// Debug window (F1): resolved input mask plus camera state.
pub fn show(
    ctx: &Context,
    registry: &ActionRegistry,
    input_state: &InputState,
    world: &batarong_ecs::World,
    open: &mut bool,
) {
    egui::Window::new("Debug Inspector")
        .open(open)
        .show(ctx, |ui| {
            ui.heading("Input");
            ui.separator();

            let mut actions: Vec<(&str, u32)> = registry.iter().collect();
            actions.sort_by_key(|&(_, id)| id);

            for (name, id) in actions {
                if input_state.is_active(id) {
                    ui.colored_label(Color32::GREEN, format!("[{id:>2}] {name}"));
                } else {
                    ui.colored_label(Color32::from_gray(100), format!("[{id:>2}] {name}"));
                }
            }

            ui.separator();
            ui.heading("Camera");

            if let Some(cameras) = world.query::<CCamera>() {
                for (entity, _) in cameras.iter() {
                    if let Some(transform) = world.get_component::<CTransform>(*entity) {
                        ui.label(format!("x offset: {:.1}", transform.pos.x));
                    }
                }
            }
        });
}
