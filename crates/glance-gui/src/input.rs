use glance_core::config::ViewerConfig;
use glance_core::viewport::Direction;

/// A single view mutation requested by the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewAction {
    SetScale(f64),
    ScaleBy(f64),
    Rotate(Direction),
    Reset,
    Quit,
}

/// Translate this pass's keyboard and wheel input into view actions.
///
/// Digit presets on Ctrl or Alt, +/- zoom on Ctrl, `r` and the arrow keys
/// to rotate, `a` to restore the defaults, Escape to quit. Pointer
/// gestures (double-click, right-click, drag) are read off the panel
/// response instead.
pub fn collect_actions(ctx: &egui::Context, config: &ViewerConfig) -> Vec<ViewAction> {
    ctx.input(|i| {
        let mut actions = Vec::new();
        let mods = i.modifiers;
        let preset_mod = mods.ctrl || mods.alt;

        if i.key_pressed(egui::Key::Escape) {
            actions.push(ViewAction::Quit);
        }

        if preset_mod && i.key_pressed(egui::Key::Num1) {
            actions.push(ViewAction::SetScale(config.scale_presets[0]));
        }
        if preset_mod && i.key_pressed(egui::Key::Num2) {
            actions.push(ViewAction::SetScale(config.scale_presets[1]));
        }
        if preset_mod && i.key_pressed(egui::Key::Num3) {
            actions.push(ViewAction::SetScale(config.scale_presets[2]));
        }
        // Ctrl+Alt+0 is an alias for the 100% preset.
        if mods.ctrl && mods.alt && i.key_pressed(egui::Key::Num0) {
            actions.push(ViewAction::SetScale(config.scale_presets[1]));
        }

        if mods.ctrl && (i.key_pressed(egui::Key::Equals) || i.key_pressed(egui::Key::Plus)) {
            actions.push(ViewAction::ScaleBy(config.key_scale_step));
        }
        if mods.ctrl && i.key_pressed(egui::Key::Minus) {
            actions.push(ViewAction::ScaleBy(1.0 / config.key_scale_step));
        }

        if i.key_pressed(egui::Key::R) {
            actions.push(ViewAction::Rotate(if mods.shift {
                Direction::CounterClockwise
            } else {
                Direction::Clockwise
            }));
        }
        if i.key_pressed(egui::Key::ArrowRight) {
            actions.push(ViewAction::Rotate(Direction::Clockwise));
        }
        if i.key_pressed(egui::Key::ArrowLeft) {
            actions.push(ViewAction::Rotate(Direction::CounterClockwise));
        }
        if i.key_pressed(egui::Key::A) {
            actions.push(ViewAction::Reset);
        }

        // One wheel notch, one discrete step; the sign of the frame's raw
        // delta picks the direction.
        let scroll = i.raw_scroll_delta.y;
        if scroll > 0.0 {
            actions.push(ViewAction::ScaleBy(config.scroll_scale_step));
        } else if scroll < 0.0 {
            actions.push(ViewAction::ScaleBy(1.0 / config.scroll_scale_step));
        }

        actions
    })
}
