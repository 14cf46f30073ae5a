use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::core::{Controls, Shift};

#[derive(Actionlike, PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum GameControl {
    MoveLeft,
    MoveRight,
    RotateClockwise,
    SoftDrop,
}

pub struct ActionsPlugin;

impl Plugin for ActionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugin(InputManagerPlugin::<GameControl>::default())
            .add_startup_system(spawn_input);
    }
}

fn spawn_input(mut commands: Commands) {
    commands.spawn(InputManagerBundle::<GameControl> {
        action_state: ActionState::default(),
        input_map: InputMap::new([
            (KeyCode::Left, GameControl::MoveLeft),
            (KeyCode::Right, GameControl::MoveRight),
            (KeyCode::Up, GameControl::RotateClockwise),
            (KeyCode::Down, GameControl::SoftDrop),
        ]),
        ..default()
    });
}

/// Samples the keys the game cares about for one step.
pub fn read_controls(action_state: &ActionState<GameControl>) -> Controls {
    Controls {
        shift: Shift::from_held(
            action_state.pressed(GameControl::MoveLeft),
            action_state.pressed(GameControl::MoveRight),
        ),
        rotate: action_state.just_pressed(GameControl::RotateClockwise),
        soft_drop: action_state.pressed(GameControl::SoftDrop),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_keys() {
        assert_eq!(read_controls(&ActionState::default()), Controls::default());
    }

    #[test]
    fn test_pressed_keys_map_to_controls() {
        let mut action_state = ActionState::<GameControl>::default();
        action_state.press(GameControl::MoveLeft);
        action_state.press(GameControl::RotateClockwise);
        action_state.press(GameControl::SoftDrop);

        let controls = read_controls(&action_state);
        assert_eq!(controls.shift, Some(Shift::Left));
        assert!(controls.rotate);
        assert!(controls.soft_drop);
    }

    #[test]
    fn test_left_and_right_cancel() {
        let mut action_state = ActionState::<GameControl>::default();
        action_state.press(GameControl::MoveLeft);
        action_state.press(GameControl::MoveRight);
        assert_eq!(read_controls(&action_state).shift, None);
    }
}
