use crate::basic::Dir;

/// Instantaneous pressed state of the keys sampled on every tick
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub struct HeldKeys {
    pub exit: bool,
    pub pause: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// What a tick does with the held keys
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Action {
    Exit,
    Pause,
    Turn(Dir),
}

/// Keys that only matter on release, outside of play
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MenuKey {
    Start,
    Continue,
    NewGame,
    Exit,
}

type Binding = (fn(&HeldKeys) -> bool, Action);

impl HeldKeys {
    /// The first held key in priority order decides the action,
    /// all others are ignored for this tick
    pub fn action(&self) -> Option<Action> {
        let chain: [Binding; 6] = [
            (|k| k.exit, Action::Exit),
            (|k| k.pause, Action::Pause),
            (|k| k.up, Action::Turn(Dir::U)),
            (|k| k.down, Action::Turn(Dir::D)),
            (|k| k.left, Action::Turn(Dir::L)),
            (|k| k.right, Action::Turn(Dir::R)),
        ];

        chain
            .iter()
            .find(|(held, _)| held(self))
            .map(|&(_, action)| action)
    }
}
