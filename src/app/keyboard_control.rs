use ggez::input::keyboard::KeyCode::{self, *};
use ggez::Context;

use crate::game::{HeldKeys, MenuKey};

/// Key bindings, both for keys sampled every tick and for
/// keys acted upon when released
#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub start: KeyCode,
    pub pause: KeyCode,
    pub resume: KeyCode,
    pub new_game: KeyCode,
    pub exit: KeyCode,

    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        #[rustfmt::skip]
        let controls = Self {
            start: S, pause: P, resume: C, new_game: N, exit: Escape,
            u: Up, d: Down, l: Left, r: Right,
        };
        controls
    }
}

impl Controls {
    /// Which of the bound keys are currently down
    pub fn held(&self, ctx: &Context) -> HeldKeys {
        self.held_with(|key| ctx.keyboard.is_key_pressed(key))
    }

    fn held_with(&self, is_pressed: impl Fn(KeyCode) -> bool) -> HeldKeys {
        HeldKeys {
            exit: is_pressed(self.exit),
            pause: is_pressed(self.pause),
            up: is_pressed(self.u),
            down: is_pressed(self.d),
            left: is_pressed(self.l),
            right: is_pressed(self.r),
        }
    }

    pub fn menu_key(&self, key: KeyCode) -> Option<MenuKey> {
        match key {
            k if k == self.start => Some(MenuKey::Start),
            k if k == self.resume => Some(MenuKey::Continue),
            k if k == self.new_game => Some(MenuKey::NewGame),
            k if k == self.exit => Some(MenuKey::Exit),
            _ => None,
        }
    }
}
