use std::fmt::{self, Display, Formatter};

use static_assertions::const_assert_eq;

use crate::basic::Board;
use crate::game::Rules;

const DEFAULT_PITCH: i32 = 10;
const DEFAULT_WIDTH: i32 = 100 * DEFAULT_PITCH;
const DEFAULT_HEIGHT: i32 = 60 * DEFAULT_PITCH;

const_assert_eq!(DEFAULT_WIDTH % DEFAULT_PITCH, 0);
const_assert_eq!(DEFAULT_HEIGHT % DEFAULT_PITCH, 0);

pub struct Prefs {
    pub board: Board,

    /// Height of the score bar below the playfield
    pub menu_height: f32,
    /// Thickness of the line separating the playfield from the score bar
    pub separator_thickness: f32,
    pub font_size: f32,

    /// Ticks per second
    pub refresh_rate: f64,
    pub food_frequency: u64,
    pub max_food: usize,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            board: Board {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
                pitch: DEFAULT_PITCH,
            },

            menu_height: 40.,
            separator_thickness: 3.,
            font_size: 30.,

            refresh_rate: 15.,
            food_frequency: 29,
            max_food: 5,
        }
    }
}

// builder
impl Prefs {
    pub fn refresh_rate(mut self, refresh_rate: f64) -> Self {
        self.refresh_rate = refresh_rate;
        self
    }

    pub fn food_frequency(mut self, food_frequency: u64) -> Self {
        self.food_frequency = food_frequency;
        self
    }

    pub fn max_food(mut self, max_food: usize) -> Self {
        self.max_food = max_food;
        self
    }
}

impl Prefs {
    pub fn rules(&self) -> Rules {
        Rules {
            food_frequency: self.food_frequency,
            max_food: self.max_food,
        }
    }

    /// Pixel size of the window: the playfield plus the score bar
    pub fn window_size(&self) -> (f32, f32) {
        (
            self.board.width as f32,
            self.board.height as f32 + self.menu_height,
        )
    }

    pub fn validate(&self) -> Result<(), PrefsError> {
        let Board { width, height, pitch } = self.board;
        if pitch <= 0 {
            return Err(PrefsError::NonPositivePitch(pitch));
        }
        if width < pitch || height < pitch || width % pitch != 0 || height % pitch != 0 {
            return Err(PrefsError::MisalignedBoard { width, height, pitch });
        }
        if !(self.refresh_rate > 0.) {
            return Err(PrefsError::ZeroRefreshRate);
        }
        if self.food_frequency == 0 {
            return Err(PrefsError::ZeroFoodFrequency);
        }
        if self.max_food == 0 {
            return Err(PrefsError::ZeroMaxFood);
        }
        Ok(())
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum PrefsError {
    NonPositivePitch(i32),
    MisalignedBoard { width: i32, height: i32, pitch: i32 },
    ZeroRefreshRate,
    ZeroFoodFrequency,
    ZeroMaxFood,
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use PrefsError::*;
        match self {
            NonPositivePitch(pitch) => write!(f, "pitch must be positive, got {}", pitch),
            MisalignedBoard { width, height, pitch } => write!(
                f,
                "a {}x{} playfield does not fit a whole grid of pitch {}",
                width, height, pitch
            ),
            ZeroRefreshRate => write!(f, "refresh rate must be positive"),
            ZeroFoodFrequency => write!(f, "food frequency must be positive"),
            ZeroMaxFood => write!(f, "max food must be positive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let prefs = Prefs::default();
        assert_eq!(prefs.validate(), Ok(()));
        assert_eq!(prefs.window_size(), (1000., 640.));
        assert_eq!(prefs.rules().food_frequency, 29);
        assert_eq!(prefs.rules().max_food, 5);
    }

    #[test]
    fn invalid_prefs_are_rejected() {
        assert_eq!(
            Prefs::default().refresh_rate(0.).validate(),
            Err(PrefsError::ZeroRefreshRate)
        );
        assert_eq!(
            Prefs::default().food_frequency(0).validate(),
            Err(PrefsError::ZeroFoodFrequency)
        );
        assert_eq!(Prefs::default().max_food(0).validate(), Err(PrefsError::ZeroMaxFood));

        let mut prefs = Prefs::default();
        prefs.board.pitch = 0;
        assert_eq!(prefs.validate(), Err(PrefsError::NonPositivePitch(0)));

        prefs.board.pitch = 30;
        assert_eq!(
            prefs.validate(),
            Err(PrefsError::MisalignedBoard { width: 1000, height: 600, pitch: 30 })
        );
    }
}
