use ggez::graphics::Color;

pub struct Palette {
    pub background_color: Color,
    pub separator_color: Color,
    pub snake_color: Color,
    pub food_color: Color,
    pub text_color: Color,
}

impl Palette {
    pub fn classic() -> Self {
        Self {
            background_color: Color::BLACK,
            separator_color: Color::WHITE,
            snake_color: Color::WHITE,
            food_color: Color::from_rgb(0, 255, 0),
            text_color: Color::WHITE,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
