use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text};

use crate::basic::Board;

/// A line of text at a fixed position in the window
pub struct Message {
    pub text: String,
    /// Top left corner
    pub dest: [f32; 2],
    pub font_size: f32,
    pub color: Color,
}

impl Message {
    pub fn new<S: ToString>(text: S, dest: [f32; 2], font_size: f32, color: Color) -> Self {
        Self {
            text: text.to_string(),
            dest,
            font_size,
            color,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size));
        canvas.draw(&text, DrawParam::default().dest(self.dest).color(self.color));
    }
}

/// Which set of messages to show, positions are relative to the playfield
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Screen {
    Start,
    Paused,
    GameOver,
}

impl Screen {
    fn lines(self) -> &'static [(&'static str, f32, f32)] {
        // (text, width divisor, height divisor)
        match self {
            Screen::Start => &[("Press 's' to start game", 3., 5.)],
            Screen::Paused => &[("Game paused", 2.5, 5.), ("Press 'c' to continue", 2.75, 4.)],
            Screen::GameOver => &[
                ("GAME OVER!", 2.5, 5.),
                ("Press 'n' to play again", 3., 4.),
                ("Press 'Esc' to exit", 2.75, 3.5),
            ],
        }
    }

    pub fn messages(self, board: &Board, font_size: f32, color: Color) -> Vec<Message> {
        let (width, height) = (board.width as f32, board.height as f32);
        self.lines()
            .iter()
            .map(|&(text, w_div, h_div)| {
                let dest = [(width / w_div).floor(), (height / h_div).floor()];
                Message::new(text, dest, font_size, color)
            })
            .collect()
    }
}

/// Score and instructions drawn in the bar below the playfield
pub fn menu_messages(board: &Board, score: u32, font_size: f32, color: Color) -> [Message; 2] {
    let (width, height) = (board.width as f32, board.height as f32);
    let y = height + board.pitch as f32;
    [
        Message::new(format!("Score: {}", score), [0., y], font_size, color),
        Message::new(
            "'p'-Pause | 'Esc'-Exit",
            [(width * 2.25 / 3.).floor(), y],
            font_size,
            color,
        ),
    ]
}
