use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::Context;
use log::info;

use crate::app::{
    app_error::{AppError, AppErrorConversion, AppResult},
    control::Control,
    keyboard_control::Controls,
    message::{menu_messages, Screen},
    palette::Palette,
    prefs::Prefs,
};
use crate::game::{Game, Mode, Tick};

pub mod app_error;
mod control;
mod drawing;
mod keyboard_control;
mod message;
mod palette;
pub mod prefs;

pub struct App {
    game: Game,
    control: Control,
    prefs: Prefs,
    palette: Palette,
    controls: Controls,
}

impl App {
    pub fn new(prefs: Prefs) -> Self {
        Self {
            game: Game::new(prefs.board, prefs.rules()),
            control: Control::new(prefs.refresh_rate),
            palette: Palette::default(),
            controls: Controls::default(),
            prefs,
        }
    }

    pub fn wm(&self) -> WindowMode {
        let (width, height) = self.prefs.window_size();
        WindowMode::default()
            .dimensions(width, height)
            .resizable(false)
    }

    pub fn ws(&self) -> WindowSetup {
        WindowSetup::default().title("Snake").vsync(true)
    }

    /// Keep the tick clock in step with mode changes
    fn mode_changed(&mut self, before: Mode, ctx: &mut Context) {
        let after = self.game.mode();
        if before == after {
            return;
        }
        if after == Mode::Playing {
            self.control.play();
        } else if before == Mode::Playing {
            self.control.stop();
        }
        if after == Mode::Exited {
            ctx.request_quit();
        }
    }

    fn draw_game(&self, canvas: &mut Canvas, ctx: &Context) -> AppResult {
        let state = self.game.state();
        let mesh = drawing::scene_mesh(state, &self.prefs, &self.palette, ctx)?;
        canvas.draw(&mesh, DrawParam::default());

        for message in menu_messages(
            state.board(),
            state.score(),
            self.prefs.font_size,
            self.palette.text_color,
        ) {
            message.draw(canvas);
        }
        Ok(())
    }

    fn draw_screen(&self, screen: Screen, canvas: &mut Canvas) {
        let messages = screen.messages(
            self.game.state().board(),
            self.prefs.font_size,
            self.palette.text_color,
        );
        for message in messages {
            message.draw(canvas);
        }
    }
}

impl EventHandler<AppError> for App {
    fn update(&mut self, ctx: &mut Context) -> AppResult {
        while self.game.mode() == Mode::Playing && self.control.can_update() {
            let held = self.controls.held(ctx);
            let before = self.game.mode();
            if self.game.tick(&held) == Tick::Exited {
                info!("exit key held, leaving");
            }
            self.mode_changed(before, ctx);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);

        match self.game.mode() {
            Mode::Start => self.draw_screen(Screen::Start, &mut canvas),
            Mode::Playing => self.draw_game(&mut canvas, ctx).with_trace_step("draw game")?,
            Mode::Paused => {
                self.draw_game(&mut canvas, ctx).with_trace_step("draw paused game")?;
                self.draw_screen(Screen::Paused, &mut canvas);
            }
            Mode::GameOver => {
                self.draw_game(&mut canvas, ctx).with_trace_step("draw finished game")?;
                self.draw_screen(Screen::GameOver, &mut canvas);
            }
            Mode::Exited => {}
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, _input: KeyInput, _repeat: bool) -> AppResult {
        // replaces ggez's default of quitting on escape, held keys
        // are sampled in update()
        Ok(())
    }

    fn key_up_event(&mut self, ctx: &mut Context, input: KeyInput) -> AppResult {
        let menu_key = input
            .keycode
            .and_then(|key: KeyCode| self.controls.menu_key(key));
        if let Some(key) = menu_key {
            let before = self.game.mode();
            self.game.key_released(key);
            self.mode_changed(before, ctx);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool, AppError> {
        info!(
            "quitting after {} ticks, final score {}",
            self.game.frame(),
            self.game.state().score()
        );
        self.game.quit();
        // false lets the window close
        Ok(false)
    }
}
