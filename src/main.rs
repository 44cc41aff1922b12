#[macro_use]
extern crate derive_more;

use env_logger::Env;
use ggez::{event, ContextBuilder};
use log::{error, info};

use crate::app::{
    app_error::{AppError, AppErrorConversion, AppResult},
    prefs::Prefs,
    App,
};

mod app;
mod basic;
mod game;

fn log_failure<T>(result: AppResult<T>) -> AppResult<T> {
    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

fn main() -> AppResult {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let prefs = Prefs::default();
    log_failure(
        prefs
            .validate()
            .map_err(AppError::from)
            .with_trace_step("validate preferences"),
    )?;

    let app = App::new(prefs);
    let (ctx, event_loop) = log_failure(
        ContextBuilder::new("snake", "snake")
            .window_setup(app.ws())
            .window_mode(app.wm())
            .build()
            .map_err(AppError::from)
            .with_trace_step("create window"),
    )?;

    let wm = app.wm();
    info!("window {}x{}", wm.width, wm.height);
    event::run(ctx, event_loop, app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prefs::PrefsError;

    #[test]
    fn failures_pass_through_unchanged() {
        assert_eq!(log_failure(Ok(3)).ok(), Some(3));

        let failed: AppResult<u8> = Err(AppError::from(PrefsError::ZeroMaxFood));
        let err = log_failure(failed.with_trace_step("validate preferences")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid preferences: max food must be positive (in validate preferences)"
        );
    }
}
