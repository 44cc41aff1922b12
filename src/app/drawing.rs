use ggez::{
    graphics::{DrawMode, Mesh, MeshBuilder, Rect},
    Context, GameResult,
};

use crate::{
    app::{palette::Palette, prefs::Prefs},
    basic::Cell,
    game::GameState,
};

fn cell_rect(cell: Cell, pitch: i32) -> Rect {
    Rect::new(cell.x as f32, cell.y as f32, pitch as f32, pitch as f32)
}

/// The separator above the score bar, every snake segment and every
/// piece of food, in that order
pub fn scene_mesh(
    state: &GameState,
    prefs: &Prefs,
    palette: &Palette,
    ctx: &Context,
) -> GameResult<Mesh> {
    let board = state.board();
    let mut builder = MeshBuilder::new();

    let separator = Rect::new(
        0.,
        board.height as f32,
        board.width as f32,
        prefs.separator_thickness,
    );
    builder.rectangle(DrawMode::fill(), separator, palette.separator_color)?;

    for &cell in state.snake().cells() {
        builder.rectangle(
            DrawMode::fill(),
            cell_rect(cell, board.pitch),
            palette.snake_color,
        )?;
    }

    for &cell in state.food().cells() {
        builder.rectangle(
            DrawMode::fill(),
            cell_rect(cell, board.pitch),
            palette.food_color,
        )?;
    }

    Ok(Mesh::from_data(ctx, builder.build()))
}
