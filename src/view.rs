use nannou::{
    color::{self, BLACK, BLUE, LIGHTBLUE, LIGHTGREEN, LIGHTYELLOW, ORANGE, RED, WHITE},
    geom::Rect,
    prelude::*,
};

use crate::snakes_ladders::{Board, DiceRoll, Jump, Player, Snapshot, Square, TurnState};

pub const WINDOW_WIDTH: u32 = 600;
pub const WINDOW_HEIGHT: u32 = 700;
pub const PANEL_HEIGHT: f32 = 100.0;

const HELP_LINES: [&str; 6] = [
    "1. Press SPACE to roll the dice",
    "2. Land on a ladder to climb up",
    "3. Land on a snake to slide down",
    "4. First player to reach 100 wins",
    "5. Press H to toggle instructions",
    "6. Press R to restart game when over",
];

// Pip positions on a unit die, centred at the origin.
const PIPS: [&[(f32, f32)]; 6] = [
    &[(0.0, 0.0)],
    &[(-0.4, 0.4), (0.4, -0.4)],
    &[(-0.4, 0.4), (0.0, 0.0), (0.4, -0.4)],
    &[(-0.4, 0.4), (0.4, 0.4), (-0.4, -0.4), (0.4, -0.4)],
    &[(-0.4, 0.4), (0.4, 0.4), (0.0, 0.0), (-0.4, -0.4), (0.4, -0.4)],
    &[(-0.4, 0.4), (0.4, 0.4), (-0.4, 0.0), (0.4, 0.0), (-0.4, -0.4), (0.4, -0.4)],
];

/// Splits the window into the square board on top and the status panel below.
pub fn layout(window: Rect) -> (Rect, Rect) {
    let side = window.w().min(window.h() - PANEL_HEIGHT).max(0.0);
    let board = Rect::from_x_y_w_h(window.x(), window.top() - side / 2.0, side, side);
    let panel = Rect::from_x_y_w_h(window.x(), window.bottom() + PANEL_HEIGHT / 2.0, window.w(), PANEL_HEIGHT);
    (board, panel)
}

/// Centre of a square in window coordinates.
pub fn square_center(board: Rect, square: Square) -> Vec2 {
    let size = board.w() / Board::SIZE as f32;
    let (row, col) = Board::cell(square);
    pt2(
        board.left() + (col as f32 + 0.5) * size,
        board.bottom() + (row as f32 + 0.5) * size,
    )
}

/// Draws one frame from the snapshot. Reads game state only.
pub fn render(draw: &Draw, window: Rect, snapshot: &Snapshot<'_>) {
    let (board_rect, panel_rect) = layout(window);

    draw.background().color(WHITE);
    draw_squares(draw, board_rect);
    draw_ladders(draw, board_rect, snapshot.board);
    draw_snakes(draw, board_rect, snapshot.board);
    draw_players(draw, board_rect, snapshot.players);

    match snapshot.state {
        TurnState::GameOver(_) => {
            if let Some(winner) = snapshot.winner() {
                draw_message(draw, board_rect, &format!("{} wins!", winner.name()));
            }
        }
        _ => draw_panel(draw, panel_rect, snapshot),
    }

    if snapshot.help_visible {
        draw_help(draw, board_rect);
    }
}

fn draw_squares(draw: &Draw, board: Rect) {
    let size = board.w() / Board::SIZE as f32;
    for square in Board::FIRST_SQUARE..=Board::LAST_SQUARE {
        let (row, col) = Board::cell(square);
        let center = square_center(board, square);
        let fill = if (row + col) % 2 == 0 { LIGHTBLUE } else { LIGHTYELLOW };

        draw.rect()
            .xy(center)
            .w_h(size, size)
            .color(fill)
            .stroke(BLACK)
            .stroke_weight(1.0);

        draw.text(&square.to_string())
            .xy(center + vec2(-size * 0.28, size * 0.3))
            .font_size((size / 5.0) as u32)
            .color(BLACK);
    }
}

fn draw_ladders(draw: &Draw, board: Rect, layout: &Board) {
    for (&from, &to) in layout.ladders() {
        let start = square_center(board, from);
        let end = square_center(board, to);
        let along = end - start;
        let side = vec2(-along.y, along.x).normalize_or_zero() * 8.0;

        for rail in [side, -side] {
            draw.line().start(start + rail).end(end + rail).weight(3.0).color(ORANGE);
        }

        let rungs = (along.length() / 20.0) as usize;
        for i in 0..rungs {
            let t = if rungs > 1 { i as f32 / (rungs - 1) as f32 } else { 0.0 };
            let rung = start + along * t;
            draw.line().start(rung + side).end(rung - side).weight(2.0).color(ORANGE);
        }
    }
}

fn draw_snakes(draw: &Draw, board: Rect, layout: &Board) {
    for (&from, &to) in layout.snakes() {
        let head = square_center(board, from);
        let tail = square_center(board, to);
        let control = (head + tail) / 2.0 + vec2(20.0, 0.0);

        let body = (0..=20).map(|i| {
            let t = i as f32 / 20.0;
            head * (1.0 - t).powi(2) + control * 2.0 * (1.0 - t) * t + tail * t.powi(2)
        });
        draw.polyline().weight(4.0).points(body).color(RED);

        draw.ellipse().xy(head).radius(8.0).color(RED);
        for eye in [vec2(-3.0, 3.0), vec2(3.0, 3.0)] {
            draw.ellipse().xy(head + eye).radius(2.0).color(BLACK);
        }
    }
}

fn draw_players(draw: &Draw, board: Rect, players: &[Player]) {
    let size = board.w() / Board::SIZE as f32;
    for (i, player) in players.iter().enumerate() {
        let shared = players.iter().filter(|p| p.position() == player.position()).count() > 1;
        let offset = if shared { (i as f32 - 0.5) * size * 0.3 } else { 0.0 };
        let center = square_center(board, player.position()) + vec2(offset, 0.0);

        draw.ellipse()
            .xy(center)
            .radius(size * 0.25)
            .color(token_color(player))
            .stroke(BLACK)
            .stroke_weight(2.0);
        draw.text(&(i + 1).to_string())
            .xy(center)
            .font_size((size / 4.0) as u32)
            .color(WHITE);
    }
}

fn token_color(player: &Player) -> color::Srgb<u8> {
    let [r, g, b] = player.color();
    color::rgb8(r, g, b)
}

fn draw_panel(draw: &Draw, panel: Rect, snapshot: &Snapshot<'_>) {
    let player = snapshot.current();
    match snapshot.last_roll {
        None => {
            let indicator = Rect::from_x_y_w_h(panel.left() + 120.0, panel.y() - 10.0, 200.0, 40.0);
            draw.rect()
                .xy(indicator.xy())
                .wh(indicator.wh())
                .color(LIGHTGREEN)
                .stroke(token_color(player))
                .stroke_weight(3.0);
            draw.text(&format!("{}'s Turn", player.name()))
                .xy(indicator.xy())
                .w(indicator.w())
                .font_size(18)
                .color(BLACK);
            draw.text("Press SPACE to roll dice")
                .x_y(panel.right() - 120.0, panel.y() - 10.0)
                .w(220.0)
                .font_size(16)
                .color(BLACK);
        }
        Some(roll) => {
            // The turn has already passed on; name whoever rolled.
            let roller = snapshot
                .last_move
                .and_then(|m| snapshot.players.get(m.player))
                .unwrap_or(player);
            draw.text(&format!("{}'s Roll", roller.name()))
                .x_y(panel.left() + 90.0, panel.y() - 10.0)
                .w(160.0)
                .font_size(18)
                .color(token_color(roller));
            draw_dice(draw, pt2(panel.x(), panel.y() - 15.0), roll);
            draw.text(&format!("Total: {}", roll.total()))
                .x_y(panel.x(), panel.top() - 15.0)
                .font_size(18)
                .color(BLACK);
            if let Some(jump) = snapshot.last_move.and_then(|m| m.jump) {
                let note = match jump {
                    Jump::Snake(to) => format!("Snake! Down to {to}"),
                    Jump::Ladder(to) => format!("Ladder! Up to {to}"),
                };
                draw.text(&note)
                    .x_y(panel.right() - 100.0, panel.y() - 10.0)
                    .w(180.0)
                    .font_size(16)
                    .color(BLACK);
            }
        }
    }
}

fn draw_dice(draw: &Draw, center: Vec2, roll: DiceRoll) {
    const SIDE: f32 = 50.0;
    for (face, offset) in [(roll.die1(), -35.0), (roll.die2(), 35.0)] {
        let die = center + vec2(offset, 0.0);
        draw.rect()
            .xy(die)
            .w_h(SIDE, SIDE)
            .color(WHITE)
            .stroke(BLACK)
            .stroke_weight(2.0);
        for &(x, y) in PIPS[face as usize - 1] {
            draw.ellipse()
                .xy(die + vec2(x, y) * SIDE / 2.0)
                .radius(5.0)
                .color(BLACK);
        }
    }
}

fn draw_overlay(draw: &Draw, board: Rect, alpha: f32) {
    draw.rect().xy(board.xy()).wh(board.wh()).color(rgba(0.0, 0.0, 0.0, alpha));
}

fn draw_message(draw: &Draw, board: Rect, message: &str) {
    draw_overlay(draw, board, 0.7);
    draw.rect()
        .xy(board.xy())
        .w_h(400.0, 100.0)
        .color(LIGHTBLUE)
        .stroke(BLUE)
        .stroke_weight(4.0);
    draw.text(message)
        .xy(board.xy() + vec2(0.0, 12.0))
        .w(380.0)
        .font_size(32)
        .color(BLUE);
    draw.text("Press R to restart")
        .xy(board.xy() - vec2(0.0, 28.0))
        .w(380.0)
        .font_size(16)
        .color(BLACK);
}

fn draw_help(draw: &Draw, board: Rect) {
    let (width, height) = (500.0, 300.0);
    let top = board.y() + height / 2.0;

    draw_overlay(draw, board, 0.8);
    draw.rect()
        .xy(board.xy())
        .w_h(width, height)
        .color(LIGHTBLUE)
        .stroke(BLUE)
        .stroke_weight(4.0);
    draw.text("Snakes and Ladders")
        .x_y(board.x(), top - 35.0)
        .w(width - 20.0)
        .font_size(28)
        .color(BLUE);

    for (i, line) in HELP_LINES.iter().enumerate() {
        draw.text(line)
            .x_y(board.x(), top - 80.0 - i as f32 * 30.0)
            .w(width - 60.0)
            .left_justify()
            .font_size(18)
            .color(BLACK);
    }
}
