use clap::Parser;
use nannou::prelude::*;
use tracing::{error, info};

use snakes_ladders::{
    cli::{Cli, Command, PlayArgs},
    simulation::simulate,
    snakes_ladders::{Board, Dice, InputEvent, InputQueue, Player, SeededRandom, TurnEngine},
    view::{WINDOW_HEIGHT, WINDOW_WIDTH, render},
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = Board::new().validate() {
        error!(%err, "invalid board layout");
        std::process::exit(1);
    }

    match Cli::parse().command {
        Some(Command::Simulate { games, seed }) => run_games(games, seed),
        Some(Command::Play(_)) | None => nannou::app(model).update(update).run(),
    }
}

struct Model {
    engine: TurnEngine<SeededRandom>,
    input: InputQueue,
}

fn play_args() -> PlayArgs {
    match Cli::parse().command {
        Some(Command::Play(args)) => args,
        _ => PlayArgs::default(),
    }
}

fn model(app: &App) -> Model {
    let window = app
        .new_window()
        .title("Snakes and Ladders")
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .key_pressed(key_pressed)
        .view(view)
        .build();
    if let Err(err) = window {
        error!(?err, "failed to open window");
        app.quit();
    }

    let args = play_args();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "starting game");

    Model {
        engine: TurnEngine::new(
            Board::new(),
            Player::roster(args.player1.as_str(), args.player2.as_str()),
            Dice::new(SeededRandom::new(seed)),
            args.engine_config(),
        ),
        input: InputQueue::new(),
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let event = match key {
        Key::Space => InputEvent::RollRequested,
        Key::H => InputEvent::ToggleHelpRequested,
        Key::R => InputEvent::RestartRequested,
        Key::Escape | Key::Q => InputEvent::QuitRequested,
        _ => return,
    };
    model.input.push(event);
}

fn update(app: &App, model: &mut Model, _update: Update) {
    match model.input.next_tick() {
        Some(InputEvent::QuitRequested) => {
            info!("quit requested");
            app.quit();
            return;
        }
        Some(event) => model.engine.apply(event),
        None => (),
    }
    model.engine.advance_frame();
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    render(&draw, app.window_rect(), &model.engine.snapshot());
    if let Err(err) = draw.to_frame(app, &frame) {
        error!(?err, "failed to draw frame");
    }
}

fn run_games(games: u32, seed: u64) {
    let names = ["Player 1".to_string(), "Player 2".to_string()];
    let start = std::time::Instant::now();
    let report = simulate(games, seed, &names);
    info!(games, seed, elapsed = ?start.elapsed(), "simulation finished");

    println!("============================================");
    println!("Games: {}, Unfinished: {}", report.games, report.unfinished);
    for (i, name) in names.iter().enumerate() {
        println!(
            "{} Wins: {}, Win Rate: {:.2}%",
            name,
            report.wins.get(i).copied().unwrap_or(0),
            report.win_rate(i)
        );
    }
    println!("Average Turns: {:.2}, Longest Game: {}", report.average_turns(), report.longest_game);
    println!("Snakes: {}, Ladders: {}", report.snakes, report.ladders);
    println!("============================================");
}
