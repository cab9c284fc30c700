pub mod snakes_ladders;
pub mod simulation;
pub mod view;
pub mod cli;
