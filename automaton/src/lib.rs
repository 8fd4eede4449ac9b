//! Binary cellular automata on a wrapping (toroidal) board.
//!
//! A [`Rule`] pairs a [`Neighbourhood`] with a [`Fate`] and turns one
//! [`Grid`] into the next. [`Simulation`] drives that step by step and hands
//! each generation to a [`Render`] sink.

pub mod config;
mod coord;
mod engine;
mod error;
mod fate;
mod grid;
mod neighbourhood;
pub mod pattern;
pub mod render;
mod simulation;


pub use crate::{
    coord::Coord,
    engine::{Rule, step},
    error::{Error, Result},
    fate::Fate,
    grid::Grid,
    neighbourhood::Neighbourhood,
    simulation::{Flow, Render, Simulation},
};
