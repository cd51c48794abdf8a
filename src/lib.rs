//! Step-by-step sorting visualizer.
//!
//! The sorting core (`engine`, `algorithms`, `generator`) and the
//! interaction layer (`controller`, `input`, `scene`) are plain Rust with no
//! GPU dependency; `renderer` puts a composed scene on screen.

pub mod algorithms;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod generator;
pub mod input;
pub mod renderer;
pub mod scene;
