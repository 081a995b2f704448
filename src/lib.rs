//! Meeting room scheduling: a first-fit allocator over a room × time-slot
//! grid, and an N-Queens layout projected onto the same grid.

pub mod config;
pub mod parser;
pub mod schedule;
pub mod display;
pub mod export;
pub mod web;
