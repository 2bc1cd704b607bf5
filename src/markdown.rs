//! Main module for mdlex library functionality

pub mod lexing;
pub mod processor;
pub mod testing;
pub mod token;
