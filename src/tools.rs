//! Small utilities shared by the sample and the tree modules.
pub mod helpers;
pub mod checkers;
