mod common;

mod input;
mod ko;
mod moves;
mod pass;
mod territory;
