pub mod argsets;
pub mod command;
pub mod constants;
pub mod dtos;
pub mod helpers;
