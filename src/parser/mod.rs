pub mod team_parser;

pub use team_parser::{Parser, TeamListParser};
