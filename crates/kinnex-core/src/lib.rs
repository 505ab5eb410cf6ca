pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod qc;
pub mod sheet;

#[cfg(test)]
mod tests;
