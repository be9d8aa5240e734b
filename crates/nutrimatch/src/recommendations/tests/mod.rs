mod common;
mod filter;
mod ranking;
