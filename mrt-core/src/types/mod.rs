//! Domain types served by the MRT API

pub mod company;
pub mod warp;
pub mod world;

pub use company::*;
pub use warp::*;
pub use world::*;
