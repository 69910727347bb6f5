mod reconstruct;
mod turns;

pub use reconstruct::Reconstruct;
pub use turns::Turns;
