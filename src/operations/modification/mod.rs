mod split;
mod trim;

pub use split::Split;
pub use trim::Trim;
