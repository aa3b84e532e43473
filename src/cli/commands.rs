pub mod check;
pub mod export;

pub use check::check;
pub use export::export;
