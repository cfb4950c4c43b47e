pub mod inverse;

pub use inverse::inverse;
