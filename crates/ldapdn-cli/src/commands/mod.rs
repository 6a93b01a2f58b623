pub mod check;
pub mod compare;
pub mod digest;
pub mod expand;
pub mod normalize;
