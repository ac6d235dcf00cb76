pub mod inspect;
pub mod seed;
pub mod validate;
