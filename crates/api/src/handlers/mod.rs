pub mod character;
pub mod company;
