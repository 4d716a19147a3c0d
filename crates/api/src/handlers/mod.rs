pub mod characters;
pub mod pages;
pub mod profile;
pub mod store;
