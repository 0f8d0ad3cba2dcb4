pub mod favorites;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;
