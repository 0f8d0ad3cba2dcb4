pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

pub use character::{CharacterRepository, NewCharacter};
pub use favorite::FavoriteRepository;
pub use planet::{NewPlanet, PlanetRepository};
pub use user::{NewUser, UserRepository};
