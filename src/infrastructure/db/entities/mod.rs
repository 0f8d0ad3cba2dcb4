pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod user;

pub use character::Entity as Character;
pub use favorite_character::Entity as FavoriteCharacter;
pub use favorite_planet::Entity as FavoritePlanet;
pub use planet::Entity as Planet;
pub use user::Entity as User;
