mod character;
mod common;
mod favorite;
mod planet;
mod user;

pub use character::*;
pub use common::*;
pub use favorite::*;
pub use planet::*;
pub use user::*;
