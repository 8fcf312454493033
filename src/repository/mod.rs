//! Query layer over the entities. Every repository borrows a connection handle,
//! either the pool or an open transaction, and every write runs in its own
//! transaction (a savepoint when the handle is already a transaction).

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

pub use character::{CharacterRepository, NewCharacter};
pub use favorite::FavoriteRepository;
pub use planet::{NewPlanet, PlanetRepository};
pub use user::{NewUser, UserRepository};
