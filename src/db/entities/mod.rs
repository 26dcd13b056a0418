//! Database entities

pub mod celestial_object;

pub use celestial_object::Entity as CelestialObject;
