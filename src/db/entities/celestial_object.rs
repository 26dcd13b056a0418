//! Celestial object entity (stars, planets, moons)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "celestial_objects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub orbital_period: f64,
    /// Id of the body this object orbits; None for objects that orbit
    /// nothing (e.g. a star). Not validated against existing rows.
    pub orbited_object_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
