//! Plain-data component records
//!
//! Components carry no behavior; systems mutate them through the
//! [`crate::ecs::ComponentStore`] during their update pass.

pub mod ai_data;
pub mod animation;
pub mod bounding_box;
pub mod label;
pub mod player;
pub mod quad;
pub mod rigid_body;
pub mod texture;
pub mod transform;

pub use ai_data::AiData;
pub use animation::Animation;
pub use bounding_box::BoundingBox;
pub use label::Label;
pub use player::{PlayerInput, PlayerState};
pub use quad::Quad;
pub use rigid_body::RigidBody;
pub use texture::Texture;
pub use transform::Transform;
