//! Render collaborator boundary
//!
//! The core knows nothing about graphics-API handles; it supplies the
//! render collaborator a read-only snapshot of drawable data per frame, in
//! entity-id order. Rotation is Euler degrees per axis, applied Z-Y-X.

use crate::components::{Label, Quad, Texture, Transform};
use crate::ecs::{EntityId, EntityState, Signature, World};
use crate::foundation::math::{Vec2, Vec3};

/// One world-space textured quad to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadInstance {
    /// Entity the quad belongs to
    pub entity: EntityId,
    /// World position
    pub position: Vec3,
    /// Euler rotation in degrees (Z-Y-X application order)
    pub rotation: Vec3,
    /// Quad width and height
    pub extent: Vec2,
    /// Facing normal
    pub normal: Vec3,
    /// Atlas index
    pub texture_index: u32,
    /// Atlas sub-rectangle top-left, in pixels
    pub texture_position: Vec2,
    /// Atlas sub-rectangle size, in pixels
    pub texture_size: Vec2,
    /// RGB tint
    pub color: Vec3,
    /// Whether arena lighting applies
    pub use_light: bool,
}

/// One screen-space text label to draw
#[derive(Debug, Clone, PartialEq)]
pub struct LabelInstance {
    /// Entity the label belongs to
    pub entity: EntityId,
    /// Screen position
    pub position: Vec3,
    /// Text scale
    pub scale: Vec3,
    /// RGB text color
    pub color: Vec3,
    /// Text to draw
    pub text: String,
}

/// Collect drawable quads for every active RENDER entity, in id order.
pub fn collect_quads(world: &World) -> Vec<QuadInstance> {
    let mut quads = Vec::new();
    for entity in 0..world.entities.num_entities() {
        if world.entities.state(entity) != EntityState::Active
            || !world.entities.signature(entity).contains(Signature::RENDER)
        {
            continue;
        }
        let transform = world.components.get::<Transform>(entity);
        let quad = world.components.get::<Quad>(entity);
        let texture = world.components.get::<Texture>(entity);
        quads.push(QuadInstance {
            entity,
            position: transform.position,
            rotation: transform.rotation,
            extent: quad.extent,
            normal: quad.normal,
            texture_index: texture.texture_index,
            texture_position: texture.position,
            texture_size: texture.size,
            color: texture.color,
            use_light: texture.use_light,
        });
    }
    quads
}

/// Collect drawable labels for every active HUD entity, in id order.
pub fn collect_labels(world: &World) -> Vec<LabelInstance> {
    let mut labels = Vec::new();
    for entity in 0..world.entities.num_entities() {
        if world.entities.state(entity) != EntityState::Active
            || !world.entities.signature(entity).contains(Signature::HUD)
        {
            continue;
        }
        let transform = world.components.get::<Transform>(entity);
        let label = world.components.get::<Label>(entity);
        labels.push(LabelInstance {
            entity,
            position: transform.position,
            scale: transform.scale,
            color: label.color,
            text: label.text.clone(),
        });
    }
    labels
}
