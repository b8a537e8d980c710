mod expand;
pub use expand::Options;

pub mod schema;
pub use schema::{ModelDef, ModelField};

use kiln_core::EntityDescriptor;

/// Renders the model artifact for an entity.
pub fn generate(entity: &EntityDescriptor, options: &Options) -> String {
    let model = ModelDef::from_entity(entity);
    expand::model(&model, options)
}

/// Renders the single model attribute line for a field, as it appears in
/// the artifact.
pub fn generate_field(field: &ModelField, options: &Options) -> String {
    expand::field(field, options)
}

/// Renders an already-lowered model definition.
pub fn generate_model(model: &ModelDef, options: &Options) -> String {
    expand::model(model, options)
}
