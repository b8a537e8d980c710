/// Data types available to the generated model definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Boolean,
    Date,
    Float,
    Integer,
    Json,
    String,
    Text,
    Uuid,

    /// A list of values of the inner type.
    Array(Box<Type>),
}

impl Type {
    pub fn array(item: Type) -> Type {
        Type::Array(Box::new(item))
    }
}
