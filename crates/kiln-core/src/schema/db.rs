/// Column storage types the DDL target knows about.
///
/// These are the tokens the type mapping produces for the relational side;
/// rendering them to SQL text is the serializer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Boolean,
    Float,
    Integer,
    Json,
    Text,
    Timestamp,
    Uuid,

    /// A length-bounded string.
    VarChar(u64),
}

impl Type {
    /// Storage type of a column that references another entity's key.
    pub const REFERENCE: Type = Type::Integer;

    /// Default string storage type.
    pub const STRING: Type = Type::VarChar(255);
}
