/// Scalars every GraphQL schema has without declaring them.
pub const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// Indicates whether `type_name` names something a closure should descend
/// into: neither a built-in scalar nor an introspection (`__`-prefixed) type.
pub fn is_custom_type_name(type_name: &str) -> bool {
    !BUILTIN_SCALAR_NAMES.contains(&type_name)
        && !type_name.starts_with("__")
}
