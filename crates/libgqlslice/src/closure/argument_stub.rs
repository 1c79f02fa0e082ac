use crate::types::TypeKind;

/// Guess the definition of an argument or variable input type from its name
/// alone.
///
/// Hasura-style schemas name their filter, sort and column-selector inputs
/// with fixed suffixes; those get a small plausible body. This is a
/// heuristic: the real shape of the input is never introspected here, and
/// the stubs are expected to stay exactly as they are.
///
/// `kind_hint` only influences the fallback for names without a recognised
/// suffix.
pub fn synthesize_argument_stub(type_name: &str, kind_hint: Option<TypeKind>) -> String {
    if type_name.ends_with("_select_column") {
        format!("enum {type_name} {{\n  id\n}}")
    } else if type_name.ends_with("_order_by") {
        format!("input {type_name} {{\n  id : order_by\n}}")
    } else if type_name.ends_with("_bool_exp") {
        format!(concat!(
            "input {name} {{\n",
            "  _and: [{name}!]\n",
            "  _not: {name}\n",
            "  _or: [{name}!]\n",
            "}}",
        ), name = type_name)
    } else {
        match kind_hint {
            Some(TypeKind::Enum) => format!("enum {type_name} {{\n}}"),
            Some(TypeKind::Scalar) => format!("scalar {type_name}"),
            _ => format!("input {type_name} {{\n}}"),
        }
    }
}
