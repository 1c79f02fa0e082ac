use crate::closure::ClosureError;
use crate::types::FieldDefinition;
use crate::types::TypeDefinition;
use crate::types::TypeKind;
use indexmap::IndexSet;

/// Custom scalar names that always render as a bare `scalar` declaration in
/// query mode, whatever kind the schema gives them.
pub const CONVENTIONAL_SCALAR_NAMES: [&str; 3] = [
    "json",
    "timestamptz",
    "uuid",
];

pub(crate) fn write_scalar(type_name: &str) -> String {
    format!("scalar {type_name}")
}

pub(crate) fn write_enum(type_def: &TypeDefinition) -> String {
    let mut out = format!("enum {} {{\n", type_def.name());
    for value in type_def.enum_values() {
        out.push_str("  ");
        out.push_str(value);
        out.push('\n');
    }
    out.push('}');
    out
}

/// Render the query-mode fragment for a type reached through a selection,
/// listing only the `selected` fields it declares (in declaration order).
pub(crate) fn write_selected_type(
    type_def: &TypeDefinition,
    selected: &IndexSet<String>,
) -> String {
    if CONVENTIONAL_SCALAR_NAMES.contains(&type_def.name())
        || type_def.kind() == TypeKind::Scalar {
        return write_scalar(type_def.name());
    }

    let keyword = match type_def.kind() {
        TypeKind::Enum => return write_enum(type_def),
        TypeKind::InputObject => "input",
        TypeKind::Interface => "interface",
        TypeKind::Object | TypeKind::Scalar | TypeKind::Union => "type",
    };

    let mut out = format!("{keyword} {} {{\n", type_def.name());
    for field in type_def.fields() {
        if selected.contains(field.name()) {
            out.push_str("  ");
            out.push_str(field.name());
            out.push_str(write_argument_list(field).as_str());
            out.push_str(": ");
            out.push_str(field.type_annotation().to_string().as_str());
            out.push('\n');
        }
    }
    out.push('}');
    out
}

/// Render the complete definition of a type, every field included.
pub(crate) fn write_full_type(type_def: &TypeDefinition) -> Result<String, ClosureError> {
    match type_def.kind() {
        TypeKind::Enum => Ok(write_enum(type_def)),
        kind @ (TypeKind::InputObject | TypeKind::Interface | TypeKind::Object) => {
            let mut out = format!("{} {} {{\n", kind.sdl_keyword(), type_def.name());
            for field in type_def.fields() {
                out.push_str(format!(
                    "  {}: {}\n",
                    field.name(),
                    field.type_annotation(),
                ).as_str());
            }
            out.push('}');
            Ok(out)
        },
        TypeKind::Scalar => Ok(write_scalar(type_def.name())),
        kind @ TypeKind::Union => Err(ClosureError::UnsupportedTypeKind {
            kind,
            type_name: type_def.name().to_string(),
        }),
    }
}

/// `(arg:Base,arg2:Base)`, or nothing for a field without arguments. Only
/// base type names are written; list and non-null wrapping is dropped.
fn write_argument_list(field: &FieldDefinition) -> String {
    if field.arguments().is_empty() {
        return String::new();
    }
    let args = field.arguments().iter()
        .map(|arg| format!("{}:{}", arg.name(), arg.type_annotation().base_name()))
        .collect::<Vec<_>>()
        .join(",");
    format!("({args})")
}
