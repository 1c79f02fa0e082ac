use crate::types::FieldDefinition;

/// A root field's own signature, printed ahead of the fragments its
/// arguments and return type need.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldSignature {
    pub arguments: Vec<FieldArgumentSignature>,
    pub description: Option<String>,
    pub name: String,
    pub type_string: String,
}
impl FieldSignature {
    pub fn from_field_def(field_def: &FieldDefinition) -> Self {
        Self {
            arguments: field_def.arguments().iter()
                .map(|arg| FieldArgumentSignature {
                    name: arg.name().to_string(),
                    type_string: arg.type_annotation().to_string(),
                })
                .collect(),
            description: field_def.description().map(str::to_string),
            name: field_def.name().to_string(),
            type_string: field_def.type_annotation().to_string(),
        }
    }
}
impl std::fmt::Display for FieldSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Field Name: {}", self.name)?;
        writeln!(f, "Type: {}", self.type_string)?;
        writeln!(f, "Description: {}", self.description.as_deref().unwrap_or_default())?;
        write!(f, "Arguments:")?;
        for arg in &self.arguments {
            write!(f, "\n- {}: {}", arg.name, arg.type_string)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldArgumentSignature {
    pub name: String,
    pub type_string: String,
}
