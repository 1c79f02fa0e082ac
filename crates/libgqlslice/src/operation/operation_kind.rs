/// The root operation a query document or field path refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// Parse the lower-case keyword GraphQL uses for an operation kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "mutation" => Some(Self::Mutation),
            "query" => Some(Self::Query),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    /// The root type name GraphQL assumes when no `schema { ... }` block
    /// says otherwise.
    pub fn default_root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }

    pub fn keyword(&self) -> &str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
