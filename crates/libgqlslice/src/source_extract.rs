use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

static EMBEDDED_QUERY_RE: OnceLock<Regex> = OnceLock::new();

/// File extensions whose whole content is GraphQL.
pub const GRAPHQL_FILE_EXTENSIONS: [&str; 2] = [
    "gql",
    "graphql",
];

/// Return the body of the first `` gql`...` `` or `` graphql`...` `` tagged
/// template literal in `src`, or `None` if there is no non-empty one.
pub fn extract_embedded_query(src: &str) -> Option<&str> {
    let re = EMBEDDED_QUERY_RE.get_or_init(|| {
        Regex::new(r"(?s)(?:gql|graphql)`(.*?)`").expect("must be valid")
    });
    let body = re.captures(src)?.get(1)?.as_str();
    if body.trim().is_empty() {
        return None;
    }
    Some(body)
}

/// Pick the query text out of a source file: GraphQL files are used as-is,
/// anything else is searched with [`extract_embedded_query()`].
pub fn query_text<'a>(file_path: &Path, content: &'a str) -> Option<&'a str> {
    let is_graphql_file = file_path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| GRAPHQL_FILE_EXTENSIONS.contains(&ext));

    if !is_graphql_file {
        return extract_embedded_query(content);
    }
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tagged_literal_wins() {
        let src = concat!(
            "import { gql } from '@apollo/client';\n",
            "\n",
            "export const LIST_JOBS = gql`\n",
            "  query ListJobs { job_job { id } }\n",
            "`;\n",
            "export const GET_JOB = graphql`query { job_job_by_pk(id: 1) { id } }`;\n",
        );

        assert_eq!(
            extract_embedded_query(src),
            Some("\n  query ListJobs { job_job { id } }\n"),
        );
    }

    #[test]
    fn graphql_tag() {
        assert_eq!(
            extract_embedded_query("const Q = graphql`{ a }`"),
            Some("{ a }"),
        );
    }

    #[test]
    fn missing_or_empty_literal() {
        assert_eq!(extract_embedded_query("const x = `not a query`;"), None);
        assert_eq!(extract_embedded_query("const Q = gql``;"), None);
        assert_eq!(extract_embedded_query("const Q = gql` \n `;"), None);
    }

    #[test]
    fn graphql_files_are_used_verbatim() {
        let content = "query { job_job { id } }\n";
        assert_eq!(query_text(Path::new("jobs.graphql"), content), Some(content));
        assert_eq!(query_text(Path::new("jobs.gql"), content), Some(content));
        assert_eq!(query_text(Path::new("jobs.gql"), "\n"), None);
    }

    #[test]
    fn other_files_are_searched() {
        let content = "export default gql`{ job_job { id } }`;";
        assert_eq!(
            query_text(Path::new("jobs.ts"), content),
            Some("{ job_job { id } }"),
        );
        assert_eq!(query_text(Path::new("jobs.ts"), "{ job_job { id } }"), None);
    }
}
