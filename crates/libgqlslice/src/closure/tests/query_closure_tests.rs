use crate::closure::ClosureError;
use crate::closure::QueryClosureWalker;
use crate::closure::slice_query;
use crate::test_utils::job_schema;

type Result<T> = std::result::Result<T, ClosureError>;

mod basics {
    use super::*;

    #[test]
    fn nested_types_come_before_their_parents() -> Result<()> {
        let index = job_schema();
        let fragments = slice_query(&index, concat!(
            "query ListJobs {\n",
            "  job_job {\n",
            "    id\n",
            "    status\n",
            "    company { name }\n",
            "  }\n",
            "}\n",
        ))?;

        assert_eq!(fragments, vec![
            "scalar uuid".to_string(),
            "enum job_status_enum {\n  pending\n  running\n  done\n}".to_string(),
            "type company_company {\n  name: String!\n}".to_string(),
            concat!(
                "type job_job {\n",
                "  id: uuid!\n",
                "  status: job_status_enum!\n",
                "  company: company_company!\n",
                "}",
            ).to_string(),
        ]);

        Ok(())
    }

    #[test]
    fn selected_fields_follow_declaration_order() -> Result<()> {
        let index = job_schema();
        let fragments = slice_query(&index, "{ job_job { class id } }")?;

        assert_eq!(fragments, vec![
            "scalar uuid".to_string(),
            "type job_job {\n  id: uuid!\n  class: String!\n}".to_string(),
        ]);

        Ok(())
    }

    #[test]
    fn output_is_deterministic() -> Result<()> {
        let index = job_schema();
        let query = "{ job_job { id parameters { key value } company { jobs { class } } } }";

        assert_eq!(slice_query(&index, query)?, slice_query(&index, query)?);

        Ok(())
    }

    #[test]
    fn mutation_uses_mutation_root() -> Result<()> {
        let index = job_schema();
        let fragments = slice_query(&index, concat!(
            "mutation {\n",
            "  insert_job_job(objects: []) {\n",
            "    affected_rows\n",
            "    returning { id }\n",
            "  }\n",
            "}\n",
        ))?;

        assert_eq!(fragments, vec![
            "scalar uuid".to_string(),
            "type job_job {\n  id: uuid!\n}".to_string(),
            concat!(
                "type job_job_mutation_response {\n",
                "  affected_rows: Int!\n",
                "  returning: [job_job!]!\n",
                "}",
            ).to_string(),
        ]);

        Ok(())
    }
}

mod merging {
    use super::*;

    #[test]
    fn each_type_is_emitted_at_most_once() -> Result<()> {
        let index = job_schema();
        let fragments = slice_query(&index, concat!(
            "{\n",
            "  job_job { id company { id } }\n",
            "  company_company { id jobs { id } }\n",
            "}\n",
        ))?;

        let headers: Vec<&str> = fragments.iter()
            .map(|fragment| fragment.lines().next().unwrap_or_default())
            .collect();
        assert_eq!(headers, vec![
            "scalar uuid",
            "type company_company {",
            "type job_job {",
        ]);

        Ok(())
    }

    #[test]
    fn type_reached_twice_lists_union_of_fields() -> Result<()> {
        let index = job_schema();
        let fragments = slice_query(&index, concat!(
            "{\n",
            "  job_job { id }\n",
            "  company_company { jobs { class } }\n",
            "}\n",
        ))?;

        assert_eq!(fragments, vec![
            "scalar uuid".to_string(),
            "type job_job {\n  id: uuid!\n  class: String!\n}".to_string(),
            "type company_company {\n  jobs(where:job_job_bool_exp,order_by:job_job_order_by): [job_job!]!\n}".to_string(),
        ]);

        Ok(())
    }

    #[test]
    fn visited_registry_tracks_selected_fields() -> Result<()> {
        let index = job_schema();
        let doc = crate::ast::query::parse("{ job_job { id company { name } } }")
            .map_err(|err| ClosureError::QueryParseError(err.to_string()))?;
        let mut walker = QueryClosureWalker::new(&index);
        for def in &doc.definitions {
            if let crate::ast::query::Definition::Operation(op) = def {
                walker.walk_operation(op)?;
            }
        }

        let visited = walker.visited();
        assert!(visited.contains_type("job_job"));
        assert!(visited.contains_type("company_company"));
        assert!(!visited.contains_type("query_root"));
        let job_fields: Vec<&str> = visited.fields("job_job")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(job_fields, vec!["id", "company"]);

        Ok(())
    }
}

mod arguments {
    use super::*;

    #[test]
    fn nested_field_arguments_are_stubbed() -> Result<()> {
        let index = job_schema();
        let fragments = slice_query(&index, concat!(
            "{\n",
            "  job_job {\n",
            "    parameters(where: {job_id: {_eq: \"x\"}}, limit: 3) { key }\n",
            "  }\n",
            "}\n",
        ))?;

        assert_eq!(fragments, vec![
            "type job_parameter {\n  key: String!\n}".to_string(),
            concat!(
                "input job_parameter_bool_exp {\n",
                "  _and: [job_parameter_bool_exp!]\n",
                "  _not: job_parameter_bool_exp\n",
                "  _or: [job_parameter_bool_exp!]\n",
                "}",
            ).to_string(),
            "enum job_parameter_select_column {\n  id\n}".to_string(),
            concat!(
                "type job_job {\n",
                "  parameters(where:job_parameter_bool_exp,",
                "distinct_on:job_parameter_select_column,limit:Int): ",
                "[job_parameter!]!\n",
                "}",
            ).to_string(),
        ]);

        Ok(())
    }

    #[test]
    fn root_field_arguments_are_not_stubbed() -> Result<()> {
        let index = job_schema();
        let fragments = slice_query(&index, "{ job_job(limit: 1, where: {}) { class } }")?;

        assert_eq!(fragments, vec![
            "type job_job {\n  class: String!\n}".to_string(),
        ]);

        Ok(())
    }

    #[test]
    fn variable_types_are_stubbed_first() -> Result<()> {
        let index = job_schema();
        let fragments = slice_query(&index, concat!(
            "query Jobs($where: job_job_bool_exp, $id: uuid!, $limit: Int) {\n",
            "  job_job_by_pk(id: $id) { id }\n",
            "}\n",
        ))?;

        assert_eq!(fragments, vec![
            concat!(
                "input job_job_bool_exp {\n",
                "  _and: [job_job_bool_exp!]\n",
                "  _not: job_job_bool_exp\n",
                "  _or: [job_job_bool_exp!]\n",
                "}",
            ).to_string(),
            "scalar uuid".to_string(),
            "type job_job {\n  id: uuid!\n}".to_string(),
        ]);

        Ok(())
    }

    #[test]
    fn undeclared_variable_types_are_ignored() -> Result<()> {
        let index = job_schema();
        let fragments = slice_query(&index, "query ($x: not_a_type) { job_job { class } }")?;

        assert_eq!(fragments, vec![
            "type job_job {\n  class: String!\n}".to_string(),
        ]);

        Ok(())
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn undeclared_fields_are_skipped() -> Result<()> {
        let index = job_schema();
        let with_unknown = slice_query(&index, "{ job_job { class nope } nope_root { id } }")?;
        let without = slice_query(&index, "{ job_job { class } }")?;

        assert_eq!(with_unknown, without);

        Ok(())
    }

    #[test]
    fn scalar_only_selection_is_empty() -> Result<()> {
        let index = job_schema();
        assert!(slice_query(&index, "{ __typename }")?.is_empty());
        Ok(())
    }

    #[test]
    fn fragment_spreads_are_not_expanded() -> Result<()> {
        let index = job_schema();
        let fragments = slice_query(&index, concat!(
            "query { job_job { class ...JobFields } }\n",
            "fragment JobFields on job_job { id }\n",
        ))?;

        assert_eq!(fragments, vec![
            "type job_job {\n  class: String!\n}".to_string(),
        ]);

        Ok(())
    }

    #[test]
    fn subscriptions_are_rejected() {
        let index = job_schema();
        assert_eq!(
            slice_query(&index, "subscription { job_job { id } }"),
            Err(ClosureError::UnsupportedOperation {
                operation: "subscription".to_string(),
            }),
        );
    }

    #[test]
    fn unparseable_query_is_unrecoverable() {
        let index = job_schema();
        let err = slice_query(&index, "{ job_job {").unwrap_err();
        assert!(matches!(err, ClosureError::QueryParseError(_)));
        assert!(err.is_unrecoverable());
    }
}
