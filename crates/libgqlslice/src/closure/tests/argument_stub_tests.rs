use crate::closure::synthesize_argument_stub;
use crate::types::TypeKind;

mod suffixes {
    use super::*;

    #[test]
    fn select_column_becomes_enum_with_id() {
        assert_eq!(
            synthesize_argument_stub("job_job_select_column", None),
            "enum job_job_select_column {\n  id\n}",
        );
    }

    #[test]
    fn order_by_becomes_input_with_id() {
        assert_eq!(
            synthesize_argument_stub("job_job_order_by", Some(TypeKind::InputObject)),
            "input job_job_order_by {\n  id : order_by\n}",
        );
    }

    #[test]
    fn bool_exp_becomes_self_referential_input() {
        assert_eq!(
            synthesize_argument_stub("job_job_bool_exp", None),
            concat!(
                "input job_job_bool_exp {\n",
                "  _and: [job_job_bool_exp!]\n",
                "  _not: job_job_bool_exp\n",
                "  _or: [job_job_bool_exp!]\n",
                "}",
            ),
        );
    }

    #[test]
    fn suffix_wins_over_kind_hint() {
        assert_eq!(
            synthesize_argument_stub("job_job_select_column", Some(TypeKind::Scalar)),
            "enum job_job_select_column {\n  id\n}",
        );
    }
}

mod fallback {
    use super::*;

    #[test]
    fn unknown_suffix_defaults_to_empty_input() {
        assert_eq!(
            synthesize_argument_stub("job_job_insert_input", None),
            "input job_job_insert_input {\n}",
        );
    }

    #[test]
    fn scalar_hint() {
        assert_eq!(synthesize_argument_stub("uuid", Some(TypeKind::Scalar)), "scalar uuid");
    }

    #[test]
    fn enum_hint() {
        assert_eq!(
            synthesize_argument_stub("job_status_enum", Some(TypeKind::Enum)),
            "enum job_status_enum {\n}",
        );
    }
}
