use crate::schema::SchemaIndex;
use crate::schema::SchemaIndexBuilder;

/// A small schema shaped like the ones Hasura generates: snake_case types,
/// `_bool_exp`/`_order_by`/`_select_column` inputs and custom scalars.
pub(crate) const JOB_SCHEMA: &str = r#"
schema {
  query: query_root
  mutation: mutation_root
  subscription: subscription_root
}

scalar uuid
scalar timestamptz
scalar json
scalar numeric

enum order_by {
  asc
  desc
}

enum job_status_enum {
  pending
  running
  done
}

input uuid_comparison_exp {
  _eq: uuid
  _in: [uuid!]
}

input job_job_bool_exp {
  _and: [job_job_bool_exp!]
  _not: job_job_bool_exp
  _or: [job_job_bool_exp!]
  id: uuid_comparison_exp
  company_id: uuid_comparison_exp
}

input job_job_order_by {
  id: order_by
  created_at: order_by
}

enum job_job_select_column {
  id
  company_id
  created_at
}

input job_parameter_bool_exp {
  _and: [job_parameter_bool_exp!]
  job_id: uuid_comparison_exp
}

enum job_parameter_select_column {
  id
  key
  value
}

input job_job_insert_input {
  company_id: uuid
  class: String
  parameters: [job_parameter_insert_input!]
}

input job_parameter_insert_input {
  key: String!
  value: json
}

"A unit of background work."
type job_job {
  id: uuid!
  company_id: uuid!
  class: String!
  status: job_status_enum!
  created_at: timestamptz!
  cost: numeric
  output: json
  company: company_company!
  parameters(
    where: job_parameter_bool_exp
    distinct_on: [job_parameter_select_column!]
    limit: Int
  ): [job_parameter!]!
}

type job_parameter {
  id: uuid!
  key: String!
  value: json
  job: job_job!
}

type company_company {
  id: uuid!
  name: String!
  jobs(where: job_job_bool_exp, order_by: [job_job_order_by!]): [job_job!]!
}

type job_job_mutation_response {
  affected_rows: Int!
  returning: [job_job!]!
}

interface node {
  id: ID!
}

union search_result = job_job | company_company

type query_root {
  "Fetch data from the table: job.job"
  job_job(
    where: job_job_bool_exp
    order_by: [job_job_order_by!]
    limit: Int
    offset: Int
  ): [job_job!]!
  job_job_by_pk(id: uuid!): job_job
  company_company: [company_company!]!
  node(id: ID!): node
  search(term: String!): [search_result!]!
}

type mutation_root {
  insert_job_job(objects: [job_job_insert_input!]!): job_job_mutation_response
}

type subscription_root {
  job_job: [job_job!]!
}
"#;

pub(crate) fn job_schema() -> SchemaIndex {
    SchemaIndexBuilder::new()
        .load_str(None, JOB_SCHEMA)
        .unwrap()
        .build()
        .unwrap()
}
