mod argument_stub_tests;
mod ignore_set_tests;
mod query_closure_tests;
