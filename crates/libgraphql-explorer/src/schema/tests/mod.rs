mod schema_model_tests;
