mod graphql_client_tests;
