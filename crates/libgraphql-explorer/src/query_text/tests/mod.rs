mod query_text_synthesizer_tests;
