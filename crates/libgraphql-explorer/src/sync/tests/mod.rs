mod field_selection_sync_tests;
