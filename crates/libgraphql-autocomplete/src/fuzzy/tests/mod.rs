mod distance_tests;
