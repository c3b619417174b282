mod line_parser_tests;
mod line_tests;
mod merge_tests;
