mod quad_cursor_tests;
mod structured_tests;
