mod schedule_test;
mod session_test;
