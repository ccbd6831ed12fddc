pub mod grader;
