// argsum test infrastructure
//
// Unit tests for the library modules. Binary-level behavior (process
// arguments, exit codes) is covered in tests/cli.rs.
