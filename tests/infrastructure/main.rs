// Storage backend tests
mod file_store;
