mod tests_source_scanner;
