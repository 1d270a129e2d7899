mod tests_type_resolution;
