mod tests_absent_collapse;
mod tests_magic_extractor;
mod tests_ordering;
