pub mod merge;

#[cfg(test)]
mod merge_tests;
