//! Test modules for the evaluation engine

#[cfg(test)]
mod evaluator_test;


#[cfg(test)]
mod support;
