//----------------------------------------
// randomization mod
//----------------------------------------
pub mod outcomes;
pub mod permutation;
