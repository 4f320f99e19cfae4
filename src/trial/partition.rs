/// Splits participant ids `[0, population_size)` into a contiguous
/// treatment prefix of length `treatment_group_size` and a control
/// remainder. Membership is fixed by index; randomization only reorders
/// within each arm afterwards. If `treatment_group_size` exceeds the
/// population, every participant is treated and control is empty.
pub fn partition_population(
    population_size: usize,
    treatment_group_size: usize,
) -> (Vec<usize>, Vec<usize>) {
    let split = treatment_group_size.min(population_size);
    ((0..split).collect(), (split..population_size).collect())
}
