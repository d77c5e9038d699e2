//! # Single-point crossover
//!
//! Both parents are cut at the same point `k`. The first child takes rows `0..k`
//! from the first parent and the remaining rows from the second; the optional
//! second child takes the complementary halves. Each row keeps its position, so
//! every child has exactly the parents' length.

use crate::{
    error::{GeneticError, Result},
    genome::Genome,
    rng::RandomNumberGenerator,
};

/// Number of children a single mating produces.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OffspringCount {
    /// Only `p1[0..k] + p2[k..]`.
    One,
    /// Also the complementary `p2[0..k] + p1[k..]`.
    #[default]
    Two,
}

impl OffspringCount {
    pub fn get(&self) -> usize {
        match self {
            OffspringCount::One => 1,
            OffspringCount::Two => 2,
        }
    }
}

/// Draws a crossover point for genomes of the given length.
///
/// The point is uniform in `[0, length - 1)`; for a single-row genome the only
/// point is 0.
///
/// # Errors
///
/// Returns `ArithmeticDomain` for a zero-length genome.
pub fn crossover_point(length: usize, rng: &mut RandomNumberGenerator) -> Result<usize> {
    match length {
        0 => Err(GeneticError::ArithmeticDomain(
            "Cannot choose a crossover point on a zero-length genome".to_string(),
        )),
        1 => Ok(0),
        _ => Ok(rng.gen_index(length - 1)),
    }
}

/// Recombines two parents at a random point.
pub fn single_point(
    parent1: &Genome,
    parent2: &Genome,
    offspring: OffspringCount,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Genome>> {
    let point = crossover_point(parent1.len(), rng)?;
    single_point_at(parent1, parent2, point, offspring)
}

/// Recombines two parents at a given point.
///
/// # Errors
///
/// Returns `ArithmeticDomain` if the parents differ in length or if `point`
/// lies past their end.
pub fn single_point_at(
    parent1: &Genome,
    parent2: &Genome,
    point: usize,
    offspring: OffspringCount,
) -> Result<Vec<Genome>> {
    if parent1.len() != parent2.len() {
        return Err(GeneticError::ArithmeticDomain(format!(
            "Parents differ in length ({} vs {})",
            parent1.len(),
            parent2.len()
        )));
    }

    if point > parent1.len() {
        return Err(GeneticError::ArithmeticDomain(format!(
            "Crossover point {} is outside a genome of length {}",
            point,
            parent1.len()
        )));
    }

    let splice = |head: &Genome, tail: &Genome| {
        let mut genes = Vec::with_capacity(head.len());
        genes.extend_from_slice(&head.genes()[..point]);
        genes.extend_from_slice(&tail.genes()[point..]);
        Genome::from_genes(genes)
    };

    let mut children = Vec::with_capacity(offspring.get());
    children.push(splice(parent1, parent2));
    if offspring == OffspringCount::Two {
        children.push(splice(parent2, parent1));
    }

    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parents() -> (Genome, Genome) {
        (
            Genome::new(vec![0, 1, 2, 3, 4]).unwrap(),
            Genome::new(vec![4, 4, 4, 4, 4]).unwrap(),
        )
    }

    #[test]
    fn test_single_point_at_one_child() {
        let (p1, p2) = parents();
        let children = single_point_at(&p1, &p2, 2, OffspringCount::One).unwrap();

        assert_eq!(children.len(), 1);
        assert_eq!(children[0].genes(), [0, 1, 4, 4, 4]);
    }

    #[test]
    fn test_single_point_at_two_children_are_complementary() {
        let (p1, p2) = parents();
        let children = single_point_at(&p1, &p2, 3, OffspringCount::Two).unwrap();

        assert_eq!(children.len(), 2);
        assert_eq!(children[0].genes(), [0, 1, 2, 4, 4]);
        assert_eq!(children[1].genes(), [4, 4, 4, 3, 4]);
    }

    #[test]
    fn test_point_zero_copies_second_parent() {
        let (p1, p2) = parents();
        let children = single_point_at(&p1, &p2, 0, OffspringCount::Two).unwrap();

        assert_eq!(children[0], p2);
        assert_eq!(children[1], p1);
    }

    #[test]
    fn test_children_keep_length_for_every_point() {
        let (p1, p2) = parents();
        for point in 0..p1.len() - 1 {
            for child in single_point_at(&p1, &p2, point, OffspringCount::Two).unwrap() {
                assert_eq!(child.len(), p1.len());
            }
        }
    }

    #[test]
    fn test_crossover_point_range() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let point = crossover_point(5, &mut rng).unwrap();
            assert!(point < 4);
            seen[point] = true;
        }
        assert!(seen.iter().all(|&s| s));

        assert_eq!(crossover_point(1, &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_zero_length_is_arithmetic_domain() {
        let mut rng = RandomNumberGenerator::new();
        assert!(matches!(
            crossover_point(0, &mut rng),
            Err(GeneticError::ArithmeticDomain(_))
        ));

        let empty = Genome::new(vec![]).unwrap();
        assert!(single_point(&empty, &empty, OffspringCount::One, &mut rng).is_err());
    }

    #[test]
    fn test_mismatched_parents() {
        let short = Genome::new(vec![0, 1]).unwrap();
        let long = Genome::new(vec![0, 1, 2]).unwrap();
        assert!(matches!(
            single_point_at(&short, &long, 1, OffspringCount::One),
            Err(GeneticError::ArithmeticDomain(_))
        ));
    }

    #[test]
    fn test_point_past_end() {
        let (p1, p2) = parents();
        assert!(single_point_at(&p1, &p2, 6, OffspringCount::One).is_err());
    }

    #[test]
    fn test_single_queen() {
        let queen = Genome::new(vec![0]).unwrap();
        let mut rng = RandomNumberGenerator::new();
        let children = single_point(&queen, &queen, OffspringCount::Two, &mut rng).unwrap();
        assert_eq!(children, vec![queen.clone(), queen]);
    }
}
