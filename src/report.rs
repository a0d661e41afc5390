//! Plain-text dump of a finished search.
//!
//! One header line with the generation count, the target rendered bit per
//! character, then every individual best-to-worst with its rank and
//! fitness. Set bits print as `!`, clear bits as a space, so a matched
//! individual is the visual twin of the solution row.

use crate::bitvec::BitVec;
use crate::runner::SearchResult;
use std::io::{self, Write};

/// Writes the report for `result` to `writer`.
///
/// Rows appear in rank order; fitness values are as of the last
/// evaluation, so slots rebuilt by the final selection show the fitness
/// of the individual they replaced.
pub fn write_report<W: Write>(writer: &mut W, result: &SearchResult) -> io::Result<()> {
    let population = &result.population;

    writeln!(writer, "--- GENERATION : {}", result.generations)?;
    write!(writer, "SOLUTION :\n       | ")?;
    write_bits(writer, population.target())?;
    writeln!(writer, " |")?;

    for (rank, (_, individual, fitness)) in population.ranked().enumerate() {
        write!(writer, "{rank:4} : | ")?;
        write_bits(writer, individual)?;
        writeln!(writer, " | {fitness:4} |")?;
    }
    writeln!(writer)
}

fn write_bits<W: Write>(writer: &mut W, bits: &BitVec) -> io::Result<()> {
    let mut row = String::with_capacity(bits.len());
    for bit in bits.iter() {
        row.push(if bit { '!' } else { ' ' });
    }
    writer.write_all(row.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::Population;
    use crate::runner::Termination;
    use crate::{evaluate, rank};

    fn result_from(target: BitVec, individuals: Vec<BitVec>, generations: usize) -> SearchResult {
        let mut population = Population::from_parts(target, individuals);
        evaluate::run(&mut population, false);
        rank::run(&mut population);
        let best_fitness = population.best_fitness();
        SearchResult {
            termination: if best_fitness == 0 {
                Termination::Found
            } else {
                Termination::GenerationLimit
            },
            generations,
            best_fitness,
            best_history: Vec::new(),
            population,
        }
    }

    #[test]
    fn test_report_format_is_exact() {
        let mut target = BitVec::zeros(8);
        target.set(0, true);
        target.set(2, true);

        let exact = target.clone();
        let zeros = BitVec::zeros(8);
        let mut third = BitVec::zeros(8);
        for pos in 0..4 {
            third.set(pos, true);
        }

        let result = result_from(target, vec![exact, zeros, third], 42);

        let mut out = Vec::new();
        write_report(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = concat!(
            "--- GENERATION : 42\n",
            "SOLUTION :\n",
            "       | ! !      |\n",
            "   0 : | ! !      |    0 |\n",
            "   1 : |          |    2 |\n",
            "   2 : | !!!!     |    2 |\n",
            "\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_rows_follow_rank_not_slot_order() {
        let mut target = BitVec::zeros(6);
        target.set(1, true);

        // Slot 0 is two flips away, slot 2 is the exact match.
        let mut far = BitVec::zeros(6);
        far.set(0, true);
        far.set(3, true);
        far.set(1, true);
        let near = target.clone();
        let zeros = BitVec::zeros(6);

        let result = result_from(target, vec![far, zeros, near], 7);

        let mut out = Vec::new();
        write_report(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "--- GENERATION : 7");
        assert_eq!(lines[3], "   0 : |  !     |    0 |");
        assert_eq!(lines[4], "   1 : |        |    1 |");
        assert_eq!(lines[5], "   2 : | !! !   |    2 |");
    }

    #[test]
    fn test_report_ends_with_blank_line() {
        let target = BitVec::zeros(4);
        let result = result_from(target.clone(), vec![target], 0);

        let mut out = Vec::new();
        write_report(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("|\n\n"));
    }
}
