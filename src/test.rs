use proptest::{
    prelude::{any, prop},
    prop_assert, prop_assert_eq, prop_compose, proptest,
};
use rand::{rngs::SmallRng, seq::SliceRandom as _, SeedableRng as _};

use crate::{num::assert_within, rank_alternatives, validate_table, ResultOptions, Table, TopsisError};

#[derive(Clone, Debug)]
struct Input {
    table: Table,
    weights: String,
    impacts: String,
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

prop_compose! {
    fn matrix(rows: usize, criteria: usize)(
        values in prop::collection::vec(prop::collection::vec(0.1_f64..100.0, criteria), rows)
    ) -> Vec<Vec<f64>> {
        values
    }
}
prop_compose! {
    fn input()(rows in 1_usize..24, criteria in 2_usize..6)(
        values in matrix(rows, criteria),
        weights in prop::collection::vec(0.1_f64..10.0, criteria),
        benefit in prop::collection::vec(any::<bool>(), criteria),
    ) -> Input {
        let header: Vec<String> = std::iter::once("Alternative".to_string())
            .chain((1..=weights.len()).map(|j| format!("C{j}")))
            .collect();
        let records = values
            .iter()
            .enumerate()
            .map(|(i, row)| {
                std::iter::once(format!("A{i}"))
                    .chain(row.iter().map(|x| x.to_string()))
                    .collect::<Vec<String>>()
            })
            .collect();
        let impacts: Vec<&str> = benefit.iter().map(|b| if *b { "+" } else { "-" }).collect();
        Input {
            table: Table { header, records },
            weights: join(&weights),
            impacts: impacts.join(","),
        }
    }
}

fn scores(input: &Input, options: ResultOptions) -> Vec<f64> {
    let problem = validate_table(input.table.clone(), &input.weights, &input.impacts).unwrap();
    rank_alternatives(problem, options)
        .evaluations
        .iter()
        .map(|e| e.score)
        .collect()
}

/// Reads a written result back and drops the appended columns.
fn reread(bytes: &[u8]) -> Table {
    let mut table = Table::from_reader(bytes).unwrap();
    let width = table.width() - 4;
    table.header.truncate(width);
    for record in &mut table.records {
        record.truncate(width);
    }
    table
}

proptest! {
    #[test]
    fn scores_are_bounded(input in input()) {
        for score in scores(&input, ResultOptions::default()) {
            prop_assert!(score.is_nan() || (0.0..=1.0).contains(&score), "score {score}");
        }
    }

    #[test]
    fn ranks_follow_scores(input in input()) {
        let problem = validate_table(input.table.clone(), &input.weights, &input.impacts).unwrap();
        let evaluations = rank_alternatives(problem, ResultOptions::default()).evaluations;
        let ranked = evaluations.iter().filter(|e| e.rank.is_some()).count();
        for a in &evaluations {
            prop_assert_eq!(a.score.is_nan(), a.rank.is_none());
            if let Some(r) = a.rank {
                prop_assert!((1..=ranked).contains(&r));
            }
            for b in &evaluations {
                if a.score > b.score {
                    prop_assert!(a.rank < b.rank);
                }
                if a.score == b.score {
                    prop_assert_eq!(a.rank, b.rank);
                }
            }
        }
    }

    #[test]
    fn extra_weight_is_rejected(input in input()) {
        let weights = format!("{},1", input.weights);
        let result = validate_table(input.table.clone(), &weights, &input.impacts);
        let mismatch = matches!(result, Err(TopsisError::CountMismatch { .. }));
        prop_assert!(mismatch, "expected a count mismatch, got {:?}", result);
    }

    #[test]
    fn rerun_on_own_output_is_identical(input in input()) {
        let problem = validate_table(input.table.clone(), &input.weights, &input.impacts).unwrap();
        let result = rank_alternatives(problem, ResultOptions::default());
        let table = reread(&result.to_csv().unwrap());
        prop_assert_eq!(&table, &input.table);

        let rerun = rank_alternatives(
            validate_table(table, &input.weights, &input.impacts).unwrap(),
            ResultOptions::default(),
        );
        for (a, b) in result.evaluations.iter().zip(&rerun.evaluations) {
            prop_assert_eq!(a.score.to_bits(), b.score.to_bits());
            prop_assert_eq!(a.rank, b.rank);
        }
    }

    #[test]
    fn rerun_on_weighted_matrix_keeps_scores(input in input()) {
        let options = ResultOptions { weighted_matrix: true };
        let problem = validate_table(input.table.clone(), &input.weights, &input.impacts).unwrap();
        let weighted = reread(&rank_alternatives(problem, options).to_csv().unwrap());
        let rerun = Input { table: weighted, ..input.clone() };
        let expected = scores(&input, ResultOptions::default());
        for (a, b) in expected.iter().zip(scores(&rerun, ResultOptions::default())) {
            prop_assert_eq!(a.is_nan(), b.is_nan());
            if !a.is_nan() {
                assert_within(b, *a, 1e-9);
            }
        }
    }

    #[test]
    fn row_order_does_not_matter(seed: u64, input in input()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut order: Vec<usize> = (0..input.table.records.len()).collect();
        order.shuffle(&mut rng);
        let mut shuffled = input.clone();
        shuffled.table.records = order.iter().map(|&i| input.table.records[i].clone()).collect();

        let expected = scores(&input, ResultOptions::default());
        let actual = scores(&shuffled, ResultOptions::default());
        for (position, &i) in order.iter().enumerate() {
            prop_assert_eq!(expected[i].is_nan(), actual[position].is_nan());
            if !expected[i].is_nan() {
                assert_within(actual[position], expected[i], 1e-9);
            }
        }
    }
}
