//! Runs the classic demo cases through both strategies.
//!
//! `RUST_LOG=debug cargo run --example rod_cutting`

use u_rodcut::{RodCutRunner, SolverConfig};

struct Case {
    name: &'static str,
    length: usize,
    prices: &'static [u64],
}

const CASES: &[Case] = &[
    Case {
        name: "basic case",
        length: 5,
        prices: &[2, 5, 7, 8, 10],
    },
    Case {
        name: "optimal not to cut",
        length: 3,
        prices: &[1, 3, 8],
    },
    Case {
        name: "uniform cuts",
        length: 4,
        prices: &[3, 5, 6, 7],
    },
];

fn main() -> Result<(), u_rodcut::RodCutError> {
    env_logger::init();
    let config = SolverConfig::default();

    for case in CASES {
        println!("\nCase: {}", case.name);
        println!("Rod length: {}", case.length);
        println!("Prices: {:?}", case.prices);

        let (memo, table) = RodCutRunner::compare(case.length, case.prices, &config)?;
        for result in [&memo, &table] {
            println!("\n{} result:", result.strategy.name());
            println!("  Max profit: {}", result.plan.max_profit);
            println!("  Cuts: {:?}", result.plan.cuts);
            println!("  Number of cuts: {}", result.plan.number_of_cuts);
        }

        assert_eq!(memo.plan.max_profit, table.plan.max_profit);
        println!("\nStrategies agree.");
    }

    Ok(())
}
