use anyhow::{bail, Context};
use clap::Parser;
use rng::ONDRng;
use scss::{prepare, subset::MAX_QUBITS, Preparation, SubsetGenerator};
use simulator::{entanglement_profile, output::write_rows_csv, verify, MAX_SIM_QUBITS};
use tn::truncation::Truncation;

use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "SCSS circuit cost sweep over register width and cardinality")]
struct Args {
    /// Smallest number of work qubits
    #[arg(long, default_value_t = 2)]
    n_min: usize,

    /// Largest number of work qubits
    #[arg(long, default_value_t = 12)]
    n_max: usize,

    /// Comma-separated list of cardinalities (values above 2^n are skipped)
    #[arg(long, default_value = "2,3,5,8,13")]
    cards: String,

    /// Base RNG seed
    #[arg(long, default_value = "cost-sweep")]
    seed: String,

    /// Largest total width (work + ancilla) to simulate for fidelity
    #[arg(long, default_value_t = 14)]
    max_sim: usize,

    /// Output CSV path
    #[arg(long, default_value = "cost_sweep.csv")]
    out: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();

    if args.n_min == 0 || args.n_max < args.n_min {
        bail!("need 1 <= n_min <= n_max (got {}..={})", args.n_min, args.n_max);
    }
    if args.n_max > MAX_QUBITS {
        bail!("n_max {} exceeds the widest supported register of {} qubits", args.n_max, MAX_QUBITS);
    }
    let sim_width = args.max_sim.min(MAX_SIM_QUBITS);
    let cards = parse_cards(&args.cards);
    if cards.is_empty() {
        bail!("cards must contain at least one positive integer");
    }

    let mut rows = Vec::new();
    for n in args.n_min..=args.n_max {
        for &card in &cards {
            if (card as u128) > (1u128 << n) {
                continue;
            }
            let seed_str = format!("{}-n-{}-card-{}", args.seed, n, card);
            let mut rng = ONDRng::new(seed_str.as_bytes());
            let subset = SubsetGenerator::new(n, card).random(&mut rng)?;

            let start = Instant::now();
            let prep = prepare(n, &subset)?;
            let build_ms = start.elapsed().as_secs_f64() * 1000.0;

            let perm_ok = permutation_ok(&prep);
            let stats = prep.circuit.stats();

            let (fidelity, chi, entropy) = if simulable(n, sim_width) {
                let v = verify(&prep)?;
                let profile = entanglement_profile(&v.state, Truncation::exact())?;
                (
                    format!("{:.12}", v.fidelity),
                    profile.chi_max().to_string(),
                    format!("{:.6}", profile.max_entropy()),
                )
            } else {
                (String::new(), String::new(), String::new())
            };

            println!(
                "n={} card={} ops={} controlled={} cycles={} perm_ok={} fidelity={} build_ms={:.3}",
                n,
                card,
                stats.total,
                stats.controlled,
                prep.cycles.len(),
                perm_ok,
                if fidelity.is_empty() { "-" } else { fidelity.as_str() },
                build_ms
            );

            rows.push(vec![
                n.to_string(),
                card.to_string(),
                stats.total.to_string(),
                stats.controlled.to_string(),
                stats.max_controls.to_string(),
                prep.cycles.len().to_string(),
                perm_ok.to_string(),
                fidelity,
                chi,
                entropy,
            ]);
        }
    }

    write_rows_csv(
        &args.out,
        "n,card,ops,controlled,max_controls,cycles,perm_ok,fidelity,chi_max,entropy_max",
        &rows,
    )
    .with_context(|| format!("failed to write CSV to {}", args.out))?;
    Ok(())
}

/// Checks the permutation stage classically, which works at any width.
fn permutation_ok(prep: &Preparation) -> bool {
    let stage = prep.permutation_stage();
    prep.mapping
        .iter()
        .all(|&(i, c)| stage.permute_basis(i) == Some(c))
}

/// Work qubits plus the ancilla must fit within `sim_width`.
fn simulable(num_qubits: usize, sim_width: usize) -> bool {
    num_qubits < sim_width
}

fn parse_cards(input: &str) -> Vec<usize> {
    input
        .split(',')
        .filter_map(|s| {
            let t = s.trim();
            if t.is_empty() {
                None
            } else {
                t.parse::<usize>().ok()
            }
        })
        .filter(|&c| c > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_gate_counts_the_ancilla() {
        assert!(simulable(13, 14));
        assert!(!simulable(14, 14));
        assert!(simulable(25, 40usize.min(MAX_SIM_QUBITS)));
        assert!(!simulable(26, 40usize.min(MAX_SIM_QUBITS)));
    }

    #[test]
    fn cards_skip_blanks_and_zero() {
        assert_eq!(parse_cards("2, 3,,0,x,8"), vec![2, 3, 8]);
    }
}
