use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};

use rng::ONDRng;
use scss::{permutation::SubsetPermutation, prepare, Subset, SubsetFormat, SubsetGenerator};
use simulator::{
    benchmark, entanglement_profile, output::write_counts_csv, sample_counts, verify,
    MAX_SIM_QUBITS,
};
use tn::truncation::Truncation;

/// Semi-classical subset state preparation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of work qubits (one ancilla is added)
    #[arg(long, short = 'n', default_value_t = 5)]
    num_qubits: usize,

    /// Target subset, comma-separated (default: powers of two)
    #[arg(long)]
    subset: Option<String>,

    /// Encoding of --subset elements
    #[arg(long, value_enum, default_value_t = Format::Decimal)]
    format: Format,

    /// Expected cardinality; with --random, the number of elements to draw
    #[arg(long)]
    card: Option<usize>,

    /// Draw a random subset of size --card
    #[arg(long)]
    random: bool,

    /// What to do with the circuit
    #[arg(long, value_enum, default_value_t = Mode::Plan)]
    mode: Mode,

    /// Number of measurement shots for --mode sample
    #[arg(long, default_value_t = 1000)]
    shots: usize,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "default-seed")]
    seed: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Output path: CSV counts for sample, circuit JSON for json
    #[arg(long)]
    out: Option<String>,

    /// Time construction and simulation of a random instance
    #[arg(long)]
    benchmark: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Plan,
    Verify,
    Sample,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Decimal,
    Binary,
}

impl From<Format> for SubsetFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Decimal => SubsetFormat::Decimal,
            Format::Binary => SubsetFormat::Binary,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build Rayon thread pool")?;
    }

    if args.benchmark {
        let card = args.card.unwrap_or(args.num_qubits);
        let report = benchmark(args.num_qubits, card, &args.seed)?;
        println!(
            "benchmark: n={} card={} ops={} build={:.3}s simulate={:.3}s fidelity={:.12}",
            report.num_qubits,
            report.card,
            report.ops,
            report.build_secs,
            report.sim_secs,
            report.fidelity
        );
        return Ok(());
    }

    let subset = load_subset(&args)?;
    tracing::info!(subset = %subset, "target subset");
    let prep = prepare(args.num_qubits, &subset)?;

    match args.mode {
        Mode::Plan => {
            println!("{}", prep.summary());
            println!("subset (binary): {:?}", subset.to_binary_strings());
            println!("angles: {:?}", prep.angles);
            println!("mapping: {}", SubsetPermutation::new(&subset));
            println!("cycles: {:?}", prep.cycles);
            print!("{}", prep.circuit);
        }
        Mode::Verify => {
            require_simulable(args.num_qubits)?;
            let v = verify(&prep)?;
            let profile = entanglement_profile(&v.state, Truncation::exact())?;
            println!("{}", prep.summary());
            println!("fidelity = {:.12}", v.fidelity);
            println!("ancilla weight = {:.3e}", v.ancilla_weight);
            println!("max amplitude error = {:.3e}", v.max_amplitude_error);
            println!("support = {:?}", v.support);
            println!("bond dims = {:?}", profile.bond_dims);
            println!("max entropy = {:.6} bits", profile.max_entropy());
            if !v.is_exact(1e-9) {
                bail!("prepared state does not match the target subset state");
            }
        }
        Mode::Sample => {
            require_simulable(args.num_qubits)?;
            let v = verify(&prep)?;
            let counts = sample_counts(&v.state, args.shots, &args.seed);
            for (x, c) in &counts {
                println!(
                    "{:0width$b}  {:>8}",
                    x,
                    c,
                    width = args.num_qubits + 1
                );
            }
            if let Some(path) = &args.out {
                write_counts_csv(path, &counts, args.num_qubits + 1)
                    .with_context(|| format!("failed to write CSV to {}", path))?;
            }
        }
        Mode::Json => {
            let doc = serde_json::json!({
                "num_qubits": args.num_qubits,
                "ancilla": prep.ancilla(),
                "subset": subset.elements(),
                "angles": prep.angles,
                "mapping": prep.mapping,
                "cycles": prep.cycles,
                "stats": prep.circuit.stats(),
                "circuit": prep.circuit,
            });
            let text = serde_json::to_string_pretty(&doc)?;
            match &args.out {
                Some(path) => std::fs::write(path, text)
                    .with_context(|| format!("failed to write JSON to {}", path))?,
                None => println!("{}", text),
            }
        }
    }

    Ok(())
}

fn load_subset(args: &Args) -> anyhow::Result<Subset> {
    let subset = if args.random {
        let card = args.card.context("--random needs --card")?;
        let mut rng = ONDRng::new(args.seed.as_bytes());
        SubsetGenerator::new(args.num_qubits, card).random(&mut rng)?
    } else if let Some(text) = &args.subset {
        Subset::parse(args.num_qubits, text, args.format.into())?
    } else {
        SubsetGenerator::new(args.num_qubits, args.num_qubits).powers_of_two()?
    };

    if let Some(card) = args.card {
        if card != subset.cardinality() {
            bail!(
                "cardinality mismatch: --card {} but the subset has {} elements",
                card,
                subset.cardinality()
            );
        }
    }
    Ok(subset)
}

fn require_simulable(num_qubits: usize) -> anyhow::Result<()> {
    if num_qubits + 1 > MAX_SIM_QUBITS {
        bail!(
            "{} work qubits plus ancilla exceed the simulation limit of {}",
            num_qubits,
            MAX_SIM_QUBITS
        );
    }
    Ok(())
}
