use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub fn write_counts_csv(
    path: &str,
    counts: &BTreeMap<u64, usize>,
    num_qubits: usize,
) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "state,bits,count")?;
    for (state, count) in counts {
        writeln!(f, "{},{:0width$b},{}", state, state, count, width = num_qubits)?;
    }
    f.flush()
}

pub fn write_rows_csv(path: &str, header: &str, rows: &[Vec<String>]) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "{}", header)?;
    for row in rows {
        writeln!(f, "{}", row.join(","))?;
    }
    f.flush()
}
