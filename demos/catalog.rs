use std::f64::consts::PI;
use qgate_catalog::{ Gate, TargetedQubits };

// print every gate in the catalog along with its matrix, then check a few
// algebraic identities between them
fn main() -> anyhow::Result<()> {
    let labels = [
        "I", "H", "X", "Y", "Z", "Phase(0.5)", "S", "T", "Measure",
        "CNOT", "Swap", "CZ", "CPhase(0.5)",
        "Toffoli", "CSwap",
    ];
    for label in labels.into_iter() {
        let gate: Gate = label.parse()?;
        println!("{} ({} qubit(s))", gate, gate.targeted_qubits());
        match gate.matrix() {
            Some(m) => {
                println!("{:.3}", m);
                println!("unitary: {}", m.is_unitary(None));
                println!("permutation: {}", m.is_permutation());
            },
            None => { println!("(measurement: no matrix)"); },
        }
        println!();
    }

    let cz = Gate::cz();
    let cphase = Gate::cphase(PI);
    println!("CPhase(π) == CZ: {}", cz.matrix() == cphase.matrix());

    let s = Gate::s();
    let phase = Gate::phase_frac(1, 4)?;
    println!("Phase(2π/4) == S: {}", s.matrix() == phase.matrix());

    let t = Gate::t();
    let t_inv = t.inv().ok_or_else(|| anyhow::anyhow!("T has no inverse"))?;
    println!("T† = {}: inverse of T: {}", t_inv, t.is_inv(&t_inv));
    Ok(())
}
